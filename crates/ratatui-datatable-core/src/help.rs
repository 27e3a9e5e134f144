use crate::bindings::Binding;
use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

#[derive(Clone, Debug)]
pub struct HelpBarOptions {
    pub style: Style,
    pub key_style: Style,
    pub separator: String,
    pub space: String,
}

impl Default for HelpBarOptions {
    fn default() -> Self {
        Self {
            style: Style::default(),
            key_style: Style::default(),
            separator: " • ".to_string(),
            space: " ".to_string(),
        }
    }
}

/// One-line `key desc • key desc` summary of a set of [`Binding`]s.
#[derive(Clone, Debug, Default)]
pub struct HelpBar {
    bindings: Vec<Binding>,
    options: HelpBarOptions,
}

impl HelpBar {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self {
            bindings,
            options: HelpBarOptions::default(),
        }
    }

    pub fn with_options(bindings: Vec<Binding>, options: HelpBarOptions) -> Self {
        Self { bindings, options }
    }

    pub fn set_bindings(&mut self, bindings: Vec<Binding>) {
        self.bindings = bindings;
    }

    pub fn render_ref(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let style = theme.text_muted.patch(self.options.style);
        let key_style = theme.accent.patch(self.options.key_style);
        let spans = self.to_spans(style, key_style);
        buf.set_style(area, style);
        render::render_spans_clipped(area.x, area.y, 0, area.width, buf, &spans, style);
    }

    fn to_spans(&self, style: Style, key_style: Style) -> Vec<Span<'static>> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, b) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(self.options.separator.clone(), style));
            }
            spans.push(Span::styled(b.help_key.clone(), key_style));
            spans.push(Span::styled(self.options.space.clone(), style));
            spans.push(Span::styled(b.help_desc.clone(), style));
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings;

    #[test]
    fn help_bar_renders_narrow_width() {
        let bindings = vec![Binding::new("q", "quit", vec![bindings::key_char('q')])];
        let hb = HelpBar::new(bindings);
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        hb.render_ref(Rect::new(0, 0, 3, 1), &mut buf, &Theme::default());
        assert_eq!(buf[(0u16, 0u16)].symbol(), "q");
    }

    #[test]
    fn help_bar_joins_entries() {
        let hb = HelpBar::new(vec![
            Binding::new("/", "search", vec![]),
            Binding::new("q", "quit", vec![]),
        ]);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        hb.render_ref(Rect::new(0, 0, 20, 1), &mut buf, &Theme::default());
        let text: String = (0..20u16).map(|x| buf[(x, 0u16)].symbol().to_string()).collect();
        assert_eq!(text.trim_end(), "/ search • q quit");
    }
}
