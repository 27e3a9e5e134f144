use ratatui::style::Style;

/// Semantic styles shared by the widgets. Option structs patch their own styles on top.
#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub accent: Style,
    pub success: Style,
    pub warning: Style,
    pub danger: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            accent: Style::default().cyan(),
            success: Style::default().green(),
            warning: Style::default().yellow(),
            danger: Style::default().red(),
        }
    }
}
