use crate::bindings::Binding;
use crate::bindings::TableBindings;
use crate::bindings::TableCommand;
use crate::column::Column;
use crate::engine::TableEngine;
use crate::engine::TableOptions;
use crate::engine::TableView;
use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::pagination::PageControls;
use crate::pagination::page_size_label;
use crate::record::Record;
use crate::render;
use crate::search_input::SearchInput;
use crate::search_input::SearchInputAction;
use crate::search_input::SearchInputOptions;
use crate::theme::Theme;
use crate::viewport::ViewportState;
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataTableAction {
    None,
    Redraw,
    SearchChanged,
    SortChanged,
    PageChanged,
    PageSizeChanged,
    /// A row was activated (`Enter` or click). Carries the record's index in the caller's list.
    RowActivated(usize),
}

/// Which part of the table receives key events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Table,
    Search,
}

/// Options for [`DataTableView`].
#[derive(Clone, Debug)]
pub struct DataTableViewOptions {
    pub title: Option<String>,
    pub show_header: bool,
    pub show_scrollbar: bool,
    pub col_gap: u16,
    /// Upper bound for the search box width, prefix included.
    pub search_width: u16,
    pub empty_text: String,
    pub style: Style,
    pub title_style: Style,
    pub header_style: Style,
    pub grid_line_style: Style,
    pub cursor_style: Style,
    pub search_style: Style,
    pub scrollbar_style: Style,
}

impl Default for DataTableViewOptions {
    fn default() -> Self {
        Self {
            title: None,
            show_header: true,
            show_scrollbar: true,
            col_gap: 1,
            search_width: 32,
            empty_text: "No results".to_string(),
            style: Style::default(),
            title_style: Style::default().add_modifier(Modifier::BOLD),
            header_style: Style::default().add_modifier(Modifier::BOLD),
            grid_line_style: Style::default(),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            search_style: Style::default(),
            scrollbar_style: Style::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PageTarget {
    Previous,
    Next,
    Page(usize),
}

/// Screen regions from the last render, used for mouse hit-testing.
#[derive(Clone, Debug, Default)]
struct HitAreas {
    search: Option<Rect>,
    page_size: Option<Rect>,
    header: Option<Rect>,
    body: Rect,
    /// Absolute `(x, width)` per column.
    columns: Vec<(u16, u16)>,
    buttons: Vec<(Rect, PageTarget)>,
}

#[derive(Clone, Copy)]
struct TableStyles {
    base: Style,
    title: Style,
    header: Style,
    grid_line: Style,
    cursor: Style,
    muted: Style,
    accent: Style,
    search: Style,
}

type RowCallback<R> = Box<dyn FnMut(usize, &R)>;

/// A searchable, sortable, paginated table widget.
///
/// The widget owns a [`TableEngine`] and adds keyboard/mouse handling and rendering on top of it.
/// Drive it from your app loop with [`DataTableView::handle_event`] and
/// [`DataTableView::render`]; rows scroll inside the body when a page is taller than the area.
pub struct DataTableView<R> {
    /// Vertical scroll of the current page's rows.
    pub state: ViewportState,
    engine: TableEngine<R>,
    options: DataTableViewOptions,
    bindings: TableBindings,
    search: SearchInput,
    focus: Focus,
    cursor: Option<usize>,
    column_cursor: usize,
    on_row_activate: Option<RowCallback<R>>,
    hit: HitAreas,
}

impl<R: Record> DataTableView<R> {
    pub fn new(records: impl Into<Arc<[R]>>, columns: Vec<Column<R>>) -> Self {
        Self::from_engine(TableEngine::new(records, columns))
    }

    pub fn with_options(
        records: impl Into<Arc<[R]>>,
        columns: Vec<Column<R>>,
        table_options: TableOptions,
        options: DataTableViewOptions,
    ) -> Self {
        let mut v = Self::from_engine(TableEngine::with_options(records, columns, table_options));
        v.set_options(options);
        v
    }

    pub fn from_engine(engine: TableEngine<R>) -> Self {
        let mut v = Self {
            state: ViewportState::default(),
            engine,
            options: DataTableViewOptions::default(),
            bindings: TableBindings::default(),
            search: SearchInput::new(),
            focus: Focus::Table,
            cursor: None,
            column_cursor: 0,
            on_row_activate: None,
            hit: HitAreas::default(),
        };
        let term = v.engine.state().search_term.clone();
        v.search.set_text(term);
        v.sync_cursor();
        v
    }

    pub fn engine(&self) -> &TableEngine<R> {
        &self.engine
    }

    /// Direct access to the engine. The cursor is re-synced on the next event or render.
    pub fn engine_mut(&mut self) -> &mut TableEngine<R> {
        &mut self.engine
    }

    pub fn options(&self) -> &DataTableViewOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: DataTableViewOptions) {
        self.search = SearchInput::with_options(SearchInputOptions {
            style: options.search_style,
            ..SearchInputOptions::default()
        });
        self.search.set_text(self.engine.state().search_term.clone());
        self.options = options;
    }

    pub fn bindings(&self) -> &TableBindings {
        &self.bindings
    }

    pub fn set_bindings(&mut self, bindings: TableBindings) {
        self.bindings = bindings;
    }

    /// Help entries for the active key map, for a [`crate::help::HelpBar`].
    pub fn help_bindings(&self) -> Vec<Binding> {
        let mut help = self.bindings.help();
        if !self.engine.options().searchable {
            help.retain(|b| b.help_desc != "search");
        }
        if !self.engine.sorting_enabled() {
            help.retain(|b| b.help_desc != "sort");
        }
        if !self.engine.pagination_enabled() {
            help.retain(|b| b.help_desc != "page" && b.help_desc != "page size");
        }
        help
    }

    /// Replaces the record list (for example after a reload); the current page is re-clamped.
    pub fn set_records(&mut self, records: impl Into<Arc<[R]>>) {
        self.engine.set_records(records);
        self.sync_cursor();
    }

    /// Called with the record's source index and the record when a row is activated.
    pub fn set_on_row_activate<F>(&mut self, f: F)
    where
        F: FnMut(usize, &R) + 'static,
    {
        self.on_row_activate = Some(Box::new(f));
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = if self.engine.options().searchable {
            focus
        } else {
            Focus::Table
        };
    }

    pub fn search_text(&self) -> &str {
        self.search.text()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search.set_text(text);
        self.apply_search();
    }

    /// Cursor row within the current page.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Source index of the record under the cursor.
    pub fn cursor_record_index(&self) -> Option<usize> {
        let row = self.cursor?;
        self.engine.view().rows.get(row).map(|r| r.index)
    }

    pub fn column_cursor(&self) -> usize {
        self.column_cursor
    }

    pub fn page_controls(&self) -> PageControls {
        self.engine.page_controls()
    }

    /// Terminal cursor position while the search box is focused.
    pub fn cursor_position(&self) -> Option<Position> {
        if self.focus != Focus::Search {
            return None;
        }
        let area = self.hit.search?;
        let input = search_text_area(area);
        self.search
            .cursor_pos(input)
            .map(|(x, y)| Position::new(x, y))
    }

    pub fn handle_event(&mut self, event: InputEvent) -> DataTableAction {
        self.sync_cursor();
        match event {
            InputEvent::Key(key) => match self.focus {
                Focus::Search => self.handle_search_key(key),
                Focus::Table => self.handle_table_key(key),
            },
            InputEvent::Paste(s) => {
                if !self.engine.options().searchable {
                    return DataTableAction::None;
                }
                self.focus = Focus::Search;
                match self.search.input(InputEvent::Paste(s)) {
                    SearchInputAction::Changed => self.apply_search(),
                    _ => DataTableAction::Redraw,
                }
            }
            InputEvent::Mouse(m) => self.handle_mouse(m),
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.hit = HitAreas::default();
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.sync_cursor();

        let styles = self.styles(theme);
        buf.set_style(area, styles.base);

        let controls = self.engine.page_controls();
        let has_toolbar = self.options.title.is_some()
            || self.engine.options().searchable
            || self.engine.pagination_enabled();

        let mut y = area.y;
        let bottom = area.y + area.height;
        let toolbar = take_row(&mut y, bottom, area, has_toolbar);
        let header = take_row(&mut y, bottom, area, self.options.show_header);
        let footer = if controls.visible && bottom > y {
            Some(Rect::new(area.x, bottom - 1, area.width, 1))
        } else {
            None
        };
        let body_bottom = footer.map(|f| f.y).unwrap_or(bottom);
        let body = Rect::new(area.x, y, area.width, body_bottom.saturating_sub(y));

        let mut hit = HitAreas::default();
        if let Some(r) = toolbar {
            self.render_toolbar(r, buf, &styles, &mut hit);
        }

        let rows_len = if controls.range_end == 0 {
            0
        } else {
            controls.range_end + 1 - controls.range_start
        };
        let (content_area, scrollbar_x) =
            if self.options.show_scrollbar && rows_len > body.height as usize && body.width >= 2 {
                (
                    Rect::new(body.x, body.y, body.width - 1, body.height),
                    Some(body.x + body.width - 1),
                )
            } else {
                (body, None)
            };

        let header_area = header.map(|h| Rect::new(h.x, h.y, content_area.width, 1));
        let widths: Vec<Option<u16>> = self.engine.columns().iter().map(|c| c.width).collect();
        let layout = column_layout(&widths, content_area.width, self.options.col_gap);
        hit.columns = layout
            .iter()
            .map(|(x, w)| (content_area.x + x, *w))
            .collect();
        hit.header = header_area;
        hit.body = content_area;

        self.state.set_viewport(content_area.width, content_area.height);
        self.state
            .set_content(content_area.width as u32, rows_len as u32);
        if let Some(c) = self.cursor {
            self.state.ensure_visible_y(c as u32);
        }

        if let Some(h) = header_area {
            self.render_header(h, buf, &styles, &layout);
        }

        let view = self.engine.view();
        render_body(
            &BodyContext {
                area: content_area,
                view: &view,
                columns: self.engine.columns(),
                layout: &layout,
                scroll_y: self.state.y,
                cursor: self.cursor,
                col_gap: self.options.col_gap,
                empty_text: &self.options.empty_text,
            },
            buf,
            &styles,
        );

        if let Some(sb_x) = scrollbar_x {
            render::render_scrollbar(
                Rect::new(sb_x, body.y, 1, body.height),
                buf,
                &self.state,
                styles.muted.patch(self.options.scrollbar_style),
            );
        }

        if let Some(f) = footer {
            render_footer(f, buf, &controls, &styles, &mut hit);
        }

        self.hit = hit;
    }

    fn styles(&self, theme: &Theme) -> TableStyles {
        let o = &self.options;
        let base = if o.style == Style::default() {
            theme.text_primary
        } else {
            o.style
        };
        TableStyles {
            base,
            title: base.patch(o.title_style),
            header: base.patch(theme.accent).patch(o.header_style),
            grid_line: if o.grid_line_style == Style::default() {
                theme.text_muted
            } else {
                o.grid_line_style
            },
            cursor: base.patch(o.cursor_style),
            muted: theme.text_muted,
            accent: theme.accent,
            search: base.patch(o.search_style),
        }
    }

    fn render_toolbar(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        styles: &TableStyles,
        hit: &mut HitAreas,
    ) {
        let mut right = area.x + area.width;

        if self.engine.pagination_enabled() {
            let label = format!("[{}]", page_size_label(self.engine.state().page_size));
            let w = render::str_width(&label) as u16;
            if w < area.width {
                right -= w;
                let r = Rect::new(right, area.y, w, 1);
                render::render_str_clipped(r.x, r.y, 0, r.width, buf, &label, styles.muted);
                hit.page_size = Some(r);
                right = right.saturating_sub(1);
            }
        }

        if self.engine.options().searchable {
            let avail = right.saturating_sub(area.x);
            let w = self.options.search_width.min(avail / 2).min(avail);
            if w >= 4 {
                right -= w;
                let r = Rect::new(right, area.y, w, 1);
                let focused = self.focus == Focus::Search;
                let prefix_style = if focused { styles.accent } else { styles.muted };
                render::render_str_clipped(r.x, r.y, 0, 2, buf, "/ ", prefix_style);
                let input_area = search_text_area(r);
                if !focused && self.search.is_empty() {
                    buf.set_style(input_area, styles.muted);
                    render::render_str_clipped(
                        input_area.x,
                        input_area.y,
                        0,
                        input_area.width,
                        buf,
                        "Search...",
                        styles.muted,
                    );
                } else {
                    buf.set_style(input_area, styles.search);
                    self.search.render_ref(input_area, buf);
                }
                hit.search = Some(r);
                right = right.saturating_sub(1);
            }
        }

        if let Some(title) = &self.options.title {
            let w = right.saturating_sub(area.x);
            let title = render::truncate_with_ellipsis(title, w);
            render::render_str_clipped(area.x, area.y, 0, w, buf, &title, styles.title);
        }
    }

    fn render_header(
        &self,
        area: Rect,
        buf: &mut Buffer,
        styles: &TableStyles,
        layout: &[(u16, u16)],
    ) {
        buf.set_style(area, styles.header);
        let columns = self.engine.columns();
        for (i, (col, (x, w))) in columns.iter().zip(layout.iter().copied()).enumerate() {
            if w == 0 {
                continue;
            }
            let label = match self.engine.sort_indicator(&col.key) {
                Some(dir) => format!("{} {}", col.label, dir.arrow()),
                None => col.label.clone(),
            };
            let label = render::truncate_with_ellipsis(&label, w);
            let style = if i == self.column_cursor && self.focus == Focus::Table {
                styles.header.add_modifier(Modifier::UNDERLINED)
            } else {
                styles.header
            };
            render::render_str_clipped(area.x + x, area.y, 0, w, buf, &label, style);
            draw_separator(buf, area, layout, i, self.options.col_gap, styles.grid_line);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> DataTableAction {
        match self.search.input(InputEvent::Key(key)) {
            SearchInputAction::Changed => self.apply_search(),
            SearchInputAction::Submitted => {
                self.focus = Focus::Table;
                DataTableAction::Redraw
            }
            SearchInputAction::Cancelled => {
                self.focus = Focus::Table;
                if self.engine.state().search_term.is_empty() {
                    DataTableAction::Redraw
                } else {
                    self.apply_search()
                }
            }
            SearchInputAction::None => DataTableAction::None,
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) -> DataTableAction {
        match key.code {
            KeyCode::Char(c @ '1'..='9') if key.modifiers.is_plain() => {
                return self.sort_by_column(c as usize - '1' as usize);
            }
            _ => {}
        }

        let Some(cmd) = self.bindings.command_for(&key) else {
            return DataTableAction::None;
        };
        match cmd {
            TableCommand::FocusSearch => {
                if !self.engine.options().searchable {
                    return DataTableAction::None;
                }
                self.focus = Focus::Search;
                DataTableAction::Redraw
            }
            TableCommand::CursorUp => self.move_cursor_by(-1),
            TableCommand::CursorDown => self.move_cursor_by(1),
            TableCommand::PreviousPage => {
                let changed = self.engine.previous_page();
                self.page_moved(changed)
            }
            TableCommand::NextPage => {
                let changed = self.engine.next_page();
                self.page_moved(changed)
            }
            TableCommand::FirstPage => {
                let changed = self.engine.first_page();
                self.page_moved(changed)
            }
            TableCommand::LastPage => {
                let changed = self.engine.last_page();
                self.page_moved(changed)
            }
            TableCommand::PreviousColumn => self.move_column_cursor(false),
            TableCommand::NextColumn => self.move_column_cursor(true),
            TableCommand::SortColumn => self.sort_by_column(self.column_cursor),
            TableCommand::PageSizeUp => self.cycle_page_size(true),
            TableCommand::PageSizeDown => self.cycle_page_size(false),
            TableCommand::Activate => match self.cursor {
                Some(row) => self.activate_row(row),
                None => DataTableAction::None,
            },
        }
    }

    fn handle_mouse(&mut self, m: MouseEvent) -> DataTableAction {
        let pos = Position::new(m.x, m.y);
        match m.kind {
            MouseEventKind::ScrollDown if self.hit.body.contains(pos) => self.move_cursor_by(1),
            MouseEventKind::ScrollUp if self.hit.body.contains(pos) => self.move_cursor_by(-1),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(pos),
            _ => DataTableAction::None,
        }
    }

    fn handle_click(&mut self, pos: Position) -> DataTableAction {
        if self.hit.search.is_some_and(|r| r.contains(pos)) {
            self.focus = Focus::Search;
            return DataTableAction::Redraw;
        }
        let was_searching = self.focus == Focus::Search;
        self.focus = Focus::Table;

        if self.hit.page_size.is_some_and(|r| r.contains(pos)) {
            return self.cycle_page_size(true);
        }
        if let Some(target) = self
            .hit
            .buttons
            .iter()
            .find(|(r, _)| r.contains(pos))
            .map(|(_, t)| *t)
        {
            let changed = match target {
                PageTarget::Previous => self.engine.previous_page(),
                PageTarget::Next => self.engine.next_page(),
                PageTarget::Page(p) => self.engine.set_page(p),
            };
            return self.page_moved(changed);
        }
        if self.hit.header.is_some_and(|r| r.contains(pos)) {
            let col = self
                .hit
                .columns
                .iter()
                .position(|(x, w)| pos.x >= *x && pos.x < x + w);
            if let Some(col) = col {
                self.column_cursor = col;
                let action = self.sort_by_column(col);
                if action == DataTableAction::None {
                    return DataTableAction::Redraw;
                }
                return action;
            }
        }
        if self.hit.body.contains(pos) {
            let row = self.state.y as usize + (pos.y - self.hit.body.y) as usize;
            return self.activate_row(row);
        }
        if was_searching {
            DataTableAction::Redraw
        } else {
            DataTableAction::None
        }
    }

    fn apply_search(&mut self) -> DataTableAction {
        self.engine.set_search_term(self.search.text());
        self.reset_rows();
        DataTableAction::SearchChanged
    }

    fn sort_by_column(&mut self, idx: usize) -> DataTableAction {
        let Some(key) = self.engine.columns().get(idx).map(|c| c.key.clone()) else {
            return DataTableAction::None;
        };
        if self.engine.set_sort(&key) {
            self.column_cursor = idx;
            self.sync_cursor();
            DataTableAction::SortChanged
        } else {
            DataTableAction::None
        }
    }

    fn cycle_page_size(&mut self, forward: bool) -> DataTableAction {
        if self.engine.cycle_page_size(forward) {
            self.reset_rows();
            DataTableAction::PageSizeChanged
        } else {
            DataTableAction::None
        }
    }

    fn page_moved(&mut self, changed: bool) -> DataTableAction {
        if !changed {
            return DataTableAction::None;
        }
        self.reset_rows();
        DataTableAction::PageChanged
    }

    fn move_cursor_by(&mut self, delta: i64) -> DataTableAction {
        let len = self.engine.view().rows.len();
        if len == 0 {
            return DataTableAction::None;
        }
        let cur = self.cursor.unwrap_or(0) as i64;
        let next = (cur + delta).clamp(0, len as i64 - 1) as usize;
        if Some(next) == self.cursor {
            return DataTableAction::None;
        }
        self.cursor = Some(next);
        self.state.ensure_visible_y(next as u32);
        DataTableAction::Redraw
    }

    fn move_column_cursor(&mut self, forward: bool) -> DataTableAction {
        let n = self.engine.columns().len();
        if n == 0 {
            return DataTableAction::None;
        }
        self.column_cursor = if forward {
            (self.column_cursor + 1) % n
        } else {
            (self.column_cursor + n - 1) % n
        };
        DataTableAction::Redraw
    }

    fn activate_row(&mut self, row: usize) -> DataTableAction {
        let view = self.engine.view();
        let Some(hit) = view.rows.get(row).copied() else {
            return DataTableAction::None;
        };
        self.cursor = Some(row);
        tracing::debug!(index = hit.index, "row activated");
        if let Some(cb) = self.on_row_activate.as_mut() {
            cb(hit.index, hit.record);
        }
        DataTableAction::RowActivated(hit.index)
    }

    fn reset_rows(&mut self) {
        self.cursor = None;
        self.state.to_top();
        self.sync_cursor();
    }

    fn sync_cursor(&mut self) {
        let len = self.engine.view().rows.len();
        self.cursor = if len == 0 {
            None
        } else {
            Some(self.cursor.unwrap_or(0).min(len - 1))
        };
        let cols = self.engine.columns().len();
        self.column_cursor = self.column_cursor.min(cols.saturating_sub(1));
        if !self.engine.options().searchable {
            self.focus = Focus::Table;
        }
    }
}

struct BodyContext<'a, R> {
    area: Rect,
    view: &'a TableView<'a, R>,
    columns: &'a [Column<R>],
    layout: &'a [(u16, u16)],
    scroll_y: u32,
    cursor: Option<usize>,
    col_gap: u16,
    empty_text: &'a str,
}

fn render_body<R: Record>(ctx: &BodyContext<'_, R>, buf: &mut Buffer, styles: &TableStyles) {
    let area = ctx.area;
    if area.width == 0 || area.height == 0 {
        return;
    }
    if ctx.view.rows.is_empty() {
        render::render_str_clipped(
            area.x,
            area.y,
            0,
            area.width,
            buf,
            ctx.empty_text,
            styles.muted,
        );
        return;
    }

    for dy in 0..area.height {
        let i = ctx.scroll_y as usize + dy as usize;
        let Some(row) = ctx.view.rows.get(i) else {
            break;
        };
        let y = area.y + dy;
        let line_area = Rect::new(area.x, y, area.width, 1);
        let style = if ctx.cursor == Some(i) {
            styles.cursor
        } else {
            styles.base
        };
        buf.set_style(line_area, style);

        for (c, (col, (x, w))) in ctx
            .columns
            .iter()
            .zip(ctx.layout.iter().copied())
            .enumerate()
        {
            if w == 0 {
                continue;
            }
            let line = col.display(row.record);
            let line_w = line.width().min(w as usize) as u16;
            let dx = match line.alignment {
                Some(Alignment::Right) => w - line_w,
                Some(Alignment::Center) => (w - line_w) / 2,
                _ => 0,
            };
            render::render_spans_clipped(
                area.x + x + dx,
                y,
                0,
                w - dx,
                buf,
                &line.spans,
                style.patch(line.style),
            );
            draw_separator(buf, line_area, ctx.layout, c, ctx.col_gap, styles.grid_line);
        }
    }
}

fn render_footer(
    area: Rect,
    buf: &mut Buffer,
    controls: &PageControls,
    styles: &TableStyles,
    hit: &mut HitAreas,
) {
    let buttons = page_buttons(controls, area.width / 2);
    let buttons_w: u16 = buttons
        .iter()
        .map(|(label, _, _)| render::str_width(label) as u16 + 1)
        .sum();

    let summary_w = area.width.saturating_sub(buttons_w);
    let summary = render::truncate_with_ellipsis(&controls.summary(), summary_w);
    render::render_str_clipped(area.x, area.y, 0, summary_w, buf, &summary, styles.muted);

    let mut x = area.x + area.width.saturating_sub(buttons_w) + 1;
    for (label, target, enabled) in buttons {
        let w = render::str_width(&label) as u16;
        if x + w > area.x + area.width {
            break;
        }
        let style = if target == PageTarget::Page(controls.current) {
            styles.accent.add_modifier(Modifier::BOLD)
        } else if enabled {
            styles.base
        } else {
            styles.muted
        };
        render::render_str_clipped(x, area.y, 0, w, buf, &label, style);
        if enabled {
            hit.buttons.push((Rect::new(x, area.y, w, 1), target));
        }
        x += w + 1;
    }
}

/// Previous/next and numbered page buttons, narrowed to a window around the current page when
/// they do not fit in `max_w` columns.
fn page_buttons(controls: &PageControls, max_w: u16) -> Vec<(String, PageTarget, bool)> {
    let number = |p: usize| {
        if p == controls.current {
            format!("[{p}]")
        } else {
            format!(" {p} ")
        }
    };

    let prev = ("‹ Prev".to_string(), PageTarget::Previous, controls.has_previous);
    let next = ("Next ›".to_string(), PageTarget::Next, controls.has_next);
    let fixed = render::str_width(&prev.0) + render::str_width(&next.0) + 2;
    let slot = number(controls.total_pages).chars().count() + 1;
    let budget = (max_w as usize).saturating_sub(fixed);
    let fit = (budget / slot).clamp(1, controls.pages.len().max(1));

    let total = controls.total_pages;
    let mut start = controls.current.saturating_sub(fit / 2).max(1);
    if start + fit > total + 1 {
        start = (total + 1).saturating_sub(fit).max(1);
    }

    let mut out = vec![prev];
    for p in start..(start + fit).min(total + 1) {
        out.push((number(p), PageTarget::Page(p), p != controls.current));
    }
    out.push(next);
    out
}

fn draw_separator(
    buf: &mut Buffer,
    area: Rect,
    layout: &[(u16, u16)],
    col: usize,
    gap: u16,
    style: Style,
) {
    if gap == 0 || col + 1 >= layout.len() {
        return;
    }
    let (x, w) = layout[col];
    let sep_x = x.saturating_add(w);
    if sep_x >= area.width || layout[col + 1].1 == 0 {
        return;
    }
    buf.set_stringn(area.x + sep_x, area.y, "│", 1, style);
}

/// Splits `width` between columns: fixed widths first, the rest shared by columns without one.
/// Returns `(x, width)` pairs relative to the table's left edge, clipped to `width`.
fn column_layout(widths: &[Option<u16>], width: u16, gap: u16) -> Vec<(u16, u16)> {
    if widths.is_empty() {
        return Vec::new();
    }
    let gaps = gap.saturating_mul((widths.len() - 1) as u16);
    let fixed = widths
        .iter()
        .flatten()
        .fold(0u16, |acc, w| acc.saturating_add(*w));
    let auto = widths.iter().filter(|w| w.is_none()).count() as u16;
    let remaining = width.saturating_sub(fixed).saturating_sub(gaps);
    let (share, mut extra) = if auto > 0 {
        (remaining / auto, remaining % auto)
    } else {
        (0, 0)
    };

    let mut x = 0u16;
    let mut out = Vec::with_capacity(widths.len());
    for w in widths {
        let w = match w {
            Some(w) => *w,
            None => {
                let bonus = if extra > 0 {
                    extra -= 1;
                    1
                } else {
                    0
                };
                (share + bonus).max(1)
            }
        };
        out.push((x.min(width), w.min(width.saturating_sub(x))));
        x = x.saturating_add(w).saturating_add(gap);
    }
    out
}

fn search_text_area(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(2),
        area.y,
        area.width.saturating_sub(2),
        1,
    )
}

fn take_row(y: &mut u16, bottom: u16, area: Rect, wanted: bool) -> Option<Rect> {
    if !wanted || *y >= bottom {
        return None;
    }
    let r = Rect::new(area.x, *y, area.width, 1);
    *y += 1;
    Some(r)
}
