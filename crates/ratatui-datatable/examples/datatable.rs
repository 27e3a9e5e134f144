use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui_datatable::crossterm_input::input_event_from_crossterm;
use ratatui_datatable::prelude::*;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const NAMES: [&str; 8] = [
    "Jane Cooper",
    "Cody Fisher",
    "Esther Howard",
    "Jenny Wilson",
    "Kristin Watson",
    "Cameron Williamson",
    "Courtney Henry",
    "Theresa Webb",
];
const ROLES: [&str; 3] = ["User", "Admin", "Moderator"];
const STATUSES: [&str; 3] = ["active", "inactive", "pending"];

fn main() -> io::Result<()> {
    init_logging()?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::default();
    let mut table = DataTableView::with_options(
        sample_users(),
        columns(&theme),
        TableOptions::default(),
        DataTableViewOptions {
            title: Some("Users".to_string()),
            ..Default::default()
        },
    );

    let status = Rc::new(RefCell::new(String::from("Enter or click opens a row")));
    let sink = status.clone();
    table.set_on_row_activate(move |index, row: &Row| {
        let name = row.get("name").map(|v| v.to_string()).unwrap_or_default();
        *sink.borrow_mut() = format!("Opened #{index}: {name}");
    });

    let res = run(&mut terminal, &theme, &mut table, &status);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res
}

/// Logs go to `datatable.log` when `RUST_LOG` is set; the terminal is busy drawing the table.
fn init_logging() -> io::Result<()> {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return Ok(());
    };
    let file = std::fs::File::create("datatable.log")?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn sample_users() -> Vec<Row> {
    (0..57)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            let first = name.split(' ').next().unwrap_or(name).to_lowercase();
            Row::new()
                .with("id", i + 1)
                .with("name", name)
                .with("email", format!("{first}{}@example.com", i + 1))
                .with("status", STATUSES[i % STATUSES.len()])
                .with("role", ROLES[i % ROLES.len()])
                .with("logins", (i * 37) % 250)
        })
        .collect()
}

fn columns(theme: &Theme) -> Vec<Column<Row>> {
    let success = theme.success;
    let danger = theme.danger;
    let warning = theme.warning;
    vec![
        Column::new("id", "#").with_sortable(true).with_width(4),
        Column::new("name", "Name").with_sortable(true),
        Column::new("email", "Email").with_sortable(true),
        Column::new("status", "Status")
            .with_width(10)
            .with_render(move |value, _| {
                let text = value.map(|v| v.to_string()).unwrap_or_default();
                let style = match text.as_str() {
                    "active" => success,
                    "inactive" => danger,
                    _ => warning,
                };
                Line::from(Span::styled(format!("● {text}"), style))
            }),
        Column::new("role", "Role").with_sortable(true).with_width(10),
        Column::new("logins", "Logins")
            .with_sortable(true)
            .with_width(7)
            .with_render(|value, _| {
                Line::raw(value.map(|v| v.to_string()).unwrap_or_default()).right_aligned()
            }),
    ]
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    theme: &Theme,
    table: &mut DataTableView<Row>,
    status: &Rc<RefCell<String>>,
) -> io::Result<()> {
    let help = HelpBar::new(table.help_bindings());
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let block = Block::default()
                .title("DataTableView (q quits)")
                .borders(Borders::ALL);
            let inner = block.inner(area);
            f.render_widget(block, area);

            let table_area = Rect::new(
                inner.x,
                inner.y,
                inner.width,
                inner.height.saturating_sub(2),
            );
            let status_area = Rect::new(inner.x, table_area.y + table_area.height, inner.width, 1);
            let help_area = Rect::new(inner.x, status_area.y + 1, inner.width, 1);

            let buf = f.buffer_mut();
            table.render(table_area, buf, theme);
            let span = Span::styled(status.borrow().clone(), theme.text_muted);
            buf.set_span(status_area.x, status_area.y, &span, status_area.width);
            help.render_ref(help_area, buf, theme);

            if let Some(pos) = table.cursor_position() {
                f.set_cursor_position(pos);
            }
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let ev = crossterm::event::read()?;
        if let Event::Key(key) = &ev {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('q') && table.focus() == Focus::Table {
                return Ok(());
            }
        }

        let Some(ev) = input_event_from_crossterm(ev) else {
            continue;
        };
        match table.handle_event(ev) {
            DataTableAction::SearchChanged => {
                let c = table.page_controls();
                *status.borrow_mut() = format!("{} matching users", c.total_filtered);
            }
            DataTableAction::PageSizeChanged => {
                let size = table.engine().state().page_size;
                *status.borrow_mut() = format!("{size} rows per page");
            }
            DataTableAction::RowActivated(_)
            | DataTableAction::PageChanged
            | DataTableAction::SortChanged
            | DataTableAction::Redraw
            | DataTableAction::None => {}
        }
    }
}
