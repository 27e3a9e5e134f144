use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui_datatable::input::KeyCode;
use ratatui_datatable::prelude::*;

fn users() -> Vec<Row> {
    [
        (1, "John Doe", "john@example.com", "active", "Admin"),
        (2, "Jane Smith", "jane@example.com", "inactive", "User"),
        (3, "Bob Johnson", "bob@example.com", "active", "User"),
        (4, "Alice Brown", "alice@example.com", "pending", "User"),
    ]
    .into_iter()
    .map(|(id, name, email, status, role)| {
        Row::new()
            .with("id", id)
            .with("name", name)
            .with("email", email)
            .with("status", status)
            .with("role", role)
    })
    .collect()
}

fn columns() -> Vec<Column<Row>> {
    vec![
        Column::new("name", "Name").with_sortable(true).with_width(12),
        Column::new("email", "Email").with_sortable(true).with_width(18),
        Column::new("status", "Status").with_width(9).with_render(|value, _| {
            let text = value.map(|v| v.to_string()).unwrap_or_default();
            let color = match text.as_str() {
                "active" => Color::Green,
                "inactive" => Color::Red,
                _ => Color::Yellow,
            };
            Line::from(Span::styled(text, color))
        }),
        Column::new("role", "Role").with_sortable(true).with_width(6),
    ]
}

fn render(table: &mut DataTableView<Row>, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    table.render(area, &mut buf, &Theme::default());
    buf
}

fn lines(buf: &Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| {
            let mut s = String::new();
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.trim_end().to_string()
        })
        .collect()
}

fn find(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    lines(buf).iter().enumerate().find_map(|(y, line)| {
        line.find(needle)
            .map(|byte| (line[..byte].chars().count() as u16, y as u16))
    })
}

#[test]
fn renders_header_rows_and_page_size() {
    let mut table = DataTableView::new(users(), columns());
    let buf = render(&mut table, 60, 7);
    let out = lines(&buf);

    assert!(out[0].trim_start().starts_with("/ Search..."), "{out:?}");
    assert!(out[0].ends_with("[10 per page]"), "{out:?}");
    assert_eq!(
        out[1],
        format!("{:<12}│{:<18}│{:<9}│Role", "Name", "Email", "Status")
    );
    assert!(out[2].starts_with(&format!("{:<12}│john@example.com", "John Doe")));
    assert!(out[5].starts_with("Alice Brown"));
    // A single page hides the page controls.
    assert_eq!(out[6], "");
}

#[test]
fn custom_cell_renderer_styles_the_cell() {
    let mut table = DataTableView::new(users(), columns());
    let buf = render(&mut table, 60, 7);
    let (x, y) = find(&buf, "inactive").expect("status cell");
    assert_eq!(buf[(x, y)].fg, Color::Red);
    let (x, y) = find(&buf, "pending").expect("status cell");
    assert_eq!(buf[(x, y)].fg, Color::Yellow);
}

#[test]
fn sorting_by_name_shows_arrow_and_order() {
    let mut table = DataTableView::new(users(), columns());
    assert_eq!(table.handle_event(InputEvent::char('1')), DataTableAction::SortChanged);
    let out = lines(&render(&mut table, 60, 7));
    assert!(out[1].starts_with("Name ↑"), "{out:?}");
    let names: Vec<&str> = out[2..6].iter().map(|l| &l[..11]).collect();
    assert_eq!(
        names,
        ["Alice Brown", "Bob Johnson", "Jane Smith ", "John Doe   "]
    );

    table.handle_event(InputEvent::char('1'));
    let out = lines(&render(&mut table, 60, 7));
    assert!(out[1].starts_with("Name ↓"), "{out:?}");
    assert!(out[2].starts_with("John Doe"));
}

#[test]
fn stable_sort_keeps_source_order_for_ties() {
    let mut table = DataTableView::new(users(), columns());
    table.handle_event(InputEvent::char('4'));
    let indices: Vec<usize> = table.engine().view().rows.iter().map(|r| r.index).collect();
    assert_eq!(indices, [0, 1, 2, 3]);

    table.handle_event(InputEvent::char('4'));
    let indices: Vec<usize> = table.engine().view().rows.iter().map(|r| r.index).collect();
    assert_eq!(indices, [1, 2, 3, 0]);
}

#[test]
fn search_filters_case_insensitively_across_fields() {
    let mut table = DataTableView::new(users(), columns());
    table.handle_event(InputEvent::char('/'));
    for c in "ADMIN".chars() {
        table.handle_event(InputEvent::char(c));
    }
    let out = lines(&render(&mut table, 60, 7));
    assert!(out[0].trim_start().starts_with("/ ADMIN"), "{out:?}");
    assert!(out[2].starts_with("John Doe"));
    assert_eq!(out[3], "");

    table.handle_event(InputEvent::key(KeyCode::Esc));
    table.handle_event(InputEvent::char('/'));
    for c in "example".chars() {
        table.handle_event(InputEvent::char(c));
    }
    assert_eq!(table.engine().total_filtered(), 4);
}

#[test]
fn no_results_message() {
    let mut table = DataTableView::new(users(), columns());
    table.set_search_text("zzz");
    let out = lines(&render(&mut table, 60, 7));
    assert_eq!(out[2], "No results");
}

#[test]
fn footer_shows_summary_and_page_buttons() {
    let rows: Vec<Row> = (1..=25)
        .map(|i| Row::new().with("id", i).with("name", format!("User {i}")))
        .collect();
    let columns = vec![
        Column::new("id", "Id").with_sortable(true).with_width(4),
        Column::new("name", "Name"),
    ];
    let mut table = DataTableView::new(rows, columns);
    table.handle_event(InputEvent::char('l'));

    let out = lines(&render(&mut table, 70, 14));
    let footer = &out[13];
    assert!(
        footer.starts_with("Showing 11 to 20 of 25 results"),
        "{footer:?}"
    );
    assert!(footer.ends_with("‹ Prev  1  [2]  3  Next ›"), "{footer:?}");
    assert!(out[2].starts_with("11"));

    table.handle_event(InputEvent::char('G'));
    let out = lines(&render(&mut table, 70, 14));
    assert!(out[13].starts_with("Showing 21 to 25 of 25 results"));
}

#[test]
fn page_size_selector_cycles_and_resets_page() {
    let rows: Vec<Row> = (1..=60).map(|i| Row::new().with("id", i)).collect();
    let mut table = DataTableView::new(rows, vec![Column::new("id", "Id")]);
    table.handle_event(InputEvent::char('G'));
    assert_eq!(table.engine().state().current_page, 6);

    assert_eq!(table.handle_event(InputEvent::char('+')), DataTableAction::PageSizeChanged);
    let out = lines(&render(&mut table, 50, 30));
    assert!(out[0].ends_with("[25 per page]"), "{out:?}");
    assert_eq!(table.engine().state().current_page, 1);
    assert_eq!(table.page_controls().total_pages, 3);
}

#[test]
fn disabled_pagination_shows_everything() {
    let rows: Vec<Row> = (1..=30).map(|i| Row::new().with("id", i)).collect();
    let mut table = DataTableView::with_options(
        rows,
        vec![Column::new("id", "Id")],
        TableOptions {
            pagination: None,
            ..Default::default()
        },
        DataTableViewOptions::default(),
    );
    assert_eq!(table.engine().view().rows.len(), 30);
    assert!(!table.page_controls().visible);
    assert_eq!(table.handle_event(InputEvent::char('+')), DataTableAction::None);

    // No page controls and no page-size label; the body scrolls with the cursor instead.
    let out = lines(&render(&mut table, 20, 10));
    assert!(!out[0].contains("per page"));
    for _ in 0..15 {
        table.handle_event(InputEvent::key(KeyCode::Down));
    }
    let out = lines(&render(&mut table, 20, 10));
    assert!(out.iter().any(|l| l.starts_with("16")), "{out:?}");
}

#[test]
fn title_and_disabled_search() {
    let mut table = DataTableView::with_options(
        users(),
        columns(),
        TableOptions {
            searchable: false,
            ..Default::default()
        },
        DataTableViewOptions {
            title: Some("Team".to_string()),
            ..Default::default()
        },
    );
    let out = lines(&render(&mut table, 60, 7));
    assert!(out[0].starts_with("Team"));
    assert!(!out[0].contains("Search"));
    assert!(
        table
            .help_bindings()
            .iter()
            .all(|b| b.help_desc != "search")
    );
}

#[test]
fn clicking_a_row_activates_it() {
    let mut table = DataTableView::new(users(), columns());
    render(&mut table, 60, 7);
    let action = table.handle_event(InputEvent::Mouse(ratatui_datatable::input::MouseEvent {
        x: 3,
        y: 4,
        kind: ratatui_datatable::input::MouseEventKind::Down(
            ratatui_datatable::input::MouseButton::Left,
        ),
        modifiers: Default::default(),
    }));
    assert_eq!(action, DataTableAction::RowActivated(2));
    assert_eq!(table.cursor(), Some(2));
}

#[test]
fn reloading_records_clamps_the_page() {
    let rows: Vec<Row> = (1..=25).map(|i| Row::new().with("id", i)).collect();
    let mut table = DataTableView::new(rows, vec![Column::new("id", "Id")]);
    table.handle_event(InputEvent::char('G'));
    assert_eq!(table.engine().state().current_page, 3);

    table.set_records((1..=5).map(|i| Row::new().with("id", i)).collect::<Vec<_>>());
    assert_eq!(table.engine().state().current_page, 1);
    let c = table.page_controls();
    assert_eq!((c.range_start, c.range_end, c.total_filtered), (1, 5, 5));
}

#[test]
fn renders_through_the_reexported_ratatui() {
    use ratatui_datatable::ratatui as rt;

    let mut table = DataTableView::new(users(), columns());
    let area = rt::layout::Rect::new(0, 0, 60, 7);
    let mut buf = rt::buffer::Buffer::empty(area);
    table.render(area, &mut buf, &Theme::default());
    assert!(lines(&buf)[2].starts_with("John Doe"));
}
