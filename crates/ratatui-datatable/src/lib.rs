//! `ratatui-datatable`: a searchable, sortable, paginated data table component for ratatui.
//!
//! This is the facade crate. It re-exports the modules of `ratatui-datatable-core` and forwards
//! its features:
//!
//! - `crossterm`: conversions from crossterm events into [`input::InputEvent`].
//! - `serde`: `Serialize`/`Deserialize` for values, rows and the interaction state.
//! - `json`: [`record::Row`] constructors from `serde_json` values.
//!
//! ```no_run
//! use ratatui_datatable::prelude::*;
//!
//! let rows = vec![
//!     Row::new().with("name", "Jane Cooper").with("role", "Admin"),
//!     Row::new().with("name", "Cody Fisher").with("role", "Member"),
//! ];
//! let columns = vec![
//!     Column::new("name", "Name").with_sortable(true),
//!     Column::new("role", "Role"),
//! ];
//! let mut table = DataTableView::new(rows, columns);
//! table.handle_event(InputEvent::char('1'));
//! assert_eq!(table.engine().state().sort_column.as_deref(), Some("name"));
//! ```

/// The `ratatui` version the widgets render with.
pub use ratatui;

pub use ratatui_datatable_core::bindings;
pub use ratatui_datatable_core::column;
pub use ratatui_datatable_core::engine;
pub use ratatui_datatable_core::help;
pub use ratatui_datatable_core::input;
pub use ratatui_datatable_core::pagination;
pub use ratatui_datatable_core::record;
pub use ratatui_datatable_core::render;
pub use ratatui_datatable_core::search_input;
pub use ratatui_datatable_core::state;
pub use ratatui_datatable_core::theme;
pub use ratatui_datatable_core::value;
pub use ratatui_datatable_core::view;
pub use ratatui_datatable_core::viewport;

#[cfg(feature = "crossterm")]
pub use ratatui_datatable_core::crossterm_input;
#[cfg(feature = "json")]
pub use ratatui_datatable_core::error;

/// The types most apps need.
pub mod prelude {
    pub use crate::column::Column;
    pub use crate::engine::TableEngine;
    pub use crate::engine::TableOptions;
    pub use crate::help::HelpBar;
    pub use crate::input::InputEvent;
    pub use crate::pagination::PaginationOptions;
    pub use crate::record::Record;
    pub use crate::record::Row;
    pub use crate::state::InteractionState;
    pub use crate::state::SortDirection;
    pub use crate::theme::Theme;
    pub use crate::value::Value;
    pub use crate::view::DataTableAction;
    pub use crate::view::DataTableView;
    pub use crate::view::DataTableViewOptions;
    pub use crate::view::Focus;
}
