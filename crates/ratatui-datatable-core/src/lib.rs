//! `ratatui-datatable-core` provides a searchable, sortable, paginated data table for terminal UIs.
//!
//! The crate is split in two layers:
//!
//! - [`engine::TableEngine`]: a UI-free engine that owns records, column definitions and the
//!   interaction state (search term, sort column/direction, page, page size), and derives the
//!   visible rows plus paging metadata from them.
//! - [`view::DataTableView`]: a ratatui widget on top of the engine with a search box, clickable
//!   sort headers, page controls and a page-size selector.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime: filtering, sorting and paging are recomputed on demand.
//! - Records are generic: anything implementing [`record::Record`] works, and [`record::Row`]
//!   covers ad-hoc data. Enable the `json` feature to load rows from JSON.
//!
//! ## Getting started
//!
//! Most users should depend on the facade crate `ratatui-datatable`.
//!
//! Useful entry points:
//! - [`view::DataTableView`]: the interactive table widget.
//! - [`engine::TableEngine`]: the same semantics without any rendering.
//! - [`column::Column`]: column definitions with optional custom cell renderers.
//! - [`help::HelpBar`]: one-line key help, fed from [`view::DataTableView::help_bindings`].
pub mod theme;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod render;
pub mod viewport;

pub mod bindings;
pub mod column;
pub mod engine;
#[cfg(feature = "json")]
pub mod error;
pub mod help;
pub mod input;
pub mod pagination;
pub mod record;
pub mod search_input;
pub mod state;
pub mod value;
pub mod view;
