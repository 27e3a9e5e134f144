//! The tabular view engine: filter → sort → paginate over a read-only record list.

use crate::column::Column;
use crate::pagination;
use crate::pagination::PageControls;
use crate::pagination::PaginationOptions;
use crate::record::Record;
use crate::state::InteractionState;
use crate::state::SortDirection;
use std::cmp::Ordering;
use std::sync::Arc;

/// Global switches of a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    /// Whether the widget offers a search box. The engine filters by whatever term it is given.
    pub searchable: bool,
    /// Disables [`TableEngine::set_sort`] and the sort stage when `false`.
    pub sortable: bool,
    /// `None` shows every row on a single page.
    pub pagination: Option<PaginationOptions>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            searchable: true,
            sortable: true,
            pagination: Some(PaginationOptions::default()),
        }
    }
}

/// One record selected for display, with its index in the caller's record list.
#[derive(Debug)]
pub struct ViewRow<'a, R> {
    pub index: usize,
    pub record: &'a R,
}

impl<R> Clone for ViewRow<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ViewRow<'_, R> {}

/// The derived view for the current [`InteractionState`].
#[derive(Debug)]
pub struct TableView<'a, R> {
    pub rows: Vec<ViewRow<'a, R>>,
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_filtered: usize,
    /// 1-based, inclusive; 0 when nothing matches.
    pub range_start: usize,
    /// 1-based, inclusive; 0 when nothing matches.
    pub range_end: usize,
}

/// Owns the interaction state of one table and derives what to show from it.
///
/// Records are shared read-only. Every read recomputes the filter, sort and page stages; record
/// counts are expected to be in the hundreds or low thousands.
pub struct TableEngine<R> {
    records: Arc<[R]>,
    columns: Vec<Column<R>>,
    options: TableOptions,
    state: InteractionState,
}

impl<R: Record> TableEngine<R> {
    pub fn new(records: impl Into<Arc<[R]>>, columns: Vec<Column<R>>) -> Self {
        Self::with_options(records, columns, TableOptions::default())
    }

    pub fn with_options(
        records: impl Into<Arc<[R]>>,
        columns: Vec<Column<R>>,
        options: TableOptions,
    ) -> Self {
        let page_size = options
            .pagination
            .as_ref()
            .map(|p| p.page_size)
            .unwrap_or(crate::state::DEFAULT_PAGE_SIZE);
        Self {
            records: records.into(),
            columns,
            options,
            state: InteractionState::with_page_size(page_size),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn column(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn pagination_enabled(&self) -> bool {
        self.options.pagination.is_some()
    }

    pub fn sorting_enabled(&self) -> bool {
        self.options.sortable
    }

    /// Replaces the record list and re-clamps the current page.
    pub fn set_records(&mut self, records: impl Into<Arc<[R]>>) {
        self.records = records.into();
        tracing::debug!(records = self.records.len(), "table records replaced");
        self.clamp_page();
    }

    /// Replaces the column definitions. An active sort on a column that is gone or no longer
    /// sortable is dropped.
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
        let keep = self
            .state
            .sort_column
            .as_deref()
            .and_then(|key| self.column(key))
            .is_some_and(|c| c.sortable);
        if !keep && self.state.sort_column.take().is_some() {
            self.state.sort_direction = SortDirection::Ascending;
            tracing::debug!("sort cleared after column change");
        }
    }

    pub fn set_options(&mut self, options: TableOptions) {
        self.options = options;
        self.clamp_page();
    }

    /// Restores a previously captured state, e.g. one persisted by the caller.
    pub fn restore_state(&mut self, state: InteractionState) {
        self.state = state;
        self.state.page_size = self.state.page_size.max(1);
        self.clamp_page();
        tracing::debug!(state = ?self.state, "table state restored");
    }

    /// Replaces the search term and goes back to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.state.current_page = 1;
        tracing::debug!(term = %self.state.search_term, "search term changed");
    }

    /// Sorts by `key`, or flips the direction if the table is already sorted by it.
    ///
    /// Unknown and non-sortable columns, and tables with sorting disabled, are left untouched.
    /// Returns whether the state changed. The current page is kept.
    pub fn set_sort(&mut self, key: &str) -> bool {
        if !self.options.sortable {
            return false;
        }
        if !self.column(key).is_some_and(|c| c.sortable) {
            return false;
        }
        if self.state.is_sorted_by(key) {
            self.state.sort_direction = self.state.sort_direction.toggled();
        } else {
            self.state.sort_column = Some(key.to_string());
            self.state.sort_direction = SortDirection::Ascending;
        }
        tracing::debug!(
            column = key,
            direction = ?self.state.sort_direction,
            "sort changed"
        );
        true
    }

    /// Goes to `page`, clamped into `[1, total_pages]`. Returns whether the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let before = self.state.current_page;
        self.state.current_page = page.clamp(1, self.total_pages());
        if before != self.state.current_page {
            tracing::debug!(page = self.state.current_page, "page changed");
        }
        before != self.state.current_page
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.state.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> bool {
        self.set_page(self.state.current_page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> bool {
        self.set_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.set_page(self.total_pages())
    }

    /// Replaces the page size (at least 1) and goes back to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.state.page_size = size.max(1);
        self.state.current_page = 1;
        tracing::debug!(page_size = self.state.page_size, "page size changed");
    }

    /// Moves to the next (or previous) configured page size, wrapping around.
    ///
    /// Returns `false` without pagination or without page-size options.
    pub fn cycle_page_size(&mut self, forward: bool) -> bool {
        let next = self
            .options
            .pagination
            .as_ref()
            .and_then(|p| p.cycle(self.state.page_size, forward));
        match next {
            Some(size) => {
                self.set_page_size(size);
                true
            }
            None => false,
        }
    }

    /// The active sort direction of `key`, if the table is sorted by that column.
    pub fn sort_indicator(&self, key: &str) -> Option<SortDirection> {
        if !self.options.sortable || !self.state.is_sorted_by(key) {
            return None;
        }
        self.column(key)
            .filter(|c| c.sortable)
            .map(|_| self.state.sort_direction)
    }

    /// Number of records that pass the current search filter.
    pub fn total_filtered(&self) -> usize {
        let needle = self.needle();
        match needle {
            None => self.records.len(),
            Some(needle) => self
                .records
                .iter()
                .filter(|r| matches_search(*r, &needle))
                .count(),
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.pagination_enabled() {
            pagination::total_pages(self.total_filtered(), self.state.page_size)
        } else {
            1
        }
    }

    /// Source indices of all filtered records in display order, across every page.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices = self.filtered_indices();
        let Some(key) = self.active_sort_key() else {
            return indices;
        };
        let descending = self.state.sort_direction == SortDirection::Descending;
        let records = &self.records;
        // `sort_by` is stable: equal keys keep their filtered order in both directions.
        indices.sort_by(|&a, &b| compare_field(&records[a], &records[b], key, descending));
        indices
    }

    /// Derives the rows and paging metadata for the current state.
    pub fn view(&self) -> TableView<'_, R> {
        let sorted = self.sorted_indices();
        let total_filtered = sorted.len();

        let (page_size, total_pages) = if self.pagination_enabled() {
            let size = self.state.page_size.max(1);
            (size, pagination::total_pages(total_filtered, size))
        } else {
            (total_filtered.max(1), 1)
        };
        let current_page = self.state.current_page.clamp(1, total_pages);
        let (range_start, range_end) =
            pagination::visible_range(current_page, page_size, total_filtered);

        let start = (current_page - 1).saturating_mul(page_size);
        let rows = sorted
            .into_iter()
            .skip(start)
            .take(page_size)
            .map(|index| ViewRow {
                index,
                record: &self.records[index],
            })
            .collect::<Vec<_>>();

        tracing::trace!(
            rows = rows.len(),
            total_filtered,
            current_page,
            total_pages,
            "table view derived"
        );

        TableView {
            rows,
            current_page,
            page_size: if self.pagination_enabled() {
                page_size
            } else {
                self.state.page_size
            },
            total_pages,
            total_filtered,
            range_start,
            range_end,
        }
    }

    pub fn page_controls(&self) -> PageControls {
        let view = self.view();
        page_controls_for(&view, self.pagination_enabled())
    }

    fn needle(&self) -> Option<String> {
        if self.state.search_term.is_empty() {
            None
        } else {
            Some(self.state.search_term.to_lowercase())
        }
    }

    fn filtered_indices(&self) -> Vec<usize> {
        let needle = self.needle();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| needle.as_deref().is_none_or(|n| matches_search(*r, n)))
            .map(|(i, _)| i)
            .collect()
    }

    fn active_sort_key(&self) -> Option<&str> {
        if !self.options.sortable {
            return None;
        }
        self.state.sort_column.as_deref()
    }

    fn clamp_page(&mut self) {
        let total_pages = self.total_pages();
        let before = self.state.current_page;
        self.state.clamp_page(total_pages);
        if before != self.state.current_page {
            tracing::debug!(
                from = before,
                to = self.state.current_page,
                "current page clamped"
            );
        }
    }
}

/// [`PageControls`] for an already derived view.
pub fn page_controls_for<R>(view: &TableView<'_, R>, pagination_enabled: bool) -> PageControls {
    PageControls::new(
        pagination_enabled,
        view.current_page,
        view.total_pages,
        (view.range_start, view.range_end),
        view.total_filtered,
    )
}

fn matches_search<R: Record>(record: &R, needle: &str) -> bool {
    record.values().any(|v| v.search_text().contains(needle))
}

/// Records missing the field go last in both directions.
fn compare_field<R: Record>(a: &R, b: &R, key: &str, descending: bool) -> Ordering {
    match (a.get(key), b.get(key)) {
        (Some(a), Some(b)) => {
            let ord = a.natural_cmp(b);
            if descending { ord.reverse() } else { ord }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
