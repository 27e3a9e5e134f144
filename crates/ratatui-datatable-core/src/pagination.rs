//! Pagination math and the page-control model.

use crate::state::DEFAULT_PAGE_SIZE;

/// Page sizes offered by the page-size selector unless configured otherwise.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationOptions {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

impl PaginationOptions {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    /// The option after (or before) `current`, wrapping around.
    ///
    /// A `current` that is not one of the options moves to the first option larger than it (or the
    /// last one smaller than it when going backwards).
    pub fn cycle(&self, current: usize, forward: bool) -> Option<usize> {
        let mut opts: Vec<usize> = self
            .page_size_options
            .iter()
            .copied()
            .filter(|n| *n > 0)
            .collect();
        opts.sort_unstable();
        opts.dedup();
        if opts.is_empty() {
            return None;
        }
        let next = match opts.iter().position(|n| *n == current) {
            Some(i) if forward => opts[(i + 1) % opts.len()],
            Some(i) => opts[(i + opts.len() - 1) % opts.len()],
            None if forward => opts
                .iter()
                .copied()
                .find(|n| *n > current)
                .unwrap_or(opts[0]),
            None => opts
                .iter()
                .rev()
                .copied()
                .find(|n| *n < current)
                .unwrap_or(opts[opts.len() - 1]),
        };
        Some(next)
    }
}

/// Label for one entry of the page-size selector.
pub fn page_size_label(page_size: usize) -> String {
    format!("{page_size} per page")
}

/// `max(1, ceil(total / page_size))`. A `page_size` of zero is treated as one.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// 1-based inclusive `(start, end)` of the rows shown on `page`, or `(0, 0)` when there are none.
pub fn visible_range(page: usize, page_size: usize, total: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= total {
        return (0, 0);
    }
    (start + 1, start.saturating_add(page_size).min(total))
}

/// Everything needed to draw previous/next buttons, numbered page buttons and the result summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageControls {
    /// Pagination is enabled and there is more than one page.
    pub visible: bool,
    pub current: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// All page numbers, `1..=total_pages`.
    pub pages: Vec<usize>,
    pub range_start: usize,
    pub range_end: usize,
    pub total_filtered: usize,
}

impl PageControls {
    pub fn new(
        enabled: bool,
        current: usize,
        total_pages: usize,
        range: (usize, usize),
        total_filtered: usize,
    ) -> Self {
        let total_pages = total_pages.max(1);
        let current = current.clamp(1, total_pages);
        Self {
            visible: enabled && total_pages > 1,
            current,
            total_pages,
            has_previous: current > 1,
            has_next: current < total_pages,
            pages: (1..=total_pages).collect(),
            range_start: range.0,
            range_end: range.1,
            total_filtered,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.range_start, self.range_end, self.total_filtered
        )
    }
}
