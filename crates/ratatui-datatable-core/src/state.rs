//! View-local interaction state.

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator shown next to the active column label.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Search, sort and paging state of one table view.
///
/// This is plain data: it can be inspected, persisted (with the `serde` feature) and handed back
/// to [`crate::engine::TableEngine::restore_state`]. Only the engine keeps `current_page` clamped.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct InteractionState {
    pub search_term: String,
    pub sort_column: Option<String>,
    pub sort_direction: SortDirection,
    /// 1-based.
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl InteractionState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort_column: None,
            sort_direction: SortDirection::Ascending,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn is_sorted_by(&self, key: &str) -> bool {
        self.sort_column.as_deref() == Some(key)
    }

    pub(crate) fn clamp_page(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = InteractionState::default();
        assert_eq!(s.search_term, "");
        assert_eq!(s.sort_column, None);
        assert_eq!(s.sort_direction, SortDirection::Ascending);
        assert_eq!(s.current_page, 1);
        assert_eq!(s.page_size, 10);
        assert_eq!(InteractionState::with_page_size(0).page_size, 1);
    }

    #[test]
    fn clamp_page_keeps_at_least_one() {
        let mut s = InteractionState {
            current_page: 0,
            ..Default::default()
        };
        s.clamp_page(0);
        assert_eq!(s.current_page, 1);
        s.current_page = 9;
        s.clamp_page(3);
        assert_eq!(s.current_page, 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_lowercase_direction() {
        let s = InteractionState {
            sort_column: Some("name".into()),
            sort_direction: SortDirection::Descending,
            ..Default::default()
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["sort_direction"], "descending");
        let back: InteractionState =
            serde_json::from_str(r#"{"search_term":"jane","current_page":2}"#).unwrap();
        assert_eq!(back.search_term, "jane");
        assert_eq!(back.current_page, 2);
        assert_eq!(back.page_size, 10);
    }
}
