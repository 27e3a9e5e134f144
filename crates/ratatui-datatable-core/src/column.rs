use crate::record::Record;
use crate::value::Value;
use ratatui::text::Line;
use std::fmt;
use std::sync::Arc;

/// Custom cell display for a [`Column`].
///
/// Receives the raw field value (`None` when the record has no such field) and the whole record.
pub type CellRenderer<R> = Arc<dyn Fn(Option<&Value>, &R) -> Line<'static> + Send + Sync>;

/// Column configuration for [`crate::engine::TableEngine`] and [`crate::view::DataTableView`].
///
/// `key` names the record field the column shows. Sorting and searching always look at the raw
/// field value; a `render` function only changes what ends up on screen.
pub struct Column<R> {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    /// Fixed width in cells. Columns without a width share the remaining space.
    pub width: Option<u16>,
    render: Option<CellRenderer<R>>,
}

impl<R> Column<R> {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            width: None,
            render: None,
        }
    }

    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_render<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<&Value>, &R) -> Line<'static> + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn has_render(&self) -> bool {
        self.render.is_some()
    }
}

impl<R: Record> Column<R> {
    pub fn raw<'r>(&self, record: &'r R) -> Option<&'r Value> {
        record.get(&self.key)
    }

    /// The cell content for `record`.
    pub fn display(&self, record: &R) -> Line<'static> {
        let value = record.get(&self.key);
        match &self.render {
            Some(render) => render(value, record),
            None => value.map(|v| Line::raw(v.to_string())).unwrap_or_default(),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            width: self.width,
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("render", &self.render.as_ref().map(|_| ".."))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Row;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn display_uses_raw_value_without_render() {
        let col: Column<Row> = Column::new("price", "Price");
        let row = Row::new().with("price", 89.99);
        assert_eq!(plain(&col.display(&row)), "89.99");
        assert_eq!(plain(&col.display(&Row::new())), "");
    }

    #[test]
    fn render_overrides_display_but_not_raw() {
        let col: Column<Row> = Column::new("price", "Price").with_render(|v, _| {
            let n = v.and_then(Value::as_f64).unwrap_or_default();
            Line::raw(format!("${n:.2}"))
        });
        let row = Row::new().with("price", 5);
        assert_eq!(plain(&col.display(&row)), "$5.00");
        assert_eq!(col.raw(&row), Some(&Value::from(5)));
    }

    #[test]
    fn render_sees_missing_fields_and_the_record() {
        let col: Column<Row> = Column::new("actions", "Actions").with_render(|v, r: &Row| {
            assert!(v.is_none());
            Line::raw(format!("edit {}", r.get("id").map(|v| v.to_string()).unwrap_or_default()))
        });
        assert_eq!(plain(&col.display(&Row::new().with("id", 7))), "edit 7");
    }
}
