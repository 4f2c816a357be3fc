use super::record::TableRecord;
use leptos::prelude::*;
use std::sync::Arc;

pub type TextFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
pub type ViewFn<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// How a column reads its value from a record
pub enum Cell<T> {
    /// Field read verbatim from the record
    Field(String),
    /// Text computed from the whole record
    Text(TextFn<T>),
    /// Arbitrary view, e.g. a badge or an action button
    View(ViewFn<T>),
}

impl<T> Clone for Cell<T> {
    fn clone(&self) -> Self {
        match self {
            Cell::Field(name) => Cell::Field(name.clone()),
            Cell::Text(f) => Cell::Text(Arc::clone(f)),
            Cell::View(f) => Cell::View(Arc::clone(f)),
        }
    }
}

/// Header plus accessor
pub struct Column<T> {
    pub header: String,
    pub cell: Cell<T>,
    pub align_right: bool,
    pub min_width: f64,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            cell: self.cell.clone(),
            align_right: self.align_right,
            min_width: self.min_width,
        }
    }
}

impl<T: TableRecord> Column<T> {
    pub fn field(header: impl Into<String>, field: impl Into<String>) -> Self {
        Self::with_cell(header, Cell::Field(field.into()))
    }

    pub fn text<F>(header: impl Into<String>, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::with_cell(header, Cell::Text(Arc::new(f)))
    }

    pub fn view<F, V>(header: impl Into<String>, f: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        Self::with_cell(header, Cell::View(Arc::new(move |record| f(record).into_any())))
    }

    fn with_cell(header: impl Into<String>, cell: Cell<T>) -> Self {
        Self {
            header: header.into(),
            cell,
            align_right: false,
            min_width: 100.0,
        }
    }

    /// Right-align the column (numbers, money)
    pub fn right(mut self) -> Self {
        self.align_right = true;
        self
    }

    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = width;
        self
    }

    /// Plain text of the cell. `None` for view cells, which have no text form.
    /// Absent fields render as an empty string.
    pub fn cell_text(&self, record: &T) -> Option<String> {
        match &self.cell {
            Cell::Field(name) => Some(record.field_value(name).unwrap_or_default()),
            Cell::Text(f) => Some(f(record)),
            Cell::View(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_and_text_cells() {
        let record = json!({"first": "Sneha", "last": "Rao", "fare": 250});
        let name: Column<serde_json::Value> = Column::text("Name", |r: &serde_json::Value| {
            format!(
                "{} {}",
                r.field_value("first").unwrap_or_default(),
                r.field_value("last").unwrap_or_default()
            )
        });
        let fare = Column::field("Fare", "fare").right();
        let missing = Column::<serde_json::Value>::field("Phone", "phone");

        assert_eq!(name.cell_text(&record).as_deref(), Some("Sneha Rao"));
        assert_eq!(fare.cell_text(&record).as_deref(), Some("250"));
        assert!(fare.align_right);
        assert_eq!(missing.cell_text(&record).as_deref(), Some(""));
    }

    #[test]
    fn test_view_cells_have_no_text() {
        let column: Column<serde_json::Value> =
            Column::view("Action", |_| view! { <button>"Go"</button> });
        assert_eq!(column.cell_text(&json!({})), None);
        assert_eq!(column.header, "Action");
    }
}
