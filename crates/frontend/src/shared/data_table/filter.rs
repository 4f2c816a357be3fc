use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Dropdown rendered above the table.
///
/// The table only records the selection and resets to the first page; it
/// never drops rows on its own. The owner reacts in `on_change` and passes
/// the narrowed records back in. An empty value means "all".
#[derive(Clone)]
pub struct TableFilter {
    pub name: String,
    pub label: String,
    pub options: Vec<FilterOption>,
    pub on_change: Callback<String>,
}

impl TableFilter {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FilterOption>,
        on_change: Callback<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            options,
            on_change,
        }
    }
}
