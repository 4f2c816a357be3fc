use std::collections::BTreeMap;

/// Transient state owned by one table instance
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub search: String,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    /// Filter name -> selected value
    pub filters: BTreeMap<String, String>,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
            filters: BTreeMap::new(),
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    /// An empty value clears the filter
    pub fn set_filter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(&name);
        } else {
            self.filters.insert(name, value);
        }
        self.page = 1;
    }

    pub fn filter_value(&self, name: &str) -> Option<&str> {
        self.filters.get(name).map(String::as_str)
    }

    pub fn active_filters_count(&self) -> usize {
        self.filters.len()
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 1;
    }

    /// Moves to `page` when it lies in `1..=total_pages`.
    /// Returns false and leaves the state untouched otherwise.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page == 0 || page > total_pages {
            return false;
        }
        self.page = page;
        true
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(super::model::DEFAULT_ITEMS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ViewState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 10);
        assert!(state.search.is_empty());
        assert_eq!(state.active_filters_count(), 0);
        assert_eq!(ViewState::new(0).page_size, 1);
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = ViewState::new(10);
        assert!(state.go_to_page(3, 5));
        state.set_search("am");
        assert_eq!(state.page, 1);
        assert_eq!(state.search, "am");
    }

    #[test]
    fn test_filter_resets_page_and_clears_on_empty() {
        let mut state = ViewState::new(10);
        state.go_to_page(2, 2);
        state.set_filter("status", "completed");
        assert_eq!(state.page, 1);
        assert_eq!(state.filter_value("status"), Some("completed"));
        assert_eq!(state.active_filters_count(), 1);

        state.go_to_page(2, 2);
        state.set_filter("status", "");
        assert_eq!(state.page, 1);
        assert_eq!(state.filter_value("status"), None);
    }

    #[test]
    fn test_out_of_range_page_requests_are_ignored() {
        let mut state = ViewState::new(10);
        assert!(state.go_to_page(2, 3));
        assert!(!state.go_to_page(0, 3));
        assert_eq!(state.page, 2);
        assert!(!state.go_to_page(4, 3));
        assert_eq!(state.page, 2);
        assert!(state.go_to_page(3, 3));
        assert_eq!(state.page, 3);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = ViewState::new(10);
        state.go_to_page(4, 4);
        state.set_page_size(50);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 50);
    }
}
