use super::record::TableRecord;
use super::state::ViewState;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Indices of the records matching `term`, in input order.
///
/// Case-insensitive substring match. With `search_keys` only those fields
/// are tested, otherwise every field of the record. An empty term matches
/// everything.
pub fn search_records<T: TableRecord>(records: &[T], term: &str, search_keys: &[String]) -> Vec<usize> {
    if term.is_empty() {
        return (0..records.len()).collect();
    }
    let needle = term.to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(*record, &needle, search_keys))
        .map(|(idx, _)| idx)
        .collect()
}

fn record_matches<T: TableRecord>(record: &T, needle: &str, search_keys: &[String]) -> bool {
    let values = if search_keys.is_empty() {
        record.field_values()
    } else {
        record.select_values(search_keys)
    };
    values.iter().any(|value| value.to_lowercase().contains(needle))
}

/// `ceil(count / page_size)`, never less than 1
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Slice of the filtered set shown on one page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// Effective page, clamped to `1..=total_pages`
    pub page: usize,
    pub total_pages: usize,
    /// Start offset into the filtered set (inclusive)
    pub start: usize,
    /// End offset into the filtered set (exclusive)
    pub end: usize,
    pub total: usize,
}

impl PageWindow {
    /// "Showing 11–20 of 25"
    pub fn label(&self) -> String {
        let first = if self.total == 0 { 0 } else { self.start + 1 };
        format!("Showing {}–{} of {}", first, self.end, self.total)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

pub fn paginate(total: usize, page: usize, page_size: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let total_pages = total_pages(total, page_size);
    let page = page.clamp(1, total_pages);
    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);

    PageWindow {
        page,
        total_pages,
        start,
        end,
        total,
    }
}

/// Page numbers offered as jump buttons: a run of at most `max_buttons`
/// pages centred on the current one.
pub fn page_numbers(current: usize, total_pages: usize, max_buttons: usize) -> Vec<usize> {
    let total_pages = total_pages.max(1);
    let max_buttons = max_buttons.max(1).min(total_pages);
    let current = current.clamp(1, total_pages);

    let mut first = current.saturating_sub(max_buttons / 2).max(1);
    if first + max_buttons - 1 > total_pages {
        first = total_pages + 1 - max_buttons;
    }
    (first..first + max_buttons).collect()
}

/// Everything the table needs to render one frame
#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    /// Indices into the caller's records that survived the search
    pub matched: Vec<usize>,
    pub window: PageWindow,
}

impl TableView {
    pub fn compute<T: TableRecord>(records: &[T], state: &ViewState, search_keys: &[String]) -> Self {
        let matched = search_records(records, &state.search, search_keys);
        let window = paginate(matched.len(), state.page, state.page_size);
        Self { matched, window }
    }

    /// Record indices on the current page
    pub fn visible(&self) -> &[usize] {
        &self.matched[self.window.start..self.window.end]
    }

    /// Nothing matched: render the placeholder row
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    pub fn show_footer(&self) -> bool {
        self.window.total_pages > 1
    }
}

/// Render identity of a row: its id, or its position when it has none.
///
/// Positional keys are only stable while the collection is unchanged.
pub fn row_key<T: TableRecord>(record: &T, position: usize) -> String {
    record
        .record_id()
        .unwrap_or_else(|| format!("row-{}", position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::pagination_controls::page_size_choices;
    use serde::Serialize;
    use serde_json::{json, Value};
    use std::cell::Cell;

    #[derive(Serialize)]
    struct User {
        id: u32,
        name: String,
        phone: String,
        email: String,
    }

    impl TableRecord for User {}

    fn users(n: u32) -> Vec<User> {
        (0..n)
            .map(|i| User {
                id: i,
                name: format!("User {}", i),
                phone: format!("98450{:05}", i),
                email: format!("user{}@ara.in", i),
            })
            .collect()
    }

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let records = users(4);
        assert_eq!(search_records(&records, "", &[]), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = vec![json!({"name": "Amit"}), json!({"name": "Sneha"})];
        assert_eq!(search_records(&records, "am", &[]), vec![0]);
        assert_eq!(search_records(&records, "NEH", &[]), vec![1]);
        assert!(search_records(&records, "zz", &[]).is_empty());
    }

    #[test]
    fn test_search_keys_restrict_fields() {
        let records = vec![json!({
            "name": "Kiran",
            "phone": "9845000001",
            "email": "fleet@ara.in"
        })];
        assert!(search_records(&records, "fleet", &keys(&["name", "phone"])).is_empty());
        assert_eq!(search_records(&records, "fleet", &[]), vec![0]);
        assert_eq!(search_records(&records, "98450", &keys(&["name", "phone"])), vec![0]);
    }

    #[test]
    fn test_search_matches_any_field_and_skips_missing_keys() {
        let records = vec![
            json!({"name": "Ola", "city": "Pune"}),
            json!({"name": "Meru"}),
            json!({"name": "Pune Cabs", "city": null}),
        ];
        assert_eq!(search_records(&records, "pune", &keys(&["city", "name"])), vec![0, 2]);
        assert_eq!(search_records(&records, "pune", &keys(&["city"])), vec![0]);
    }

    struct Counted {
        name: &'static str,
        city: &'static str,
        serialized: Cell<usize>,
    }

    impl Serialize for Counted {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            use serde::ser::SerializeStruct;
            self.serialized.set(self.serialized.get() + 1);
            let mut record = serializer.serialize_struct("Counted", 2)?;
            record.serialize_field("name", self.name)?;
            record.serialize_field("city", self.city)?;
            record.end()
        }
    }

    impl TableRecord for Counted {}

    #[test]
    fn test_keyed_search_serializes_each_record_once() {
        let records = vec![
            Counted { name: "Ola", city: "Pune", serialized: Cell::new(0) },
            Counted { name: "Meru", city: "Goa", serialized: Cell::new(0) },
        ];
        let matched = search_records(&records, "goa", &keys(&["name", "city", "phone"]));
        assert_eq!(matched, vec![1]);
        assert!(records.iter().all(|r| r.serialized.get() == 1));
    }

    #[test]
    fn test_search_over_numbers_and_bools() {
        let records = vec![json!({"fare": 420, "paid": true}), json!({"fare": 99})];
        assert_eq!(search_records(&records, "42", &[]), vec![0]);
        assert_eq!(search_records(&records, "TRUE", &[]), vec![0]);
    }

    #[test]
    fn test_result_is_order_preserving_subset() {
        let records = users(30);
        let matched = search_records(&records, "1", &keys(&["name"]));
        assert!(matched.len() <= records.len());
        assert!(matched.windows(2).all(|w| w[0] < w[1]));
        for idx in &matched {
            assert!(records[*idx].name.contains('1'));
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_twenty_five_users_three_pages() {
        let records = users(25);
        let mut state = ViewState::new(10);

        let view = TableView::compute(&records, &state, &[]);
        assert_eq!(view.window.total_pages, 3);
        assert_eq!(view.visible().to_vec(), (0..10).collect::<Vec<usize>>());
        assert!(view.show_footer());
        assert_eq!(view.window.label(), "Showing 1–10 of 25");

        assert!(state.go_to_page(3, view.window.total_pages));
        let view = TableView::compute(&records, &state, &[]);
        assert_eq!(view.visible(), &[20, 21, 22, 23, 24]);
        assert_eq!(view.window.label(), "Showing 21–25 of 25");
        assert!(!view.window.has_next());
        assert!(view.window.has_previous());
    }

    #[test]
    fn test_pages_concatenate_to_filtered_set() {
        let records = users(47);
        let search_keys = keys(&["name"]);
        let mut state = ViewState::new(7);
        state.set_search("user 1");

        let first = TableView::compute(&records, &state, &search_keys);
        let mut collected = Vec::new();
        for page in 1..=first.window.total_pages {
            assert!(state.go_to_page(page, first.window.total_pages));
            let view = TableView::compute(&records, &state, &search_keys);
            collected.extend_from_slice(view.visible());
        }
        assert_eq!(collected, first.matched);
    }

    #[test]
    fn test_empty_records_render_placeholder_without_footer() {
        let records: Vec<Value> = Vec::new();
        let mut state = ViewState::new(10);
        state.set_search("anything");
        state.set_filter("status", "completed");

        let view = TableView::compute(&records, &state, &[]);
        assert!(view.is_empty());
        assert!(view.visible().is_empty());
        assert!(!view.show_footer());
        assert_eq!(view.window.page, 1);
        assert_eq!(view.window.total_pages, 1);
        assert_eq!(view.window.label(), "Showing 0–0 of 0");
    }

    #[test]
    fn test_search_on_later_page_resets_to_first() {
        let mut records = users(15);
        records[3].name = "Zoya".into();
        records[9].name = "Zoravar".into();
        records[14].name = "Zorawar".into();
        let mut state = ViewState::new(10);
        assert!(state.go_to_page(2, 2));

        state.set_search("zo");
        let view = TableView::compute(&records, &state, &keys(&["name"]));
        assert_eq!(state.page, 1);
        assert_eq!(view.visible(), &[3, 9, 14]);
        assert!(!view.show_footer());
    }

    #[test]
    fn test_larger_page_size_can_be_undone_without_footer() {
        let records = users(47);
        let mut state = ViewState::new(10);
        assert!(TableView::compute(&records, &state, &[]).show_footer());

        state.set_page_size(50);
        let view = TableView::compute(&records, &state, &[]);
        assert!(!view.show_footer());
        assert_eq!(view.visible().len(), 47);

        let choices = page_size_choices(&[10, 25, 50, 100], state.page_size);
        assert!(choices.contains(&10));
        state.set_page_size(choices[0]);
        let view = TableView::compute(&records, &state, &[]);
        assert!(view.show_footer());
        assert_eq!(view.window.total_pages, 5);
    }

    #[test]
    fn test_single_page_suppresses_footer() {
        let records = users(10);
        let view = TableView::compute(&records, &ViewState::new(10), &[]);
        assert!(!view.show_footer());
        assert_eq!(view.visible().len(), 10);
    }

    #[test]
    fn test_stale_page_is_clamped_when_records_shrink() {
        let mut state = ViewState::new(10);
        assert!(state.go_to_page(3, 3));
        let view = TableView::compute(&users(12), &state, &[]);
        assert_eq!(view.window.page, 2);
        assert_eq!(view.visible(), &[10, 11]);
    }

    #[test]
    fn test_filters_do_not_drop_rows() {
        // Filtering belongs to the owner of the records; the table only
        // remembers the selection and goes back to page one.
        let records = vec![
            json!({"status": "completed"}),
            json!({"status": "cancelled"}),
        ];
        let mut state = ViewState::new(1);
        state.go_to_page(2, 2);
        state.set_filter("status", "completed");
        let view = TableView::compute(&records, &state, &[]);
        assert_eq!(view.matched, vec![0, 1]);
        assert_eq!(view.window.page, 1);
    }

    #[test]
    fn test_page_numbers_window() {
        assert_eq!(page_numbers(1, 1, 5), vec![1]);
        assert_eq!(page_numbers(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_numbers(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_numbers(6, 10, 5), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_numbers(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_numbers(42, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_row_key_falls_back_to_position() {
        assert_eq!(row_key(&json!({"id": "r-9"}), 0), "r-9");
        assert_eq!(row_key(&json!({"name": "no id"}), 4), "row-4");
        assert_eq!(row_key(&json!({"id": 17}), 2), "17");
    }
}
