use super::column::{Cell, Column};
use super::filter::TableFilter;
use super::model::{row_key, TableView, DEFAULT_ITEMS_PER_PAGE};
use super::record::TableRecord;
use super::state::ViewState;
use crate::shared::components::pagination_controls::{PageSizeSelect, PaginationControls};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];
const NO_RESULTS: &str = "No results found";

/// Searchable, paginated table over caller-owned records.
///
/// The component never mutates `records` and never talks to the network.
/// Search and pagination happen here; filters are only surfaced, see
/// [`TableFilter`].
///
/// # Example
///
/// ```ignore
/// <DataTable
///     records=rides
///     columns=vec![
///         Column::field("Rider", "riderName"),
///         Column::text("Fare", |r: &Ride| format_money(r.fare)).right(),
///     ]
///     search_keys=vec!["riderName".to_string()]
/// />
/// ```
#[component]
pub fn DataTable<T>(
    #[prop(into)]
    records: Signal<Vec<T>>,

    columns: Vec<Column<T>>,

    /// Show the search box
    #[prop(optional, default = true)]
    searchable: bool,

    /// Fields searched; empty means every field
    #[prop(optional)]
    search_keys: Vec<String>,

    #[prop(optional, default = DEFAULT_ITEMS_PER_PAGE)]
    items_per_page: usize,

    #[prop(optional)]
    filters: Vec<TableFilter>,

    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,

    #[prop(optional, into)]
    search_placeholder: String,

    #[prop(optional, into)]
    on_row_click: Option<Callback<T>>,
) -> impl IntoView
where
    T: TableRecord + Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(ViewState::new(items_per_page));
    let colspan = placeholder_colspan(columns.len());
    let columns = StoredValue::new(columns);
    let search_keys = StoredValue::new(search_keys);
    let size_options = page_size_options.unwrap_or_else(|| DEFAULT_PAGE_SIZE_OPTIONS.to_vec());

    let table_view = Memo::new(move |_| {
        records.with(|rows| {
            state.with(|s| search_keys.with_value(|keys| TableView::compute(rows, s, keys)))
        })
    });

    // Keep the stored page inside the range when the caller shrinks the records
    Effect::new(move |_| {
        let page = table_view.with(|v| v.window.page);
        if state.with_untracked(|s| s.page) != page {
            state.update(|s| s.page = page);
        }
    });

    let search_term = Signal::derive(move || state.with(|s| s.search.clone()));

    let search_box = searchable.then(|| {
        view! {
            <SearchInput
                value=search_term
                on_change=Callback::new(move |text: String| state.update(|s| s.set_search(text)))
                placeholder=search_placeholder
            />
        }
    });

    let size_select = (!size_options.is_empty()).then(|| {
        view! {
            <PageSizeSelect
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                options=size_options
                on_change=Callback::new(move |size: usize| state.update(|s| s.set_page_size(size)))
            />
        }
    });

    let filter_controls = filters
        .into_iter()
        .map(|filter| {
            let name = filter.name.clone();
            let selected_name = filter.name;
            let on_change = filter.on_change;
            view! {
                <label class="data-table__filter">
                    <span class="data-table__filter-label">{filter.label}</span>
                    <select
                        class="data-table__filter-select"
                        prop:value=move || {
                            state.with(|s| s.filter_value(&selected_name).unwrap_or_default().to_string())
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.set_filter(name.clone(), value.clone()));
                            on_change.run(value);
                        }
                    >
                        <option value="">"All"</option>
                        {filter
                            .options
                            .into_iter()
                            .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                            .collect_view()}
                    </select>
                </label>
            }
        })
        .collect_view();

    // Keyed by identity plus content so a reloaded record with the same id
    // still re-renders
    let visible_rows = move || {
        let view = table_view.get();
        records.with(|rows| {
            view.visible()
                .iter()
                .filter_map(|&idx| {
                    rows.get(idx).map(|record| {
                        let key = format!("{}|{}", row_key(record, idx), record.fingerprint());
                        (key, record.clone())
                    })
                })
                .collect::<Vec<_>>()
        })
    };

    let render_row = move |record: T| {
        let cells = columns.with_value(|cols| {
            cols.iter()
                .map(|col| render_cell(col, &record, search_term))
                .collect_view()
        });
        let row_style = if on_row_click.is_some() { "cursor: pointer;" } else { "" };
        view! {
            <TableRow
                on:click=move |_| {
                    if let Some(callback) = on_row_click {
                        callback.run(record.clone());
                    }
                }
                attr:style=row_style
            >
                {cells}
            </TableRow>
        }
    };

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                {search_box}
                {filter_controls}
                {move || {
                    let active = state.with(|s| s.active_filters_count());
                    (active > 0).then(|| view! {
                        <span class="data-table__filter-count">{format!("{} filter(s) active", active)}</span>
                    })
                }}
                {size_select}
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        {columns.with_value(|cols| {
                            cols.iter()
                                .map(|col| {
                                    let class = if col.align_right { "table__cell--right" } else { "" };
                                    let header = col.header.clone();
                                    let min_width = col.min_width;
                                    view! {
                                        <TableHeaderCell resizable=true min_width=min_width class=class>
                                            {header}
                                        </TableHeaderCell>
                                    }
                                })
                                .collect_view()
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <Show
                        when=move || !table_view.with(|v| v.is_empty())
                        fallback=move || view! {
                            <TableRow>
                                <TableCell attr:colspan=colspan.to_string()>
                                    <TableCellLayout>
                                        <span class="text-muted">{NO_RESULTS}</span>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    >
                        <For
                            each=visible_rows
                            key=|(key, _)| key.clone()
                            children=move |(_, record)| render_row(record)
                        />
                    </Show>
                </TableBody>
            </Table>

            <Show when=move || table_view.with(|v| v.show_footer())>
                <div class="data-table__footer">
                    <span class="data-table__summary">
                        {move || table_view.with(|v| v.window.label())}
                    </span>
                    <PaginationControls
                        current_page=Signal::derive(move || table_view.with(|v| v.window.page))
                        total_pages=Signal::derive(move || table_view.with(|v| v.window.total_pages))
                        on_page_change=Callback::new(move |page: usize| {
                            let total = table_view.with_untracked(|v| v.window.total_pages);
                            state.update(|s| {
                                s.go_to_page(page, total);
                            });
                        })
                    />
                </div>
            </Show>
        </div>
    }
}

/// Width of the "no results" row; a table without columns still spans one cell.
fn placeholder_colspan(column_count: usize) -> usize {
    column_count.max(1)
}

fn render_cell<T: TableRecord>(column: &Column<T>, record: &T, search_term: Signal<String>) -> AnyView {
    let class = if column.align_right { "table__cell--right" } else { "" };
    let content = match &column.cell {
        Cell::View(render) => render(record),
        Cell::Field(_) | Cell::Text(_) => {
            let text = column.cell_text(record).unwrap_or_default();
            view! { <span>{move || highlight_matches(&text, &search_term.get())}</span> }.into_any()
        }
    };

    view! {
        <TableCell class=class>
            <TableCellLayout truncate=true>{content}</TableCellLayout>
        </TableCell>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_spans_every_column() {
        assert_eq!(placeholder_colspan(0), 1);
        assert_eq!(placeholder_colspan(1), 1);
        assert_eq!(placeholder_colspan(6), 6);
    }
}
