use crate::shared::data_table::model::page_numbers;
use crate::shared::icons::icon;
use leptos::prelude::*;

const PAGE_BUTTONS: usize = 5;

/// Page-jump controls under a table. Pages are 1-based.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=is_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=is_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_numbers(current, total_pages.get(), PAGE_BUTTONS)
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="pagination-btn pagination-btn--page"
                                class:pagination-btn--active=page == current
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=is_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get())
                disabled=is_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

/// Rows-per-page selector. Lives outside the page buttons so it stays
/// reachable when the current size fits everything on one page.
#[component]
pub fn PageSizeSelect(
    #[prop(into)]
    page_size: Signal<usize>,

    options: Vec<usize>,

    on_change: Callback<usize>,
) -> impl IntoView {
    let choices = Signal::derive(move || page_size_choices(&options, page_size.get()));

    view! {
        <select
            class="page-size-select"
            on:change=move |ev| {
                if let Ok(size) = event_target_value(&ev).parse() {
                    on_change.run(size);
                }
            }
            prop:value=move || page_size.get().to_string()
        >
            {move || {
                choices
                    .get()
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {format!("{} / page", size)}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

/// Sorted, deduplicated size choices that always include the active size.
pub fn page_size_choices(options: &[usize], current: usize) -> Vec<usize> {
    let mut choices: Vec<usize> = options.iter().copied().filter(|&size| size > 0).collect();
    if current > 0 {
        choices.push(current);
    }
    choices.sort_unstable();
    choices.dedup();
    choices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_choices_include_current() {
        assert_eq!(page_size_choices(&[10, 25, 50, 100], 25), vec![10, 25, 50, 100]);
        assert_eq!(page_size_choices(&[10, 25, 50, 100], 20), vec![10, 20, 25, 50, 100]);
        assert_eq!(page_size_choices(&[50, 10, 10, 0], 10), vec![10, 50]);
    }
}
