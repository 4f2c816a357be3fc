//! Search helpers shared by list screens
use leptos::prelude::*;

/// Byte ranges of case-insensitive occurrences of `term` in `text`.
///
/// Empty when nothing matches, when the term is empty, or when lowercasing
/// changes the byte layout of `text` (ranges would not map back).
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }
    let term_lower = term.to_lowercase();

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&term_lower) {
        let start = last_pos + pos;
        let end = start + term_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Highlights matches of the search term inside a cell (case-insensitive)
pub fn highlight_matches(text: &str, term: &str) -> AnyView {
    let ranges = match_ranges(text, term);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }.into_any(),
        );
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with a clear button. Every keystroke is reported.
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_active = move || !value.get().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_active
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_active>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Amit Kamath", "am"), vec![(0, 2), (6, 8)]);
        assert!(match_ranges("Amit", "").is_empty());
        assert!(match_ranges("Amit", "xyz").is_empty());
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn test_match_ranges_with_multibyte_text() {
        assert_eq!(match_ranges("₹420 fare", "fare"), vec![(7, 11)]);
        // 'İ' lowercases to two chars, so byte offsets would not line up
        assert!(match_ranges("İstanbul", "stan").is_empty());
    }
}
