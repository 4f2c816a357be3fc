use super::table::number_format::{format_inr, format_number_int};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatFormat {
    Count,
    Money,
}

pub fn format_stat(value: f64, format: StatFormat) -> String {
    match format {
        StatFormat::Count => format_number_int(value),
        StatFormat::Money => format_inr(value),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// None while loading or when the API did not send the counter
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: StatFormat,
    #[prop(into, optional)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_stat(v, format),
        None => "—".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(1520.0, StatFormat::Count), "1,520");
        assert_eq!(format_stat(250000.0, StatFormat::Money), "₹2,50,000.00");
    }
}
