use contracts::domain::a005_pricing::aggregate::PricingRule;
use contracts::system::auth::Role;
use leptos::prelude::*;

use super::details::PricingEditor;
use crate::shared::components::list_actions::{export_with_toast, ListActions};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_inr, format_number_with_decimals};
use crate::shared::data_table::{Column, DataTable, TableRecord};
use crate::shared::remote_list::use_remote_collection;

impl TableRecord for PricingRule {}

fn percent(value: f64) -> String {
    format!("{}%", format_number_with_decimals(value, 1))
}

fn pricing_columns() -> Vec<Column<PricingRule>> {
    vec![
        Column::field("Vehicle", "vehicleType").min_width(140.0),
        Column::text("Base fare", |r: &PricingRule| format_inr(r.base_fare)).right(),
        Column::text("Per km", |r: &PricingRule| format_inr(r.per_km)).right(),
        Column::text("Per minute", |r: &PricingRule| format_inr(r.per_minute)).right(),
        Column::text("Rider share", |r: &PricingRule| percent(r.split.rider_percent)).right(),
        Column::text("Commission", |r: &PricingRule| percent(r.split.commission_percent)).right(),
    ]
}

/// Fare rules per vehicle category; clicking a row opens the editor
#[component]
pub fn PricingList(role: Role) -> impl IntoView {
    let rules = use_remote_collection::<PricingRule>(role, "/pricing");
    let toasts = rules.toasts();
    let selected = RwSignal::new(None::<PricingRule>);

    let export = Callback::new(move |_: ()| {
        rules
            .items
            .with_untracked(|rows| export_with_toast(toasts, rows, &pricing_columns(), "pricing.csv"));
    });

    let on_saved = Callback::new(move |_: PricingRule| {
        selected.set(None);
        rules.reload();
    });

    view! {
        <div class="page">
            <PageHeader title="Pricing" subtitle="Fares and revenue split per vehicle type" icon_name="pricing">
                <ListActions
                    on_refresh=Callback::new(move |_: ()| rules.reload())
                    on_export=export
                    loading=rules.loading
                />
            </PageHeader>
            <DataTable
                records=rules.items
                columns=pricing_columns()
                searchable=false
                on_row_click=Callback::new(move |rule: PricingRule| selected.set(Some(rule)))
            />
            {move || {
                selected
                    .get()
                    .map(|rule| {
                        view! {
                            <PricingEditor
                                role=role
                                rule=rule
                                on_saved=on_saved
                                on_cancel=Callback::new(move |_: ()| selected.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(percent(80.0), "80.0%");
        assert_eq!(percent(12.5), "12.5%");
    }
}
