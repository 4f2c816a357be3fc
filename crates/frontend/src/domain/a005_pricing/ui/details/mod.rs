//! Editor for one fare rule.
//!
//! Rider share and commission are kept balanced while editing: changing
//! one rewrites the other so both add up to 100.
use contracts::domain::a005_pricing::aggregate::{PricingRule, UpdatePricingDto};
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Space};

use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_sessions;

/// Parses a money or percent field; blanks, negatives and garbage are rejected
pub fn parse_amount(input: &str) -> Option<f64> {
    let value = input.trim().replace(',', ".").parse::<f64>().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

pub fn validate(rule: &PricingRule) -> Result<UpdatePricingDto, String> {
    if rule.base_fare < 0.0 || rule.per_km < 0.0 || rule.per_minute < 0.0 {
        return Err("Fares cannot be negative".to_string());
    }
    if !rule.split.is_balanced() {
        return Err("Rider share and commission must add up to 100%".to_string());
    }
    Ok(UpdatePricingDto::from(rule))
}

#[derive(Clone, Copy)]
enum Field {
    BaseFare,
    PerKm,
    PerMinute,
    RiderPercent,
    CommissionPercent,
}

impl Field {
    fn read(self, rule: &PricingRule) -> f64 {
        match self {
            Field::BaseFare => rule.base_fare,
            Field::PerKm => rule.per_km,
            Field::PerMinute => rule.per_minute,
            Field::RiderPercent => rule.split.rider_percent,
            Field::CommissionPercent => rule.split.commission_percent,
        }
    }

    fn write(self, rule: &mut PricingRule, value: f64) {
        match self {
            Field::BaseFare => rule.base_fare = value,
            Field::PerKm => rule.per_km = value,
            Field::PerMinute => rule.per_minute = value,
            Field::RiderPercent => rule.split = rule.split.with_rider_percent(value),
            Field::CommissionPercent => rule.split = rule.split.with_commission_percent(value),
        }
    }
}

#[component]
fn AmountField(label: &'static str, field: Field, draft: RwSignal<PricingRule>) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">{label}</span>
            <input
                class="form__input"
                type="number"
                min="0"
                step="0.01"
                prop:value=move || draft.with(|r| field.read(r).to_string())
                on:change=move |ev| {
                    match parse_amount(&event_target_value(&ev)) {
                        Some(value) => draft.update(|r| field.write(r, value)),
                        // restore the last valid value
                        None => draft.update(|_| {}),
                    }
                }
            />
        </label>
    }
}

#[component]
pub fn PricingEditor(
    role: Role,
    rule: PricingRule,
    on_saved: Callback<PricingRule>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let sessions = use_sessions();
    let toasts = use_toasts();
    let title = format!("Edit fare: {}", rule.vehicle_type);
    let draft = RwSignal::new(rule);
    let saving = RwSignal::new(false);

    let save = move |_| {
        let rule = draft.get_untracked();
        let Some(id) = rule.id.clone() else {
            toasts.error("This rule has no id and cannot be saved");
            return;
        };
        let dto = match validate(&rule) {
            Ok(dto) => dto,
            Err(msg) => {
                toasts.error(msg);
                return;
            }
        };

        saving.set(true);
        let client = sessions.client(role);
        spawn_local(async move {
            match client
                .put_json::<_, PricingRule>(&format!("/pricing/{}", id), &dto)
                .await
            {
                Ok(saved) => {
                    let _ = saving.try_set(false);
                    toasts.success(format!("Saved fare for {}", saved.vehicle_type));
                    on_saved.run(saved);
                }
                Err(e) => {
                    let _ = saving.try_set(false);
                    sessions.report_error(toasts, role, "Failed to save fare", &e);
                }
            }
        });
    };

    view! {
        <div class="details-panel">
            <h3 class="details-panel__title">{title}</h3>
            <div class="form__grid">
                <AmountField label="Base fare (₹)" field=Field::BaseFare draft=draft />
                <AmountField label="Per km (₹)" field=Field::PerKm draft=draft />
                <AmountField label="Per minute (₹)" field=Field::PerMinute draft=draft />
                <AmountField label="Rider share (%)" field=Field::RiderPercent draft=draft />
                <AmountField label="Commission (%)" field=Field::CommissionPercent draft=draft />
            </div>
            <Space>
                <Button appearance=ButtonAppearance::Primary on_click=save disabled=saving>
                    {icon("pricing")}
                    " Save"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {icon("x")}
                    " Cancel"
                </Button>
            </Space>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_pricing::aggregate::PricingSplit;

    fn rule() -> PricingRule {
        PricingRule {
            id: Some("p1".to_string()),
            vehicle_type: "Sedan".to_string(),
            base_fare: 50.0,
            per_km: 12.0,
            per_minute: 1.5,
            split: PricingSplit::default(),
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.5 "), Some(12.5));
        assert_eq!(parse_amount("12,5"), Some(12.5));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_field_write_rebalances_split() {
        let mut r = rule();
        Field::RiderPercent.write(&mut r, 70.0);
        assert_eq!(r.split.commission_percent, 30.0);
        Field::CommissionPercent.write(&mut r, 150.0);
        assert_eq!(r.split.commission_percent, 100.0);
        assert_eq!(r.split.rider_percent, 0.0);
        Field::PerKm.write(&mut r, 14.0);
        assert_eq!(Field::PerKm.read(&r), 14.0);
    }

    #[test]
    fn test_validate() {
        let dto = validate(&rule()).unwrap();
        assert_eq!(dto.base_fare, 50.0);
        assert_eq!(dto.split.rider_percent, 80.0);

        let mut unbalanced = rule();
        unbalanced.split.rider_percent = 90.0;
        assert!(validate(&unbalanced).is_err());

        let mut negative = rule();
        negative.per_km = -1.0;
        assert!(validate(&negative).is_err());
    }
}
