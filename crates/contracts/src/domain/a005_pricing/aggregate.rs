use serde::{Deserialize, Serialize};

const TOTAL_PERCENT: f64 = 100.0;
const BALANCE_EPSILON: f64 = 1e-9;

/// Fare rule for one vehicle category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRule {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub vehicle_type: String,
    pub base_fare: f64,
    pub per_km: f64,
    #[serde(default)]
    pub per_minute: f64,
    #[serde(flatten)]
    pub split: PricingSplit,
}

/// Share of every fare going to the driver side versus the platform.
/// Both parts always add up to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSplit {
    pub rider_percent: f64,
    pub commission_percent: f64,
}

impl Default for PricingSplit {
    fn default() -> Self {
        Self {
            rider_percent: 80.0,
            commission_percent: 20.0,
        }
    }
}

impl PricingSplit {
    /// Set the rider share and rebalance the commission
    pub fn with_rider_percent(self, percent: f64) -> Self {
        let rider = clamp_percent(percent);
        Self {
            rider_percent: rider,
            commission_percent: TOTAL_PERCENT - rider,
        }
    }

    /// Set the commission share and rebalance the rider part
    pub fn with_commission_percent(self, percent: f64) -> Self {
        let commission = clamp_percent(percent);
        Self {
            rider_percent: TOTAL_PERCENT - commission,
            commission_percent: commission,
        }
    }

    pub fn is_balanced(&self) -> bool {
        (self.rider_percent + self.commission_percent - TOTAL_PERCENT).abs() < BALANCE_EPSILON
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, TOTAL_PERCENT)
    }
}

/// Payload for `PUT /api/admin/pricing/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePricingDto {
    pub base_fare: f64,
    pub per_km: f64,
    pub per_minute: f64,
    #[serde(flatten)]
    pub split: PricingSplit,
}

impl From<&PricingRule> for UpdatePricingDto {
    fn from(rule: &PricingRule) -> Self {
        Self {
            base_fare: rule.base_fare,
            per_km: rule.per_km,
            per_minute: rule.per_minute,
            split: rule.split,
        }
    }
}
