use serde::{Deserialize, Serialize};

/// Counters shown on the landing section of every console.
/// Fields a role has no access to are omitted by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_rides: Option<u64>,
    pub active_rides: Option<u64>,
    pub completed_rides: Option<u64>,
    pub cancelled_rides: Option<u64>,
    pub total_drivers: Option<u64>,
    pub total_vendors: Option<u64>,
    pub total_users: Option<u64>,
    pub total_employees: Option<u64>,
    /// Gross revenue in rupees
    pub revenue: Option<f64>,
    /// Earnings credited to the signed-in partner or vendor
    pub earnings: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_payload_deserializes() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"totalRides": 12, "revenue": 1520.5}"#).unwrap();
        assert_eq!(stats.total_rides, Some(12));
        assert_eq!(stats.revenue, Some(1520.5));
        assert_eq!(stats.total_vendors, None);
    }
}
