use crate::enums::RideStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A booked trip. Fare and split are computed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub rider_name: String,
    #[serde(default)]
    pub driver_name: Option<String>,
    pub pickup: String,
    pub drop: String,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub fare: f64,
    pub status: RideStatus,
    #[serde(default)]
    pub booked_by: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_payload() {
        let json = r#"{
            "_id": "r-1",
            "riderName": "Amit",
            "pickup": "Airport",
            "drop": "MG Road",
            "fare": 420.0,
            "status": "completed"
        }"#;
        let ride: Ride = serde_json::from_str(json).unwrap();
        assert_eq!(ride.id.as_deref(), Some("r-1"));
        assert_eq!(ride.status, RideStatus::Completed);
        assert_eq!(ride.driver_name, None);
    }
}
