use serde::{Deserialize, Serialize};

/// Lifecycle of a ride as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    Requested,
    Assigned,
    Ongoing,
    Completed,
    Cancelled,
}

impl RideStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RideStatus::Requested => "requested",
            RideStatus::Assigned => "assigned",
            RideStatus::Ongoing => "ongoing",
            RideStatus::Completed => "completed",
            RideStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RideStatus::Requested => "Requested",
            RideStatus::Assigned => "Assigned",
            RideStatus::Ongoing => "Ongoing",
            RideStatus::Completed => "Completed",
            RideStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> Vec<RideStatus> {
        vec![
            RideStatus::Requested,
            RideStatus::Assigned,
            RideStatus::Ongoing,
            RideStatus::Completed,
            RideStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_matches_wire_name() {
        for status in RideStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
            assert_eq!(RideStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(RideStatus::from_code("lost"), None);
    }
}
