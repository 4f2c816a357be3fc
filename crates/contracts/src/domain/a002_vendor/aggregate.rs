use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fleet owner supplying vehicles and drivers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub company_name: String,
    pub contact_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub fleet_size: u32,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `PUT /api/admin/vendors/{id}/verification`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorVerificationDto {
    pub is_verified: bool,
}
