use serde::{Deserialize, Serialize};

/// Employee of a corporate client allowed to book rides on the company account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub employee_code: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Monthly ride allowance in rupees
    #[serde(default)]
    pub monthly_limit: Option<f64>,
}
