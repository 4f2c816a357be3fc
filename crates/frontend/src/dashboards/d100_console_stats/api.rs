use contracts::dashboards::d100_console_stats::dto::DashboardStats;

use crate::shared::api::{ApiClient, ApiError};

/// GET `<role prefix>/dashboard/stats`
pub async fn fetch_stats(client: &ApiClient) -> Result<DashboardStats, ApiError> {
    client.get_json("/dashboard/stats").await
}
