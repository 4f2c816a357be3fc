use contracts::system::auth::{LoginRequest, LoginResponse, Role};

use crate::shared::api::{post_anonymous, ApiError};

/// Sign in to one console
pub async fn login(role: Role, username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    post_anonymous(&format!("{}/auth/login", role.api_prefix()), &request).await
}
