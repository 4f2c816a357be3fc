//! Authenticated REST calls scoped to one console role
use contracts::system::auth::Role;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("session expired, please sign in again")]
    Unauthorized,
    #[error("request failed with HTTP {0}")]
    Status(u16),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            other => ApiError::Status(other),
        }
    }
}

/// Bearer-token client for `/api/<role>/...`
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    role: Role,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(role: Role, token: Option<String>) -> Self {
        Self { role, token }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Absolute URL of a role-relative path such as `/rides`
    pub fn url(&self, path: &str) -> String {
        api_url(&self.path(path))
    }

    fn path(&self, path: &str) -> String {
        format!("{}/{}", self.role.api_prefix(), path.trim_start_matches('/'))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("POST {}", url);
        let request = self
            .authorize(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("PUT {}", url);
        let request = self
            .authorize(Request::put(&url))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        log::debug!("DELETE {}", url);
        let response = self
            .authorize(Request::delete(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&response)
    }
}

/// POST without a bearer token (sign-in)
pub async fn post_anonymous<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::from_status(response.status()))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(&response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_scoped_to_role() {
        let client = ApiClient::new(Role::Vendor, Some("t".into()));
        assert_eq!(client.path("/rides"), "/api/vendor/rides");
        assert_eq!(client.path("drivers/7"), "/api/vendor/drivers/7");
        assert_eq!(client.role(), Role::Vendor);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(500), ApiError::Status(500));
        assert_eq!(ApiError::Status(404).to_string(), "request failed with HTTP 404");
    }
}
