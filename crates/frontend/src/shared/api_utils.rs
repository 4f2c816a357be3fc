//! API base URL resolution
//!
//! `ARA_API_URL` set at build time wins (e.g. `https://api.aratravels.in`).
//! Otherwise the API is expected on port 3000 of the host serving the page.

const API_PORT: u16 = 3000;

pub fn api_base() -> String {
    if let Some(url) = option_env!("ARA_API_URL") {
        return url.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Full URL of an API path (`/api/...`)
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:3000", "/api/admin/rides"), "http://localhost:3000/api/admin/rides");
        assert_eq!(join_url("http://localhost:3000", "api/x"), "http://localhost:3000/api/x");
    }
}
