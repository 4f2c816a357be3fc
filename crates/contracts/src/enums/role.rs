use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Console a user signs into. Every role has its own session and API scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Vendor,
    Partner,
    Agent,
    Corporate,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Vendor,
        Role::Partner,
        Role::Agent,
        Role::Corporate,
    ];

    /// URL and storage slug
    pub fn slug(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Vendor => "vendor",
            Role::Partner => "partner",
            Role::Agent => "agent",
            Role::Corporate => "corporate",
        }
    }

    /// Human readable console name
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Platform Admin",
            Role::Vendor => "Vendor",
            Role::Partner => "Partner / Driver",
            Role::Agent => "Agent",
            Role::Corporate => "Corporate",
        }
    }

    /// localStorage key holding the bearer token of this role
    pub fn storage_key(&self) -> String {
        format!("ara_{}_token", self.slug())
    }

    /// Prefix of every REST endpoint the role may call
    pub fn api_prefix(&self) -> String {
        format!("/api/{}", self.slug())
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Role::ALL
            .into_iter()
            .find(|role| role.slug().eq_ignore_ascii_case(slug.trim()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_slug(s).ok_or_else(|| anyhow::anyhow!("unknown role: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip() {
        for role in Role::ALL {
            assert_eq!(role.slug().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Corporate".parse::<Role>().unwrap(), Role::Corporate);
        assert_eq!(" ADMIN ".parse::<Role>().unwrap(), Role::Admin);
        assert!("driver".parse::<Role>().is_err());
    }

    #[test]
    fn test_storage_keys_are_per_role() {
        assert_eq!(Role::Vendor.storage_key(), "ara_vendor_token");
        assert_eq!(Role::Agent.api_prefix(), "/api/agent");
        let keys: std::collections::HashSet<String> =
            Role::ALL.iter().map(|r| r.storage_key()).collect();
        assert_eq!(keys.len(), Role::ALL.len());
    }

    #[test]
    fn test_serde_uses_slug() {
        assert_eq!(serde_json::to_string(&Role::Partner).unwrap(), "\"partner\"");
    }
}
