//! Storefront configuration.

use std::env;

use thiserror::Error;

/// API version requested when none is configured.
pub const DEFAULT_API_VERSION: &str = "2024-10";

/// Configuration for connecting to the commerce backend's storefront API.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Store domain, e.g. `"my-shop.example.com"`.
    pub endpoint: String,

    /// Storefront access token sent with every request.
    pub access_token: String,

    /// API version segment of the GraphQL URL.
    pub api_version: String,
}

impl StorefrontConfig {
    /// Builds a configuration with the default API version.
    pub fn new(endpoint: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_owned(),
        }
    }

    /// Reads configuration from `STOREFRONT_ENDPOINT`,
    /// `STOREFRONT_ACCESS_TOKEN` and optionally `STOREFRONT_API_VERSION`.
    ///
    /// # Errors
    ///
    /// Returns an error when a required variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: require_var("STOREFRONT_ENDPOINT")?,
            access_token: require_var("STOREFRONT_ACCESS_TOKEN")?,
            api_version: env::var("STOREFRONT_API_VERSION")
                .unwrap_or_else(|_| DEFAULT_API_VERSION.to_owned()),
        })
    }

    /// Full GraphQL endpoint URL.
    #[must_use]
    pub fn graphql_url(&self) -> String {
        format!(
            "https://{}/api/{}/graphql.json",
            self.endpoint, self.api_version
        )
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::MissingVar(name)),
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_url_includes_version() {
        let config = StorefrontConfig::new("my-shop.example.com", "token");

        assert_eq!(
            config.graphql_url(),
            format!("https://my-shop.example.com/api/{DEFAULT_API_VERSION}/graphql.json")
        );
    }

    #[test]
    fn explicit_version_overrides_default() {
        let mut config = StorefrontConfig::new("my-shop.example.com", "token");
        config.api_version = "2023-07".into();

        assert_eq!(
            config.graphql_url(),
            "https://my-shop.example.com/api/2023-07/graphql.json"
        );
    }
}
