//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable for the listen address.
pub const ADDR_VAR: &str = "ROUTE_SERVER_ADDR";
/// Environment variable for the cities file.
pub const CITIES_VAR: &str = "ROUTE_SERVER_CITIES";
/// Environment variable for the routes file.
pub const ROUTES_VAR: &str = "ROUTE_SERVER_ROUTES";
/// Environment variable for allowed CORS origins (comma separated).
pub const CORS_VAR: &str = "ROUTE_SERVER_CORS_ORIGINS";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Listen address could not be parsed
    #[error("invalid ROUTE_SERVER_ADDR '{0}': expected host:port")]
    InvalidAddr(String),
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// JSON array of cities.
    pub cities_path: PathBuf,

    /// JSON array of routes.
    pub routes_path: PathBuf,

    /// Origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup(ADDR_VAR) {
            config.addr = addr
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr(addr.clone()))?;
        }
        if let Some(path) = lookup(CITIES_VAR) {
            config.cities_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ROUTES_VAR) {
            config.routes_path = PathBuf::from(path);
        }
        if let Some(origins) = lookup(CORS_VAR) {
            config.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            cities_path: PathBuf::from("data/cities.json"),
            routes_path: PathBuf::from("data/routes.json"),
            allowed_origins: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.addr.to_string(), "127.0.0.1:8000");
        assert_eq!(config.cities_path, PathBuf::from("data/cities.json"));
        assert_eq!(config.routes_path, PathBuf::from("data/routes.json"));
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn unset_variables_use_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn custom_config() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ADDR_VAR, "0.0.0.0:9000"),
            (CITIES_VAR, "/srv/cities.json"),
            (ROUTES_VAR, "/srv/routes.json"),
            (CORS_VAR, "http://localhost:8000, https://example.org,,"),
        ]))
        .unwrap();

        assert_eq!(config.addr.to_string(), "0.0.0.0:9000");
        assert_eq!(config.cities_path, PathBuf::from("/srv/cities.json"));
        assert_eq!(config.routes_path, PathBuf::from("/srv/routes.json"));
        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:8000", "https://example.org"]
        );
    }

    #[test]
    fn invalid_addr() {
        let err = ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "localhost")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidAddr("localhost".into()));
        assert_eq!(
            err.to_string(),
            "invalid ROUTE_SERVER_ADDR 'localhost': expected host:port"
        );
    }
}
