use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://coaches.db";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not in the correct format: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub cors_allowed_origin: String,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            cors_allowed_origin: DEFAULT_CORS_ORIGIN.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from any variable source; unset variables take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: parse_var(&lookup, "HOST")?.unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN")
                .unwrap_or(defaults.cors_allowed_origin),
            max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS")?
                .unwrap_or(defaults.max_connections),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8081");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("CORS_ALLOWED_ORIGIN", "https://club.example"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9000");
        assert_eq!(config.cors_allowed_origin, "https://club.example");
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn rejects_malformed_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    }
}
