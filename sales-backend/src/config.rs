use std::env;
use std::str::FromStr;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
    /// Set to "false" or "0" to start with an empty store.
    pub const SEED_DEMO_DATA: &str = "SEED_DEMO_DATA";
    pub const SESSION_TTL_HOURS: &str = "SESSION_TTL_HOURS";
    /// Restrict CORS to a single origin. Any origin is allowed when unset.
    pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const BIND_ADDRESS: &str = "0.0.0.0";
    pub const SEED_DEMO_DATA: bool = true;
    pub const SESSION_TTL_HOURS: i64 = 24;
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub seed_demo_data: bool,
    pub session_ttl_hours: i64,
    pub cors_allowed_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: defaults::PORT,
            bind_address: defaults::BIND_ADDRESS.to_string(),
            seed_demo_data: defaults::SEED_DEMO_DATA,
            session_ttl_hours: defaults::SESSION_TTL_HOURS,
            cors_allowed_origin: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any name -> value lookup. Bad values fall back to defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let session_ttl_hours = parse_or_default(
            env_vars::SESSION_TTL_HOURS,
            lookup(env_vars::SESSION_TTL_HOURS),
            defaults::SESSION_TTL_HOURS,
        );
        let session_ttl_hours = if session_ttl_hours > 0 {
            session_ttl_hours
        } else {
            log::warn!(
                "[CONFIG] {} must be positive, using {}",
                env_vars::SESSION_TTL_HOURS,
                defaults::SESSION_TTL_HOURS
            );
            defaults::SESSION_TTL_HOURS
        };

        Self {
            port: parse_or_default(env_vars::PORT, lookup(env_vars::PORT), defaults::PORT),
            bind_address: non_empty(lookup(env_vars::BIND_ADDRESS))
                .unwrap_or_else(|| defaults::BIND_ADDRESS.to_string()),
            seed_demo_data: lookup(env_vars::SEED_DEMO_DATA)
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults::SEED_DEMO_DATA),
            session_ttl_hours,
            cors_allowed_origin: non_empty(lookup(env_vars::CORS_ALLOWED_ORIGIN))
                .map(|origin| origin.trim_end_matches('/').to_string()),
        }
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.session_ttl_hours)
    }
}

fn parse_or_default<T: FromStr + Copy + std::fmt::Display>(
    name: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            log::warn!("[CONFIG] Invalid {}='{}', using {}", name, value, default);
            default
        }),
    }
}

/// Anything other than "false"/"0"/"no"/"off" counts as enabled.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address, "0.0.0.0");
        assert!(config.seed_demo_data);
        assert_eq!(config.session_ttl_hours, 24);
        assert!(config.cors_allowed_origin.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("BIND_ADDRESS", "127.0.0.1"),
            ("SEED_DEMO_DATA", "false"),
            ("SESSION_TTL_HOURS", "2"),
            ("CORS_ALLOWED_ORIGIN", "http://localhost:3000/"),
        ]);
        assert_eq!(config.port, 9090);
        assert_eq!(config.bind_address, "127.0.0.1");
        assert!(!config.seed_demo_data);
        assert_eq!(config.session_ttl(), chrono::Duration::hours(2));
        assert_eq!(config.cors_allowed_origin.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("PORT", "eighty"),
            ("SESSION_TTL_HOURS", "-3"),
            ("BIND_ADDRESS", "  "),
            ("CORS_ALLOWED_ORIGIN", ""),
        ]);
        assert_eq!(config.port, defaults::PORT);
        assert_eq!(config.session_ttl_hours, defaults::SESSION_TTL_HOURS);
        assert_eq!(config.bind_address, defaults::BIND_ADDRESS);
        assert!(config.cors_allowed_origin.is_none());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(" FALSE "));
        assert!(!parse_flag("off"));
    }
}
