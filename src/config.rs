use std::env;
use std::net::IpAddr;
use std::time::Duration;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database: DatabaseEnv,
    pub diagnostics_enabled: bool,
    pub request_timeout: Duration,
}

/// Database-related variables. Only reported by the diagnostic endpoint
/// unless the binary is built with the `database` feature.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseEnv {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .context("HOST must be a valid IP address")?;

        let port = lookup("PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let database = DatabaseEnv::from_lookup(&lookup);

        let diagnostics_enabled = match lookup("ENABLE_DIAGNOSTICS") {
            Some(value) => parse_flag(&value)
                .context("ENABLE_DIAGNOSTICS must be true or false")?,
            None => true,
        };

        let timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("REQUEST_TIMEOUT_SECS must be a valid number of seconds")?;

        Self::validate_config(port, timeout_secs)?;

        Ok(Config {
            host,
            port,
            database,
            diagnostics_enabled,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    fn validate_config(port: u16, timeout_secs: u64) -> Result<()> {
        if port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        if timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            database: DatabaseEnv::default(),
            diagnostics_enabled: true,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl DatabaseEnv {
    fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset; whitespace does not
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        DatabaseEnv {
            url: non_empty("DATABASE_URL"),
            name: non_empty("DATABASE_NAME"),
        }
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized flag value '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.host, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(config.database, DatabaseEnv::default());
        assert!(config.diagnostics_enabled);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_port_and_database_vars() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("DATABASE_URL", "postgres://u:p@localhost/school"),
            ("DATABASE_NAME", "school"),
        ])
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.database.url.as_deref(), Some("postgres://u:p@localhost/school"));
        assert_eq!(config.database.name.as_deref(), Some("school"));
    }

    #[test]
    fn test_empty_database_vars_are_unset() {
        let config = config_from(&[("DATABASE_URL", ""), ("DATABASE_NAME", "")]).unwrap();
        assert_eq!(config.database, DatabaseEnv::default());

        let config = config_from(&[("DATABASE_URL", "  ")]).unwrap();
        assert_eq!(config.database.url.as_deref(), Some("  "));
        assert_eq!(config.database.name, None);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("PORT", "0")]).is_err());
        assert!(config_from(&[("PORT", "70000")]).is_err());
        assert!(config_from(&[("HOST", "localhost:80")]).is_err());
        assert!(config_from(&[("REQUEST_TIMEOUT_SECS", "0")]).is_err());
        assert!(config_from(&[("ENABLE_DIAGNOSTICS", "maybe")]).is_err());
    }

    #[test]
    fn test_diagnostics_flag() {
        assert!(!config_from(&[("ENABLE_DIAGNOSTICS", "false")]).unwrap().diagnostics_enabled);
        assert!(!config_from(&[("ENABLE_DIAGNOSTICS", "OFF")]).unwrap().diagnostics_enabled);
        assert!(config_from(&[("ENABLE_DIAGNOSTICS", "1")]).unwrap().diagnostics_enabled);
    }
}
