use std::env;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5555;

/// Server settings, read from the environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// `DATABASE_URL`
    pub database_url: String,
    /// `HOST`
    pub host: String,
    /// `PORT`
    pub port: u16,
    /// `RUN_MIGRATIONS`: apply pending migrations before serving
    pub run_migrations: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got `{value}`")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            run_migrations: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                expected: "a port number",
                value: port,
            })?;
        }
        if let Some(flag) = lookup("RUN_MIGRATIONS") {
            config.run_migrations = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "RUN_MIGRATIONS",
                        expected: "a boolean",
                        value: flag,
                    });
                }
            };
        }

        Ok(config)
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server_url(), "127.0.0.1:5555");
        assert_eq!(config.database_url, "sqlite://app.db?mode=rwc");
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("RUN_MIGRATIONS", "off"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            Config {
                database_url: "sqlite::memory:".to_owned(),
                host: "0.0.0.0".to_owned(),
                port: 8080,
                run_migrations: false,
            }
        );
    }

    #[test]
    fn invalid_values() {
        assert_eq!(
            Config::from_lookup(lookup(&[("PORT", "http")])),
            Err(ConfigError::Invalid {
                key: "PORT",
                expected: "a port number",
                value: "http".to_owned(),
            })
        );
        let err = Config::from_lookup(lookup(&[("RUN_MIGRATIONS", "maybe")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "RUN_MIGRATIONS must be a boolean, got `maybe`"
        );
    }
}
