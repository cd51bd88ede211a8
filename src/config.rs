//! Configuration management for the contact book assistant.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file. Nothing here writes to stdout, which belongs to the
//! assistant dialogue.

use crate::book::DEFAULT_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use chrono::{Local, NaiveDate};
use std::env;

/// Configuration for the assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed "today" for the birthdays report; the local date when unset
    pub today: Option<NaiveDate>,

    /// Length of the upcoming birthdays window in days (default: 7)
    pub birthday_window_days: u32,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_TODAY`: reference date as `YYYY-MM-DD` (default: local date)
    /// - `BIRTHDAY_WINDOW_DAYS`: birthdays window, 1-366 (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let today = match env::var("ASSISTANT_TODAY") {
            Ok(val) => Some(Self::parse_date("ASSISTANT_TODAY", &val)?),
            Err(_) => None,
        };

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if !(1..=366).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be between 1 and 366".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            today,
            birthday_window_days,
            log_level,
        })
    }

    /// The date the birthdays report is computed from.
    pub fn reference_date(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn parse_date(var_name: &str, val: &str) -> ConfigResult<NaiveDate> {
        NaiveDate::parse_from_str(val.trim(), "%Y-%m-%d").map_err(|_| {
            ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a date in YYYY-MM-DD format, got: {}", val),
            }
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            today: None,
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Restores the touched variables on drop
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }

        fn unset(&mut self, key: &str) {
            env::remove_var(key);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.today, None);
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    fn test_reference_date_uses_fixed_today() {
        let config = Config {
            today: NaiveDate::from_ymd_opt(2024, 11, 1),
            ..Config::default()
        };
        assert_eq!(
            config.reference_date(),
            NaiveDate::from_ymd_opt(2024, 11, 1).unwrap()
        );
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let mut guard = EnvGuard::new();
        guard.unset("ASSISTANT_TODAY");
        guard.unset("BIRTHDAY_WINDOW_DAYS");
        guard.unset("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.today, None);
        assert_eq!(config.birthday_window_days, 7);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_TODAY", "2024-11-01");
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 11, 1));
        assert_eq!(config.birthday_window_days, 14);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_today() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_TODAY", "01.11.2024");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "ASSISTANT_TODAY"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_window_out_of_range() {
        let mut guard = EnvGuard::new();
        guard.unset("ASSISTANT_TODAY");
        guard.set("BIRTHDAY_WINDOW_DAYS", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "BIRTHDAY_WINDOW_DAYS")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u32_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32_INVALID", "seven");

        assert!(Config::parse_env_u32("TEST_U32_INVALID", 7).is_err());
        assert_eq!(Config::parse_env_u32("NONEXISTENT_U32", 7).unwrap(), 7);
    }
}
