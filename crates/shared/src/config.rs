//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Price-index dataset configuration.
    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Order of day and month in slash-separated dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `dd/mm/yyyy` first, `mm/dd/yyyy` as fallback.
    #[default]
    DayFirst,
    /// `mm/dd/yyyy` first, `dd/mm/yyyy` as fallback.
    MonthFirst,
}

/// Price-index dataset configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Path to the monthly CSV file.
    #[serde(default = "default_dataset_path")]
    pub path: String,
    /// Header of the date column.
    #[serde(default = "default_date_column")]
    pub date_column: String,
    /// Header of the month-over-month rate column.
    #[serde(default = "default_rate_column")]
    pub rate_column: String,
    /// Preferred order for ambiguous dates.
    #[serde(default)]
    pub date_order: DateOrder,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            date_column: default_date_column(),
            rate_column: default_rate_column(),
            date_order: DateOrder::default(),
        }
    }
}

fn default_dataset_path() -> String {
    "data/ipc_mom.csv".to_string()
}

fn default_date_column() -> String {
    "Date".to_string()
}

fn default_rate_column() -> String {
    "CPI_MoM".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AppError::Configuration`] if a source cannot be read
    /// or a value has the wrong type.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("VALORA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("config-test-missing")),
                ("VALORA__SERVER__PORT", None::<&str>),
                ("VALORA__DATASET__PATH", None),
                ("VALORA__DATASET__DATE_ORDER", None),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.dataset.path, "data/ipc_mom.csv");
                assert_eq!(config.dataset.date_column, "Date");
                assert_eq!(config.dataset.rate_column, "CPI_MoM");
                assert_eq!(config.dataset.date_order, DateOrder::DayFirst);
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("config-test-missing")),
                ("VALORA__SERVER__PORT", Some("9191")),
                ("VALORA__DATASET__PATH", Some("/srv/ipc.csv")),
                ("VALORA__DATASET__DATE_ORDER", Some("month_first")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 9191);
                assert_eq!(config.dataset.path, "/srv/ipc.csv");
                assert_eq!(config.dataset.date_order, DateOrder::MonthFirst);
            },
        );
    }

    #[test]
    fn test_invalid_value_is_configuration_error() {
        temp_env::with_vars(
            [
                ("RUN_MODE", Some("config-test-missing")),
                ("VALORA__SERVER__PORT", Some("not-a-port")),
            ],
            || {
                let err = AppConfig::load().unwrap_err();
                assert!(matches!(err, crate::AppError::Configuration(_)));
                assert_eq!(err.status_code(), 500);
            },
        );
    }
}
