use std::env;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Log filter used when `RATINGS_LOG_LEVEL` is not set.
    pub fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "warn",
            Self::Test => "debug",
            Self::Production => "error",
        }
    }
}

/// How rating reports are written to standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidOutputFormat(value.to_string())),
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub output: OutputConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("RATINGS_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let format = match env::var("RATINGS_OUTPUT") {
            Ok(value) => OutputFormat::parse(&value)?,
            Err(_) => OutputFormat::default(),
        };

        let log_level = env::var("RATINGS_LOG_LEVEL")
            .unwrap_or_else(|_| environment.default_log_level().to_string());

        Ok(Self {
            environment,
            output: OutputConfig { format },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: AppEnvironment::Development,
            output: OutputConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

/// Rendering controls for command output.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: AppEnvironment::Development.default_log_level().to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("RATINGS_OUTPUT must be 'text' or 'json', got '{0}'")]
    InvalidOutputFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("RATINGS_ENV");
        env::remove_var("RATINGS_OUTPUT");
        env::remove_var("RATINGS_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn reads_overrides_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RATINGS_ENV", "CI");
        env::set_var("RATINGS_OUTPUT", " JSON ");
        env::set_var("RATINGS_LOG_LEVEL", "ratings=debug");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.telemetry.log_level, "ratings=debug");
        reset_env();
    }

    #[test]
    fn environment_picks_default_log_level() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RATINGS_ENV", "production");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.telemetry.log_level, "error");

        env::set_var("RATINGS_ENV", "test");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.telemetry.log_level, "debug");
        reset_env();
    }

    #[test]
    fn defaults_match_unconfigured_load() {
        let config = AppConfig::default();
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn rejects_unknown_output_format() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RATINGS_OUTPUT", "yaml");
        let err = AppConfig::load().expect_err("yaml is not supported");
        assert!(matches!(err, ConfigError::InvalidOutputFormat(ref value) if value == "yaml"));
        assert_eq!(
            err.to_string(),
            "RATINGS_OUTPUT must be 'text' or 'json', got 'yaml'"
        );
        reset_env();
    }
}
