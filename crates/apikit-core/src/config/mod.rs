//! Shared configuration schemas.
//!
//! Deserialized from TOML files via the `config` crate: a default file plus
//! an environment overlay, with `APIKIT_`-prefixed environment variables
//! taking precedence.

pub mod logging;

use serde::{Deserialize, Serialize};

use self::logging::{HttpLogConfig, LoggingConfig};
use crate::error::AppError;
use crate::profile::Profile;

/// Root configuration for the shared service plumbing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Active profile name (`dev`, `test`, `prod`, …).
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// HTTP request/response log capture settings.
    #[serde(default)]
    pub http_log: HttpLogConfig,
}

fn default_profile() -> String {
    "production".to_string()
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            logging: LoggingConfig::default(),
            http_log: HttpLogConfig::default(),
        }
    }
}

impl CommonConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default` with an environment-specific overlay and
    /// environment variables prefixed with `APIKIT_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(config::Environment::with_prefix("APIKIT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// The resolved [`Profile`] for the configured name.
    pub fn profile(&self) -> Profile {
        Profile::from_name(&self.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CommonConfig::default();
        assert_eq!(config.profile(), Profile::Production);
        assert_eq!(config.logging.level, "info");
        assert!(config.http_log.capture_request_body);
    }

    #[test]
    fn test_profile_resolution() {
        let config = CommonConfig {
            profile: "dev".to_string(),
            ..CommonConfig::default()
        };
        assert!(config.profile().is_development());
    }
}
