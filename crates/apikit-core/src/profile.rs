//! Environment profiles.
//!
//! The active profile decides whether internal error detail stays on error
//! responses. Unknown profile names resolve to [`Profile::Production`] so
//! detail stripping fails safe.

use std::fmt;
use std::sync::OnceLock;

static ACTIVE: OnceLock<Profile> = OnceLock::new();

/// Environment variable consulted when no profile was set explicitly.
pub const PROFILE_ENV: &str = "APIKIT_PROFILE";

/// Deployment environment of the running service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// `dev`, `development` — error detail is kept on responses.
    Development,
    /// `test`, `testing`.
    Test,
    /// `prod`, `preprod`, `production`, and anything unrecognized.
    Production,
}

impl Profile {
    /// Resolve a profile from its configured name.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "dev" | "development" => Self::Development,
            "test" | "testing" => Self::Test,
            _ => Self::Production,
        }
    }

    /// Set the process-wide active profile. First call wins; later calls are
    /// ignored so libraries cannot override the service binary.
    pub fn init(profile: Profile) {
        let _ = ACTIVE.set(profile);
    }

    /// The process-wide active profile.
    ///
    /// Falls back to the `APIKIT_PROFILE` environment variable, then to
    /// [`Profile::Production`].
    pub fn active() -> Self {
        *ACTIVE.get_or_init(|| {
            std::env::var(PROFILE_ENV)
                .map(|name| Self::from_name(&name))
                .unwrap_or(Self::Production)
        })
    }

    /// Whether this is a development profile.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        };
        f.write_str(name)
    }
}
