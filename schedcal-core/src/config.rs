//! Global schedcal configuration.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{SchedCalError, SchedCalResult};

/// Environment variable holding the scheduling service credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

static DEFAULT_TIMEZONE: &str = "UTC";
static DEFAULT_MODEL: &str = "gpt-4";

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Global configuration at ~/.config/schedcal/config.toml
///
/// The timezone applies to every instant resolved in the session; events do
/// not carry per-event zones.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SchedConfig {
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for SchedConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            model: default_model(),
        }
    }
}

impl SchedConfig {
    pub fn config_path() -> SchedCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SchedCalError::Config("Could not determine config directory".into()))?
            .join("schedcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it doesn't exist.
    pub fn load() -> SchedCalResult<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|e| SchedCalError::Config(format!("Could not parse {}: {e}", path.display())))
    }

    /// The configured timezone as a usable `Tz`.
    pub fn tz(&self) -> SchedCalResult<Tz> {
        self.timezone.parse().map_err(|_| {
            SchedCalError::Config(format!("Unknown timezone '{}' in config", self.timezone))
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> SchedCalResult<()> {
        let contents = format!(
            "\
# schedcal configuration

# Timezone attached to every event (IANA name):
# timezone = \"{DEFAULT_TIMEZONE}\"

# Model used by the scheduling service:
# model = \"{DEFAULT_MODEL}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SchedCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SchedCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// Read the scheduling service credential from the environment.
pub fn api_key() -> SchedCalResult<String> {
    std::env::var(API_KEY_ENV).map_err(|_| {
        SchedCalError::Config(format!(
            "No API credential found. Set the {API_KEY_ENV} environment variable."
        ))
    })
}
