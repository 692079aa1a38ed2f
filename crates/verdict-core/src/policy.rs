//! Report policy configuration loaded from TOML.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, VerdictError};

/// Environment variable naming a TOML file consulted by [`ReportPolicy::discover`].
pub const CONFIG_ENV: &str = "VERDICT_CONFIG";

/// Rendering used by reporters when a failure is surfaced.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Plain message followed by optional context and hint lines.
    #[default]
    Text,
    /// Canonical JSON of the failure payload.
    Json,
}

/// Policy controlling how assertion failures are rendered and logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportPolicy {
    /// Output format of rendered failures.
    #[serde(default)]
    pub format: ReportFormat,
    /// Render context entries below the message.
    #[serde(default = "ReportPolicy::default_include_context")]
    pub include_context: bool,
    /// Render the hint below the message.
    #[serde(default = "ReportPolicy::default_include_hint")]
    pub include_hint: bool,
    /// Emit a `tracing` event for every reported failure.
    #[serde(default = "ReportPolicy::default_log_failures")]
    pub log_failures: bool,
}

impl ReportPolicy {
    const fn default_include_context() -> bool {
        true
    }

    const fn default_include_hint() -> bool {
        true
    }

    const fn default_log_failures() -> bool {
        true
    }

    /// Parses a policy from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, VerdictError> {
        toml::from_str(contents).map_err(|err| {
            VerdictError::Config(ErrorInfo::new("verdict.config.parse", err.to_string()))
        })
    }

    /// Loads a policy from a TOML file.
    pub fn load(path: &Path) -> Result<Self, VerdictError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            VerdictError::Config(
                ErrorInfo::new(
                    "verdict.config.read",
                    format!("failed to read report policy: {err}"),
                )
                .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_toml_str(&contents).map_err(|err| match err {
            VerdictError::Config(info) => VerdictError::Config(
                info.with_context("path", path.display().to_string()),
            ),
            other => other,
        })
    }

    /// Loads the policy named by [`CONFIG_ENV`], or the default when unset.
    pub fn discover() -> Result<Self, VerdictError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }
}

impl Default for ReportPolicy {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            include_context: Self::default_include_context(),
            include_hint: Self::default_include_hint(),
            log_failures: Self::default_log_failures(),
        }
    }
}
