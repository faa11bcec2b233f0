//! Tracing configuration.

use csgtrace_math::Tolerance;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating [`TraceSettings`].
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A setting is out of range.
    #[error("invalid settings: {0}")]
    Invalid(String),

    /// The TOML text could not be parsed.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parameters for following a ray through a geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceSettings {
    /// Distance a ray is nudged past each surface it crosses.
    pub bump_epsilon: f64,
    /// Crossings after which a history is cut off. Guards against rays
    /// trapped between reflective surfaces.
    pub max_crossings: usize,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            bump_epsilon: Tolerance::BUMP,
            max_crossings: 10_000,
        }
    }
}

impl TraceSettings {
    /// Parse settings from TOML. Missing keys take their default values.
    ///
    /// ```
    /// let s = csgtrace::TraceSettings::from_toml_str("max_crossings = 50").unwrap();
    /// assert_eq!(s.max_crossings, 50);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.bump_epsilon.is_finite() || self.bump_epsilon <= 0.0 {
            return Err(SettingsError::Invalid(
                "bump_epsilon must be finite and positive".into(),
            ));
        }
        if self.max_crossings == 0 {
            return Err(SettingsError::Invalid(
                "max_crossings must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
