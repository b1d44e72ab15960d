#![forbid(unsafe_code)]

//! Sticky header configuration.
//!
//! # Environment
//!
//! | Variable           | Values              | Default |
//! |--------------------|---------------------|---------|
//! | `STICKY_TOP_INSET` | finite float        | `0`     |
//! | `STICKY_HANDOFF`   | `push` \| `overlap` | `push`  |
//!
//! Unset variables keep their defaults. Values are trimmed and matched
//! case-insensitively.

use serde::{Deserialize, Serialize};

/// Environment variable holding [`StickyConfig::top_inset`].
pub const ENV_TOP_INSET: &str = "STICKY_TOP_INSET";

/// Environment variable holding [`StickyConfig::handoff`].
pub const ENV_HANDOFF: &str = "STICKY_HANDOFF";

/// What happens when the next header reaches a pinned one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandoffPolicy {
    /// The next header pushes the pinned one up by exactly its intrusion.
    #[default]
    Push,
    /// The pinned header stays put and the next header slides over it.
    Overlap,
}

impl HandoffPolicy {
    /// Parse a policy name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "push" => Some(Self::Push),
            "overlap" => Some(Self::Overlap),
            _ => None,
        }
    }

    /// Canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Overlap => "overlap",
        }
    }
}

/// Errors from configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable held a value that could not be parsed.
    InvalidValue { key: String, value: String },
    /// A numeric value was NaN or infinite.
    NonFinite { key: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, value } => write!(f, "invalid value for {key}: '{value}'"),
            Self::NonFinite { key } => write!(f, "{key} must be a finite number"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Pinned edge and hand-off behavior shared by every header in a list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StickyConfig {
    /// Viewport-relative y at which headers pin.
    pub top_inset: f64,
    /// Hand-off behavior.
    pub handoff: HandoffPolicy,
}

impl StickyConfig {
    /// Set the pinned edge.
    #[must_use]
    pub fn with_top_inset(mut self, top_inset: f64) -> Self {
        self.top_inset = top_inset;
        self
    }

    /// Set the hand-off policy.
    #[must_use]
    pub fn with_handoff(mut self, handoff: HandoffPolicy) -> Self {
        self.handoff = handoff;
        self
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.top_inset.is_finite() {
            return Err(ConfigError::NonFinite {
                key: ENV_TOP_INSET.to_string(),
            });
        }
        Ok(())
    }

    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Load using a custom environment lookup.
    pub fn from_env_with<F>(get_env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = get_env(ENV_TOP_INSET) {
            config.top_inset =
                value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidValue {
                        key: ENV_TOP_INSET.to_string(),
                        value: value.clone(),
                    })?;
        }
        if let Some(value) = get_env(ENV_HANDOFF) {
            config.handoff =
                HandoffPolicy::parse(&value).ok_or_else(|| ConfigError::InvalidValue {
                    key: ENV_HANDOFF.to_string(),
                    value: value.clone(),
                })?;
        }
        config.validate()?;
        Ok(config)
    }
}
