//! Form configuration.
//!
//! Every setting has a default, so an empty TOML document is a valid
//! configuration and yields the stock enrollment form.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {name} bounds: min {min} is greater than max {max}")]
    Bounds {
        name: &'static str,
        min: f64,
        max: f64,
    },
}

///
/// SelectionPolicy
///
/// What the form does with a department/program selection that an upstream
/// change has made unavailable.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Unset the stale selection immediately.
    #[default]
    Clear,

    /// Leave it in place; validation still rejects it on submit.
    Keep,
}

///
/// YearBounds
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl Default for YearBounds {
    fn default() -> Self {
        Self {
            min: 1900,
            max: 2026,
        }
    }
}

///
/// ScoreBounds
///

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for ScoreBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }
}

///
/// FormConfig
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub selection_policy: SelectionPolicy,

    /// Message returned to the user after a successful submission.
    pub acknowledgement: String,

    /// Applies to all three school levels.
    pub graduation_year: YearBounds,

    /// Senior high general average.
    pub average: ScoreBounds,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            selection_policy: SelectionPolicy::default(),
            acknowledgement: "Registration submitted successfully!".to_string(),
            graduation_year: YearBounds::default(),
            average: ScoreBounds::default(),
        }
    }
}

impl FormConfig {
    /// Parse and check a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.check()?;

        Ok(config)
    }

    /// Read, parse and check a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        let years = self.graduation_year;
        if years.min > years.max {
            return Err(ConfigError::Bounds {
                name: "graduation_year",
                min: years.min.into(),
                max: years.max.into(),
            });
        }

        let avg = self.average;
        if avg.min > avg.max {
            return Err(ConfigError::Bounds {
                name: "average",
                min: avg.min,
                max: avg.max,
            });
        }

        Ok(())
    }
}

///
/// TESTS
///
