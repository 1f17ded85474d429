use crate::core::{issue::IssueContext, traits::Validator};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// RangeError
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum RangeError {
    #[error("range bounds must be finite")]
    NotFinite,

    #[error("range requires min <= max (got {min} > {max})")]
    Inverted { min: f64, max: f64 },
}

///
/// Range
/// Inclusive numeric bounds.
///

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    pub fn new(min: impl Into<f64>, max: impl Into<f64>) -> Result<Self, RangeError> {
        let (min, max) = (min.into(), max.into());

        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::NotFinite);
        }
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }
}

impl Validator<f64> for Range {
    fn validate(&self, n: &f64, ctx: &mut dyn IssueContext) {
        if *n < self.min {
            ctx.issue(format!("must be at least {}", self.min));
        } else if *n > self.max {
            ctx.issue(format!("must be at most {}", self.max));
        }
    }
}

///
/// Integer
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Integer;

impl Validator<f64> for Integer {
    fn validate(&self, n: &f64, ctx: &mut dyn IssueContext) {
        if n.fract() != 0.0 {
            ctx.issue("must be a whole number");
        }
    }
}

///
/// TESTS
///
