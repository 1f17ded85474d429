use crate::issue::Issues;
use thiserror::Error as ThisError;

///
/// ValidateError
///

#[derive(Debug, ThisError)]
pub enum ValidateError {
    #[error("validation failed: {0}")]
    ValidationFailed(Issues),
}

impl ValidateError {
    #[must_use]
    pub const fn issues(&self) -> &Issues {
        match self {
            Self::ValidationFailed(issues) => issues,
        }
    }

    #[must_use]
    pub fn into_issues(self) -> Issues {
        match self {
            Self::ValidationFailed(issues) => issues,
        }
    }
}

///
/// Validate
///
/// A node that can check itself as a whole.
/// Must NOT fail fast; every issue goes into `issues`.
///

pub trait Validate {
    fn validate_into(&self, issues: &mut Issues);
}

///
/// validate
/// Validate a node, collecting issues by field.
///
/// Validation is non-failing at the traversal level. All issues are
/// collected and returned together.
///
pub fn validate(node: &dyn Validate) -> Result<(), ValidateError> {
    let mut issues = Issues::new();
    node.validate_into(&mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidateError::ValidationFailed(issues))
    }
}

///
/// TESTS
///
