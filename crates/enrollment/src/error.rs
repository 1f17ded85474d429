use crate::{
    config::ConfigError,
    core::{self, issue::Issues},
    record::RecordError,
    schema::SchemaError,
    submit::SubmitError,
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error for the enrollment crate.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    CoreError(#[from] core::Error),

    #[error(transparent)]
    RecordError(#[from] RecordError),

    #[error(transparent)]
    SchemaError(#[from] SchemaError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    SubmitError(#[from] SubmitError),
}

impl From<core::ValidateError> for Error {
    fn from(err: core::ValidateError) -> Self {
        core::Error::from(err).into()
    }
}

impl Error {
    /// Field issues, when this error is a failed validation.
    #[must_use]
    pub const fn issues(&self) -> Option<&Issues> {
        match self {
            Self::CoreError(err) => err.issues(),
            Self::SubmitError(SubmitError::Invalid(issues)) => Some(issues),
            _ => None,
        }
    }
}
