use crate::{issue::Issues, validate::ValidateError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error for the core runtime.
/// Field-level problems, including values that do not parse as their kind,
/// are collected as issues and wrapped in [`ValidateError`].
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ValidateError(#[from] ValidateError),
}

impl Error {
    /// Issues carried by a failed validation, if that is what this error is.
    #[must_use]
    pub const fn issues(&self) -> Option<&Issues> {
        match self {
            Self::ValidateError(err) => Some(err.issues()),
        }
    }
}
