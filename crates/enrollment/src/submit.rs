//! Submission seam.
//!
//! The form hands a fully validated record to a [`SubmissionHandler`]
//! supplied by the host application. [`LogSubmitter`] is the stand-in used
//! when there is nowhere real to send it.

use crate::{core::issue::Issues, record::EnrollmentRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use tracing::info;

///
/// SubmitError
///

#[derive(Debug, ThisError)]
pub enum SubmitError {
    #[error("submission blocked by validation: {0}")]
    Invalid(Issues),

    #[error("submission rejected: {0}")]
    Rejected(String),
}

///
/// Acknowledgement
/// What the user is told after a successful submission.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Acknowledgement {
    pub message: String,
}

impl Acknowledgement {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

///
/// SubmissionHandler
///
/// Receives a record only after it has passed validation.
///

pub trait SubmissionHandler {
    fn submit(&mut self, record: &EnrollmentRecord) -> Result<Acknowledgement, SubmitError>;
}

impl<F> SubmissionHandler for F
where
    F: FnMut(&EnrollmentRecord) -> Result<Acknowledgement, SubmitError>,
{
    fn submit(&mut self, record: &EnrollmentRecord) -> Result<Acknowledgement, SubmitError> {
        self(record)
    }
}

///
/// LogSubmitter
/// Logs the record and acknowledges it.
///

#[derive(Clone, Debug)]
pub struct LogSubmitter {
    acknowledgement: String,
    submitted: usize,
}

impl LogSubmitter {
    #[must_use]
    pub fn new(acknowledgement: impl Into<String>) -> Self {
        Self {
            acknowledgement: acknowledgement.into(),
            submitted: 0,
        }
    }

    /// Number of records acknowledged so far.
    #[must_use]
    pub const fn submitted(&self) -> usize {
        self.submitted
    }
}

impl Default for LogSubmitter {
    fn default() -> Self {
        Self::new(crate::config::FormConfig::default().acknowledgement)
    }
}

impl SubmissionHandler for LogSubmitter {
    fn submit(&mut self, record: &EnrollmentRecord) -> Result<Acknowledgement, SubmitError> {
        let payload = serde_json::to_string(record)
            .map_err(|e| SubmitError::Rejected(format!("record not serializable: {e}")))?;

        self.submitted += 1;
        info!(submission = self.submitted, record = %payload, "enrollment submitted");

        Ok(Acknowledgement::new(self.acknowledgement.clone()))
    }
}

///
/// TESTS
///
