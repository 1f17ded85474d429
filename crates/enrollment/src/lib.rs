//! ## Crate layout
//! - `base`: builtin validators and sanitizers used by the schema.
//! - `catalog`: static academic level -> department -> program tables.
//! - `config`: TOML-backed form configuration.
//! - `core`: runtime vocabulary (values, dates, issues, traits).
//! - `form`: interactive form state and the submit flow.
//! - `record`: the enrollment record and its field list.
//! - `resolver`: dependent option lists derived from the catalog.
//! - `schema`: the declarative rule table and its enrollment instance.
//! - `submit`: the submission handler seam and its logging stub.
//! - `validate`: the generic interpreter that runs a schema over a record.
//!
//! The `prelude` module exposes what a host application needs to drive a form.

pub use enrollment_core as core;

pub mod base;
pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod record;
pub mod resolver;
pub mod schema;
pub mod submit;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        catalog::AcademicLevel,
        config::{FormConfig, SelectionPolicy},
        core::{issue::Issues, types::Date},
        form::EnrollmentForm,
        record::{EnrollmentRecord, Field},
        resolver::{departments_for, programs_for},
        submit::{Acknowledgement, LogSubmitter, SubmissionHandler, SubmitError},
        validate::{validate, validate_at},
    };
}
