//! Core runtime for the enrollment form: field values, the `Date` type,
//! validator/sanitizer traits, issue collection and the error taxonomy.
#![warn(unreachable_pub)]

pub mod error;
pub mod issue;
pub mod traits;
pub mod types;
pub mod validate;
pub mod value;

pub use error::Error;
pub use validate::{ValidateError, validate};

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        issue::{IssueContext, Issues},
        traits::{Sanitizer, Validator},
        types::Date,
        value::{FieldKind, FieldValue},
    };
}
