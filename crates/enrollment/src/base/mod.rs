//! Builtin validators and sanitizers.
//!
//! Validators report predicates ("must be at least 1900"); the calling
//! context supplies the subject.

pub mod sanitizer;
pub mod validator;
