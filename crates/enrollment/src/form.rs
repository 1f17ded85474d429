//! Interactive form state.
//!
//! Holds the record being edited plus the bookkeeping a form UI needs:
//! dirty/touched tracking, per-field errors, the current dependent option
//! lists and the submit flow.

use crate::{
    base::sanitizer::text::{DigitsOnly, Truncate},
    config::{FormConfig, SelectionPolicy},
    core::{issue::Issues, traits::Sanitizer, types::Date},
    error::Error,
    record::{EnrollmentRecord, Field},
    resolver::{self, departments_for, programs_for},
    schema::{Schema, enrollment_schema},
    submit::{Acknowledgement, SubmissionHandler, SubmitError},
    validate::validate_with,
};
use std::collections::BTreeSet;
use tracing::{debug, info};

///
/// EnrollmentForm
///

#[derive(Debug)]
pub struct EnrollmentForm {
    config: FormConfig,
    schema: Schema,
    record: EnrollmentRecord,
    dirty: BTreeSet<Field>,
    touched: BTreeSet<Field>,
    errors: Issues,
    submit_count: usize,
    today: Option<Date>,
}

impl EnrollmentForm {
    pub fn new(config: FormConfig) -> Result<Self, Error> {
        config.check()?;
        let schema = enrollment_schema(&config)?;

        Ok(Self {
            config,
            schema,
            record: EnrollmentRecord::new(),
            dirty: BTreeSet::new(),
            touched: BTreeSet::new(),
            errors: Issues::new(),
            submit_count: 0,
            today: None,
        })
    }

    /// Pin the date used for the date-of-birth check.
    #[must_use]
    pub const fn with_today(mut self, today: Date) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> Date {
        self.today.unwrap_or_else(Date::today)
    }

    // ------------------------------------------------------------------
    // Values
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn record(&self) -> &EnrollmentRecord {
        &self.record
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.record.value(field)
    }

    ///
    /// set
    ///
    /// Apply a user edit. Input is filtered the way the input widget would
    /// (digit-only keystrokes, length caps), dependent selections are
    /// reconciled per the selection policy, and after the first submit
    /// attempt the affected fields are re-validated.
    ///
    /// Returns the downstream fields that were cleared.
    ///
    pub fn set(&mut self, field: Field, input: impl Into<String>) -> Vec<Field> {
        let mut value = input.into();

        if field.digits_only() {
            DigitsOnly.sanitize(&mut value);
        }
        if let Some(max) = field.max_chars() {
            Truncate::new(max).sanitize(&mut value);
        }

        self.record.set(field, value);
        self.dirty.insert(field);

        let cleared = if field.dependents().is_empty() {
            Vec::new()
        } else {
            self.reconcile()
        };

        if self.submit_count > 0 {
            self.revalidate(std::iter::once(field).chain(cleared.iter().copied()));
        }

        cleared
    }

    /// Mark a field as visited (blurred).
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    fn reconcile(&mut self) -> Vec<Field> {
        match self.config.selection_policy {
            SelectionPolicy::Clear => {
                let cleared = resolver::reconcile(&mut self.record);
                self.dirty.extend(cleared.iter().copied());

                cleared
            }
            SelectionPolicy::Keep => Vec::new(),
        }
    }

    fn revalidate(&mut self, fields: impl Iterator<Item = Field>) {
        let fresh = match validate_with(&self.schema, &self.record, self.today()) {
            Ok(()) => Issues::new(),
            Err(err) => err.into_issues(),
        };

        for field in fields {
            self.errors.refresh(field.name(), &fresh);
        }
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    #[must_use]
    pub fn is_dirty(&self, field: Field) -> bool {
        self.dirty.contains(&field)
    }

    pub fn dirty_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.dirty.iter().copied()
    }

    #[must_use]
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    #[must_use]
    pub const fn submit_count(&self) -> usize {
        self.submit_count
    }

    #[must_use]
    pub const fn config(&self) -> &FormConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Options
    // ------------------------------------------------------------------

    /// Department options for the current academic level.
    #[must_use]
    pub fn departments(&self) -> Vec<&'static str> {
        departments_for(self.value(Field::AcademicLevel))
    }

    /// Program options for the current level and department.
    #[must_use]
    pub fn programs(&self) -> &'static [&'static str] {
        programs_for(
            self.value(Field::AcademicLevel),
            self.value(Field::CollegeDepartment),
        )
    }

    // ------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn errors(&self) -> &Issues {
        &self.errors
    }

    /// Message to render beside a field's input.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.first(field.name())
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    ///
    /// submit
    ///
    /// Validate the trimmed record. On success the handler is called exactly
    /// once with that same trimmed record and the form is reset; on failure
    /// the errors are kept for display and the handler is not called.
    ///
    pub fn submit<H>(&mut self, handler: &mut H) -> Result<Acknowledgement, SubmitError>
    where
        H: SubmissionHandler + ?Sized,
    {
        self.submit_count += 1;
        let record = self.record.sanitized();

        if let Err(err) = validate_with(&self.schema, &record, self.today()) {
            self.errors = err.into_issues();
            debug!(
                attempt = self.submit_count,
                invalid = self.errors.len(),
                "submission blocked"
            );

            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        self.errors.clear();
        let ack = handler.submit(&record)?;
        info!(attempt = self.submit_count, "submission acknowledged");

        self.reset();

        Ok(ack)
    }

    /// Discard the record and all bookkeeping.
    pub fn reset(&mut self) {
        self.record = EnrollmentRecord::new();
        self.dirty.clear();
        self.touched.clear();
        self.errors.clear();
        self.submit_count = 0;
    }
}

///
/// TESTS
///
