//! Generic schema interpreter.
//!
//! Each row is checked on its own: an empty required field reports only its
//! required message, a value that does not parse as its kind reports only a
//! type message, and otherwise every rule on the row runs. Rows never stop
//! other rows from being checked.

use crate::{
    base::{
        sanitizer::text::Trim,
        validator::{collection::OneOf, num::Integer, text::Digits, time::NotAfter, web::Email},
    },
    config::FormConfig,
    core::{
        self,
        issue::{IssueContext, Issues, ScopedContext},
        traits::{Sanitizer, Validator},
        types::Date,
        validate::Validate,
        value::FieldValue,
    },
    error::Error,
    record::{EnrollmentRecord, Field},
    resolver::{departments_for, programs_for},
    schema::{FieldSchema, Rule, RuleKind, Schema, enrollment_schema},
};
use tracing::debug;

///
/// RecordValidation
/// A record bound to the schema and date it is checked against.
///

pub struct RecordValidation<'a> {
    pub schema: &'a Schema,
    pub record: &'a EnrollmentRecord,
    pub today: Date,
}

impl RecordValidation<'_> {
    fn validate_row(&self, row: &FieldSchema, issues: &mut Issues) {
        let field = row.field;

        let mut raw = self.record.value(field).to_string();
        Trim.sanitize(&mut raw);

        if raw.is_empty() {
            if row.required {
                issues.push(field.name(), row.required_message());
            }
            return;
        }

        let value = match FieldValue::parse(row.kind(), &raw) {
            Ok(value) => value,
            Err(err) => {
                issues.push(field.name(), format!("{} {}", field.label(), err.predicate()));
                return;
            }
        };

        for rule in &row.rules {
            let mut ctx =
                ScopedContext::new(issues, field.name(), field.label()).with_message(rule.message);

            self.apply(rule, &value, &mut ctx);
        }
    }

    fn apply(&self, rule: &Rule, value: &FieldValue<'_>, ctx: &mut dyn IssueContext) {
        // Schema::new guarantees the kinds line up, so mismatches are skipped.
        match (&rule.kind, value) {
            (RuleKind::MaxLen(max), FieldValue::Text(s)) => max.validate(*s, ctx),
            (RuleKind::Pattern(pattern), FieldValue::Text(s)) => pattern.validate(*s, ctx),
            (RuleKind::Digits, FieldValue::Text(s)) => Digits.validate(*s, ctx),
            (RuleKind::Email, FieldValue::Text(s)) => Email.validate(*s, ctx),
            (RuleKind::OneOf(options), FieldValue::Text(s)) => {
                OneOf::new(options).validate(*s, ctx);
            }
            (kind @ (RuleKind::DepartmentOf { .. } | RuleKind::ProgramOf { .. }), _)
                if !self.references_set(kind) => {}
            (RuleKind::DepartmentOf { level }, FieldValue::Text(s)) => {
                let offered = departments_for(self.trimmed(*level));
                OneOf::new(&offered).validate(*s, ctx);
            }
            (RuleKind::ProgramOf { level, department }, FieldValue::Text(s)) => {
                let offered = programs_for(self.trimmed(*level), self.trimmed(*department));
                OneOf::new(offered).validate(*s, ctx);
            }
            (RuleKind::Integer, FieldValue::Number(n)) => Integer.validate(n, ctx),
            (RuleKind::Range(range), FieldValue::Number(n)) => range.validate(n, ctx),
            (RuleKind::NotAfter(bound), FieldValue::Date(d)) => {
                NotAfter::new(bound.resolve(self.today)).validate(d, ctx);
            }
            _ => {}
        }
    }

    fn trimmed(&self, field: Field) -> &str {
        self.record.value(field).trim()
    }

    /// Cross-field rules wait until the fields they read are filled in;
    /// those fields report their own required message.
    fn references_set(&self, kind: &RuleKind) -> bool {
        kind.references()
            .into_iter()
            .all(|f| !self.trimmed(f).is_empty())
    }
}

impl Validate for RecordValidation<'_> {
    fn validate_into(&self, issues: &mut Issues) {
        for row in self.schema.fields() {
            self.validate_row(row, issues);
        }

        debug!(
            fields = self.schema.fields().len(),
            invalid = issues.len(),
            today = %self.today,
            "validated enrollment record"
        );
    }
}

/// Check a record against a schema as of `today`.
pub fn validate_with(
    schema: &Schema,
    record: &EnrollmentRecord,
    today: Date,
) -> Result<(), core::ValidateError> {
    core::validate(&RecordValidation {
        schema,
        record,
        today,
    })
}

/// Check a record against the default enrollment schema as of `today`.
pub fn validate_at(record: &EnrollmentRecord, today: Date) -> Result<(), Error> {
    let schema = enrollment_schema(&FormConfig::default())?;
    validate_with(&schema, record, today)?;

    Ok(())
}

/// Check a record against the default enrollment schema as of today (UTC).
pub fn validate(record: &EnrollmentRecord) -> Result<(), Error> {
    validate_at(record, Date::today())
}

///
/// TESTS
///
