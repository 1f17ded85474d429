//! Declarative validation schema.
//!
//! A schema is a table of `(field, required, rules)` rows. Rules are data;
//! the interpreter in [`crate::validate`] gives them meaning.

mod enrollment;

pub use enrollment::enrollment_schema;

use crate::{
    base::validator::{len, num, text},
    core::{types::Date, value::FieldKind},
    record::Field,
};
use std::collections::HashSet;
use thiserror::Error as ThisError;

///
/// SchemaError
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("field '{0}' appears more than once")]
    DuplicateField(Field),

    #[error("rule '{rule}' on '{field}' expects a {expected} field, found {found}")]
    KindMismatch {
        field: Field,
        rule: &'static str,
        expected: FieldKind,
        found: FieldKind,
    },

    #[error("rule '{rule}' on '{field}' refers to non-text field '{target}'")]
    BadReference {
        field: Field,
        rule: &'static str,
        target: Field,
    },

    #[error(transparent)]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Range(#[from] num::RangeError),
}

///
/// DateBound
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DateBound {
    /// The date validation runs on.
    Today,
    Fixed(Date),
}

impl DateBound {
    #[must_use]
    pub const fn resolve(self, today: Date) -> Date {
        match self {
            Self::Today => today,
            Self::Fixed(d) => d,
        }
    }
}

///
/// RuleKind
///

#[derive(Clone, Debug, PartialEq)]
pub enum RuleKind {
    MaxLen(len::Max),
    Pattern(text::Pattern),
    Digits,
    Email,
    Integer,
    Range(num::Range),
    NotAfter(DateBound),
    OneOf(&'static [&'static str]),

    /// Value must be a department offered for the level held in `level`.
    DepartmentOf { level: Field },

    /// Value must be a program offered by `department` under `level`.
    ProgramOf { level: Field, department: Field },
}

impl RuleKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MaxLen(_) => "max_len",
            Self::Pattern(_) => "pattern",
            Self::Digits => "digits",
            Self::Email => "email",
            Self::Integer => "integer",
            Self::Range(_) => "range",
            Self::NotAfter(_) => "not_after",
            Self::OneOf(_) => "one_of",
            Self::DepartmentOf { .. } => "department_of",
            Self::ProgramOf { .. } => "program_of",
        }
    }

    /// The field kind this rule can be applied to.
    #[must_use]
    pub const fn applies_to(&self) -> FieldKind {
        match self {
            Self::Integer | Self::Range(_) => FieldKind::Number,
            Self::NotAfter(_) => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }

    /// Other fields this rule reads.
    #[must_use]
    pub fn references(&self) -> Vec<Field> {
        match self {
            Self::DepartmentOf { level } => vec![*level],
            Self::ProgramOf { level, department } => vec![*level, *department],
            _ => Vec::new(),
        }
    }
}

///
/// Rule
/// A rule kind plus an optional fixed message that replaces the default.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub kind: RuleKind,
    pub message: Option<&'static str>,
}

impl Rule {
    #[must_use]
    pub const fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    #[must_use]
    pub const fn message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

impl From<RuleKind> for Rule {
    fn from(kind: RuleKind) -> Self {
        Self::new(kind)
    }
}

///
/// FieldSchema
///

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSchema {
    pub field: Field,
    pub required: bool,
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    #[must_use]
    pub const fn required(field: Field) -> Self {
        Self {
            field,
            required: true,
            rules: Vec::new(),
        }
    }

    #[must_use]
    pub const fn optional(field: Field) -> Self {
        Self {
            field,
            required: false,
            rules: Vec::new(),
        }
    }

    #[must_use]
    pub fn rule(mut self, rule: impl Into<Rule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.field.kind()
    }

    /// Message reported when a required field is empty.
    #[must_use]
    pub fn required_message(&self) -> String {
        format!("{} is required", self.field.label())
    }
}

///
/// Schema
///

#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    /// Build a schema, checking that every rule fits its field.
    pub fn new(fields: Vec<FieldSchema>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();

        for fs in &fields {
            if !seen.insert(fs.field) {
                return Err(SchemaError::DuplicateField(fs.field));
            }

            for rule in &fs.rules {
                let expected = rule.kind.applies_to();
                if expected != fs.kind() {
                    return Err(SchemaError::KindMismatch {
                        field: fs.field,
                        rule: rule.kind.name(),
                        expected,
                        found: fs.kind(),
                    });
                }

                if let Some(target) = rule
                    .kind
                    .references()
                    .into_iter()
                    .find(|f| f.kind() != FieldKind::Text)
                {
                    return Err(SchemaError::BadReference {
                        field: fs.field,
                        rule: rule.kind.name(),
                        target,
                    });
                }
            }
        }

        Ok(Self { fields })
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldSchema> {
        self.fields.iter().find(|fs| fs.field == field)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().filter(|fs| fs.required).map(|fs| fs.field)
    }
}

///
/// TESTS
///
