use crate::types::Date;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

///
/// ValueError
///
/// Raised when raw input text cannot be read as its field kind.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ValueError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

impl ValueError {
    /// Predicate form of the error, suitable for a field-scoped context.
    #[must_use]
    pub const fn predicate(&self) -> &'static str {
        match self {
            Self::InvalidDate(_) => "must be a valid date",
            Self::InvalidNumber(_) => "must be a number",
        }
    }
}

///
/// FieldKind
///
/// How a field's raw input text is interpreted.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Date,
    Number,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Number => "number",
        };
        write!(f, "{label}")
    }
}

///
/// FieldValue
///
/// Typed view of a single non-empty input.
///

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Date(Date),
    Number(f64),
}

impl<'a> FieldValue<'a> {
    /// Interpret already-trimmed raw input as `kind`.
    pub fn parse(kind: FieldKind, raw: &'a str) -> Result<Self, ValueError> {
        match kind {
            FieldKind::Text => Ok(Self::Text(raw)),
            FieldKind::Date => Date::parse(raw)
                .map(Self::Date)
                .ok_or_else(|| ValueError::InvalidDate(raw.to_string())),
            FieldKind::Number => match raw.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(Self::Number(n)),
                _ => Err(ValueError::InvalidNumber(raw.to_string())),
            },
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_accept_decimals_and_reject_junk() {
        assert_eq!(
            FieldValue::parse(FieldKind::Number, "92.75"),
            Ok(FieldValue::Number(92.75))
        );
        assert_eq!(
            FieldValue::parse(FieldKind::Number, "-3"),
            Ok(FieldValue::Number(-3.0))
        );

        for bad in ["abc", "12a", "NaN", "inf", "1,5"] {
            assert_eq!(
                FieldValue::parse(FieldKind::Number, bad),
                Err(ValueError::InvalidNumber(bad.to_string()))
            );
        }
    }

    #[test]
    fn dates_parse_iso_only() {
        assert_eq!(
            FieldValue::parse(FieldKind::Date, "2005-06-15").ok(),
            Date::new_checked(2005, 6, 15).map(FieldValue::Date)
        );

        let err = FieldValue::parse(FieldKind::Date, "15/06/2005").unwrap_err();
        assert_eq!(err.predicate(), "must be a valid date");
    }

    #[test]
    fn text_is_passed_through() {
        assert_eq!(
            FieldValue::parse(FieldKind::Text, " 42 "),
            Ok(FieldValue::Text(" 42 "))
        );
    }
}
