use crate::core::{issue::IssueContext, traits::Validator};
use regex::Regex;

///
/// Pattern
/// Whole-value regular expression match.
///

#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Validator<str> for Pattern {
    fn validate(&self, s: &str, ctx: &mut dyn IssueContext) {
        if !self.regex.is_match(s) {
            ctx.issue(format!("must match the pattern {}", self.regex.as_str()));
        }
    }
}

///
/// Digits
/// ASCII digits only.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Digits;

impl Validator<str> for Digits {
    fn validate(&self, s: &str, ctx: &mut dyn IssueContext) {
        if !s.chars().all(|c| c.is_ascii_digit()) {
            ctx.issue("must contain digits only");
        }
    }
}

///
/// TESTS
///
