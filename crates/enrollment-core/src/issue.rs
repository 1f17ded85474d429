use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

// ============================================================================
// IssueContext
// ============================================================================

/// Narrow interface exposed to validators for reporting non-fatal issues.
/// Implemented by short-lived context objects scoped to a single field.
pub trait IssueContext {
    fn add_issue(&mut self, message: String);
}

impl dyn IssueContext + '_ {
    pub fn issue(&mut self, msg: impl Into<String>) {
        self.add_issue(msg.into());
    }
}

// ============================================================================
// Issues
// ============================================================================

///
/// Issues
/// Field name -> messages, ordered by field name.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Issues(BTreeMap<String, Vec<String>>);

impl Issues {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn push(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(message.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// First message for a field; the one a form shows next to the input.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.first()).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one issue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Replace the entry for `key` with whatever `other` holds for it.
    pub fn refresh(&mut self, key: &str, other: &Self) {
        match other.0.get(key) {
            Some(messages) => {
                self.0.insert(key.to_string(), messages.clone());
            }
            None => {
                self.0.remove(key);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for (key, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{key}: {message}")?;
                first = false;
            }
        }

        Ok(())
    }
}

// ============================================================================
// ScopedContext
// ============================================================================

///
/// ScopedContext
///
/// IssueContext that pins every issue to one field key.
/// Validator messages are predicates ("must be at least 4"); the context
/// prefixes them with the field's subject, unless an override replaces the
/// message outright.
///

pub struct ScopedContext<'a> {
    issues: &'a mut Issues,
    key: &'a str,
    subject: &'a str,
    message: Option<&'a str>,
}

impl<'a> ScopedContext<'a> {
    #[must_use]
    pub const fn new(issues: &'a mut Issues, key: &'a str, subject: &'a str) -> Self {
        Self {
            issues,
            key,
            subject,
            message: None,
        }
    }

    /// Report every issue in this scope with a fixed message instead.
    #[must_use]
    pub const fn with_message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

impl IssueContext for ScopedContext<'_> {
    fn add_issue(&mut self, message: String) {
        let message = match self.message {
            Some(fixed) => fixed.to_string(),
            None => format!("{} {message}", self.subject),
        };

        self.issues.push(self.key, message);
    }
}

///
/// TESTS
///
