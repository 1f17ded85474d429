use crate::core::{issue::IssueContext, traits::Validator};

///
/// Email
///
/// Structural check: one '@', a non-empty local part, and a dotted domain
/// of non-empty labels. No whitespace anywhere.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Email;

impl Email {
    fn is_valid_label(label: &str) -> bool {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    }
}

impl Validator<str> for Email {
    fn validate(&self, s: &str, ctx: &mut dyn IssueContext) {
        let Some((local, domain)) = s.split_once('@') else {
            ctx.issue("must contain '@'");
            return;
        };

        if local.is_empty() || s.chars().any(char::is_whitespace) || domain.contains('@') {
            ctx.issue("must be a valid email address");
            return;
        }

        let mut labels = domain.split('.');
        let dotted = domain.contains('.');

        if !dotted || !labels.all(Self::is_valid_label) {
            ctx.issue(format!("has an invalid domain '{domain}'"));
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::check;

    #[test]
    fn accepts_common_addresses() {
        for ok in [
            "juan@example.com",
            "maria.reyes+enroll@mail.school.edu.ph",
            "a@b.co",
        ] {
            assert!(check(&Email, ok).is_empty(), "{ok}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "plainaddress",
            "@example.com",
            "juan@",
            "juan@localhost",
            "juan@@example.com",
            "juan @example.com",
            "juan@example..com",
            "juan@-example.com",
        ] {
            assert_eq!(check(&Email, bad).len(), 1, "{bad}");
        }
    }
}
