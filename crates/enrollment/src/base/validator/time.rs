use crate::core::{issue::IssueContext, traits::Validator, types::Date};

///
/// NotAfter
/// Upper bound on a date, inclusive.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NotAfter {
    max: Date,
}

impl NotAfter {
    #[must_use]
    pub const fn new(max: Date) -> Self {
        Self { max }
    }
}

impl Validator<Date> for NotAfter {
    fn validate(&self, d: &Date, ctx: &mut dyn IssueContext) {
        if *d > self.max {
            ctx.issue(format!("must not be after {}", self.max));
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, date};

    #[test]
    fn bound_is_inclusive() {
        let v = NotAfter::new(date("2025-06-01"));

        assert!(check(&v, &date("2025-05-31")).is_empty());
        assert!(check(&v, &date("2025-06-01")).is_empty());
        assert_eq!(
            check(&v, &date("2025-06-02")),
            ["must not be after 2025-06-01"]
        );
    }
}
