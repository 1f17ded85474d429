use crate::core::{issue::IssueContext, traits::Validator};

///
/// OneOf
/// Value must be one of a fixed list of options, compared exactly.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OneOf<'a> {
    options: &'a [&'a str],
}

impl<'a> OneOf<'a> {
    #[must_use]
    pub const fn new(options: &'a [&'a str]) -> Self {
        Self { options }
    }
}

impl Validator<str> for OneOf<'_> {
    fn validate(&self, s: &str, ctx: &mut dyn IssueContext) {
        if self.options.contains(&s) {
            return;
        }

        if self.options.is_empty() {
            ctx.issue("has no available options");
        } else {
            ctx.issue(format!("must be one of: {}", self.options.join(", ")));
        }
    }
}

///
/// TESTS
///
