use crate::core::{issue::IssueContext, traits::Validator};
use serde::{Deserialize, Serialize};

///
/// Max
/// Upper bound on length, counted in characters.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Max {
    target: usize,
}

impl Max {
    #[must_use]
    pub const fn new(target: usize) -> Self {
        Self { target }
    }

    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }
}

impl Validator<str> for Max {
    fn validate(&self, s: &str, ctx: &mut dyn IssueContext) {
        let len = s.chars().count();

        if len > self.target {
            ctx.issue(format!("must be at most {} characters", self.target));
        }
    }
}

///
/// TESTS
///
