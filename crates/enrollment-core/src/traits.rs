use crate::issue::IssueContext;

///
/// Sanitizer
///
/// Transforms a value into a sanitized version.
///

pub trait Sanitizer<T: ?Sized> {
    fn sanitize(&self, value: &mut T);
}

///
/// Validator
///
/// Checks a single value and reports issues through the context.
/// Must NOT fail fast across fields; one validator sees one value.
///

pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T, ctx: &mut dyn IssueContext);
}
