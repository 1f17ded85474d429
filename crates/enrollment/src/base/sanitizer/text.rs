use crate::core::traits::Sanitizer;

///
/// Trim
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Trim;

impl Sanitizer<String> for Trim {
    fn sanitize(&self, value: &mut String) {
        let trimmed = value.trim();

        if trimmed.len() != value.len() {
            *value = trimmed.to_owned();
        }
    }
}

///
/// DigitsOnly
/// Drops every character that is not an ASCII digit.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DigitsOnly;

impl Sanitizer<String> for DigitsOnly {
    fn sanitize(&self, value: &mut String) {
        value.retain(|c| c.is_ascii_digit());
    }
}

///
/// Truncate
/// Caps a value at a number of characters.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Truncate {
    max: usize,
}

impl Truncate {
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }
}

impl Sanitizer<String> for Truncate {
    fn sanitize(&self, value: &mut String) {
        if let Some((idx, _)) = value.char_indices().nth(self.max) {
            value.truncate(idx);
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn run(s: &impl Sanitizer<String>, input: &str) -> String {
        let mut value = input.to_string();
        s.sanitize(&mut value);
        value
    }

    #[test]
    fn trim_strips_both_ends() {
        assert_eq!(run(&Trim, "  Juan \t"), "Juan");
        assert_eq!(run(&Trim, "Juan"), "Juan");
    }

    #[test]
    fn digits_only_keeps_ascii_digits() {
        assert_eq!(run(&DigitsOnly, "+63 917-123-4567"), "639171234567");
        assert_eq!(run(&DigitsOnly, "١٢٣4"), "4");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(run(&Truncate::new(3), "Peña"), "Peñ");
        assert_eq!(run(&Truncate::new(10), "Peña"), "Peña");
        assert_eq!(run(&Truncate::new(0), "abc"), "");
    }
}
