use tables_core::model::Digit;

/// Maximum digits accepted for one answer; no product of two factors exceeds 81.
pub const MAX_INPUT_DIGITS: usize = 2;

/// Placeholder shown while no digit has been entered.
pub const INPUT_PLACEHOLDER: &str = "?";

/// Digits typed for the current problem but not yet judged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingInput {
    digits: String,
}

impl PendingInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit. Returns false (and leaves the input untouched) once the cap is reached.
    pub fn push(&mut self, digit: Digit) -> bool {
        if self.is_full() {
            return false;
        }
        self.digits.push(digit.as_char());
        true
    }

    /// Empty the input. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_digits = !self.digits.is_empty();
        self.digits.clear();
        had_digits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.digits.len() >= MAX_INPUT_DIGITS
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Numeric value of the digits, `None` when empty.
    #[must_use]
    pub fn value(&self) -> Option<u8> {
        if self.digits.is_empty() {
            return None;
        }
        self.digits.parse().ok()
    }

    /// What the answer box shows: the digits, or the placeholder when empty.
    #[must_use]
    pub fn display(&self) -> &str {
        if self.digits.is_empty() {
            INPUT_PLACEHOLDER
        } else {
            &self.digits
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn caps_at_two_digits() {
        let mut input = PendingInput::new();
        assert!(input.push(digit(4)));
        assert!(input.push(digit(2)));
        assert!(!input.push(digit(7)));
        assert_eq!(input.as_str(), "42");
        assert_eq!(input.value(), Some(42));
    }

    #[test]
    fn leading_zero_parses() {
        let mut input = PendingInput::new();
        input.push(digit(0));
        input.push(digit(8));
        assert_eq!(input.value(), Some(8));
        assert_eq!(input.display(), "08");
    }

    #[test]
    fn clear_is_idempotent() {
        let mut input = PendingInput::new();
        input.push(digit(5));
        assert!(input.clear());
        assert!(!input.clear());
        assert!(input.is_empty());
        assert_eq!(input.display(), INPUT_PLACEHOLDER);
        assert_eq!(input.value(), None);
    }
}
