//! # Input Validator
//!
//! Decides whether user-supplied text has a finite numeric
//! interpretation. Pure functions, no I/O; the update flow wires
//! [`validate`] into the input box as the live validator and reuses
//! [`validate_ratio`] to re-check the parsed float before committing.

/// Fixed rejection message for non-numeric input.
pub const INVALID_INPUT_MESSAGE: &str =
    "Invalid input. Make sure it is a number, representing the ratio of the viewport to scroll by.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(String),
}

impl Validation {
    /// The rejection message, in the shape the host's live-validation
    /// callback expects: `Some(message)` to flag the input, `None` to
    /// accept it.
    pub fn into_message(self) -> Option<String> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(message) => Some(message),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

/// Validates raw input text. Surrounding whitespace is tolerated;
/// anything without a finite numeric interpretation (including `NaN`
/// and infinities) is rejected.
pub fn validate(input: &str) -> Validation {
    match input.trim().parse::<f64>() {
        Ok(value) => validate_ratio(value),
        Err(_) => Validation::Invalid(INVALID_INPUT_MESSAGE.to_string()),
    }
}

/// Validates an already-parsed ratio. Same acceptance rule as
/// [`validate`]: the value must be finite.
pub fn validate_ratio(value: f64) -> Validation {
    if value.is_finite() {
        Validation::Valid
    } else {
        Validation::Invalid(INVALID_INPUT_MESSAGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers_are_valid() {
        for input in ["0", "1", "0.5", "0.75", "2.125"] {
            assert!(validate(input).is_valid(), "{input:?} should be valid");
        }
    }

    #[test]
    fn test_negative_and_exponent_forms_are_valid() {
        for input in ["-1", "-0.25", "1e3", "-2.5e-2"] {
            assert!(validate(input).is_valid(), "{input:?} should be valid");
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        for input in [" 0.5", "0.5 ", "\t0.5\n", "  -1.25  "] {
            assert!(validate(input).is_valid(), "{input:?} should be valid");
        }
    }

    #[test]
    fn test_non_numeric_text_is_invalid() {
        for input in ["abc", "1,2,3", "one", "0.5 pages", "1abc", ""] {
            match validate(input) {
                Validation::Invalid(message) => {
                    assert!(!message.is_empty(), "{input:?} should carry a message")
                }
                Validation::Valid => panic!("{input:?} should be invalid"),
            }
        }
    }

    #[test]
    fn test_nan_and_infinity_are_invalid() {
        // These parse as f64 but have no finite interpretation.
        assert!(!validate("NaN").is_valid());
        assert!(!validate("inf").is_valid());
        assert!(!validate("-infinity").is_valid());
    }

    #[test]
    fn test_validate_ratio_requires_finite() {
        assert!(validate_ratio(0.5).is_valid());
        assert!(validate_ratio(-3.0).is_valid());
        assert!(!validate_ratio(f64::NAN).is_valid());
        assert!(!validate_ratio(f64::INFINITY).is_valid());
    }

    #[test]
    fn test_into_message() {
        assert_eq!(validate("0.5").into_message(), None);
        assert_eq!(
            validate("abc").into_message(),
            Some(INVALID_INPUT_MESSAGE.to_string())
        );
    }
}
