use crate::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

pub static PASSWORD_MIN_LENGTH: usize = 8;
pub static PASSWORD_SYMBOLS: &str = "@$!%*?&";

static ALLOWED_CHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]+$").expect("password pattern"));

pub struct Password;

impl Password {
    pub fn apply(value: &str) -> bool {
        value.chars().count() >= PASSWORD_MIN_LENGTH
            && ALLOWED_CHARACTERS.is_match(value)
            && value.chars().any(|c| c.is_ascii_uppercase())
            && value.chars().any(|c| c.is_ascii_digit())
            && value.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
    }

    pub fn validate(value: &str) -> Option<ValidationError> {
        if value.is_empty() || Self::apply(value) {
            None
        } else {
            Some(ValidationError::WeakPassword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rejects_short(value in "[A-Za-z0-9@$!%*?&]{1,7}") {
            prop_assert_eq!(Some(ValidationError::WeakPassword), Password::validate(&value));
        }

        #[test]
        fn rejects_without_uppercase(value in "[a-z0-9@$!%*?&]{8,30}") {
            prop_assert_eq!(Some(ValidationError::WeakPassword), Password::validate(&value));
        }

        #[test]
        fn rejects_without_digit(value in "[A-Za-z@$!%*?&]{8,30}") {
            prop_assert_eq!(Some(ValidationError::WeakPassword), Password::validate(&value));
        }

        #[test]
        fn rejects_without_symbol(value in "[A-Za-z0-9]{8,30}") {
            prop_assert_eq!(Some(ValidationError::WeakPassword), Password::validate(&value));
        }

        #[test]
        fn rejects_foreign_character(
            head in "[A-Za-z0-9@$!%*?&]{0,10}",
            foreign in "[^A-Za-z0-9@$!%*?&]",
            tail in "[A-Za-z0-9@$!%*?&]{0,10}"
        ) {
            let value = format!("Ab1!wxyz{head}{foreign}{tail}");
            prop_assert_eq!(Some(ValidationError::WeakPassword), Password::validate(&value));
        }

        #[test]
        fn accepts_strong(
            upper in "[A-Z]",
            digit in "[0-9]",
            symbol in "[@$!%*?&]",
            rest in "[A-Za-z0-9@$!%*?&]{5,30}"
        ) {
            let value = format!("{rest}{symbol}{upper}{digit}");
            prop_assert_eq!(None, Password::validate(&value));
        }
    }

    #[test]
    fn apply() {
        assert!(Password::apply("Abcdef1!"));
        assert!(Password::apply("ABCDEFG1&"));
        assert!(Password::apply("Passw0rd?longer"));
        // too short
        assert!(!Password::apply("Abcde1!"));
        // no uppercase
        assert!(!Password::apply("abcdef1!"));
        // no digit
        assert!(!Password::apply("Abcdefg!"));
        // no symbol
        assert!(!Password::apply("Abcdefg1"));
        // symbol outside the allowed set
        assert!(!Password::apply("Abcdef1#"));
        assert!(!Password::apply("Abcdef1!#"));
        assert!(!Password::apply("Abcdef1! "));
        assert!(!Password::apply("Äbcdef1!"));
    }

    #[test]
    fn validate() {
        assert_eq!(None, Password::validate(""));
        assert_eq!(None, Password::validate("Abcdef1!"));
        assert_eq!(Some(ValidationError::WeakPassword), Password::validate("password"));
        assert_eq!(
            "Password must be at least 8 characters long, contain a capital letter, a number, and a special character",
            Password::validate("short").unwrap().to_string()
        );
    }
}
