pub mod rules;

use crate::FieldName;
use rules::email::Email;
use rules::password::Password;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum ValidationError {
    #[strum(to_string = "Invalid email format")]
    InvalidEmailFormat,
    #[strum(
        to_string = "Password must be at least 8 characters long, contain a capital letter, a number, and a special character"
    )]
    WeakPassword,
}

/// Runs the rule attached to `field`. Fields without a rule always pass.
pub fn validate_field(field: FieldName, value: &str) -> Option<ValidationError> {
    match field {
        FieldName::Email => Email::validate(value),
        FieldName::Password => Password::validate(value),
        _ => None,
    }
}

/// ErrorMap text for `field`: the error message, or an empty string.
pub fn field_message(field: FieldName, value: &str) -> String {
    validate_field(field, value)
        .map(|e| e.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_message() {
        assert_eq!("", super::field_message(FieldName::Email, ""));
        assert_eq!("", super::field_message(FieldName::Password, ""));
        assert_eq!("Invalid email format", super::field_message(FieldName::Email, "x"));
        assert_eq!("", super::field_message(FieldName::Name, "anything"));
    }
}
