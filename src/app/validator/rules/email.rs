use crate::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

pub struct Email;

impl Email {
    pub fn apply(value: &str) -> bool {
        EMAIL_PATTERN.is_match(value)
    }

    /// An empty value is not an error; presence is checked by the form itself.
    pub fn validate(value: &str) -> Option<ValidationError> {
        if value.is_empty() || Self::apply(value) {
            None
        } else {
            Some(ValidationError::InvalidEmailFormat)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rejects_values_without_at(value in "[^@]{1,40}") {
            prop_assert_eq!(Some(ValidationError::InvalidEmailFormat), Email::validate(&value));
        }

        #[test]
        fn rejects_domain_without_dot(local in "[^\\s@]{1,20}", domain in "[^\\s@.]{1,20}") {
            let value = format!("{local}@{domain}");
            prop_assert_eq!(Some(ValidationError::InvalidEmailFormat), Email::validate(&value));
        }

        #[test]
        fn accepts_plain_addresses(
            local in "[a-z0-9._-]{1,20}",
            domain in "[a-z0-9-]{1,20}",
            tld in "[a-z]{2,6}"
        ) {
            let value = format!("{local}@{domain}.{tld}");
            prop_assert_eq!(None, Email::validate(&value));
        }
    }

    #[test]
    fn apply() {
        assert!(Email::apply("a@b.com"));
        assert!(Email::apply("good@example.com"));
        assert!(Email::apply("first.last@sub.example.org"));
        assert!(!Email::apply("bad-email"));
        assert!(!Email::apply("a@b"));
        assert!(!Email::apply("a.b@c"));
        assert!(!Email::apply("a@@b.com"));
        assert!(!Email::apply("a b@c.com"));
        assert!(!Email::apply("@b.com"));
        assert!(!Email::apply("a@.com"));
    }

    #[test]
    fn validate() {
        assert_eq!(None, Email::validate(""));
        assert_eq!(None, Email::validate("a@b.com"));
        assert_eq!(Some(ValidationError::InvalidEmailFormat), Email::validate("bad-email"));
        assert_eq!(
            "Invalid email format",
            Email::validate("no-at.com").unwrap().to_string()
        );
    }
}
