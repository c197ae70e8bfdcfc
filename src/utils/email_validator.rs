//! Email format validation.

use validator::ValidateEmail;

/// Email format checking capability consumed by the login router.
pub trait EmailFormatValidator: Send + Sync {
    /// Returns true if `email` is a syntactically valid address
    fn is_valid(&self, email: &str) -> bool;
}

/// `EmailFormatValidator` backed by the `validator` crate.
pub struct EmailFormatChecker;

impl EmailFormatValidator for EmailFormatChecker {
    fn is_valid(&self, email: &str) -> bool {
        email.validate_email()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_address() {
        assert!(EmailFormatChecker.is_valid("valid_email@gmail.com"));
    }

    #[test]
    fn rejects_malformed_address() {
        assert!(!EmailFormatChecker.is_valid("invalid_email"));
    }

    #[test]
    fn rejects_empty_address() {
        assert!(!EmailFormatChecker.is_valid(""));
    }
}
