// Validation utilities module
// Provides custom validation functions for domain-specific rules

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Alphabetic characters and spaces only
    static ref CONTACT_NAME_RE: Regex = Regex::new(r"^[a-zA-Z\s]+$").unwrap();
    /// The storefront only accepts Gmail addresses on the contact form
    static ref GMAIL_ADDRESS_RE: Regex = Regex::new(r"^[a-zA-Z0-9._-]+@gmail\.com$").unwrap();
}

/// Validates that a contact name contains only alphabetic characters and spaces
/// Leading/trailing whitespace is tolerated; it is trimmed before storage
pub fn validate_contact_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        let mut err = ValidationError::new("name_required");
        err.message = Some("Name is required".into());
        return Err(err);
    }
    if CONTACT_NAME_RE.is_match(trimmed) {
        Ok(())
    } else {
        let mut err = ValidationError::new("name_not_alphabetic");
        err.message = Some("Name should only contain alphabets".into());
        Err(err)
    }
}

/// Validates that a contact email is a well-formed Gmail address
pub fn validate_gmail_address(email: &str) -> Result<(), ValidationError> {
    if GMAIL_ADDRESS_RE.is_match(email) {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_gmail_address");
        err.message =
            Some("Invalid email format. Please use a valid Gmail address.".into());
        Err(err)
    }
}

/// Validates that a required text field is non-empty after trimming
pub fn validate_non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("field_required");
        err.message = Some("Field must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_name_accepts_alphabetic() {
        assert!(validate_contact_name("Alisha Khan").is_ok());
        assert!(validate_contact_name("  Ann  ").is_ok());
    }

    #[test]
    fn test_contact_name_rejects_digits_and_symbols() {
        assert!(validate_contact_name("Ann42").is_err());
        assert!(validate_contact_name("Ann!").is_err());
        assert!(validate_contact_name("").is_err());
        assert!(validate_contact_name("   ").is_err());
    }

    #[test]
    fn test_gmail_address_pattern() {
        assert!(validate_gmail_address("user@gmail.com").is_ok());
        assert!(validate_gmail_address("first.last-1@gmail.com").is_ok());
        assert!(validate_gmail_address("user@example.com").is_err());
        assert!(validate_gmail_address("user@gmailXcom").is_err());
        assert!(validate_gmail_address("@gmail.com").is_err());
    }

    #[test]
    fn test_non_blank() {
        assert!(validate_non_blank("hello").is_ok());
        assert!(validate_non_blank("  ").is_err());
    }
}
