//! Data validation utilities

use crate::config::PasswordPolicy;
use crate::core::models::normalize_role_name;
use crate::utils::error::{AdminError, Result};
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/~`'\"\\";
const MAX_EMAIL_LENGTH: usize = 256;
const MAX_ROLE_NAME_LENGTH: usize = 256;

/// Data validation utilities
pub struct DataValidator;

impl DataValidator {
    /// Validate email format
    pub fn validate_email(email: &str) -> Result<()> {
        if email.trim().is_empty() {
            return Err(AdminError::Validation("Email cannot be empty".to_string()));
        }

        if email.len() > MAX_EMAIL_LENGTH {
            return Err(AdminError::Validation(format!(
                "Email cannot exceed {} characters",
                MAX_EMAIL_LENGTH
            )));
        }

        let email_regex = Regex::new(EMAIL_PATTERN)
            .map_err(|e| AdminError::Internal(format!("Regex error: {}", e)))?;

        if !email_regex.is_match(email) {
            return Err(AdminError::Validation(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        Ok(())
    }

    /// Validate a raw password against the configured policy
    pub fn validate_password(password: &str, policy: &PasswordPolicy) -> Result<()> {
        let length = password.chars().count();

        if length < policy.min_length {
            return Err(AdminError::Validation(format!(
                "Password must be at least {} characters",
                policy.min_length
            )));
        }

        if length > policy.max_length {
            return Err(AdminError::Validation(format!(
                "Password cannot exceed {} characters",
                policy.max_length
            )));
        }

        if policy.require_lowercase && !password.chars().any(|c| c.is_lowercase()) {
            return Err(AdminError::Validation(
                "Password must contain a lowercase letter".to_string(),
            ));
        }

        if policy.require_uppercase && !password.chars().any(|c| c.is_uppercase()) {
            return Err(AdminError::Validation(
                "Password must contain an uppercase letter".to_string(),
            ));
        }

        if policy.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AdminError::Validation(
                "Password must contain a digit".to_string(),
            ));
        }

        if policy.require_special && !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
            return Err(AdminError::Validation(
                "Password must contain a special character".to_string(),
            ));
        }

        Ok(())
    }

    /// Check that a password and its confirmation match
    pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<()> {
        if password != confirmation {
            return Err(AdminError::Validation(
                "The password and confirmation password do not match".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate a role name
    pub fn validate_role_name(name: &str) -> Result<()> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(AdminError::Validation(
                "Role name cannot be empty".to_string(),
            ));
        }

        // uppercasing can lengthen a name ("ß" becomes "SS"); both forms are stored
        let longest = trimmed
            .chars()
            .count()
            .max(normalize_role_name(trimmed).chars().count());
        if longest > MAX_ROLE_NAME_LENGTH {
            return Err(AdminError::Validation(format!(
                "Role name cannot exceed {} characters",
                MAX_ROLE_NAME_LENGTH
            )));
        }

        if trimmed.chars().any(char::is_control) {
            return Err(AdminError::Validation(
                "Role name cannot contain control characters".to_string(),
            ));
        }

        Ok(())
    }
}
