//! Input validation utilities.
//!
//! Names given to `-c` are checked against the Secrets Manager naming rules
//! before the editor is opened, so the operator does not lose an edit to a
//! name the service would reject anyway.

use crate::constants;
use crate::errors::ValidationError;
use anyhow::{Context, Result};
use regex::Regex;

/// Validate a new secret name according to Secrets Manager requirements.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The name exceeds the maximum length
/// - The name contains characters outside `A-Z a-z 0-9 / _ + = . @ -`
pub fn validate_secret_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::SecretName("Secret name cannot be empty".to_string()).into());
    }

    if name.len() > constants::validation::MAX_SECRET_NAME_LENGTH {
        return Err(ValidationError::SecretName(format!(
            "Secret name cannot exceed {} characters (got {})",
            constants::validation::MAX_SECRET_NAME_LENGTH,
            name.len()
        ))
        .into());
    }

    let re = Regex::new(constants::validation::VALID_SECRET_NAME_PATTERN)
        .context("Failed to compile validation regex")?;

    if !re.is_match(name) {
        return Err(ValidationError::SecretName(format!(
            "Secret name can only contain letters, numbers and /_+=.@- characters. Got: '{}'",
            name
        ))
        .into());
    }

    Ok(())
}
