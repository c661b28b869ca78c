//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub const MIN_LENGTH: usize = 8;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Characters are counted, not bytes.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some("Password should be at least 8 characters long.");
    }
    None
}
