//! Blacklist section - checks if password is a common password.

use crate::blacklist::is_blacklisted;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks if the password is in the blacklist of common passwords.
///
/// # Returns
/// - `Some(reason)` if password is blacklisted
/// - `None` if password is not in blacklist
pub fn blacklist_section(password: &SecretString) -> SectionResult {
    if is_blacklisted(password.expose_secret()) {
        return Some("This password is too common.");
    }
    None
}
