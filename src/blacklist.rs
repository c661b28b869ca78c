//! Blacklist of well-known weak passwords.
//!
//! The list is fixed at compile time. Entries are stored lowercase and
//! matched against the whole lower-cased password, never as substrings.

const COMMON_PASSWORDS: [&str; 5] = ["password", "123456", "qwerty", "password123", "admin"];

/// Returns the blacklist entries.
pub fn get_blacklist() -> &'static [&'static str] {
    &COMMON_PASSWORDS
}

/// Checks if a password is in the blacklist.
///
/// Returns `true` if the lower-cased password equals an entry.
pub fn is_blacklisted(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.contains(&lowered.as_str())
}
