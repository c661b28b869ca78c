//! Character variety sections - mixed case, digits and special chars.

use crate::charset::CharacterClass;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Requires at least one uppercase and one lowercase letter.
pub fn mixed_case_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = CharacterClass::Uppercase.any_in(pwd);
    let has_lower = CharacterClass::Lowercase.any_in(pwd);

    if !(has_upper && has_lower) {
        return Some("Use both uppercase and lowercase letters.");
    }
    None
}

pub fn digit_section(password: &SecretString) -> SectionResult {
    if !CharacterClass::Digit.any_in(password.expose_secret()) {
        return Some("Add at least one digit (0-9).");
    }
    None
}

/// Requires one character from the fixed special set `!@#$%^&*`.
///
/// Other punctuation does not count.
pub fn special_char_section(password: &SecretString) -> SectionResult {
    if !CharacterClass::Special.any_in(password.expose_secret()) {
        return Some("Include at least one special character (!@#$%^&*).");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_mixed_case_missing_uppercase() {
        let result = mixed_case_section(&secret("lowercase123!"));
        assert_eq!(result, Some("Use both uppercase and lowercase letters."));
    }

    #[test]
    fn test_mixed_case_missing_lowercase() {
        assert!(mixed_case_section(&secret("UPPERCASE123!")).is_some());
    }

    #[test]
    fn test_mixed_case_ignores_non_ascii_letters() {
        assert!(mixed_case_section(&secret("Äbcdefgh")).is_some());
    }

    #[test]
    fn test_mixed_case_passes() {
        assert_eq!(mixed_case_section(&secret("aB")), None);
    }

    #[test]
    fn test_digit_section() {
        assert_eq!(
            digit_section(&secret("NoNumbers!")),
            Some("Add at least one digit (0-9).")
        );
        assert_eq!(digit_section(&secret("one1")), None);
    }

    #[test]
    fn test_special_section_fixed_set_only() {
        assert!(special_char_section(&secret("NoSpecial123")).is_some());
        assert!(special_char_section(&secret("dash-and_under(score)")).is_some());
        assert_eq!(special_char_section(&secret("has&amp")), None);
    }
}
