//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{
    blacklist_section, digit_section, length_section, mixed_case_section, special_char_section,
    SectionResult,
};
use crate::types::{PasswordEvaluation, PasswordScore};

/// Highest score a blacklisted password can keep.
const BLACKLISTED_MAX_SCORE: u8 = 2;

/// Structural rules, in evaluation order.
const SECTIONS: [(&str, fn(&SecretString) -> SectionResult); 4] = [
    ("length", length_section),
    ("mixed_case", mixed_case_section),
    ("digit", digit_section),
    ("special", special_char_section),
];

/// Evaluates password strength and returns a detailed evaluation.
///
/// Every satisfied rule adds one point. Every failed rule adds its reason,
/// in rule order. A blacklisted password then gets the "too common" reason
/// and its score capped at 2, whatever the rules gave it.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let mut reasons = Vec::new();
    let mut score: u8 = 0;

    for (section_name, section_fn) in SECTIONS {
        match section_fn(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password evaluation section failed: {}", section_name);
                #[cfg(not(feature = "tracing"))]
                let _ = section_name;
                reasons.push(reason.to_string());
            }
            None => score += 1,
        }
    }

    // Runs after the structural rules so the clamp sees their full score
    if let Some(reason) = blacklist_section(password) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Blacklisted password, clamping score {} to {}",
            score,
            score.min(BLACKLISTED_MAX_SCORE)
        );
        reasons.push(reason.to_string());
        score = score.min(BLACKLISTED_MAX_SCORE);
    }

    PasswordEvaluation {
        score: PasswordScore::new(score),
        reasons,
    }
}
