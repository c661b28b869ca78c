//! Password strength meter library
//!
//! Scores a password from 0 to 4 against four structural rules (length,
//! mixed case, digit, special character), explains every failed rule, and
//! caps well-known weak passwords at 2. Also generates random passwords
//! that satisfy all four rules.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, generate_password, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! assert_eq!(evaluation.score.value(), 4);
//! assert_eq!(evaluation.strength(), PasswordStrength::Strong);
//! assert!(evaluation.reasons.is_empty());
//!
//! let generated = generate_password(16);
//! assert!(evaluate_password_strength(&generated).is_strong());
//! ```

// Internal modules
mod blacklist;
mod charset;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use blacklist::{get_blacklist, is_blacklisted};
pub use charset::{CharacterClass, ALPHABET, DIGITS, LOWERCASE, SPECIAL, UPPERCASE};
pub use evaluator::evaluate_password_strength;
pub use generator::{
    generate_default_password, generate_password, generate_password_with_rng, normalize_length,
    DEFAULT_LENGTH,
};
pub use sections::MIN_LENGTH;
pub use types::{PasswordEvaluation, PasswordScore, PasswordStrength, ScoreError, Severity};
