//! Password evaluation sections
//!
//! Each section checks one rule and is independent of the others.

mod blacklist;
mod length;
mod variety;

pub use blacklist::blacklist_section;
pub use length::{length_section, MIN_LENGTH};
pub use variety::{digit_section, mixed_case_section, special_char_section};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<&'static str>;
