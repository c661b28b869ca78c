//! Evaluation result types and the score mappings used by presentation layers.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Score {0} is out of range (0-{max})", max = PasswordScore::MAX.value())]
    OutOfRange(u8),
}

/// Number of satisfied structural rules, 0 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MIN: PasswordScore = PasswordScore(0);
    pub const MAX: PasswordScore = PasswordScore(4);

    /// Creates a score, saturating at [`PasswordScore::MAX`].
    pub fn new(value: u8) -> Self {
        PasswordScore(value.min(Self::MAX.0))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn strength(self) -> PasswordStrength {
        match self.0 {
            0 => PasswordStrength::VeryWeak,
            1 | 2 => PasswordStrength::Weak,
            3 => PasswordStrength::Moderate,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn severity(self) -> Severity {
        match self.0 {
            4 => Severity::Success,
            3 => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl TryFrom<u8> for PasswordScore {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX.0 {
            return Err(ScoreError::OutOfRange(value));
        }
        Ok(PasswordScore(value))
    }
}

impl From<PasswordScore> for u8 {
    fn from(score: PasswordScore) -> Self {
        score.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX.0)
    }
}

/// Label band for a score, as shown on the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a presentation layer should frame the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Banner text for this severity.
    pub fn headline(self) -> &'static str {
        match self {
            Severity::Success => "Strong Password!",
            Severity::Warning => "Moderate Password - Consider strengthening it.",
            Severity::Error => "Weak Password - Needs improvement.",
        }
    }
}

/// Outcome of a password evaluation.
///
/// `reasons` holds one suggestion per failed rule, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        self.score.strength()
    }

    pub fn severity(&self) -> Severity {
        self.score.severity()
    }

    pub fn is_strong(&self) -> bool {
        self.score == PasswordScore::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_new_saturates() {
        assert_eq!(PasswordScore::new(9).value(), 4);
        assert_eq!(PasswordScore::new(2).value(), 2);
    }

    #[test]
    fn test_score_try_from_out_of_range() {
        assert_eq!(PasswordScore::try_from(5), Err(ScoreError::OutOfRange(5)));
        assert_eq!(PasswordScore::try_from(4).map(u8::from), Ok(4));
        assert_eq!(
            ScoreError::OutOfRange(7).to_string(),
            "Score 7 is out of range (0-4)"
        );
    }

    #[test]
    fn test_strength_labels() {
        let labels: Vec<_> = (0..=4)
            .map(|v| PasswordScore::new(v).strength().label())
            .collect();
        assert_eq!(labels, ["Very Weak", "Weak", "Weak", "Moderate", "Strong"]);
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(PasswordScore::new(4).severity(), Severity::Success);
        assert_eq!(PasswordScore::new(3).severity(), Severity::Warning);
        for v in 0..=2 {
            assert_eq!(PasswordScore::new(v).severity(), Severity::Error);
        }
        assert!(Severity::Warning.headline().starts_with("Moderate"));
    }

    #[test]
    fn test_display() {
        assert_eq!(PasswordScore::new(3).to_string(), "3/4");
        assert_eq!(PasswordStrength::VeryWeak.to_string(), "Very Weak");
    }

    #[test]
    fn test_default_evaluation_is_very_weak() {
        let evaluation = PasswordEvaluation::default();
        assert_eq!(evaluation.strength(), PasswordStrength::VeryWeak);
        assert!(!evaluation.is_strong());
    }
}
