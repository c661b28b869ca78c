//! Character classes shared by the scoring rules and the generator.

/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// ASCII digits.
pub const DIGITS: &str = "0123456789";
/// The fixed special character set.
pub const SPECIAL: &str = "!@#$%^&*";

/// Union of all four classes, in class order.
pub const ALPHABET: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "!@#$%^&*"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// Returns every character belonging to this class.
    pub const fn chars(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }

    /// Classifies a character, `None` if it is outside [`ALPHABET`].
    pub fn of(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }

    /// Returns `true` if any character of `s` belongs to this class.
    pub fn any_in(self, s: &str) -> bool {
        s.chars().any(|c| self.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_union_of_classes() {
        let joined: String = CharacterClass::ALL.iter().map(|c| c.chars()).collect();
        assert_eq!(joined, ALPHABET);
        assert_eq!(ALPHABET.len(), 70);
    }

    #[test]
    fn test_classify_characters() {
        assert_eq!(CharacterClass::of('q'), Some(CharacterClass::Lowercase));
        assert_eq!(CharacterClass::of('Q'), Some(CharacterClass::Uppercase));
        assert_eq!(CharacterClass::of('7'), Some(CharacterClass::Digit));
        assert_eq!(CharacterClass::of('^'), Some(CharacterClass::Special));
        assert_eq!(CharacterClass::of('-'), None);
        assert_eq!(CharacterClass::of('é'), None);
    }

    #[test]
    fn test_non_ascii_is_not_matched() {
        assert!(!CharacterClass::Uppercase.any_in("Ämter"));
        assert!(!CharacterClass::Digit.any_in("٣٤٥"));
        assert!(CharacterClass::Special.any_in("a(b)c*"));
    }
}
