//! Strong password generator.
//!
//! A generated password always holds one character from each
//! [`CharacterClass`], fills the rest from [`ALPHABET`] and is shuffled
//! before being returned.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;

use crate::charset::{ALPHABET, CharacterClass};
use crate::sections::MIN_LENGTH;

/// Length used by [`generate_default_password`] and in place of any
/// requested length below the minimum.
pub const DEFAULT_LENGTH: usize = 12;

/// Returns the length that will actually be generated for `length`.
///
/// Anything shorter than 8 becomes [`DEFAULT_LENGTH`].
pub fn normalize_length(length: usize) -> usize {
    if length < MIN_LENGTH {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Requested password length {} is below {}, using {}",
            length,
            MIN_LENGTH,
            DEFAULT_LENGTH
        );
        return DEFAULT_LENGTH;
    }
    length
}

/// Generates a password of [`DEFAULT_LENGTH`] characters.
pub fn generate_default_password() -> SecretString {
    generate_password(DEFAULT_LENGTH)
}

/// Generates a password of `length` characters using the thread-local
/// cryptographically secure generator.
pub fn generate_password(length: usize) -> SecretString {
    generate_password_with_rng(&mut rand::thread_rng(), length)
}

/// Generates a password drawing randomness from `rng`.
pub fn generate_password_with_rng<R>(rng: &mut R, length: usize) -> SecretString
where
    R: Rng + CryptoRng,
{
    let length = normalize_length(length);

    let mut chars: Vec<char> = CharacterClass::ALL
        .iter()
        .map(|class| pick(rng, class.chars()))
        .collect();
    while chars.len() < length {
        chars.push(pick(rng, ALPHABET));
    }
    chars.shuffle(rng);

    SecretString::new(chars.into_iter().collect::<String>().into())
}

/// Picks one character uniformly from an ASCII set.
fn pick<R: Rng>(rng: &mut R, set: &'static str) -> char {
    let bytes = set.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}
