//! Password generation.
//!
//! The generator samples uniformly from the union of the selected character
//! classes, then guarantees every selected class appears at least once by
//! reserving one slot per class and shuffling so the reserved characters
//! are not positionally biased.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest password the tool offers.
pub const MIN_LENGTH: u32 = 4;
/// Longest password the tool offers.
pub const MAX_LENGTH: u32 = 128;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";

/// Errors for password generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// Every character class was deselected.
    #[error("At least one character set must be selected")]
    NoCharacterSets,

    /// Requested length is outside the supported range.
    #[error("Password length {0} is out of range (4-128)")]
    LengthOutOfRange(u32),
}

/// Options for the password generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordOptions {
    /// Password length ([`MIN_LENGTH`] to [`MAX_LENGTH`]).
    pub length: u32,
    /// Include lowercase letters.
    pub lowercase: bool,
    /// Include uppercase letters.
    pub uppercase: bool,
    /// Include digits.
    pub digits: bool,
    /// Include punctuation symbols.
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordOptions {
    fn selected_classes(&self) -> Vec<&'static [u8]> {
        let mut classes = Vec::with_capacity(4);
        if self.lowercase {
            classes.push(LOWERCASE);
        }
        if self.uppercase {
            classes.push(UPPERCASE);
        }
        if self.digits {
            classes.push(DIGITS);
        }
        if self.symbols {
            classes.push(SYMBOLS);
        }
        classes
    }
}

/// The union alphabet for the given options, for display in the UI.
pub fn charset(options: &PasswordOptions) -> String {
    options
        .selected_classes()
        .into_iter()
        .flat_map(|class| class.iter().map(|&b| b as char))
        .collect()
}

/// Generate a password.
///
/// # Errors
///
/// Returns [`PasswordError::NoCharacterSets`] if every class is off and
/// [`PasswordError::LengthOutOfRange`] for lengths outside
/// [`MIN_LENGTH`]..=[`MAX_LENGTH`].
pub fn generate_password(
    options: &PasswordOptions,
    rng: &mut impl Rng,
) -> Result<String, PasswordError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&options.length) {
        return Err(PasswordError::LengthOutOfRange(options.length));
    }

    let classes = options.selected_classes();
    if classes.is_empty() {
        return Err(PasswordError::NoCharacterSets);
    }

    let union: Vec<u8> = classes.iter().flat_map(|class| class.iter().copied()).collect();

    // One reserved character per class, the rest sampled from the union.
    let mut chars: Vec<u8> = classes
        .iter()
        .map(|class| class[rng.random_range(0..class.len())])
        .collect();
    while chars.len() < options.length as usize {
        chars.push(union[rng.random_range(0..union.len())]);
    }
    chars.shuffle(rng);

    Ok(chars.into_iter().map(|b| b as char).collect())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
