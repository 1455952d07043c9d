//! # Pitch Classes
//!
//! The twelve equal-tempered note names, independent of octave. A pitch class
//! is stored as its semitone index above C (0..=11) and always spelled with
//! sharps when displayed.
//!
//! ## Example
//! ```rust
//! use fretboard::{resolve_pitch_class, PitchClass};
//!
//! let b = resolve_pitch_class("B")?;
//! assert_eq!(b.index(), 11);
//! assert_eq!(b.transpose(1), PitchClass::C);
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FretboardError;

/// Canonical sharp spellings, indexed by semitone above C
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A pitch class, 0 = C through 11 = B
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const C_SHARP: PitchClass = PitchClass(1);
    pub const D: PitchClass = PitchClass(2);
    pub const D_SHARP: PitchClass = PitchClass(3);
    pub const E: PitchClass = PitchClass(4);
    pub const F: PitchClass = PitchClass(5);
    pub const F_SHARP: PitchClass = PitchClass(6);
    pub const G: PitchClass = PitchClass(7);
    pub const G_SHARP: PitchClass = PitchClass(8);
    pub const A: PitchClass = PitchClass(9);
    pub const A_SHARP: PitchClass = PitchClass(10);
    pub const B: PitchClass = PitchClass(11);

    /// All twelve pitch classes in ascending order from C
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::C_SHARP,
        PitchClass::D,
        PitchClass::D_SHARP,
        PitchClass::E,
        PitchClass::F,
        PitchClass::F_SHARP,
        PitchClass::G,
        PitchClass::G_SHARP,
        PitchClass::A,
        PitchClass::A_SHARP,
        PitchClass::B,
    ];

    /// Build a pitch class from any semitone count, reduced mod 12
    pub fn from_semitone(semitone: i32) -> Self {
        PitchClass(semitone.rem_euclid(12) as u8)
    }

    /// Semitone index above C (0..=11)
    pub fn index(self) -> u8 {
        self.0
    }

    /// Sharp-spelled name
    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }

    /// Move up (positive) or down (negative) by the given number of semitones
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::from_semitone(self.0 as i32 + semitones)
    }
}

/// Resolve a sharp-spelled note name to its pitch class.
///
/// Only the twelve names in [`NOTE_NAMES`] are accepted. Flat spellings and
/// lowercase names are rejected rather than guessed at.
///
/// # Errors
/// Returns [`FretboardError::InvalidPitchName`] for any other input.
pub fn resolve_pitch_class(name: &str) -> Result<PitchClass, FretboardError> {
    let trimmed = name.trim();
    NOTE_NAMES
        .iter()
        .position(|n| *n == trimmed)
        .map(|i| PitchClass(i as u8))
        .ok_or_else(|| FretboardError::InvalidPitchName(name.to_string()))
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_pitch_class(s)
    }
}

impl TryFrom<String> for PitchClass {
    type Error = FretboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        resolve_pitch_class(&value)
    }
}

impl From<PitchClass> for String {
    fn from(pitch: PitchClass) -> Self {
        pitch.name().to_string()
    }
}
