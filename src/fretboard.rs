//! # Fretboard Grid
//!
//! Computes the pitch class sounding at every (string, fret) position for a
//! six-string tuning.
//!
//! ## Conventions
//! - String index 0 is the lowest string (the 6th string on a guitar).
//! - Fret 0 is the open string; a board with `fret_count` frets has
//!   `fret_count + 1` columns.
//!
//! ## Example
//! ```rust
//! use fretboard::{build_fretboard, PitchClass, Tuning};
//!
//! let board = build_fretboard(&Tuning::STANDARD, 22);
//! assert_eq!(board.columns(), 23);
//! assert_eq!(board.pitch_at(0, 5), Some(PitchClass::A));
//! ```

use serde::Serialize;

use crate::pitch::PitchClass;

/// Number of strings on the board
pub const STRING_COUNT: usize = 6;

/// Frets shown when no count is given
pub const DEFAULT_FRET_COUNT: u8 = 22;

/// Largest fret count a selection may ask for
pub const MAX_FRET_COUNT: u8 = 23;

/// Open-string pitch classes, lowest string first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tuning(pub [PitchClass; STRING_COUNT]);

impl Tuning {
    /// Standard guitar tuning, E A D G B E
    pub const STANDARD: Tuning = Tuning([
        PitchClass::E,
        PitchClass::A,
        PitchClass::D,
        PitchClass::G,
        PitchClass::B,
        PitchClass::E,
    ]);

    pub fn strings(&self) -> &[PitchClass; STRING_COUNT] {
        &self.0
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::STANDARD
    }
}

/// Immutable grid of pitch classes, one row per string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fretboard {
    tuning: Tuning,
    fret_count: u8,
    strings: Vec<Vec<PitchClass>>,
}

impl Fretboard {
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn fret_count(&self) -> u8 {
        self.fret_count
    }

    /// Columns per string, including the open string
    pub fn columns(&self) -> usize {
        self.fret_count as usize + 1
    }

    /// Rows, lowest string first
    pub fn strings(&self) -> &[Vec<PitchClass>] {
        &self.strings
    }

    pub fn pitch_at(&self, string: usize, fret: usize) -> Option<PitchClass> {
        self.strings.get(string)?.get(fret).copied()
    }
}

/// Build the grid for `tuning` covering frets `0..=fret_count`.
///
/// The pitch at `(s, f)` is `tuning[s] + f` mod 12.
pub fn build_fretboard(tuning: &Tuning, fret_count: u8) -> Fretboard {
    let strings = tuning
        .strings()
        .iter()
        .map(|&open| {
            (0..=fret_count)
                .map(|fret| open.transpose(fret as i32))
                .collect()
        })
        .collect();

    Fretboard {
        tuning: *tuning,
        fret_count,
        strings,
    }
}
