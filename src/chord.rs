//! # Chord Formulas
//!
//! Chord types are plain data: an identifier mapped to semitone offsets above
//! the root. Adding a chord type means adding a row to [`CHORD_FORMULAS`].
//!
//! ## Supported Chord Types
//! - **Major**: `maj` → root, major 3rd, perfect 5th
//! - **Minor**: `m` → root, minor 3rd, perfect 5th
//! - **Dominant 7th**: `7` → major triad + minor 7th
//! - **Minor 7th**: `m7` → minor triad + minor 7th
//! - **Major 7th**: `maj7` → major triad + major 7th
//! - **Diminished**: `dim` → root, minor 3rd, diminished 5th
//! - **Diminished 7th**: `dim7` → diminished triad + diminished 7th
//! - **Augmented**: `aug` → root, major 3rd, augmented 5th
//! - **Sus2 / Sus4**: `sus2`, `sus4` → 3rd replaced by a 2nd or 4th
//!
//! ## Example
//! ```rust
//! use fretboard::{chord_tones, PitchClass};
//!
//! let tones = chord_tones(PitchClass::G, "7")?;
//! assert_eq!(tones.summary("7"), "G7 notes: G, B, D, F");
//! # Ok::<(), fretboard::FretboardError>(())
//! ```

use serde::Serialize;

use crate::error::FretboardError;
use crate::pitch::PitchClass;

/// Chord type identifier → semitone offsets from the root.
///
/// Every formula starts at 0 and holds offsets that are distinct mod 12.
/// Row order is the order chord types are offered to a user.
pub const CHORD_FORMULAS: &[(&str, &[u8])] = &[
    ("maj", &[0, 4, 7]),
    ("m", &[0, 3, 7]),
    ("7", &[0, 4, 7, 10]),
    ("m7", &[0, 3, 7, 10]),
    ("maj7", &[0, 4, 7, 11]),
    ("dim", &[0, 3, 6]),
    ("dim7", &[0, 3, 6, 9]),
    ("aug", &[0, 4, 8]),
    ("sus2", &[0, 2, 7]),
    ("sus4", &[0, 5, 7]),
];

/// Identifiers of every known chord type, in table order
pub fn chord_types() -> impl Iterator<Item = &'static str> {
    CHORD_FORMULAS.iter().map(|(name, _)| *name)
}

/// Offsets for a chord type. Surrounding whitespace is ignored.
pub fn formula(chord_type: &str) -> Result<&'static [u8], FretboardError> {
    let trimmed = chord_type.trim();
    CHORD_FORMULAS
        .iter()
        .find(|(name, _)| *name == trimmed)
        .map(|(_, offsets)| *offsets)
        .ok_or_else(|| FretboardError::UnknownChordType(chord_type.to_string()))
}

/// The pitch classes of a chord, root first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChordTones(Vec<PitchClass>);

impl ChordTones {
    /// The root; always the first tone
    pub fn root(&self) -> PitchClass {
        self.0[0]
    }

    pub fn tones(&self) -> &[PitchClass] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, pitch: PitchClass) -> bool {
        self.0.contains(&pitch)
    }

    /// Human-readable line such as `"Cmaj notes: C, E, G"`
    pub fn summary(&self, chord_type: &str) -> String {
        let names: Vec<&str> = self.0.iter().map(|p| p.name()).collect();
        format!("{}{} notes: {}", self.root(), chord_type, names.join(", "))
    }
}

/// Compute the tones of `chord_type` built on `root`.
///
/// Each tone is `(root + offset) mod 12`, in formula order, so the root
/// comes first. Tones are not deduplicated.
///
/// # Errors
/// Returns [`FretboardError::UnknownChordType`] when `chord_type` has no
/// formula.
pub fn chord_tones(root: PitchClass, chord_type: &str) -> Result<ChordTones, FretboardError> {
    let offsets = formula(chord_type)?;
    let tones = offsets
        .iter()
        .map(|&offset| root.transpose(offset as i32))
        .collect();
    tracing::debug!(%root, chord_type, "resolved chord tones");
    Ok(ChordTones(tones))
}
