//! # Chord Highlighting
//!
//! Tags every fretboard cell with the role its pitch class plays in a chord.
//! This is the whole contract between the resolver and whatever presents the
//! board; layout and styling belong to the renderer.
//!
//! ## Categories
//! - `Root` - pitch class equals the chord's root
//! - `ChordMember` - pitch class is one of the other chord tones
//! - `Plain` - not in the chord
//!
//! A pitch equal to the root is always `Root`, whatever else it matches.

use serde::Serialize;

use crate::chord::ChordTones;
use crate::fretboard::Fretboard;
use crate::pitch::PitchClass;

/// Visual category of a fretboard cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellCategory {
    Root,
    ChordMember,
    Plain,
}

/// Categorize one pitch class against a chord.
///
/// # Example
/// ```
/// use fretboard::{categorize, chord_tones, CellCategory, PitchClass};
///
/// let tones = chord_tones(PitchClass::C, "maj").unwrap();
/// assert_eq!(categorize(PitchClass::C, &tones), CellCategory::Root);
/// assert_eq!(categorize(PitchClass::E, &tones), CellCategory::ChordMember);
/// assert_eq!(categorize(PitchClass::F, &tones), CellCategory::Plain);
/// ```
pub fn categorize(pitch: PitchClass, tones: &ChordTones) -> CellCategory {
    if pitch == tones.root() {
        CellCategory::Root
    } else if tones.contains(pitch) {
        CellCategory::ChordMember
    } else {
        CellCategory::Plain
    }
}

/// One categorized position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub pitch: PitchClass,
    pub category: CellCategory,
}

/// A fretboard with every cell categorized against a chord
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedFretboard {
    pub chord_tones: ChordTones,
    pub fret_count: u8,
    /// Rows, lowest string first
    pub strings: Vec<Vec<Cell>>,
}

impl HighlightedFretboard {
    pub fn cell(&self, string: usize, fret: usize) -> Option<Cell> {
        self.strings.get(string)?.get(fret).copied()
    }

    /// Count of cells in each category: (root, chord member, plain)
    pub fn counts(&self) -> (usize, usize, usize) {
        self.strings
            .iter()
            .flatten()
            .fold((0, 0, 0), |(r, m, p), cell| match cell.category {
                CellCategory::Root => (r + 1, m, p),
                CellCategory::ChordMember => (r, m + 1, p),
                CellCategory::Plain => (r, m, p + 1),
            })
    }
}

/// Categorize every cell of `board` against `tones`.
pub fn highlight(board: &Fretboard, tones: &ChordTones) -> HighlightedFretboard {
    let strings = board
        .strings()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&pitch| Cell {
                    pitch,
                    category: categorize(pitch, tones),
                })
                .collect()
        })
        .collect();

    HighlightedFretboard {
        chord_tones: tones.clone(),
        fret_count: board.fret_count(),
        strings,
    }
}
