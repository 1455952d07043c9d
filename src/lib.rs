pub mod chord;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod highlight;
pub mod pitch;
pub mod render;

pub use chord::{chord_tones, chord_types, formula, ChordTones, CHORD_FORMULAS};
pub use config::Selection;
pub use error::*;
pub use fretboard::{
    build_fretboard, Fretboard, Tuning, DEFAULT_FRET_COUNT, MAX_FRET_COUNT, STRING_COUNT,
};
pub use highlight::{categorize, highlight, Cell, CellCategory, HighlightedFretboard};
pub use pitch::{resolve_pitch_class, PitchClass, NOTE_NAMES};
pub use render::{to_html, to_text};

use serde::Serialize;

/// Everything a front end needs to show one chord on the board
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordView {
    pub summary: String,
    pub chord_type: String,
    pub board: HighlightedFretboard,
}

/// Resolve a selection and categorize a standard-tuned fretboard against it.
/// This is the main entry point for the library.
///
/// ```rust
/// use fretboard::{visualize, Selection};
///
/// let view = visualize(&Selection::new("C", "maj"))?;
/// assert_eq!(view.summary, "Cmaj notes: C, E, G");
/// # Ok::<(), fretboard::FretboardError>(())
/// ```
pub fn visualize(selection: &Selection) -> Result<ChordView, FretboardError> {
    let (_, tones) = selection.resolve()?;
    let frets = selection.fret_count()?;
    let board = build_fretboard(&Tuning::STANDARD, frets);
    let chord_type = selection.chord_type.trim();
    let summary = tones.summary(chord_type);
    tracing::info!(%summary, frets, "visualizing chord");
    Ok(ChordView {
        summary,
        chord_type: chord_type.to_string(),
        board: highlight(&board, &tones),
    })
}

/// Visualize and render as HTML markup
pub fn visualize_html(selection: &Selection) -> Result<String, FretboardError> {
    let view = visualize(selection)?;
    Ok(to_html(&view.board))
}

/// Visualize and render as fixed-width text
pub fn visualize_text(selection: &Selection) -> Result<String, FretboardError> {
    let view = visualize(selection)?;
    Ok(to_text(&view.board))
}
