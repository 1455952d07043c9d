//! # Chord Selection
//!
//! The input to a visualization: a root note, a chord type, and optionally
//! how many frets to draw. Selections can be built directly or read from a
//! small YAML document:
//!
//! ```yaml
//! root: A
//! chord-type: m7
//! frets: 12
//! ```
//!
//! Names are validated when the selection is resolved, not when it is read,
//! so a document with an unknown chord type still parses and fails later with
//! [`FretboardError::UnknownChordType`].

use serde::{Deserialize, Serialize};

use crate::chord::{chord_tones, ChordTones};
use crate::error::FretboardError;
use crate::fretboard::{DEFAULT_FRET_COUNT, MAX_FRET_COUNT};
use crate::pitch::{resolve_pitch_class, PitchClass};

/// Root note and chord type as entered by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Selection {
    pub root: String,
    pub chord_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frets: Option<u8>,
}

impl Selection {
    pub fn new(root: impl Into<String>, chord_type: impl Into<String>) -> Self {
        Selection {
            root: root.into(),
            chord_type: chord_type.into(),
            frets: None,
        }
    }

    /// Parse a selection from YAML
    pub fn from_yaml(source: &str) -> Result<Self, FretboardError> {
        serde_yaml::from_str(source).map_err(|e| FretboardError::ConfigError(e.to_string()))
    }

    /// Requested fret count, at most [`MAX_FRET_COUNT`]
    pub fn fret_count(&self) -> Result<u8, FretboardError> {
        match self.frets {
            None => Ok(DEFAULT_FRET_COUNT),
            Some(frets) if frets <= MAX_FRET_COUNT => Ok(frets),
            Some(frets) => Err(FretboardError::ConfigError(format!(
                "frets must be at most {}, got {}",
                MAX_FRET_COUNT, frets
            ))),
        }
    }

    /// Validate the names and compute the chord
    pub fn resolve(&self) -> Result<(PitchClass, ChordTones), FretboardError> {
        let root = resolve_pitch_class(&self.root)?;
        let tones = chord_tones(root, &self.chord_type)?;
        Ok((root, tones))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_from_yaml() {
        let source = r#"
root: A
chord-type: m7
frets: 12
"#;
        let selection = Selection::from_yaml(source).unwrap();
        assert_eq!(selection.root, "A");
        assert_eq!(selection.chord_type, "m7");
        assert_eq!(selection.fret_count().unwrap(), 12);
    }

    #[test]
    fn test_frets_default() {
        let selection = Selection::from_yaml("root: C\nchord-type: maj\n").unwrap();
        assert_eq!(selection.frets, None);
        assert_eq!(selection.fret_count().unwrap(), DEFAULT_FRET_COUNT);
    }

    #[test]
    fn test_fret_count_upper_bound() {
        let mut selection = Selection::new("C", "maj");
        selection.frets = Some(MAX_FRET_COUNT);
        assert_eq!(selection.fret_count().unwrap(), 23);

        let selection = Selection::from_yaml("root: C\nchord-type: maj\nfrets: 200\n").unwrap();
        let err = selection.fret_count().unwrap_err();
        assert!(matches!(err, FretboardError::ConfigError(ref m) if m.contains("200")));
    }

    #[test]
    fn test_padded_names_resolve() {
        let (root, tones) = Selection::new(" C ", "maj ").resolve().unwrap();
        assert_eq!(root, PitchClass::C);
        assert_eq!(tones.len(), 3);
    }

    #[test]
    fn test_numeric_chord_type() {
        let selection = Selection::from_yaml("root: G\nchord-type: \"7\"\n").unwrap();
        let (_, tones) = selection.resolve().unwrap();
        assert_eq!(tones.summary(&selection.chord_type), "G7 notes: G, B, D, F");
    }

    #[test]
    fn test_missing_field_is_config_error() {
        let err = Selection::from_yaml("root: C\n").unwrap_err();
        assert!(matches!(err, FretboardError::ConfigError(_)));
    }

    #[test]
    fn test_resolve_reports_bad_names() {
        let err = Selection::new("Bb", "maj").resolve().unwrap_err();
        assert!(matches!(err, FretboardError::InvalidPitchName(_)));

        let err = Selection::new("C", "maj13").resolve().unwrap_err();
        assert!(matches!(err, FretboardError::UnknownChordType(_)));
    }
}
