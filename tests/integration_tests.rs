//! Integration tests for the fretboard visualizer
//!
//! Tests the full path from a selection to categorized and rendered boards.

use fretboard::{
    build_fretboard, chord_tones, chord_types, resolve_pitch_class, visualize, visualize_html,
    visualize_text, CellCategory, FretboardError, PitchClass, Selection, Tuning, NOTE_NAMES,
};

#[test]
fn test_c_major_on_standard_tuning() {
    let view = visualize(&Selection::new("C", "maj")).unwrap();
    assert_eq!(view.summary, "Cmaj notes: C, E, G");

    // Open low E is the major third, not the root
    let open_low_e = view.board.cell(0, 0).unwrap();
    assert_eq!(open_low_e.pitch, PitchClass::E);
    assert_eq!(open_low_e.category, CellCategory::ChordMember);

    // A string, third fret
    assert_eq!(view.board.cell(1, 3).unwrap().category, CellCategory::Root);
}

#[test]
fn test_every_root_and_chord_type_resolves() {
    for name in NOTE_NAMES {
        let root = resolve_pitch_class(name).unwrap();
        for chord_type in chord_types() {
            let tones = chord_tones(root, chord_type).unwrap();
            assert_eq!(tones.root(), root);
            assert!(tones.summary(chord_type).starts_with(&format!("{}{} notes: {}", name, chord_type, name)));
        }
    }
}

#[test]
fn test_wraparound_on_b_string() {
    let board = build_fretboard(&Tuning::STANDARD, 22);
    let b = resolve_pitch_class("B").unwrap();
    assert_eq!(b.index(), 11);
    assert_eq!(board.pitch_at(4, 0), Some(b));
    assert_eq!(board.pitch_at(4, 1).unwrap().index(), 0);
}

#[test]
fn test_fret_count_override() {
    let mut selection = Selection::new("A", "m7");
    selection.frets = Some(12);
    let view = visualize(&selection).unwrap();
    assert_eq!(view.board.fret_count, 12);
    assert!(view.board.strings.iter().all(|row| row.len() == 13));
}

#[test]
fn test_invalid_selections_fail() {
    let result = visualize(&Selection::new("Db", "maj"));
    assert!(matches!(result, Err(FretboardError::InvalidPitchName(_))));

    let result = visualize(&Selection::new("C", "unknown_type"));
    assert!(matches!(result, Err(FretboardError::UnknownChordType(_))));
}

#[test]
fn test_fret_count_above_limit_rejected() {
    let mut selection = Selection::new("C", "maj");
    selection.frets = Some(200);
    let result = visualize(&selection);
    assert!(matches!(result, Err(FretboardError::ConfigError(_))));
}

#[test]
fn test_padded_chord_type_summary() {
    let view = visualize(&Selection::new(" C", "maj ")).unwrap();
    assert_eq!(view.summary, "Cmaj notes: C, E, G");
    assert_eq!(view.chord_type, "maj");
}

#[test]
fn test_selection_document() {
    let source = r#"
root: D
chord-type: sus4
frets: 5
"#;
    let selection = Selection::from_yaml(source).unwrap();
    let view = visualize(&selection).unwrap();
    assert_eq!(view.summary, "Dsus4 notes: D, G, A");
    assert_eq!(view.board.fret_count, 5);
}

#[test]
fn test_html_output() {
    let html = visualize_html(&Selection::new("E", "m")).unwrap();
    assert!(html.contains("<div class=\"fretboard-container\">"));
    assert!(html.contains("fret-label\">22</div>"));
    assert!(html.contains("<div class=\"fret note-root\">E</div>"));
    assert!(html.contains("<div class=\"fret note-highlight\">G</div>"));
}

#[test]
fn test_html_output_is_styled_grid() {
    let html = visualize_html(&Selection::new("C", "maj")).unwrap();
    let style_end = html.find("</style>").expect("stylesheet");
    let container = html.find("<div class=\"fretboard-container\">").unwrap();
    assert!(style_end < container);
    assert!(html.contains("display: grid"));
    assert!(html.contains(".note-root { background: crimson"));
    assert!(html.contains(".note-highlight { background: orange"));
    assert!(html.contains(".note-normal { background: #eee"));
}

#[test]
fn test_text_output() {
    let text = visualize_text(&Selection::new("G", "7")).unwrap();
    assert_eq!(text.lines().count(), 7);
    assert!(text.contains("[G]"));
    assert!(text.contains("(F)"));
}

#[test]
fn test_json_output() {
    let view = visualize(&Selection::new("C", "maj")).unwrap();
    let json: serde_json::Value = serde_json::to_value(&view).unwrap();

    assert_eq!(json["summary"], "Cmaj notes: C, E, G");
    assert_eq!(json["chordType"], "maj");
    assert_eq!(json["board"]["chordTones"], serde_json::json!(["C", "E", "G"]));
    assert_eq!(json["board"]["fretCount"], 22);
    assert_eq!(json["board"]["strings"][0][0]["pitch"], "E");
    assert_eq!(json["board"]["strings"][0][0]["category"], "chordMember");
    assert_eq!(json["board"]["strings"][0][8]["category"], "root");
}
