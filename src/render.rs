//! # Fretboard Rendering
//!
//! Turns a [`HighlightedFretboard`] into something a person can look at.
//! Two formats are produced here; JSON for other front ends comes straight
//! from the serde derives on the highlight types.
//!
//! Both renderers draw the highest string on top, as in tablature.
//!
//! ## Markup
//! A `<style>` block followed by a CSS grid of `div` cells: one header row of
//! fret numbers, then one row per string led by a string-number label. Note
//! cells carry one of the classes `note-root` (crimson), `note-highlight`
//! (orange) or `note-normal` (grey).
//!
//! ## Text
//! Fixed-width columns, root notes in square brackets and other chord tones
//! in parentheses:
//! ```text
//!        0    1    2    3
//!   1 | (E)   F   F#  [G]
//! ```

use crate::highlight::{CellCategory, HighlightedFretboard};

/// Stylesheet emitted ahead of the grid. The column count is set inline.
const STYLE: &str = r#"<style>
  .fretboard-container { overflow-x: auto; margin-bottom: 1rem; }
  .fretboard { display: grid; gap: 1px; }
  .fret { height: 30px; display: flex; align-items: center; justify-content: center; border: 1px solid #aaa; font-family: monospace; font-size: 14px; }
  .fret-label { background: #333; color: white; font-weight: bold; }
  .note-normal { background: #eee; color: #666; }
  .note-highlight { background: orange; color: white; font-weight: bold; }
  .note-root { background: crimson; color: white; font-weight: bold; }
</style>
"#;

/// CSS class for a cell category
fn category_class(category: CellCategory) -> &'static str {
    match category {
        CellCategory::Root => "note-root",
        CellCategory::ChordMember => "note-highlight",
        CellCategory::Plain => "note-normal",
    }
}

/// Render the board as HTML markup
pub fn to_html(board: &HighlightedFretboard) -> String {
    let mut html = String::new();
    let columns = board.fret_count as usize + 1;

    html.push_str(STYLE);
    html.push_str("<div class=\"fretboard-container\">\n");
    html.push_str(&format!(
        "  <div class=\"fretboard\" style=\"grid-template-columns: repeat({}, 40px)\">\n",
        columns + 1
    ));

    // Fret numbers, with a blank corner cell above the string labels
    html.push_str("    <div class=\"fret fret-label\"></div>\n");
    for fret in 0..columns {
        html.push_str(&format!("    <div class=\"fret fret-label\">{}</div>\n", fret));
    }

    let string_count = board.strings.len();
    for (i, row) in board.strings.iter().enumerate().rev() {
        // Guitar strings are numbered from the highest
        html.push_str(&format!(
            "    <div class=\"fret fret-label\">{}</div>\n",
            string_count - i
        ));
        for cell in row {
            html.push_str(&format!(
                "    <div class=\"fret {}\">{}</div>\n",
                category_class(cell.category),
                cell.pitch
            ));
        }
    }

    html.push_str("  </div>\n");
    html.push_str("</div>\n");
    html
}

/// Render the board as fixed-width text
pub fn to_text(board: &HighlightedFretboard) -> String {
    let mut text = String::new();
    let columns = board.fret_count as usize + 1;

    text.push_str("     ");
    for fret in 0..columns {
        text.push_str(&format!("{:^5}", fret));
    }
    text.push('\n');

    let string_count = board.strings.len();
    for (i, row) in board.strings.iter().enumerate().rev() {
        text.push_str(&format!("{:>3} |", string_count - i));
        for cell in row {
            let label = match cell.category {
                CellCategory::Root => format!("[{}]", cell.pitch),
                CellCategory::ChordMember => format!("({})", cell.pitch),
                CellCategory::Plain => cell.pitch.to_string(),
            };
            text.push_str(&format!("{:^5}", label));
        }
        text.push('\n');
    }

    text
}
