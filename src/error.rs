//! # Error Types
//!
//! All failures in this crate come from invalid selections (an unknown note
//! name or chord type) or a malformed selection document. Nothing here is
//! recoverable: callers are expected to surface the message and stop.
//!
//! ## Usage
//! ```rust
//! use fretboard::{chord_tones, resolve_pitch_class, FretboardError};
//!
//! let root = resolve_pitch_class("C").unwrap();
//! match chord_tones(root, "maj13") {
//!     Ok(tones) => println!("{}", tones.summary("maj13")),
//!     Err(FretboardError::UnknownChordType(name)) => eprintln!("no formula for {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FretboardError {
    /// The note name is not one of the twelve sharp-spelled pitch names.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::InvalidPitchName("Db".to_string());
    /// assert_eq!(err.to_string(), "Invalid pitch name: Db");
    /// ```
    #[error("Invalid pitch name: {0}")]
    InvalidPitchName(String),

    /// The chord type has no entry in the formula table.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::UnknownChordType("maj13".to_string());
    /// assert_eq!(err.to_string(), "Unknown chord type: maj13");
    /// ```
    #[error("Unknown chord type: {0}")]
    UnknownChordType(String),

    /// The YAML selection document could not be read.
    #[error("Invalid selection: {0}")]
    ConfigError(String),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
