//! # Error Types
//!
//! Parsing, transposition and rendering never fail: malformed chords and lines
//! degrade to plain text. The variants here belong to the surfaces around that
//! core (front matter, keys, structural edits, storage).
//!
//! ## Usage
//! ```rust
//! use cifra::{import_song, CifraError, ImportOptions};
//!
//! let raw = "---\ntitle: [unclosed\n---\nD A\nletra";
//! match import_song(raw, &ImportOptions::default()) {
//!     Ok(song) => println!("{} parts", song.document.parts.len()),
//!     Err(CifraError::MetadataError(msg)) => eprintln!("bad front matter: {}", msg),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::repository::SongId;

#[derive(Error, Debug, PartialEq)]
pub enum CifraError {
    /// Front matter YAML could not be read.
    ///
    /// # Example
    /// ```
    /// # use cifra::CifraError;
    /// let err = CifraError::MetadataError("tags must be a list".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: tags must be a list");
    /// ```
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    /// A key is not a note spelling (optionally followed by `m`).
    #[error("Unknown key: {0}")]
    KeyError(String),

    /// An accidental preference other than sharp or flat.
    #[error("Unknown spelling: {0}")]
    SpellingError(String),

    /// A structural edit addressed a chord token that does not exist.
    #[error("No chord at part {part}, line {line}, token {token}")]
    ChordNotFound {
        part: usize,
        line: usize,
        token: usize,
    },

    #[error("Song not found: {0}")]
    SongNotFound(SongId),
}
