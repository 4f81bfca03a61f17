//! # Public API
//!
//! One-call helpers over the parse / transpose / render pipeline.
//!
//! ## Typical Usage
//!
//! ```rust
//! use cifra::{transpose_and_render, Spelling};
//!
//! let source = "G       D\nGrande é o Senhor";
//! let text = transpose_and_render(source, 2, Spelling::Sharp);
//! assert_eq!(text, "A       E\nGrande é o Senhor");
//! ```

use crate::overlay::{render_document, RenderOptions};
use crate::parser::parse;
use crate::pitch::Spelling;
use crate::transpose::{semitones_between, transpose_document};
use crate::{CifraError, Document};

/// Parse a chart and render it back as aligned text, untransposed.
///
/// Blank lines inside a part disappear and chords over short lyrics are
/// pulled back to the lyric's end, so the output is a normalized chart.
pub fn parse_and_render(source: &str) -> String {
    render_document(&parse(source), &RenderOptions::default())
}

/// Parse, shift every chord by `semitones` and render.
pub fn transpose_and_render(source: &str, semitones: i32, spelling: Spelling) -> String {
    let options = RenderOptions {
        semitones,
        spelling,
        ..Default::default()
    };
    render_document(&parse(source), &options)
}

/// Parse and transpose from one key to another.
///
/// # Errors
/// [`CifraError::KeyError`] when either key is not a note spelling.
pub fn parse_in_key(source: &str, from_key: &str, to_key: &str) -> Result<Document, CifraError> {
    let semitones = semitones_between(from_key, to_key).ok_or_else(|| {
        CifraError::KeyError(format!("cannot transpose from {} to {}", from_key, to_key))
    })?;
    Ok(transpose_document(
        &parse(source),
        semitones,
        Spelling::for_key(to_key),
    ))
}
