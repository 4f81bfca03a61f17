//! Overlay rendering
//!
//! Builds the chord line printed above a lyric in a monospace layout. Chord
//! `pos` values are char columns into the lyric, so stacking the two strings
//! puts every chord over the syllable it was written above.

use crate::ast::{ChordToken, Document, Line};
use crate::pitch::Spelling;
use crate::section::PartType;
use crate::transpose::{transpose_chord_tokens, transpose_document};

/// How a document is rendered as text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub semitones: i32,
    pub spelling: Spelling,
    /// Print a label line before each titled part
    pub headings: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            semitones: 0,
            spelling: Spelling::Sharp,
            headings: true,
        }
    }
}

/// Chord line for `lyric`: spaces, with each chord written from its column.
///
/// The result is at least as wide as the lyric and grows to fit a chord that
/// runs past it. Tokens are written in stored order; on overlap the later
/// one wins.
///
/// # Examples
/// ```
/// use cifra::{render_chord_line, ChordToken};
///
/// let chords = [ChordToken::new("D", 0), ChordToken::new("A", 8)];
/// assert_eq!(render_chord_line("Ele é exaltado", &chords), "D       A     ");
/// ```
pub fn render_chord_line(lyric: &str, chords: &[ChordToken]) -> String {
    let width = chords
        .iter()
        .map(|token| token.pos + token.chord.chars().count())
        .fold(lyric.chars().count(), usize::max);
    let mut buffer: Vec<char> = vec![' '; width];

    for token in chords {
        let start = token.pos.min(width);
        for (column, c) in (start..width).zip(token.chord.chars()) {
            buffer[column] = c;
        }
    }

    buffer.into_iter().collect()
}

/// Chord line and lyric for one line, chords shifted by `semitones` first.
pub fn render_line(line: &Line, semitones: i32, spelling: Spelling) -> (String, String) {
    let chords = transpose_chord_tokens(&line.chords, semitones, spelling);
    (render_chord_line(&line.lyric, &chords), line.lyric.clone())
}

/// Render a whole document as monospace text.
///
/// Every titled part starts with its title (or type label) when headings are
/// on; the leading `GERAL` part never gets one. Lines without chords print
/// only the lyric, instrumental lines only the chords. Parts are separated by
/// a blank line.
pub fn render_document(document: &Document, options: &RenderOptions) -> String {
    let view = transpose_document(document, options.semitones, options.spelling);
    let mut blocks = Vec::new();

    for part in &view.parts {
        let mut out: Vec<String> = Vec::new();

        if options.headings && part.kind != PartType::Geral {
            let label = part.title.as_deref().unwrap_or_else(|| part.kind.label());
            out.push(format!("[{}]", label));
        }

        for line in &part.lines {
            if !line.chords.is_empty() {
                out.push(render_chord_line(&line.lyric, &line.chords).trim_end().to_string());
            }
            if !line.lyric.is_empty() {
                out.push(line.lyric.clone());
            }
        }

        if !out.is_empty() {
            blocks.push(out.join("\n"));
        }
    }

    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_overlay_aligns_columns() {
        let chords = [ChordToken::new("G", 0), ChordToken::new("D/F#", 4)];
        assert_eq!(render_chord_line("Tu és santo", &chords), "G   D/F#   ");
    }

    #[test]
    fn test_overlay_extends_past_lyric() {
        let chords = [ChordToken::new("Am7", 3)];
        assert_eq!(render_chord_line("Paz", &chords), "   Am7");
        assert_eq!(render_chord_line("", &[ChordToken::new("E", 2)]), "  E");
    }

    #[test]
    fn test_later_token_overwrites() {
        let chords = [ChordToken::new("Bbm", 0), ChordToken::new("C", 1)];
        assert_eq!(render_chord_line("abcdef", &chords), "BCm   ");
    }

    #[test]
    fn test_render_line_transposes() {
        let doc = parse("D       A\nEle é exaltado");
        let (chords, lyric) = render_line(&doc.parts[0].lines[0], 2, Spelling::Sharp);
        assert_eq!(chords, "E       B     ");
        assert_eq!(lyric, "Ele é exaltado");
    }

    #[test]
    fn test_render_document() {
        let doc = parse("D       A\nEle é exaltado\n\n[Refrão] G D\nSanto");
        let text = render_document(&doc, &RenderOptions::default());
        assert_eq!(text, "D       A\nEle é exaltado\n\n[Refrão]\nG D\nSanto");

        let options = RenderOptions {
            semitones: -2,
            spelling: Spelling::Flat,
            headings: false,
        };
        let text = render_document(&doc, &options);
        assert_eq!(text, "C       G\nEle é exaltado\n\nF C\nSanto");
    }
}
