//! Transposition
//!
//! Moves chord roots and slash basses by a number of semitones and spells the
//! result with a chosen accidental preference. The suffix after the root is
//! never interpreted. Every function here returns a new value; documents and
//! token lists passed in are left as they were.

use crate::ast::{ChordToken, Document, Line, Part};
use crate::chord::{is_note, ChordSymbol};
use crate::pitch::{self, Spelling};

/// Transpose a single chord symbol by `semitones`.
///
/// The root and a valid slash bass move; the suffix is copied as is. A bass
/// that is not a note is dropped. A chord whose root is not a note comes back
/// unchanged.
///
/// # Examples
/// ```
/// use cifra::{transpose_chord, Spelling};
///
/// assert_eq!(transpose_chord("F#m7/C#", 2, Spelling::Sharp), "G#m7/D#");
/// assert_eq!(transpose_chord("Am", -2, Spelling::Flat), "Gm");
/// assert_eq!(transpose_chord("H7", 2, Spelling::Sharp), "H7");
/// ```
pub fn transpose_chord(chord: &str, semitones: i32, preference: Spelling) -> String {
    let symbol = match ChordSymbol::parse(chord) {
        Some(symbol) => symbol,
        None => return chord.to_string(),
    };

    // Reduce first so shifts near i32::MAX or i32::MIN cannot overflow
    let steps = semitones.rem_euclid(12);
    let shift = |pc: u8| pitch::spell(pitch::wrap(pc as i32 + steps), preference);

    let mut out = String::with_capacity(chord.len() + 1);
    out.push_str(shift(symbol.root_pitch_class()));
    out.push_str(symbol.suffix);
    if let Some(bass) = symbol.bass_pitch_class() {
        out.push('/');
        out.push_str(shift(bass));
    }
    out
}

/// Transpose every token's chord, keeping positions and order.
pub fn transpose_chord_tokens(
    tokens: &[ChordToken],
    semitones: i32,
    preference: Spelling,
) -> Vec<ChordToken> {
    if semitones == 0 {
        return tokens.to_vec();
    }
    tokens
        .iter()
        .map(|token| ChordToken {
            chord: transpose_chord(&token.chord, semitones, preference),
            pos: token.pos,
        })
        .collect()
}

/// Transposed copy of a whole document. The input is left untouched.
pub fn transpose_document(document: &Document, semitones: i32, preference: Spelling) -> Document {
    if semitones == 0 {
        return document.clone();
    }

    let parts = document
        .parts
        .iter()
        .map(|part| Part {
            kind: part.kind,
            title: part.title.clone(),
            lines: part
                .lines
                .iter()
                .map(|line| Line {
                    lyric: line.lyric.clone(),
                    chords: transpose_chord_tokens(&line.chords, semitones, preference),
                })
                .collect(),
        })
        .collect();

    Document { parts }
}

/// Split a key like "Bbm" into its tonic pitch class and minor flag.
pub fn parse_key(key: &str) -> Option<(u8, bool)> {
    let key = key.trim();
    let (tonic, minor) = match key.strip_suffix('m') {
        Some(t) if !t.is_empty() => (t, true),
        _ => (key, false),
    };
    if !is_note(tonic) {
        return None;
    }
    pitch::lookup(tonic).map(|pc| (pc, minor))
}

/// Upward distance in semitones (0..=11) from one key's tonic to another's.
///
/// # Examples
/// ```
/// use cifra::transpose::semitones_between;
///
/// assert_eq!(semitones_between("G", "A"), Some(2));
/// assert_eq!(semitones_between("A", "G"), Some(10));
/// assert_eq!(semitones_between("Em", "F#m"), Some(2));
/// assert_eq!(semitones_between("X", "A"), None);
/// ```
pub fn semitones_between(from_key: &str, to_key: &str) -> Option<i32> {
    let (from, _) = parse_key(from_key)?;
    let (to, _) = parse_key(to_key)?;
    Some(pitch::wrap(to as i32 - from as i32) as i32)
}

/// Transpose a document from one key to another, spelling accidentals the
/// way the target key conventionally does.
pub fn transpose_to_key(document: &Document, from_key: &str, to_key: &str) -> Option<Document> {
    let semitones = semitones_between(from_key, to_key)?;
    Some(transpose_document(document, semitones, Spelling::for_key(to_key)))
}
