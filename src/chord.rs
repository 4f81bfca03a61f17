//! Chord symbol grammar
//!
//! A chord symbol is a root letter `A`-`G`, an optional `#` or `b`, an opaque
//! suffix (`m7`, `maj7`, `sus4`, `(9)`, ...) and an optional `/` bass note.
//! The suffix is carried verbatim and never interpreted.
//!
//! Recognition is stricter than splitting: a token only counts as a chord when
//! its suffix is built from chord vocabulary (qualities such as `m`, `maj`,
//! `dim`, `sus`, `add`, digits, accidentals and punctuation). That keeps words
//! like "Deus", "Ele" or "Amor" out while `Bm7(b5)` or `C7M` still qualify.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::pitch;

/// Longest string accepted as a chord token. Longer words are lyrics.
pub const MAX_CHORD_LEN: usize = 12;

/// Pieces a recognizable chord suffix is made of, in any order and number.
static SUFFIX_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:maj|min|dim|aug|sus|add|alt|m|M|b|#|\+|-|\(|\)|º|°|ø|,|\.|[0-9])*$")
        .expect("chord suffix pattern")
});

/// A chord symbol split into root, opaque suffix and optional bass
#[derive(Debug, Clone, PartialEq)]
pub struct ChordSymbol<'a> {
    /// Root spelling, e.g. "F#" or "Bb"
    pub root: &'a str,
    pub suffix: &'a str,
    /// Bass spelling after the slash, when it is a valid note
    pub bass: Option<&'a str>,
    /// Text after the slash, valid note or not
    pub raw_bass: Option<&'a str>,
}

impl<'a> ChordSymbol<'a> {
    /// Split a chord string. Returns `None` when the root is not a note.
    ///
    /// # Examples
    /// ```
    /// use cifra::chord::ChordSymbol;
    ///
    /// let c = ChordSymbol::parse("F#m7/C#").unwrap();
    /// assert_eq!(c.root, "F#");
    /// assert_eq!(c.suffix, "m7");
    /// assert_eq!(c.bass, Some("C#"));
    ///
    /// assert!(ChordSymbol::parse("H7").is_none());
    /// ```
    pub fn parse(chord: &'a str) -> Option<Self> {
        let (main, raw_bass) = match chord.split_once('/') {
            Some((main, bass)) => (main, Some(bass)),
            None => (chord, None),
        };

        let root_len = root_len(main)?;
        let root = &main[..root_len];
        pitch::lookup(root)?;

        let bass = raw_bass.filter(|b| is_note(b));

        Some(Self {
            root,
            suffix: &main[root_len..],
            bass,
            raw_bass,
        })
    }

    pub fn root_pitch_class(&self) -> u8 {
        pitch::lookup(self.root).unwrap_or_default()
    }

    pub fn bass_pitch_class(&self) -> Option<u8> {
        self.bass.and_then(pitch::lookup)
    }

    /// Minor chords have a suffix starting with `m` that is not `maj`.
    pub fn is_minor(&self) -> bool {
        self.suffix.starts_with('m') && !self.suffix.starts_with("maj")
    }
}

/// Byte length of the root (letter plus optional accidental), if the string
/// starts with a note letter.
fn root_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b'A'..=b'G') => {}
        _ => return None,
    }
    match bytes.get(1) {
        Some(b'#') | Some(b'b') => Some(2),
        _ => Some(1),
    }
}

/// True for a bare note spelling: letter plus optional accidental.
pub fn is_note(s: &str) -> bool {
    matches!(root_len(s), Some(n) if n == s.len()) && pitch::lookup(s).is_some()
}

/// Does this whitespace-free candidate qualify as a chord token?
///
/// Requires a valid root, a length within [`MAX_CHORD_LEN`], a suffix that
/// reads as chord vocabulary, and a valid bass note when a slash is present.
pub fn is_chord_token(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.chars().count() > MAX_CHORD_LEN {
        return false;
    }

    let symbol = match ChordSymbol::parse(candidate) {
        Some(symbol) => symbol,
        None => return false,
    };

    if symbol.raw_bass.is_some() && symbol.bass.is_none() {
        return false;
    }

    SUFFIX_GRAMMAR.is_match(symbol.suffix)
}
