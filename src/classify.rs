//! # Line Classifier
//!
//! Decides what a single line of pasted songsheet text is. Classification is
//! a rule table evaluated top to bottom; the first rule that accepts the line
//! wins.
//!
//! | Order | Kind | Rule |
//! |---|---|---|
//! | 1 | `Blank` | empty after trimming |
//! | 2 | `Heading` | a known section name, see [`crate::section`] |
//! | 3 | `SingleChord` | exactly one token and it is a chord |
//! | 4 | `Chord` | two or more chord tokens, or one chord token and 4+ whitespace characters |
//! | 5 | `Lyric` | has letters, or is multi-token, or is 3+ characters long |
//! | 6 | `Other` | anything else (e.g. `|`, `--`) |

use crate::chord::is_chord_token;
use crate::section::detect_heading;

/// Whitespace needed before a line with a single chord token counts as a
/// chord line.
pub const LONE_CHORD_MIN_WHITESPACE: usize = 4;

/// What a line of songsheet text is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Heading,
    /// The line is one chord and nothing else
    SingleChord,
    Chord,
    Lyric,
    /// Non-blank text that is neither chords nor lyric-like
    Other,
}

impl LineKind {
    /// Chord lines and single-chord lines both carry chord tokens.
    pub fn carries_chords(&self) -> bool {
        matches!(self, LineKind::Chord | LineKind::SingleChord)
    }
}

type Rule = (LineKind, fn(&str) -> bool);

const RULES: &[Rule] = &[
    (LineKind::Blank, is_blank),
    (LineKind::Heading, is_heading),
    (LineKind::SingleChord, is_single_chord_only_line),
    (LineKind::Chord, is_chord_line),
    (LineKind::Lyric, is_lyric_shaped),
];

/// Classify one line of text.
///
/// # Examples
/// ```
/// use cifra::classify::{classify, LineKind};
///
/// assert_eq!(classify("D       A"), LineKind::Chord);
/// assert_eq!(classify("Ele é exaltado"), LineKind::Lyric);
/// assert_eq!(classify("Em"), LineKind::SingleChord);
/// assert_eq!(classify("[Refrão]"), LineKind::Heading);
/// assert_eq!(classify("   "), LineKind::Blank);
/// ```
pub fn classify(line: &str) -> LineKind {
    let kind = RULES
        .iter()
        .find(|(_, rule)| rule(line))
        .map(|(kind, _)| *kind)
        .unwrap_or(LineKind::Other);
    log::trace!("classified {:?} as {:?}", line, kind);
    kind
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_heading(line: &str) -> bool {
    detect_heading(line).is_some()
}

/// Chord line: two or more chord tokens, or exactly one chord token with at
/// least [`LONE_CHORD_MIN_WHITESPACE`] whitespace characters on the line.
///
/// Other tokens on the line (`(2x)`, stray words) do not disqualify it.
pub fn is_chord_line(line: &str) -> bool {
    let chords = line
        .split_whitespace()
        .filter(|token| is_chord_token(token))
        .count();

    match chords {
        0 => false,
        1 => line.chars().filter(|c| c.is_whitespace()).count() >= LONE_CHORD_MIN_WHITESPACE,
        _ => true,
    }
}

/// The whole trimmed line is a single chord token.
pub fn is_single_chord_only_line(line: &str) -> bool {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => is_chord_token(token),
        _ => false,
    }
}

fn is_lyric_shaped(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    trimmed.chars().any(char::is_alphabetic)
        || trimmed.split_whitespace().nth(1).is_some()
        || trimmed.chars().count() >= 3
}

/// True exactly when [`classify`] yields [`LineKind::Lyric`].
pub fn looks_like_lyric(line: &str) -> bool {
    classify(line) == LineKind::Lyric
}
