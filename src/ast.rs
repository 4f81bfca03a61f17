//! # Document Model
//!
//! ```text
//! Document
//!   └── Vec<Part>
//!         ├── type: PartType (INTRO, VERSO, REFRAO, ..., GERAL)
//!         ├── title: Option<String>
//!         └── Vec<Line>
//!               ├── lyric: String ("" for instrumental lines)
//!               └── Vec<ChordToken>
//!                     ├── chord: String (literal, as written)
//!                     └── pos: usize (char column into the untransposed lyric)
//! ```
//!
//! A `Document` always holds at least the leading `GERAL` part. Within one
//! line, `(pos, chord)` pairs are unique. Transposition never touches a
//! `Document` in place; see [`crate::transpose`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CifraError;
use crate::section::PartType;

/// A chord symbol anchored at a column of its lyric line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordToken {
    pub chord: String,
    pub pos: usize,
}

impl ChordToken {
    pub fn new(chord: impl Into<String>, pos: usize) -> Self {
        Self {
            chord: chord.into(),
            pos,
        }
    }
}

/// One lyric line with the chords sung over it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    pub lyric: String,
    /// Not necessarily sorted by `pos`
    pub chords: Vec<ChordToken>,
}

impl Line {
    /// Plain lyric with no chords.
    pub fn lyric(lyric: impl Into<String>) -> Self {
        Self {
            lyric: lyric.into(),
            chords: Vec::new(),
        }
    }

    /// Chords with no lyric underneath.
    pub fn instrumental(chords: Vec<ChordToken>) -> Self {
        Self {
            lyric: String::new(),
            chords,
        }
    }

    pub fn is_instrumental(&self) -> bool {
        self.lyric.is_empty() && !self.chords.is_empty()
    }
}

/// A structural block of the song
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(rename = "type")]
    pub kind: PartType,
    pub title: Option<String>,
    pub lines: Vec<Line>,
}

impl Part {
    pub fn new(kind: PartType, title: Option<String>) -> Self {
        Self {
            kind,
            title,
            lines: Vec::new(),
        }
    }
}

/// A parsed chord chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub parts: Vec<Part>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            parts: vec![Part::default()],
        }
    }
}

impl Document {
    /// All lines in document order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.parts.iter().flat_map(|part| part.lines.iter())
    }

    /// All chord tokens in document order.
    pub fn chords(&self) -> impl Iterator<Item = &ChordToken> {
        self.lines().flat_map(|line| line.chords.iter())
    }

    /// Literal chord strings used anywhere, deduplicated, first-seen order.
    ///
    /// # Examples
    /// ```
    /// let doc = cifra::parse("D   A   D\nletra aqui mesmo\nG");
    /// assert_eq!(doc.chord_vocabulary(), vec!["D", "A", "G"]);
    /// ```
    pub fn chord_vocabulary(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut vocabulary = Vec::new();
        for token in self.chords() {
            if seen.insert(token.chord.as_str()) {
                vocabulary.push(token.chord.clone());
            }
        }
        vocabulary
    }

    /// Replace the literal chord text of one token.
    ///
    /// Indices are zero-based: part, line within the part, token within the
    /// line. The token keeps its position.
    pub fn set_chord(
        &mut self,
        part: usize,
        line: usize,
        token: usize,
        chord: impl Into<String>,
    ) -> Result<(), CifraError> {
        let target = self
            .parts
            .get_mut(part)
            .and_then(|p| p.lines.get_mut(line))
            .and_then(|l| l.chords.get_mut(token))
            .ok_or(CifraError::ChordNotFound { part, line, token })?;
        target.chord = chord.into();
        Ok(())
    }
}

/// Drop repeated `(pos, chord)` pairs, keeping the first occurrence's order.
pub fn dedup_tokens(tokens: Vec<ChordToken>) -> Vec<ChordToken> {
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|token| seen.insert((token.pos, token.chord.clone())))
        .collect()
}
