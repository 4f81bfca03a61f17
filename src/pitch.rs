//! # Pitch-Class Model
//!
//! Maps note spellings to pitch classes (0 = C ... 11 = B) and back.
//!
//! ```text
//!  0   1    2   3    4   5   6    7   8    9   10   11
//!  C   C#   D   D#   E   F   F#   G   G#   A   A#   B     (sharp-preferred)
//!  C   Db   D   Eb   E   F   Gb   G   Ab   A   Bb   B     (flat-preferred)
//! ```
//!
//! Enharmonic aliases `B#`, `Cb`, `E#` and `Fb` are understood on input but
//! never produced on output.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CifraError;

/// Sharp-preferred spelling of each pitch class.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-preferred spelling of each pitch class.
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Accidental preference used when a pitch class is written back as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

/// Parses "sharp"/"#" or "flat"/"b" (case-insensitive for the words).
impl FromStr for Spelling {
    type Err = CifraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "#" => Ok(Spelling::Sharp),
            "b" => Ok(Spelling::Flat),
            other => match other.to_ascii_lowercase().as_str() {
                "sharp" | "sharps" => Ok(Spelling::Sharp),
                "flat" | "flats" => Ok(Spelling::Flat),
                _ => Err(CifraError::SpellingError(s.to_string())),
            },
        }
    }
}

impl Spelling {
    /// Conventional accidental preference of a key such as "F", "Bb" or "Cm".
    ///
    /// Flat keys (F, Bb, Eb, Ab, Db, Gb, Cb) and their relative minors
    /// (Dm, Gm, Cm, Fm, Bbm, Ebm, Abm) prefer flats; everything else,
    /// including unrecognized keys, prefers sharps.
    pub fn for_key(key: &str) -> Self {
        let key = key.trim();
        let (tonic, minor) = match key.strip_suffix('m') {
            Some(t) if !t.is_empty() => (t, true),
            _ => (key, false),
        };

        let flat = if minor {
            matches!(tonic, "D" | "G" | "C" | "F" | "Bb" | "Eb" | "Ab")
        } else {
            matches!(tonic, "F" | "Bb" | "Eb" | "Ab" | "Db" | "Gb" | "Cb")
        };

        if flat {
            Spelling::Flat
        } else {
            Spelling::Sharp
        }
    }

    fn table(self) -> &'static [&'static str; 12] {
        match self {
            Spelling::Sharp => &SHARP_NAMES,
            Spelling::Flat => &FLAT_NAMES,
        }
    }
}

/// Wrap any integer into the 0..=11 pitch-class range.
pub fn wrap(n: i32) -> u8 {
    n.rem_euclid(12) as u8
}

/// Pitch class of a note spelling such as "C", "F#", "Bb" or "Cb".
pub fn lookup(spelling: &str) -> Option<u8> {
    let pc = match spelling {
        "C" | "B#" => 0,
        "C#" | "Db" => 1,
        "D" => 2,
        "D#" | "Eb" => 3,
        "E" | "Fb" => 4,
        "F" | "E#" => 5,
        "F#" | "Gb" => 6,
        "G" => 7,
        "G#" | "Ab" => 8,
        "A" => 9,
        "A#" | "Bb" => 10,
        "B" | "Cb" => 11,
        _ => return None,
    };
    Some(pc)
}

/// Canonical spelling of a pitch class. Values above 11 are wrapped.
pub fn spell(pitch_class: u8, preference: Spelling) -> &'static str {
    preference.table()[(pitch_class % 12) as usize]
}

/// Pitch class of a chord's root (`"F#m7/C#"` -> 6), if it has a valid one.
pub fn pitch_class_of(chord: &str) -> Option<u8> {
    let mut chars = chord.chars();
    let letter = chars.next()?;
    if !('A'..='G').contains(&letter) {
        return None;
    }
    let root_len = match chars.next() {
        Some('#') | Some('b') => 2,
        _ => 1,
    };
    lookup(&chord[..root_len])
}
