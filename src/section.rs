//! Section headings
//!
//! Recognizes lines such as `[Refrão]`, `INTRO] D A`, `Pré-refrão:` or
//! `Verso 2 - Em C` and splits them into a section type, the label text and
//! whatever trails the separator.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Structural section of a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartType {
    Intro,
    Verso,
    Refrao,
    PreRefrao,
    Ponte,
    Final,
    Interludio,
    /// Lines that appear before any heading
    #[default]
    Geral,
}

impl PartType {
    /// Upper-case name as persisted, e.g. `PRE_REFRAO`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::Intro => "INTRO",
            PartType::Verso => "VERSO",
            PartType::Refrao => "REFRAO",
            PartType::PreRefrao => "PRE_REFRAO",
            PartType::Ponte => "PONTE",
            PartType::Final => "FINAL",
            PartType::Interludio => "INTERLUDIO",
            PartType::Geral => "GERAL",
        }
    }

    /// Display label used when a part has no title of its own.
    pub fn label(&self) -> &'static str {
        match self {
            PartType::Intro => "Intro",
            PartType::Verso => "Verso",
            PartType::Refrao => "Refrão",
            PartType::PreRefrao => "Pré-refrão",
            PartType::Ponte => "Ponte",
            PartType::Final => "Final",
            PartType::Interludio => "Interlúdio",
            PartType::Geral => "",
        }
    }
}

// Matched against lowercase, accent-folded labels. An optional number or
// repeat marker may follow the name ("verso 2", "refrao 2x").
static SECTION_PATTERNS: Lazy<Vec<(PartType, Regex)>> = Lazy::new(|| {
    let table = [
        (PartType::PreRefrao, r"pre[\s-]?(refrao|chorus)"),
        (PartType::Intro, r"intro(ducao|duction)?"),
        (PartType::Verso, r"verso|verse|estrofe|parte"),
        (PartType::Refrao, r"refrao|coro|chorus"),
        (PartType::Ponte, r"ponte|bridge"),
        (PartType::Final, r"final|finalizacao|fim|outro|ending"),
        (PartType::Interludio, r"interludio|interlude|solo|instrumental"),
    ];
    table
        .into_iter()
        .map(|(kind, names)| {
            let pattern = format!(r"^(?:{})(?:\s*(?:\d+\s*x?|x\s*\d+))?$", names);
            (kind, Regex::new(&pattern).expect("section pattern"))
        })
        .collect()
});

const OPENERS: &[char] = &['[', '('];
const SEPARATORS: &[char] = &[']', ')', ':', '-', '\u{2013}', '\u{2014}'];

/// A recognized heading line
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub kind: PartType,
    /// Label as written, without brackets
    pub title: String,
    /// Text after the separator, trimmed; empty when nothing follows
    pub rest: String,
}

/// Lowercase and strip Portuguese diacritics.
pub fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

fn match_section(label: &str) -> Option<PartType> {
    let folded = fold(label.trim());
    if folded.is_empty() {
        return None;
    }
    SECTION_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&folded))
        .map(|(kind, _)| *kind)
}

/// Detect a section heading.
///
/// Leading `[`/`(` are removed, then each separator position (`]`, `)`, `:`,
/// `-`, en dash, em dash, end of line) is tried in order until the text before
/// it names a known section. Trying every separator lets hyphenated names
/// like "pré-refrão" match.
///
/// # Examples
/// ```
/// use cifra::section::{detect_heading, PartType};
///
/// let h = detect_heading("INTRO] D A").unwrap();
/// assert_eq!(h.kind, PartType::Intro);
/// assert_eq!(h.title, "INTRO");
/// assert_eq!(h.rest, "D A");
///
/// assert!(detect_heading("Ele é exaltado").is_none());
/// ```
pub fn detect_heading(line: &str) -> Option<Heading> {
    let stripped = line.trim().trim_start_matches(OPENERS).trim_start();
    if stripped.is_empty() {
        return None;
    }

    let cuts = stripped
        .char_indices()
        .filter(|(_, c)| SEPARATORS.contains(c))
        .map(|(i, c)| (i, i + c.len_utf8()))
        .chain(std::iter::once((stripped.len(), stripped.len())));

    for (label_end, rest_start) in cuts {
        let label = stripped[..label_end].trim();
        if let Some(kind) = match_section(label) {
            let rest = stripped[rest_start..]
                .trim_start_matches(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
                .trim_end();
            return Some(Heading {
                kind,
                title: label.to_string(),
                rest: rest.to_string(),
            });
        }
    }

    None
}
