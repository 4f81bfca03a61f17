//! # Chart Assembler
//!
//! Turns pasted "chords above lyrics" text into a [`Document`].
//!
//! ## Algorithm
//! Lines are visited once with one line of lookahead:
//!
//! 1. **Heading** (`[Refrão]`, `Intro: D A`): open a new part. Chords trailing
//!    the heading become an instrumental line of that part.
//! 2. **Chord line followed by a lyric line**: the pair becomes one [`Line`].
//!    Chord columns are clipped to the lyric's length so the overlay never
//!    runs past the sung text. Both lines are consumed.
//! 3. **Chord line on its own**: an instrumental line, columns kept as written.
//! 4. **Any other non-blank line**: a plain lyric with no chords.
//! 5. **Blank line**: dropped.
//!
//! ## Example
//! ```rust
//! use cifra::{parse, ChordToken, PartType};
//!
//! let doc = parse("D       A\nEle é exaltado");
//! let line = &doc.parts[0].lines[0];
//!
//! assert_eq!(doc.parts[0].kind, PartType::Geral);
//! assert_eq!(line.lyric, "Ele é exaltado");
//! assert_eq!(line.chords, vec![ChordToken::new("D", 0), ChordToken::new("A", 8)]);
//! ```

use crate::ast::{dedup_tokens, ChordToken, Document, Line, Part};
use crate::chord::is_chord_token;
use crate::classify::{classify, LineKind};
use crate::section::detect_heading;

/// Chord tokens of a line, positioned at the char column where each starts.
///
/// With `clip_to = Some(n)`, columns past `n` are pulled back to `n`.
/// Non-chord words are skipped and duplicate `(pos, chord)` pairs collapse.
///
/// # Examples
/// ```
/// use cifra::parser::extract_chords;
/// use cifra::ChordToken;
///
/// let tokens = extract_chords("G      D        Em", Some(10));
/// assert_eq!(
///     tokens,
///     vec![ChordToken::new("G", 0), ChordToken::new("D", 7), ChordToken::new("Em", 10)]
/// );
/// ```
pub fn extract_chords(line: &str, clip_to: Option<usize>) -> Vec<ChordToken> {
    let mut tokens = Vec::new();
    let mut column = 0;
    let mut start: Option<(usize, usize)> = None; // (byte, column)

    let push = |from: usize, to: usize, col: usize, tokens: &mut Vec<ChordToken>| {
        let word = &line[from..to];
        if is_chord_token(word) {
            let pos = match clip_to {
                Some(limit) => col.min(limit),
                None => col,
            };
            tokens.push(ChordToken::new(word, pos));
        }
    };

    for (byte, c) in line.char_indices() {
        if c.is_whitespace() {
            if let Some((from, col)) = start.take() {
                push(from, byte, col, &mut tokens);
            }
        } else if start.is_none() {
            start = Some((byte, column));
        }
        column += 1;
    }
    if let Some((from, col)) = start {
        push(from, line.len(), col, &mut tokens);
    }

    dedup_tokens(tokens)
}

/// Parse a chord chart into a [`Document`]. Never fails; text that is not
/// recognized as chords is kept as lyric.
pub fn parse(source: &str) -> Document {
    let lines: Vec<&str> = source.lines().map(|l| l.trim_end_matches('\r')).collect();
    let mut parts = Vec::new();
    let mut current = Part::default();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if let Some(heading) = detect_heading(line) {
            log::debug!("line {}: opening {:?} part {:?}", i + 1, heading.kind, heading.title);
            let mut part = Part::new(heading.kind, Some(heading.title));
            if classify(&heading.rest).carries_chords() {
                part.lines
                    .push(Line::instrumental(extract_chords(&heading.rest, None)));
            }
            parts.push(std::mem::replace(&mut current, part));
            i += 1;
            continue;
        }

        let kind = classify(line);

        if kind.carries_chords() {
            let next = lines.get(i + 1).copied();
            match next.filter(|n| classify(n) == LineKind::Lyric) {
                Some(lyric) => {
                    let limit = lyric.chars().count();
                    log::debug!("line {}: chords paired with lyric {:?}", i + 1, lyric);
                    current.lines.push(Line {
                        lyric: lyric.to_string(),
                        chords: extract_chords(line, Some(limit)),
                    });
                    i += 2;
                }
                None => {
                    current
                        .lines
                        .push(Line::instrumental(extract_chords(line, None)));
                    i += 1;
                }
            }
            continue;
        }

        if kind != LineKind::Blank {
            current.lines.push(Line::lyric(line));
        }
        i += 1;
    }

    parts.push(current);
    Document { parts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::PartType;

    #[test]
    fn test_pairs_chords_with_lyric() {
        let doc = parse("D       A\nEle é exaltado");
        assert_eq!(doc.parts.len(), 1);
        assert_eq!(
            doc.parts[0].lines,
            vec![Line {
                lyric: "Ele é exaltado".to_string(),
                chords: vec![ChordToken::new("D", 0), ChordToken::new("A", 8)],
            }]
        );
    }

    #[test]
    fn test_heading_with_inline_chords() {
        let doc = parse("INTRO] D A\nletra aqui");
        assert_eq!(doc.parts.len(), 2);
        let intro = &doc.parts[1];
        assert_eq!(intro.kind, PartType::Intro);
        assert_eq!(intro.title.as_deref(), Some("INTRO"));
        assert_eq!(
            intro.lines,
            vec![
                Line::instrumental(vec![ChordToken::new("D", 0), ChordToken::new("A", 2)]),
                Line::lyric("letra aqui"),
            ]
        );
    }

    #[test]
    fn test_heading_followed_by_pair() {
        let doc = parse("[Intro] G D\nG    D\nletra aqui");
        let intro = &doc.parts[1];
        assert_eq!(intro.lines.len(), 2);
        assert_eq!(intro.lines[1].lyric, "letra aqui");
        assert_eq!(
            intro.lines[1].chords,
            vec![ChordToken::new("G", 0), ChordToken::new("D", 5)]
        );
    }

    #[test]
    fn test_heading_without_chords() {
        let doc = parse("[Refrão]\nSanto, santo");
        assert_eq!(doc.parts[1].kind, PartType::Refrao);
        assert_eq!(doc.parts[1].lines, vec![Line::lyric("Santo, santo")]);
        // Empty GERAL part is still there
        assert!(doc.parts[0].lines.is_empty());
    }

    #[test]
    fn test_heading_with_text_rest_adds_no_line() {
        let doc = parse("Refrão: (2x)");
        assert_eq!(doc.parts.len(), 2);
        assert!(doc.parts[1].lines.is_empty());
    }

    #[test]
    fn test_clipping_only_when_paired() {
        let doc = parse("C          G          Am\nPaz\n\nC          G          Am");
        let lines = &doc.parts[0].lines;
        assert_eq!(
            lines[0].chords,
            vec![ChordToken::new("C", 0), ChordToken::new("G", 3), ChordToken::new("Am", 3)]
        );
        assert_eq!(lines[1].lyric, "");
        assert_eq!(
            lines[1].chords,
            vec![ChordToken::new("C", 0), ChordToken::new("G", 11), ChordToken::new("Am", 22)]
        );
    }

    #[test]
    fn test_dedup_after_clipping() {
        // Two identical chords clipped onto the same column collapse to one
        let doc = parse("C        D        D\nSol");
        assert_eq!(
            doc.parts[0].lines[0].chords,
            vec![ChordToken::new("C", 0), ChordToken::new("D", 3)]
        );
    }

    #[test]
    fn test_plain_lyric_and_blank_lines() {
        let doc = parse("Primeira linha\n\n   \nSegunda linha");
        assert_eq!(
            doc.parts[0].lines,
            vec![Line::lyric("Primeira linha"), Line::lyric("Segunda linha")]
        );
    }

    #[test]
    fn test_consecutive_chord_lines() {
        let doc = parse("G   D\nEm   C\nletra");
        let lines = &doc.parts[0].lines;
        assert_eq!(lines.len(), 2);
        assert!(lines[0].is_instrumental());
        assert_eq!(lines[1].lyric, "letra");
        assert_eq!(lines[1].chords[0], ChordToken::new("Em", 0));
    }

    #[test]
    fn test_single_chord_line_pairs() {
        let doc = parse("Em\nTu és santo");
        assert_eq!(doc.parts[0].lines[0].chords, vec![ChordToken::new("Em", 0)]);
        assert_eq!(doc.parts[0].lines[0].lyric, "Tu és santo");
    }

    #[test]
    fn test_chord_line_before_heading_is_instrumental() {
        let doc = parse("G   D\n[Refrão]\nletra");
        assert!(doc.parts[0].lines[0].is_instrumental());
        assert_eq!(doc.parts[1].kind, PartType::Refrao);
    }

    #[test]
    fn test_annotated_chord_line_pairs() {
        let doc = parse("Bm        (2x)\nTu és santo");
        assert_eq!(
            doc.parts[0].lines,
            vec![Line {
                lyric: "Tu és santo".to_string(),
                chords: vec![ChordToken::new("Bm", 0)],
            }]
        );
    }

    #[test]
    fn test_chord_line_with_stray_words_is_instrumental() {
        let doc = parse("A       E       tu es");
        assert_eq!(
            doc.parts[0].lines,
            vec![Line::instrumental(vec![ChordToken::new("A", 0), ChordToken::new("E", 8)])]
        );
    }

    #[test]
    fn test_lyric_kept_as_written() {
        // Trailing spaces stay in the lyric and widen the clip limit
        let doc = parse("C      G\nSol   \nletra  ");
        let lines = &doc.parts[0].lines;
        assert_eq!(lines[0].lyric, "Sol   ");
        assert_eq!(lines[0].chords, vec![ChordToken::new("C", 0), ChordToken::new("G", 6)]);
        assert_eq!(lines[1], Line::lyric("letra  "));
    }

    #[test]
    fn test_columns_are_chars_not_bytes() {
        assert_eq!(
            extract_chords("é  D", None),
            vec![ChordToken::new("D", 3)]
        );
    }

    #[test]
    fn test_windows_line_endings() {
        let doc = parse("D       A\r\nEle é exaltado\r\n");
        assert_eq!(doc.parts[0].lines[0].lyric, "Ele é exaltado");
        assert_eq!(doc.parts[0].lines[0].chords[1], ChordToken::new("A", 8));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Document::default());
        assert_eq!(parse("\n\n"), Document::default());
    }
}
