//! Integration tests for the cifra engine
//!
//! Full pipeline from pasted songsheet text to document, transposed view and
//! aligned text.

use cifra::{
    import_song, parse, render_chord_line, render_document, transpose_chord, transpose_chord_tokens,
    ChordToken, ImportOptions, InMemorySongRepository, Line, PartType, RenderOptions,
    SongRepository, Spelling,
};

const SONG: &str = r#"Intro: G  D  Em  C

G              D
Grande é o Senhor e mui digno
Em             C
de ser louvado na cidade

[Refrão]
G       D/F#      Em
Santo, santo, santo
C          D
Deus poderoso
    G
"#;

#[test]
fn test_full_song_structure() {
    let doc = parse(SONG);
    let kinds: Vec<PartType> = doc.parts.iter().map(|p| p.kind).collect();
    assert_eq!(kinds, vec![PartType::Geral, PartType::Intro, PartType::Refrao]);
    assert!(doc.parts[0].lines.is_empty());

    let intro = &doc.parts[1];
    assert_eq!(intro.title.as_deref(), Some("Intro"));
    assert_eq!(
        intro.lines[0],
        Line::instrumental(vec![
            ChordToken::new("G", 0),
            ChordToken::new("D", 3),
            ChordToken::new("Em", 6),
            ChordToken::new("C", 10),
        ])
    );
    assert_eq!(intro.lines[1].lyric, "Grande é o Senhor e mui digno");
    assert_eq!(
        intro.lines[1].chords,
        vec![ChordToken::new("G", 0), ChordToken::new("D", 15)]
    );
    assert_eq!(intro.lines[2].lyric, "de ser louvado na cidade");
    assert_eq!(intro.lines.len(), 3);

    let refrao = &doc.parts[2];
    assert_eq!(refrao.lines.len(), 3);
    assert_eq!(
        refrao.lines[0].chords,
        vec![
            ChordToken::new("G", 0),
            ChordToken::new("D/F#", 8),
            ChordToken::new("Em", 18),
        ]
    );
    // Trailing lone chord with nothing under it keeps its raw column
    assert_eq!(refrao.lines[2], Line::instrumental(vec![ChordToken::new("G", 4)]));
}

#[test]
fn test_overlay_matches_source_alignment() {
    let doc = parse(SONG);
    let line = &doc.parts[1].lines[1];
    let overlay = render_chord_line(&line.lyric, &line.chords);
    assert_eq!(overlay.trim_end(), "G              D");
    assert_eq!(overlay.chars().count(), line.lyric.chars().count());
}

#[test]
fn test_transposed_render() {
    let doc = parse(SONG);
    let options = RenderOptions {
        semitones: 2,
        spelling: Spelling::Sharp,
        headings: true,
    };
    let text = render_document(&doc, &options);
    let expected = "[Intro]
A  E  F#m D
A              E
Grande é o Senhor e mui digno
F#m            D
de ser louvado na cidade

[Refrão]
A       E/G#      F#m
Santo, santo, santo
D          E
Deus poderoso
    A";
    assert_eq!(text, expected);
}

#[test]
fn test_transpose_never_mutates_document() {
    let doc = parse(SONG);
    let before = doc.clone();
    let _ = render_document(
        &doc,
        &RenderOptions {
            semitones: 5,
            ..Default::default()
        },
    );
    assert_eq!(doc, before);
}

#[test]
fn test_pass_through_identity_and_plain_lyric() {
    assert_eq!(transpose_chord("H7", 2, Spelling::Sharp), "H7");

    let tokens = vec![ChordToken::new("Bb", 3), ChordToken::new("???", 0)];
    assert_eq!(transpose_chord_tokens(&tokens, 0, Spelling::Sharp), tokens);

    let doc = parse("Só uma linha qualquer");
    assert_eq!(doc.parts[0].lines, vec![Line::lyric("Só uma linha qualquer")]);
}

#[test]
fn test_import_and_store() {
    let raw = format!("---\ntitle: Grande é o Senhor\ntags: [louvor]\n---\n{}", SONG);
    let song = import_song(&raw, &ImportOptions::default()).unwrap();

    assert_eq!(song.metadata.key.as_deref(), Some("G"));
    assert_eq!(song.chords, vec!["G", "D", "Em", "C", "D/F#"]);
    assert!(song.search_text.starts_with("grande é o senhor grande é o senhor e mui digno"));

    let repo = InMemorySongRepository::new();
    let id = repo.save(song.clone());
    assert_eq!(repo.get(id), Some(song));
    assert_eq!(repo.search("poderoso"), vec![id]);
}

#[test]
fn test_json_round_trip() {
    let song = import_song(SONG, &ImportOptions::default()).unwrap();
    let json = serde_json::to_string(&song.document).unwrap();
    assert!(json.contains(r#""type":"REFRAO""#));
    let back: cifra::Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, song.document);
}
