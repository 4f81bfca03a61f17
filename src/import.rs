//! # Song Import
//!
//! Entry point used when a user pastes a songsheet. Besides the chart itself
//! the raw text may open with a YAML front-matter block:
//!
//! ```text
//! ---
//! title: Ele é exaltado
//! artist: Ministério
//! key: D
//! tags: [louvor, adoração]
//! ---
//! D       A
//! Ele é exaltado
//! ```
//!
//! Values passed in [`ImportOptions`] take precedence over the front matter.
//! The imported song carries the parsed [`Document`], the flat lowercase
//! search string and the chord vocabulary used for indexing.

use serde::{Deserialize, Serialize};

use crate::ast::Document;
use crate::chord::ChordSymbol;
use crate::error::CifraError;
use crate::parser::parse;
use crate::transpose::parse_key;

/// Front matter as written
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub key: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Caller-supplied import options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportOptions {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub key: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Resolved song metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SongMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    /// Given explicitly, or inferred from the first chord
    pub key: Option<String>,
    pub tags: Vec<String>,
}

/// Everything the storage collaborator persists for one song
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedSong {
    pub metadata: SongMetadata,
    pub document: Document,
    pub search_text: String,
    pub chords: Vec<String>,
}

/// Split a leading `---` front-matter block from the chart.
///
/// Only a block that opens on the first non-blank line counts, so `---`
/// separators inside a chart are left alone. Returns (metadata, chart).
pub(crate) fn extract_front_matter(source: &str) -> (Option<String>, String) {
    let lines: Vec<&str> = source.lines().collect();

    let start = match lines.iter().position(|l| !l.trim().is_empty()) {
        Some(i) if lines[i].trim() == "---" => i,
        _ => return (None, source.to_string()),
    };

    match lines[start + 1..].iter().position(|l| l.trim() == "---") {
        Some(offset) => {
            let end = start + 1 + offset;
            let metadata = lines[start + 1..end].join("\n");
            let chart = lines[end + 1..].join("\n");
            (Some(metadata), chart)
        }
        None => (None, source.to_string()),
    }
}

fn parse_front_matter(content: &str) -> Result<RawMetadata, CifraError> {
    if content.trim().is_empty() {
        return Ok(RawMetadata::default());
    }
    serde_yaml::from_str(content).map_err(|e| CifraError::MetadataError(e.to_string()))
}

fn validate_key(key: String) -> Result<String, CifraError> {
    let key = key.trim().to_string();
    match parse_key(&key) {
        Some(_) => Ok(key),
        None => Err(CifraError::KeyError(key)),
    }
}

/// Key suggested by the first chord: its root, plus `m` when it is minor.
///
/// # Examples
/// ```
/// let doc = cifra::parse("F#m7   D\nletra da canção");
/// assert_eq!(cifra::import::infer_key(&doc), Some("F#m".to_string()));
/// ```
pub fn infer_key(document: &Document) -> Option<String> {
    document.chords().find_map(|token| {
        let symbol = ChordSymbol::parse(&token.chord)?;
        let suffix = if symbol.is_minor() { "m" } else { "" };
        Some(format!("{}{}", symbol.root, suffix))
    })
}

/// Lowercase title, artist and every non-empty lyric, whitespace-joined in
/// document order.
pub fn search_text(title: Option<&str>, artist: Option<&str>, document: &Document) -> String {
    title
        .into_iter()
        .chain(artist)
        .chain(document.lines().map(|line| line.lyric.as_str()))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Import a pasted songsheet.
///
/// Fails only on malformed front matter or a key that is not a note.
///
/// # Examples
/// ```
/// use cifra::{import_song, ImportOptions};
///
/// let options = ImportOptions {
///     title: Some("Exaltado".to_string()),
///     ..Default::default()
/// };
/// let song = import_song("D       A\nEle é exaltado", &options)?;
///
/// assert_eq!(song.search_text, "exaltado ele é exaltado");
/// assert_eq!(song.chords, vec!["D", "A"]);
/// assert_eq!(song.metadata.key.as_deref(), Some("D"));
/// # Ok::<(), cifra::CifraError>(())
/// ```
pub fn import_song(raw: &str, options: &ImportOptions) -> Result<ImportedSong, CifraError> {
    let (front_matter, chart) = extract_front_matter(raw);
    let raw_metadata = match front_matter {
        Some(content) => parse_front_matter(&content)?,
        None => RawMetadata::default(),
    };

    let document = parse(&chart);

    let title = options.title.clone().or(raw_metadata.title);
    let artist = options.artist.clone().or(raw_metadata.artist);
    let key = match options.key.clone().or(raw_metadata.key) {
        Some(key) => Some(validate_key(key)?),
        None => infer_key(&document),
    };
    let tags = if options.tags.is_empty() {
        raw_metadata.tags
    } else {
        options.tags.clone()
    };

    let search_text = search_text(title.as_deref(), artist.as_deref(), &document);
    let chords = document.chord_vocabulary();
    log::debug!(
        "imported {:?}: {} parts, {} distinct chords",
        title,
        document.parts.len(),
        chords.len()
    );

    Ok(ImportedSong {
        metadata: SongMetadata {
            title,
            artist,
            key,
            tags,
        },
        document,
        search_text,
        chords,
    })
}
