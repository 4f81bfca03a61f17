pub mod api;
pub mod ast;
pub mod chord;
pub mod classify;
pub mod error;
pub mod import;
pub mod overlay;
pub mod parser;
pub mod pitch;
pub mod repository;
pub mod section;
pub mod transpose;

pub use api::*;
pub use ast::*;
pub use error::*;
pub use import::{import_song, ImportOptions, ImportedSong, SongMetadata};
pub use overlay::{render_chord_line, render_document, render_line, RenderOptions};
pub use parser::parse;
pub use pitch::Spelling;
pub use repository::{InMemorySongRepository, SongId, SongRepository};
pub use section::PartType;
pub use transpose::{transpose_chord, transpose_chord_tokens, transpose_document, transpose_to_key};
