//! Song storage seam
//!
//! The parser and transposer never touch storage. Callers that keep songs
//! inject a [`SongRepository`]; [`InMemorySongRepository`] backs tests and the
//! command-line tool.

use log::warn;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::CifraError;
use crate::import::ImportedSong;

/// Identifier handed out by a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SongId(pub u64);

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage for imported songs
pub trait SongRepository: Send + Sync {
    fn get(&self, id: SongId) -> Option<ImportedSong>;

    /// Store a new song and return its id.
    fn save(&self, song: ImportedSong) -> SongId;

    /// Replace an existing song.
    fn update(&self, id: SongId, song: ImportedSong) -> Result<(), CifraError>;

    /// Ids of every stored song, ascending.
    fn list(&self) -> Vec<SongId>;

    /// Songs whose search text contains every word of `query`.
    fn search(&self, query: &str) -> Vec<SongId> {
        let words: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        self.list()
            .into_iter()
            .filter(|id| {
                self.get(*id).is_some_and(|song| {
                    words.iter().all(|w| song.search_text.contains(w.as_str()))
                })
            })
            .collect()
    }
}

#[derive(Default)]
struct Store {
    next_id: u64,
    songs: BTreeMap<SongId, ImportedSong>,
}

/// Process-local repository guarded by a read-write lock
#[derive(Default)]
pub struct InMemorySongRepository {
    store: RwLock<Store>,
}

impl InMemorySongRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SongRepository for InMemorySongRepository {
    fn get(&self, id: SongId) -> Option<ImportedSong> {
        self.store.read().songs.get(&id).cloned()
    }

    fn save(&self, song: ImportedSong) -> SongId {
        let mut store = self.store.write();
        store.next_id += 1;
        let id = SongId(store.next_id);
        store.songs.insert(id, song);
        id
    }

    fn update(&self, id: SongId, song: ImportedSong) -> Result<(), CifraError> {
        let mut store = self.store.write();
        match store.songs.get_mut(&id) {
            Some(slot) => {
                *slot = song;
                Ok(())
            }
            None => {
                warn!("update for unknown song {}", id);
                Err(CifraError::SongNotFound(id))
            }
        }
    }

    fn list(&self) -> Vec<SongId> {
        self.store.read().songs.keys().copied().collect()
    }
}
