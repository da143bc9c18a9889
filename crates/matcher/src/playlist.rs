//! Final playlist projection.
//!
//! A pure fold of the engine's ordered records into the external output
//! shape: a track/artist/album table plus a parallel reference list. No
//! filtering and no deduplication; repeated identical tracks stay distinct
//! because the order encodes the poem's left-to-right reading.

use serde::{Deserialize, Serialize};

use crate::types::MatchRecord;

/// One row of the output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Track title, with unmatched words rendered as bracket annotations.
    pub track: String,
    pub artist: String,
    pub album: String,
}

/// The assembled playlist: entries and references share indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub entries: Vec<PlaylistEntry>,
    pub references: Vec<String>,
}

impl Playlist {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Projects records into a [`Playlist`], preserving order exactly.
pub fn assemble(records: &[MatchRecord]) -> Playlist {
    let mut entries = Vec::with_capacity(records.len());
    let mut references = Vec::with_capacity(records.len());

    for record in records {
        entries.push(PlaylistEntry {
            track: record.display_title(),
            artist: record.artist.clone(),
            album: record.album.clone(),
        });
        references.push(record.reference.clone());
    }

    Playlist {
        entries,
        references,
    }
}
