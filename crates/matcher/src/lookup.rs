//! Lookup service contract and the in-memory catalog.
//!
//! The engine treats track search as an abstract capability: a phrase goes
//! in, ordered candidates come out. Concrete transports (HTTP APIs, local
//! databases) live behind [`LookupService`]; the engine only requires the
//! contract below.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One candidate track returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCandidate {
    /// Track title as the service reports it. Matching compares the
    /// normalized form; the engine does not require pre-lowercased titles.
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Opaque identifier for the track (URI, URL, catalog id).
    pub reference: String,
}

/// Errors surfaced by lookup implementations.
///
/// All of these are fatal to a run: a transport failure must never be
/// folded into "no match", or a transient outage silently turns words into
/// unmatched annotations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("lookup transport failure: {0}")]
    Transport(String),
    #[error("malformed lookup response: {0}")]
    MalformedResponse(String),
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// External track search capability.
///
/// ## Contract
///
/// - Input is a canonical phrase: lowercase ASCII words joined by single
///   spaces.
/// - Output is an ordered candidate sequence; order matters because the
///   engine takes the first exact title match with no secondary ranking.
/// - An empty sequence means "no candidates", not an error.
/// - Calls block until resolved; async transports adapt behind this trait.
pub trait LookupService {
    fn search(&self, phrase: &str) -> Result<Vec<TrackCandidate>, LookupError>;
}

impl<S: LookupService + ?Sized> LookupService for &S {
    fn search(&self, phrase: &str) -> Result<Vec<TrackCandidate>, LookupError> {
        (**self).search(phrase)
    }
}

impl<S: LookupService + ?Sized> LookupService for Box<S> {
    fn search(&self, phrase: &str) -> Result<Vec<TrackCandidate>, LookupError> {
        (**self).search(phrase)
    }
}

impl<S: LookupService + ?Sized> LookupService for Arc<S> {
    fn search(&self, phrase: &str) -> Result<Vec<TrackCandidate>, LookupError> {
        (**self).search(phrase)
    }
}

/// In-memory lookup backend keyed by normalized title.
///
/// Useful for tests, demos, and offline catalogs. Candidates that share a
/// normalized title keep their insertion order, so first-inserted wins the
/// engine's tie-break.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    by_title: HashMap<String, Vec<TrackCandidate>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a candidate under its normalized title. Candidates whose
    /// titles normalize to nothing are unreachable by any query and are
    /// silently ignored.
    pub fn insert(&mut self, candidate: TrackCandidate) {
        if let Ok(key) = canonical::normalize(&candidate.title) {
            self.by_title
                .entry(key.into_string())
                .or_default()
                .push(candidate);
        }
    }

    pub fn from_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = TrackCandidate>,
    {
        let mut catalog = Self::new();
        for candidate in candidates {
            catalog.insert(candidate);
        }
        catalog
    }

    /// Number of distinct normalized titles.
    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }
}

impl LookupService for StaticCatalog {
    fn search(&self, phrase: &str) -> Result<Vec<TrackCandidate>, LookupError> {
        Ok(self.by_title.get(phrase).cloned().unwrap_or_default())
    }
}
