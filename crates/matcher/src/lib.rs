//! # Trackpoem Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the canonical text layer (`canonical`). It is
//! responsible for turning a poem into an ordered sequence of track
//! references whose titles spell the poem back out: it segments the
//! canonical text into bounded word windows ("bites"), shrinks each bite
//! word-by-word until an external lookup service yields an exact title
//! match, and reassembles matched and unmatched spans into a playlist that
//! preserves the poem's reading order.
//!
//! In a typical deployment you will:
//! - Implement [`LookupService`] over your track search backend (or use
//!   [`StaticCatalog`] for offline catalogs and tests).
//! - Hand raw poem text to [`MatchEngine::run`] and project the resulting
//!   records into a [`Playlist`].
//!
//! ## Core Types
//!
//! - [`LookupService`]: the external search contract — a canonical phrase
//!   in, ordered [`TrackCandidate`]s out.
//! - [`EngineConfig`]: run tuning, currently the bite window size.
//! - [`MatchEngine`]: the segment → shrink → advance state machine.
//! - [`MatchRecord`]: one resolved track, optionally annotated with the
//!   unmatched words around it.
//! - [`MatchRun`]: the ordered records plus any words that matched nothing
//!   at all.
//! - [`Playlist`]: the final track/artist/album table with a parallel
//!   reference list.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{MatchEngine, StaticCatalog, TrackCandidate};
//!
//! let catalog = StaticCatalog::from_candidates([
//!     TrackCandidate {
//!         title: "So We Beat On".into(),
//!         artist: "The Gatsbys".into(),
//!         album: "West Egg".into(),
//!         reference: "https://open.spotify.com/track/aaa".into(),
//!     },
//!     TrackCandidate {
//!         title: "Boats Against the Current".into(),
//!         artist: "Eric Carmen".into(),
//!         album: "Boats Against the Current".into(),
//!         reference: "https://open.spotify.com/track/bbb".into(),
//!     },
//! ]);
//!
//! let engine = MatchEngine::new(catalog);
//! let run = engine.run("So we beat on, boats against the current.").expect("match run");
//! let playlist = run.playlist();
//!
//! assert_eq!(playlist.entries[0].track, "so we beat on");
//! assert_eq!(playlist.entries[1].track, "boats against the current");
//! assert_eq!(playlist.references.len(), 2);
//! ```
//!
//! ## Failure semantics
//!
//! "No exact title match for this bite" is routine and handled by
//! shrinking; everything else — transport failures, malformed responses,
//! timeouts — is fatal to the run and propagates unchanged. A service error
//! is never folded into "unmatched word".
//!
//! ## Observability
//!
//! Install an [`EngineMetrics`] implementation via [`set_engine_metrics`]
//! to record per-run lookup counts and latency. This is typically done once
//! during startup so all runs share the same metrics backend. The engine
//! also emits `tracing` events: `debug!` per resolved bite and `trace!` per
//! shrink-step query.

pub mod bite;
pub mod engine;
pub mod lookup;
pub mod metrics;
pub mod playlist;
pub mod types;

pub use crate::bite::{next_bite, Bite, Boundary};
pub use crate::engine::MatchEngine;
pub use crate::lookup::{LookupError, LookupService, StaticCatalog, TrackCandidate};
pub use crate::metrics::{set_engine_metrics, EngineMetrics};
pub use crate::playlist::{assemble, Playlist, PlaylistEntry};
pub use crate::types::{CancelToken, EngineConfig, MatchError, MatchRecord, MatchRun};
