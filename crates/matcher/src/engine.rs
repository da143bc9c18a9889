use std::time::Instant;

use canonical::{normalize, CanonicalText};
use tracing::{debug, trace};

use crate::bite::{next_bite, Boundary};
use crate::lookup::{LookupService, TrackCandidate};
use crate::metrics::metrics_recorder;
use crate::types::{CancelToken, EngineConfig, MatchError, MatchRecord, MatchRun};


/// The matching engine: turns raw poem text into an ordered record list by
/// repeatedly segmenting, shrinking, and advancing over the canonical text.
///
/// Per outer iteration the engine cuts a bite from the unconsumed
/// remainder, queries the lookup service, and drops the trailing word on a
/// miss until either a candidate's normalized title equals the phrase
/// exactly or a single word is left unmatched. Matched phrases become
/// records; unmatched words accumulate and attach to the nearest record as
/// a bracket annotation.
///
/// Strictly synchronous: each lookup call blocks the engine, queries are
/// issued one word-removal at a time in order, and the first successful
/// response wins.
pub struct MatchEngine<S: LookupService> {
    lookup: S,
    config: EngineConfig,
}

impl<S: LookupService> MatchEngine<S> {
    /// Construct an engine with the default configuration.
    pub fn new(lookup: S) -> Self {
        Self {
            lookup,
            config: EngineConfig::default(),
        }
    }

    /// Construct an engine with an explicit, validated configuration.
    pub fn with_config(lookup: S, config: EngineConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { lookup, config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run a full match over `raw_text`.
    pub fn run(&self, raw_text: &str) -> Result<MatchRun, MatchError> {
        self.run_with_cancel(raw_text, &CancelToken::new())
    }

    /// Run a full match, checking `cancel` at the top of every outer
    /// iteration.
    pub fn run_with_cancel(
        &self,
        raw_text: &str,
        cancel: &CancelToken,
    ) -> Result<MatchRun, MatchError> {
        let poem = normalize(raw_text)?;
        let start = Instant::now();
        let mut state = RunState::new(&poem);

        while !state.done() {
            if cancel.is_cancelled() {
                return Err(MatchError::Cancelled);
            }
            self.step(&mut state)?;
        }

        let unresolved = state.attach_trailing_unmatched();
        let latency = start.elapsed();
        debug!(
            records = state.records.len(),
            lookups = state.lookups,
            unmatched_words = state.unmatched_words,
            ?latency,
            "match run complete"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_run(
                state.lookups,
                state.records.len(),
                state.unmatched_words,
                latency,
            );
        }

        Ok(MatchRun {
            records: state.records,
            unresolved,
        })
    }

    /// One outer iteration: SEGMENTING → SHRINKING → (MATCHED | EXHAUSTED)
    /// → ADVANCING.
    fn step(&self, state: &mut RunState<'_>) -> Result<(), MatchError> {
        let bite = next_bite(state.remainder(), self.config.max_bite_words);

        // SHRINKING: drop the trailing word until the service yields an
        // exact title match or a single word is left.
        let mut phrase = bite.text;
        let hit = loop {
            if phrase.is_empty() {
                break None;
            }
            state.lookups += 1;
            trace!(%phrase, "querying lookup service");
            let candidates = self.lookup.search(&phrase)?;
            if let Some(candidate) = first_exact_title(candidates, &phrase) {
                break Some(candidate);
            }
            match phrase.rfind(' ') {
                Some(cut) => phrase.truncate(cut),
                None => break None,
            }
        };

        match hit {
            Some(candidate) => {
                // MATCHED: the buffered unmatched words ride along as a
                // bracket prefix and the buffer clears.
                debug!(title = %phrase, artist = %candidate.artist, "matched bite");
                let unmatched_prefix = state.take_unmatched();
                state.records.push(MatchRecord {
                    artist: candidate.artist,
                    title: phrase.clone(),
                    album: candidate.album,
                    reference: candidate.reference,
                    unmatched_prefix,
                    unmatched_suffix: None,
                });
            }
            None => {
                // EXHAUSTED: a single word with no track of its own.
                debug!(word = %phrase, "no match for word");
                state.buffer_unmatched(&phrase);
            }
        }

        state.advance(phrase.len(), bite.boundary);
        Ok(())
    }
}

/// First candidate whose normalized title equals the queried phrase. No
/// secondary ranking: service order is the tie-break.
fn first_exact_title(candidates: Vec<TrackCandidate>, phrase: &str) -> Option<TrackCandidate> {
    candidates.into_iter().find(|candidate| {
        normalize(&candidate.title)
            .map(|title| title.as_str() == phrase)
            .unwrap_or(false)
    })
}

/// Mutable per-run state threaded through the engine loop. The canonical
/// text itself is immutable; consumption is a byte offset that only ever
/// advances, so repeated phrases elsewhere in the poem cannot desynchronize
/// the cursor.
struct RunState<'a> {
    poem: &'a CanonicalText,
    consumed: usize,
    unmatched: String,
    unmatched_words: usize,
    lookups: usize,
    records: Vec<MatchRecord>,
}

impl<'a> RunState<'a> {
    fn new(poem: &'a CanonicalText) -> Self {
        Self {
            poem,
            consumed: 0,
            unmatched: String::new(),
            unmatched_words: 0,
            lookups: 0,
            records: Vec::new(),
        }
    }

    fn done(&self) -> bool {
        self.consumed >= self.poem.len()
    }

    fn remainder(&self) -> &'a str {
        &self.poem.as_str()[self.consumed..]
    }

    fn buffer_unmatched(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        if !self.unmatched.is_empty() {
            self.unmatched.push(' ');
        }
        self.unmatched.push_str(word);
        self.unmatched_words += 1;
    }

    fn take_unmatched(&mut self) -> Option<String> {
        if self.unmatched.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.unmatched))
        }
    }

    /// ADVANCING: extend the consumed prefix past the resolved text plus
    /// its separator. The boundary comma is consumed only when it actually
    /// sits right after the resolved text; a comma that belonged to a
    /// later, not-yet-consumed word is left for a future bite.
    fn advance(&mut self, resolved_len: usize, boundary: Option<Boundary>) {
        let mut consumed = self.consumed + resolved_len;
        let rest = &self.poem.as_str()[consumed..];

        if boundary.is_some() && rest.starts_with(',') {
            consumed += 1;
            if self.poem.as_str()[consumed..].starts_with(' ') {
                consumed += 1;
            }
        } else if rest.starts_with(' ') {
            consumed += 1;
        } else if resolved_len == 0 {
            // Degenerate window (leading comma in the remainder); skip one
            // byte so the cursor always makes progress.
            consumed += 1;
        }

        debug_assert!(consumed > self.consumed || self.done());
        self.consumed = consumed.min(self.poem.len());
        trace!(
            consumed = self.consumed,
            total = self.poem.len(),
            "poem progress"
        );
    }

    /// Loop termination: trailing unmatched words have no lookup call left
    /// to attach to, so they become a suffix annotation on the last record.
    /// With no records at all they surface as the run's unresolved words.
    fn attach_trailing_unmatched(&mut self) -> Option<String> {
        let trailing = self.take_unmatched()?;
        match self.records.last_mut() {
            Some(last) => {
                last.unmatched_suffix = Some(trailing);
                None
            }
            None => Some(trailing),
        }
    }
}
