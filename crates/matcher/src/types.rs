use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use canonical::NormalizeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lookup::LookupError;

/// Configuration for a match run.
///
/// Serde-friendly and cheap to clone so it can be embedded in higher-level
/// configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of words per bite window. Six is an assumed upper
    /// bound on track title length; larger windows mostly add fruitless
    /// lookups at the long end of the shrink loop.
    #[serde(default = "EngineConfig::default_max_bite_words")]
    pub max_bite_words: usize,
}

impl EngineConfig {
    pub(crate) fn default_max_bite_words() -> usize {
        6
    }

    /// Validate the configuration for a run.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.max_bite_words == 0 {
            return Err(MatchError::InvalidConfig(
                "max_bite_words must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_bite_words: Self::default_max_bite_words(),
        }
    }
}

/// One resolved track entry, in poem reading order.
///
/// Immutable once appended; the list of records is never reordered. The
/// `title` is stored in canonical (lowercase) form so that concatenating
/// titles reproduces the canonical text span-for-span. Artist, album, and
/// reference are carried verbatim from the matched candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub artist: String,
    pub title: String,
    pub album: String,
    /// Opaque track identifier from the lookup candidate.
    pub reference: String,
    /// Words preceding this match that found no track of their own.
    #[serde(default)]
    pub unmatched_prefix: Option<String>,
    /// Trailing unmatched words; only ever set on the final record of a run.
    #[serde(default)]
    pub unmatched_suffix: Option<String>,
}

impl MatchRecord {
    /// The output-facing track cell: the title with any unmatched words
    /// rendered as `[word word]` bracket annotations.
    pub fn display_title(&self) -> String {
        let mut out = String::with_capacity(self.title.len() + 8);
        if let Some(prefix) = &self.unmatched_prefix {
            out.push('[');
            out.push_str(prefix);
            out.push_str("] ");
        }
        out.push_str(&self.title);
        if let Some(suffix) = &self.unmatched_suffix {
            out.push_str(" [");
            out.push_str(suffix);
            out.push(']');
        }
        out
    }
}

/// The result of one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRun {
    /// Resolved records in reading order.
    pub records: Vec<MatchRecord>,
    /// Unmatched words with no record to attach to. `Some` only when the
    /// whole poem matched nothing; words are never silently dropped.
    #[serde(default)]
    pub unresolved: Option<String>,
}

impl MatchRun {
    /// Projects the records into the final playlist shape.
    pub fn playlist(&self) -> crate::playlist::Playlist {
        crate::playlist::assemble(&self.records)
    }
}

/// Caller-supplied cancellation handle.
///
/// Worst-case engine behavior is one lookup per word removal, which is
/// unbounded in poem length; the engine checks this token at the top of
/// every outer iteration. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid engine configuration.
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),
    /// The input reduced to an empty canonical string.
    #[error("normalization error: {0}")]
    Normalize(#[from] NormalizeError),
    /// The lookup service failed; fatal, no partial playlist is valid.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),
    /// The run was cancelled via its [`CancelToken`].
    #[error("match run cancelled")]
    Cancelled,
}
