//! Observability hook for the matching engine.
//!
//! Install an [`EngineMetrics`] implementation via [`set_engine_metrics`]
//! once during startup; every run through the engine then reports to the
//! same recorder. The library installs nothing by itself.

use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Per-run metrics sink.
pub trait EngineMetrics: Send + Sync {
    /// Called once at the end of a successful run.
    ///
    /// `lookups` counts every shrink-step service call, `matched` the
    /// resolved records, `unmatched_words` the words that found no track.
    fn record_run(&self, lookups: usize, matched: usize, unmatched_words: usize, latency: Duration);
}

static RECORDER: OnceCell<Arc<dyn EngineMetrics>> = OnceCell::new();

/// Installs the process-wide metrics recorder. Returns `false` if one was
/// already installed; the first installation wins.
pub fn set_engine_metrics(recorder: Arc<dyn EngineMetrics>) -> bool {
    RECORDER.set(recorder).is_ok()
}

pub(crate) fn metrics_recorder() -> Option<&'static Arc<dyn EngineMetrics>> {
    RECORDER.get()
}
