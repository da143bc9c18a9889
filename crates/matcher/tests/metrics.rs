//! The metrics recorder is a process-wide global, so it gets its own test
//! binary to keep installation isolated.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use matcher::{set_engine_metrics, EngineMetrics, MatchEngine, StaticCatalog, TrackCandidate};

#[derive(Default)]
struct CapturingMetrics {
    runs: Mutex<Vec<(usize, usize, usize, Duration)>>,
}

impl EngineMetrics for CapturingMetrics {
    fn record_run(
        &self,
        lookups: usize,
        matched: usize,
        unmatched_words: usize,
        latency: Duration,
    ) {
        self.runs
            .lock()
            .expect("runs lock")
            .push((lookups, matched, unmatched_words, latency));
    }
}

#[test]
fn installed_recorder_sees_run_counts() {
    let recorder = Arc::new(CapturingMetrics::default());
    assert!(set_engine_metrics(recorder.clone()));
    // Second installation loses.
    assert!(!set_engine_metrics(Arc::new(CapturingMetrics::default())));

    let catalog = StaticCatalog::from_candidates([TrackCandidate {
        title: "so we beat on".into(),
        artist: "artist".into(),
        album: "album".into(),
        reference: "ref:1".into(),
    }]);
    let engine = MatchEngine::new(catalog);
    let run = engine.run("so we beat on, boats").expect("match run");
    assert_eq!(run.records.len(), 1);

    let runs = recorder.runs.lock().expect("runs lock");
    assert_eq!(runs.len(), 1);
    let (lookups, matched, unmatched_words, _latency) = runs[0];
    // "so we beat on" hits on the first query; "boats" misses its only one.
    assert_eq!(lookups, 2);
    assert_eq!(matched, 1);
    assert_eq!(unmatched_words, 1);
}
