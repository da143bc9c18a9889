//! End-to-end runs over the whole pipeline: raw text → canonical form →
//! engine → playlist.

use matcher::{MatchEngine, StaticCatalog, TrackCandidate};

fn candidate(title: &str, artist: &str, album: &str, reference: &str) -> TrackCandidate {
    TrackCandidate {
        title: title.into(),
        artist: artist.into(),
        album: album.into(),
        reference: reference.into(),
    }
}

fn title_only_catalog(titles: &[&str]) -> StaticCatalog {
    StaticCatalog::from_candidates(
        titles
            .iter()
            .map(|t| candidate(t, "various artists", "various", &format!("ref:{t}"))),
    )
}

/// Strips bracket annotations and commas from a playlist's track cells and
/// joins them with single spaces, for comparison against canonical text.
fn reconstruct(tracks: &[String]) -> String {
    let flattened = tracks.join(" ");
    let without_brackets: String = flattened
        .chars()
        .filter(|&ch| !matches!(ch, '[' | ']' | ','))
        .collect();
    without_brackets.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn fitzgerald_line_yields_exactly_three_rows_in_order() {
    let catalog = StaticCatalog::from_candidates([
        candidate("So We Beat On", "The Gatsbys", "West Egg", "ref:beat-on"),
        candidate(
            "Boats Against the Current",
            "Eric Carmen",
            "Boats Against the Current",
            "ref:boats",
        ),
        candidate(
            "Borne Back Ceaselessly Into the Past",
            "The Narrators",
            "Chapter Nine",
            "ref:borne-back",
        ),
    ]);
    let engine = MatchEngine::new(catalog);

    let run = engine
        .run("So we beat on, boats against the current, borne back ceaselessly into the past.")
        .expect("match run");
    let playlist = run.playlist();

    assert_eq!(playlist.len(), 3);
    assert_eq!(playlist.entries[0].track, "so we beat on");
    assert_eq!(playlist.entries[1].track, "boats against the current");
    assert_eq!(
        playlist.entries[2].track,
        "borne back ceaselessly into the past"
    );
    assert!(playlist.entries.iter().all(|e| !e.track.contains('[')));
    assert_eq!(
        playlist.references,
        vec!["ref:beat-on", "ref:boats", "ref:borne-back"]
    );

    // Reinserting the boundary commas reproduces the canonical input
    // (the trailing period canonicalizes away).
    let tracks: Vec<String> = playlist.entries.iter().map(|e| e.track.clone()).collect();
    assert_eq!(
        tracks.join(", "),
        "so we beat on, boats against the current, borne back ceaselessly into the past"
    );
}

#[test]
fn round_trip_when_every_word_is_a_title() {
    let poem = "mother why is the river laughing";
    let catalog = title_only_catalog(&["mother", "why", "is", "the", "river", "laughing"]);
    let engine = MatchEngine::new(catalog);

    let run = engine.run(poem).expect("match run");
    let playlist = run.playlist();

    let tracks: Vec<String> = playlist.entries.iter().map(|e| e.track.clone()).collect();
    assert_eq!(reconstruct(&tracks), poem);
    assert!(run.records.iter().all(|r| r.unmatched_prefix.is_none()
        && r.unmatched_suffix.is_none()));
}

#[test]
fn no_word_lost_with_partial_catalog() {
    // Some phrases match, some words do not; every canonical word must
    // still appear exactly once in reading order across the track cells.
    let input = "Father, father, wake up your sons! Stop leaning out the window!";
    let catalog = title_only_catalog(&["father", "wake up", "leaning out the window"]);
    let engine = MatchEngine::new(catalog);

    let run = engine.run(input).expect("match run");
    let playlist = run.playlist();
    let tracks: Vec<String> = playlist.entries.iter().map(|e| e.track.clone()).collect();

    assert_eq!(
        reconstruct(&tracks),
        "father father wake up your sons stop leaning out the window"
    );
}

#[test]
fn terminal_unmatched_word_annotates_last_row() {
    let catalog = title_only_catalog(&["borne back"]);
    let engine = MatchEngine::new(catalog);

    let run = engine.run("borne back ceaselessly").expect("match run");
    let playlist = run.playlist();

    assert_eq!(playlist.len(), 1);
    assert_eq!(playlist.entries[0].track, "borne back [ceaselessly]");
    assert_eq!(run.unresolved, None);
}

#[test]
fn curly_apostrophes_match_straight_catalog_titles() {
    let catalog = title_only_catalog(&["if i can't", "let it go"]);
    let engine = MatchEngine::new(catalog);

    let run = engine
        .run("If I can\u{2019}t, let it go.")
        .expect("match run");
    let playlist = run.playlist();

    assert_eq!(playlist.len(), 2);
    assert_eq!(playlist.entries[0].track, "if i can't");
    assert_eq!(playlist.entries[1].track, "let it go");
}

#[test]
fn repeated_identical_phrases_produce_distinct_rows() {
    let catalog = title_only_catalog(&["let it go"]);
    let engine = MatchEngine::new(catalog);

    let run = engine.run("let it go, let it go").expect("match run");
    let playlist = run.playlist();

    assert_eq!(playlist.len(), 2);
    assert_eq!(playlist.entries[0], playlist.entries[1]);
    assert_eq!(playlist.references[0], playlist.references[1]);
}

#[test]
fn match_run_serializes_with_annotations() {
    let catalog = title_only_catalog(&["my stupid heart"]);
    let engine = MatchEngine::new(catalog);

    let run = engine.run("i'm scared my stupid heart").expect("match run");
    let value = serde_json::to_value(&run).expect("serialize run");

    assert_eq!(value["records"][0]["title"], "my stupid heart");
    assert_eq!(value["records"][0]["unmatched_prefix"], "i'm scared");
    assert_eq!(value["unresolved"], serde_json::Value::Null);
}
