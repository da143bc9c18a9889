//! Spells a poem out of track titles against an offline catalog and prints
//! the resulting playlist table plus its reference list.
//!
//! Run with: `cargo run -p trackpoem-matcher --example playlist_demo`

use matcher::{MatchEngine, StaticCatalog, TrackCandidate};

fn candidate(title: &str, artist: &str, album: &str, id: &str) -> TrackCandidate {
    TrackCandidate {
        title: title.into(),
        artist: artist.into(),
        album: album.into(),
        reference: format!("https://open.spotify.com/track/{id}"),
    }
}

fn main() {
    let poem = "So we beat on, boats against the current, borne back ceaselessly into the past.";

    let catalog = StaticCatalog::from_candidates([
        candidate("So We Beat On", "The Gatsbys", "West Egg", "3kx1aaa"),
        candidate(
            "Boats Against the Current",
            "Eric Carmen",
            "Boats Against the Current",
            "2ql2bbb",
        ),
        candidate(
            "Borne Back Ceaselessly Into the Past",
            "The Narrators",
            "Chapter Nine",
            "7jy3ccc",
        ),
    ]);

    let engine = MatchEngine::new(catalog);
    let run = engine.run(poem).expect("match run succeeds");
    let playlist = run.playlist();

    println!("{:<40} {:<16} {}", "track", "artist", "album");
    for entry in &playlist.entries {
        println!("{:<40} {:<16} {}", entry.track, entry.artist, entry.album);
    }
    println!();
    for reference in &playlist.references {
        println!("{reference}");
    }
}
