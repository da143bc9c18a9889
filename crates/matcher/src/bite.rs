//! Bite segmentation.
//!
//! A "bite" is the bounded word window the engine tries to match next: at
//! most `max_words` words taken from the front of the unconsumed remainder,
//! truncated early if an idea boundary (a comma) falls inside the window.
//! Punctuation-aware windows keep the queried phrases linguistically
//! meaningful, which is what makes the greedy shrink loop converge quickly.

use serde::{Deserialize, Serialize};

/// Idea-boundary marker detected inside a bite window.
///
/// The canonical form collapses every sentence delimiter to a comma, so a
/// single variant covers them all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    Comma,
}

/// A candidate phrase cut from the unconsumed remainder.
///
/// Ephemeral: recreated each engine iteration and shrunk word-by-word within
/// it. `text` never carries the boundary comma or a trailing space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bite {
    pub text: String,
    pub boundary: Option<Boundary>,
}

/// Cuts the next bite from `remainder`.
///
/// Pure and deterministic: splits on single spaces, takes at most
/// `max_words` words, and truncates at the first comma inside the window
/// (exclusive), reporting the boundary when it does.
pub fn next_bite(remainder: &str, max_words: usize) -> Bite {
    let mut window = String::new();
    for word in remainder.split(' ').take(max_words) {
        if !window.is_empty() {
            window.push(' ');
        }
        window.push_str(word);
    }

    if let Some(pos) = window.find(',') {
        window.truncate(pos);
        while window.ends_with(' ') {
            window.pop();
        }
        return Bite {
            text: window,
            boundary: Some(Boundary::Comma),
        };
    }

    Bite {
        text: window,
        boundary: None,
    }
}
