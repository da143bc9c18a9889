use std::fmt;

use serde::{Deserialize, Serialize};

/// The canonical, comparable form of a poem.
///
/// Produced once by [`normalize()`](crate::normalize) and never mutated
/// afterward; matching only reads and slices it. The inner string satisfies:
///
/// - only lowercase 7-bit ASCII
/// - commas are the sole sentence punctuation (all other delimiters were
///   canonicalized to commas)
/// - words are separated by single spaces
/// - no leading or trailing whitespace or punctuation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalText(String);

impl CanonicalText {
    /// Wraps text that already satisfies the invariants above. Crate-private:
    /// the only way to obtain a `CanonicalText` is through the pipeline.
    pub(crate) fn new(text: String) -> Self {
        debug_assert!(!text.is_empty());
        debug_assert!(text.is_ascii());
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes. Since the text is ASCII this is also the length in
    /// characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false by construction; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the words of the canonical text, in order. Punctuation
    /// stays attached to its word (`"on,"`).
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CanonicalText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
