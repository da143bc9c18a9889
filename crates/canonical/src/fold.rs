//! Unicode to basic-Latin folding.
//!
//! The matching layer compares phrases byte-for-byte, so the canonical form
//! is restricted to 7-bit ASCII. The folding policy is fixed and documented
//! here rather than left to whatever the platform's encoder happens to do:
//!
//! 1. Apply NFKD decomposition. Accented Latin letters split into a base
//!    letter plus combining marks (`é` → `e` + U+0301); compatibility
//!    characters expand (`ﬁ` → `fi`, fullwidth forms → ASCII).
//! 2. Drop every non-ASCII scalar that remains. This removes the combining
//!    marks, so accented letters transliterate to their base letter, while
//!    emoji, non-Latin scripts, and non-decomposable letters (e.g. `ß`)
//!    are removed outright.

use unicode_normalization::UnicodeNormalization;

/// Folds `text` to 7-bit ASCII under the policy above.
///
/// Deterministic and locale-free; the output contains only ASCII scalars.
pub fn fold_ascii(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}
