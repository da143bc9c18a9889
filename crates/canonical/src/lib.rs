//! Trackpoem canonical text layer.
//!
//! This crate normalizes raw poem text into a deterministic, comparable form.
//! The matching layer relies on this for exact phrase equality against track
//! titles.
//!
//! ## What we do
//!
//! - Lowercasing and quote/apostrophe glyph cleanup
//! - Sentence delimiter canonicalization (everything becomes a comma)
//! - Whitespace normalization (collapses to single spaces)
//! - A documented fold to 7-bit ASCII
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Give us the same text,
//! you get the same result on any machine.
//!
//! ## Invariants worth knowing
//!
//! - [`CanonicalText`] contains only lowercase ASCII, single spaces, and
//!   commas as the sole sentence punctuation
//! - No leading or trailing whitespace or punctuation
//! - Created once per run and never mutated; matching only reads and slices
//! - Normalizing already-canonical text is a no-op (idempotence)
//!
//! Bottom line: same input = same canonical text forever.

mod error;
mod fold;
mod pipeline;
mod text;

pub use crate::error::NormalizeError;
pub use crate::fold::fold_ascii;
pub use crate::pipeline::normalize;
pub use crate::text::CanonicalText;
