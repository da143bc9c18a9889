use crate::error::NormalizeError;
use crate::fold::fold_ascii;
use crate::text::CanonicalText;

/// Main entry point. Normalizes raw poem text into its canonical comparable
/// form.
///
/// The transformations run in a fixed order; later steps assume the
/// canonicalization done by earlier ones:
///
/// 1. Lowercase.
/// 2. Collapse doubled straight quotes (`''`) into one double quote, strip
///    all double quotes (straight and curly), and straighten curly
///    apostrophes.
/// 3. Replace `/` with a space.
/// 4. Replace a literal ellipsis (`...`) with a space.
/// 5. Canonicalize every sentence delimiter (`, . ? ! ; :`) to a comma.
///    Downstream only needs "an idea boundary exists here", so one symbol
///    covers them all.
/// 6. Strip a trailing comma, collapse whitespace runs to single spaces,
///    strip a trailing space.
/// 7. Fold to 7-bit ASCII (see [`fold_ascii`]).
///
/// A final trim enforces the [`CanonicalText`] edge invariants for inputs
/// where the single-pass strips of step 6 leave a straggler (e.g. `"abc, "`).
pub fn normalize(raw: &str) -> Result<CanonicalText, NormalizeError> {
    let text = raw.to_lowercase();

    // Quote glyphs. Doubled straight quotes are a typewriter-style double
    // quote; everything double-quote-like is stripped, apostrophes survive
    // as straight ASCII.
    let text = text.replace("''", "\"");
    let mut text: String = text
        .chars()
        .filter(|&ch| !matches!(ch, '"' | '\u{201c}' | '\u{201d}'))
        .map(|ch| match ch {
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect();

    text = text.replace('/', " ");
    text = text.replace("...", " ");
    text = text.replace([',', '.', '?', '!', ';', ':'], ",");

    if text.ends_with(',') {
        text.pop();
    }
    let mut text: String = text
        .chars()
        .map(|ch| if ch.is_whitespace() { ' ' } else { ch })
        .collect();
    while text.contains("  ") {
        text = text.replace("  ", " ");
    }
    if text.ends_with(' ') {
        text.pop();
    }

    let mut text = fold_ascii(&text);

    // Edge invariants: the fold can expose new edge whitespace (a dropped
    // emoji between spaces) and step 6 strips at most one trailing comma.
    while text.ends_with(' ') || text.ends_with(',') {
        text.pop();
    }
    while text.contains("  ") {
        text = text.replace("  ", " ");
    }
    let text = text.trim_start_matches([' ', ',']).to_string();

    if text.is_empty() {
        return Err(NormalizeError::EmptyInput);
    }
    Ok(CanonicalText::new(text))
}
