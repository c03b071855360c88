use std::fmt::Display;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercases a text and removes all its diacritical marks.
///
/// "Ações" becomes "acoes". Characters without a decomposition (digits,
/// punctuation, emojis) go through untouched. The case folding happens before
/// the decomposition: some uppercase letters lowercase to a base letter plus a
/// combining mark, which must be stripped as well for the function to be
/// idempotent.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Same as `normalize_text`, for any value that can be displayed.
///
/// Spreadsheet cells are not always strings (numbers, booleans, dates). They
/// are coerced through their textual representation.
pub fn normalize_value<T: Display + ?Sized>(value: &T) -> String {
    normalize_text(&value.to_string())
}

/// Splits a normalized text into its alphanumeric tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect()
}
