//! Stateless helpers to classify and clean up raw command line tokens.
use crate::constant::*;
use crate::model::{Prefix, TokenClass};

/// Remove the surrounding quotes from a token.
///
/// If the token contains a `"` character anywhere, the first and last characters are dropped.
/// Otherwise the same rule applies to the `'` character.
/// There is no balance checking and no escape processing: `ab"cd` becomes `b"c`.
///
/// ### Example
/// ```
/// # use argbind_core as argbind;
/// use argbind::tokens::strip_quotes;
///
/// assert_eq!(strip_quotes("\"C:\\DevTools\""), "C:\\DevTools");
/// assert_eq!(strip_quotes("'test2'"), "test2");
/// assert_eq!(strip_quotes("plain"), "plain");
/// ```
pub fn strip_quotes(token: &str) -> &str {
    if token.contains(DOUBLE_QUOTE) || token.contains(SINGLE_QUOTE) {
        let mut characters = token.chars();
        characters.next();
        characters.next_back();
        characters.as_str()
    } else {
        token
    }
}

/// Classify a token by its prefix.
///
/// The long form `--` is checked before the short form `-`, so `--x` is never short.
///
/// ### Example
/// ```
/// # use argbind_core as argbind;
/// use argbind::tokens::classify;
/// use argbind::{Prefix, TokenClass};
///
/// assert_eq!(classify("--verbose"), TokenClass::Named(Prefix::Long));
/// assert_eq!(classify("-v"), TokenClass::Named(Prefix::Short));
/// assert_eq!(classify("value"), TokenClass::Positional);
/// ```
pub fn classify(token: &str) -> TokenClass {
    if token.starts_with(LONG_PREFIX) {
        TokenClass::Named(Prefix::Long)
    } else if token.starts_with(SHORT_PREFIX) {
        TokenClass::Named(Prefix::Short)
    } else {
        TokenClass::Positional
    }
}

/// Split a token on its first `=` character.
///
/// Only the first `=` is a separator, so `--key=a=b` splits into `--key` and `a=b`.
pub fn split_key_value(token: &str) -> Option<(&str, &str)> {
    token.split_once(KEY_VALUE_SEPARATOR)
}

pub(crate) fn positional_key(position: usize) -> String {
    format!("{POSITIONAL_PREFIX}{position}")
}
