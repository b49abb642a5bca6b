//! String canonicalization for distance-based lookup.
//!
//! The engine treats any embedded whitespace as a token boundary, so a
//! canonical form must never contain whitespace. Every [`Normalizer`]
//! implementation is bound by that contract.

/// Maps raw cell text to its canonical form.
///
/// Must be pure and total; the output must contain no whitespace.
pub trait Normalizer {
    fn normalize(&self, raw: &str) -> String;
}

/// Characters deleted (or, for `&`, expanded) by [`DefaultNormalizer`].
pub const DEFAULT_SCREENED_CHARS: &str = "!@#$%^&*()-_=+{}[]:;'\"/|\\?><.,~`";

/// The built-in canonicalization policy:
///
/// 1. lowercase;
/// 2. screened characters are removed, except `&` which becomes the
///    literal token ` and `;
/// 3. the result is split on whitespace, the tokens are sorted
///    lexicographically and concatenated with no separator.
///
/// Step 3 makes the canonical form insensitive to word order and
/// inter-word spacing.
#[derive(Debug, Clone)]
pub struct DefaultNormalizer {
    screened: String,
}

impl DefaultNormalizer {
    pub fn new() -> Self {
        Self {
            screened: DEFAULT_SCREENED_CHARS.to_owned(),
        }
    }

    /// Replaces the screened-character set. `&` is only expanded to
    /// ` and ` while it remains screened.
    pub fn with_screened_chars(screened: impl Into<String>) -> Self {
        Self {
            screened: screened.into(),
        }
    }
}

impl Default for DefaultNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer for DefaultNormalizer {
    fn normalize(&self, raw: &str) -> String {
        let mut substituted = String::with_capacity(raw.len());
        for c in raw.to_lowercase().chars() {
            if self.screened.contains(c) {
                if c == '&' {
                    substituted.push_str(" and ");
                }
            } else {
                substituted.push(c);
            }
        }

        let mut tokens: Vec<&str> = substituted.split_whitespace().collect();
        tokens.sort_unstable();
        tokens.concat()
    }
}
