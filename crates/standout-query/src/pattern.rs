//! SQL-style `like` matching with `%` wildcards.
//!
//! A pattern matches the *whole* string, case-sensitively. `%` stands for
//! zero or more arbitrary characters (newlines included); every other
//! character is literal. Regex metacharacters such as `.`, `*` or `(` are
//! escaped before compilation, so `"Al.ce"` matches only the literal text
//! `Al.ce` and never `Alice`.

use regex::Regex;

use crate::error::Result;

/// The multi-character wildcard.
pub const WILDCARD: char = '%';

/// A compiled `like` pattern.
///
/// [`like`] compiles its pattern on every call. Build a `LikePattern` once
/// and reuse it when the same pattern is tested against many records.
///
/// # Example
///
/// ```
/// use standout_query::LikePattern;
///
/// let pattern = LikePattern::new("A%e").unwrap();
/// assert!(pattern.matches("Alice"));
/// assert!(!pattern.matches("Bob"));
/// ```
#[derive(Debug, Clone)]
pub struct LikePattern {
    pattern: String,
    regex: Regex,
}

impl LikePattern {
    /// Compiles a `like` pattern.
    ///
    /// Returns an error if the translated regex fails to compile (for
    /// instance when it exceeds the regex engine's size limit).
    pub fn new(pattern: &str) -> Result<Self> {
        let source = translate(pattern);
        #[cfg(feature = "tracing")]
        tracing::trace!(pattern, regex = %source, "compiling like pattern");
        let regex = Regex::new(&source)?;
        Ok(LikePattern {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Returns `true` if the whole of `text` matches the pattern.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Returns the original pattern text.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

/// Translates a `like` pattern into an anchored regex source string.
fn translate(pattern: &str) -> String {
    let body = pattern
        .split(WILDCARD)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    format!("(?s)^{body}$")
}

/// Returns `true` if `text` matches the `like` pattern.
///
/// ```
/// use standout_query::like;
///
/// assert!(like("Alice", "A%e").unwrap());
/// assert!(!like("Bob", "A%e").unwrap());
/// assert!(like("", "%").unwrap());
/// ```
pub fn like(text: &str, pattern: &str) -> Result<bool> {
    Ok(LikePattern::new(pattern)?.matches(text))
}

/// Exact negation of [`like`]. Compilation errors are returned, not negated.
pub fn not_like(text: &str, pattern: &str) -> Result<bool> {
    like(text, pattern).map(|matched| !matched)
}

/// Method-call form of [`like`] and [`not_like`].
///
/// ```
/// use standout_query::LikeExt;
///
/// let name = String::from("Alice");
/// assert!(name.like("Al%").unwrap());
/// assert!(name.not_like("%bob%").unwrap());
/// ```
pub trait LikeExt {
    /// Returns `true` if `self` matches the `like` pattern.
    fn like(&self, pattern: &str) -> Result<bool>;

    /// Returns `true` if `self` does not match the `like` pattern.
    fn not_like(&self, pattern: &str) -> Result<bool> {
        self.like(pattern).map(|matched| !matched)
    }
}

impl LikeExt for str {
    fn like(&self, pattern: &str) -> Result<bool> {
        like(self, pattern)
    }
}
