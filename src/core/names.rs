//! Alias-set parsing and matching.
//!
//! An alias string such as `"-f, --file"` names one command or option by
//! several interchangeable tokens. Matching is exact and case-sensitive;
//! there is no prefix or abbreviation matching.

use std::fmt;

use crate::constants::NAME_SEPARATOR;

/// The distinct tokens of one alias string, plus the string itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSet {
    raw: String,
    tokens: Vec<String>,
}

impl NameSet {
    /// Splits `raw` on commas and trims leading spaces from each token.
    ///
    /// Empty tokens are dropped and duplicates are kept once.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut tokens: Vec<String> = Vec::new();
        for token in raw.split(NAME_SEPARATOR) {
            let token = token.trim_start_matches(' ');
            if token.is_empty() || tokens.iter().any(|t| t == token) {
                continue;
            }
            tokens.push(token.to_string());
        }

        Self {
            raw: raw.to_string(),
            tokens,
        }
    }

    /// True if `token` is one of the aliases.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// The alias string as declared.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Aliases in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// First alias, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Number of distinct aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the alias string held no usable token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for NameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for NameSet {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
