// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Separator-delimited token lists for classes and pseudo-classes.
//!
//! Theme rule engines exchange class lists as a single string, e.g.
//! `"button.primary"` for classes or `"hover:focus"` for pseudo-classes.
//! [`TokenList`] keeps the tokens as an ordered set and only produces that
//! string at the boundary, through [`Display`](core::fmt::Display) or
//! [`TokenList::to_serialized`].

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use smallvec::SmallVec;

use crate::error::TokenError;

/// Separator between tokens of a [`ClassList`].
pub const CLASS_SEPARATOR: char = '.';

/// Separator between tokens of a [`PseudoClassList`].
pub const PSEUDO_CLASS_SEPARATOR: char = ':';

/// Style classes, serialized as `a.b.c`.
pub type ClassList = TokenList<CLASS_SEPARATOR>;

/// Style pseudo-classes, serialized as `a:b:c`.
pub type PseudoClassList = TokenList<PSEUDO_CLASS_SEPARATOR>;

/// Returns `true` if `haystack` contains `needle` as one of its
/// `separator`-delimited entries.
///
/// Only whole entries match: `"select"` is not found in `"selected"`.
/// An empty needle or an empty haystack never matches.
///
/// ```rust
/// use understory_stylable::list_contains;
///
/// assert!(list_contains("b", "a.b.c", '.'));
/// assert!(!list_contains("b", "a.bb.c", '.'));
/// assert!(!list_contains("select", "selected", ':'));
/// ```
#[must_use]
pub fn list_contains(needle: &str, haystack: &str, separator: char) -> bool {
    if needle.is_empty() || haystack.is_empty() {
        return false;
    }
    haystack
        .split(separator)
        .any(|entry| entry.len() == needle.len() && entry == needle)
}

/// Checks that `token` can be stored in a list using `separator`.
///
/// # Errors
///
/// Returns [`TokenError::Empty`] for the empty string and
/// [`TokenError::ContainsSeparator`] if `token` contains `separator`.
pub fn validate_token(token: &str, separator: char) -> Result<(), TokenError> {
    if token.is_empty() {
        return Err(TokenError::Empty);
    }
    if token.contains(separator) {
        return Err(TokenError::ContainsSeparator { separator });
    }
    Ok(())
}

/// An insertion-ordered set of string tokens joined by `SEP` when serialized.
///
/// Tokens are never empty, never contain `SEP` and never repeat. Order only
/// affects serialization; equality compares membership.
#[derive(Clone, Default)]
pub struct TokenList<const SEP: char> {
    tokens: SmallVec<[Box<str>; 4]>,
}

impl<const SEP: char> TokenList<SEP> {
    /// The separator used when parsing and serializing this list.
    pub const SEPARATOR: char = SEP;

    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokens: SmallVec::new(),
        }
    }

    /// Parses a serialized list.
    ///
    /// Empty entries (from doubled, leading or trailing separators) are
    /// dropped and repeated tokens keep their first position, so any input
    /// yields a well-formed list.
    #[must_use]
    pub fn parse(serialized: &str) -> Self {
        let mut list = Self::new();
        for entry in serialized.split(SEP) {
            if !entry.is_empty() && !list.contains(entry) {
                list.tokens.push(entry.into());
            }
        }
        list
    }

    /// Builds a list from individual tokens.
    ///
    /// # Errors
    ///
    /// Fails on the first token rejected by [`validate_token`].
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Self, TokenError> {
        let mut list = Self::new();
        for token in tokens {
            list.insert(token)?;
        }
        Ok(list)
    }

    /// Returns the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the list holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns `true` if `token` is a member.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| &**t == token)
    }

    /// Iterates the tokens in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.tokens.iter().map(|t| &**t)
    }

    /// Appends `token` unless it is already present.
    ///
    /// Returns `Ok(true)` if the list changed.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] without modifying the list if the token is
    /// empty or contains the separator.
    pub fn insert(&mut self, token: &str) -> Result<bool, TokenError> {
        validate_token(token, SEP)?;
        if self.contains(token) {
            return Ok(false);
        }
        self.tokens.push(token.into());
        Ok(true)
    }

    /// Removes `token` if present.
    ///
    /// Returns `Ok(true)` if the list changed.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] without modifying the list if the token is
    /// empty or contains the separator.
    pub fn remove(&mut self, token: &str) -> Result<bool, TokenError> {
        validate_token(token, SEP)?;
        let before = self.tokens.len();
        self.tokens.retain(|t| &**t != token);
        Ok(self.tokens.len() != before)
    }

    /// Removes all tokens.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Serializes the list as tokens joined by the separator.
    ///
    /// The empty list serializes to `""`.
    #[must_use]
    pub fn to_serialized(&self) -> String {
        self.to_string()
    }
}

impl<const SEP: char> PartialEq for TokenList<SEP> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }
}

impl<const SEP: char> Eq for TokenList<SEP> {}

impl<const SEP: char> fmt::Debug for TokenList<SEP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TokenList")
            .field(&self.to_serialized())
            .finish()
    }
}

impl<const SEP: char> fmt::Display for TokenList<SEP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                fmt::Write::write_char(f, SEP)?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl<const SEP: char> FromStr for TokenList<SEP> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
