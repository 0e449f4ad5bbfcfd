//! Positional knowledge of the hidden word
//!
//! A pattern holds one slot per letter of the target word. Each slot is either
//! a confirmed lowercase letter or a wildcard. Rendered as text the wildcard is
//! `?`, which is also what the dictionary service expects in a spelling query:
//!
//! ```text
//! appl?   four confirmed slots, one unknown
//! ?????   nothing known yet
//! ```

use regex::Regex;
use std::fmt;

/// Wildcard marker used when a pattern is rendered as text
pub const WILDCARD: char = '?';

/// Errors raised by pattern operations
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("slot {index} is out of range for a pattern of size {size}")]
    OutOfRange { index: usize, size: usize },

    #[error("invalid pattern character '{0}'")]
    InvalidCharacter(char),

    #[error("failed to build pattern matcher: {0}")]
    InvalidMatcher(#[from] regex::Error),
}

/// Current knowledge of the target word, one slot per letter
///
/// The size is fixed at construction; slots are only ever filled in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    slots: Vec<Option<char>>,
}

impl Pattern {
    /// Create an all-wildcard pattern of the given size
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// Number of slots (the target word's length)
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// The confirmed letter at `index`, if any
    #[inline]
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Confirm `letter` at `index`
    ///
    /// Returns `true` when the slot changed. Writing the letter a slot already
    /// holds is a no-op.
    ///
    /// # Errors
    /// Returns `PatternError::OutOfRange` if `index >= size`.
    pub fn set_slot(&mut self, index: usize, letter: char) -> Result<bool, PatternError> {
        let size = self.size();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(PatternError::OutOfRange { index, size })?;

        let letter = letter.to_ascii_lowercase();
        if *slot == Some(letter) {
            return Ok(false);
        }
        *slot = Some(letter);
        Ok(true)
    }

    /// True when no wildcard remains
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// True when no slot has been confirmed yet
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Indices of the slots that are still wildcards
    pub fn wildcards(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.is_none().then_some(i))
    }

    /// The resolved word, once every slot is confirmed
    #[must_use]
    pub fn solution(&self) -> Option<String> {
        self.slots.iter().copied().collect()
    }

    /// Render as a spelling query, one `?` per unknown slot
    #[must_use]
    pub fn to_query(&self) -> String {
        self.slots.iter().map(|s| s.unwrap_or(WILDCARD)).collect()
    }

    /// Substitute `letter` into every wildcard slot, keeping confirmed slots
    #[must_use]
    pub fn fill_wildcards(&self, letter: char) -> String {
        let letter = letter.to_ascii_lowercase();
        self.slots.iter().map(|s| s.unwrap_or(letter)).collect()
    }

    /// Build a case-insensitive matcher for words consistent with this pattern
    ///
    /// A word matches when it has exactly `size` characters and agrees with
    /// every confirmed slot. Wildcard slots accept any single character.
    ///
    /// # Examples
    /// ```
    /// use wordle_oracle::core::Pattern;
    ///
    /// let pattern: Pattern = "appl?".parse().unwrap();
    /// let matcher = pattern.to_matcher().unwrap();
    ///
    /// assert!(matcher.is_match("apple"));
    /// assert!(matcher.is_match("APPLY"));
    /// assert!(!matcher.is_match("ample"));
    /// assert!(!matcher.is_match("apples"));
    /// ```
    ///
    /// # Errors
    /// Returns `PatternError::InvalidMatcher` if the underlying regex fails to compile.
    pub fn to_matcher(&self) -> Result<Matcher, PatternError> {
        let mut source = String::from("(?i)^");
        for slot in &self.slots {
            match slot {
                Some(letter) => source.push_str(&regex::escape(&letter.to_string())),
                None => source.push('.'),
            }
        }
        source.push('$');

        Ok(Matcher {
            regex: Regex::new(&source)?,
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    /// Parse a pattern such as `"appl?"`; `?`, `.` and `_` are wildcards
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slots = s
            .chars()
            .map(|ch| match ch {
                '?' | '.' | '_' => Ok(None),
                c if c.is_alphabetic() => Ok(Some(c.to_ascii_lowercase())),
                c => Err(PatternError::InvalidCharacter(c)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { slots })
    }
}

/// Compiled matcher produced by [`Pattern::to_matcher`]
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    #[must_use]
    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }
}
