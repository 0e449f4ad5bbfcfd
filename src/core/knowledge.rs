//! Letter-level knowledge accumulated over a session
//!
//! Two disjoint sets: letters confirmed absent from the word and letters
//! confirmed present somewhere in it. Both only grow.

use rustc_hash::FxHashSet;

/// Confirmed-absent and confirmed-present letters
///
/// Invariant: `absent ∩ present = ∅`. The first verdict for a letter wins;
/// later verdicts that would move it to the other set are ignored, and
/// positional facts about it are carried by the pattern instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterKnowledge {
    absent: FxHashSet<char>,
    present: FxHashSet<char>,
}

impl LetterKnowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `letter` as absent from the word
    ///
    /// Returns `true` if the set grew. Letters already known present are left alone.
    pub fn mark_absent(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        if self.present.contains(&letter) {
            return false;
        }
        self.absent.insert(letter)
    }

    /// Record `letter` as present somewhere in the word
    ///
    /// Returns `true` if the set grew. Letters already known absent are left alone.
    pub fn mark_present(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        if self.absent.contains(&letter) {
            return false;
        }
        self.present.insert(letter)
    }

    /// True when a candidate containing `letter` contradicts what is known
    #[must_use]
    pub fn conflicts(&self, letter: char) -> bool {
        self.absent.contains(&letter.to_ascii_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn is_absent(&self, letter: char) -> bool {
        self.absent.contains(&letter.to_ascii_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn is_present(&self, letter: char) -> bool {
        self.present.contains(&letter.to_ascii_lowercase())
    }

    /// Absent letters in alphabetical order
    #[must_use]
    pub fn absent(&self) -> Vec<char> {
        sorted(&self.absent)
    }

    /// Present letters in alphabetical order
    #[must_use]
    pub fn present(&self) -> Vec<char> {
        sorted(&self.present)
    }
}

fn sorted(set: &FxHashSet<char>) -> Vec<char> {
    let mut letters: Vec<char> = set.iter().copied().collect();
    letters.sort_unstable();
    letters
}
