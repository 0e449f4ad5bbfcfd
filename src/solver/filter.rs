//! Candidate acceptance filter
//!
//! Checks applied to each candidate before it is sent to the oracle, in order:
//! 1. not already tried
//! 2. length equals the pattern size
//! 3. letter constraints (see [`LetterPolicy`])
//! 4. agrees with every confirmed slot of the pattern

use crate::config::LetterPolicy;
use crate::core::{LetterKnowledge, Matcher, Pattern, PatternError, TriedWords};

/// Per-letter check of `candidate` against accumulated knowledge
///
/// Under [`LetterPolicy::Lenient`] the letters are inspected but the candidate
/// always passes. Under [`LetterPolicy::Strict`] a candidate fails when it uses
/// a confirmed-absent letter in a slot the pattern has not confirmed for it.
#[must_use]
pub fn passes_letter_constraints(
    candidate: &str,
    knowledge: &LetterKnowledge,
    pattern: &Pattern,
    policy: LetterPolicy,
) -> bool {
    let conflict = candidate
        .chars()
        .enumerate()
        .find(|&(i, ch)| knowledge.conflicts(ch) && pattern.slot(i) != Some(ch.to_ascii_lowercase()));

    match (conflict, policy) {
        (None, _) => true,
        (Some((slot, letter)), LetterPolicy::Lenient) => {
            tracing::trace!(candidate, slot, %letter, "Absent letter tolerated");
            true
        }
        (Some((slot, letter)), LetterPolicy::Strict) => {
            tracing::debug!(candidate, slot, %letter, "Rejected for absent letter");
            false
        }
    }
}

/// Filter bound to the pattern at the start of a round
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    size: usize,
    matcher: Matcher,
    policy: LetterPolicy,
}

impl CandidateFilter {
    /// # Errors
    /// Returns an error if the pattern matcher cannot be built.
    pub fn new(pattern: &Pattern, policy: LetterPolicy) -> Result<Self, PatternError> {
        Ok(Self {
            size: pattern.size(),
            matcher: pattern.to_matcher()?,
            policy,
        })
    }

    /// True when `candidate` may be submitted
    #[must_use]
    pub fn accepts(
        &self,
        candidate: &str,
        tried: &TriedWords,
        knowledge: &LetterKnowledge,
        pattern: &Pattern,
    ) -> bool {
        if tried.contains(candidate) {
            return false;
        }
        if candidate.chars().count() != self.size {
            return false;
        }
        if !passes_letter_constraints(candidate, knowledge, pattern, self.policy) {
            return false;
        }
        self.matcher.is_match(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knowledge_with_absent(letters: &[char]) -> LetterKnowledge {
        let mut knowledge = LetterKnowledge::new();
        for &ch in letters {
            knowledge.mark_absent(ch);
        }
        knowledge
    }

    #[test]
    fn rejects_tried_words() {
        let pattern = Pattern::new(5);
        let filter = CandidateFilter::new(&pattern, LetterPolicy::Lenient).unwrap();
        let mut tried = TriedWords::new();
        tried.insert("apple");

        assert!(!filter.accepts("apple", &tried, &LetterKnowledge::new(), &pattern));
        assert!(filter.accepts("apply", &tried, &LetterKnowledge::new(), &pattern));
    }

    #[test]
    fn rejects_wrong_length() {
        let pattern = Pattern::new(5);
        let filter = CandidateFilter::new(&pattern, LetterPolicy::Lenient).unwrap();
        let tried = TriedWords::new();
        let knowledge = LetterKnowledge::new();

        assert!(!filter.accepts("apples", &tried, &knowledge, &pattern));
        assert!(!filter.accepts("app", &tried, &knowledge, &pattern));
    }

    #[test]
    fn rejects_pattern_mismatch() {
        let pattern: Pattern = "appl?".parse().unwrap();
        let filter = CandidateFilter::new(&pattern, LetterPolicy::Lenient).unwrap();
        let tried = TriedWords::new();
        let knowledge = LetterKnowledge::new();

        assert!(filter.accepts("apple", &tried, &knowledge, &pattern));
        assert!(!filter.accepts("ample", &tried, &knowledge, &pattern));
    }

    // Letter knowledge alone never rejects a candidate under Lenient
    #[test]
    fn lenient_policy_never_rejects_on_letters() {
        let pattern: Pattern = "appl?".parse().unwrap();
        let knowledge = knowledge_with_absent(&['y']);

        assert!(passes_letter_constraints(
            "apply",
            &knowledge,
            &pattern,
            LetterPolicy::Lenient
        ));

        let filter = CandidateFilter::new(&pattern, LetterPolicy::Lenient).unwrap();
        assert!(filter.accepts("apply", &TriedWords::new(), &knowledge, &pattern));
    }

    // Strict turns the letter check into a real rejection rule.
    #[test]
    fn strict_policy_rejects_absent_letters() {
        let pattern: Pattern = "appl?".parse().unwrap();
        let knowledge = knowledge_with_absent(&['y']);

        assert!(!passes_letter_constraints(
            "apply",
            &knowledge,
            &pattern,
            LetterPolicy::Strict
        ));
        assert!(passes_letter_constraints(
            "apple",
            &knowledge,
            &pattern,
            LetterPolicy::Strict
        ));

        let filter = CandidateFilter::new(&pattern, LetterPolicy::Strict).unwrap();
        assert!(!filter.accepts("apply", &TriedWords::new(), &knowledge, &pattern));
    }

    #[test]
    fn strict_policy_allows_absent_letter_in_confirmed_slot() {
        // 'e' was first reported absent, later confirmed at slot 4
        let pattern: Pattern = "????e".parse().unwrap();
        let knowledge = knowledge_with_absent(&['e']);

        assert!(passes_letter_constraints(
            "apple",
            &knowledge,
            &pattern,
            LetterPolicy::Strict
        ));
        assert!(!passes_letter_constraints(
            "eagle",
            &knowledge,
            &pattern,
            LetterPolicy::Strict
        ));
    }
}
