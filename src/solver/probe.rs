//! Probe guesses for letters known present but not yet placed
//!
//! A probe fills every wildcard slot of the pattern with the present letter
//! and keeps the confirmed slots. The oracle scores per slot, so whichever
//! wildcard comes back `correct` is where the letter lives:
//!
//! ```text
//! pattern  ????e     letter 'a'
//! probe    aaaae
//! verdict  G---G  -> a???e
//! ```

use crate::core::{FeedbackEntry, LetterKnowledge, Pattern, PatternError, Verdict};

/// Build the probe word for `letter`
///
/// Returns `None` when the pattern has no wildcard left to probe.
#[must_use]
pub fn build_probe(pattern: &Pattern, letter: char) -> Option<String> {
    if pattern.is_solved() {
        return None;
    }
    Some(pattern.fill_wildcards(letter))
}

/// Fold a probe's feedback into the pattern
///
/// Only `correct` slots are taken; `present` and `absent` verdicts on a probe
/// say nothing reliable about the probed letter. Returns `true` if the
/// pattern changed.
///
/// # Errors
/// Returns `PatternError::OutOfRange` if the feedback names a slot outside the pattern.
pub fn incorporate_probe(
    pattern: &mut Pattern,
    knowledge: &mut LetterKnowledge,
    feedback: &[FeedbackEntry],
) -> Result<bool, PatternError> {
    let mut changed = false;
    for entry in feedback.iter().filter(|e| e.verdict == Verdict::Correct) {
        changed |= pattern.set_slot(entry.slot, entry.guess)?;
        knowledge.mark_present(entry.guess);
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_feedback;

    #[test]
    fn probe_fills_every_wildcard() {
        let pattern: Pattern = "a??le".parse().unwrap();
        assert_eq!(build_probe(&pattern, 'p').as_deref(), Some("apple"));

        let blank = Pattern::new(5);
        assert_eq!(build_probe(&blank, 'e').as_deref(), Some("eeeee"));
    }

    #[test]
    fn probe_keeps_confirmed_slots() {
        let pattern: Pattern = "?p?l?".parse().unwrap();
        let probe = build_probe(&pattern, 'e').unwrap();

        for (i, ch) in probe.chars().enumerate() {
            match pattern.slot(i) {
                Some(confirmed) => assert_eq!(ch, confirmed),
                None => assert_eq!(ch, 'e'),
            }
        }
    }

    #[test]
    fn no_probe_for_solved_pattern() {
        let pattern: Pattern = "apple".parse().unwrap();
        assert_eq!(build_probe(&pattern, 'e'), None);
    }

    #[test]
    fn incorporate_takes_only_correct_slots() {
        let mut pattern = Pattern::new(5);
        let mut knowledge = LetterKnowledge::new();
        let feedback = parse_feedback("eeeee", "YYYYG").unwrap();

        let changed = incorporate_probe(&mut pattern, &mut knowledge, &feedback).unwrap();

        assert!(changed);
        assert_eq!(pattern.to_query(), "????e");
        assert!(knowledge.is_present('e'));
        assert!(!knowledge.is_absent('e'));
    }

    #[test]
    fn incorporate_without_correct_slots_is_no_change() {
        let mut pattern: Pattern = "????e".parse().unwrap();
        let mut knowledge = LetterKnowledge::new();
        let feedback = parse_feedback("xxxxe", "----G").unwrap();

        // Slot 4 was already known
        let changed = incorporate_probe(&mut pattern, &mut knowledge, &feedback).unwrap();
        assert!(!changed);
        assert!(!knowledge.is_absent('x'));
    }

    #[test]
    fn incorporate_rejects_out_of_range_slot() {
        let mut pattern = Pattern::new(2);
        let mut knowledge = LetterKnowledge::new();
        let feedback = parse_feedback("aaa", "--G").unwrap();

        assert!(matches!(
            incorporate_probe(&mut pattern, &mut knowledge, &feedback),
            Err(PatternError::OutOfRange { index: 2, size: 2 })
        ));
    }
}
