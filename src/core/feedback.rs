//! Per-slot feedback returned by the oracle
//!
//! Each entry scores one letter of a guess:
//! - `correct` = letter in the right slot (green)
//! - `present` = letter in the word, wrong slot (yellow)
//! - `absent`  = letter not in the word (gray)

use serde::{Deserialize, Serialize};

/// Verdict for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Present,
    Absent,
}

impl Verdict {
    /// Parse a feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// One scored slot of a submitted guess
///
/// Wire format: `{"slot": 0, "guess": "a", "result": "correct"}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub slot: usize,
    pub guess: char,
    #[serde(rename = "result")]
    pub verdict: Verdict,
}

/// True when every slot of the feedback is correct
///
/// Empty feedback is never a win.
#[must_use]
pub fn is_all_correct(feedback: &[FeedbackEntry]) -> bool {
    !feedback.is_empty() && feedback.iter().all(|e| e.verdict == Verdict::Correct)
}

/// Render feedback as an emoji row like "🟩🟨⬜🟩🟨"
#[must_use]
pub fn feedback_to_emoji(feedback: &[FeedbackEntry]) -> String {
    feedback.iter().map(|e| e.verdict.to_emoji()).collect()
}

/// Build feedback entries for `guess` from a symbol string like "GY-GY"
///
/// Returns `None` if the lengths differ or a symbol is not recognised.
///
/// # Examples
/// ```
/// use wordle_oracle::core::{Verdict, parse_feedback};
///
/// let feedback = parse_feedback("apply", "GGGG-").unwrap();
/// assert_eq!(feedback[4].guess, 'y');
/// assert_eq!(feedback[4].verdict, Verdict::Absent);
/// ```
#[must_use]
pub fn parse_feedback(guess: &str, symbols: &str) -> Option<Vec<FeedbackEntry>> {
    let letters: Vec<char> = guess.chars().collect();
    let verdicts: Vec<Verdict> = symbols
        .chars()
        .map(Verdict::from_symbol)
        .collect::<Option<_>>()?;

    if letters.len() != verdicts.len() {
        return None;
    }

    Some(
        letters
            .into_iter()
            .zip(verdicts)
            .enumerate()
            .map(|(slot, (guess, verdict))| FeedbackEntry {
                slot,
                guess,
                verdict,
            })
            .collect(),
    )
}
