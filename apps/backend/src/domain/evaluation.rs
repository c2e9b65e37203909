//! Guess evaluation: classify each letter of a guess against the target word.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Classification of a single guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterOutcome {
    /// Same letter at the same position in the target.
    #[serde(rename = "correct")]
    Match,
    /// Letter occurs elsewhere in the target and that occurrence is not used up.
    #[serde(rename = "incorrect-position")]
    Misplaced,
    /// No unused occurrence of the letter remains in the target.
    #[serde(rename = "incorrect")]
    Absent,
}

impl LetterOutcome {
    pub fn is_absent(self) -> bool {
        matches!(self, LetterOutcome::Absent)
    }
}

/// Trim surrounding whitespace and upper-case ASCII letters. Every comparison against the
/// target or the dictionary goes through this.
pub fn normalize_word(word: &str) -> String {
    word.trim().chars().map(|c| c.to_ascii_uppercase()).collect()
}

/// Evaluate `guessed` against `target`, one outcome per letter of `guessed`.
///
/// Comparison is ASCII case-insensitive; other characters compare as-is, so
/// the result always has exactly one entry per character of `guessed`. Positions beyond the end of the target can
/// only be `Misplaced` or `Absent`.
///
/// Two passes over a letter multiset of the target:
/// 1. exact-position letters are marked `Match` and consume their letter;
/// 2. remaining letters are `Misplaced` while the multiset still holds that
///    letter, `Absent` otherwise.
///
/// So a letter occurring k times in the target yields at most k non-absent
/// outcomes, and exact hits always win over misplaced ones.
pub fn evaluate(guessed: &str, target: &str) -> Vec<LetterOutcome> {
    let guess: Vec<char> = guessed.chars().map(|c| c.to_ascii_uppercase()).collect();
    let target: Vec<char> = target.chars().map(|c| c.to_ascii_uppercase()).collect();

    let mut available: HashMap<char, usize> = HashMap::with_capacity(target.len());
    for &letter in &target {
        *available.entry(letter).or_insert(0) += 1;
    }

    let mut outcomes: Vec<Option<LetterOutcome>> = vec![None; guess.len()];

    for (i, &letter) in guess.iter().enumerate() {
        if target.get(i) == Some(&letter) {
            outcomes[i] = Some(LetterOutcome::Match);
            if let Some(count) = available.get_mut(&letter) {
                *count -= 1;
            }
        }
    }

    for (i, &letter) in guess.iter().enumerate() {
        if outcomes[i].is_some() {
            continue;
        }
        outcomes[i] = Some(match available.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                LetterOutcome::Misplaced
            }
            _ => LetterOutcome::Absent,
        });
    }

    outcomes
        .into_iter()
        .map(|o| o.unwrap_or(LetterOutcome::Absent))
        .collect()
}
