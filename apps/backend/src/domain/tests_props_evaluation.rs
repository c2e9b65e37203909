//! Property tests for guess evaluation (pure domain, no DB).
//!
//! Properties tested:
//! - A word evaluated against itself is all Match
//! - One outcome per guessed letter
//! - Non-absent outcomes for a letter never exceed its count in the target
//! - Match appears exactly where letters coincide
//! - Outcomes do not depend on case
//! - Shuffling unmatched guess letters keeps exact hits and per-letter totals

use std::collections::HashMap;

use proptest::prelude::*;

use crate::domain::evaluation::{evaluate, LetterOutcome};
use crate::domain::{test_gens, test_prelude};

fn counts(word: &str) -> HashMap<char, usize> {
    let mut map = HashMap::new();
    for c in word.chars() {
        *map.entry(c).or_insert(0) += 1;
    }
    map
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_self_evaluation_is_all_match(word in test_gens::word()) {
        prop_assert!(evaluate(&word, &word).iter().all(|o| *o == LetterOutcome::Match));
    }

    #[test]
    fn prop_one_outcome_per_letter(guess in test_gens::word(), target in test_gens::word()) {
        prop_assert_eq!(evaluate(&guess, &target).len(), guess.chars().count());
    }

    #[test]
    fn prop_non_absent_bounded_by_target_count(
        guess in test_gens::word(),
        target in test_gens::word(),
    ) {
        let outcomes = evaluate(&guess, &target);
        let available = counts(&target);
        let mut used: HashMap<char, usize> = HashMap::new();
        for (c, o) in guess.chars().zip(outcomes) {
            if !o.is_absent() {
                *used.entry(c).or_insert(0) += 1;
            }
        }
        for (c, n) in used {
            prop_assert!(n <= available.get(&c).copied().unwrap_or(0), "letter {} used {} times", c, n);
        }
    }

    #[test]
    fn prop_match_exactly_at_coinciding_positions((target, guess) in test_gens::target_and_guess()) {
        let outcomes = evaluate(&guess, &target);
        for ((g, t), o) in guess.chars().zip(target.chars()).zip(outcomes) {
            prop_assert_eq!(g == t, o == LetterOutcome::Match);
        }
    }

    #[test]
    fn prop_case_insensitive((target, guess) in test_gens::target_and_guess()) {
        prop_assert_eq!(
            evaluate(&guess.to_lowercase(), &target),
            evaluate(&guess, &target.to_lowercase())
        );
    }

    /// Misplaced is decided by letter counts, not positions: shuffling the
    /// non-matching guess letters keeps every exact hit and leaves each
    /// letter with min(guess count, target count) non-absent outcomes.
    #[test]
    fn prop_shuffling_unmatched_letters_keeps_letter_totals(
        (target, guess, free, shuffled) in test_gens::target_and_guess().prop_flat_map(|(t, g)| {
            let free: Vec<usize> = t
                .chars()
                .zip(g.chars())
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .map(|(i, _)| i)
                .collect();
            (Just(t), Just(g), Just(free.clone()), Just(free).prop_shuffle())
        })
    ) {
        let letters: Vec<char> = guess.chars().collect();
        let mut permuted = letters.clone();
        for (&to, &from) in free.iter().zip(&shuffled) {
            permuted[to] = letters[from];
        }
        let permuted: String = permuted.into_iter().collect();

        let before = evaluate(&guess, &target);
        let after = evaluate(&permuted, &target);
        for (i, o) in before.iter().enumerate() {
            if *o == LetterOutcome::Match {
                prop_assert_eq!(after[i], LetterOutcome::Match);
            }
        }

        let non_absent = |word: &str, outcomes: &[LetterOutcome]| {
            let mut map: HashMap<char, usize> = HashMap::new();
            for (c, o) in word.chars().zip(outcomes) {
                if !o.is_absent() {
                    *map.entry(c).or_insert(0) += 1;
                }
            }
            map
        };
        let totals = non_absent(&guess, &before);
        prop_assert_eq!(&totals, &non_absent(&permuted, &after));

        let in_target = counts(&target);
        for (c, n) in counts(&guess) {
            let expected = n.min(in_target.get(&c).copied().unwrap_or(0));
            prop_assert_eq!(totals.get(&c).copied().unwrap_or(0), expected, "letter {}", c);
        }
    }
}
