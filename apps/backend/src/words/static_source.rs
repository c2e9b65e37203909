use std::collections::HashSet;

use parking_lot::Mutex;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::embedded::{FIVE_LETTER_WORDS, FOUR_LETTER_WORDS, SIX_LETTER_WORDS};
use super::WordSource;
use crate::domain::evaluation::normalize_word;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Word source backed by the embedded lists.
///
/// Targets come from a `ChaCha8Rng`; with a fixed seed the sequence of
/// targets is reproducible, which the tests rely on.
pub struct StaticWordSource {
    lists: [&'static [&'static str]; 3],
    dictionary: HashSet<&'static str>,
    rng: Mutex<ChaCha8Rng>,
}

impl StaticWordSource {
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        let lists = [FOUR_LETTER_WORDS, FIVE_LETTER_WORDS, SIX_LETTER_WORDS];
        let dictionary = lists.iter().flat_map(|l| l.iter().copied()).collect();
        Self {
            lists,
            dictionary,
            rng: Mutex::new(rng),
        }
    }

    fn list_for(&self, length: u8) -> Option<&'static [&'static str]> {
        match length {
            4 => Some(self.lists[0]),
            5 => Some(self.lists[1]),
            6 => Some(self.lists[2]),
            _ => None,
        }
    }
}

impl Default for StaticWordSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSource for StaticWordSource {
    fn random_word(&self, length: u8) -> Result<String, DomainError> {
        let list = self.list_for(length).unwrap_or(&[]);
        let mut rng = self.rng.lock();
        list.choose(&mut *rng)
            .map(|w| (*w).to_string())
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Word,
                    format!("No {length}-letter words available"),
                )
            })
    }

    fn contains(&self, word: &str) -> bool {
        self.dictionary.contains(normalize_word(word).as_str())
    }
}
