//! # Names
//!
//! World and sector naming.
//!
//! Generation asks a [`NameProvider`] for one name at a time. The provider
//! shipped here, [`UniqueNames`], wraps any batch-oriented [`NameSource`]:
//! it requests names in batches, caches them, and refuses to hand out the
//! same name twice. Sources are interchangeable, so an offline syllable
//! generator, a fixed word list, or a remote service all plug in the same way.

use crate::{SectorgenError, SectorgenResult};
use log::{debug, warn};
use rand::prelude::*;
use std::collections::{HashSet, VecDeque};

/// Supplies world and sector names to the generator.
pub trait NameProvider {
    /// Returns a non-empty name not previously returned by this provider.
    fn next_name(&mut self) -> SectorgenResult<String>;
}

/// A source of candidate names, fetched in batches.
pub trait NameSource {
    /// Fetches up to `count` names. An empty batch means the source is dry.
    fn fetch_batch(&mut self, count: usize) -> SectorgenResult<Vec<String>>;
}

/// Batching, de-duplicating [`NameProvider`] over a [`NameSource`].
pub struct UniqueNames<S> {
    source: S,
    batch_size: usize,
    retry_budget: usize,
    cache: VecDeque<String>,
    issued: HashSet<String>,
}

impl<S: NameSource> UniqueNames<S> {
    /// Wraps `source`, fetching `batch_size` names at a time and drawing at
    /// most `retry_budget` candidates per requested name.
    pub fn new(source: S, batch_size: usize, retry_budget: usize) -> Self {
        Self {
            source,
            batch_size: batch_size.max(1),
            retry_budget: retry_budget.max(1),
            cache: VecDeque::new(),
            issued: HashSet::new(),
        }
    }

    /// Number of names handed out so far.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    fn next_candidate(&mut self) -> SectorgenResult<String> {
        if self.cache.is_empty() {
            let batch = self.source.fetch_batch(self.batch_size)?;
            if batch.is_empty() {
                return Err(SectorgenError::NameProvider(
                    "name source returned no names".to_string(),
                ));
            }
            debug!("Fetched {} candidate names", batch.len());
            self.cache.extend(batch);
        }

        self.cache
            .pop_front()
            .ok_or_else(|| SectorgenError::NameProvider("name cache is empty".to_string()))
    }
}

impl<S: NameSource> NameProvider for UniqueNames<S> {
    fn next_name(&mut self) -> SectorgenResult<String> {
        for _ in 0..self.retry_budget {
            let candidate = self.next_candidate()?;
            let name = candidate.trim();
            if name.is_empty() {
                continue;
            }
            if self.issued.insert(name.to_string()) {
                return Ok(name.to_string());
            }
            warn!("Name '{}' already issued, drawing another", name);
        }

        Err(SectorgenError::NamesExhausted {
            attempts: self.retry_budget,
        })
    }
}

static ONSETS: &[&str] = &[
    "b", "br", "c", "ch", "d", "dr", "f", "g", "gr", "h", "j", "k", "kh", "l", "m", "n", "p",
    "r", "s", "sh", "st", "t", "th", "tr", "v", "z",
];

static VOWELS: &[&str] = &["a", "e", "i", "o", "u", "ae", "ai", "ei", "ia", "ou"];

static CODAS: &[&str] = &["n", "r", "s", "l", "th", "nd", "rk", "x", "m", "st"];

static SUFFIXES: &[&str] = &["ia", "on", "ar", "us", "ine", "os"];

/// Offline name source that strings random syllables together.
pub struct SyllableNames {
    rng: StdRng,
}

impl SyllableNames {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    fn pick(&mut self, parts: &[&'static str]) -> &'static str {
        parts[self.rng.gen_range(0..parts.len())]
    }

    /// Builds one capitalized name of two or three syllables.
    pub fn generate(&mut self) -> String {
        let syllables = self.rng.gen_range(2..=3);
        let mut name = String::new();

        for i in 0..syllables {
            // Vowel-leading names skip the first onset
            if i > 0 || !self.rng.gen_bool(0.2) {
                name.push_str(self.pick(ONSETS));
            }
            name.push_str(self.pick(VOWELS));

            let coda_chance = if i == syllables - 1 { 0.6 } else { 0.3 };
            if self.rng.gen_bool(coda_chance) {
                name.push_str(self.pick(CODAS));
            }
        }

        if self.rng.gen_bool(0.15) {
            name.push_str(self.pick(SUFFIXES));
        }

        capitalize(&name)
    }
}

impl NameSource for SyllableNames {
    fn fetch_batch(&mut self, count: usize) -> SectorgenResult<Vec<String>> {
        Ok((0..count).map(|_| self.generate()).collect())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A fixed list of names, served once each in order.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: VecDeque<String>,
}

impl WordList {
    pub fn new<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: words.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

impl NameSource for WordList {
    fn fetch_batch(&mut self, count: usize) -> SectorgenResult<Vec<String>> {
        let take = count.min(self.words.len());
        Ok(self.words.drain(..take).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Repeating;

    impl NameSource for Repeating {
        fn fetch_batch(&mut self, count: usize) -> SectorgenResult<Vec<String>> {
            Ok(vec!["Regina".to_string(); count])
        }
    }

    #[test]
    fn test_sequential_names_are_distinct() {
        let mut names = UniqueNames::new(SyllableNames::seeded(42), 10, 1000);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let name = names.next_name().unwrap();
            assert!(!name.is_empty());
            assert!(seen.insert(name));
        }
        assert_eq!(names.issued(), 500);
    }

    #[test]
    fn test_word_list_is_served_in_order() {
        let mut names = UniqueNames::new(WordList::new(["Regina", "Efate", "Regina", "Jenghe"]), 2, 10);
        assert_eq!(names.next_name().unwrap(), "Regina");
        assert_eq!(names.next_name().unwrap(), "Efate");
        // The repeated entry is skipped
        assert_eq!(names.next_name().unwrap(), "Jenghe");
        assert!(matches!(
            names.next_name(),
            Err(SectorgenError::NameProvider(_))
        ));
    }

    #[test]
    fn test_retry_budget_is_enforced() {
        let mut names = UniqueNames::new(Repeating, 5, 20);
        assert_eq!(names.next_name().unwrap(), "Regina");
        assert!(matches!(
            names.next_name(),
            Err(SectorgenError::NamesExhausted { attempts: 20 })
        ));
    }

    #[test]
    fn test_seeded_syllables_are_reproducible() {
        let mut a = SyllableNames::seeded(7);
        let mut b = SyllableNames::seeded(7);
        assert_eq!(a.fetch_batch(20).unwrap(), b.fetch_batch(20).unwrap());
    }

    #[test]
    fn test_syllable_names_are_capitalized() {
        let mut source = SyllableNames::seeded(99);
        for name in source.fetch_batch(100).unwrap() {
            let first = name.chars().next().unwrap();
            assert!(first.is_uppercase(), "{} is not capitalized", name);
        }
    }
}
