//! Random sample answers for duration prompts.

use std::sync::{Mutex, PoisonError};

use parley_core::duration::TimeUnit;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces sample inputs such as `"3 days 1 hr"`.
///
/// Each sample has two terms of different total length, larger first, with
/// values from 1 to 5.
pub struct ExampleGenerator {
    rng: Mutex<StdRng>,
}

impl ExampleGenerator {
    /// A generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A generator that yields the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn example(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            let first = draw_term(&mut rng);
            let second = draw_term(&mut rng);
            if term_secs(first) == term_secs(second) {
                continue;
            }
            let (larger, smaller) = if term_secs(first) > term_secs(second) {
                (first, second)
            } else {
                (second, first)
            };
            return format!("{} {}", render_term(larger), render_term(smaller));
        }
    }
}

impl Default for ExampleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_term(rng: &mut StdRng) -> (u64, TimeUnit) {
    let value = rng.random_range(1..=5);
    let unit = TimeUnit::ALL[rng.random_range(0..TimeUnit::ALL.len())];
    (value, unit)
}

fn term_secs((value, unit): (u64, TimeUnit)) -> u64 {
    value * unit.seconds()
}

fn render_term((value, unit): (u64, TimeUnit)) -> String {
    format!("{} {}", value, unit.label(value != 1, true))
}

#[cfg(test)]
mod tests {
    use parley_core::duration::Duration;

    use super::*;

    #[test]
    fn test_same_seed_same_examples() {
        let a = ExampleGenerator::seeded(42);
        let b = ExampleGenerator::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.example(), b.example());
        }
    }

    #[test]
    fn test_examples_parse_as_durations() {
        let generator = ExampleGenerator::seeded(7);
        for _ in 0..200 {
            let example = generator.example();
            assert!(Duration::parse(&example).is_ok(), "unparsable: {}", example);
        }
    }

    #[test]
    fn test_larger_term_first_and_terms_differ() {
        let generator = ExampleGenerator::seeded(1234);
        for _ in 0..200 {
            let example = generator.example();
            let tokens: Vec<&str> = example.split(' ').collect();
            assert_eq!(tokens.len(), 4, "{}", example);

            let first = Duration::parse(&tokens[..2].join(" ")).unwrap();
            let second = Duration::parse(&tokens[2..].join(" ")).unwrap();
            assert!(first > second, "{}", example);
        }
    }

    #[test]
    fn test_values_in_range_and_pluralised() {
        let generator = ExampleGenerator::seeded(99);
        for _ in 0..200 {
            let example = generator.example();
            let tokens: Vec<&str> = example.split(' ').collect();
            for pair in tokens.chunks(2) {
                let value: u64 = pair[0].parse().unwrap();
                assert!((1..=5).contains(&value), "{}", example);
                let unit = TimeUnit::from_name(pair[1]).unwrap();
                assert_eq!(pair[1], unit.label(value != 1, true));
            }
        }
    }

    #[test]
    fn test_from_seed_option() {
        let a = ExampleGenerator::from_seed_option(Some(5));
        let b = ExampleGenerator::seeded(5);
        assert_eq!(a.example(), b.example());
        assert!(!ExampleGenerator::from_seed_option(None).example().is_empty());
    }
}
