//! Response selection.
//!
//! The chatbot never touches a global random generator; it asks a
//! [`ResponseSelector`] to pick an index. Tests substitute a seeded or fully
//! deterministic selector without touching anything else.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of choices among candidate responses.
pub trait ResponseSelector: Send + Sync {
    /// Pick an index in `0..n`. Only called with `n > 0`.
    fn pick(&self, n: usize) -> usize;

    /// Get the name of this selector.
    fn name(&self) -> &'static str;

    /// Pick one of `responses`, or `None` if there are none.
    fn select<'a>(&self, responses: &'a [String]) -> Option<&'a str> {
        if responses.is_empty() {
            return None;
        }
        responses
            .get(self.pick(responses.len()))
            .map(String::as_str)
    }
}

/// Uniformly random selection. The generator is behind a mutex so one
/// selector can serve concurrent requests.
#[derive(Debug)]
pub struct RandomSelector {
    rng: Mutex<StdRng>,
}

impl RandomSelector {
    /// Create a selector seeded from the operating system.
    pub fn new() -> Self {
        RandomSelector {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Create a reproducible selector.
    pub fn seeded(seed: u64) -> Self {
        RandomSelector {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSelector for RandomSelector {
    fn pick(&self, n: usize) -> usize {
        self.rng.lock().random_range(0..n)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Always picks the first response.
#[derive(Debug, Clone, Default)]
pub struct FirstSelector;

impl FirstSelector {
    pub fn new() -> Self {
        FirstSelector
    }
}

impl ResponseSelector for FirstSelector {
    fn pick(&self, _n: usize) -> usize {
        0
    }

    fn name(&self) -> &'static str {
        "first"
    }
}

/// Walks through the responses in order, wrapping around.
#[derive(Debug, Default)]
pub struct RoundRobinSelector {
    next: AtomicUsize,
}

impl RoundRobinSelector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseSelector for RoundRobinSelector {
    fn pick(&self, n: usize) -> usize {
        self.next.fetch_add(1, Ordering::Relaxed) % n
    }

    fn name(&self) -> &'static str {
        "round_robin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses() -> Vec<String> {
        ["a", "b", "c"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_seeded_selector_is_reproducible() {
        let a = RandomSelector::seeded(42);
        let b = RandomSelector::seeded(42);

        let picks_a: Vec<usize> = (0..20).map(|_| a.pick(4)).collect();
        let picks_b: Vec<usize> = (0..20).map(|_| b.pick(4)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|&i| i < 4));
    }

    #[test]
    fn test_random_selector_covers_all_choices() {
        let selector = RandomSelector::seeded(7);
        let responses = responses();

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(selector.select(&responses).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_first_selector() {
        let selector = FirstSelector::new();
        assert_eq!(selector.select(&responses()), Some("a"));
        assert_eq!(selector.select(&[]), None);
    }

    #[test]
    fn test_round_robin_selector() {
        let selector = RoundRobinSelector::new();
        let responses = responses();

        let picks: Vec<&str> = (0..4).map(|_| selector.select(&responses).unwrap()).collect();
        assert_eq!(picks, vec!["a", "b", "c", "a"]);
    }
}
