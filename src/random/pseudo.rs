//! Pseudo-random page sources
//!
//! Backed by the `rand` crate. None of these are suitable for anything
//! security related; they only spread searches across result pages.

use crate::random::PageRandom;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Thread-local RNG page source (the default)
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl PageRandom for ThreadRandom {
    fn name(&self) -> &'static str {
        "thread"
    }

    fn page(&self, max_page: u32) -> u32 {
        rand::thread_rng().gen_range(1..=max_page.max(1))
    }
}

/// Seeded page source for reproducible runs
///
/// Using the same seed produces the same sequence of pages.
pub struct SeededRandom {
    rng: Mutex<rand::rngs::StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }
}

impl PageRandom for SeededRandom {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn page(&self, max_page: u32) -> u32 {
        // A poisoned lock still holds a usable RNG state
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(1..=max_page.max(1))
    }
}

/// Always answers the same page, clamped into range
#[derive(Debug, Clone, Copy)]
pub struct FixedPage(u32);

impl FixedPage {
    pub fn new(page: u32) -> Self {
        Self(page)
    }
}

impl PageRandom for FixedPage {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn page(&self, max_page: u32) -> u32 {
        self.0.clamp(1, max_page.max(1))
    }
}
