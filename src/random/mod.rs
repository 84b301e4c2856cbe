//! Random page selection
//!
//! The search client picks one result page uniformly at random so that pins
//! close to each other don't all show the provider's first page. The source
//! of randomness is injected through the `PageRandom` trait so tests and
//! reproducible CLI runs can pin it down.

pub mod pseudo;

pub use pseudo::{FixedPage, SeededRandom, ThreadRandom};

/// Source of page numbers
///
/// Implementations must be thread-safe (Send + Sync) so one client can serve
/// many concurrent searches.
pub trait PageRandom: Send + Sync {
    /// Short name for diagnostics (e.g., "thread", "seeded")
    fn name(&self) -> &'static str;

    /// Pick a page uniformly in `1..=max_page`
    ///
    /// `max_page` of 0 is treated as 1.
    fn page(&self, max_page: u32) -> u32;
}

impl<R: PageRandom + ?Sized> PageRandom for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn page(&self, max_page: u32) -> u32 {
        (**self).page(max_page)
    }
}

impl<R: PageRandom + ?Sized> PageRandom for &R {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn page(&self, max_page: u32) -> u32 {
        (**self).page(max_page)
    }
}

/// Build a page source: seeded when a seed is given, thread RNG otherwise
pub fn page_random(seed: Option<u64>) -> Box<dyn PageRandom> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_random_selection() {
        assert_eq!(page_random(None).name(), "thread");
        assert_eq!(page_random(Some(7)).name(), "seeded");
    }

    #[test]
    fn test_boxed_delegates() {
        let boxed: Box<dyn PageRandom> = Box::new(FixedPage::new(4));
        assert_eq!(boxed.page(10), 4);
        assert_eq!(boxed.name(), "fixed");
    }
}
