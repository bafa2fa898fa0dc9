//! Search result accumulation.

use std::collections::{BTreeMap, HashMap};

use manual_page::Page;

/// Score awarded to pages containing the whole query.
pub const MAX_RATIO: u32 = 100;

/// Collects matching pages by score.
///
/// Pages are kept in buckets keyed by ratio (0-100). Within a bucket, pages keep the
/// order they were added in and are unique by name.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Ratio to pages in insertion order.
    buckets: BTreeMap<u32, Vec<Page>>,
}

impl SearchResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page under `ratio`, replacing a page with the same name in that bucket.
    ///
    /// Ratios above [`MAX_RATIO`] are clamped.
    pub fn add_page(&mut self, page: Page, ratio: u32) {
        let bucket = self.buckets.entry(ratio.min(MAX_RATIO)).or_default();
        match bucket.iter_mut().find(|existing| existing.name() == page.name()) {
            Some(existing) => *existing = page,
            None => bucket.push(page),
        }
    }

    /// Number of pages added, counting each bucket separately.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Returns true if no page was added.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Flattens the buckets into pages ordered by ascending ratio.
    ///
    /// The least relevant pages come first; within a ratio, insertion order is kept.
    /// Names are unique in the output: a name seen again in a later bucket keeps
    /// its first position and takes the later page.
    pub fn into_pages(self) -> Vec<Page> {
        let mut pages: Vec<Page> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for page in self.buckets.into_values().flatten() {
            match positions.get(page.name()).and_then(|&i| pages.get_mut(i)) {
                Some(slot) => *slot = page,
                None => {
                    positions.insert(page.name().to_string(), pages.len());
                    pages.push(page);
                }
            }
        }

        pages
    }
}
