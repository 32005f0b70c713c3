use serde::{Deserialize, Serialize};

/// Pipeline-wide limits. Immutable once a pipeline is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Cap on same-host candidates admitted per page.
    pub max_internal_links: usize,
    /// Cap on cross-host candidates admitted per page.
    pub max_external_links: usize,
    /// Crawl-wide cap on candidates admitted per domain key.
    pub max_links_per_domain: usize,
    /// Shuffle each page's candidates before filtering.
    pub randomize_links: bool,
    /// Seed for the shuffle; a fixed seed makes runs reproducible.
    pub random_seed: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_internal_links: 10,
            max_external_links: 10,
            max_links_per_domain: 10,
            randomize_links: false,
            random_seed: 0,
        }
    }
}

impl LimitsConfig {
    pub fn with_max_internal_links(mut self, cap: usize) -> Self {
        self.max_internal_links = cap;
        self
    }

    pub fn with_max_external_links(mut self, cap: usize) -> Self {
        self.max_external_links = cap;
        self
    }

    pub fn with_max_links_per_domain(mut self, cap: usize) -> Self {
        self.max_links_per_domain = cap;
        self
    }

    pub fn with_randomize_links(mut self, randomize: bool) -> Self {
        self.randomize_links = randomize;
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }
}
