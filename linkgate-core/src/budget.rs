use std::collections::HashMap;
use tracing::debug;

/// Crawl-wide admission counters, one per domain key.
///
/// Counts only ever grow and never exceed `max_per_domain`; they are
/// never reset between pages, so the budget is consumed over the whole
/// lifetime of the pipeline instance.
#[derive(Debug)]
pub struct DomainBudget {
    counts: HashMap<String, usize>,
    max_per_domain: usize,
}

impl DomainBudget {
    pub fn new(max_per_domain: usize) -> Self {
        Self {
            counts: HashMap::new(),
            max_per_domain,
        }
    }

    /// Admit one candidate for `key` if the domain still has budget,
    /// incrementing its count on admission.
    pub fn try_admit(&mut self, key: &str) -> bool {
        let count = self.counts.entry(key.to_string()).or_insert(0);
        if *count < self.max_per_domain {
            *count += 1;
            if *count == self.max_per_domain {
                debug!("domain budget saturated for '{}'", key);
            }
            true
        } else {
            false
        }
    }

    /// Candidates admitted so far for `key`.
    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct domain keys seen so far.
    pub fn tracked_domains(&self) -> usize {
        self.counts.len()
    }
}
