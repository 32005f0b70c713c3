use crate::budget::DomainBudget;
use crate::config::LimitsConfig;
use crate::model::{FrontierEntry, LinkCandidate, LinkClass, PageContext};
use crate::urls::{domain_key, hostname};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// The link-expansion governor: one instance per crawl session.
///
/// Per-page internal/external caps reset on every call; the per-domain
/// budget and the random source live as long as the pipeline, so
/// repeated calls are deterministic for a fixed seed and call order.
pub struct LimitsPipeline {
    config: LimitsConfig,
    rng: ChaCha8Rng,
    domains: DomainBudget,
}

impl LimitsPipeline {
    pub fn new(config: LimitsConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.random_seed);
        let domains = DomainBudget::new(config.max_links_per_domain);
        Self {
            config,
            rng,
            domains,
        }
    }

    pub fn config(&self) -> &LimitsConfig {
        &self.config
    }

    pub fn domains(&self) -> &DomainBudget {
        &self.domains
    }

    /// Filter one page's output sequence.
    ///
    /// Link candidates are shuffled (when enabled), then capped by the
    /// internal, external and per-domain budgets in that order. Non-link
    /// entries are returned untouched after the surviving candidates,
    /// preserving their own relative order. When `page.skip_limits` is
    /// set the input comes back verbatim and no counter moves.
    pub fn filter<T>(
        &mut self,
        page: &PageContext,
        entries: Vec<FrontierEntry<T>>,
    ) -> Vec<FrontierEntry<T>> {
        if page.skip_limits {
            return entries;
        }

        let (mut links, others) = split_entries(entries);
        debug!(
            "filtering {} candidates (+{} passthrough items) from {}",
            links.len(),
            others.len(),
            page.url
        );

        if self.config.randomize_links {
            links.shuffle(&mut self.rng);
        }

        let source_host = hostname(&page.url);
        let links = self.cap_class(links, &source_host, LinkClass::Internal);
        let links = self.cap_class(links, &source_host, LinkClass::External);
        let links = self.cap_domains(links);
        debug!("{} candidates admitted from {}", links.len(), page.url);

        let mut out: Vec<FrontierEntry<T>> =
            links.into_iter().map(FrontierEntry::Link).collect();
        out.extend(others.into_iter().map(FrontierEntry::Other));
        out
    }

    /// One per-page budget pass. Candidates of `class` are admitted while
    /// the class counter is below their effective cap; the counter
    /// advances for every candidate of the class examined, admitted or
    /// not. Candidates of the other class pass through unconditionally.
    fn cap_class(
        &self,
        links: Vec<LinkCandidate>,
        source_host: &str,
        class: LinkClass,
    ) -> Vec<LinkCandidate> {
        let default_cap = match class {
            LinkClass::Internal => self.config.max_internal_links,
            LinkClass::External => self.config.max_external_links,
        };
        let mut examined = 0;
        links
            .into_iter()
            .filter(|link| {
                if LinkClass::of_hosts(source_host, &hostname(&link.url)) != class {
                    return true;
                }
                let cap = match class {
                    LinkClass::Internal => link.max_internal_links,
                    LinkClass::External => link.max_external_links,
                }
                .unwrap_or(default_cap);
                let admitted = examined < cap;
                examined += 1;
                admitted
            })
            .collect()
    }

    /// Crawl-wide pass: admission consumes the candidate's domain budget.
    fn cap_domains(&mut self, links: Vec<LinkCandidate>) -> Vec<LinkCandidate> {
        links
            .into_iter()
            .filter(|link| {
                let key = domain_key(&link.url);
                let admitted = self.domains.try_admit(&key);
                if !admitted {
                    debug!("domain budget exhausted, dropping {}", link.url);
                }
                admitted
            })
            .collect()
    }
}

/// Stable partition into candidates and passthrough items.
fn split_entries<T>(entries: Vec<FrontierEntry<T>>) -> (Vec<LinkCandidate>, Vec<T>) {
    let mut links = Vec::new();
    let mut others = Vec::new();
    for entry in entries {
        match entry {
            FrontierEntry::Link(link) => links.push(link),
            FrontierEntry::Other(item) => others.push(item),
        }
    }
    (links, others)
}
