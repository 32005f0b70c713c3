use clap::Parser;
use linkgate_core::LimitsConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Filter crawl frontier links against per-page and per-domain budgets", long_about = None)]
pub(crate) struct Args {
    /// JSON-lines page feed; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Cap on same-host links admitted per page
    #[arg(long, default_value_t = 10)]
    pub max_internal_links: usize,

    /// Cap on cross-host links admitted per page
    #[arg(long, default_value_t = 10)]
    pub max_external_links: usize,

    /// Crawl-wide cap on links admitted per domain
    #[arg(long, default_value_t = 10)]
    pub max_links_per_domain: usize,

    /// Shuffle each page's links before filtering
    #[arg(long)]
    pub randomize_links: bool,

    /// Seed for --randomize-links
    #[arg(long, default_value_t = 0)]
    pub random_seed: u64,

    /// Emit filtered pages as JSON lines instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn limits_config(&self) -> LimitsConfig {
        LimitsConfig::default()
            .with_max_internal_links(self.max_internal_links)
            .with_max_external_links(self.max_external_links)
            .with_max_links_per_domain(self.max_links_per_domain)
            .with_randomize_links(self.randomize_links)
            .with_random_seed(self.random_seed)
    }
}
