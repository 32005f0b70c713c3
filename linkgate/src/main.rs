use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use linkgate_core::records::{self, LinkRecord, PageRecord};
use linkgate_core::{FrontierEntry, LimitsPipeline};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::debug;

mod arguments;

use arguments::Args;

/// One page after filtering, as emitted with `--json`.
#[derive(Debug, Serialize)]
struct FilteredPage {
    url: String,
    links: Vec<LinkRecord>,
    items: Vec<serde_json::Value>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let pages = load_pages(args.input.as_deref())?;
    debug!("loaded {} page records", pages.len());

    // One pipeline for the whole feed, so the per-domain budget is
    // consumed across pages like it would be across a crawl session.
    let mut pipeline = LimitsPipeline::new(args.limits_config());

    for page in pages {
        let (context, entries) = page.into_parts();
        let candidates_in = entries.iter().filter(|e| e.is_link()).count();
        let filtered = pipeline.filter(&context, entries);

        let mut links = Vec::new();
        let mut items = Vec::new();
        for entry in filtered {
            match entry {
                FrontierEntry::Link(link) => links.push(LinkRecord::from(link)),
                FrontierEntry::Other(item) => items.push(item),
            }
        }

        if args.json {
            let out = FilteredPage {
                url: context.url,
                links,
                items,
            };
            println!("{}", serde_json::to_string(&out)?);
        } else {
            print_summary(&context.url, candidates_in, &links);
        }
    }

    Ok(())
}

fn load_pages(input: Option<&Path>) -> Result<Vec<PageRecord>> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open page feed {}", path.display()))?;
            records::read_pages(BufReader::new(file))
                .with_context(|| format!("failed to parse page feed {}", path.display()))
        }
        None => records::read_pages(io::stdin().lock())
            .context("failed to parse page feed from stdin"),
    }
}

fn print_summary(url: &str, candidates_in: usize, admitted: &[LinkRecord]) {
    println!(
        "{} {} admitted {} of {} links",
        "✓".green().bold(),
        url.bright_white(),
        admitted.len(),
        candidates_in
    );
    for link in admitted {
        println!("  {} {}", "→".blue(), link.url);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // Logs go to stderr so --json output stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
