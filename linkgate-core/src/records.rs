use crate::error::RecordError;
use crate::model::{FrontierEntry, LinkCandidate, PageContext};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// One link as it appears in a page feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_internal_links: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_external_links: Option<usize>,
}

impl From<LinkCandidate> for LinkRecord {
    fn from(link: LinkCandidate) -> Self {
        Self {
            url: link.url,
            max_internal_links: link.max_internal_links,
            max_external_links: link.max_external_links,
        }
    }
}

impl From<LinkRecord> for LinkCandidate {
    fn from(record: LinkRecord) -> Self {
        Self {
            url: record.url,
            max_internal_links: record.max_internal_links,
            max_external_links: record.max_external_links,
        }
    }
}

/// One fetched page in a JSON-lines feed: the page URL, the links found
/// on it, and any non-link payload items to carry through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub url: String,
    #[serde(default)]
    pub skip_limits: bool,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

impl PageRecord {
    /// Split into the pipeline's invocation arguments.
    pub fn into_parts(self) -> (PageContext, Vec<FrontierEntry<serde_json::Value>>) {
        let context = PageContext::new(self.url).with_skip_limits(self.skip_limits);
        let mut entries: Vec<FrontierEntry<serde_json::Value>> = self
            .links
            .into_iter()
            .map(|link| FrontierEntry::Link(link.into()))
            .collect();
        entries.extend(self.items.into_iter().map(FrontierEntry::Other));
        (context, entries)
    }
}

/// Read a JSON-lines page feed. Blank lines are skipped; a malformed
/// line reports its 1-based line number.
pub fn read_pages(reader: impl BufRead) -> Result<Vec<PageRecord>, RecordError> {
    let mut pages = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let page = serde_json::from_str(trimmed).map_err(|source| RecordError::Json {
            line: idx + 1,
            source,
        })?;
        pages.push(page);
    }
    Ok(pages)
}
