use crate::urls::is_external_url;
use serde::{Deserialize, Serialize};

/// An outbound link discovered on a page, queued for admission filtering.
///
/// The optional caps override the pipeline-wide defaults for this one
/// candidate's classification bucket only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCandidate {
    pub url: String,
    pub max_internal_links: Option<usize>,
    pub max_external_links: Option<usize>,
}

impl LinkCandidate {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_internal_links: None,
            max_external_links: None,
        }
    }

    pub fn with_max_internal_links(mut self, cap: usize) -> Self {
        self.max_internal_links = Some(cap);
        self
    }

    pub fn with_max_external_links(mut self, cap: usize) -> Self {
        self.max_external_links = Some(cap);
        self
    }
}

/// One element of a page's output sequence: either a link candidate the
/// pipeline may drop, or an opaque payload item it must pass through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontierEntry<T> {
    Link(LinkCandidate),
    Other(T),
}

impl<T> FrontierEntry<T> {
    pub fn is_link(&self) -> bool {
        matches!(self, FrontierEntry::Link(_))
    }

    pub fn as_link(&self) -> Option<&LinkCandidate> {
        match self {
            FrontierEntry::Link(link) => Some(link),
            FrontierEntry::Other(_) => None,
        }
    }
}

/// The page whose outbound links are being filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub url: String,
    /// When set, the pipeline returns this page's entries verbatim and
    /// touches no counters.
    pub skip_limits: bool,
}

impl PageContext {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            skip_limits: false,
        }
    }

    pub fn with_skip_limits(mut self, skip: bool) -> Self {
        self.skip_limits = skip;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    Internal,
    External,
}

impl LinkClass {
    /// Classify `candidate_url` relative to the page it was found on.
    pub fn of(source_url: &str, candidate_url: &str) -> Self {
        if is_external_url(source_url, candidate_url) {
            LinkClass::External
        } else {
            LinkClass::Internal
        }
    }

    /// Classification over already-normalized hostnames.
    pub fn of_hosts(source_host: &str, candidate_host: &str) -> Self {
        if source_host == candidate_host {
            LinkClass::Internal
        } else {
            LinkClass::External
        }
    }
}
