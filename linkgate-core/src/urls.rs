use std::borrow::Cow;
use url::Url;

/// Prepend `http://` when the string carries no scheme prefix.
///
/// Leading/trailing whitespace is trimmed first, so `"  example.com"`
/// becomes `"http://example.com"`.
pub fn add_scheme_if_missing(url: &str) -> Cow<'_, str> {
    let url = url.trim();
    if has_scheme(url) {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("http://{}", url))
    }
}

/// A scheme prefix is one or more ASCII letters followed by `://` and at
/// least one more character.
fn has_scheme(url: &str) -> bool {
    match url.find("://") {
        Some(idx) if idx > 0 && url.len() > idx + 3 => {
            url[..idx].chars().all(|c| c.is_ascii_alphabetic())
        }
        _ => false,
    }
}

/// Return the hostname `url` belongs to, with a leading `www` label
/// (optionally followed by digits, e.g. `www2.`) stripped.
///
/// Accepts scheme-less input. Unparsable URLs yield an empty string so
/// that broken links degrade into a shared empty-hostname bucket instead
/// of aborting the caller.
pub fn hostname(url: &str) -> String {
    let url = add_scheme_if_missing(url);
    match Url::parse(&url) {
        Ok(parsed) => strip_www_label(parsed.host_str().unwrap_or("")).to_string(),
        Err(_) => String::new(),
    }
}

fn strip_www_label(host: &str) -> &str {
    let Some(rest) = host.strip_prefix("www") else {
        return host;
    };
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    match rest.strip_prefix('.') {
        Some(stripped) => stripped,
        None => host,
    }
}

/// Bucket key for crawl-wide per-domain counting: the host of `url`,
/// port dropped, no scheme defaulting and no `www` stripping.
///
/// This is deliberately a different string space from [`hostname`]:
/// `www.example.com` and `example.com` are one hostname for
/// classification but two separate counting buckets. Unparsable URLs
/// map to the empty key.
pub fn domain_key(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_default()
}

/// Return true if the two URLs are external to each other, i.e. their
/// normalized hostnames differ.
///
/// This is a literal comparison of the full `www`-stripped hostname:
/// `static.example.com` and `example.com` are external, as are hosts
/// sharing a second-level label under different TLDs. No public-suffix
/// list is consulted.
pub fn is_external_url(source_url: &str, candidate_url: &str) -> bool {
    hostname(source_url) != hostname(candidate_url)
}
