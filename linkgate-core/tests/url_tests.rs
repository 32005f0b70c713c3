// Tests for URL normalization and classification helpers

use linkgate_core::urls::{add_scheme_if_missing, domain_key, hostname, is_external_url};

// ============================================================================
// Scheme Defaulting Tests
// ============================================================================

#[test]
fn test_add_scheme_when_missing() {
    assert_eq!(add_scheme_if_missing("example.com"), "http://example.com");
}

#[test]
fn test_add_scheme_keeps_https() {
    assert_eq!(add_scheme_if_missing("https://example.com"), "https://example.com");
}

#[test]
fn test_add_scheme_keeps_ftp() {
    assert_eq!(add_scheme_if_missing("ftp://example.com"), "ftp://example.com");
}

#[test]
fn test_add_scheme_trims_whitespace() {
    assert_eq!(add_scheme_if_missing("  example.com "), "http://example.com");
}

#[test]
fn test_add_scheme_ignores_bare_separator() {
    // "://" with no scheme letters in front is not a scheme prefix
    assert_eq!(add_scheme_if_missing("://example.com"), "http://://example.com");
}

// ============================================================================
// Hostname Normalization Tests
// ============================================================================

#[test]
fn test_hostname_plain() {
    assert_eq!(hostname("http://example.com/sdf"), "example.com");
}

#[test]
fn test_hostname_strips_www() {
    assert_eq!(hostname("http://www.example.com/"), "example.com");
}

#[test]
fn test_hostname_strips_www_with_digits() {
    assert_eq!(hostname("http://www2.example.com/"), "example.com");
}

#[test]
fn test_hostname_strips_www_before_subdomain() {
    assert_eq!(hostname("http://www.static.example.com/"), "static.example.com");
}

#[test]
fn test_hostname_keeps_awww_label() {
    assert_eq!(
        hostname("http://awww.static.example.com/"),
        "awww.static.example.com"
    );
}

#[test]
fn test_hostname_keeps_wwww_label() {
    // "www" must be followed by digits and a dot to be stripped
    assert_eq!(hostname("http://wwww.example.com/"), "wwww.example.com");
}

#[test]
fn test_hostname_scheme_less_input() {
    assert_eq!(hostname("fsdf"), "fsdf");
}

#[test]
fn test_hostname_ip_address() {
    assert_eq!(hostname("127.0.0.1"), "127.0.0.1");
}

#[test]
fn test_hostname_unparsable_is_empty() {
    assert_eq!(hostname("http://bad host/"), "");
}

#[test]
fn test_hostname_parser_canonicalizes_case() {
    // The url crate lowercases hosts during parsing; no explicit case
    // handling happens on top of that.
    assert_eq!(hostname("http://WWW.Example.COM/"), "example.com");
}

// ============================================================================
// Domain Key Tests
// ============================================================================

#[test]
fn test_domain_key_plain() {
    assert_eq!(domain_key("http://example.com/foo"), "example.com");
}

#[test]
fn test_domain_key_drops_port() {
    assert_eq!(domain_key("http://example.com:8080/foo"), "example.com");
}

#[test]
fn test_domain_key_keeps_www() {
    // The counting bucket is the raw host, not the normalized hostname
    assert_eq!(domain_key("http://www.example.com/"), "www.example.com");
}

#[test]
fn test_domain_key_no_scheme_defaulting() {
    assert_eq!(domain_key("example.com/foo"), "");
}

#[test]
fn test_domain_key_ip_with_port() {
    assert_eq!(domain_key("http://127.0.0.1:8000/"), "127.0.0.1");
}

// ============================================================================
// Internal/External Classification Tests
// ============================================================================

#[test]
fn test_same_host_is_internal() {
    assert!(!is_external_url(
        "http://example.com/foo",
        "http://example.com/bar"
    ));
}

#[test]
fn test_different_host_is_external() {
    assert!(is_external_url(
        "http://example.com/foo",
        "http://example2.com/bar"
    ));
}

#[test]
fn test_www_variant_is_internal() {
    assert!(!is_external_url("http://example.com", "http://www.example.com"));
}

#[test]
fn test_subdomain_is_external() {
    // Literal hostname comparison: subdomains do not match their parent,
    // even though the reference's own doc examples claim otherwise.
    assert!(is_external_url(
        "http://example.com",
        "http://static.example.com"
    ));
}

#[test]
fn test_same_label_different_tld_is_external() {
    // Same divergence for hosts sharing a second-level label under
    // different TLDs; no public-suffix list is consulted.
    assert!(is_external_url(
        "http://example.com",
        "http://static.example.co.uk"
    ));
}

#[test]
fn test_scheme_less_candidate_same_host_is_internal() {
    assert!(!is_external_url("http://example.com/", "example.com/page"));
}

#[test]
fn test_two_unparsable_urls_are_internal() {
    // Both normalize to the empty hostname and compare equal
    assert!(!is_external_url("http://bad host/", "http://other bad/"));
}
