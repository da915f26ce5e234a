//! Endpoint URL decomposition.
//!
//! Custom endpoint URLs are broken into the parts rules compose with: scheme,
//! authority, raw path, and a normalized path guaranteed to start and end
//! with `/`. A URL that carries a query string is rejected outright — rules
//! append their own path components and a query would change its meaning.

use std::net::Ipv4Addr;

use http::Uri;

/// A decomposed endpoint URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url {
    /// URL scheme, `http` or `https`.
    pub scheme: String,
    /// Host and optional port, as written.
    pub authority: String,
    /// Raw path; empty when the URL has no path component.
    pub path: String,
    /// Path with a leading and trailing slash (`/` when the path is empty).
    pub normalized_path: String,
    /// Whether the host is an IPv4 or bracketed IPv6 literal.
    pub is_ip: bool,
}

/// Parse an endpoint URL into its parts.
///
/// Returns `None` for anything that is not an absolute `http` or `https` URL
/// with a non-empty authority, and for URLs carrying a query string.
///
/// # Examples
///
/// ```
/// use routestack_fns::parse_url;
///
/// let url = parse_url("https://example.com:8443/prefix").unwrap();
/// assert_eq!(url.scheme, "https");
/// assert_eq!(url.authority, "example.com:8443");
/// assert_eq!(url.path, "/prefix");
/// assert_eq!(url.normalized_path, "/prefix/");
/// assert!(!url.is_ip);
///
/// assert!(parse_url("https://example.com?versioned=true").is_none());
/// ```
#[must_use]
pub fn parse_url(input: &str) -> Option<Url> {
    let uri = input.parse::<Uri>().ok()?;
    if uri.query().is_some() {
        return None;
    }

    let scheme = uri.scheme_str()?;
    if scheme != "http" && scheme != "https" {
        return None;
    }
    let authority = uri.authority()?.as_str().to_owned();

    // `Uri::path` reports "/" even when the input has no path component, but
    // templates need to distinguish the two (a bare authority gets the
    // bucket appended without a separator line). Recover the raw path from
    // the input.
    let after_scheme = &input[scheme.len() + "://".len()..];
    let path = match after_scheme.find('/') {
        Some(idx) => after_scheme[idx..].to_owned(),
        None => String::new(),
    };

    let normalized_path = if path.is_empty() {
        "/".to_owned()
    } else if path.ends_with('/') {
        path.clone()
    } else {
        format!("{path}/")
    };

    Some(Url {
        scheme: scheme.to_owned(),
        is_ip: host_is_ip_literal(&authority),
        authority,
        path,
        normalized_path,
    })
}

/// Check whether the authority's host is an IP literal.
fn host_is_ip_literal(authority: &str) -> bool {
    // Bracketed IPv6 literal, with or without port.
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    if host.starts_with('[') {
        return true;
    }
    // Strip a trailing `:port` before trying IPv4.
    let host = match host.rsplit_once(':') {
        Some((h, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => h,
        _ => host,
    };
    host.parse::<Ipv4Addr>().is_ok()
}
