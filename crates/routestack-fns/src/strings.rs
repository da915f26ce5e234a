//! String helpers used by endpoint rules.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except RFC 3986 unreserved characters gets percent-encoded.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Extract a substring by character offsets.
///
/// Offsets count from the start of the string, or from the end when
/// `from_end` is set (so `substring(s, 0, 6, true)` is the last six
/// characters). Returns `None` for non-ASCII input, when the string is
/// shorter than `stop`, or when the range is empty or inverted.
///
/// # Examples
///
/// ```
/// use routestack_fns::substring;
///
/// assert_eq!(substring("my-bucket--x-s3", 0, 6, true), Some("--x-s3"));
/// assert_eq!(substring("arn:aws:s3", 0, 4, false), Some("arn:"));
/// assert_eq!(substring("short", 0, 10, false), None);
/// ```
#[must_use]
pub fn substring(input: &str, start: usize, stop: usize, from_end: bool) -> Option<&str> {
    if !input.is_ascii() || start >= stop || input.len() < stop {
        return None;
    }
    if from_end {
        Some(&input[input.len() - stop..input.len() - start])
    } else {
        Some(&input[start..stop])
    }
}

/// Percent-encode a string for use in a URI path segment.
///
/// Encodes everything except unreserved characters (`A-Z a-z 0-9 - _ . ~`),
/// including `/`, with uppercase hex digits.
///
/// # Examples
///
/// ```
/// use routestack_fns::uri_encode;
///
/// assert_eq!(uri_encode("my-bucket"), "my-bucket");
/// assert_eq!(uri_encode("a b/c"), "a%20b%2Fc");
/// ```
#[must_use]
pub fn uri_encode(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, URI_ENCODE_SET).into()
}
