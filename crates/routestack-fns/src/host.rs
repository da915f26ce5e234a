//! Host-label and bucket-name validation.
//!
//! Follows the DNS label rules used for endpoint construction and the
//! [Amazon S3 bucket naming rules](https://docs.aws.amazon.com/AmazonS3/latest/userguide/bucketnamingrules.html)
//! for virtual-hosted-style addressing.

use std::net::Ipv4Addr;

/// Minimum length for a virtual-hostable bucket name.
const MIN_BUCKET_NAME_LEN: usize = 3;

/// Maximum length for a DNS label or virtual-hostable bucket name.
const MAX_LABEL_LEN: usize = 63;

/// Check whether a value is a valid DNS host label.
///
/// A label is 1-63 characters of ASCII letters, digits, and hyphens, and must
/// start with a letter or digit. With `allow_dots`, the value is split on `.`
/// and every segment must be a valid label on its own (so consecutive dots or
/// a leading/trailing dot fail).
///
/// # Examples
///
/// ```
/// use routestack_fns::is_valid_host_label;
///
/// assert!(is_valid_host_label("us-west-2", false));
/// assert!(is_valid_host_label("part1.part2", true));
/// assert!(!is_valid_host_label("part1.part2", false));
/// assert!(!is_valid_host_label("-start", false));
/// ```
#[must_use]
pub fn is_valid_host_label(value: &str, allow_dots: bool) -> bool {
    if allow_dots {
        return !value.is_empty() && value.split('.').all(|label| is_valid_host_label(label, false));
    }

    if value.is_empty() || value.len() > MAX_LABEL_LEN {
        return false;
    }

    let bytes = value.as_bytes();
    if !bytes[0].is_ascii_alphanumeric() {
        return false;
    }

    bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

/// Check whether a bucket name can be used in virtual-hosted-style addressing.
///
/// Rules:
/// - 3-63 characters long
/// - Only lowercase letters, digits, and hyphens
/// - Must start and end with a letter or digit
/// - With `allow_subdomains`, each dot-separated segment must satisfy the
///   rules above and the whole name must not be formatted as an IPv4 address
///
/// # Examples
///
/// ```
/// use routestack_fns::is_virtual_hostable_s3_bucket;
///
/// assert!(is_virtual_hostable_s3_bucket("my-bucket", false));
/// assert!(!is_virtual_hostable_s3_bucket("MyBucket", false));
/// assert!(is_virtual_hostable_s3_bucket("bucket.with.dots", true));
/// assert!(!is_virtual_hostable_s3_bucket("192.168.1.1", true));
/// ```
#[must_use]
pub fn is_virtual_hostable_s3_bucket(bucket: &str, allow_subdomains: bool) -> bool {
    if allow_subdomains {
        if bucket.parse::<Ipv4Addr>().is_ok() {
            return false;
        }
        return !bucket.is_empty()
            && bucket
                .split('.')
                .all(|segment| is_virtual_hostable_s3_bucket(segment, false));
    }

    if bucket.len() < MIN_BUCKET_NAME_LEN || bucket.len() > MAX_LABEL_LEN {
        return false;
    }

    let bytes = bucket.as_bytes();
    let edge_ok = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    if !edge_ok(bytes[0]) || !edge_ok(bytes[bytes.len() - 1]) {
        return false;
    }

    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}
