//! Shared rule functions for RouteStack endpoint resolution.
//!
//! This crate provides the pure helper functions that endpoint decision rules
//! are built from: ARN parsing, partition lookup, host-label and
//! virtual-hostable-bucket validation, URL decomposition, URI encoding, and
//! ASCII substring extraction. Every function is deterministic, performs no
//! I/O, and reports unusable input as `None`/`false` rather than an error —
//! rules treat an absent value as an ordinary branch condition.

pub mod arn;
pub mod host;
pub mod partition;
pub mod strings;
pub mod url;

pub use arn::Arn;
pub use host::{is_valid_host_label, is_virtual_hostable_s3_bucket};
pub use partition::{Partition, resolve_partition};
pub use strings::{substring, uri_encode};
pub use url::{Url, parse_url};
