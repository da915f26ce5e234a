//! S3-compatible endpoint resolution for RouteStack.
//!
//! Given a bag of typed parameters (region, bucket name or ARN, and the
//! S3 feature flags), the resolver deterministically computes either a fully
//! formed endpoint (URL, attributes, auth schemes) or a descriptive error
//! for an invalid or unsupported combination.
//!
//! # Architecture
//!
//! ```text
//! EndpointParams (caller configuration)
//!        |
//!        v
//!   Bank (per-call register bank, seeded from params)
//!        |
//!        v
//!   Decision graph walk (static node table + predicate dispatch)
//!        |
//!        v
//!   Terminal (endpoint template or error template)
//!        |
//!        v
//!   Endpoint | EndpointError
//! ```
//!
//! The decision graph is a reduced ordered binary decision diagram with
//! complemented edges, compiled offline from the service's routing rules and
//! checked in as a flat table of `{condition, high, low}` entries. One small
//! iterative interpreter walks it; predicates lazily parse and memoize
//! derived values (ARNs, URLs, partitions) into the per-call bank, so the
//! graph shares subtrees freely without re-deriving anything.
//!
//! # Examples
//!
//! ```
//! use routestack_s3::{EndpointParams, resolve_endpoint};
//!
//! let params = EndpointParams::builder()
//!     .region("us-west-2")
//!     .bucket("my-bucket")
//!     .build();
//! let endpoint = resolve_endpoint(&params).unwrap();
//! assert_eq!(endpoint.url, "https://my-bucket.s3.us-west-2.amazonaws.com");
//! ```

mod bank;
mod cache;
mod graph;
mod params;
mod predicates;
mod resolver;
mod table;
mod terminals;

pub use cache::CachedResolver;
pub use params::EndpointParams;
pub use resolver::resolve_endpoint;
pub use routestack_core::{AuthScheme, Endpoint, EndpointError, Region};
