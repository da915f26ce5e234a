//! Core types for RouteStack endpoint resolution.
//!
//! This crate provides the value objects shared across the RouteStack
//! resolver crates: the resolved [`Endpoint`] with its auth schemes and
//! attributes, the [`EndpointError`] taxonomy, and the [`Region`] newtype.

mod endpoint;
mod error;
mod types;

pub use endpoint::{ATTR_BACKEND, AuthScheme, Endpoint};
pub use error::{EndpointError, ErrorKind};
pub use types::Region;
