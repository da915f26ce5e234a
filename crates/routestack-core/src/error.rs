//! Endpoint resolution error types.
//!
//! Resolution fails in one of a small number of ways: a required parameter
//! was never supplied, the caller asked for mutually exclusive features, the
//! bucket ARN is malformed, a feature is unsupported where it was requested,
//! or the region cannot be placed in any partition. Each failure carries the
//! full human-readable message produced by the rule that rejected the input.

/// Endpoint resolution error.
///
/// The [`std::fmt::Display`] output of every variant is the client-facing
/// message; rule-produced variants render the message exactly as the rule
/// formatted it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    /// A required parameter was not supplied.
    #[error("Parameter '{name}' must not be null")]
    MissingParameter {
        /// Name of the missing parameter.
        name: String,
    },

    /// The requested feature combination is contradictory.
    #[error("{message}")]
    InvalidConfiguration {
        /// The rule-produced message.
        message: String,
    },

    /// The bucket ARN is malformed or has the wrong shape.
    #[error("{message}")]
    InvalidArn {
        /// The rule-produced message.
        message: String,
    },

    /// A requested feature is not supported for this endpoint flavor.
    #[error("{message}")]
    UnsupportedFeature {
        /// The rule-produced message.
        message: String,
    },

    /// The region is absent or cannot be used to form a hostname.
    #[error("{message}")]
    UnresolvableRegion {
        /// The rule-produced message.
        message: String,
    },

    /// The decision graph terminated without producing a result. Indicates a
    /// defect in the compiled rule table, never an input problem.
    #[error("Rule engine did not reach an error or endpoint result")]
    Unresolved,
}

/// Classification attached to each error-producing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Contradictory feature combination.
    InvalidConfiguration,
    /// Malformed or wrong-shaped ARN.
    InvalidArn,
    /// Feature unsupported for this endpoint flavor.
    UnsupportedFeature,
    /// Region absent or unusable.
    UnresolvableRegion,
}

impl ErrorKind {
    /// Wrap a rule-produced message into the matching error variant.
    #[must_use]
    pub fn into_error(self, message: String) -> EndpointError {
        match self {
            Self::InvalidConfiguration => EndpointError::InvalidConfiguration { message },
            Self::InvalidArn => EndpointError::InvalidArn { message },
            Self::UnsupportedFeature => EndpointError::UnsupportedFeature { message },
            Self::UnresolvableRegion => EndpointError::UnresolvableRegion { message },
        }
    }
}
