//! Common type definitions shared across RouteStack crates.

use std::fmt;

/// Region identifier.
///
/// Carries the region string (e.g. `us-west-2`, `aws-global`) without
/// validating it; whether a region is usable is a resolution decision, not a
/// construction error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Region(String);

impl Region {
    /// Create a new region.
    ///
    /// # Examples
    ///
    /// ```
    /// use routestack_core::Region;
    ///
    /// let region = Region::new("eu-west-1");
    /// assert_eq!(region.as_str(), "eu-west-1");
    /// ```
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Get the region id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Region {
    fn from(region: &str) -> Self {
        Self::new(region)
    }
}

impl From<String> for Region {
    fn from(region: String) -> Self {
        Self(region)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
