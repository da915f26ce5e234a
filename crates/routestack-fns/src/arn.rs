//! ARN parsing.
//!
//! An ARN has the shape `arn:partition:service:region:account-id:resource`.
//! The first five components are split on `:`; the trailing resource section
//! is further split on both `:` and `/` into ordered segments, because
//! resource paths appear in both styles (`outpost/op-123/accesspoint/name`
//! and `outpost:op-123:accesspoint:name`).

/// A parsed Amazon Resource Name.
///
/// `region` and `account_id` may legitimately be empty strings (for example
/// in a Multi-Region Access Point ARN the region is empty); emptiness is a
/// routing decision, not a parse failure. `partition`, `service`, and the
/// resource section must be non-empty for the ARN to parse at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arn {
    /// Partition the resource lives in (e.g. `aws`, `aws-cn`).
    pub partition: String,
    /// Service namespace (e.g. `s3`, `s3-outposts`).
    pub service: String,
    /// Region component, possibly empty.
    pub region: String,
    /// Account id component, possibly empty.
    pub account_id: String,
    /// Resource section split on `:` and `/`, in order.
    pub resource_id: Vec<String>,
}

impl Arn {
    /// Parse an ARN string.
    ///
    /// Returns `None` when the input does not have six `:`-separated
    /// components, does not start with the literal `arn`, or has an empty
    /// partition, service, or resource section.
    ///
    /// # Examples
    ///
    /// ```
    /// use routestack_fns::Arn;
    ///
    /// let arn = Arn::parse("arn:aws:s3:us-west-2:123456789012:accesspoint:myap").unwrap();
    /// assert_eq!(arn.service, "s3");
    /// assert_eq!(arn.resource_id, vec!["accesspoint", "myap"]);
    ///
    /// assert!(Arn::parse("arn:not:valid").is_none());
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.splitn(6, ':');
        let prefix = parts.next()?;
        let partition = parts.next()?;
        let service = parts.next()?;
        let region = parts.next()?;
        let account_id = parts.next()?;
        let resource = parts.next()?;

        if prefix != "arn" || partition.is_empty() || service.is_empty() || resource.is_empty() {
            return None;
        }

        Some(Self {
            partition: partition.to_owned(),
            service: service.to_owned(),
            region: region.to_owned(),
            account_id: account_id.to_owned(),
            resource_id: resource
                .split([':', '/'])
                .map(ToOwned::to_owned)
                .collect(),
        })
    }

    /// Get a resource segment by position, if present.
    #[must_use]
    pub fn resource_part(&self, index: usize) -> Option<&str> {
        self.resource_id.get(index).map(String::as_str)
    }
}
