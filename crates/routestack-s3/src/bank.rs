//! Per-call register bank.
//!
//! Every resolution allocates one [`Bank`]: the input registers are bound
//! once from [`EndpointParams`](crate::EndpointParams), and each derived
//! register is written at most once, by the predicate that first needs it,
//! then read freely downstream. The node table guarantees that every path
//! reaching a reader passes through the writer first (checked by the
//! dominance test over the table), so the bank itself does no bookkeeping —
//! derived registers are plain `Option`s that start out `None`.

use routestack_fns::{Arn, Partition, Url};

use crate::params::EndpointParams;

/// Identifier for each derived register, used to describe which registers a
/// predicate or terminal touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Slot {
    /// Auth flavor for S3 Express requests (`sigv4` or `sigv4-s3express`).
    S3ExpressAuth,
    /// Last seven characters of the bucket, for alias detection.
    AliasSuffix,
    /// Region marker inside an S3 Express alias.
    RegionPrefix,
    /// Outpost id embedded in an Outposts bucket alias.
    OutpostIdSuffix,
    /// Hardware type character of an Outposts bucket alias.
    HardwareType,
    /// `-fips` host infix, or empty.
    S3ExpressFips,
    /// `.dualstack` host infix, or empty.
    S3ExpressDualStack,
    /// Partition of the client region (alias-addressing paths).
    RegionPartition,
    /// Partition of the client region (main paths).
    Partition,
    /// Parsed custom endpoint URL.
    Url,
    /// Parsed bucket ARN.
    Arn,
    /// URI-encoded bucket name.
    EncodedBucket,
    /// First resource segment of the bucket ARN.
    ArnType,
    /// Access point name from the bucket ARN.
    AccessPointName,
    /// Outpost id from the bucket ARN.
    OutpostId,
    /// Partition of the ARN's region.
    ArnPartition,
    /// Availability-zone id from an S3 Express bucket name.
    ExpressAzId,
    /// Third resource segment of an Outposts ARN.
    OutpostType,
    /// Access point name of an Outposts ARN.
    OutpostAccessPointName,
    /// Partition of the client region (multi-region access point paths).
    MrapPartition,
}

/// The register bank for one resolution call.
#[derive(Debug, Default)]
pub(crate) struct Bank {
    // Input registers, bound once at seed time.
    pub(crate) region: Option<String>,
    pub(crate) bucket: Option<String>,
    pub(crate) endpoint: Option<String>,
    pub(crate) use_fips: bool,
    pub(crate) use_dual_stack: bool,
    pub(crate) force_path_style: bool,
    pub(crate) accelerate: bool,
    pub(crate) use_global_endpoint: bool,
    pub(crate) disable_multi_region_access_points: bool,
    pub(crate) use_object_lambda_endpoint: Option<bool>,
    pub(crate) use_arn_region: Option<bool>,
    pub(crate) disable_access_points: Option<bool>,
    pub(crate) use_s3_express_control_endpoint: Option<bool>,
    pub(crate) disable_s3_express_session_auth: Option<bool>,
    pub(crate) key: Option<String>,
    pub(crate) prefix: Option<String>,
    pub(crate) copy_source: Option<String>,

    // Derived registers, written once by their predicate.
    pub(crate) s3_express_auth: Option<String>,
    pub(crate) alias_suffix: Option<String>,
    pub(crate) region_prefix: Option<String>,
    pub(crate) outpost_id_suffix: Option<String>,
    pub(crate) hardware_type: Option<String>,
    pub(crate) s3_express_fips: Option<String>,
    pub(crate) s3_express_dual_stack: Option<String>,
    pub(crate) region_partition: Option<Partition>,
    pub(crate) partition: Option<Partition>,
    pub(crate) url: Option<Url>,
    pub(crate) arn: Option<Arn>,
    pub(crate) encoded_bucket: Option<String>,
    pub(crate) arn_type: Option<String>,
    pub(crate) access_point_name: Option<String>,
    pub(crate) outpost_id: Option<String>,
    pub(crate) arn_partition: Option<Partition>,
    pub(crate) express_az_id: Option<String>,
    pub(crate) outpost_type: Option<String>,
    pub(crate) outpost_access_point_name: Option<String>,
    pub(crate) mrap_partition: Option<Partition>,
}

impl Bank {
    /// Bind the input registers from caller parameters. The region object is
    /// flattened to its id string; required flags have already been
    /// validated by the resolver and default to `false` here.
    pub(crate) fn seed(params: &EndpointParams) -> Self {
        Self {
            region: params.region.as_ref().map(|r| r.as_str().to_owned()),
            bucket: params.bucket.clone(),
            endpoint: params.endpoint.clone(),
            use_fips: params.use_fips.unwrap_or(false),
            use_dual_stack: params.use_dual_stack.unwrap_or(false),
            force_path_style: params.force_path_style.unwrap_or(false),
            accelerate: params.accelerate.unwrap_or(false),
            use_global_endpoint: params.use_global_endpoint.unwrap_or(false),
            disable_multi_region_access_points: params
                .disable_multi_region_access_points
                .unwrap_or(false),
            use_object_lambda_endpoint: params.use_object_lambda_endpoint,
            use_arn_region: params.use_arn_region,
            disable_access_points: params.disable_access_points,
            use_s3_express_control_endpoint: params.use_s3_express_control_endpoint,
            disable_s3_express_session_auth: params.disable_s3_express_session_auth,
            key: params.key.clone(),
            prefix: params.prefix.clone(),
            copy_source: params.copy_source.clone(),
            ..Self::default()
        }
    }

    /// Fixed-offset substring of the bucket register.
    pub(crate) fn bucket_substring(
        &self,
        start: usize,
        stop: usize,
        from_end: bool,
    ) -> Option<&str> {
        self.bucket
            .as_deref()
            .and_then(|bucket| routestack_fns::substring(bucket, start, stop, from_end))
    }
}
