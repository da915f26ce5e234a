//! Endpoint resolution parameters.
//!
//! [`EndpointParams`] carries everything resolution depends on. The six core
//! feature flags are modeled as `Option<bool>` that the builder defaults to
//! `Some(false)`: the resolver requires them to be present and fails with a
//! missing-parameter error when a caller constructs params with one unset.
//! The remaining flags are genuinely tri-state (absent means "not
//! configured", which routes differently from `false` in places).

use routestack_core::Region;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Parameters for a single endpoint resolution.
///
/// # Examples
///
/// ```
/// use routestack_s3::EndpointParams;
///
/// let params = EndpointParams::builder()
///     .region("us-west-2")
///     .bucket("my-bucket")
///     .accelerate(true)
///     .build();
/// assert_eq!(params.accelerate, Some(true));
/// assert_eq!(params.use_fips, Some(false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointParams {
    /// Region to resolve the endpoint in.
    #[builder(default, setter(strip_option, into))]
    pub region: Option<Region>,

    /// Bucket to address: a plain bucket name, an access-point alias, or an
    /// ARN string.
    #[builder(default, setter(strip_option, into))]
    pub bucket: Option<String>,

    /// Custom endpoint URL overriding the built hostname.
    #[builder(default, setter(strip_option, into))]
    pub endpoint: Option<String>,

    /// Object key of the request, when one exists.
    #[builder(default, setter(strip_option, into))]
    pub key: Option<String>,

    /// Listing prefix of the request, when one exists.
    #[builder(default, setter(strip_option, into))]
    pub prefix: Option<String>,

    /// Copy source of the request, when one exists.
    #[builder(default, setter(strip_option, into))]
    pub copy_source: Option<String>,

    /// Use FIPS-compliant endpoints. Required.
    #[builder(default = Some(false), setter(strip_option))]
    pub use_fips: Option<bool>,

    /// Use dual-stack (IPv4 + IPv6) endpoints. Required.
    #[builder(default = Some(false), setter(strip_option))]
    pub use_dual_stack: Option<bool>,

    /// Force path-style addressing. Required.
    #[builder(default = Some(false), setter(strip_option))]
    pub force_path_style: Option<bool>,

    /// Use transfer-acceleration endpoints. Required.
    #[builder(default = Some(false), setter(strip_option))]
    pub accelerate: Option<bool>,

    /// Prefer the legacy global endpoint for `us-east-1`. Required.
    #[builder(default = Some(false), setter(strip_option))]
    pub use_global_endpoint: Option<bool>,

    /// Refuse Multi-Region Access Point ARNs. Required.
    #[builder(default = Some(false), setter(strip_option))]
    pub disable_multi_region_access_points: Option<bool>,

    /// Route through an Object Lambda endpoint.
    #[builder(default, setter(strip_option))]
    pub use_object_lambda_endpoint: Option<bool>,

    /// Honor the region inside a bucket ARN instead of requiring it to match
    /// the client region.
    #[builder(default, setter(strip_option))]
    pub use_arn_region: Option<bool>,

    /// Refuse access-point ARNs entirely.
    #[builder(default, setter(strip_option))]
    pub disable_access_points: Option<bool>,

    /// Address the S3 Express control plane rather than a zonal endpoint.
    #[builder(default, setter(strip_option))]
    pub use_s3_express_control_endpoint: Option<bool>,

    /// Sign S3 Express requests with plain SigV4 instead of session auth.
    #[builder(default, setter(strip_option))]
    pub disable_s3_express_session_auth: Option<bool>,
}

impl Default for EndpointParams {
    fn default() -> Self {
        Self {
            region: None,
            bucket: None,
            endpoint: None,
            key: None,
            prefix: None,
            copy_source: None,
            use_fips: Some(false),
            use_dual_stack: Some(false),
            force_path_style: Some(false),
            accelerate: Some(false),
            use_global_endpoint: Some(false),
            disable_multi_region_access_points: Some(false),
            use_object_lambda_endpoint: None,
            use_arn_region: None,
            disable_access_points: None,
            use_s3_express_control_endpoint: None,
            disable_s3_express_session_auth: None,
        }
    }
}

impl EndpointParams {
    /// Load parameters from environment variables.
    ///
    /// Reads the following variables on top of the defaults (first match
    /// wins where alternatives are listed):
    ///
    /// | Variable | Parameter |
    /// |----------|-----------|
    /// | `AWS_REGION`, `AWS_DEFAULT_REGION` | `region` |
    /// | `AWS_ENDPOINT_URL_S3`, `AWS_ENDPOINT_URL` | `endpoint` |
    /// | `AWS_USE_FIPS_ENDPOINT` | `use_fips` |
    /// | `AWS_USE_DUALSTACK_ENDPOINT` | `use_dual_stack` |
    /// | `AWS_S3_FORCE_PATH_STYLE` | `force_path_style` |
    /// | `AWS_S3_ACCELERATE` | `accelerate` |
    /// | `AWS_S3_USE_ARN_REGION` | `use_arn_region` |
    /// | `AWS_S3_DISABLE_MULTIREGION_ACCESS_POINTS` | `disable_multi_region_access_points` |
    /// | `AWS_S3_DISABLE_EXPRESS_SESSION_AUTH` | `disable_s3_express_session_auth` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut params = Self::default();

        if let Ok(v) = std::env::var("AWS_REGION").or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
        {
            params.region = Some(Region::new(v));
        }
        if let Ok(v) =
            std::env::var("AWS_ENDPOINT_URL_S3").or_else(|_| std::env::var("AWS_ENDPOINT_URL"))
        {
            params.endpoint = Some(v);
        }
        if let Ok(v) = std::env::var("AWS_USE_FIPS_ENDPOINT") {
            params.use_fips = Some(parse_bool(&v));
        }
        if let Ok(v) = std::env::var("AWS_USE_DUALSTACK_ENDPOINT") {
            params.use_dual_stack = Some(parse_bool(&v));
        }
        if let Ok(v) = std::env::var("AWS_S3_FORCE_PATH_STYLE") {
            params.force_path_style = Some(parse_bool(&v));
        }
        if let Ok(v) = std::env::var("AWS_S3_ACCELERATE") {
            params.accelerate = Some(parse_bool(&v));
        }
        if let Ok(v) = std::env::var("AWS_S3_USE_ARN_REGION") {
            params.use_arn_region = Some(parse_bool(&v));
        }
        if let Ok(v) = std::env::var("AWS_S3_DISABLE_MULTIREGION_ACCESS_POINTS") {
            params.disable_multi_region_access_points = Some(parse_bool(&v));
        }
        if let Ok(v) = std::env::var("AWS_S3_DISABLE_EXPRESS_SESSION_AUTH") {
            params.disable_s3_express_session_auth = Some(parse_bool(&v));
        }

        params
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
