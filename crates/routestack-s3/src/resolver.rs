//! Resolver entry point.
//!
//! [`resolve_endpoint`] is the public surface: it validates the required
//! flags, seeds a fresh register bank, walks the decision graph, and
//! converts the terminal into the public endpoint/error types. Resolution is
//! a pure function of its parameters — identical inputs produce structurally
//! identical outputs, and a failure here must prevent any downstream request
//! from being sent.

use routestack_core::{Endpoint, EndpointError};
use tracing::{debug, trace};

use crate::bank::Bank;
use crate::graph;
use crate::params::EndpointParams;
use crate::terminals::{self, RuleResult};

/// Remediation hint appended when a bare bucket ARN was used as the bucket.
const SIMPLE_ARN_HINT: &str =
    ". Use the bucket name instead of simple bucket ARNs in GetBucketLocationRequest.";

/// Resolve the endpoint for one request.
///
/// # Errors
///
/// Returns [`EndpointError::MissingParameter`] when one of the six required
/// flags is unset, and the rule-produced error for invalid or unsupported
/// parameter combinations. [`EndpointError::Unresolved`] indicates a defect
/// in the compiled rule table and is not reachable from any input.
///
/// # Examples
///
/// ```
/// use routestack_s3::{EndpointParams, resolve_endpoint};
///
/// let params = EndpointParams::builder()
///     .region("us-east-1")
///     .bucket("my-bucket")
///     .use_global_endpoint(true)
///     .build();
/// assert_eq!(resolve_endpoint(&params).unwrap().url, "https://my-bucket.s3.amazonaws.com");
/// ```
pub fn resolve_endpoint(params: &EndpointParams) -> Result<Endpoint, EndpointError> {
    validate_required_flags(params)?;

    let mut bank = Bank::seed(params);
    debug!(
        region = bank.region.as_deref(),
        bucket = bank.bucket.as_deref(),
        endpoint = bank.endpoint.as_deref(),
        key = bank.key.as_deref(),
        prefix = bank.prefix.as_deref(),
        copy_source = bank.copy_source.as_deref(),
        "resolving endpoint"
    );

    let terminal = graph::walk(&mut bank).map_err(|_| EndpointError::Unresolved)?;
    trace!(terminal, "decision graph reached terminal");

    match terminals::produce(terminal, &bank).ok_or(EndpointError::Unresolved)? {
        RuleResult::Endpoint(endpoint) => {
            debug!(url = %endpoint.url, "resolved endpoint");
            Ok(endpoint)
        }
        RuleResult::Error { kind, message } => {
            let message = augment_simple_arn_error(message);
            debug!(error = %message, "endpoint resolution failed");
            Err(kind.into_error(message))
        }
    }
}

/// The six flags every resolution must supply.
fn validate_required_flags(params: &EndpointParams) -> Result<(), EndpointError> {
    let required: [(&str, Option<bool>); 6] = [
        ("UseFIPS", params.use_fips),
        ("UseDualStack", params.use_dual_stack),
        ("ForcePathStyle", params.force_path_style),
        ("Accelerate", params.accelerate),
        ("UseGlobalEndpoint", params.use_global_endpoint),
        ("DisableMultiRegionAccessPoints", params.disable_multi_region_access_points),
    ];
    for (name, value) in required {
        if value.is_none() {
            return Err(EndpointError::MissingParameter { name: name.to_owned() });
        }
    }
    Ok(())
}

/// Historical message rewrite: a simple bucket ARN (`arn:…:s3:::name`) used
/// where a bucket name belongs gets a remediation hint appended.
fn augment_simple_arn_error(message: String) -> String {
    if message.contains("Invalid ARN") && message.contains(":s3:::") {
        let mut message = message;
        message.push_str(SIMPLE_ARN_HINT);
        message
    } else {
        message
    }
}
