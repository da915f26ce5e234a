//! Terminal dispatch for the decision graph.
//!
//! Each terminal id names either an endpoint template (URL composed from
//! bank registers plus attributes and auth schemes) or an error template
//! (fixed message, optionally interpolating the offending value, tagged with
//! its [`ErrorKind`]). The near-duplicate template family is collapsed onto
//! shared composition helpers; each id is one short arm.
//!
//! [`produce`] returns `None` when a template reads a register no predicate
//! wrote, which the table's dominance guarantee rules out; the resolver
//! surfaces that as an internal defect rather than panicking.

use routestack_core::{ATTR_BACKEND, AuthScheme, Endpoint, ErrorKind};

use crate::bank::{Bank, Slot};

/// Backend attribute value for S3 Express endpoints.
const EXPRESS_BACKEND: &str = "S3Express";

/// The outcome of a graph walk: exactly one endpoint or one error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RuleResult {
    /// A fully formed endpoint.
    Endpoint(Endpoint),
    /// A rejection with its classification and client-facing message.
    Error {
        /// Error classification.
        kind: ErrorKind,
        /// The formatted message.
        message: String,
    },
}

fn ep(endpoint: Endpoint) -> Option<RuleResult> {
    Some(RuleResult::Endpoint(endpoint))
}

fn err(kind: ErrorKind, message: impl Into<String>) -> Option<RuleResult> {
    Some(RuleResult::Error { kind, message: message.into() })
}

/// Mark an endpoint as belonging to the S3 Express backend.
fn express(endpoint: Endpoint) -> Endpoint {
    endpoint.with_attribute(ATTR_BACKEND, EXPRESS_BACKEND)
}

/// The session-or-plain auth scheme an S3 Express endpoint carries, chosen
/// from the memoized auth-flavor register.
fn express_auth(bank: &Bank) -> Option<AuthScheme> {
    let region = bank.region.as_deref()?;
    let scheme = match bank.s3_express_auth.as_deref()? {
        "sigv4" => AuthScheme::sigv4("s3express", region),
        _ => AuthScheme::s3_express_session("s3express", region),
    };
    Some(scheme)
}

/// Outposts endpoints offer SigV4a over the wildcard region set first, then
/// regional SigV4.
fn with_outposts_auth(endpoint: Endpoint, signing_region: &str) -> Endpoint {
    endpoint
        .with_auth_scheme(AuthScheme::sigv4a_global("s3-outposts"))
        .with_auth_scheme(AuthScheme::sigv4("s3-outposts", signing_region))
}

/// Produce the result for terminal `id`.
#[allow(clippy::too_many_lines)] // Flat dispatch over the compiled terminal ids.
pub(crate) fn produce(id: u16, bank: &Bank) -> Option<RuleResult> {
    use ErrorKind::{InvalidArn, InvalidConfiguration, UnresolvableRegion, UnsupportedFeature};

    match id {
        0 => err(InvalidConfiguration, "Accelerate cannot be used with FIPS"),
        1 => err(InvalidConfiguration, "Cannot set dual-stack in combination with a custom endpoint."),
        2 => err(InvalidConfiguration, "A custom endpoint cannot be combined with FIPS"),
        3 => err(InvalidConfiguration, "A custom endpoint cannot be combined with S3 Accelerate"),
        4 => err(UnsupportedFeature, "Partition does not support FIPS"),
        5 => err(UnsupportedFeature, "S3Express does not support S3 Accelerate."),
        6 => {
            let url = bank.url.as_ref()?;
            let encoded_bucket = bank.encoded_bucket.as_deref()?;
            ep(express(Endpoint::new(format!(
                "{}://{}/{}{}",
                url.scheme, url.authority, encoded_bucket, url.path
            )))
            .with_auth_scheme(express_auth(bank)?))
        }
        7 => {
            let url = bank.url.as_ref()?;
            let bucket = bank.bucket.as_deref()?;
            ep(express(Endpoint::new(format!(
                "{}://{}.{}{}",
                url.scheme, bucket, url.authority, url.path
            )))
            .with_auth_scheme(express_auth(bank)?))
        }
        8 => err(InvalidConfiguration, "S3Express bucket name is not a valid virtual hostable name."),
        9 => {
            let region = bank.region.as_deref()?;
            let partition = bank.partition.as_ref()?;
            ep(express(Endpoint::new(format!(
                "https://s3express-control{}{}.{}.{}/{}",
                bank.s3_express_fips.as_deref()?,
                bank.s3_express_dual_stack.as_deref()?,
                region,
                partition.dns_suffix,
                bank.encoded_bucket.as_deref()?
            )))
            .with_auth_scheme(AuthScheme::sigv4("s3express", region)))
        }
        10 => {
            let region = bank.region.as_deref()?;
            let partition = bank.partition.as_ref()?;
            ep(express(Endpoint::new(format!(
                "https://{}.s3express{}-{}{}.{}.{}",
                bank.bucket.as_deref()?,
                bank.s3_express_fips.as_deref()?,
                bank.express_az_id.as_deref()?,
                bank.s3_express_dual_stack.as_deref()?,
                region,
                partition.dns_suffix
            )))
            .with_auth_scheme(express_auth(bank)?))
        }
        11 => err(InvalidConfiguration, "Unrecognized S3Express bucket name format."),
        12 => {
            let url = bank.url.as_ref()?;
            ep(express(Endpoint::new(format!("{}://{}{}", url.scheme, url.authority, url.path)))
                .with_auth_scheme(express_auth(bank)?))
        }
        13 => {
            let region = bank.region.as_deref()?;
            let partition = bank.partition.as_ref()?;
            ep(express(Endpoint::new(format!(
                "https://s3express-control{}{}.{}.{}",
                bank.s3_express_fips.as_deref()?,
                bank.s3_express_dual_stack.as_deref()?,
                region,
                partition.dns_suffix
            )))
            .with_auth_scheme(AuthScheme::sigv4("s3express", region)))
        }
        14 => err(InvalidConfiguration, "Expected a endpoint to be specified but no endpoint was found"),
        15 => {
            let url = bank.url.as_ref()?;
            ep(with_outposts_auth(
                Endpoint::new(format!("https://{}.ec2.{}", bank.bucket.as_deref()?, url.authority)),
                bank.region.as_deref()?,
            ))
        }
        16 => {
            let region = bank.region.as_deref()?;
            let partition = bank.region_partition.as_ref()?;
            ep(with_outposts_auth(
                Endpoint::new(format!(
                    "https://{}.ec2.s3-outposts.{}.{}",
                    bank.bucket.as_deref()?,
                    region,
                    partition.dns_suffix
                )),
                region,
            ))
        }
        17 => {
            let url = bank.url.as_ref()?;
            ep(with_outposts_auth(
                Endpoint::new(format!(
                    "https://{}.op-{}.{}",
                    bank.bucket.as_deref()?,
                    bank.outpost_id_suffix.as_deref()?,
                    url.authority
                )),
                bank.region.as_deref()?,
            ))
        }
        18 => {
            let region = bank.region.as_deref()?;
            let partition = bank.region_partition.as_ref()?;
            ep(with_outposts_auth(
                Endpoint::new(format!(
                    "https://{}.op-{}.s3-outposts.{}.{}",
                    bank.bucket.as_deref()?,
                    bank.outpost_id_suffix.as_deref()?,
                    region,
                    partition.dns_suffix
                )),
                region,
            ))
        }
        19 => err(
            InvalidConfiguration,
            format!(
                "Unrecognized hardware type: \"Expected hardware type o or e but got {}\"",
                bank.hardware_type.as_deref()?
            ),
        ),
        20 => err(InvalidArn, "Invalid ARN: The outpost Id must only contain a-z, A-Z, 0-9 and `-`."),
        21 => err(
            InvalidConfiguration,
            format!("Custom endpoint `{}` was not a valid URI", bank.endpoint.as_deref()?),
        ),
        22 => err(UnsupportedFeature, "S3 Accelerate cannot be used in this region"),
        23 => virtual_host(bank, "s3-fips.dualstack", Some("us-east-1"), "us-east-1"),
        24 => virtual_host(bank, "s3-fips.dualstack", bank.region.as_deref(), bank.region.as_deref()?),
        25 => virtual_host(bank, "s3-fips", Some("us-east-1"), "us-east-1"),
        26 => virtual_host(bank, "s3-fips", bank.region.as_deref(), bank.region.as_deref()?),
        27 => virtual_host(bank, "s3-accelerate.dualstack", Some("us-east-1"), "us-east-1"),
        28 => virtual_host(bank, "s3-accelerate.dualstack", None, bank.region.as_deref()?),
        29 => virtual_host(bank, "s3.dualstack", Some("us-east-1"), "us-east-1"),
        30 => virtual_host(bank, "s3.dualstack", bank.region.as_deref(), bank.region.as_deref()?),
        31 => custom_path_style(bank, bank.bucket.as_deref()?, "us-east-1"),
        32 => custom_virtual_host(bank, "us-east-1"),
        33 => custom_path_style(bank, bank.bucket.as_deref()?, bank.region.as_deref()?),
        34 => custom_virtual_host(bank, bank.region.as_deref()?),
        35 => virtual_host(bank, "s3-accelerate", None, "us-east-1"),
        36 => virtual_host(bank, "s3-accelerate", None, bank.region.as_deref()?),
        37 => virtual_host(bank, "s3", None, "us-east-1"),
        38 => virtual_host(bank, "s3", None, bank.region.as_deref()?),
        39 => virtual_host(bank, "s3", bank.region.as_deref(), bank.region.as_deref()?),
        40 => err(UnresolvableRegion, "Invalid region: region was not a valid DNS name."),
        41 => err(UnsupportedFeature, "S3 Object Lambda does not support Dual-stack"),
        42 => err(UnsupportedFeature, "S3 Object Lambda does not support S3 Accelerate"),
        43 => err(InvalidConfiguration, "Access points are not supported for this operation"),
        44 => {
            let arn = bank.arn.as_ref()?;
            err(
                InvalidConfiguration,
                format!(
                    "Invalid configuration: region from ARN `{}` does not match client region `{}` and UseArnRegion is `false`",
                    arn.region,
                    bank.region.as_deref()?
                ),
            )
        }
        45 => err(InvalidArn, "Invalid ARN: Missing account id"),
        46 => {
            let arn = bank.arn.as_ref()?;
            let url = bank.url.as_ref()?;
            ep(Endpoint::new(format!(
                "{}://{}-{}.{}{}",
                url.scheme,
                bank.access_point_name.as_deref()?,
                arn.account_id,
                url.authority,
                url.path
            ))
            .with_auth_scheme(AuthScheme::sigv4("s3-object-lambda", &arn.region)))
        }
        47 => arn_virtual_host(bank, "s3-object-lambda-fips", "s3-object-lambda"),
        48 => arn_virtual_host(bank, "s3-object-lambda", "s3-object-lambda"),
        49 => err(
            InvalidArn,
            format!(
                "Invalid ARN: The access point name may only contain a-z, A-Z, 0-9 and `-`. Found: `{}`",
                bank.access_point_name.as_deref()?
            ),
        ),
        50 => err(
            InvalidArn,
            format!(
                "Invalid ARN: The account id may only contain a-z, A-Z, 0-9 and `-`. Found: `{}`",
                bank.arn.as_ref()?.account_id
            ),
        ),
        51 => err(
            InvalidArn,
            format!("Invalid region in ARN: `{}` (invalid DNS name)", bank.arn.as_ref()?.region),
        ),
        52 => err(
            InvalidConfiguration,
            format!(
                "Client was configured for partition `{}` but ARN (`{}`) has `{}`",
                bank.partition.as_ref()?.name,
                bank.bucket.as_deref()?,
                bank.arn_partition.as_ref()?.name
            ),
        ),
        53 => err(InvalidArn, "Invalid ARN: The ARN may only contain a single resource component after `accesspoint`."),
        54 => err(InvalidArn, "Invalid ARN: bucket ARN is missing a region"),
        55 => err(InvalidArn, "Invalid ARN: Expected a resource of the format `accesspoint:<accesspoint name>` but no name was provided"),
        56 => err(
            InvalidArn,
            format!(
                "Invalid ARN: Object Lambda ARNs only support `accesspoint` arn types, but found: `{}`",
                bank.arn_type.as_deref()?
            ),
        ),
        57 => err(UnsupportedFeature, "Access Points do not support S3 Accelerate"),
        58 => arn_virtual_host(bank, "s3-accesspoint-fips.dualstack", "s3"),
        59 => arn_virtual_host(bank, "s3-accesspoint-fips", "s3"),
        60 => arn_virtual_host(bank, "s3-accesspoint.dualstack", "s3"),
        61 => {
            let arn = bank.arn.as_ref()?;
            let url = bank.url.as_ref()?;
            ep(Endpoint::new(format!(
                "{}://{}-{}.{}{}",
                url.scheme,
                bank.access_point_name.as_deref()?,
                arn.account_id,
                url.authority,
                url.path
            ))
            .with_auth_scheme(AuthScheme::sigv4("s3", &arn.region)))
        }
        62 => arn_virtual_host(bank, "s3-accesspoint", "s3"),
        63 => err(
            InvalidArn,
            format!("Invalid ARN: The ARN was not for the S3 service, found: {}", bank.arn.as_ref()?.service),
        ),
        64 => err(UnsupportedFeature, "S3 MRAP does not support dual-stack"),
        65 => err(UnsupportedFeature, "S3 MRAP does not support FIPS"),
        66 => err(UnsupportedFeature, "S3 MRAP does not support S3 Accelerate"),
        67 => err(InvalidConfiguration, "Invalid configuration: Multi-Region Access Point ARNs are disabled."),
        68 => {
            let partition = bank.mrap_partition.as_ref()?;
            ep(Endpoint::new(format!(
                "https://{}.accesspoint.s3-global.{}",
                bank.access_point_name.as_deref()?,
                partition.dns_suffix
            ))
            .with_auth_scheme(AuthScheme::sigv4a_global("s3")))
        }
        69 => err(
            InvalidConfiguration,
            format!(
                "Client was configured for partition `{}` but bucket referred to partition `{}`",
                bank.mrap_partition.as_ref()?.name,
                bank.arn.as_ref()?.partition
            ),
        ),
        70 => err(InvalidArn, "Invalid Access Point Name"),
        71 => err(UnsupportedFeature, "S3 Outposts does not support Dual-stack"),
        72 => err(UnsupportedFeature, "S3 Outposts does not support FIPS"),
        73 => err(UnsupportedFeature, "S3 Outposts does not support S3 Accelerate"),
        74 => err(InvalidArn, "Invalid Arn: Outpost Access Point ARN contains sub resources"),
        75 => {
            let arn = bank.arn.as_ref()?;
            let url = bank.url.as_ref()?;
            ep(with_outposts_auth(
                Endpoint::new(format!(
                    "https://{}-{}.{}.{}",
                    bank.outpost_access_point_name.as_deref()?,
                    arn.account_id,
                    bank.outpost_id.as_deref()?,
                    url.authority
                )),
                &arn.region,
            ))
        }
        76 => {
            let arn = bank.arn.as_ref()?;
            let partition = bank.arn_partition.as_ref()?;
            ep(with_outposts_auth(
                Endpoint::new(format!(
                    "https://{}-{}.{}.s3-outposts.{}.{}",
                    bank.outpost_access_point_name.as_deref()?,
                    arn.account_id,
                    bank.outpost_id.as_deref()?,
                    arn.region,
                    partition.dns_suffix
                )),
                &arn.region,
            ))
        }
        77 => err(
            InvalidArn,
            format!("Expected an outpost type `accesspoint`, found {}", bank.outpost_type.as_deref()?),
        ),
        78 => err(InvalidArn, "Invalid ARN: expected an access point name"),
        79 => err(InvalidArn, "Invalid ARN: Expected a 4-component resource"),
        80 => err(
            InvalidArn,
            format!(
                "Invalid ARN: The outpost Id may only contain a-z, A-Z, 0-9 and `-`. Found: `{}`",
                bank.outpost_id.as_deref()?
            ),
        ),
        81 => err(InvalidArn, "Invalid ARN: The Outpost Id was not set"),
        82 => err(
            InvalidArn,
            format!(
                "Invalid ARN: Unrecognized format: {} (type: {})",
                bank.bucket.as_deref()?,
                bank.arn_type.as_deref()?
            ),
        ),
        83 => err(InvalidArn, "Invalid ARN: No ARN type specified"),
        84 => err(
            InvalidArn,
            format!("Invalid ARN: `{}` was not a valid ARN", bank.bucket.as_deref()?),
        ),
        85 => err(InvalidConfiguration, "Path-style addressing cannot be used with ARN buckets"),
        86 => path_style(bank, "s3-fips.dualstack", Some("us-east-1"), "us-east-1"),
        87 => path_style(bank, "s3-fips.dualstack", bank.region.as_deref(), bank.region.as_deref()?),
        88 => path_style(bank, "s3-fips", Some("us-east-1"), "us-east-1"),
        89 => path_style(bank, "s3-fips", bank.region.as_deref(), bank.region.as_deref()?),
        90 => path_style(bank, "s3.dualstack", Some("us-east-1"), "us-east-1"),
        91 => path_style(bank, "s3.dualstack", bank.region.as_deref(), bank.region.as_deref()?),
        92 => custom_path_style(bank, bank.encoded_bucket.as_deref()?, "us-east-1"),
        93 => custom_path_style(bank, bank.encoded_bucket.as_deref()?, bank.region.as_deref()?),
        94 => path_style(bank, "s3", None, "us-east-1"),
        95 => path_style(bank, "s3", None, bank.region.as_deref()?),
        96 => path_style(bank, "s3", bank.region.as_deref(), bank.region.as_deref()?),
        97 => err(InvalidConfiguration, "Path-style addressing cannot be used with S3 Accelerate"),
        98 => custom_bare(bank, "s3-object-lambda", bank.region.as_deref()?),
        99 => bare_host(bank, "s3-object-lambda-fips", true, "s3-object-lambda"),
        100 => bare_host(bank, "s3-object-lambda", true, "s3-object-lambda"),
        101 => bare_host_us_east_1(bank, "s3-fips.dualstack"),
        102 => bare_host(bank, "s3-fips.dualstack", true, "s3"),
        103 => bare_host_us_east_1(bank, "s3-fips"),
        104 => bare_host(bank, "s3-fips", true, "s3"),
        105 => bare_host_us_east_1(bank, "s3.dualstack"),
        106 => bare_host(bank, "s3.dualstack", true, "s3"),
        107 => custom_bare(bank, "s3", "us-east-1"),
        108 => custom_bare(bank, "s3", bank.region.as_deref()?),
        109 => {
            let partition = bank.partition.as_ref()?;
            ep(Endpoint::new(format!("https://s3.{}", partition.dns_suffix))
                .with_auth_scheme(AuthScheme::sigv4("s3", "us-east-1")))
        }
        110 => {
            let partition = bank.partition.as_ref()?;
            ep(Endpoint::new(format!("https://s3.{}", partition.dns_suffix))
                .with_auth_scheme(AuthScheme::sigv4("s3", bank.region.as_deref()?)))
        }
        111 => bare_host(bank, "s3", true, "s3"),
        112 => err(UnresolvableRegion, "A region must be set when sending requests to S3."),
        _ => None,
    }
}

/// `https://{bucket}.{infix}.[{region}.]{dnsSuffix}` with regional SigV4.
fn virtual_host(
    bank: &Bank,
    infix: &str,
    host_region: Option<&str>,
    signing_region: &str,
) -> Option<RuleResult> {
    let bucket = bank.bucket.as_deref()?;
    let partition = bank.partition.as_ref()?;
    let host_region = host_region.map_or(String::new(), |r| format!("{r}."));
    ep(Endpoint::new(format!(
        "https://{bucket}.{infix}.{host_region}{}",
        partition.dns_suffix
    ))
    .with_auth_scheme(AuthScheme::sigv4("s3", signing_region)))
}

/// `https://{infix}.[{region}.]{dnsSuffix}/{encodedBucket}` with regional SigV4.
fn path_style(
    bank: &Bank,
    infix: &str,
    host_region: Option<&str>,
    signing_region: &str,
) -> Option<RuleResult> {
    let encoded_bucket = bank.encoded_bucket.as_deref()?;
    let partition = bank.partition.as_ref()?;
    let host_region = host_region.map_or(String::new(), |r| format!("{r}."));
    ep(Endpoint::new(format!(
        "https://{infix}.{host_region}{}/{encoded_bucket}",
        partition.dns_suffix
    ))
    .with_auth_scheme(AuthScheme::sigv4("s3", signing_region)))
}

/// `https://{name}-{accountId}.{infix}.{arnRegion}.{dnsSuffix}`, signed for
/// the ARN's region.
fn arn_virtual_host(bank: &Bank, infix: &str, signing_name: &str) -> Option<RuleResult> {
    let arn = bank.arn.as_ref()?;
    let partition = bank.arn_partition.as_ref()?;
    ep(Endpoint::new(format!(
        "https://{}-{}.{infix}.{}.{}",
        bank.access_point_name.as_deref()?,
        arn.account_id,
        arn.region,
        partition.dns_suffix
    ))
    .with_auth_scheme(AuthScheme::sigv4(signing_name, &arn.region)))
}

/// Custom endpoint with the bucket prepended to the authority.
fn custom_virtual_host(bank: &Bank, signing_region: &str) -> Option<RuleResult> {
    let url = bank.url.as_ref()?;
    let bucket = bank.bucket.as_deref()?;
    ep(Endpoint::new(format!("{}://{bucket}.{}{}", url.scheme, url.authority, url.path))
        .with_auth_scheme(AuthScheme::sigv4("s3", signing_region)))
}

/// Custom endpoint with the bucket appended to the normalized path.
fn custom_path_style(bank: &Bank, bucket: &str, signing_region: &str) -> Option<RuleResult> {
    let url = bank.url.as_ref()?;
    ep(Endpoint::new(format!(
        "{}://{}{}{bucket}",
        url.scheme, url.authority, url.normalized_path
    ))
    .with_auth_scheme(AuthScheme::sigv4("s3", signing_region)))
}

/// Custom endpoint passed through untouched.
fn custom_bare(bank: &Bank, signing_name: &str, signing_region: &str) -> Option<RuleResult> {
    let url = bank.url.as_ref()?;
    ep(Endpoint::new(format!("{}://{}{}", url.scheme, url.authority, url.path))
        .with_auth_scheme(AuthScheme::sigv4(signing_name, signing_region)))
}

/// `https://{infix}.[{region}.]{dnsSuffix}` with no bucket in host or path.
fn bare_host(
    bank: &Bank,
    infix: &str,
    include_region: bool,
    signing_name: &str,
) -> Option<RuleResult> {
    let region = bank.region.as_deref()?;
    let partition = bank.partition.as_ref()?;
    let host_region = if include_region { format!("{region}.") } else { String::new() };
    ep(Endpoint::new(format!("https://{infix}.{host_region}{}", partition.dns_suffix))
        .with_auth_scheme(AuthScheme::sigv4(signing_name, region)))
}

/// `https://{infix}.us-east-1.{dnsSuffix}` signed for `us-east-1`.
fn bare_host_us_east_1(bank: &Bank, infix: &str) -> Option<RuleResult> {
    let partition = bank.partition.as_ref()?;
    ep(Endpoint::new(format!("https://{infix}.us-east-1.{}", partition.dns_suffix))
        .with_auth_scheme(AuthScheme::sigv4("s3", "us-east-1")))
}

/// The derived registers a terminal reads, for the dominance test.
pub(crate) fn reads(id: u16) -> &'static [Slot] {
    match id {
        6 => &[Slot::Url, Slot::EncodedBucket, Slot::S3ExpressAuth],
        7 | 12 => &[Slot::Url, Slot::S3ExpressAuth],
        9 => &[Slot::S3ExpressFips, Slot::S3ExpressDualStack, Slot::Partition, Slot::EncodedBucket],
        10 => &[
            Slot::S3ExpressFips,
            Slot::ExpressAzId,
            Slot::S3ExpressDualStack,
            Slot::Partition,
            Slot::S3ExpressAuth,
        ],
        13 => &[Slot::S3ExpressFips, Slot::S3ExpressDualStack, Slot::Partition],
        15 | 31 | 32 | 33 | 34 | 98 | 107 | 108 => &[Slot::Url],
        16 => &[Slot::RegionPartition],
        17 => &[Slot::OutpostIdSuffix, Slot::Url],
        18 => &[Slot::OutpostIdSuffix, Slot::RegionPartition],
        19 => &[Slot::HardwareType],
        23..=30 | 35..=39 | 99..=106 | 109..=111 => &[Slot::Partition],
        44 | 50 | 51 | 63 => &[Slot::Arn],
        46 | 61 => &[Slot::AccessPointName, Slot::Arn, Slot::Url],
        47 | 48 | 58 | 59 | 60 | 62 => &[Slot::AccessPointName, Slot::Arn, Slot::ArnPartition],
        49 => &[Slot::AccessPointName],
        52 => &[Slot::Partition, Slot::ArnPartition],
        56 | 82 => &[Slot::ArnType],
        68 => &[Slot::AccessPointName, Slot::MrapPartition],
        69 => &[Slot::MrapPartition, Slot::Arn],
        75 => &[Slot::OutpostAccessPointName, Slot::Arn, Slot::OutpostId, Slot::Url],
        76 => &[Slot::OutpostAccessPointName, Slot::Arn, Slot::OutpostId, Slot::ArnPartition],
        77 => &[Slot::OutpostType],
        80 => &[Slot::OutpostId],
        86..=91 | 94..=96 => &[Slot::Partition, Slot::EncodedBucket],
        92 | 93 => &[Slot::Url, Slot::EncodedBucket],
        _ => &[],
    }
}
