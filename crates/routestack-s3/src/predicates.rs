//! Predicate dispatch for the decision graph.
//!
//! Each decision node names one predicate by id. A predicate either tests
//! registers that already hold a value (feature flags, parameter presence,
//! string comparisons) or invokes a helper, memoizes its possibly-absent
//! result into the bank, and reports whether a value was produced. Absence
//! is an ordinary branch outcome — predicates never fail.
//!
//! [`writes`] and [`reads`] describe each predicate's register effects; the
//! table tests use them to prove that every reader is dominated by its
//! writer.

use routestack_fns::{
    Arn, is_valid_host_label, is_virtual_hostable_s3_bucket, parse_url, resolve_partition,
    uri_encode,
};

use crate::bank::{Bank, Slot};

/// Evaluate the predicate `condition` against the bank.
///
/// Ids outside the table's range evaluate to `false`; the table tests assert
/// that no such reference exists.
#[allow(clippy::too_many_lines)] // Flat dispatch over the compiled predicate ids.
pub(crate) fn evaluate(condition: i16, bank: &mut Bank) -> bool {
    match condition {
        0 => bank.region.is_some(),
        1 => bank.bucket.is_some(),
        2 | 23 => bank.bucket.as_deref().is_some_and(|b| Arn::parse(b).is_some()),
        3 => bank.bucket_substring(0, 6, true) == Some("--x-s3"),
        4 => bank.use_s3_express_control_endpoint.is_some(),
        5 => bank.use_s3_express_control_endpoint != Some(false),
        6 => bank.bucket_substring(0, 7, true) == Some("--xa-s3"),
        7 => bank.disable_s3_express_session_auth.is_some(),
        8 => {
            let flavor = if bank.disable_s3_express_session_auth.unwrap_or(false) {
                "sigv4"
            } else {
                "sigv4-s3express"
            };
            bank.s3_express_auth = Some(flavor.to_owned());
            bank.s3_express_auth.is_some()
        }
        9 => bank.disable_s3_express_session_auth != Some(false),
        10 => {
            bank.alias_suffix = bank.bucket_substring(0, 7, true).map(ToOwned::to_owned);
            bank.alias_suffix.is_some()
        }
        11 => bank.alias_suffix.as_deref() == Some("--op-s3"),
        12 => {
            bank.region_prefix = bank.bucket_substring(8, 12, true).map(ToOwned::to_owned);
            bank.region_prefix.is_some()
        }
        13 => {
            bank.outpost_id_suffix = bank.bucket_substring(32, 49, true).map(ToOwned::to_owned);
            bank.outpost_id_suffix.is_some()
        }
        14 => {
            bank.hardware_type = bank.bucket_substring(49, 50, true).map(ToOwned::to_owned);
            bank.hardware_type.is_some()
        }
        15 => {
            bank.s3_express_fips = Some(if bank.use_fips { "-fips" } else { "" }.to_owned());
            bank.s3_express_fips.is_some()
        }
        16 => {
            bank.region_partition = bank.region.as_deref().and_then(resolve_partition);
            bank.region_partition.is_some()
        }
        17 => {
            bank.s3_express_dual_stack =
                Some(if bank.use_dual_stack { ".dualstack" } else { "" }.to_owned());
            bank.s3_express_dual_stack.is_some()
        }
        18 => bank.endpoint.is_some(),
        19 => bank.use_fips,
        20 => bank.accelerate,
        21 => bank.endpoint.as_deref().is_some_and(|e| parse_url(e).is_some()),
        22 => bank.force_path_style,
        24 => {
            bank.partition = bank.region.as_deref().and_then(resolve_partition);
            bank.partition.is_some()
        }
        25 => bank.partition.as_ref().is_some_and(|p| p.name == "aws-cn"),
        26 => {
            bank.outpost_id_suffix
                .as_deref()
                .is_some_and(|id| is_valid_host_label(id, false))
        }
        27 => {
            bank.bucket
                .as_deref()
                .is_some_and(|b| is_virtual_hostable_s3_bucket(b, false))
        }
        28 => {
            bank.url = bank.endpoint.as_deref().and_then(parse_url);
            bank.url.is_some()
        }
        29 => {
            bank.bucket
                .as_deref()
                .is_some_and(|b| is_virtual_hostable_s3_bucket(b, true))
        }
        30 => bank.url.as_ref().is_some_and(|u| u.scheme == "http"),
        31 => {
            bank.arn = bank.bucket.as_deref().and_then(Arn::parse);
            bank.arn.is_some()
        }
        32 => bank.bucket_substring(0, 4, false) == Some("arn:"),
        33 => bank.region.as_deref().is_some_and(|r| is_valid_host_label(r, false)),
        34 => bank.url.as_ref().is_some_and(|u| u.is_ip),
        35 => {
            bank.encoded_bucket = bank.bucket.as_deref().map(|b| uri_encode(b).into_owned());
            bank.encoded_bucket.is_some()
        }
        36 => bank.use_object_lambda_endpoint.is_some(),
        37 => bank.use_object_lambda_endpoint != Some(false),
        38 => bank.region.as_deref().is_some_and(|r| is_valid_host_label(r, true)),
        39 => bank.use_dual_stack,
        40 => bank.bucket_substring(21, 23, true) == Some("--"),
        41 => bank.bucket_substring(16, 18, true) == Some("--"),
        42 => bank.disable_access_points.is_some(),
        43 => bank.disable_access_points != Some(false),
        44 => bank.arn.as_ref().is_some_and(|a| a.resource_part(4).is_some()),
        45 => bank.arn.as_ref().is_some_and(|a| a.resource_part(2).is_some()),
        46 => bank.bucket_substring(27, 29, true) == Some("--"),
        47 => bank.bucket_substring(19, 21, true) == Some("--"),
        48 => bank.hardware_type.as_deref() == Some("e"),
        49 => bank.hardware_type.as_deref() == Some("o"),
        50 => bank.bucket_substring(26, 28, true) == Some("--"),
        51 => {
            bank.arn_type = bank
                .arn
                .as_ref()
                .and_then(|a| a.resource_part(0))
                .map(ToOwned::to_owned);
            bank.arn_type.is_some()
        }
        52 => bank.arn_type.as_deref() == Some(""),
        53 => bank.arn_type.as_deref() == Some("accesspoint"),
        54 => {
            bank.access_point_name = bank
                .arn
                .as_ref()
                .and_then(|a| a.resource_part(1))
                .map(ToOwned::to_owned);
            bank.access_point_name.is_some()
        }
        55 => bank.access_point_name.as_deref() == Some(""),
        56 => bank.arn.as_ref().is_some_and(|a| a.service == "s3-object-lambda"),
        57 => bank.arn.as_ref().is_some_and(|a| a.service == "s3-outposts"),
        58 => {
            bank.outpost_id = bank
                .arn
                .as_ref()
                .and_then(|a| a.resource_part(1))
                .map(ToOwned::to_owned);
            bank.outpost_id.is_some()
        }
        59 => bank.arn.as_ref().is_some_and(|a| a.region.is_empty()),
        60 => {
            bank.arn_partition = bank
                .arn
                .as_ref()
                .and_then(|a| resolve_partition(&a.region));
            bank.arn_partition.is_some()
        }
        61 => bank.use_arn_region.is_some(),
        62 => match (bank.region.as_deref(), bank.arn.as_ref()) {
            (Some(region), Some(arn)) => region == arn.region,
            _ => false,
        },
        63 => {
            bank.access_point_name
                .as_deref()
                .is_some_and(|name| is_valid_host_label(name, true))
        }
        64 => bank.url.as_ref().is_some_and(|u| !u.is_ip),
        65 => bank.bucket_substring(14, 16, true) == Some("--"),
        66 => bank.region.as_deref() == Some("aws-global"),
        67 => bank.bucket_substring(20, 22, true) == Some("--"),
        68 => bank.bucket_substring(15, 17, true) == Some("--"),
        69 => bank.use_global_endpoint,
        70 => !bank.use_arn_region.unwrap_or(false),
        71 => {
            bank.outpost_id
                .as_deref()
                .is_some_and(|id| is_valid_host_label(id, false))
        }
        72 => match (bank.arn_partition.as_ref(), bank.partition.as_ref()) {
            (Some(arn_partition), Some(partition)) => arn_partition.name == partition.name,
            _ => false,
        },
        73 => {
            bank.arn
                .as_ref()
                .is_some_and(|a| is_valid_host_label(&a.region, true))
        }
        74 => bank.region.as_deref() == Some("us-east-1"),
        75 => bank.arn.as_ref().is_some_and(|a| a.service == "s3"),
        76 => {
            bank.express_az_id = bank.bucket.as_deref().and_then(express_az_id);
            bank.express_az_id.is_some()
        }
        77 => bank.arn.as_ref().is_some_and(|a| a.account_id.is_empty()),
        78 => bank.disable_multi_region_access_points,
        79 => {
            bank.arn
                .as_ref()
                .is_some_and(|a| is_valid_host_label(&a.account_id, false))
        }
        80 => {
            bank.access_point_name
                .as_deref()
                .is_some_and(|name| is_valid_host_label(name, false))
        }
        81 => {
            bank.outpost_type = bank
                .arn
                .as_ref()
                .and_then(|a| a.resource_part(2))
                .map(ToOwned::to_owned);
            bank.outpost_type.is_some()
        }
        82 => {
            bank.outpost_access_point_name = bank
                .arn
                .as_ref()
                .and_then(|a| a.resource_part(3))
                .map(ToOwned::to_owned);
            bank.outpost_access_point_name.is_some()
        }
        83 => {
            bank.mrap_partition = bank.region.as_deref().and_then(resolve_partition);
            bank.mrap_partition.is_some()
        }
        84 => bank.outpost_type.as_deref() == Some("accesspoint"),
        85 => match (bank.arn.as_ref(), bank.mrap_partition.as_ref()) {
            (Some(arn), Some(partition)) => arn.partition == partition.name,
            _ => false,
        },
        86 => bank.region_prefix.as_deref() == Some("beta"),
        _ => false,
    }
}

/// Availability-zone id of an S3 Express bucket name: the second `--`
/// delimited segment, ignoring trailing empty segments.
fn express_az_id(bucket: &str) -> Option<String> {
    let mut segments: Vec<&str> = bucket.split("--").collect();
    while segments.last() == Some(&"") {
        segments.pop();
    }
    segments.get(1).map(|s| (*s).to_owned())
}

/// The register a predicate writes, if any.
pub(crate) fn writes(condition: i16) -> Option<Slot> {
    match condition {
        8 => Some(Slot::S3ExpressAuth),
        10 => Some(Slot::AliasSuffix),
        12 => Some(Slot::RegionPrefix),
        13 => Some(Slot::OutpostIdSuffix),
        14 => Some(Slot::HardwareType),
        15 => Some(Slot::S3ExpressFips),
        16 => Some(Slot::RegionPartition),
        17 => Some(Slot::S3ExpressDualStack),
        24 => Some(Slot::Partition),
        28 => Some(Slot::Url),
        31 => Some(Slot::Arn),
        35 => Some(Slot::EncodedBucket),
        51 => Some(Slot::ArnType),
        54 => Some(Slot::AccessPointName),
        58 => Some(Slot::OutpostId),
        60 => Some(Slot::ArnPartition),
        76 => Some(Slot::ExpressAzId),
        81 => Some(Slot::OutpostType),
        82 => Some(Slot::OutpostAccessPointName),
        83 => Some(Slot::MrapPartition),
        _ => None,
    }
}

/// The derived registers a predicate reads.
pub(crate) fn reads(condition: i16) -> &'static [Slot] {
    match condition {
        11 => &[Slot::AliasSuffix],
        25 => &[Slot::Partition],
        26 => &[Slot::OutpostIdSuffix],
        30 | 34 | 64 => &[Slot::Url],
        44 | 45 | 51 | 54 | 56 | 57 | 58 | 59 | 60 | 62 | 73 | 75 | 77 | 79 | 81 | 82 => {
            &[Slot::Arn]
        }
        48 | 49 => &[Slot::HardwareType],
        52 | 53 => &[Slot::ArnType],
        55 | 63 | 80 => &[Slot::AccessPointName],
        71 => &[Slot::OutpostId],
        72 => &[Slot::ArnPartition, Slot::Partition],
        84 => &[Slot::OutpostType],
        85 => &[Slot::Arn, Slot::MrapPartition],
        86 => &[Slot::RegionPrefix],
        _ => &[],
    }
}
