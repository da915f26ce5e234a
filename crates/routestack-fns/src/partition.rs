//! Partition resolution.
//!
//! A partition is a top-level realm (standard, China, GovCloud, the isolated
//! realms) with its own DNS suffix. Resolution first tries an exact region
//! match against the embedded partition metadata, then each partition's
//! region pattern, and finally falls back to the standard `aws` partition so
//! that unknown-but-plausible regions still resolve.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Embedded partition metadata, same shape as the published partitions file.
const PARTITIONS_JSON: &str = include_str!("partitions.json");

/// Name of the fallback partition.
const FALLBACK_PARTITION: &str = "aws";

/// A resolved partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partition {
    /// Partition name (e.g. `aws`, `aws-cn`).
    pub name: String,
    /// DNS suffix endpoints in this partition end with (e.g. `amazonaws.com`).
    pub dns_suffix: String,
}

#[derive(Debug, Deserialize)]
struct PartitionsDoc {
    partitions: Vec<PartitionSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartitionSpec {
    id: String,
    region_regex: String,
    #[serde(default)]
    regions: BTreeMap<String, serde_json::Value>,
    outputs: PartitionOutputs,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartitionOutputs {
    name: String,
    dns_suffix: String,
}

/// A partition spec with its region pattern compiled.
struct LoadedPartition {
    spec: PartitionSpec,
    region_pattern: Regex,
}

static PARTITIONS: LazyLock<Vec<LoadedPartition>> = LazyLock::new(|| {
    let doc: PartitionsDoc =
        serde_json::from_str(PARTITIONS_JSON).expect("embedded partition metadata is valid JSON");
    doc.partitions
        .into_iter()
        .map(|spec| LoadedPartition {
            region_pattern: Regex::new(&spec.region_regex)
                .expect("embedded partition region pattern is a valid regex"),
            spec,
        })
        .collect()
});

/// Resolve the partition a region belongs to.
///
/// Tries an exact match against each partition's region table, then each
/// partition's region pattern, and finally falls back to the `aws`
/// partition. Returns `None` only if the metadata is missing the fallback
/// partition, which the embedded metadata never is.
///
/// # Examples
///
/// ```
/// use routestack_fns::resolve_partition;
///
/// let p = resolve_partition("cn-north-1").unwrap();
/// assert_eq!(p.name, "aws-cn");
/// assert_eq!(p.dns_suffix, "amazonaws.com.cn");
///
/// // Unknown regions fall back to the standard partition.
/// assert_eq!(resolve_partition("planet-express-1").unwrap().name, "aws");
/// ```
#[must_use]
pub fn resolve_partition(region: &str) -> Option<Partition> {
    let partitions = &*PARTITIONS;

    if let Some(hit) = partitions.iter().find(|p| p.spec.regions.contains_key(region)) {
        return Some(outputs_of(hit));
    }

    if let Some(hit) = partitions.iter().find(|p| p.region_pattern.is_match(region)) {
        return Some(outputs_of(hit));
    }

    partitions
        .iter()
        .find(|p| p.spec.id == FALLBACK_PARTITION)
        .map(outputs_of)
}

fn outputs_of(partition: &LoadedPartition) -> Partition {
    Partition {
        name: partition.spec.outputs.name.clone(),
        dns_suffix: partition.spec.outputs.dns_suffix.clone(),
    }
}
