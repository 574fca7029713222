use edgeview_types::{ResourceRecord, WorkloadSummary};
use serde::Deserialize;
use serde_json::Number;

use crate::DecodeError;

// Only the fields the table shows. Every one is required: a pod snapshot
// missing any of them is reported, never rendered with blanks.

#[derive(Debug, Deserialize)]
struct PodPayload {
    metadata: PodMetadata,
    spec: PodSpec,
    status: PodStatus,
}

#[derive(Debug, Deserialize)]
struct PodMetadata {
    name: String,
}

#[derive(Debug, Deserialize)]
struct PodSpec {
    #[serde(rename = "nodeName")]
    node_name: String,
}

#[derive(Debug, Deserialize)]
struct PodStatus {
    phase: String,
    #[serde(rename = "podIP")]
    pod_ip: String,
    #[serde(rename = "containerStatuses")]
    container_statuses: Vec<ContainerStatus>,
}

#[derive(Debug, Deserialize)]
struct ContainerStatus {
    ready: bool,
    // Any JSON number; snapshots written by float-based encoders carry `2.0`
    #[serde(rename = "restartCount")]
    restart_count: Number,
}

/// Whole, non-negative count that fits in a `u64`.
fn restart_count(value: &Number) -> Option<u64> {
    if let Some(count) = value.as_u64() {
        return Some(count);
    }
    let float = value.as_f64()?;
    // 2^64 is exactly representable; anything at or above it does not fit
    if float.is_finite()
        && float >= 0.0
        && float.fract() == 0.0
        && float < 18_446_744_073_709_551_616.0
    {
        Some(float as u64)
    } else {
        None
    }
}

fn into_summary(pod: PodPayload, key: &str) -> Result<WorkloadSummary, DecodeError> {
    let statuses = &pod.status.container_statuses;
    let ready_count = statuses.iter().filter(|c| c.ready).count();
    let restarts = statuses.iter().try_fold(0u64, |total, container| {
        let count = restart_count(&container.restart_count).ok_or_else(|| {
            DecodeError::RestartCount {
                key: key.to_string(),
                value: container.restart_count.to_string(),
            }
        })?;
        total
            .checked_add(count)
            .ok_or_else(|| DecodeError::RestartOverflow {
                key: key.to_string(),
            })
    })?;

    Ok(WorkloadSummary {
        name: pod.metadata.name,
        phase: pod.status.phase,
        restarts,
        ready_count,
        total_containers: statuses.len(),
        pod_ip: pod.status.pod_ip,
        node_name: pod.spec.node_name,
    })
}

/// Decode one pod record into its summary row.
pub fn summarize_one(record: &ResourceRecord) -> Result<WorkloadSummary, DecodeError> {
    let pod = serde_json::from_str::<PodPayload>(&record.payload).map_err(|source| {
        DecodeError::Payload {
            key: record.key.clone(),
            source,
        }
    })?;
    into_summary(pod, &record.key)
}

/// Summarize pod records in order.
///
/// All or nothing: the first record that fails to decode aborts the whole
/// batch.
pub fn summarize(records: &[ResourceRecord]) -> Result<Vec<WorkloadSummary>, DecodeError> {
    records
        .iter()
        .map(summarize_one)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| tracing::warn!(key = err.key(), "pod summarization failed"))
}
