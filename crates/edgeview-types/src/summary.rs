use serde::Serialize;

/// Health and placement view of one pod, derived on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkloadSummary {
    pub name: String,
    pub phase: String,
    /// Sum of `restartCount` across container statuses.
    pub restarts: u64,
    pub ready_count: usize,
    /// Number of container-status entries in the payload.
    pub total_containers: usize,
    pub pod_ip: String,
    pub node_name: String,
}

impl WorkloadSummary {
    /// `READY` column, e.g. `1/2`.
    pub fn ready(&self) -> String {
        format!("{}/{}", self.ready_count, self.total_containers)
    }
}
