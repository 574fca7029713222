//! Payload builders.
//!
//! Keys follow edgecore's `<namespace>/<type>/<name>` layout so that records
//! of different kinds with the same name can coexist in one store.

use edgeview_types::ResourceRecord;
use serde_json::{Value, json};

/// Builder for a pod snapshot with the fields the table reads.
#[derive(Debug, Clone)]
pub struct PodFixture {
    namespace: String,
    name: String,
    phase: String,
    pod_ip: Option<String>,
    node_name: String,
    containers: Vec<(bool, u64)>,
}

impl PodFixture {
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            phase: "Running".to_string(),
            pod_ip: Some("10.0.0.2".to_string()),
            node_name: "edge-node-1".to_string(),
            containers: vec![(true, 0)],
        }
    }

    pub fn phase(mut self, phase: &str) -> Self {
        self.phase = phase.to_string();
        self
    }

    pub fn pod_ip(mut self, ip: &str) -> Self {
        self.pod_ip = Some(ip.to_string());
        self
    }

    /// Drop `status.podIP` from the payload entirely.
    pub fn without_pod_ip(mut self) -> Self {
        self.pod_ip = None;
        self
    }

    pub fn node(mut self, node_name: &str) -> Self {
        self.node_name = node_name.to_string();
        self
    }

    /// One `(ready, restartCount)` pair per container.
    pub fn containers(mut self, containers: &[(bool, u64)]) -> Self {
        self.containers = containers.to_vec();
        self
    }

    pub fn key(&self) -> String {
        format!("{}/pod/{}", self.namespace, self.name)
    }

    pub fn payload(&self) -> Value {
        let statuses: Vec<Value> = self
            .containers
            .iter()
            .enumerate()
            .map(|(i, (ready, restarts))| {
                json!({
                    "name": format!("c{i}"),
                    "ready": ready,
                    "restartCount": restarts,
                    "image": "registry.local/app:1.0",
                })
            })
            .collect();

        let mut status = json!({
            "phase": self.phase,
            "hostIP": "192.168.1.10",
            "containerStatuses": statuses,
        });
        if let Some(ip) = &self.pod_ip {
            status["podIP"] = json!(ip);
        }

        json!({
            "metadata": {
                "name": self.name,
                "namespace": self.namespace,
                "uid": format!("uid-{}", self.name),
            },
            "spec": {
                "nodeName": self.node_name,
                "containers": self.containers.iter().enumerate()
                    .map(|(i, _)| json!({"name": format!("c{i}")}))
                    .collect::<Vec<_>>(),
            },
            "status": status,
        })
    }

    pub fn record(&self) -> ResourceRecord {
        ResourceRecord::new(self.key(), "pod", self.payload().to_string())
    }
}

pub fn service_record(namespace: &str, name: &str, cluster_ip: &str) -> ResourceRecord {
    let payload = json!({
        "metadata": {"name": name, "namespace": namespace},
        "spec": {"clusterIP": cluster_ip, "ports": [{"port": 80, "protocol": "TCP"}]},
    });
    ResourceRecord::new(
        format!("{namespace}/service/{name}"),
        "service",
        payload.to_string(),
    )
}
