use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Node-role marker labels and the role name each one grants.
/// Checked in this order, so multi-role nodes list their roles
/// as controlplane, worker, etcd.
pub const ROLE_LABELS: [(&str, &str); 3] = [
    ("node-role.kubernetes.io/controlplane", "controlplane"),
    ("node-role.kubernetes.io/worker", "worker"),
    ("node-role.kubernetes.io/etcd", "etcd"),
];

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    // Nodes that have not finished registering carry no hostname yet.
    pub hostname: Option<String>,
    pub state: String,
    pub labels: BTreeMap<String, String>,
    pub cluster_id: String,
}

impl Node {
    /// Roles granted by the marker labels present on this node.
    /// Presence of the key is what counts, not its value.
    pub fn roles(&self) -> Vec<String> {
        let mut roles = Vec::new();
        for (label, role) in ROLE_LABELS {
            if self.labels.contains_key(label) {
                roles.push(role.to_string());
            }
        }
        roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node_with_labels(labels: serde_json::Value) -> Node {
        serde_json::from_value(json!({
            "id": "machine-x",
            "hostname": "host-x",
            "state": "active",
            "labels": labels,
            "clusterId": "c-1",
        }))
        .unwrap()
    }

    #[test]
    fn roles_follow_marker_order() {
        let node = node_with_labels(json!({
            "node-role.kubernetes.io/etcd": "true",
            "node-role.kubernetes.io/controlplane": "true",
        }));
        assert_eq!(node.roles(), vec!["controlplane", "etcd"]);
    }

    #[test]
    fn role_is_granted_by_key_presence_alone() {
        let node = node_with_labels(json!({
            "node-role.kubernetes.io/worker": "",
        }));
        assert_eq!(node.roles(), vec!["worker"]);
    }

    #[test]
    fn unrelated_labels_grant_no_roles() {
        let node = node_with_labels(json!({
            "kubernetes.io/os": "linux",
            "node-role.kubernetes.io/master": "true",
        }));
        assert!(node.roles().is_empty());
    }

    #[test]
    fn hostname_is_optional_on_the_wire() {
        let node: Node = serde_json::from_value(json!({
            "id": "machine-y",
            "state": "registering",
            "labels": {},
            "clusterId": "c-1",
        }))
        .unwrap();
        assert_eq!(node.hostname, None);
    }
}
