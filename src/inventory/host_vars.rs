use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-host entry under `_meta.hostvars`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct HostVars {
    pub roles: Vec<String>,
    pub host_state: String,
    pub host_id: String,
    pub cluster_name: String,
    pub cluster_id: String,
    pub labels: BTreeMap<String, String>,
}
