use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One inventory group: the hosts of a cluster plus its group vars.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Group {
    pub hosts: Vec<String>,
    pub vars: Map<String, Value>,
}
