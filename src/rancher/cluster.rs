use crate::rancher::component_status::ComponentStatus;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: String,
    pub name: String,
    pub description: String,
    pub driver: String,
    pub state: String,
    pub node_count: i64,
    pub istio_enabled: bool,
    // Imported clusters report no component health.
    pub component_statuses: Option<Vec<ComponentStatus>>,
}

impl Cluster {
    /// The fixed cluster fields copied verbatim into the group vars,
    /// under their wire names.
    pub fn group_vars(&self) -> Map<String, Value> {
        let mut vars = Map::new();
        vars.insert("description".to_string(), json!(self.description));
        vars.insert("driver".to_string(), json!(self.driver));
        vars.insert("id".to_string(), json!(self.id));
        vars.insert("istioEnabled".to_string(), json!(self.istio_enabled));
        vars.insert("nodeCount".to_string(), json!(self.node_count));
        vars.insert("state".to_string(), json!(self.state));
        vars
    }
}
