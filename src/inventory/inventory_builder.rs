use crate::inventory::builder_config::BuilderConfig;
use crate::inventory::document::{AllGroup, ConnectionVars, InventoryDocument};
use crate::inventory::group::Group;
use crate::inventory::host_vars::HostVars;
use crate::rancher::cluster::Cluster;
use crate::rancher::node::Node;
use anyhow::Result;
use serde_json::Value;

/// Folds fetched cluster and node records into an [`InventoryDocument`].
///
/// One group is created per cluster, keyed by cluster name. Hostnames are
/// unique across the whole document; a hostname reported twice keeps the
/// last hostvars written for it.
pub struct InventoryBuilder {
    document: InventoryDocument,
}

impl InventoryBuilder {
    pub fn new(config: &BuilderConfig, api_url_base: &str) -> Self {
        let mut document = InventoryDocument::empty();
        if config.include_connection_vars {
            document.all = Some(AllGroup {
                vars: ConnectionVars {
                    api_url_base: api_url_base.to_string(),
                },
            });
        }
        Self { document }
    }

    /// Adds one cluster and its fetched nodes to the document.
    pub fn add_cluster(&mut self, cluster: &Cluster, nodes: &[Node]) -> Result<()> {
        let mut group = Group::default();

        for node in nodes {
            let hostname = match &node.hostname {
                Some(hostname) => hostname.clone(),
                // Nodes without a hostname are skipped, not an error.
                None => continue,
            };

            group.hosts.push(hostname.clone());
            self.document.meta.hostvars.insert(
                hostname,
                HostVars {
                    roles: node.roles(),
                    host_state: node.state.clone(),
                    host_id: node.id.clone(),
                    cluster_name: cluster.name.clone(),
                    cluster_id: cluster.id.clone(),
                    labels: node.labels.clone(),
                },
            );
        }

        if let Some(components) = &cluster.component_statuses {
            for component in components {
                if component.is_monitored() {
                    group
                        .vars
                        .insert(component.health_var_name(), Value::Bool(component.is_healthy()?));
                }
            }
        }

        group.vars.append(&mut cluster.group_vars());

        self.document.groups.insert(cluster.name.clone(), group);
        Ok(())
    }

    pub fn into_document(self) -> InventoryDocument {
        self.document
    }
}
