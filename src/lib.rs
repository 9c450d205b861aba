//! Ansible dynamic inventory for Rancher.
//!
//! Queries the Rancher v3 API for clusters and their nodes and reshapes
//! the results into the grouped document Ansible expects from a dynamic
//! inventory script.

pub mod clap_parser;
pub mod inventory;
pub mod rancher;
pub mod settings;

use anyhow::Result;

use crate::inventory::builder_config::BuilderConfig;
use crate::inventory::document::InventoryDocument;
use crate::inventory::inventory_builder::InventoryBuilder;
use crate::rancher::rancher_client::RancherClient;
use crate::settings::settings_manager::SettingsManager;

/// Builds the full inventory: loads the settings file, then walks the API
/// cluster by cluster. Fetches are strictly sequential; the nodes of one
/// cluster are fetched before the next cluster is touched.
pub async fn build_inventory(config: &BuilderConfig) -> Result<InventoryDocument> {
    let settings_manager = SettingsManager::new(&config.config_path);
    let settings = settings_manager.load_settings_from_file().await?;

    let client = RancherClient::new(&settings, config.request_timeout)?;
    let mut builder = InventoryBuilder::new(config, client.api_url_base());

    let clusters = client.get_clusters().await?;
    for cluster in clusters {
        let nodes = client.get_nodes(&cluster.id).await?;
        builder.add_cluster(&cluster, &nodes)?;
    }

    Ok(builder.into_document())
}
