use clap::Parser;
use colored::Colorize;
use std::process;

use rancher_inventory::build_inventory;
use rancher_inventory::clap_parser::Args;
use rancher_inventory::inventory::builder_config::BuilderConfig;
use rancher_inventory::inventory::document::InventoryDocument;
use rancher_inventory::rancher::api_error::ApiError;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let inventory = if args.list {
        build_or_exit(&BuilderConfig::default()).await
    } else {
        // `--host` and the no-flag call both answer with the empty
        // inventory; per-host variables come from `_meta.hostvars`.
        InventoryDocument::empty()
    };

    match serde_json::to_string(&inventory) {
        Ok(json) => println!("{}", json),
        Err(error) => {
            eprintln!("{}", error.to_string().red());
            process::exit(1);
        }
    }
}

async fn build_or_exit(config: &BuilderConfig) -> InventoryDocument {
    match build_inventory(config).await {
        Ok(document) => document,
        Err(error) => {
            eprintln!("{}", format!("{error:#}").red());
            if error.downcast_ref::<ApiError>().is_some() {
                process::exit(255);
            }
            process::exit(1);
        }
    }
}
