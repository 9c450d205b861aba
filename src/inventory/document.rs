use crate::inventory::group::Group;
use crate::inventory::host_vars::HostVars;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The dynamic-inventory document printed on stdout.
///
/// Top-level keys are cluster groups plus the reserved `_meta` entry and,
/// when connection vars are enabled, an `all` entry. The empty document
/// serializes to `{"_meta":{"hostvars":{}}}`.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct InventoryDocument {
    #[serde(rename = "_meta")]
    pub meta: Meta,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<AllGroup>,

    #[serde(flatten)]
    pub groups: BTreeMap<String, Group>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Default)]
pub struct Meta {
    pub hostvars: BTreeMap<String, HostVars>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct AllGroup {
    pub vars: ConnectionVars,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct ConnectionVars {
    pub api_url_base: String,
}

impl InventoryDocument {
    /// The inventory returned for `--host` and no-flag invocations.
    pub fn empty() -> Self {
        Self {
            meta: Meta::default(),
            all: None,
            groups: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_serializes_to_bare_meta() {
        let document = InventoryDocument::empty();
        assert_eq!(
            serde_json::to_string(&document).unwrap(),
            r#"{"_meta":{"hostvars":{}}}"#
        );
    }

    #[test]
    fn connection_vars_appear_under_all() {
        let mut document = InventoryDocument::empty();
        document.all = Some(AllGroup {
            vars: ConnectionVars {
                api_url_base: "https://rancher.example.com/v3".to_string(),
            },
        });
        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(
            value["all"]["vars"]["api_url_base"],
            "https://rancher.example.com/v3"
        );
    }
}
