use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Control-plane components surfaced as group health vars.
const MONITORED_COMPONENTS: [&str; 2] = ["controller-manager", "etcd"];

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ComponentStatus {
    pub name: String,
    pub conditions: Vec<ComponentCondition>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ComponentCondition {
    pub status: String,
}

impl ComponentStatus {
    /// Whether this component contributes a health var to its cluster group.
    /// Matched by name containment so numbered members (`etcd-0`, `etcd-1`)
    /// are picked up too.
    pub fn is_monitored(&self) -> bool {
        MONITORED_COMPONENTS
            .iter()
            .any(|component| self.name.contains(component))
    }

    /// Group var name for this component, e.g. `controller-manager` becomes
    /// `controller_manager_healthy`.
    pub fn health_var_name(&self) -> String {
        format!("{}_healthy", self.name.to_lowercase().replace('-', "_"))
    }

    /// Health is the truthiness of the first condition's status string:
    /// any non-empty status counts as healthy.
    pub fn is_healthy(&self) -> Result<bool> {
        let condition = self
            .conditions
            .first()
            .with_context(|| format!("Component {} has no reported conditions", self.name))?;
        Ok(!condition.status.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(name: &str, status: &str) -> ComponentStatus {
        ComponentStatus {
            name: name.to_string(),
            conditions: vec![ComponentCondition {
                status: status.to_string(),
            }],
        }
    }

    #[test]
    fn etcd_members_and_controller_manager_are_monitored() {
        assert!(component("controller-manager", "True").is_monitored());
        assert!(component("etcd-0", "True").is_monitored());
        assert!(!component("scheduler", "True").is_monitored());
    }

    #[test]
    fn health_var_name_is_lowercased_and_underscored() {
        assert_eq!(
            component("controller-manager", "True").health_var_name(),
            "controller_manager_healthy"
        );
        assert_eq!(component("etcd-0", "True").health_var_name(), "etcd_0_healthy");
    }

    #[test]
    fn non_empty_status_counts_as_healthy() {
        assert!(component("etcd", "True").is_healthy().unwrap());
        assert!(!component("etcd", "").is_healthy().unwrap());
    }

    #[test]
    fn missing_conditions_are_an_error() {
        let component = ComponentStatus {
            name: "etcd".to_string(),
            conditions: Vec::new(),
        };
        assert!(component.is_healthy().is_err());
    }
}
