use std::path::PathBuf;
use std::time::Duration;

/// Run-wide configuration for one inventory build.
pub struct BuilderConfig {
    /// Settings file holding the Rancher URL and credentials.
    pub config_path: PathBuf,
    /// Connect/read timeout applied to every API request.
    pub request_timeout: Duration,
    /// Expose `all.vars.api_url_base` in the output document.
    pub include_connection_vars: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("inventory.yml"),
            request_timeout: Duration::from_secs(60),
            include_connection_vars: true,
        }
    }
}
