use serde::{Deserialize, Serialize};

/// Strings accepted as "verification on" for the `ssl_verify` flag.
const TRUTHY: [&str; 4] = ["true", "yes", "on", "1"];

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct Settings {
    pub main: MainSettings,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct MainSettings {
    pub rancher_url: String,
    pub rancher_token: String,
    pub ssl_verify: String,
}

impl MainSettings {
    pub fn api_url_base(&self) -> String {
        format!("{}/v3", self.rancher_url)
    }

    pub fn ssl_verify_enabled(&self) -> bool {
        let flag = self.ssl_verify.trim().to_lowercase();
        TRUTHY.contains(&flag.as_str())
    }
}
