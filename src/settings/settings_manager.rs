use crate::settings::settings::Settings;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct SettingsManager {
    settings_file_name: PathBuf,
}

impl SettingsManager {
    pub fn new(settings_file_name: &Path) -> Self {
        Self {
            settings_file_name: settings_file_name.to_path_buf(),
        }
    }

    pub async fn load_settings_from_file(&self) -> Result<Settings> {
        let content = tokio::fs::read_to_string(&self.settings_file_name)
            .await
            .with_context(|| {
                format!(
                    "Failed to read settings file: {}",
                    self.settings_file_name.display()
                )
            })?;

        serde_yaml::from_str(&content).with_context(|| {
            format!(
                "Failed to deserialize settings file: {}",
                self.settings_file_name.display()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_settings_from_a_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "main:\n  rancher_url: https://rancher.example.com\n  rancher_token: token-abc:secret\n  ssl_verify: \"true\""
        )
        .unwrap();

        let manager = SettingsManager::new(file.path());
        let settings = manager.load_settings_from_file().await.unwrap();
        assert_eq!(settings.main.rancher_token, "token-abc:secret");
        assert!(settings.main.ssl_verify_enabled());
    }

    #[tokio::test]
    async fn a_missing_file_is_reported_with_its_path() {
        let manager = SettingsManager::new(Path::new("does-not-exist.yml"));
        let error = manager.load_settings_from_file().await.unwrap_err();
        assert!(error.to_string().contains("does-not-exist.yml"));
    }
}
