use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use fh_core::ports::SettingsPort;
use fh_core::Settings;

/// JSON-file-backed settings repository.
///
/// A missing or empty file yields `Settings::default()`; saving creates
/// the parent directory as needed.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> Option<&Path> {
        self.path.parent()
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.dir() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create settings dir failed: {}", dir.display()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsPort for FileSettingsRepository {
    async fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read settings failed: {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("parse settings failed: {}", self.path.display()))?;
        Ok(settings)
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)
            .await
            .with_context(|| format!("write settings failed: {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}
