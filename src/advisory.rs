//! Small-screen advisory banner and its persisted dismissal flag.
//!
//! The banner suggests a wider terminal when the viewport is narrower than
//! [`SMALL_SCREEN_THRESHOLD`] logical pixels. Terminal columns are converted
//! with the configured cell width. Once dismissed, the choice is written to a
//! [`FlagStore`] and the banner never shows again.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::AdvisoryConfig;

/// Viewport width (px) below which the advisory applies
pub const SMALL_SCREEN_THRESHOLD: u32 = 768;

/// Flag key in the state store
pub const DISMISSED_KEY: &str = "screenSizeNotificationDismissed";

/// Pure visibility rule
pub fn should_show(width_px: u32, dismissed: bool) -> bool {
    !dismissed && width_px < SMALL_SCREEN_THRESHOLD
}

// ─────────────────────────────────────────────────────────────────────────────
// Flag stores
// ─────────────────────────────────────────────────────────────────────────────

/// Minimal string key/value persistence
pub trait FlagStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process store, used in tests and when no state path resolves
#[derive(Debug, Default, Clone)]
pub struct MemoryFlagStore {
    values: HashMap<String, String>,
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flags kept as top-level string keys in a TOML file
#[derive(Debug, Clone)]
pub struct FileFlagStore {
    path: PathBuf,
}

impl FileFlagStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<toml::Table> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Malformed state file {}", self.path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(toml::Table::new()),
            Err(e) => {
                Err(e).with_context(|| format!("Cannot read state file {}", self.path.display()))
            }
        }
    }
}

impl FlagStore for FileFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let table = self.load()?;
        Ok(table.get(key).map(|value| match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking the write
        let mut table = self.load().unwrap_or_default();
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create {}", parent.display()))?;
        }
        let contents = toml::to_string(&table).context("Failed to serialize state")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Cannot write state file {}", self.path.display()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Advisory
// ─────────────────────────────────────────────────────────────────────────────

pub struct ScreenAdvisory {
    store: Box<dyn FlagStore>,
    enabled: bool,
    cell_width_px: u16,
    dismissed: bool,
    width_px: u32,
}

impl ScreenAdvisory {
    /// Reads the dismissal flag once. A store error counts as not dismissed.
    pub fn new(store: Box<dyn FlagStore>, config: &AdvisoryConfig) -> Self {
        let dismissed = match store.get(DISMISSED_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read advisory flag");
                false
            }
        };

        Self {
            store,
            enabled: config.enabled,
            cell_width_px: config.cell_width_px.max(1),
            dismissed,
            width_px: u32::MAX,
        }
    }

    /// Record the current terminal width in columns
    pub fn on_resize(&mut self, columns: u16) {
        self.width_px = u32::from(columns) * u32::from(self.cell_width_px);
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    #[cfg(test)]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn is_visible(&self) -> bool {
        self.enabled && should_show(self.width_px, self.dismissed)
    }

    /// Hide the banner for good. The in-memory dismissal applies even if
    /// persisting it fails; the error is returned for the caller to report.
    pub fn dismiss(&mut self) -> Result<()> {
        if self.dismissed {
            return Ok(());
        }
        self.dismissed = true;
        tracing::info!("Screen size advisory dismissed");
        self.store.set(DISMISSED_KEY, "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AdvisoryConfig {
        AdvisoryConfig {
            enabled: true,
            cell_width_px: 8,
        }
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(should_show(767, false));
        assert!(!should_show(768, false));
        assert!(!should_show(1920, false));
        assert!(!should_show(500, true));
    }

    #[test]
    fn columns_convert_with_cell_width() {
        let mut advisory = ScreenAdvisory::new(Box::new(MemoryFlagStore::default()), &config());
        advisory.on_resize(95);
        assert_eq!(advisory.width_px(), 760);
        assert!(advisory.is_visible());

        advisory.on_resize(96);
        assert_eq!(advisory.width_px(), 768);
        assert!(!advisory.is_visible());
    }

    #[test]
    fn dismissal_sticks() {
        let mut advisory = ScreenAdvisory::new(Box::new(MemoryFlagStore::default()), &config());
        advisory.on_resize(40);
        assert!(advisory.is_visible());

        advisory.dismiss().unwrap();
        advisory.on_resize(62);
        assert!(!advisory.is_visible());
    }

    #[test]
    fn disabled_advisory_never_shows() {
        let config = AdvisoryConfig {
            enabled: false,
            cell_width_px: 8,
        };
        let mut advisory = ScreenAdvisory::new(Box::new(MemoryFlagStore::default()), &config);
        advisory.on_resize(10);
        assert!(!advisory.is_visible());
    }

    #[test]
    fn file_store_persists_dismissal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.toml");

        let mut advisory = ScreenAdvisory::new(Box::new(FileFlagStore::new(&path)), &config());
        assert!(!advisory.is_dismissed());
        advisory.dismiss().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("screenSizeNotificationDismissed = \"true\""));

        // Next session reads it back
        let mut reopened = ScreenAdvisory::new(Box::new(FileFlagStore::new(&path)), &config());
        assert!(reopened.is_dismissed());
        reopened.on_resize(62);
        assert!(!reopened.is_visible());
    }

    #[test]
    fn file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        std::fs::write(&path, "other = \"kept\"\n").unwrap();

        let mut store = FileFlagStore::new(&path);
        store.set(DISMISSED_KEY, "true").unwrap();
        assert_eq!(store.get("other").unwrap().as_deref(), Some("kept"));
        assert_eq!(store.get(DISMISSED_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn unreadable_state_counts_as_not_dismissed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let advisory = ScreenAdvisory::new(Box::new(FileFlagStore::new(&path)), &config());
        assert!(!advisory.is_dismissed());
    }
}
