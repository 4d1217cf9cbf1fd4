//! Configuration for the dashboard
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/identity-lens/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::controller::ActiveView;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;


pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name under ~/.config
const APP_DIR: &str = "identity-lens";

const DEFAULT_THEME: &str = "Indigo";
const DEFAULT_TICK_RATE_MS: u64 = 200;
const MIN_TICK_RATE_MS: u64 = 16;

// ─────────────────────────────────────────────────────────────────────────────
// Advisory Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Small-screen advisory settings
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisoryConfig {
    /// Show the banner at all
    pub enabled: bool,
    /// Pixels per terminal column when converting to a viewport width
    pub cell_width_px: u16,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cell_width_px: 8,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileAdvisory {
    pub enabled: Option<bool>,
    pub cell_width_px: Option<u16>,
}

impl AdvisoryConfig {
    pub fn from_file(file: Option<FileAdvisory>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            enabled: file.enabled.unwrap_or(defaults.enabled),
            cell_width_px: file
                .cell_width_px
                .filter(|w| *w > 0)
                .unwrap_or(defaults.cell_width_px),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Indigo", "Terminal", "Daylight"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Redraw cadence in milliseconds (the animation step period is fixed)
    pub tick_rate_ms: u64,

    /// Panel shown at startup
    pub start_view: ActiveView,

    /// Small-screen advisory
    pub advisory: AdvisoryConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Where the advisory dismissal flag lives; `None` keeps it in memory
    pub state_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            use_theme_background: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            start_view: ActiveView::Dashboard,
            advisory: AdvisoryConfig::default(),
            logging: LoggingConfig::default(),
            state_file: Self::default_state_path(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub tick_rate_ms: Option<u64>,
    pub start_view: Option<String>,

    /// Optional [advisory] section
    pub advisory: Option<FileAdvisory>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/identity-lens/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join(APP_DIR).join("config.toml"))
    }

    /// Default state file: ~/.config/identity-lens/state.toml
    pub fn default_state_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join(APP_DIR).join("state.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Config::default().to_toml() is the single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// Exits the process if the file exists but cannot be read or parsed:
    /// a broken config fails fast instead of silently falling back to
    /// defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Invalid boolean values (use true/false)");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run: identity-lens config --reset\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with environment lookups
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default
        let theme = env("IDLENS_THEME")
            .filter(|t| !t.trim().is_empty())
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        let use_theme_background = file.use_theme_background.unwrap_or(true);

        // Tick rate: file > default, never below MIN_TICK_RATE_MS
        let tick_rate_ms = file
            .tick_rate_ms
            .unwrap_or(DEFAULT_TICK_RATE_MS)
            .max(MIN_TICK_RATE_MS);

        let start_view = file
            .start_view
            .as_deref()
            .and_then(ActiveView::parse)
            .unwrap_or_default();

        // State file: env > default location
        let state_file = env("IDLENS_STATE_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(|p| expand_home(&p))
            .or_else(Self::default_state_path);

        Self {
            theme,
            use_theme_background,
            tick_rate_ms,
            start_view,
            advisory: AdvisoryConfig::from_file(file.advisory),
            logging: LoggingConfig::from_file(file.logging),
            state_file,
        }
    }
}

/// Expand a leading `~/` to the home directory
pub(crate) fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Render a path for the config template, shortening the home directory to `~`
pub(crate) fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rest) = path.strip_prefix(&home) {
            return format!("~/{}", rest.display());
        }
    }
    path.display().to_string()
}
