//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::{display_path, Config};

impl Config {
    /// Serialize config to a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# identity-lens configuration

# Theme: Indigo, Terminal, Daylight (press 'T' in the TUI to cycle)
theme = "{theme}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Redraw interval in milliseconds (the 2s flow animation step is fixed)
tick_rate_ms = {tick_rate}

# Panel shown at startup: dashboard, architectures, comparison, usecases
start_view = "{start_view}"

# Banner suggesting a wider terminal for the animated diagrams
[advisory]
enabled = {advisory_enabled}
# Pixels per column used to estimate the viewport width (threshold: 768px)
cell_width_px = {cell_width}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the TUI log panel)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            use_bg = self.use_theme_background,
            tick_rate = self.tick_rate_ms,
            start_view = self.start_view.as_str(),
            advisory_enabled = self.advisory.enabled,
            cell_width = self.advisory.cell_width_px,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = display_path(&self.logging.file_dir),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
