// Theme system for the TUI
//
// Three built-in palettes, switchable at runtime with `T`:
// - Indigo: true color, the dashboard's signature look (default)
// - Terminal: ANSI colors only, follows the terminal's own palette
// - Daylight: true color on a light background
//
// Series and flow colors are part of the theme so charts, the radar and the
// architecture diagram stay consistent with each other.

use crate::model::{NodeCategory, SystemKind};
use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Names accepted by [`Theme::by_name`], in cycling order
pub const THEME_NAMES: [&str; 3] = ["Indigo", "Terminal", "Daylight"];

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,

    // ─── Series Colors (one per system) ──────────────────────
    pub traditional: Color,
    pub blockchain: Color,
    pub hybrid: Color,

    // ─── Diagram Flow States ─────────────────────────────────
    pub flow_pending: Color,
    pub flow_active: Color,
    pub flow_completed: Color,

    // ─── Diagram Node Categories ─────────────────────────────
    pub node_actor: Color,
    pub node_interface: Color,
    pub node_service: Color,
    pub node_storage: Color,
    pub node_network: Color,

    // ─── Log Levels ──────────────────────────────────────────
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name with default configuration
    #[cfg(test)]
    pub fn by_name(name: &str) -> Self {
        Self::by_name_with_config(name, &ThemeConfig::default())
    }

    /// Load theme by name; unknown names fall back to Indigo
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        let mut theme = match name.trim().to_lowercase().as_str() {
            "terminal" | "auto" => Self::terminal(),
            "daylight" | "light" => Self::daylight(),
            "indigo" => Self::indigo(),
            other => {
                tracing::warn!(theme = other, "Unknown theme, using Indigo");
                Self::indigo()
            }
        };
        if !config.use_theme_background {
            theme.background = Color::Reset;
        }
        theme
    }

    /// Name of the theme after `current` in [`THEME_NAMES`]
    pub fn next_name(current: &str) -> &'static str {
        let idx = THEME_NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(current))
            .unwrap_or(0);
        THEME_NAMES[(idx + 1) % THEME_NAMES.len()]
    }

    pub fn series(&self, kind: SystemKind) -> Color {
        match kind {
            SystemKind::Traditional => self.traditional,
            SystemKind::Blockchain => self.blockchain,
            SystemKind::Hybrid => self.hybrid,
        }
    }

    pub fn node(&self, category: NodeCategory) -> Color {
        match category {
            NodeCategory::Actor => self.node_actor,
            NodeCategory::Interface => self.node_interface,
            NodeCategory::Service => self.node_service,
            NodeCategory::Storage => self.node_storage,
            NodeCategory::Network => self.node_network,
        }
    }

    /// Indigo - true color dark theme
    pub fn indigo() -> Self {
        Self {
            name: "Indigo".to_string(),
            background: rgb(0x1e1b3a),
            foreground: rgb(0xe0e7ff),
            muted: rgb(0x8b8fb3),
            title: rgb(0xa5b4fc),
            border: rgb(0x4338ca),
            highlight: rgb(0x818cf8),
            status_bar: rgb(0xc7d2fe),
            selection: rgb(0x3730a3),
            selection_fg: rgb(0xffffff),
            positive: rgb(0x10b981),
            negative: rgb(0xef4444),
            warning: rgb(0xf59e0b),
            traditional: rgb(0x8884d8),
            blockchain: rgb(0x82ca9d),
            hybrid: rgb(0xffc658),
            flow_pending: rgb(0x6b7280),
            flow_active: rgb(0x818cf8),
            flow_completed: rgb(0x10b981),
            node_actor: rgb(0xc084fc),
            node_interface: rgb(0x60a5fa),
            node_service: rgb(0x4ade80),
            node_storage: rgb(0xfacc15),
            node_network: rgb(0xf87171),
            log_error: rgb(0xef4444),
            log_warn: rgb(0xf59e0b),
            log_info: rgb(0xa5b4fc),
            log_debug: rgb(0x8b8fb3),
            border_type: BorderType::Rounded,
        }
    }

    /// Terminal - ANSI palette, respects the terminal's colors
    pub fn terminal() -> Self {
        Self {
            name: "Terminal".to_string(),
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            highlight: Color::Cyan,
            status_bar: Color::Gray,
            selection: Color::DarkGray,
            selection_fg: Color::White,
            positive: Color::Green,
            negative: Color::Red,
            warning: Color::Yellow,
            traditional: Color::Blue,
            blockchain: Color::Green,
            hybrid: Color::Yellow,
            flow_pending: Color::DarkGray,
            flow_active: Color::Cyan,
            flow_completed: Color::Green,
            node_actor: Color::Magenta,
            node_interface: Color::Blue,
            node_service: Color::Green,
            node_storage: Color::Yellow,
            node_network: Color::Red,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Cyan,
            log_debug: Color::DarkGray,
            border_type: BorderType::Plain,
        }
    }

    /// Daylight - light background, the palette of the web dashboard
    pub fn daylight() -> Self {
        Self {
            name: "Daylight".to_string(),
            background: rgb(0xf9fafb),
            foreground: rgb(0x1f2937),
            muted: rgb(0x6b7280),
            title: rgb(0x4338ca),
            border: rgb(0xd1d5db),
            highlight: rgb(0x4f46e5),
            status_bar: rgb(0x374151),
            selection: rgb(0xe0e7ff),
            selection_fg: rgb(0x3730a3),
            positive: rgb(0x059669),
            negative: rgb(0xdc2626),
            warning: rgb(0xd97706),
            traditional: rgb(0x8884d8),
            blockchain: rgb(0x82ca9d),
            hybrid: rgb(0xffc658),
            flow_pending: rgb(0xd1d5db),
            flow_active: rgb(0x4f46e5),
            flow_completed: rgb(0x10b981),
            node_actor: rgb(0x9333ea),
            node_interface: rgb(0x2563eb),
            node_service: rgb(0x16a34a),
            node_storage: rgb(0xca8a04),
            node_network: rgb(0xdc2626),
            log_error: rgb(0xdc2626),
            log_warn: rgb(0xd97706),
            log_info: rgb(0x4338ca),
            log_debug: rgb(0x6b7280),
            border_type: BorderType::Rounded,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::indigo()
    }
}

fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(Theme::by_name("daylight").name, "Daylight");
        assert_eq!(Theme::by_name("TERMINAL").name, "Terminal");
        assert_eq!(Theme::by_name("no-such-theme").name, "Indigo");
    }

    #[test]
    fn cycling_visits_every_theme() {
        let mut name = "Indigo";
        let mut seen = vec![name];
        for _ in 0..THEME_NAMES.len() - 1 {
            name = Theme::next_name(name);
            seen.push(name);
        }
        assert_eq!(seen, THEME_NAMES.to_vec());
        assert_eq!(Theme::next_name("Daylight"), "Indigo");
    }

    #[test]
    fn series_colors_match_chart_palette() {
        let theme = Theme::indigo();
        assert_eq!(theme.series(SystemKind::Traditional), Color::Rgb(0x88, 0x84, 0xd8));
        assert_eq!(theme.series(SystemKind::Hybrid), Color::Rgb(0xff, 0xc6, 0x58));
    }

    #[test]
    fn background_can_defer_to_terminal() {
        let config = ThemeConfig {
            use_theme_background: false,
        };
        assert_eq!(
            Theme::by_name_with_config("Daylight", &config).background,
            Color::Reset
        );
    }
}
