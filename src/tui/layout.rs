/// Responsive breakpoints for panel layout decisions.
///
/// Single source of truth for column thresholds, so render code never
/// compares against raw widths.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: panels stack vertically, charts shrink to essentials
    Compact,
    /// 60-99 cols: two-column rows
    Normal,
    /// 100-139 cols: three cards per row, side legends
    Wide,
    /// 140+ cols: everything side by side
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(self, min: Breakpoint) -> bool {
        self >= min
    }

    /// How many cards fit side by side on the dashboard and use-case rows
    pub fn card_columns(self) -> usize {
        match self {
            Breakpoint::Compact => 1,
            Breakpoint::Normal => 1,
            _ => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(140), Breakpoint::UltraWide);
    }

    #[test]
    fn cards_stack_below_wide() {
        assert_eq!(Breakpoint::Normal.card_columns(), 1);
        assert_eq!(Breakpoint::Wide.card_columns(), 3);
        assert!(Breakpoint::UltraWide.at_least(Breakpoint::Wide));
        assert!(!Breakpoint::Compact.at_least(Breakpoint::Normal));
    }
}
