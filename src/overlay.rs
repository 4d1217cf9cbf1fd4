//! Use-case detail overlay state.

use crate::model::UseCase;

/// Which control dismissed the overlay. Both behave identically; the
/// distinction only shows up in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseControl {
    /// Header close (Esc)
    Header,
    /// Close button in the body (x)
    Body,
}

#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    open: bool,
    content: Option<UseCase>,
}

impl DetailOverlay {
    pub fn open(&mut self, use_case: UseCase) {
        self.content = Some(use_case);
        self.open = true;
    }

    /// Hide the overlay. Content is kept but no longer reachable.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The displayed use case; `None` while closed
    pub fn content(&self) -> Option<&UseCase> {
        if self.open {
            self.content.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;

    #[test]
    fn closed_overlay_hides_stale_content() {
        let catalog = Catalog::builtin().unwrap();
        let mut overlay = DetailOverlay::default();
        assert!(overlay.content().is_none());

        overlay.open(catalog.use_case("healthcare").unwrap().clone());
        assert!(overlay.is_open());
        assert_eq!(overlay.content().unwrap().id, "healthcare");

        overlay.close();
        assert!(!overlay.is_open());
        assert!(overlay.content().is_none());
    }

    #[test]
    fn reopening_replaces_content() {
        let catalog = Catalog::builtin().unwrap();
        let mut overlay = DetailOverlay::default();
        overlay.open(catalog.use_case("healthcare").unwrap().clone());
        overlay.open(catalog.use_case("finance").unwrap().clone());
        assert_eq!(overlay.content().unwrap().name, "Financial Services KYC");
    }
}
