// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crate::overlay::CloseControl;
use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the help modal
    Close,
    /// Close the use-case detail through one of its two controls
    CloseDetail(CloseControl),
    /// Let the key through to the global layer (quit)
    Passthrough,
}

/// Available modal types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Use-case detail; content lives in the controller's overlay
    UseCaseDetail,
}

impl Modal {
    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') => ModalAction::Close,
                KeyCode::Char('q') => ModalAction::Passthrough,
                _ => ModalAction::None,
            },
            Modal::UseCaseDetail => match key {
                KeyCode::Esc => ModalAction::CloseDetail(CloseControl::Header),
                KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Enter => {
                    ModalAction::CloseDetail(CloseControl::Body)
                }
                KeyCode::Char('q') => ModalAction::Passthrough,
                _ => ModalAction::None,
            },
        }
    }
}
