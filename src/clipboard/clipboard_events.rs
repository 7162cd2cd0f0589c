//! Clipboard event handlers
//!
//! Handles keybindings for the copy flow and converts every copy outcome,
//! success or failure, into a toast. The copy flow itself never fails.

use crate::app::App;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::backend::{ClipboardResult, copy_to_clipboard};

/// Toast shown when the manifest URL reached a clipboard backend
pub const COPIED_MESSAGE: &str = "Copied manifest URL to clipboard";

/// Toast shown when every backend in the chain failed
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

/// Handle clipboard-related key events
/// Returns true if the key was handled
pub fn handle_copy_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        // Ctrl+Y - copy (Ctrl+C stays reserved for quit)
        if key.code == KeyCode::Char('y') {
            copy_manifest_url(app);
            return true;
        }
        return false;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('y') | KeyCode::Enter => {
            copy_manifest_url(app);
            true
        }
        _ => false,
    }
}

/// Run the copy flow: select the URL field, try the backend chain, toast the outcome
pub fn copy_manifest_url(app: &mut App) {
    // Selection is cosmetic and has no effect on the copy itself
    app.select_url();

    let result = copy_to_clipboard(app.url(), app.clipboard_backend);
    report_copy_outcome(app, result);
}

fn report_copy_outcome(app: &mut App, result: ClipboardResult) {
    match result {
        Ok(()) => app.toast.show(COPIED_MESSAGE),
        Err(_) => app.toast.show_error(COPY_FAILED_MESSAGE),
    }
}

#[cfg(test)]
#[path = "clipboard_events_tests.rs"]
mod clipboard_events_tests;
