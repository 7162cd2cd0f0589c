use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::state::App;
use crate::clipboard;

/// Timeout for event polling - allows periodic UI refresh for toast expiration
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Poll with timeout so the toast is re-rendered and hidden on schedule
        // even when no input arrives
        if event::poll(EVENT_POLL_TIMEOUT)? {
            // Check that it's a key press event to avoid duplicates
            if let Event::Key(key_event) = event::read()?
                && key_event.kind == KeyEventKind::Press
            {
                self.handle_key_event(key_event);
            }
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_quit_key(key) {
            return;
        }

        clipboard::clipboard_events::handle_copy_key(self, key);
    }

    fn handle_quit_key(&mut self, key: KeyEvent) -> bool {
        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.quit();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClipboardBackend, Config};

    fn test_app() -> App {
        let mut config = Config::default();
        config.clipboard.backend = ClipboardBackend::Osc52;
        App::new("https://example.com/manifest.json".to_string(), &config)
    }

    #[test]
    fn test_q_quits() {
        let mut app = test_app();
        app.handle_key_event(KeyEvent::from(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_esc_quits() {
        let mut app = test_app();
        app.handle_key_event(KeyEvent::from(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = test_app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
        assert!(app.toast.current().is_none());
    }

    #[test]
    fn test_copy_key_reaches_clipboard_handler() {
        let mut app = test_app();
        app.handle_key_event(KeyEvent::from(KeyCode::Char('c')));
        assert!(!app.should_quit());
        assert!(app.toast.current().is_some());
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut app = test_app();
        app.handle_key_event(KeyEvent::from(KeyCode::Char('z')));
        assert!(!app.should_quit());
        assert!(app.toast.current().is_none());
    }
}
