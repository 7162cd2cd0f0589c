use std::time::Duration;

use crate::config::{ClipboardBackend, Config};
use crate::toast::ToastState;

/// Application state
pub struct App {
    /// The manifest URL on display. Read-only after construction.
    url: String,
    url_selected: bool,
    pub toast: ToastState,
    pub clipboard_backend: ClipboardBackend,
    should_quit: bool,
}

impl App {
    /// Create a new App instance holding the manifest URL to copy
    pub fn new(url: String, config: &Config) -> Self {
        Self {
            url,
            url_selected: false,
            toast: ToastState::with_duration(Duration::from_millis(config.toast.duration_ms)),
            clipboard_backend: config.clipboard.backend,
            should_quit: false,
        }
    }

    /// Get the manifest URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Mark the URL field as selected. Purely cosmetic, the render highlights it.
    pub fn select_url(&mut self) {
        self.url_selected = true;
    }

    pub fn url_selected(&self) -> bool {
        self.url_selected
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
