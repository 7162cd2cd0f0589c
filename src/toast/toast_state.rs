//! Toast state management
//!
//! A toast is either visible or hidden. Showing a message replaces the
//! current toast and restarts the hide timer; the toast hides itself once
//! its duration has elapsed.

use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::theme;

/// Hide delay used when no duration is configured
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Toast kind - determines the style, not the duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Green confirmation, e.g. "Copied manifest URL to clipboard"
    #[default]
    Success,
    /// Red failure report, e.g. "Failed to copy to clipboard"
    Error,
}

impl ToastKind {
    fn style(self) -> ToastStyle {
        let colors = match self {
            ToastKind::Success => theme::toast::SUCCESS,
            ToastKind::Error => theme::toast::ERROR,
        };
        ToastStyle {
            fg: colors.fg,
            bg: colors.bg,
            border: colors.border,
        }
    }
}

/// Style configuration for a toast
#[derive(Debug, Clone)]
pub struct ToastStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// A single toast with message, timing, and style
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub style: ToastStyle,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: &str, kind: ToastKind, duration: Duration) -> Self {
        Self {
            message: message.to_string(),
            style: kind.style(),
            kind,
            shown_at: Instant::now(),
            duration,
        }
    }

    /// Check if the toast has outlived its duration
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() > self.duration
    }
}

/// Toast state manager for the application
#[derive(Debug)]
pub struct ToastState {
    pub current: Option<Toast>,
    duration: Duration,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::with_duration(DEFAULT_TOAST_DURATION)
    }
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Show a success toast. Replaces the current toast and restarts the timer.
    pub fn show(&mut self, message: &str) {
        self.show_with_kind(message, ToastKind::Success);
    }

    /// Show an error toast. Replaces the current toast and restarts the timer.
    pub fn show_error(&mut self, message: &str) {
        self.show_with_kind(message, ToastKind::Error);
    }

    fn show_with_kind(&mut self, message: &str, kind: ToastKind) {
        self.current = Some(Toast::new(message, kind, self.duration));
    }

    /// Clear an expired toast, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref toast) = self.current
            && toast.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    /// Get the current toast if visible
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Get the current toast message if visible (test-only)
    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|t| t.message.as_str())
    }
}

#[cfg(test)]
#[path = "toast_state_tests.rs"]
mod toast_state_tests;
