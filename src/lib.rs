//! maniclip library - manifest URL clipboard tool
//!
//! This library exposes the core functionality of maniclip for testing purposes.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod theme;
pub mod toast;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
