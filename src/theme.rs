//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);

    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);
}

/// Manifest URL field styles
pub mod url_field {
    use super::*;

    pub const BORDER: Color = Color::Rgb(0, 217, 255);
    pub const URL: Color = palette::TEXT;
    pub const TITLE: Color = Color::Rgb(189, 147, 249);

    /// Applied to the URL text while it is selected (after a copy trigger)
    pub const SELECTED: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Toast overlay styles
pub mod toast {
    use super::*;

    pub struct ToastColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const SUCCESS: ToastColors = ToastColors {
        fg: Color::Rgb(26, 26, 46),
        bg: palette::SUCCESS,
        border: palette::SUCCESS,
    };

    pub const ERROR: ToastColors = ToastColors {
        fg: palette::TEXT,
        bg: palette::ERROR,
        border: Color::Rgb(255, 107, 157),
    };
}

/// Help line styles
pub mod help {
    use super::*;

    pub const KEY: Color = Color::Rgb(255, 217, 61);
    pub const LABEL: Color = palette::TEXT_DIM;
}
