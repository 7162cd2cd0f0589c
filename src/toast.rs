//! Toast module for maniclip
//!
//! Provides the transient notification overlay used to report copy outcomes.
//! Any component in the application can use this module to show a toast.

mod toast_render;
mod toast_state;

pub use toast_render::render_toast;
pub use toast_state::{DEFAULT_TOAST_DURATION, Toast, ToastKind, ToastState, ToastStyle};
