//! Toast rendering
//!
//! Renders the toast overlay in the top-right corner of the frame.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::toast_state::ToastState;
use crate::widgets::popup;

/// Render the toast overlay in the top-right corner of the frame
///
/// This function should be called after rendering the main UI so the
/// toast appears on top of other content. Expired toasts are cleared
/// here, so calling it every frame is what drives the auto-hide.
pub fn render_toast(frame: &mut Frame, toast_state: &mut ToastState) {
    toast_state.clear_if_expired();

    let toast = match toast_state.current() {
        Some(t) => t,
        None => return,
    };

    let message = &toast.message;
    let style = &toast.style;

    // Width: message length + padding (1 char each side) + borders (2)
    let content_width = message.chars().count() as u16;
    let toast_width = content_width + 4;
    let toast_height = 3; // 1 line content + 2 borders

    // Position in top-right corner with small margin
    let frame_area = frame.area();
    let margin = 2;
    let toast_x = frame_area.width.saturating_sub(toast_width + margin);
    let toast_y = margin;

    let toast_area = Rect {
        x: toast_x,
        y: toast_y,
        width: toast_width.min(frame_area.width.saturating_sub(margin * 2)),
        height: toast_height.min(frame_area.height.saturating_sub(margin * 2)),
    };

    // Don't render if area is too small
    if toast_area.width < 5 || toast_area.height < 3 {
        return;
    }

    // Clear background for floating effect
    popup::clear_area(frame, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    let paragraph = Paragraph::new(text).block(block);

    frame.render_widget(paragraph, toast_area);
}

#[cfg(test)]
#[path = "toast_render_tests.rs"]
mod toast_render_tests;
