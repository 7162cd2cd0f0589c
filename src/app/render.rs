use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::App;
use crate::theme;
use crate::toast::render_toast;
use crate::widgets::popup;

// URL field display constants
const URL_FIELD_HEIGHT: u16 = 3;
const URL_FIELD_MARGIN: u16 = 2;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Split the terminal into three areas: spacer, URL field, and help
        let layout = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(URL_FIELD_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_url_field(frame, layout[1]);
        self.render_help_line(frame, layout[2]);

        // Render the toast last so it overlays other widgets
        render_toast(frame, &mut self.toast);
    }

    /// Render the bordered manifest URL field
    fn render_url_field(&self, frame: &mut Frame, area: Rect) {
        let area = popup::inset_rect(area, URL_FIELD_MARGIN, 0);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::url_field::BORDER))
            .title(Span::styled(
                " Manifest URL ",
                Style::default().fg(theme::url_field::TITLE),
            ));

        // Highlight the whole value while selected, mirrors select-all on copy
        let url_style = if self.url_selected() {
            theme::url_field::SELECTED
        } else {
            Style::default().fg(theme::url_field::URL)
        };

        let text = Line::from(Span::styled(self.url().to_string(), url_style));
        let paragraph = Paragraph::new(text).block(block);

        frame.render_widget(paragraph, area);
    }

    /// Render the help line (bottom)
    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let spans = vec![
            Span::styled("c/y/Enter", Style::default().fg(theme::help::KEY)),
            Span::styled(" copy    ", Style::default().fg(theme::help::LABEL)),
            Span::styled("q/Esc", Style::default().fg(theme::help::KEY)),
            Span::styled(" quit", Style::default().fg(theme::help::LABEL)),
        ];

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::clipboard_events;
    use crate::config::{ClipboardBackend, Config};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn test_app(url: &str) -> App {
        let mut config = Config::default();
        config.clipboard.backend = ClipboardBackend::Osc52;
        App::new(url.to_string(), &config)
    }

    fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_render_shows_url_and_help() {
        let mut app = test_app("https://example.com/manifest.json");
        let output = render_to_string(&mut app, 80, 24);

        assert!(output.contains("Manifest URL"));
        assert!(output.contains("https://example.com/manifest.json"));
        assert!(output.contains("copy"));
        assert!(output.contains("quit"));
    }

    #[test]
    fn test_render_after_copy_shows_toast() {
        let mut app = test_app("https://example.com/manifest.json");
        clipboard_events::copy_manifest_url(&mut app);

        let output = render_to_string(&mut app, 80, 24);
        assert!(output.contains("Copied manifest URL to clipboard"));
    }

    #[test]
    fn test_render_small_terminal_does_not_panic() {
        let mut app = test_app("https://example.com/manifest.json");
        let output = render_to_string(&mut app, 10, 4);
        assert!(!output.is_empty());
    }
}
