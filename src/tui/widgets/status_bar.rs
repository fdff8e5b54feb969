use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthStr;

use crate::config::ThemeConfig;

use super::RenderableWidget;

/// Two-row status bar: a rule, then the status message on the left and the
/// last confirmation on the right
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    pub message: Option<String>,
    pub is_error: bool,
    pub confirmation: Option<String>,
}

impl StatusBar {
    pub fn new(message: Option<&str>, is_error: bool, confirmation: Option<&str>) -> Self {
        Self {
            message: message.map(str::to_string),
            is_error,
            confirmation: confirmation.map(str::to_string),
        }
    }

    fn left_text(&self) -> String {
        match &self.message {
            Some(msg) if self.is_error => format!("ERROR: {}", msg),
            Some(msg) => msg.clone(),
            None => String::new(),
        }
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.height < 2 || area.width == 0 {
            return;
        }
        buf.set_string(area.x, area.y, "─".repeat(area.width as usize), Style::default());

        let y = area.y + 1;
        let left = self.left_text();
        let left_style = if self.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        buf.set_stringn(area.x + 1, y, &left, area.width.saturating_sub(1) as usize, left_style);

        if let Some(confirmation) = &self.confirmation {
            let width = confirmation.width() as u16 + 3;
            let left_used = left.width() as u16 + 2;
            if width + left_used <= area.width {
                let x = area.x + area.width - width;
                buf.set_string(x, y, "│ ", Style::default());
                buf.set_string(x + 2, y, confirmation, Style::default().fg(theme.selection_fg));
            }
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::assert_buffer;

    fn render(bar: &StatusBar, width: u16) -> Buffer {
        let area = Rect::new(0, 0, width, 2);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf, &ThemeConfig::default());
        buf
    }

    #[test]
    fn test_message_and_confirmation() {
        let bar = StatusBar::new(Some("Ready"), false, Some("GOAL - #9 Julia Szabo"));
        assert_buffer(
            &render(&bar, 40),
            &[
                "────────────────────────────────────────",
                " Ready          │ GOAL - #9 Julia Szabo ",
            ],
        );
    }

    #[test]
    fn test_error_prefix() {
        let bar = StatusBar::new(Some("Mock failure"), true, None);
        let buf = render(&bar, 24);
        assert_buffer(
            &buf,
            &["────────────────────────", " ERROR: Mock failure    "],
        );
        assert_eq!(buf[(1, 1)].fg, Color::Red);
    }

    #[test]
    fn test_confirmation_dropped_when_too_narrow() {
        let bar = StatusBar::new(Some("Select a player first"), true, Some("SAVE - #1 Marta Bach"));
        let buf = render(&bar, 30);
        assert!(!crate::tui::testing::buffer_contains(&buf, "SAVE"));
    }
}
