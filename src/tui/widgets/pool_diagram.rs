//! Top-down pool diagram for the shot location step
//!
//! ```text
//! ┌────:──────┆──────:────┐
//! │    :      ┆      :    │
//! ┃    :      ┆   X  :    ┃
//! │    :      ┆      :    │
//! └────:──────┆──────:────┘
//! ```
//!
//! The interior is the tap surface: 25m along x, 20m along y. Goals sit in
//! the middle third of each short side, 5m lines are dotted.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::ThemeConfig;
use crate::tracker::coords::pool_fraction;

use super::{cell_for_fraction, RenderableWidget};

const HALF_LINE: f64 = 0.5;
const FIVE_METER_LINES: [f64; 2] = [0.2, 0.8];

#[derive(Debug, Clone, Default)]
pub struct PoolDiagram {
    /// Picked shot location in meters
    pub marker: Option<(f64, f64)>,
}

impl PoolDiagram {
    pub fn new(marker: Option<(f64, f64)>) -> Self {
        Self { marker }
    }

    /// Tap surface inside the border
    pub fn surface(area: Rect) -> Rect {
        Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        )
    }

    fn line_char(surface: Rect, x: u16) -> Option<char> {
        let col_of = |f: f64| cell_for_fraction(surface, f, 0.0).map(|(c, _)| c);
        if col_of(HALF_LINE) == Some(x) {
            Some('┆')
        } else if FIVE_METER_LINES.iter().any(|f| col_of(*f) == Some(x)) {
            Some(':')
        } else {
            None
        }
    }
}

impl RenderableWidget for PoolDiagram {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.width < 3 || area.height < 3 {
            return;
        }
        let surface = Self::surface(area);
        let style = Style::default();
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        for x in area.x..=right {
            let (top, bot) = if x == area.x {
                ("┌", "└")
            } else if x == right {
                ("┐", "┘")
            } else {
                match Self::line_char(surface, x) {
                    Some('┆') => ("┆", "┆"),
                    Some(_) => (":", ":"),
                    None => ("─", "─"),
                }
            };
            buf.set_string(x, area.y, top, style);
            buf.set_string(x, bottom, bot, style);
        }

        for y in surface.y..surface.y + surface.height {
            let row = y - surface.y;
            let in_goal = row * 3 >= surface.height && row * 3 < surface.height * 2;
            let side = if in_goal { "┃" } else { "│" };
            buf.set_string(area.x, y, side, style);
            buf.set_string(right, y, side, style);
            for x in surface.x..surface.x + surface.width {
                let symbol = Self::line_char(surface, x).map(String::from).unwrap_or_else(|| " ".to_string());
                buf.set_string(x, y, symbol, style);
            }
        }

        if let Some((mx, my)) = self.marker {
            let (fx, fy) = pool_fraction(mx, my);
            if let Some((x, y)) = cell_for_fraction(surface, fx, fy) {
                buf.set_string(x, y, "X", Style::default().fg(theme.selection_fg));
            }
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(12)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(52)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::testing::buffer_lines;

    fn render(marker: Option<(f64, f64)>) -> Buffer {
        let area = Rect::new(0, 0, 27, 8);
        let mut buf = Buffer::empty(area);
        PoolDiagram::new(marker).render(area, &mut buf, &ThemeConfig::default());
        buf
    }

    #[test]
    fn test_border_and_lines() {
        let lines = buffer_lines(&render(None));
        assert_eq!(lines[0], "┌─────:──────┆───────:────┐");
        assert_eq!(lines[1], "│     :      ┆       :    │");
        assert_eq!(lines[3], "┃     :      ┆       :    ┃");
        assert_eq!(lines[7], "└─────:──────┆───────:────┘");
    }

    #[test]
    fn test_marker_position() {
        let buf = render(Some((12.5, 10.0)));
        assert_eq!(buf[(13, 4)].symbol(), "X");
    }

    #[test]
    fn test_marker_at_far_corner_stays_inside() {
        let buf = render(Some((25.0, 20.0)));
        assert_eq!(buf[(25, 6)].symbol(), "X");
        assert_eq!(buf[(26, 7)].symbol(), "┘");
    }

    #[test]
    fn test_surface_excludes_border() {
        assert_eq!(PoolDiagram::surface(Rect::new(2, 3, 27, 8)), Rect::new(3, 4, 25, 6));
    }
}
