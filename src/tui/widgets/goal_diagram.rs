//! Goal face seen from the shooter, for the goal placement step
//!
//! Posts and crossbar are drawn as a border; the bottom edge is the waterline.
//! The interior is the tap surface, 3 wide by 0.9 high.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::ThemeConfig;
use crate::tracker::coords::goal_fraction;

use super::{cell_for_fraction, RenderableWidget};

#[derive(Debug, Clone, Default)]
pub struct GoalDiagram {
    /// Picked placement in goal-face units
    pub marker: Option<(f64, f64)>,
}

impl GoalDiagram {
    pub fn new(marker: Option<(f64, f64)>) -> Self {
        Self { marker }
    }

    pub fn surface(area: Rect) -> Rect {
        Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        )
    }
}

impl RenderableWidget for GoalDiagram {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.width < 3 || area.height < 3 {
            return;
        }
        let surface = Self::surface(area);
        let style = Style::default();
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;
        let inner = surface.width as usize;

        buf.set_string(area.x, area.y, format!("┏{}┓", "━".repeat(inner)), style);
        for y in surface.y..bottom {
            buf.set_string(area.x, y, "┃", style);
            buf.set_string(right, y, "┃", style);
        }
        buf.set_string(area.x, bottom, format!("┃{}┃", "~".repeat(inner)), style);

        if let Some((gx, gy)) = self.marker {
            let (fx, fy) = goal_fraction(gx, gy);
            if let Some((x, y)) = cell_for_fraction(surface, fx, fy) {
                buf.set_string(x, y, "O", Style::default().fg(theme.selection_fg));
            }
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(8)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(32)
    }
}
