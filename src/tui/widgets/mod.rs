/// Widgets for the tracker screen
///
/// Each widget renders straight into a ratatui `Buffer` so it can be drawn
/// inside a frame or tested against a bare buffer.
pub mod goal_diagram;
pub mod pool_diagram;
pub mod status_bar;

pub use goal_diagram::GoalDiagram;
pub use pool_diagram::PoolDiagram;
pub use status_bar::StatusBar;

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::ThemeConfig;

/// Core trait for renderable widgets
///
/// This trait is object-safe, so widgets can be stored as trait objects.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig);

    /// Preferred height, `None` when the widget adapts to any height
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    fn preferred_width(&self) -> Option<u16> {
        None
    }
}

/// Cell inside `surface` for a fractional position, clamped to the surface
pub(crate) fn cell_for_fraction(surface: Rect, fx: f64, fy: f64) -> Option<(u16, u16)> {
    if surface.width == 0 || surface.height == 0 {
        return None;
    }
    let col = (fx.clamp(0.0, 1.0) * surface.width as f64).floor() as u16;
    let row = (fy.clamp(0.0, 1.0) * surface.height as f64).floor() as u16;
    Some((
        surface.x + col.min(surface.width - 1),
        surface.y + row.min(surface.height - 1),
    ))
}
