/// Tap position to diagram coordinates
///
/// Diagrams report a tap as a fraction of their surface. The pool maps to
/// meters (25 x 20, one decimal). The goal face maps to a 3 x 0.9 grid with
/// two decimals and the vertical axis flipped so the waterline is zero.

pub const POOL_LENGTH: f64 = 25.0;
pub const POOL_WIDTH: f64 = 20.0;
pub const GOAL_WIDTH: f64 = 3.0;
pub const GOAL_HEIGHT: f64 = 0.9;

/// Screen rectangle a diagram is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapSurface {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl TapSurface {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Fractional position of a tap, `None` when it lands outside the surface
    pub fn normalize(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let fx = (x - self.left) / self.width;
        let fy = (y - self.top) / self.height;
        if (0.0..=1.0).contains(&fx) && (0.0..=1.0).contains(&fy) {
            Some((fx, fy))
        } else {
            None
        }
    }
}

/// Pool meters for a fractional tap
pub fn pool_point(fx: f64, fy: f64) -> (f64, f64) {
    (
        round_to(fx.clamp(0.0, 1.0) * POOL_LENGTH, 1),
        round_to(fy.clamp(0.0, 1.0) * POOL_WIDTH, 1),
    )
}

/// Goal-face units for a fractional tap (top of the surface is the crossbar)
pub fn goal_point(fx: f64, fy: f64) -> (f64, f64) {
    (
        round_to(fx.clamp(0.0, 1.0) * GOAL_WIDTH, 2),
        round_to(GOAL_HEIGHT - fy.clamp(0.0, 1.0) * GOAL_HEIGHT, 2),
    )
}

/// Inverse of `pool_point`, used to place a marker
pub fn pool_fraction(x: f64, y: f64) -> (f64, f64) {
    ((x / POOL_LENGTH).clamp(0.0, 1.0), (y / POOL_WIDTH).clamp(0.0, 1.0))
}

/// Inverse of `goal_point`
pub fn goal_fraction(x: f64, y: f64) -> (f64, f64) {
    (
        (x / GOAL_WIDTH).clamp(0.0, 1.0),
        ((GOAL_HEIGHT - y) / GOAL_HEIGHT).clamp(0.0, 1.0),
    )
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
