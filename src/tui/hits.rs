//! Mouse hit testing
//!
//! The view records a target for every clickable region while it draws; a
//! click is resolved against the regions of the last frame.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::trace;

use crate::tracker::coords::{goal_point, pool_point, TapSurface};
use crate::tracker::{Action, WizardEvent};

#[derive(Debug, Clone)]
pub enum HitTarget {
    Action(Action),
    /// Pool diagram tap surface
    Pool,
    /// Goal face tap surface
    Goal,
}

#[derive(Debug, Default)]
pub struct HitMap {
    targets: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.targets.clear();
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.targets.push((area, target));
        }
    }

    pub fn push_action(&mut self, area: Rect, action: Action) {
        self.push(area, HitTarget::Action(action));
    }

    /// Action for a click at a cell; later regions sit on top of earlier ones
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        let (area, target) = self
            .targets
            .iter()
            .rev()
            .find(|(area, _)| area.contains(Position::new(column, row)))?;

        match target {
            HitTarget::Action(action) => Some(action.clone()),
            HitTarget::Pool => {
                let (fx, fy) = tap_fraction(*area, column, row)?;
                let (x, y) = pool_point(fx, fy);
                Some(Action::Wizard(WizardEvent::PickPool { x, y }))
            }
            HitTarget::Goal => {
                let (fx, fy) = tap_fraction(*area, column, row)?;
                let (x, y) = goal_point(fx, fy);
                Some(Action::Wizard(WizardEvent::PickGoal { x, y }))
            }
        }
    }
}

/// A terminal cell is tapped at its center
fn tap_fraction(area: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    TapSurface::new(area.x as f64, area.y as f64, area.width as f64, area.height as f64)
        .normalize(column as f64 + 0.5, row as f64 + 0.5)
}

/// Left clicks resolve through the hit map; everything else is ignored
pub fn mouse_to_action(event: MouseEvent, hits: &HitMap) -> Option<Action> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let action = hits.action_at(event.column, event.row);
            trace!("MOUSE: click at {},{} -> {:?}", event.column, event.row, action);
            action
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_action_target() {
        let mut hits = HitMap::new();
        hits.push_action(Rect::new(0, 0, 5, 1), Action::UndoLast);
        assert!(matches!(mouse_to_action(click(4, 0), &hits), Some(Action::UndoLast)));
        assert!(mouse_to_action(click(5, 0), &hits).is_none());
    }

    #[test]
    fn test_later_targets_win() {
        let mut hits = HitMap::new();
        hits.push_action(Rect::new(0, 0, 10, 10), Action::UndoLast);
        hits.push_action(Rect::new(2, 2, 2, 2), Action::SaveLineup);
        assert!(matches!(hits.action_at(3, 3), Some(Action::SaveLineup)));
        assert!(matches!(hits.action_at(0, 0), Some(Action::UndoLast)));
    }

    #[test]
    fn test_pool_tap_maps_to_meters() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(10, 5, 25, 10), HitTarget::Pool);
        // cell 12 of 25 -> center at 12.5 / 25
        assert!(matches!(
            hits.action_at(22, 9),
            Some(Action::Wizard(WizardEvent::PickPool { x, y })) if x == 12.5 && y == 9.0
        ));
    }

    #[test]
    fn test_goal_tap_flips_vertical_axis() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 0, 30, 9), HitTarget::Goal);
        assert!(matches!(
            hits.action_at(0, 0),
            Some(Action::Wizard(WizardEvent::PickGoal { x, y })) if x == 0.05 && y == 0.85
        ));
    }

    #[test]
    fn test_non_left_clicks_ignored() {
        let mut hits = HitMap::new();
        hits.push_action(Rect::new(0, 0, 5, 1), Action::UndoLast);
        let mut event = click(1, 0);
        event.kind = MouseEventKind::Moved;
        assert!(mouse_to_action(event, &hits).is_none());
    }

    #[test]
    fn test_empty_areas_are_not_recorded() {
        let mut hits = HitMap::new();
        hits.push_action(Rect::new(0, 0, 0, 1), Action::UndoLast);
        assert!(hits.is_empty());
    }
}
