/// Keyboard event to action mapping
///
/// Converts crossterm KeyEvents into tracker Actions. The open shot wizard
/// captures every key; otherwise keys drive the pickers and event buttons.
use crossterm::event::{KeyCode, KeyEvent};
use phf::phf_map;
use tracing::debug;

use crate::api::{EventType, ShotOutcome, Situation};
use crate::tracker::clock::CLOCK_PRESETS;
use crate::tracker::coords::{goal_fraction, goal_point, pool_fraction, pool_point, POOL_LENGTH, POOL_WIDTH};
use crate::tracker::wizard::{WizardEvent, WizardStep};
use crate::tracker::{Action, GameClock, Tab, TrackerState};

/// Event button hotkeys
pub static EVENT_KEYS: phf::Map<char, EventType> = phf_map! {
    'g' => EventType::Goal,
    's' => EventType::Shot,
    'v' => EventType::Save,
    't' => EventType::Steal,
    'b' => EventType::Block,
    'x' => EventType::Exclusion,
    'o' => EventType::Turnover,
};

/// Outcome hotkeys in the wizard's outcome step
pub static OUTCOME_KEYS: phf::Map<char, ShotOutcome> = phf_map! {
    'g' => ShotOutcome::Goal,
    's' => ShotOutcome::Saved,
    'm' => ShotOutcome::Missed,
    'b' => ShotOutcome::Blocked,
    'p' => ShotOutcome::Post,
};

/// Hotkey shown next to an event button
pub fn event_hotkey(event_type: EventType) -> Option<char> {
    EVENT_KEYS
        .entries()
        .find(|(_, t)| **t == event_type)
        .map(|(c, _)| *c)
}

pub fn outcome_hotkey(outcome: ShotOutcome) -> Option<char> {
    OUTCOME_KEYS
        .entries()
        .find(|(_, o)| **o == outcome)
        .map(|(c, _)| *c)
}

/// Arrow-key step on the goal face, as a fraction of each axis
const GOAL_NUDGE_X: f64 = 0.05;
const GOAL_NUDGE_Y: f64 = 1.0 / 6.0;

/// Map a key press to an action for the current state
pub fn key_to_action(key: KeyEvent, state: &TrackerState) -> Option<Action> {
    if state.shot.is_open() {
        return handle_wizard_keys(key.code, state);
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc if state.is_editing() => Some(Action::CancelEdit),
        KeyCode::Tab => Some(Action::SwitchTab(state.selection.active_tab.toggled())),
        KeyCode::Char(c @ '1'..='4') => c.to_digit(10).map(|p| Action::SelectPeriod(p as u8)),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            Some(Action::SetClockMinutes(state.selection.clock.minutes() as i64 + 1))
        }
        KeyCode::Char('-') => Some(Action::SetClockMinutes(state.selection.clock.minutes() as i64 - 1)),
        KeyCode::Char('>') => Some(Action::SetClockSeconds(state.selection.clock.seconds() as i64 + 1)),
        KeyCode::Char('<') => Some(Action::SetClockSeconds(state.selection.clock.seconds() as i64 - 1)),
        KeyCode::Char('p') => Some(Action::ClockPreset(next_preset(state.selection.clock))),
        KeyCode::Char('c') => Some(Action::SetSituation(next_situation(state.selection.situation))),
        KeyCode::Char('u') => Some(Action::UndoLast),
        KeyCode::Char('e') => state.last_event().map(|e| Action::EditEvent(e.id)),
        KeyCode::Char('r') => Some(match state.selection.active_tab {
            Tab::Stats => Action::RefreshEvents,
            Tab::Subs => Action::RefreshSubstitutions,
        }),
        KeyCode::Char('S') => Some(Action::ConfirmSubstitution),
        KeyCode::Char('L') => Some(Action::SaveLineup),
        KeyCode::Up => cycle_player(state, false),
        KeyCode::Down => cycle_player(state, true),
        KeyCode::Char(c) => EVENT_KEYS.get(&c).map(|t| Action::TriggerEvent(*t)),
        _ => None,
    }
}

fn handle_wizard_keys(code: KeyCode, state: &TrackerState) -> Option<Action> {
    let wizard = &state.shot.wizard;
    let event = match (wizard.step(), code) {
        (_, KeyCode::Esc) => WizardEvent::Cancel,
        (_, KeyCode::Enter) => WizardEvent::Next,
        (_, KeyCode::Backspace) => WizardEvent::Back,
        (WizardStep::Pool, code) => nudge_pool(wizard.pool(), code)?,
        (WizardStep::Goal, code) => nudge_goal(wizard.goal(), code)?,
        (WizardStep::Outcome, KeyCode::Char(c)) => WizardEvent::ChooseOutcome(*OUTCOME_KEYS.get(&c)?),
        (WizardStep::Assist, KeyCode::Char('n')) => WizardEvent::ChooseAssist(None),
        (WizardStep::Assist, KeyCode::Char(c)) => {
            let index = assist_index(c)?;
            let candidate = state.assist_candidates().get(index).map(|r| r.player_id)?;
            WizardEvent::ChooseAssist(Some(candidate))
        }
        _ => return None,
    };
    debug!("KEY: Wizard {:?} -> {:?}", wizard.step(), event);
    Some(Action::Wizard(event))
}

/// `1`-`9` pick the first nine candidates, `0` the tenth
fn assist_index(c: char) -> Option<usize> {
    match c.to_digit(10)? {
        0 => Some(9),
        d => Some(d as usize - 1),
    }
}

/// Move the pool marker one meter, starting from the center of the pool
fn nudge_pool(current: Option<(f64, f64)>, code: KeyCode) -> Option<WizardEvent> {
    let (x, y) = current.unwrap_or((POOL_LENGTH / 2.0, POOL_WIDTH / 2.0));
    let (fx, fy) = pool_fraction(x, y);
    let (dx, dy) = arrow_delta(code, 1.0 / POOL_LENGTH, 1.0 / POOL_WIDTH)?;
    let (x, y) = pool_point(fx + dx, fy + dy);
    Some(WizardEvent::PickPool { x, y })
}

/// Move the goal marker; Up raises it toward the crossbar
fn nudge_goal(current: Option<(f64, f64)>, code: KeyCode) -> Option<WizardEvent> {
    let (fx, fy) = current.map(|(x, y)| goal_fraction(x, y)).unwrap_or((0.5, 0.5));
    let (dx, dy) = arrow_delta(code, GOAL_NUDGE_X, GOAL_NUDGE_Y)?;
    let (x, y) = goal_point(fx + dx, fy + dy);
    Some(WizardEvent::PickGoal { x, y })
}

fn arrow_delta(code: KeyCode, step_x: f64, step_y: f64) -> Option<(f64, f64)> {
    match code {
        KeyCode::Left => Some((-step_x, 0.0)),
        KeyCode::Right => Some((step_x, 0.0)),
        KeyCode::Up => Some((0.0, -step_y)),
        KeyCode::Down => Some((0.0, step_y)),
        _ => None,
    }
}

/// Next lower preset, wrapping back to a full period after 0:00
pub fn next_preset(clock: GameClock) -> u8 {
    CLOCK_PRESETS
        .iter()
        .copied()
        .find(|p| (*p as u32) * 60 < clock.remaining_seconds())
        .unwrap_or(CLOCK_PRESETS[0])
}

/// Normal -> each tagged situation in turn -> Normal
pub fn next_situation(current: Option<Situation>) -> Option<Situation> {
    match current {
        None => Situation::ALL.first().copied(),
        Some(s) => {
            let index = Situation::ALL.iter().position(|x| *x == s)?;
            Situation::ALL.get(index + 1).copied()
        }
    }
}

fn cycle_player(state: &TrackerState, forward: bool) -> Option<Action> {
    let roster = state.roster_by_cap();
    if roster.is_empty() {
        return None;
    }
    let current = state
        .selection
        .selected_player
        .and_then(|id| roster.iter().position(|r| r.player_id == id));
    let next = match (current, forward) {
        (None, true) => 0,
        (None, false) => roster.len() - 1,
        (Some(i), true) => (i + 1) % roster.len(),
        (Some(i), false) => (i + roster.len() - 1) % roster.len(),
    };
    Some(Action::SelectPlayer(roster[next].player_id))
}
