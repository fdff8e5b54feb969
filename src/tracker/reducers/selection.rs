use tracing::debug;

use crate::api::PlayerId;
use crate::tracker::action::Action;
use crate::tracker::clock::GameClock;
use crate::tracker::effects::Effect;
use crate::tracker::state::{TrackerState, PERIODS};

/// Handle player, period, clock, situation and tab pickers
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_selection(
    state: TrackerState,
    action: &Action,
) -> Result<(TrackerState, Effect), TrackerState> {
    match action {
        Action::SelectPlayer(player_id) => Ok(handle_select_player(state, *player_id)),
        Action::SelectPeriod(period) => Ok(handle_select_period(state, *period)),
        Action::SetClockMinutes(minutes) => {
            let mut new_state = state;
            new_state.selection.clock = new_state.selection.clock.with_minutes(*minutes);
            Ok((new_state, Effect::None))
        }
        Action::SetClockSeconds(seconds) => {
            let mut new_state = state;
            new_state.selection.clock = new_state.selection.clock.with_seconds(*seconds);
            Ok((new_state, Effect::None))
        }
        Action::ClockPreset(minutes) => {
            let mut new_state = state;
            new_state.selection.clock = GameClock::preset(*minutes);
            Ok((new_state, Effect::None))
        }
        Action::SetSituation(situation) => {
            let mut new_state = state;
            new_state.selection.situation = *situation;
            Ok((new_state, Effect::None))
        }
        Action::SwitchTab(tab) => {
            let mut new_state = state;
            new_state.selection.active_tab = *tab;
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}

fn handle_select_player(state: TrackerState, player_id: PlayerId) -> (TrackerState, Effect) {
    let mut new_state = state;
    if new_state.roster_player(player_id).is_none() {
        debug!("SELECT: Ignoring player {} not on roster", player_id);
        return (new_state, Effect::None);
    }
    // Picking the selected player again clears the pick
    new_state.selection.selected_player = if new_state.selection.selected_player == Some(player_id) {
        None
    } else {
        Some(player_id)
    };
    (new_state, Effect::None)
}

fn handle_select_period(state: TrackerState, period: u8) -> (TrackerState, Effect) {
    let mut new_state = state;
    let period = period.clamp(1, PERIODS);
    apply_period(&mut new_state, period);
    new_state.selection.clock = GameClock::period_start();
    (new_state, Effect::None)
}

/// Move to a period and re-seed the in-water set from its saved lineup
pub(super) fn apply_period(state: &mut TrackerState, period: u8) {
    debug!("SELECT: Period {} -> {}", state.selection.period, period);
    state.selection.period = period;
    let saved = state.data.lineups.get(&period).map(Vec::as_slice);
    state.lineup.select_period(saved);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::player_id_for_cap;
    use crate::tracker::state::Tab;
    use crate::tracker::testing::create_state;

    #[test]
    fn test_select_player_toggles() {
        let state = create_state();
        let id = player_id_for_cap(4);

        let (state, _) = reduce_selection(state, &Action::SelectPlayer(id)).unwrap();
        assert_eq!(state.selection.selected_player, Some(id));

        let (state, _) = reduce_selection(state, &Action::SelectPlayer(id)).unwrap();
        assert_eq!(state.selection.selected_player, None);
    }

    #[test]
    fn test_select_unknown_player_is_ignored() {
        let (state, _) = reduce_selection(create_state(), &Action::SelectPlayer(9999)).unwrap();
        assert_eq!(state.selection.selected_player, None);
    }

    #[test]
    fn test_select_period_resets_clock_and_in_water() {
        let state = create_state();
        let (state, _) = reduce_selection(state, &Action::ClockPreset(2)).unwrap();
        let (state, _) = reduce_selection(state, &Action::SelectPeriod(2)).unwrap();

        assert_eq!(state.selection.period, 2);
        assert_eq!(state.selection.clock, GameClock::period_start());
        assert!(state.lineup.in_water().is_empty());

        let (state, _) = reduce_selection(state, &Action::SelectPeriod(1)).unwrap();
        assert_eq!(state.lineup.in_water().len(), 7);
    }

    #[test]
    fn test_select_period_clamps() {
        let (state, _) = reduce_selection(create_state(), &Action::SelectPeriod(9)).unwrap();
        assert_eq!(state.selection.period, 4);
    }

    #[test]
    fn test_clock_inputs_clamp() {
        let state = create_state();
        let (state, _) = reduce_selection(state, &Action::SetClockMinutes(11)).unwrap();
        let (state, _) = reduce_selection(state, &Action::SetClockSeconds(-4)).unwrap();
        assert_eq!(state.selection.clock.to_string(), "8:00");

        let (state, _) = reduce_selection(state, &Action::SetClockMinutes(3)).unwrap();
        let (state, _) = reduce_selection(state, &Action::SetClockSeconds(75)).unwrap();
        assert_eq!(state.selection.clock.to_string(), "3:59");
    }

    #[test]
    fn test_switch_tab() {
        let (state, _) = reduce_selection(create_state(), &Action::SwitchTab(Tab::Subs)).unwrap();
        assert_eq!(state.selection.active_tab, Tab::Subs);
    }

    #[test]
    fn test_unrelated_action_passes_through() {
        assert!(reduce_selection(create_state(), &Action::UndoLast).is_err());
    }
}
