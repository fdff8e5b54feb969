use std::sync::Arc;

use tracing::debug;

use crate::api::{ApiError, NewSubstitution, PlayerId};
use crate::tracker::action::Action;
use crate::tracker::effects::{Effect, StoreRequest};
use crate::tracker::state::TrackerState;

/// Handle bench / in-water picks, substitutions and lineup saves
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_lineup(
    state: TrackerState,
    action: &Action,
) -> Result<(TrackerState, Effect), TrackerState> {
    match action {
        Action::ToggleBenchPlayer(player_id) => {
            let mut new_state = state;
            if new_state.roster_player(*player_id).is_some() {
                new_state.lineup.toggle_bench_player(*player_id);
            }
            Ok((new_state, Effect::None))
        }
        Action::SelectInWaterPlayer(player_id) => {
            let mut new_state = state;
            new_state.lineup.select_in_water_player(*player_id);
            Ok((new_state, Effect::None))
        }
        Action::ConfirmSubstitution => Ok(handle_confirm_substitution(state)),
        Action::SaveLineup => Ok(handle_save_lineup(state)),
        Action::SubstitutionCreated { substitution, result } => {
            Ok(handle_substitution_created(state, substitution, result))
        }
        Action::LineupSaved { period, player_ids, result } => {
            Ok(handle_lineup_saved(state, *period, player_ids, result))
        }
        _ => Err(state),
    }
}

fn handle_confirm_substitution(state: TrackerState) -> (TrackerState, Effect) {
    let mut new_state = state;
    let Some((out, into)) = new_state.lineup.begin_substitution() else {
        debug!("LINEUP: Substitution not ready or already in flight");
        return (new_state, Effect::None);
    };

    let substitution = NewSubstitution {
        period: new_state.selection.period,
        time: new_state.selection.clock.elapsed_seconds(),
        player_in_id: into,
        player_out_id: out,
    };
    debug!("LINEUP: Substituting {} for {}", into, out);
    (new_state, Effect::Request(StoreRequest::CreateSubstitution(substitution)))
}

fn handle_save_lineup(state: TrackerState) -> (TrackerState, Effect) {
    let mut new_state = state;
    match new_state.lineup.begin_save() {
        Err(e) => {
            new_state.system.set_status_error_message(e.to_string());
            (new_state, Effect::None)
        }
        Ok(None) => (new_state, Effect::None),
        Ok(Some(player_ids)) => {
            let period = new_state.selection.period;
            (new_state, Effect::Request(StoreRequest::SaveLineup { period, player_ids }))
        }
    }
}

fn handle_substitution_created(
    state: TrackerState,
    substitution: &NewSubstitution,
    result: &Result<(), ApiError>,
) -> (TrackerState, Effect) {
    let mut new_state = state;

    match result {
        Ok(()) => {
            // A period change while the call was out already reset the in-water set
            if substitution.period == new_state.selection.period {
                new_state
                    .lineup
                    .complete_substitution(substitution.player_out_id, substitution.player_in_id);
            } else {
                new_state.lineup.abort_substitution();
            }
            new_state.system.set_status_message("Substitution recorded".to_string());
            (new_state, Effect::Request(StoreRequest::ListSubstitutions))
        }
        Err(e) => {
            new_state.lineup.abort_substitution();
            new_state
                .system
                .set_status_error_message(format!("Failed to record substitution: {}", e));
            (new_state, Effect::None)
        }
    }
}

fn handle_lineup_saved(
    state: TrackerState,
    period: u8,
    player_ids: &[PlayerId],
    result: &Result<(), ApiError>,
) -> (TrackerState, Effect) {
    let mut new_state = state;
    new_state.lineup.finish_save();

    match result {
        Ok(()) => {
            Arc::make_mut(&mut new_state.data.lineups).insert(period, player_ids.to_vec());
            new_state
                .system
                .set_status_message(format!("Starting lineup saved for period {}", period));
        }
        Err(e) => {
            new_state
                .system
                .set_status_error_message(format!("Failed to save lineup: {}", e));
        }
    }
    (new_state, Effect::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::player_id_for_cap;
    use crate::tracker::clock::GameClock;
    use crate::tracker::lineup::LINEUP_SIZE;
    use crate::tracker::reducers::selection::reduce_selection;
    use crate::tracker::testing::create_state;

    fn with_pending_pair(out_cap: u8, in_cap: u8) -> TrackerState {
        let state = create_state();
        let (state, _) =
            reduce_lineup(state, &Action::SelectInWaterPlayer(player_id_for_cap(out_cap))).unwrap();
        let (state, _) =
            reduce_lineup(state, &Action::ToggleBenchPlayer(player_id_for_cap(in_cap))).unwrap();
        state
    }

    #[test]
    fn test_confirm_substitution_sends_elapsed_time() {
        let mut state = with_pending_pair(6, 8);
        state.selection.clock = GameClock::new(5, 30);

        let (state, effect) = reduce_lineup(state, &Action::ConfirmSubstitution).unwrap();

        assert!(state.lineup.is_in_flight());
        match effect {
            Effect::Request(StoreRequest::CreateSubstitution(sub)) => {
                assert_eq!(sub.period, 1);
                assert_eq!(sub.time, 150);
                assert_eq!(sub.player_out_id, player_id_for_cap(6));
                assert_eq!(sub.player_in_id, player_id_for_cap(8));
            }
            other => panic!("unexpected effect {:?}", other),
        }
    }

    #[test]
    fn test_double_confirm_issues_one_request() {
        let state = with_pending_pair(6, 8);
        let (state, first) = reduce_lineup(state, &Action::ConfirmSubstitution).unwrap();
        let (_, second) = reduce_lineup(state, &Action::ConfirmSubstitution).unwrap();
        assert!(matches!(first, Effect::Request(_)));
        assert!(second.is_none());
    }

    #[test]
    fn test_substitution_success_swaps_players() {
        let state = with_pending_pair(6, 8);
        let (state, effect) = reduce_lineup(state, &Action::ConfirmSubstitution).unwrap();
        let Effect::Request(StoreRequest::CreateSubstitution(substitution)) = effect else {
            panic!("expected substitution request");
        };

        let action = Action::SubstitutionCreated { substitution, result: Ok(()) };
        let (state, effect) = reduce_lineup(state, &action).unwrap();

        assert!(!state.lineup.is_in_water(player_id_for_cap(6)));
        assert!(state.lineup.is_in_water(player_id_for_cap(8)));
        assert_eq!(state.lineup.in_water().len(), LINEUP_SIZE);
        assert_eq!(state.lineup.pending_out(), None);
        assert_eq!(state.lineup.pending_in(), None);
        assert!(matches!(effect, Effect::Request(StoreRequest::ListSubstitutions)));
    }

    #[test]
    fn test_substitution_failure_keeps_pending_pair() {
        let state = with_pending_pair(6, 8);
        let (state, effect) = reduce_lineup(state, &Action::ConfirmSubstitution).unwrap();
        let Effect::Request(StoreRequest::CreateSubstitution(substitution)) = effect else {
            panic!("expected substitution request");
        };

        let action = Action::SubstitutionCreated {
            substitution,
            result: Err(ApiError::status(500, None)),
        };
        let (state, _) = reduce_lineup(state, &action).unwrap();

        assert!(state.lineup.is_in_water(player_id_for_cap(6)));
        assert_eq!(state.lineup.pending_out(), Some(player_id_for_cap(6)));
        assert_eq!(state.lineup.pending_in(), Some(player_id_for_cap(8)));
        assert!(!state.lineup.is_in_flight());
        assert!(state.system.status_is_error);
    }

    #[test]
    fn test_save_incomplete_lineup_reports_fixed_message() {
        let state = create_state();
        let (state, _) = reduce_selection(state, &Action::SelectPeriod(2)).unwrap();
        let (state, _) = reduce_lineup(state, &Action::ToggleBenchPlayer(player_id_for_cap(3))).unwrap();

        let (state, effect) = reduce_lineup(state, &Action::SaveLineup).unwrap();

        assert!(effect.is_none());
        assert!(state.system.status_is_error);
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Starting lineup must have exactly 7 players")
        );
    }

    #[test]
    fn test_saved_lineup_reseeds_later_period_switch() {
        let state = create_state();
        let (mut state, _) = reduce_selection(state, &Action::SelectPeriod(2)).unwrap();
        for cap in 7..=13 {
            let (next, _) = reduce_lineup(state, &Action::ToggleBenchPlayer(player_id_for_cap(cap))).unwrap();
            state = next;
        }

        let (state, effect) = reduce_lineup(state, &Action::SaveLineup).unwrap();
        let Effect::Request(StoreRequest::SaveLineup { period, player_ids }) = effect else {
            panic!("expected save request");
        };
        assert_eq!(period, 2);

        let action = Action::LineupSaved { period, player_ids, result: Ok(()) };
        let (state, _) = reduce_lineup(state, &action).unwrap();
        let (state, _) = reduce_selection(state, &Action::SelectPeriod(1)).unwrap();
        let (state, _) = reduce_selection(state, &Action::SelectPeriod(2)).unwrap();

        assert_eq!(state.lineup.in_water().len(), LINEUP_SIZE);
        assert!(state.lineup.is_in_water(player_id_for_cap(13)));
        assert!(!state.lineup.is_in_flight());
    }
}
