use tracing::debug;

use crate::api::{ApiError, NewShot, PlayerId, ShotOutcome};
use crate::tracker::action::Action;
use crate::tracker::effects::{Effect, StoreRequest};
use crate::tracker::state::{ShotContext, TrackerState};
use crate::tracker::wizard::{ShotRecord, Transition, WizardEvent};

use super::recording::confirmation_text;

/// Handle shot wizard input and shot submission results
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_shot(
    state: TrackerState,
    action: &Action,
) -> Result<(TrackerState, Effect), TrackerState> {
    match action {
        Action::Wizard(event) => Ok(handle_wizard_event(state, *event)),
        Action::ShotRecorded { player_id, outcome, result } => {
            Ok(handle_shot_recorded(state, *player_id, *outcome, result))
        }
        _ => Err(state),
    }
}

fn handle_wizard_event(state: TrackerState, event: WizardEvent) -> (TrackerState, Effect) {
    let mut new_state = state;
    let Some(context) = new_state.shot.pending else {
        debug!("WIZARD: Ignoring {:?}, wizard is closed", event);
        return (new_state, Effect::None);
    };

    match new_state.shot.wizard.handle(event, context.player_id) {
        Transition::Open(step) => {
            debug!("WIZARD: At {:?}", step);
            (new_state, Effect::None)
        }
        Transition::Ignored => (new_state, Effect::None),
        Transition::Cancelled => {
            debug!("WIZARD: Cancelled");
            new_state.shot.pending = None;
            (new_state, Effect::None)
        }
        Transition::Emitted(record) => {
            new_state.shot.pending = None;
            if new_state.recording.in_flight {
                new_state
                    .system
                    .set_status_error_message("Another event is still being saved".to_string());
                return (new_state, Effect::None);
            }
            debug!("WIZARD: Emitted {:?}", record);
            new_state.recording.in_flight = true;
            let shot = build_shot(&context, &record);
            (new_state, Effect::Request(StoreRequest::CreateShot(shot)))
        }
    }
}

/// Combine the emitted record with the context captured when the wizard opened
pub fn build_shot(context: &ShotContext, record: &ShotRecord) -> NewShot {
    NewShot {
        player_id: context.player_id,
        kind: record.outcome.event_type(),
        x: record.pool_x,
        y: record.pool_y,
        goal_x: record.goal_x,
        goal_y: record.goal_y,
        shot_outcome: record.outcome,
        assister_id: record.assister_id,
        period: Some(context.period),
        clock: Some(context.clock.as_minutes()),
        context: context.situation,
    }
}

fn handle_shot_recorded(
    state: TrackerState,
    player_id: PlayerId,
    outcome: ShotOutcome,
    result: &Result<(), ApiError>,
) -> (TrackerState, Effect) {
    let mut new_state = state;
    new_state.recording.in_flight = false;

    match result {
        Ok(()) => {
            let label = match outcome {
                ShotOutcome::Goal => "GOAL".to_string(),
                other => format!("SHOT ({})", other),
            };
            let text = confirmation_text(&label, new_state.roster_player(player_id));
            new_state.recording.confirmation = Some(text.clone());
            new_state.system.set_status_message(text);
            let effect = new_state.request_stats();
            (new_state, effect)
        }
        Err(e) => {
            new_state
                .system
                .set_status_error_message(format!("Failed to record shot: {}", e));
            (new_state, Effect::None)
        }
    }
}
