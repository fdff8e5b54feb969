use std::sync::Arc;

use tracing::debug;

use crate::api::{ApiError, EventId, EventType, NewStat, PlayerId, RosterPlayer};
use crate::tracker::action::Action;
use crate::tracker::clock::GameClock;
use crate::tracker::effects::{Effect, StoreRequest};
use crate::tracker::error::TrackerError;
use crate::tracker::state::{ShotContext, TrackerState};

use super::selection::apply_period;

/// Handle the event recording engine: record, edit, update, undo, delete
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_recording(
    state: TrackerState,
    action: &Action,
) -> Result<(TrackerState, Effect), TrackerState> {
    match action {
        Action::TriggerEvent(event_type) => Ok(handle_trigger(state, *event_type)),
        Action::EditEvent(event_id) => Ok(handle_edit(state, *event_id)),
        Action::CancelEdit => Ok(handle_cancel_edit(state)),
        Action::UndoLast => Ok(handle_undo(state)),
        Action::DeleteEvent(event_id) => Ok(handle_delete(state, *event_id)),
        Action::StatRecorded { player_id, event_type, result } => {
            Ok(handle_recorded(state, *player_id, *event_type, result))
        }
        Action::StatUpdated(result) => Ok(handle_updated(state, result)),
        Action::StatDeleted { event_id, result } => Ok(handle_deleted(state, *event_id, result)),
        _ => Err(state),
    }
}

pub const LOG_REFRESHING: &str = "Event log is refreshing, try again";

/// `"{LABEL} - #{cap} {name}"`
pub fn confirmation_text(label: &str, player: Option<&RosterPlayer>) -> String {
    match player {
        Some(p) => format!("{} - #{} {}", label, p.cap_number, p.player.name),
        None => label.to_string(),
    }
}

fn handle_trigger(state: TrackerState, event_type: EventType) -> (TrackerState, Effect) {
    let mut new_state = state;

    if new_state.recording.in_flight {
        debug!("RECORD: Dropping {} while a submission is in flight", event_type);
        return (new_state, Effect::None);
    }
    if new_state.shot.is_open() {
        debug!("RECORD: Dropping {} while the shot wizard is open", event_type);
        return (new_state, Effect::None);
    }
    let Some(player_id) = new_state.selection.selected_player else {
        new_state
            .system
            .set_status_error_message(TrackerError::MissingSelection.to_string());
        return (new_state, Effect::None);
    };
    if !new_state.available_event_types().contains(&event_type) {
        debug!("RECORD: {} not offered for player {}", event_type, player_id);
        return (new_state, Effect::None);
    }

    let stat = NewStat {
        player_id,
        kind: event_type,
        context: new_state.selection.situation,
        period: Some(new_state.selection.period),
        clock: Some(new_state.selection.clock.as_minutes()),
    };

    if let Some(editing) = &new_state.recording.editing {
        let stat_id = editing.id;
        debug!("RECORD: Updating event {} as {}", stat_id, event_type);
        new_state.recording.in_flight = true;
        return (new_state, Effect::Request(StoreRequest::UpdateStat { stat_id, stat }));
    }

    if event_type.is_shot_class() {
        debug!("RECORD: Opening shot wizard for player {}", player_id);
        new_state.shot.wizard = Default::default();
        new_state.shot.pending = Some(ShotContext {
            player_id,
            period: new_state.selection.period,
            clock: new_state.selection.clock,
            situation: new_state.selection.situation,
        });
        new_state.selection.selected_player = None;
        return (new_state, Effect::None);
    }

    debug!("RECORD: Creating {} for player {}", event_type, player_id);
    new_state.recording.in_flight = true;
    (new_state, Effect::Request(StoreRequest::CreateStat(stat)))
}

fn handle_recorded(
    state: TrackerState,
    player_id: PlayerId,
    event_type: EventType,
    result: &Result<(), ApiError>,
) -> (TrackerState, Effect) {
    let mut new_state = state;
    new_state.recording.in_flight = false;

    match result {
        Ok(()) => {
            let text = confirmation_text(event_type.as_str(), new_state.roster_player(player_id));
            new_state.selection.selected_player = None;
            new_state.recording.confirmation = Some(text.clone());
            new_state.system.set_status_message(text);
            let effect = new_state.request_stats();
            (new_state, effect)
        }
        Err(e) => {
            new_state
                .system
                .set_status_error_message(format!("Failed to record {}: {}", event_type.label(), e));
            (new_state, Effect::None)
        }
    }
}

fn handle_edit(state: TrackerState, event_id: EventId) -> (TrackerState, Effect) {
    let mut new_state = state;

    if new_state.recording.in_flight || new_state.shot.is_open() {
        return (new_state, Effect::None);
    }
    if new_state.data.is_stats_stale() {
        new_state.system.set_status_error_message(LOG_REFRESHING.to_string());
        return (new_state, Effect::None);
    }
    if new_state.is_editing() {
        new_state
            .system
            .set_status_error_message("Finish or cancel the current edit first".to_string());
        return (new_state, Effect::None);
    }
    let Some(event) = new_state.data.stats.iter().find(|e| e.id == event_id).cloned() else {
        new_state
            .system
            .set_status_error_message(format!("Event {} not found", event_id));
        return (new_state, Effect::None);
    };

    let period = event.period.unwrap_or(1);
    if period != new_state.selection.period {
        apply_period(&mut new_state, period);
    }
    new_state.selection.selected_player = Some(event.player_id);
    if let Some(clock) = event.clock {
        new_state.selection.clock = GameClock::from_minutes(clock);
    }
    new_state.selection.situation = event.context;
    new_state
        .system
        .set_status_message(format!("Editing {} - pick the new event type", event.kind));
    new_state.recording.editing = Some(event);
    (new_state, Effect::None)
}

fn handle_cancel_edit(state: TrackerState) -> (TrackerState, Effect) {
    let mut new_state = state;
    if new_state.recording.in_flight {
        return (new_state, Effect::None);
    }
    clear_edit(&mut new_state);
    new_state.selection.clock = GameClock::period_start();
    new_state.system.reset_status_message();
    (new_state, Effect::None)
}

fn handle_updated(state: TrackerState, result: &Result<(), ApiError>) -> (TrackerState, Effect) {
    let mut new_state = state;
    new_state.recording.in_flight = false;

    match result {
        Ok(()) => {
            clear_edit(&mut new_state);
            new_state.system.set_status_message("Event updated".to_string());
            let effect = new_state.request_stats();
            (new_state, effect)
        }
        Err(e) => {
            new_state
                .system
                .set_status_error_message(format!("Failed to update event: {}", e));
            (new_state, Effect::None)
        }
    }
}

fn handle_undo(state: TrackerState) -> (TrackerState, Effect) {
    let mut new_state = state;
    // The last event is only known once every write has been listed back
    if new_state.recording.in_flight || new_state.data.is_stats_stale() {
        debug!("RECORD: Undo dropped while the event log is behind the store");
        new_state.system.set_status_error_message(LOG_REFRESHING.to_string());
        return (new_state, Effect::None);
    }
    let Some(last_id) = new_state.last_event().map(|e| e.id) else {
        return (new_state, Effect::None);
    };
    debug!("RECORD: Undoing event {}", last_id);
    new_state.recording.confirmation = None;
    (new_state, Effect::Request(StoreRequest::DeleteStat(last_id)))
}

fn handle_delete(state: TrackerState, event_id: EventId) -> (TrackerState, Effect) {
    let mut new_state = state;
    if new_state.data.is_stats_stale() {
        new_state.system.set_status_error_message(LOG_REFRESHING.to_string());
        return (new_state, Effect::None);
    }
    if !new_state.data.stats.iter().any(|e| e.id == event_id) {
        return (new_state, Effect::None);
    }
    (new_state, Effect::Request(StoreRequest::DeleteStat(event_id)))
}

fn handle_deleted(
    state: TrackerState,
    event_id: EventId,
    result: &Result<(), ApiError>,
) -> (TrackerState, Effect) {
    let mut new_state = state;

    match result {
        Ok(()) => {
            Arc::make_mut(&mut new_state.data.stats).retain(|e| e.id != event_id);
            if new_state.recording.editing.as_ref().map(|e| e.id) == Some(event_id)
                && !new_state.recording.in_flight
            {
                clear_edit(&mut new_state);
            }
            new_state.system.set_status_message("Event deleted".to_string());
            let effect = new_state.request_stats();
            (new_state, effect)
        }
        Err(e) => {
            new_state
                .system
                .set_status_error_message(format!("Failed to delete event: {}", e));
            (new_state, Effect::None)
        }
    }
}

fn clear_edit(state: &mut TrackerState) {
    state.recording.editing = None;
    state.selection.selected_player = None;
    state.selection.situation = None;
}
