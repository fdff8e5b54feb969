use tracing::trace;

use super::action::Action;
use super::effects::Effect;
use super::reducers::{
    reduce_data_loading, reduce_lineup, reduce_recording, reduce_selection, reduce_shot,
};
use super::state::TrackerState;

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// No I/O happens here; store calls come back as `Effect::Request`.
///
/// Ownership is passed through the sub-reducer chain to avoid cloning:
/// - Each sub-reducer returns Ok((state, effect)) if it handled the action
/// - Or Err(state) to pass ownership back for the next reducer to try
pub fn reduce(state: TrackerState, action: Action) -> (TrackerState, Effect) {
    trace!("REDUCE: {:?}", action);

    let state = match reduce_selection(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_recording(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_shot(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_lineup(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    let state = match reduce_data_loading(state, &action) {
        Ok(result) => return result,
        Err(state) => state,
    };

    match action {
        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            (new_state, Effect::None)
        }

        Action::Quit => (state, Effect::None),

        _ => (state, Effect::None),
    }
}
