use std::sync::Arc;

use tracing::debug;

use crate::tracker::action::Action;
use crate::tracker::effects::{Effect, StoreRequest};
use crate::tracker::state::TrackerState;

/// Handle all data loading actions (store responses)
///
/// Returns Ok((new_state, effect)) if the action was handled,
/// or Err(state) to pass ownership back to the caller.
pub fn reduce_data_loading(
    state: TrackerState,
    action: &Action,
) -> Result<(TrackerState, Effect), TrackerState> {
    match action {
        Action::RefreshEvents => {
            let mut new_state = state;
            let effect = new_state.request_stats();
            Ok((new_state, effect))
        }
        Action::RefreshSubstitutions => {
            Ok((state, Effect::Request(StoreRequest::ListSubstitutions)))
        }
        Action::EventsLoaded { seq, result } => {
            let mut new_state = state;
            if *seq <= new_state.data.stats_loaded {
                debug!("DATA: Ignoring event list {} (holding {})", seq, new_state.data.stats_loaded);
                return Ok((new_state, Effect::None));
            }
            match result {
                Ok(stats) => {
                    debug!("DATA: Loaded {} events (list {})", stats.len(), seq);
                    new_state.data.stats = Arc::new(stats.clone());
                    new_state.data.stats_loaded = *seq;
                }
                Err(e) => {
                    new_state
                        .system
                        .set_status_error_message(format!("Failed to load events: {}", e));
                }
            }
            Ok((new_state, Effect::None))
        }
        Action::SubstitutionsLoaded(result) => {
            let mut new_state = state;
            match result {
                Ok(substitutions) => {
                    debug!("DATA: Loaded {} substitutions", substitutions.len());
                    new_state.data.substitutions = Arc::new(substitutions.clone());
                }
                Err(e) => {
                    new_state
                        .system
                        .set_status_error_message(format!("Failed to load substitutions: {}", e));
                }
            }
            Ok((new_state, Effect::None))
        }
        _ => Err(state),
    }
}
