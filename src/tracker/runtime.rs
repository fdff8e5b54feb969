use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::effects::{Effect, StoreEffects};
use super::reducer::reduce;
use super::state::TrackerState;

/// Tracker runtime - owns the state and runs effects
///
/// The Runtime is responsible for:
/// - Dispatching actions through the reducer
/// - Turning store requests into async effects
/// - Feeding completed effects back in as actions
pub struct Runtime {
    /// Current tracker state
    state: TrackerState,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    store_effects: Arc<StoreEffects>,
}

impl Runtime {
    /// Create a new runtime with initial state and store effects handler
    pub fn new(initial_state: TrackerState, store_effects: Arc<StoreEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        let action_tx_clone = action_tx.clone();
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx_clone).await;
        });

        Self {
            state: initial_state,
            action_tx,
            action_rx,
            effect_tx,
            store_effects,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning TrackerState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);
        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;
        self.execute_effect(effect);
    }

    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Request(request) => {
                debug!("EFFECT: Executing store request {:?}", request);
                let async_effect = self.store_effects.execute(request);
                let _ = self.effect_tx.send(async_effect);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Action(_) | Effect::Async(_) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Keep dispatching completions until none arrives within `idle`
    #[cfg(test)]
    pub async fn settle(&mut self, idle: std::time::Duration) -> usize {
        let mut count = 0;
        while let Ok(Some(action)) = tokio::time::timeout(idle, self.action_rx.recv()).await {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Execute effects asynchronously
    ///
    /// This runs in a separate tokio task and processes effects as they come in.
    /// Effects can dispatch new actions which feed back into the runtime.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx);
                }
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            // Requests are converted by execute_effect() before being queued
            Effect::Request(request) => {
                tracing::warn!("Store request reached async executor: {:?}", request);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EventType;
    use crate::fixtures::player_id_for_cap;
    use crate::tracker::state::Tab;
    use crate::tracker::testing::{create_runtime, SETTLE};

    #[tokio::test]
    async fn test_dispatch_action() {
        let (mut runtime, _) = create_runtime();
        runtime.dispatch(Action::SwitchTab(Tab::Subs));
        assert_eq!(runtime.state().selection.active_tab, Tab::Subs);
    }

    #[tokio::test]
    async fn test_action_queue() {
        let (mut runtime, _) = create_runtime();
        let tx = runtime.action_sender();
        tx.send(Action::SelectPeriod(3)).unwrap();
        tx.send(Action::ClockPreset(4)).unwrap();

        assert_eq!(runtime.process_actions(), 2);
        assert_eq!(runtime.state().selection.period, 3);
        assert_eq!(runtime.state().selection.clock.to_string(), "4:00");
    }

    #[tokio::test]
    async fn test_effect_action_feeds_back() {
        let (mut runtime, _) = create_runtime();
        runtime.execute_effect(Effect::Batch(vec![
            Effect::None,
            Effect::Action(Action::SwitchTab(Tab::Subs)),
        ]));
        runtime.settle(SETTLE).await;
        assert_eq!(runtime.state().selection.active_tab, Tab::Subs);
    }

    #[tokio::test]
    async fn test_request_round_trip_through_store() {
        let (mut runtime, client) = create_runtime();
        runtime.dispatch(Action::SelectPlayer(player_id_for_cap(11)));
        runtime.dispatch(Action::TriggerEvent(EventType::Steal));
        assert!(runtime.state().recording.in_flight);

        runtime.settle(SETTLE).await;

        assert!(!runtime.state().recording.in_flight);
        assert_eq!(runtime.state().data.stats.len(), 4);
        assert_eq!(client.call_count("create_stat"), 1);
        assert_eq!(client.call_count("stats"), 1);
    }
}
