//! Shared helpers for tracker tests.
//!
//! ```rust
//! use crate::tracker::testing::*;
//!
//! let state = create_state();
//! let (mut runtime, client) = create_runtime();
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::dev::MockClient;
use crate::fixtures;

use super::effects::{Effect, StoreEffects, StoreRequest};
use super::runtime::Runtime;
use super::state::{TrackerProps, TrackerState};

/// How long `Runtime::settle` waits for another completion
pub const SETTLE: Duration = Duration::from_millis(50);

/// Props built from the fixture game
pub fn create_props() -> TrackerProps {
    TrackerProps {
        game_id: fixtures::MOCK_GAME_ID,
        game: Some(fixtures::create_mock_game(fixtures::MOCK_GAME_ID)),
        roster: fixtures::create_mock_roster(),
        stats: fixtures::create_mock_stats(),
        substitutions: fixtures::create_mock_substitutions(),
        lineups: fixtures::create_mock_lineups(),
    }
}

pub fn create_state() -> TrackerState {
    TrackerState::new(create_props())
}

/// Runtime wired to a fresh mock store; the client is returned for assertions
pub fn create_runtime() -> (Runtime, Arc<MockClient>) {
    let client = Arc::new(MockClient::new());
    let effects = Arc::new(StoreEffects::new(client.clone(), fixtures::MOCK_GAME_ID));
    (Runtime::new(create_state(), effects), client)
}

/// Sequence carried by a `ListStats` request effect
pub fn requested_seq(effect: Effect) -> u64 {
    match effect {
        Effect::Request(StoreRequest::ListStats { seq }) => seq,
        other => panic!("expected an event list request, got {:?}", other),
    }
}
