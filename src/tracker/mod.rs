//! Live game tracker
//!
//! Actions flow through `reduce` into a single `TrackerState`; store calls come
//! back out as effects that the `Runtime` executes on tokio and feeds back in
//! as completion actions.

pub mod action;
pub mod clock;
pub mod coords;
pub mod effects;
pub mod error;
pub mod lineup;
pub mod reducer;
pub mod reducers;
pub mod runtime;
pub mod state;
pub mod wizard;

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod integration_tests;

pub use action::Action;
pub use clock::GameClock;
pub use effects::{load_props, Effect, StoreEffects, StoreRequest};
pub use error::TrackerError;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::{Tab, TrackerProps, TrackerState};
pub use wizard::{ShotRecord, ShotWizard, WizardEvent, WizardStep};
