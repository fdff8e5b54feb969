use crate::api::{
    ApiError, EventId, EventType, NewSubstitution, PlayerId, ShotOutcome, Situation, StatEvent,
    Substitution,
};

use super::state::Tab;
use super::wizard::WizardEvent;

/// Tracker actions - like Redux actions
///
/// Dispatched from user input (keys, mouse) and from effects once a store
/// call resolves. Every completion carries the typed result of its call.
#[derive(Debug, Clone)]
pub enum Action {
    // Selection
    SelectPlayer(PlayerId),
    SelectPeriod(u8),
    SetClockMinutes(i64),
    SetClockSeconds(i64),
    ClockPreset(u8),
    SetSituation(Option<Situation>),
    SwitchTab(Tab),

    // Event recording
    TriggerEvent(EventType),
    EditEvent(EventId),
    CancelEdit,
    UndoLast,
    DeleteEvent(EventId),

    /// Input for the open shot wizard
    Wizard(WizardEvent),

    // Lineup and substitutions
    ToggleBenchPlayer(PlayerId),
    SelectInWaterPlayer(PlayerId),
    ConfirmSubstitution,
    SaveLineup,

    // Data refresh
    RefreshEvents,
    RefreshSubstitutions,

    // Store call completions
    StatRecorded {
        player_id: PlayerId,
        event_type: EventType,
        result: Result<(), ApiError>,
    },
    ShotRecorded {
        player_id: PlayerId,
        outcome: ShotOutcome,
        result: Result<(), ApiError>,
    },
    StatUpdated(Result<(), ApiError>),
    StatDeleted {
        event_id: EventId,
        result: Result<(), ApiError>,
    },
    SubstitutionCreated {
        substitution: NewSubstitution,
        result: Result<(), ApiError>,
    },
    LineupSaved {
        period: u8,
        player_ids: Vec<PlayerId>,
        result: Result<(), ApiError>,
    },
    EventsLoaded {
        seq: u64,
        result: Result<Vec<StatEvent>, ApiError>,
    },
    SubstitutionsLoaded(Result<Vec<Substitution>, ApiError>),

    // System
    SetStatusMessage { message: String, is_error: bool },
    Quit,
}
