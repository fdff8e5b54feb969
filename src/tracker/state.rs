use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{
    EventType, Game, GameId, PlayerId, RosterPlayer, Situation, StatEvent, Substitution,
};
use crate::config::Config;

use super::clock::GameClock;
use super::effects::{Effect, StoreRequest};
use super::lineup::LineupTracker;
use super::wizard::ShotWizard;

pub const DEFAULT_STATUS_MESSAGE: &str = "Pick a player, then an event";

/// Number of periods in a game
pub const PERIODS: u8 = 4;

/// Initial data for one game, as loaded by the caller
#[derive(Debug, Clone, Default)]
pub struct TrackerProps {
    pub game_id: GameId,
    pub game: Option<Game>,
    pub roster: Vec<RosterPlayer>,
    pub stats: Vec<StatEvent>,
    pub substitutions: Vec<Substitution>,
    /// Saved starting lineup per period
    pub lineups: HashMap<u8, Vec<PlayerId>>,
}

/// Root tracker state - single source of truth
///
/// All changes happen through the reducer. Each sub-reducer works on its own
/// slice and reads `data` for the roster and event log.
#[derive(Debug, Clone, Default)]
pub struct TrackerState {
    /// Game data (from the store)
    pub data: DataState,

    /// Player, period, clock and situation pickers
    pub selection: SelectionState,

    pub recording: RecordingState,

    pub shot: ShotState,

    pub lineup: LineupTracker,

    pub system: SystemState,
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    pub game_id: GameId,
    pub game: Option<Game>,
    // Wrapped in Arc to avoid deep clones on every reducer call
    pub roster: Arc<Vec<RosterPlayer>>,
    /// Store insertion order; the last element is the "last" event
    pub stats: Arc<Vec<StatEvent>>,
    pub substitutions: Arc<Vec<Substitution>>,
    pub lineups: Arc<HashMap<u8, Vec<PlayerId>>>,
    /// Sequence of the most recent event list request
    pub stats_requested: u64,
    /// Sequence of the event list currently held in `stats`
    pub stats_loaded: u64,
}

impl DataState {
    /// A write landed in the store and its event list has not come back yet
    pub fn is_stats_stale(&self) -> bool {
        self.stats_loaded < self.stats_requested
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Stats,
    Subs,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Stats => "Stats",
            Tab::Subs => "Subs",
        }
    }

    pub fn toggled(&self) -> Tab {
        match self {
            Tab::Stats => Tab::Subs,
            Tab::Subs => Tab::Stats,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub selected_player: Option<PlayerId>,
    /// 1-4
    pub period: u8,
    pub clock: GameClock,
    /// `None` is even strength
    pub situation: Option<Situation>,
    pub active_tab: Tab,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected_player: None,
            period: 1,
            clock: GameClock::period_start(),
            situation: None,
            active_tab: Tab::Stats,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingState {
    /// A create/update is outstanding; triggers are dropped until it resolves
    pub in_flight: bool,
    /// Confirmation of the last recorded event
    pub confirmation: Option<String>,
    /// Event being edited; event-type triggers update it instead of recording
    pub editing: Option<StatEvent>,
}

/// Context captured when a GOAL/SHOT trigger opens the wizard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotContext {
    pub player_id: PlayerId,
    pub period: u8,
    pub clock: GameClock,
    pub situation: Option<Situation>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotState {
    pub wizard: ShotWizard,
    /// Present while the wizard is open
    pub pending: Option<ShotContext>,
}

impl ShotState {
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}

impl TrackerState {
    pub fn new(props: TrackerProps) -> Self {
        Self::with_config(props, Config::default())
    }

    pub fn with_config(props: TrackerProps, config: Config) -> Self {
        let mut state = Self {
            data: DataState {
                game_id: props.game_id,
                game: props.game,
                roster: Arc::new(props.roster),
                stats: Arc::new(props.stats),
                substitutions: Arc::new(props.substitutions),
                lineups: Arc::new(props.lineups),
                ..DataState::default()
            },
            ..Self::default()
        };
        state.system.config = config;
        state.system.reset_status_message();
        let period = state.selection.period;
        state.lineup.select_period(state.data.lineups.get(&period).map(Vec::as_slice));
        state
    }

    pub fn roster_player(&self, player_id: PlayerId) -> Option<&RosterPlayer> {
        self.data.roster.iter().find(|r| r.player_id == player_id)
    }

    pub fn selected_roster_player(&self) -> Option<&RosterPlayer> {
        self.selection.selected_player.and_then(|id| self.roster_player(id))
    }

    pub fn is_goalkeeper(&self, player: &RosterPlayer) -> bool {
        self.system.config.is_goalkeeper_cap(player.cap_number)
    }

    /// Roster sorted by cap number
    pub fn roster_by_cap(&self) -> Vec<&RosterPlayer> {
        let mut roster: Vec<&RosterPlayer> = self.data.roster.iter().collect();
        roster.sort_by_key(|r| r.cap_number);
        roster
    }

    /// Event-type buttons for the selected player
    ///
    /// Goalkeeper-only types appear only for goalkeepers and field-only types
    /// are hidden for them. With nobody selected the field set is shown.
    pub fn available_event_types(&self) -> Vec<EventType> {
        let goalkeeper = self
            .selected_roster_player()
            .map(|p| self.is_goalkeeper(p))
            .unwrap_or(false);
        EventType::RECORDABLE
            .into_iter()
            .filter(|t| !(t.goalkeeper_only() && !goalkeeper))
            .filter(|t| !(t.field_only() && goalkeeper))
            .collect()
    }

    pub fn bench(&self) -> Vec<&RosterPlayer> {
        self.lineup.bench(&self.data.roster)
    }

    pub fn in_water(&self) -> Vec<&RosterPlayer> {
        self.lineup.in_water_players(&self.data.roster)
    }

    pub fn goalkeepers_in_water(&self) -> Vec<&RosterPlayer> {
        self.lineup
            .goalkeepers_in_water(&self.data.roster, &self.system.config.goalkeeper_caps)
    }

    pub fn goalkeeper_warning(&self) -> Option<&'static str> {
        self.lineup
            .goalkeeper_warning(&self.data.roster, &self.system.config.goalkeeper_caps)
    }

    /// Teammates who can be credited with an assist on the open shot
    pub fn assist_candidates(&self) -> Vec<&RosterPlayer> {
        let scorer = self.shot.pending.map(|p| p.player_id);
        self.roster_by_cap()
            .into_iter()
            .filter(|r| Some(r.player_id) != scorer)
            .collect()
    }

    pub fn last_event(&self) -> Option<&StatEvent> {
        self.data.stats.last()
    }

    /// Ask the store for a fresh event list, tagged with the next sequence
    pub fn request_stats(&mut self) -> Effect {
        self.data.stats_requested += 1;
        Effect::Request(StoreRequest::ListStats {
            seq: self.data.stats_requested,
        })
    }

    pub fn is_editing(&self) -> bool {
        self.recording.editing.is_some()
    }
}
