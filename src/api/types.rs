/// Records exchanged with the remote game API
///
/// Field names follow the API's camelCase JSON. Enumerations use the API's
/// SCREAMING_SNAKE_CASE string values.
use serde::{Deserialize, Serialize};
use std::fmt;

pub type GameId = i64;
pub type PlayerId = i64;
pub type EventId = i64;
pub type RosterId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cap_number: Option<u8>,
}

impl Player {
    /// First word of the display name, used on compact player buttons
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// A player's assignment to one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    pub id: RosterId,
    pub cap_number: u8,
    pub player_id: PlayerId,
    pub player: Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Goal,
    Shot,
    Save,
    Steal,
    Block,
    Exclusion,
    Turnover,
    Assist,
}

impl EventType {
    /// Event types offered as buttons in the live tracker, in display order.
    /// ASSIST is only ever created by the API as part of a goal.
    pub const RECORDABLE: [EventType; 7] = [
        EventType::Goal,
        EventType::Shot,
        EventType::Save,
        EventType::Steal,
        EventType::Block,
        EventType::Exclusion,
        EventType::Turnover,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Goal => "GOAL",
            EventType::Shot => "SHOT",
            EventType::Save => "SAVE",
            EventType::Steal => "STEAL",
            EventType::Block => "BLOCK",
            EventType::Exclusion => "EXCLUSION",
            EventType::Turnover => "TURNOVER",
            EventType::Assist => "ASSIST",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Goal => "Goal",
            EventType::Shot => "Shot",
            EventType::Save => "Save",
            EventType::Steal => "Steal",
            EventType::Block => "Block",
            EventType::Exclusion => "Exclusion",
            EventType::Turnover => "Turnover",
            EventType::Assist => "Assist",
        }
    }

    /// Shot-class events go through the shot location wizard
    pub fn is_shot_class(&self) -> bool {
        matches!(self, EventType::Goal | EventType::Shot)
    }

    pub fn goalkeeper_only(&self) -> bool {
        matches!(self, EventType::Save)
    }

    pub fn field_only(&self) -> bool {
        matches!(self, EventType::Block)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tactical context of an event. Even strength (NORMAL) is the absence of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Situation {
    SixOnSix,
    ManUp,
    ManDown,
    Counter,
    Penalty,
}

impl Situation {
    pub const ALL: [Situation; 5] = [
        Situation::SixOnSix,
        Situation::ManUp,
        Situation::ManDown,
        Situation::Counter,
        Situation::Penalty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Situation::SixOnSix => "SIX_ON_SIX",
            Situation::ManUp => "MAN_UP",
            Situation::ManDown => "MAN_DOWN",
            Situation::Counter => "COUNTER",
            Situation::Penalty => "PENALTY",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Situation::SixOnSix => "6v6",
            Situation::ManUp => "Man Up",
            Situation::ManDown => "Man Down",
            Situation::Counter => "Counter",
            Situation::Penalty => "Penalty",
        }
    }
}

/// Label for an optional situation, "Normal" when absent
pub fn situation_label(situation: Option<Situation>) -> &'static str {
    situation.map(|s| s.label()).unwrap_or("Normal")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShotOutcome {
    Goal,
    Saved,
    Missed,
    Blocked,
    Post,
}

impl ShotOutcome {
    pub const ALL: [ShotOutcome; 5] = [
        ShotOutcome::Goal,
        ShotOutcome::Saved,
        ShotOutcome::Missed,
        ShotOutcome::Blocked,
        ShotOutcome::Post,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShotOutcome::Goal => "GOAL",
            ShotOutcome::Saved => "SAVED",
            ShotOutcome::Missed => "MISSED",
            ShotOutcome::Blocked => "BLOCKED",
            ShotOutcome::Post => "POST",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShotOutcome::Goal => "Goal",
            ShotOutcome::Saved => "Saved",
            ShotOutcome::Missed => "Missed",
            ShotOutcome::Blocked => "Blocked",
            ShotOutcome::Post => "Post",
        }
    }

    /// Event type the API stores a shot with this outcome as
    pub fn event_type(&self) -> EventType {
        match self {
            ShotOutcome::Goal => EventType::Goal,
            _ => EventType::Shot,
        }
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded in-game occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatEvent {
    pub id: EventId,
    #[serde(rename = "type")]
    pub kind: EventType,
    #[serde(default)]
    pub context: Option<Situation>,
    #[serde(default)]
    pub shot_outcome: Option<ShotOutcome>,
    #[serde(default)]
    pub period: Option<u8>,
    #[serde(default)]
    pub clock: Option<f64>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub goal_x: Option<f64>,
    #[serde(default)]
    pub goal_y: Option<f64>,
    pub player_id: PlayerId,
    pub game_id: GameId,
    #[serde(default)]
    pub assist_event_id: Option<EventId>,
    pub player: Player,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Substitution {
    pub id: i64,
    pub period: u8,
    /// Whole seconds elapsed in the period
    pub time: u32,
    pub player_in_id: PlayerId,
    pub player_out_id: PlayerId,
    #[serde(default)]
    pub player_in: Option<PlayerRef>,
    #[serde(default)]
    pub player_out: Option<PlayerRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupPlayer {
    pub id: i64,
    pub player_id: PlayerId,
    #[serde(default)]
    pub player: Option<Player>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Upcoming,
    Live,
    Ended,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Upcoming => "UPCOMING",
            GameStatus::Live => "LIVE",
            GameStatus::Ended => "ENDED",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub date: String,
    pub opponent: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub home_or_away: Option<String>,
    pub status: GameStatus,
    #[serde(default)]
    pub team_score: u32,
    #[serde(default)]
    pub opponent_score: u32,
}

// Request payloads

/// Body of a stat create or update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStat {
    pub player_id: PlayerId,
    #[serde(rename = "type")]
    pub kind: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Situation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<f64>,
}

/// Body of a shot-class stat create
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShot {
    pub player_id: PlayerId,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub x: f64,
    pub y: f64,
    pub goal_x: f64,
    pub goal_y: f64,
    pub shot_outcome: ShotOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assister_id: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Situation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubstitution {
    pub period: u8,
    pub time: u32,
    pub player_in_id: PlayerId,
    pub player_out_id: PlayerId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupEntry {
    pub player_id: PlayerId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineupPayload {
    pub period: u8,
    pub lineup: Vec<LineupEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub cap_number: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterPayload {
    pub roster: Vec<RosterEntry>,
}
