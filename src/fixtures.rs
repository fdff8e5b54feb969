/// Mock fixture data for testing and development
///
/// Deterministic game data used by:
/// 1. Unit and integration tests - predictable rosters and event logs
/// 2. Development mock mode - running the tracker without a backend
/// 3. Benchmarks - consistent data for reducer throughput
///
/// The roster is a full 13-player water-polo squad; caps 1 and 13 are goalkeepers.
use std::collections::HashMap;

use crate::api::{
    EventType, Game, GameId, GameStatus, Player, PlayerId, PlayerRef, RosterPlayer, ShotOutcome,
    Situation, StatEvent, Substitution,
};

pub const MOCK_GAME_ID: GameId = 1;

const SQUAD: [(u8, &str, &str); 13] = [
    (1, "Marta", "Bach"),
    (2, "Lena", "Okafor"),
    (3, "Ines", "Duarte"),
    (4, "Clara", "Novak"),
    (5, "Sofia", "Lindqvist"),
    (6, "Maya", "Horvat"),
    (7, "Eva", "Marchetti"),
    (8, "Nora", "Kaplan"),
    (9, "Julia", "Szabo"),
    (10, "Ana", "Costa"),
    (11, "Rita", "Varga"),
    (12, "Ida", "Petrov"),
    (13, "Zoe", "Almeida"),
];

/// Player id for a squad cap number (ids are `100 + cap`)
pub fn player_id_for_cap(cap: u8) -> PlayerId {
    100 + cap as PlayerId
}

pub fn create_mock_player(cap: u8) -> Player {
    let (first, last) = SQUAD
        .iter()
        .find(|(c, _, _)| *c == cap)
        .map(|(_, f, l)| (*f, *l))
        .unwrap_or(("Guest", "Player"));
    Player {
        id: player_id_for_cap(cap),
        name: format!("{} {}", first, last),
        first_name: first.to_string(),
        last_name: last.to_string(),
        position: None,
        cap_number: Some(cap),
    }
}

pub fn create_mock_game(game_id: GameId) -> Game {
    Game {
        id: game_id,
        date: "2025-03-08".to_string(),
        opponent: "Riverside Otters".to_string(),
        location: Some("Aquatic Center".to_string()),
        home_or_away: Some("HOME".to_string()),
        status: GameStatus::Live,
        team_score: 2,
        opponent_score: 1,
    }
}

/// Full squad, roster entry ids `cap`
pub fn create_mock_roster() -> Vec<RosterPlayer> {
    SQUAD
        .iter()
        .map(|(cap, _, _)| RosterPlayer {
            id: *cap as i64,
            cap_number: *cap,
            player_id: player_id_for_cap(*cap),
            player: create_mock_player(*cap),
        })
        .collect()
}

/// Build a non-shot event for a squad player
pub fn create_mock_event(id: i64, kind: EventType, cap: u8, period: u8, clock: f64) -> StatEvent {
    StatEvent {
        id,
        kind,
        context: None,
        shot_outcome: None,
        period: Some(period),
        clock: Some(clock),
        x: None,
        y: None,
        goal_x: None,
        goal_y: None,
        player_id: player_id_for_cap(cap),
        game_id: MOCK_GAME_ID,
        assist_event_id: None,
        player: create_mock_player(cap),
    }
}

/// A short first-period log: a goal, a save, an exclusion
pub fn create_mock_stats() -> Vec<StatEvent> {
    let mut goal = create_mock_event(1, EventType::Goal, 10, 1, 6.5);
    goal.shot_outcome = Some(ShotOutcome::Goal);
    goal.x = Some(4.5);
    goal.y = Some(9.8);
    goal.goal_x = Some(2.4);
    goal.goal_y = Some(0.7);

    let save = create_mock_event(2, EventType::Save, 1, 1, 5.0);

    let mut exclusion = create_mock_event(3, EventType::Exclusion, 4, 1, 3.25);
    exclusion.context = Some(Situation::ManDown);

    vec![goal, save, exclusion]
}

pub fn create_mock_substitutions() -> Vec<Substitution> {
    let out = create_mock_player(6);
    let into = create_mock_player(8);
    vec![Substitution {
        id: 1,
        period: 1,
        time: 150,
        player_in_id: into.id,
        player_out_id: out.id,
        player_in: Some(PlayerRef { id: into.id, name: into.name }),
        player_out: Some(PlayerRef { id: out.id, name: out.name }),
    }]
}

/// Saved lineups: period 1 starts caps 1-7, later periods have none yet
pub fn create_mock_lineups() -> HashMap<u8, Vec<PlayerId>> {
    let mut lineups = HashMap::new();
    lineups.insert(1, (1..=7).map(player_id_for_cap).collect());
    lineups
}
