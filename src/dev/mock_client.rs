/// In-memory game store for development and testing
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::info;

use crate::api::{
    ApiError, Game, GameId, LineupPlayer, NewShot, NewStat, NewSubstitution, PlayerId, PlayerRef,
    RosterEntry, RosterId, RosterPlayer, StatEvent, Substitution,
};
use crate::data_provider::GameDataProvider;
use crate::fixtures;

/// Mock client that keeps one game in memory instead of calling the API
///
/// Writes behave like the real store (ids assigned in insertion order, roster
/// membership checked). `set_failing(true)` makes every write fail, and every
/// call is recorded so tests can count remote round trips.
pub struct MockClient {
    store: Mutex<MockStore>,
    failing: AtomicBool,
    calls: Mutex<Vec<&'static str>>,
}

struct MockStore {
    game: Game,
    roster: Vec<RosterPlayer>,
    stats: Vec<StatEvent>,
    substitutions: Vec<Substitution>,
    lineups: HashMap<u8, Vec<PlayerId>>,
    next_id: i64,
}

impl MockClient {
    /// Create a mock client seeded with the fixture game
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self::with_data(
            fixtures::create_mock_game(fixtures::MOCK_GAME_ID),
            fixtures::create_mock_roster(),
            fixtures::create_mock_stats(),
            fixtures::create_mock_substitutions(),
            fixtures::create_mock_lineups(),
        )
    }

    pub fn with_data(
        game: Game,
        roster: Vec<RosterPlayer>,
        stats: Vec<StatEvent>,
        substitutions: Vec<Substitution>,
        lineups: HashMap<u8, Vec<PlayerId>>,
    ) -> Self {
        let next_id = stats
            .iter()
            .map(|s| s.id)
            .chain(substitutions.iter().map(|s| s.id))
            .chain(roster.iter().map(|r| r.id))
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            store: Mutex::new(MockStore {
                game,
                roster,
                stats,
                substitutions,
                lineups,
                next_id,
            }),
            failing: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make every write return a server error until reset
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of calls made to the named operation
    pub fn call_count(&self, operation: &str) -> usize {
        lock(&self.calls).iter().filter(|c| **c == operation).count()
    }

    /// Total number of write calls made
    pub fn write_count(&self) -> usize {
        const WRITES: [&str; 8] = [
            "add_to_roster",
            "remove_from_roster",
            "create_stat",
            "create_shot",
            "update_stat",
            "delete_stat",
            "create_substitution",
            "save_starting_lineup",
        ];
        lock(&self.calls).iter().filter(|c| WRITES.contains(c)).count()
    }

    pub fn stored_stats(&self) -> Vec<StatEvent> {
        self.store().stats.clone()
    }

    pub fn stored_substitutions(&self) -> Vec<Substitution> {
        self.store().substitutions.clone()
    }

    pub fn stored_lineup(&self, period: u8) -> Option<Vec<PlayerId>> {
        self.store().lineups.get(&period).cloned()
    }

    fn store(&self) -> MutexGuard<'_, MockStore> {
        lock(&self.store)
    }

    fn record(&self, operation: &'static str) {
        lock(&self.calls).push(operation);
    }

    fn check_game(&self, store: &MockStore, game_id: GameId) -> Result<(), ApiError> {
        if store.game.id == game_id {
            Ok(())
        } else {
            Err(ApiError::status(404, Some("Game not found".to_string())))
        }
    }

    fn begin_write(&self, operation: &'static str) -> Result<(), ApiError> {
        self.record(operation);
        if self.failing.load(Ordering::SeqCst) {
            info!("MockClient: Failing {}", operation);
            return Err(ApiError::status(500, Some("Mock failure".to_string())));
        }
        Ok(())
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockStore {
    fn roster_player(&self, player_id: PlayerId) -> Result<&RosterPlayer, ApiError> {
        self.roster
            .iter()
            .find(|r| r.player_id == player_id)
            .ok_or_else(|| ApiError::status(422, Some("Player is not on the game roster".to_string())))
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push_stat(&mut self, game_id: GameId, stat: &NewStat) -> Result<i64, ApiError> {
        let player = self.roster_player(stat.player_id)?.player.clone();
        let id = self.allocate_id();
        self.stats.push(StatEvent {
            id,
            kind: stat.kind,
            context: stat.context,
            shot_outcome: None,
            period: stat.period,
            clock: stat.clock,
            x: None,
            y: None,
            goal_x: None,
            goal_y: None,
            player_id: stat.player_id,
            game_id,
            assist_event_id: None,
            player,
        });
        Ok(id)
    }
}

#[async_trait]
impl GameDataProvider for MockClient {
    async fn game(&self, game_id: GameId) -> Result<Game, ApiError> {
        self.record("game");
        let store = self.store();
        self.check_game(&store, game_id)?;
        Ok(store.game.clone())
    }

    async fn roster(&self, game_id: GameId) -> Result<Vec<RosterPlayer>, ApiError> {
        self.record("roster");
        let store = self.store();
        self.check_game(&store, game_id)?;
        Ok(store.roster.clone())
    }

    async fn add_to_roster(&self, game_id: GameId, entry: RosterEntry) -> Result<(), ApiError> {
        self.begin_write("add_to_roster")?;
        let mut store = self.store();
        self.check_game(&store, game_id)?;
        if store.roster.iter().any(|r| r.player_id == entry.player_id) {
            return Err(ApiError::status(409, Some("Player is already on the roster".to_string())));
        }
        let id = store.allocate_id();
        let mut player = fixtures::create_mock_player(entry.cap_number);
        player.id = entry.player_id;
        store.roster.push(RosterPlayer {
            id,
            cap_number: entry.cap_number,
            player_id: entry.player_id,
            player,
        });
        Ok(())
    }

    async fn remove_from_roster(&self, game_id: GameId, roster_id: RosterId) -> Result<(), ApiError> {
        self.begin_write("remove_from_roster")?;
        let mut store = self.store();
        self.check_game(&store, game_id)?;
        let before = store.roster.len();
        store.roster.retain(|r| r.id != roster_id);
        if store.roster.len() == before {
            return Err(ApiError::status(404, Some("Roster entry not found".to_string())));
        }
        Ok(())
    }

    async fn stats(&self, game_id: GameId) -> Result<Vec<StatEvent>, ApiError> {
        self.record("stats");
        let store = self.store();
        self.check_game(&store, game_id)?;
        Ok(store.stats.clone())
    }

    async fn create_stat(&self, game_id: GameId, stat: &NewStat) -> Result<(), ApiError> {
        self.begin_write("create_stat")?;
        let mut store = self.store();
        self.check_game(&store, game_id)?;
        store.push_stat(game_id, stat)?;
        Ok(())
    }

    async fn create_shot(&self, game_id: GameId, shot: &NewShot) -> Result<(), ApiError> {
        self.begin_write("create_shot")?;
        let mut store = self.store();
        self.check_game(&store, game_id)?;
        if let Some(assister) = shot.assister_id {
            store.roster_player(assister)?;
        }

        let base = NewStat {
            player_id: shot.player_id,
            kind: shot.kind,
            context: shot.context,
            period: shot.period,
            clock: shot.clock,
        };
        let shot_id = store.push_stat(game_id, &base)?;
        if let Some(stat) = store.stats.iter_mut().find(|s| s.id == shot_id) {
            stat.shot_outcome = Some(shot.shot_outcome);
            stat.x = Some(shot.x);
            stat.y = Some(shot.y);
            stat.goal_x = Some(shot.goal_x);
            stat.goal_y = Some(shot.goal_y);
        }

        if let Some(assister) = shot.assister_id {
            let assist = NewStat { player_id: assister, kind: crate::api::EventType::Assist, ..base };
            let assist_id = store.push_stat(game_id, &assist)?;
            if let Some(stat) = store.stats.iter_mut().find(|s| s.id == shot_id) {
                stat.assist_event_id = Some(assist_id);
            }
        }
        Ok(())
    }

    async fn update_stat(&self, game_id: GameId, stat_id: i64, stat: &NewStat) -> Result<(), ApiError> {
        self.begin_write("update_stat")?;
        let mut store = self.store();
        self.check_game(&store, game_id)?;
        let player = store.roster_player(stat.player_id)?.player.clone();
        let existing = store
            .stats
            .iter_mut()
            .find(|s| s.id == stat_id)
            .ok_or_else(|| ApiError::status(404, Some("Stat not found".to_string())))?;
        existing.kind = stat.kind;
        existing.player_id = stat.player_id;
        existing.player = player;
        existing.period = stat.period;
        existing.clock = stat.clock;
        existing.context = stat.context;
        Ok(())
    }

    async fn delete_stat(&self, game_id: GameId, stat_id: i64) -> Result<(), ApiError> {
        self.begin_write("delete_stat")?;
        let mut store = self.store();
        self.check_game(&store, game_id)?;
        let before = store.stats.len();
        store.stats.retain(|s| s.id != stat_id);
        if store.stats.len() == before {
            return Err(ApiError::status(404, Some("Stat not found".to_string())));
        }
        Ok(())
    }

    async fn substitutions(&self, game_id: GameId) -> Result<Vec<Substitution>, ApiError> {
        self.record("substitutions");
        let store = self.store();
        self.check_game(&store, game_id)?;
        Ok(store.substitutions.clone())
    }

    async fn create_substitution(&self, game_id: GameId, sub: &NewSubstitution) -> Result<(), ApiError> {
        self.begin_write("create_substitution")?;
        let mut store = self.store();
        self.check_game(&store, game_id)?;
        let player_in = store.roster_player(sub.player_in_id)?.player.clone();
        let player_out = store.roster_player(sub.player_out_id)?.player.clone();
        let id = store.allocate_id();
        store.substitutions.push(Substitution {
            id,
            period: sub.period,
            time: sub.time,
            player_in_id: sub.player_in_id,
            player_out_id: sub.player_out_id,
            player_in: Some(PlayerRef { id: player_in.id, name: player_in.name }),
            player_out: Some(PlayerRef { id: player_out.id, name: player_out.name }),
        });
        Ok(())
    }

    async fn starting_lineup(&self, game_id: GameId, period: u8) -> Result<Vec<LineupPlayer>, ApiError> {
        self.record("starting_lineup");
        let store = self.store();
        self.check_game(&store, game_id)?;
        let ids = store
            .lineups
            .get(&period)
            .ok_or_else(|| ApiError::status(404, Some("No lineup saved for period".to_string())))?;
        Ok(ids
            .iter()
            .enumerate()
            .map(|(i, &player_id)| LineupPlayer {
                id: i as i64 + 1,
                player_id,
                player: store
                    .roster
                    .iter()
                    .find(|r| r.player_id == player_id)
                    .map(|r| r.player.clone()),
            })
            .collect())
    }

    async fn save_starting_lineup(
        &self,
        game_id: GameId,
        period: u8,
        player_ids: &[PlayerId],
    ) -> Result<(), ApiError> {
        self.begin_write("save_starting_lineup")?;
        let mut store = self.store();
        self.check_game(&store, game_id)?;
        store.lineups.insert(period, player_ids.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{EventType, ShotOutcome};

    #[tokio::test]
    async fn test_create_stat_appends_in_order() {
        let client = MockClient::new();
        let stat = NewStat {
            player_id: fixtures::player_id_for_cap(5),
            kind: EventType::Steal,
            context: None,
            period: Some(2),
            clock: Some(4.0),
        };
        client.create_stat(fixtures::MOCK_GAME_ID, &stat).await.unwrap();

        let stats = client.stats(fixtures::MOCK_GAME_ID).await.unwrap();
        let last = stats.last().unwrap();
        assert_eq!(last.kind, EventType::Steal);
        assert!(last.id > stats[stats.len() - 2].id);
        assert_eq!(client.call_count("create_stat"), 1);
    }

    #[tokio::test]
    async fn test_create_stat_rejects_player_off_roster() {
        let client = MockClient::new();
        let stat = NewStat {
            player_id: 999,
            kind: EventType::Steal,
            context: None,
            period: None,
            clock: None,
        };
        let result = client.create_stat(fixtures::MOCK_GAME_ID, &stat).await;
        assert!(matches!(result, Err(ApiError::Status { status: 422, .. })));
    }

    #[tokio::test]
    async fn test_goal_with_assist_creates_linked_assist() {
        let client = MockClient::new();
        let shot = NewShot {
            player_id: fixtures::player_id_for_cap(9),
            kind: EventType::Goal,
            x: 3.0,
            y: 8.0,
            goal_x: 0.5,
            goal_y: 0.2,
            shot_outcome: ShotOutcome::Goal,
            assister_id: Some(fixtures::player_id_for_cap(3)),
            period: Some(1),
            clock: Some(2.0),
            context: None,
        };
        client.create_shot(fixtures::MOCK_GAME_ID, &shot).await.unwrap();

        let stats = client.stored_stats();
        let assist = stats.last().unwrap();
        let goal = &stats[stats.len() - 2];
        assert_eq!(assist.kind, EventType::Assist);
        assert_eq!(goal.assist_event_id, Some(assist.id));
        assert_eq!(goal.goal_x, Some(0.5));
    }

    #[tokio::test]
    async fn test_failing_writes_leave_store_untouched() {
        let client = MockClient::new();
        client.set_failing(true);
        let before = client.stored_stats().len();

        let result = client.delete_stat(fixtures::MOCK_GAME_ID, 1).await;
        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
        assert_eq!(client.stored_stats().len(), before);
        assert_eq!(client.write_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_lineup_is_not_found() {
        let client = MockClient::new();
        let result = client.starting_lineup(fixtures::MOCK_GAME_ID, 3).await;
        assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    }
}
