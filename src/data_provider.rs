/// Trait for the remote game store, abstracting over the real API client and mock implementations
use async_trait::async_trait;

use crate::api::{
    ApiError, Client, Game, GameId, LineupPlayer, NewShot, NewStat, NewSubstitution, PlayerId,
    RosterEntry, RosterId, RosterPlayer, StatEvent, Substitution,
};

/// Remote store operations used by the tracker and the CLI commands
///
/// One call per operation; the store is the source of truth and applies each
/// create/update/delete atomically.
#[async_trait]
pub trait GameDataProvider: Send + Sync {
    /// Get a game's header data (opponent, status, score)
    async fn game(&self, game_id: GameId) -> Result<Game, ApiError>;

    /// List the game's roster
    async fn roster(&self, game_id: GameId) -> Result<Vec<RosterPlayer>, ApiError>;

    async fn add_to_roster(&self, game_id: GameId, entry: RosterEntry) -> Result<(), ApiError>;

    async fn remove_from_roster(&self, game_id: GameId, roster_id: RosterId) -> Result<(), ApiError>;

    /// List stat events in store insertion order
    async fn stats(&self, game_id: GameId) -> Result<Vec<StatEvent>, ApiError>;

    async fn create_stat(&self, game_id: GameId, stat: &NewStat) -> Result<(), ApiError>;

    async fn create_shot(&self, game_id: GameId, shot: &NewShot) -> Result<(), ApiError>;

    async fn update_stat(&self, game_id: GameId, stat_id: i64, stat: &NewStat) -> Result<(), ApiError>;

    async fn delete_stat(&self, game_id: GameId, stat_id: i64) -> Result<(), ApiError>;

    async fn substitutions(&self, game_id: GameId) -> Result<Vec<Substitution>, ApiError>;

    async fn create_substitution(&self, game_id: GameId, sub: &NewSubstitution) -> Result<(), ApiError>;

    /// Get the saved starting lineup for one period
    async fn starting_lineup(&self, game_id: GameId, period: u8) -> Result<Vec<LineupPlayer>, ApiError>;

    async fn save_starting_lineup(
        &self,
        game_id: GameId,
        period: u8,
        player_ids: &[PlayerId],
    ) -> Result<(), ApiError>;
}

/// Implement the trait for the real HTTP client
#[async_trait]
impl GameDataProvider for Client {
    async fn game(&self, game_id: GameId) -> Result<Game, ApiError> {
        self.game(game_id).await
    }

    async fn roster(&self, game_id: GameId) -> Result<Vec<RosterPlayer>, ApiError> {
        self.roster(game_id).await
    }

    async fn add_to_roster(&self, game_id: GameId, entry: RosterEntry) -> Result<(), ApiError> {
        self.add_to_roster(game_id, entry).await
    }

    async fn remove_from_roster(&self, game_id: GameId, roster_id: RosterId) -> Result<(), ApiError> {
        self.remove_from_roster(game_id, roster_id).await
    }

    async fn stats(&self, game_id: GameId) -> Result<Vec<StatEvent>, ApiError> {
        self.stats(game_id).await
    }

    async fn create_stat(&self, game_id: GameId, stat: &NewStat) -> Result<(), ApiError> {
        self.create_stat(game_id, stat).await
    }

    async fn create_shot(&self, game_id: GameId, shot: &NewShot) -> Result<(), ApiError> {
        self.create_shot(game_id, shot).await
    }

    async fn update_stat(&self, game_id: GameId, stat_id: i64, stat: &NewStat) -> Result<(), ApiError> {
        self.update_stat(game_id, stat_id, stat).await
    }

    async fn delete_stat(&self, game_id: GameId, stat_id: i64) -> Result<(), ApiError> {
        self.delete_stat(game_id, stat_id).await
    }

    async fn substitutions(&self, game_id: GameId) -> Result<Vec<Substitution>, ApiError> {
        self.substitutions(game_id).await
    }

    async fn create_substitution(&self, game_id: GameId, sub: &NewSubstitution) -> Result<(), ApiError> {
        self.create_substitution(game_id, sub).await
    }

    async fn starting_lineup(&self, game_id: GameId, period: u8) -> Result<Vec<LineupPlayer>, ApiError> {
        self.starting_lineup(game_id, period).await
    }

    async fn save_starting_lineup(
        &self,
        game_id: GameId,
        period: u8,
        player_ids: &[PlayerId],
    ) -> Result<(), ApiError> {
        self.save_starting_lineup(game_id, period, player_ids).await
    }
}
