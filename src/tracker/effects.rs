use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::api::{ApiError, EventId, GameId, NewShot, NewStat, NewSubstitution, PlayerId};
use crate::data_provider::GameDataProvider;

use super::action::Action;
use super::state::{TrackerProps, PERIODS};

/// Side effects returned by the reducer
///
/// Reducers stay pure: store calls are described as `Request`s and turned
/// into futures by the runtime through `StoreEffects`.
pub enum Effect {
    None,
    Action(Action),
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    Request(StoreRequest),
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => write!(f, "Effect::None"),
            Effect::Action(action) => write!(f, "Effect::Action({:?})", action),
            Effect::Batch(effects) => write!(f, "Effect::Batch({:?})", effects),
            Effect::Async(_) => write!(f, "Effect::Async(..)"),
            Effect::Request(request) => write!(f, "Effect::Request({:?})", request),
        }
    }
}

impl Effect {
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}

/// One call against the remote game store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreRequest {
    CreateStat(NewStat),
    CreateShot(NewShot),
    UpdateStat { stat_id: EventId, stat: NewStat },
    DeleteStat(EventId),
    CreateSubstitution(NewSubstitution),
    SaveLineup { period: u8, player_ids: Vec<PlayerId> },
    /// `seq` orders the responses; older lists never replace newer ones
    ListStats { seq: u64 },
    ListSubstitutions,
}

/// Effect handler for store calls
///
/// Each request becomes an `Effect::Async` that resolves into the matching
/// completion action.
pub struct StoreEffects {
    client: Arc<dyn GameDataProvider>,
    game_id: GameId,
}

impl StoreEffects {
    pub fn new(client: Arc<dyn GameDataProvider>, game_id: GameId) -> Self {
        Self { client, game_id }
    }

    pub fn execute(&self, request: StoreRequest) -> Effect {
        debug!("EFFECT: Executing {:?} for game {}", request, self.game_id);
        let client = self.client.clone();
        let game_id = self.game_id;

        match request {
            StoreRequest::CreateStat(stat) => Effect::Async(Box::pin(async move {
                let result = client.create_stat(game_id, &stat).await;
                Action::StatRecorded {
                    player_id: stat.player_id,
                    event_type: stat.kind,
                    result,
                }
            })),
            StoreRequest::CreateShot(shot) => Effect::Async(Box::pin(async move {
                let result = client.create_shot(game_id, &shot).await;
                Action::ShotRecorded {
                    player_id: shot.player_id,
                    outcome: shot.shot_outcome,
                    result,
                }
            })),
            StoreRequest::UpdateStat { stat_id, stat } => Effect::Async(Box::pin(async move {
                Action::StatUpdated(client.update_stat(game_id, stat_id, &stat).await)
            })),
            StoreRequest::DeleteStat(event_id) => Effect::Async(Box::pin(async move {
                let result = client.delete_stat(game_id, event_id).await;
                Action::StatDeleted { event_id, result }
            })),
            StoreRequest::CreateSubstitution(substitution) => Effect::Async(Box::pin(async move {
                let result = client.create_substitution(game_id, &substitution).await;
                Action::SubstitutionCreated { substitution, result }
            })),
            StoreRequest::SaveLineup { period, player_ids } => Effect::Async(Box::pin(async move {
                let result = client.save_starting_lineup(game_id, period, &player_ids).await;
                Action::LineupSaved { period, player_ids, result }
            })),
            StoreRequest::ListStats { seq } => Effect::Async(Box::pin(async move {
                let result = client.stats(game_id).await;
                Action::EventsLoaded { seq, result }
            })),
            StoreRequest::ListSubstitutions => Effect::Async(Box::pin(async move {
                Action::SubstitutionsLoaded(client.substitutions(game_id).await)
            })),
        }
    }
}

/// Load everything the tracker needs for one game
///
/// Periods without a saved lineup (or whose lineup fails to load) start empty.
pub async fn load_props(
    client: &dyn GameDataProvider,
    game_id: GameId,
) -> Result<TrackerProps, ApiError> {
    let (game, roster, stats, substitutions) = tokio::try_join!(
        client.game(game_id),
        client.roster(game_id),
        client.stats(game_id),
        client.substitutions(game_id),
    )?;

    let lineup_results = join_all((1..=PERIODS).map(|period| async move {
        (period, client.starting_lineup(game_id, period).await)
    }))
    .await;

    let mut lineups = HashMap::new();
    for (period, result) in lineup_results {
        match result {
            Ok(players) if !players.is_empty() => {
                lineups.insert(period, players.into_iter().map(|p| p.player_id).collect());
            }
            Ok(_) => {}
            Err(e) => warn!("LOAD: No lineup for period {}: {}", period, e),
        }
    }

    Ok(TrackerProps {
        game_id,
        game: Some(game),
        roster,
        stats,
        substitutions,
        lineups,
    })
}
