use anyhow::{Context, Result};

use crate::api::{Game, GameId, RosterPlayer, StatEvent};
use crate::data_provider::GameDataProvider;
use crate::formatting::format_header;

use super::display_game_date;
use super::events::format_events;

fn format_game_block(game: &Game) -> String {
    let mut output = String::new();
    let venue = match game.home_or_away.as_deref() {
        Some("AWAY") => "@",
        _ => "vs",
    };
    output.push_str(&format_header(&format!("{} {}", venue, game.opponent), true));
    output.push_str(&format!("Date:     {}\n", display_game_date(&game.date)));
    if let Some(location) = &game.location {
        output.push_str(&format!("Location: {}\n", location));
    }
    output.push_str(&format!("Status:   {}\n", game.status));
    output.push_str(&format!("Score:    {} - {}\n", game.team_score, game.opponent_score));
    output
}

/// Game header with the stored score, then the event log in store order
pub fn format_summary(game: &Game, events: &[StatEvent], roster: &[RosterPlayer]) -> String {
    let mut output = format_game_block(game);
    output.push('\n');
    output.push_str(&format_events(events, roster, None));
    output
}

pub async fn run(client: &dyn GameDataProvider, game_id: GameId) -> Result<()> {
    let (game, roster, events) = tokio::try_join!(
        client.game(game_id),
        client.roster(game_id),
        client.stats(game_id),
    )
    .with_context(|| format!("Failed to fetch summary for game {}", game_id))?;

    print!("{}", format_summary(&game, &events, &roster));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::MockClient;
    use crate::fixtures::{self, MOCK_GAME_ID};

    #[test]
    fn test_game_block() {
        let output = format_game_block(&fixtures::create_mock_game(MOCK_GAME_ID));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "vs Riverside Otters");
        assert_eq!(lines[2], "Date:     Sat, Mar 8 2025");
        assert_eq!(lines[3], "Location: Aquatic Center");
        assert_eq!(lines[4], "Status:   LIVE");
        assert_eq!(lines[5], "Score:    2 - 1");
    }

    #[test]
    fn test_away_game_uses_at_sign() {
        let mut game = fixtures::create_mock_game(MOCK_GAME_ID);
        game.home_or_away = Some("AWAY".to_string());
        assert!(format_game_block(&game).starts_with("@ Riverside Otters\n"));
    }

    #[test]
    fn test_summary_lists_events_in_store_order() {
        let mut events = fixtures::create_mock_stats();
        events.swap(0, 2);
        let output = format_summary(
            &fixtures::create_mock_game(MOCK_GAME_ID),
            &events,
            &fixtures::create_mock_roster(),
        );
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[7], "Events");
        assert!(lines[9].contains("EXCLUSION"));
        assert!(lines[10].contains("SAVE"));
        assert!(lines[11].contains("GOAL"));
        assert_eq!(lines.len(), 12);
    }

    #[tokio::test]
    async fn test_run_fetches_game_roster_and_events() {
        let client = MockClient::new();
        run(&client, MOCK_GAME_ID).await.unwrap();
        for op in ["game", "roster", "stats"] {
            assert_eq!(client.call_count(op), 1, "{} should be fetched once", op);
        }
        assert_eq!(client.call_count("substitutions"), 0);
    }
}
