use anyhow::{Context, Result};
use futures::future::join_all;

use crate::api::{GameId, LineupPlayer, RosterPlayer};
use crate::data_provider::GameDataProvider;
use crate::formatting::{format_header, player_label};
use crate::tracker::state::PERIODS;

fn lineup_row(entry: &LineupPlayer, roster: &[RosterPlayer]) -> String {
    let on_roster = roster.iter().find(|r| r.player_id == entry.player_id);
    let name = on_roster
        .map(|r| r.player.name.clone())
        .or_else(|| entry.player.as_ref().map(|p| p.name.clone()))
        .unwrap_or_else(|| format!("Player {}", entry.player_id));
    player_label(&name, on_roster.map(|r| r.cap_number))
}

/// Format the starting lineups for the given periods
///
/// Periods without a saved lineup are shown as `(not set)`.
pub fn format_lineups(lineups: &[(u8, Vec<LineupPlayer>)], roster: &[RosterPlayer]) -> String {
    let mut output = String::new();
    output.push_str(&format_header("Starting Lineups", true));

    for (i, (period, players)) in lineups.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format_header(&format!("Period {}", period), false));
        if players.is_empty() {
            output.push_str("(not set)\n");
            continue;
        }
        let mut rows: Vec<(u8, String)> = players
            .iter()
            .map(|p| {
                let cap = roster
                    .iter()
                    .find(|r| r.player_id == p.player_id)
                    .map(|r| r.cap_number)
                    .unwrap_or(u8::MAX);
                (cap, lineup_row(p, roster))
            })
            .collect();
        rows.sort_by_key(|(cap, _)| *cap);
        for (_, row) in rows {
            output.push_str(&format!("  {}\n", row));
        }
    }
    output
}

/// Print one period's lineup, or every period when `period` is `None`
pub async fn run(client: &dyn GameDataProvider, game_id: GameId, period: Option<u8>) -> Result<()> {
    let roster = client
        .roster(game_id)
        .await
        .with_context(|| format!("Failed to fetch roster for game {}", game_id))?;

    let periods: Vec<u8> = match period {
        Some(p) => vec![p],
        None => (1..=PERIODS).collect(),
    };
    let results = join_all(periods.iter().map(|p| client.starting_lineup(game_id, *p))).await;

    let mut lineups = Vec::with_capacity(periods.len());
    for (period, result) in periods.into_iter().zip(results) {
        match result {
            Ok(players) => lineups.push((period, players)),
            // an unsaved period reads as not found
            Err(e) if e.status_code() == Some(404) => lineups.push((period, Vec::new())),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to fetch lineup for period {}", period))
            }
        }
    }

    print!("{}", format_lineups(&lineups, &roster));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::MockClient;
    use crate::fixtures::{self, player_id_for_cap};

    fn entry(cap: u8) -> LineupPlayer {
        LineupPlayer {
            id: cap as i64,
            player_id: player_id_for_cap(cap),
            player: None,
        }
    }

    #[test]
    fn test_format_lineups_sorted_by_cap() {
        let roster = fixtures::create_mock_roster();
        let lineups = vec![(1, vec![entry(7), entry(1), entry(4)]), (2, Vec::new())];
        let output = format_lineups(&lineups, &roster);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[2], "Period 1");
        assert_eq!(lines[4], "  #1 Marta Bach");
        assert_eq!(lines[5], "  #4 Clara Novak");
        assert_eq!(lines[6], "  #7 Eva Marchetti");
        assert_eq!(lines[8], "Period 2");
        assert_eq!(lines[10], "(not set)");
    }

    #[test]
    fn test_unknown_player_falls_back_to_id() {
        let row = lineup_row(&entry(42), &fixtures::create_mock_roster());
        assert_eq!(row, "Player 142");
    }

    #[tokio::test]
    async fn test_run_treats_missing_period_as_unset() {
        let client = MockClient::new();
        run(&client, fixtures::MOCK_GAME_ID, None).await.unwrap();
        assert_eq!(client.call_count("starting_lineup"), PERIODS as usize);
    }

    #[tokio::test]
    async fn test_run_unknown_game_fails() {
        let client = MockClient::new();
        let err = run(&client, 77, Some(1)).await.unwrap_err();
        assert!(format!("{:#}", err).starts_with("Failed to fetch roster for game 77"));
    }
}
