use anyhow::{Context, Result};

use crate::api::{GameId, RosterPlayer, StatEvent};
use crate::data_provider::GameDataProvider;
use crate::formatting::{event_line, format_header};

/// Format the event log, optionally limited to one period
pub fn format_events(events: &[StatEvent], roster: &[RosterPlayer], period: Option<u8>) -> String {
    let mut output = String::new();
    let title = match period {
        Some(p) => format!("Events - Period {}", p),
        None => "Events".to_string(),
    };
    output.push_str(&format_header(&title, true));

    let shown: Vec<&StatEvent> = events
        .iter()
        .filter(|e| period.is_none() || e.period == period)
        .collect();

    if shown.is_empty() {
        output.push_str("No events recorded.\n");
        return output;
    }

    for event in shown {
        output.push_str(&event_line(event, roster));
        output.push('\n');
    }
    output
}

pub async fn run(client: &dyn GameDataProvider, game_id: GameId, period: Option<u8>) -> Result<()> {
    let (roster, events) = tokio::try_join!(client.roster(game_id), client.stats(game_id))
        .with_context(|| format!("Failed to fetch events for game {}", game_id))?;

    print!("{}", format_events(&events, &roster, period));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::MockClient;
    use crate::fixtures;

    #[test]
    fn test_format_events_lists_every_event() {
        let output = format_events(&fixtures::create_mock_stats(), &fixtures::create_mock_roster(), None);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Events");
        assert_eq!(lines[1], "══════");
        assert!(lines[2].contains("GOAL"));
        assert!(lines[3].contains("SAVE"));
        assert!(lines[4].contains("EXCLUSION"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_format_events_period_filter() {
        let output = format_events(&fixtures::create_mock_stats(), &fixtures::create_mock_roster(), Some(2));
        assert!(output.starts_with("Events - Period 2\n"));
        assert!(output.contains("No events recorded."));
    }

    #[test]
    fn test_format_events_empty() {
        let output = format_events(&[], &[], None);
        assert_eq!(output, "Events\n══════\nNo events recorded.\n");
    }

    #[tokio::test]
    async fn test_run_reads_roster_and_stats() {
        let client = MockClient::new();
        run(&client, fixtures::MOCK_GAME_ID, None).await.unwrap();
        assert_eq!(client.call_count("roster"), 1);
        assert_eq!(client.call_count("stats"), 1);
    }

    #[tokio::test]
    async fn test_run_unknown_game_fails_with_context() {
        let client = MockClient::new();
        let err = run(&client, 99, None).await.unwrap_err();
        assert!(format!("{:#}", err).starts_with("Failed to fetch events for game 99"));
    }
}
