use anyhow::{Context, Result};

use crate::api::{GameId, RosterPlayer, Substitution};
use crate::data_provider::GameDataProvider;
use crate::formatting::{format_header, substitution_line};

/// Format the substitution log grouped by period
pub fn format_substitutions(subs: &[Substitution], roster: &[RosterPlayer]) -> String {
    let mut output = String::new();
    output.push_str(&format_header("Substitutions", true));

    if subs.is_empty() {
        output.push_str("No substitutions recorded.\n");
        return output;
    }

    let mut ordered: Vec<&Substitution> = subs.iter().collect();
    ordered.sort_by_key(|s| (s.period, s.time));

    let mut current_period = None;
    for sub in ordered {
        if current_period != Some(sub.period) {
            if current_period.is_some() {
                output.push('\n');
            }
            output.push_str(&format_header(&format!("Period {}", sub.period), false));
            current_period = Some(sub.period);
        }
        output.push_str(&substitution_line(sub, roster));
        output.push('\n');
    }
    output
}

pub async fn run(client: &dyn GameDataProvider, game_id: GameId) -> Result<()> {
    let (roster, subs) = tokio::try_join!(client.roster(game_id), client.substitutions(game_id))
        .with_context(|| format!("Failed to fetch substitutions for game {}", game_id))?;

    print!("{}", format_substitutions(&subs, &roster));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, player_id_for_cap};

    fn sub(id: i64, period: u8, time: u32, cap_in: u8, cap_out: u8) -> Substitution {
        Substitution {
            id,
            period,
            time,
            player_in_id: player_id_for_cap(cap_in),
            player_out_id: player_id_for_cap(cap_out),
            player_in: None,
            player_out: None,
        }
    }

    #[test]
    fn test_format_substitutions_groups_by_period() {
        let roster = fixtures::create_mock_roster();
        let subs = vec![sub(3, 2, 30, 6, 8), sub(1, 1, 150, 8, 6), sub(2, 1, 90, 9, 2)];
        let output = format_substitutions(&subs, &roster);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Substitutions");
        assert_eq!(lines[2], "Period 1");
        assert!(lines[4].starts_with("P1   1:30  IN #9 Julia Szabo"));
        assert!(lines[5].starts_with("P1   2:30  IN #8 Nora Kaplan"));
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Period 2");
        assert!(lines[9].ends_with("OUT #8 Nora Kaplan"));
    }

    #[test]
    fn test_format_substitutions_empty() {
        assert!(format_substitutions(&[], &[]).ends_with("No substitutions recorded.\n"));
    }
}
