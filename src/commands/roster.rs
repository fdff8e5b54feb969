use anyhow::{bail, Context, Result};

use crate::api::{GameId, PlayerId, RosterEntry, RosterPlayer};
use crate::config::Config;
use crate::data_provider::GameDataProvider;
use crate::formatting::{format_header, pad_right};
use crate::tracker::error::validate_cap_number;

const CAP_COL_WIDTH: usize = 4;
const NAME_COL_WIDTH: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterCommand {
    List,
    Add { player_id: PlayerId, cap_number: u8 },
    Remove { cap_number: u8 },
}

/// Format the roster sorted by cap, marking goalkeeper caps
pub fn format_roster(roster: &[RosterPlayer], config: &Config) -> String {
    let mut output = String::new();
    output.push_str(&format_header("Roster", true));

    if roster.is_empty() {
        output.push_str("No players on the roster.\n");
        return output;
    }

    output.push_str(&format!(
        "{}{}{}\n",
        pad_right("Cap", CAP_COL_WIDTH),
        pad_right("Name", NAME_COL_WIDTH),
        "Player ID"
    ));
    output.push_str(&format!("{}\n", "─".repeat(CAP_COL_WIDTH + NAME_COL_WIDTH + 9)));

    let mut sorted: Vec<&RosterPlayer> = roster.iter().collect();
    sorted.sort_by_key(|r| r.cap_number);
    for entry in sorted {
        let name = if config.is_goalkeeper_cap(entry.cap_number) {
            format!("{} (GK)", entry.player.name)
        } else {
            entry.player.name.clone()
        };
        output.push_str(&format!(
            "{}{}{}\n",
            pad_right(&entry.cap_number.to_string(), CAP_COL_WIDTH),
            pad_right(&name, NAME_COL_WIDTH),
            entry.player_id
        ));
    }
    output
}

/// Roster entry for a new player, rejecting invalid or taken caps before any call
pub fn new_entry(roster: &[RosterPlayer], player_id: PlayerId, cap_number: u8) -> Result<RosterEntry> {
    let cap_number = validate_cap_number(cap_number)?;
    if let Some(taken) = roster.iter().find(|r| r.cap_number == cap_number) {
        bail!("Cap {} is already worn by {}", cap_number, taken.player.name);
    }
    Ok(RosterEntry { player_id, cap_number })
}

pub async fn run(
    client: &dyn GameDataProvider,
    game_id: GameId,
    command: RosterCommand,
    config: &Config,
) -> Result<()> {
    let roster = client
        .roster(game_id)
        .await
        .with_context(|| format!("Failed to fetch roster for game {}", game_id))?;

    match command {
        RosterCommand::List => {
            print!("{}", format_roster(&roster, config));
        }
        RosterCommand::Add { player_id, cap_number } => {
            let entry = new_entry(&roster, player_id, cap_number)?;
            client
                .add_to_roster(game_id, entry)
                .await
                .with_context(|| format!("Failed to add player {} to the roster", player_id))?;
            println!("Added player {} as #{}", player_id, cap_number);
        }
        RosterCommand::Remove { cap_number } => {
            let Some(entry) = roster.iter().find(|r| r.cap_number == cap_number) else {
                bail!("No player wears cap {}", cap_number);
            };
            client
                .remove_from_roster(game_id, entry.id)
                .await
                .with_context(|| format!("Failed to remove #{} from the roster", cap_number))?;
            println!("Removed #{} {}", cap_number, entry.player.name);
        }
    }
    Ok(())
}
