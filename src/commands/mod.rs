pub mod events;
pub mod lineup;
pub mod roster;
pub mod subs;
pub mod summary;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Parse a game date as stored by the API (YYYY-MM-DD, optionally followed by a time)
pub fn parse_game_date(date: &str) -> Result<NaiveDate> {
    let day = date.get(..10).unwrap_or(date);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .with_context(|| format!("Invalid game date '{}'. Expected YYYY-MM-DD", date))
}

/// Game date for display, e.g. `Sat, Mar 8 2025`, falling back to the raw value
pub fn display_game_date(date: &str) -> String {
    parse_game_date(date)
        .map(|d| d.format("%a, %b %-d %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}
