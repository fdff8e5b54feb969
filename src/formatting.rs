use unicode_width::UnicodeWidthStr;

use crate::api::{situation_label, RosterPlayer, StatEvent, Substitution};
use crate::tracker::clock::GameClock;

/// Format a header with text and underline
///
/// Uses `═` for a double line and `─` otherwise, sized to the text's display width.
pub fn format_header(text: &str, double_line: bool) -> String {
    let separator = if double_line { "═" } else { "─" };
    format!("{}\n{}\n", text, separator.repeat(text.width()))
}

/// Pad to a display width, for names with wide characters
pub fn pad_right(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - used))
    }
}

/// Stored fractional-minute clock as `m:ss`
pub fn format_clock(clock: Option<f64>) -> String {
    clock
        .map(|c| GameClock::from_minutes(c).to_string())
        .unwrap_or_else(|| "-:--".to_string())
}

pub fn format_period(period: Option<u8>) -> String {
    period.map(|p| format!("P{}", p)).unwrap_or_else(|| "P-".to_string())
}

/// Elapsed seconds as `m:ss`
pub fn format_elapsed(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// `#cap Name`, falling back to the name alone when the cap is unknown
pub fn player_label(name: &str, cap: Option<u8>) -> String {
    match cap {
        Some(cap) => format!("#{} {}", cap, name),
        None => name.to_string(),
    }
}

fn cap_for(roster: &[RosterPlayer], player_id: i64) -> Option<u8> {
    roster.iter().find(|r| r.player_id == player_id).map(|r| r.cap_number)
}

/// One line of the event log
///
/// `P1  6:30  GOAL       #10 Ana Costa  Man Up`, with the outcome and
/// coordinates appended for shots.
pub fn event_line(event: &StatEvent, roster: &[RosterPlayer]) -> String {
    let cap = cap_for(roster, event.player_id).or(event.player.cap_number);
    let mut line = format!(
        "{}  {:>5}  {:<9}  {}",
        format_period(event.period),
        format_clock(event.clock),
        event.kind.as_str(),
        pad_right(&player_label(&event.player.name, cap), 22),
    );
    line.push_str(situation_label(event.context));
    if let Some(outcome) = event.shot_outcome {
        line.push_str(&format!("  [{}]", outcome));
    }
    if let (Some(x), Some(y)) = (event.x, event.y) {
        line.push_str(&format!("  pool {:.1},{:.1}", x, y));
    }
    if let (Some(gx), Some(gy)) = (event.goal_x, event.goal_y) {
        line.push_str(&format!("  goal {:.2},{:.2}", gx, gy));
    }
    line
}

/// One line of the substitution log: `P1  2:30  IN #8 Nora Kaplan  OUT #6 Maya Horvat`
pub fn substitution_line(sub: &Substitution, roster: &[RosterPlayer]) -> String {
    let name = |id: i64, nested: Option<&str>| -> String {
        let cap = cap_for(roster, id);
        let name = nested
            .map(str::to_string)
            .or_else(|| {
                roster
                    .iter()
                    .find(|r| r.player_id == id)
                    .map(|r| r.player.name.clone())
            })
            .unwrap_or_else(|| format!("Player {}", id));
        player_label(&name, cap)
    };
    format!(
        "P{}  {:>5}  IN {}  OUT {}",
        sub.period,
        format_elapsed(sub.time),
        pad_right(&name(sub.player_in_id, sub.player_in.as_ref().map(|p| p.name.as_str())), 22),
        name(sub.player_out_id, sub.player_out.as_ref().map(|p| p.name.as_str())),
    )
}
