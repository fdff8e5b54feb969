//! Tracker screen
//!
//! ```text
//! vs Riverside Otters  2 - 1  LIVE │ Period 1 │ 8:00 │ Normal
//! ┌Players───────────┐ [g] Goal [s] Shot [t] Steal ...
//! │● #1 Marta Bach   │ Period  P1 P2 P3 P4
//! │● #2 Lena Okafor  │ Clock   8:00  [-m] [+m] [-s] [+s]  8:00 6:00 ...
//! │  #8 Nora Kaplan  │ Context Normal 6v6 Man Up ...
//! │                  │ ┌ Stats │ Subs ───────────────────────────
//! │                  │ │[x] P1  6:30  GOAL  #10 Ana Costa ...
//! └──────────────────┘ └─────────────────────────────────────────
//! ─────────────────────────────────────────────────────────────────
//!  Pick a player, then an event                │ GOAL - #10 Ana Costa
//! ```
//!
//! Every clickable region is recorded in the `HitMap` while drawing. With the
//! shot wizard open only the overlay is clickable.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::api::{situation_label, EventType, RosterPlayer, ShotOutcome, Situation};
use crate::config::ThemeConfig;
use crate::formatting::{event_line, player_label, substitution_line};
use crate::tracker::clock::CLOCK_PRESETS;
use crate::tracker::lineup::LINEUP_SIZE;
use crate::tracker::state::PERIODS;
use crate::tracker::{Action, GameClock, Tab, TrackerState, WizardEvent, WizardStep};

use super::hits::{HitMap, HitTarget};
use super::keys::{event_hotkey, outcome_hotkey};
use super::widgets::{GoalDiagram, PoolDiagram, RenderableWidget, StatusBar};

const PLAYER_PANEL_WIDTH: u16 = 28;
const CONTROL_ROWS: u16 = 4;
const WIZARD_WIDTH: u16 = 60;
const WIZARD_HEIGHT: u16 = 20;

/// Clickable label drawn inline
struct Button {
    label: String,
    style: Style,
    action: Option<Action>,
}

impl Button {
    fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            style: Style::default(),
            action: Some(action),
        }
    }

    fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: Style::default().fg(Color::DarkGray),
            action: None,
        }
    }

    fn selected_if(mut self, selected: bool, theme: &ThemeConfig) -> Self {
        if selected {
            self.style = selected_style(theme);
        }
        self
    }
}

fn selected_style(theme: &ThemeConfig) -> Style {
    Style::default().fg(theme.selection_fg).add_modifier(Modifier::BOLD)
}

/// Draw buttons left to right on one row, one space apart, clipped to `area`
fn draw_buttons(area: Rect, buf: &mut Buffer, buttons: Vec<Button>, hits: &mut HitMap) {
    let right = area.x + area.width;
    let mut x = area.x;
    for button in buttons {
        if x >= right {
            break;
        }
        let width = (button.label.width() as u16).min(right - x);
        buf.set_stringn(x, area.y, &button.label, width as usize, button.style);
        if let Some(action) = button.action {
            hits.push_action(Rect::new(x, area.y, width, 1), action);
        }
        x = x.saturating_add(width + 1);
    }
}

/// Render the whole tracker into `buf`, rebuilding `hits` from scratch
pub fn render(area: Rect, buf: &mut Buffer, state: &TrackerState, hits: &mut HitMap) {
    hits.clear();
    let theme = &state.system.config.theme;

    let [header, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(area);
    let [players, main] =
        Layout::horizontal([Constraint::Length(PLAYER_PANEL_WIDTH), Constraint::Min(0)]).areas(body);
    let [controls, log] =
        Layout::vertical([Constraint::Length(CONTROL_ROWS), Constraint::Min(0)]).areas(main);

    render_header(header, buf, state);
    match state.selection.active_tab {
        Tab::Stats => render_roster(players, buf, state, hits),
        Tab::Subs => render_water(players, buf, state, hits),
    }
    render_controls(controls, buf, state, hits);
    render_log(log, buf, state, hits);

    StatusBar::new(
        state.system.status_message.as_deref(),
        state.system.status_is_error,
        state.recording.confirmation.as_deref(),
    )
    .render(status, buf, theme);

    if state.shot.is_open() {
        // the overlay is modal
        hits.clear();
        render_wizard(area, buf, state, hits);
    }
}

fn render_header(area: Rect, buf: &mut Buffer, state: &TrackerState) {
    let mut parts = Vec::new();
    if let Some(game) = &state.data.game {
        parts.push(format!(
            "vs {}  {} - {}  {}",
            game.opponent, game.team_score, game.opponent_score, game.status
        ));
    } else {
        parts.push(format!("Game {}", state.data.game_id));
    }
    parts.push(format!("Period {}", state.selection.period));
    parts.push(state.selection.clock.to_string());
    parts.push(situation_label(state.selection.situation).to_string());
    if let Some(editing) = &state.recording.editing {
        parts.push(format!("EDITING {} #{}", editing.kind, editing.id));
    }
    buf.set_stringn(area.x, area.y, parts.join(" │ "), area.width as usize, Style::default());
}

fn player_style(state: &TrackerState, player: &RosterPlayer, selected: bool) -> Style {
    let theme = &state.system.config.theme;
    if selected {
        selected_style(theme)
    } else if state.is_goalkeeper(player) {
        Style::default().fg(theme.goalkeeper_fg)
    } else {
        Style::default()
    }
}

fn player_row(player: &RosterPlayer) -> String {
    player_label(&player.player.name, Some(player.cap_number))
}

/// Draw a titled block and return its inner area
fn panel(area: Rect, buf: &mut Buffer, title: &str) -> Rect {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Stats tab: the full roster, pick a player to record for
fn render_roster(area: Rect, buf: &mut Buffer, state: &TrackerState, hits: &mut HitMap) {
    let inner = panel(area, buf, "Players");
    for (i, player) in state.roster_by_cap().into_iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let marker = if state.lineup.is_in_water(player.player_id) { "● " } else { "  " };
        let selected = state.selection.selected_player == Some(player.player_id);
        let row = Rect::new(inner.x, y, inner.width, 1);
        buf.set_stringn(
            row.x,
            row.y,
            format!("{}{}", marker, player_row(player)),
            row.width as usize,
            player_style(state, player, selected),
        );
        hits.push_action(row, Action::SelectPlayer(player.player_id));
    }
}

/// Subs tab: in-water set and bench with the pending pair marked
fn render_water(area: Rect, buf: &mut Buffer, state: &TrackerState, hits: &mut HitMap) {
    let inner = panel(area, buf, "Lineup");
    let bottom = inner.y + inner.height;
    let mut y = inner.y;

    let mut line = |buf: &mut Buffer, y: &mut u16, text: String, style: Style, action: Option<Action>| {
        if *y >= bottom {
            return;
        }
        let row = Rect::new(inner.x, *y, inner.width, 1);
        buf.set_stringn(row.x, row.y, text, row.width as usize, style);
        if let Some(action) = action {
            hits.push_action(row, action);
        }
        *y += 1;
    };

    let in_water = state.in_water();
    let header = Style::default().add_modifier(Modifier::UNDERLINED);
    line(buf, &mut y, format!("In water {}/{}", in_water.len(), LINEUP_SIZE), header, None);
    for player in in_water {
        let pending = state.lineup.pending_out() == Some(player.player_id);
        let text = format!("{}{}", if pending { "» " } else { "  " }, player_row(player));
        let style = player_style(state, player, pending);
        line(buf, &mut y, text, style, Some(Action::SelectInWaterPlayer(player.player_id)));
    }

    line(buf, &mut y, String::new(), Style::default(), None);
    line(buf, &mut y, "Bench".to_string(), header, None);
    for player in state.bench() {
        let pending = state.lineup.pending_in() == Some(player.player_id);
        let text = format!("{}{}", if pending { "« " } else { "  " }, player_row(player));
        let style = player_style(state, player, pending);
        line(buf, &mut y, text, style, Some(Action::ToggleBenchPlayer(player.player_id)));
    }

    if let Some(warning) = state.goalkeeper_warning() {
        line(buf, &mut y, String::new(), Style::default(), None);
        line(buf, &mut y, warning.to_string(), Style::default().fg(Color::Yellow), None);
    }
}

fn render_controls(area: Rect, buf: &mut Buffer, state: &TrackerState, hits: &mut HitMap) {
    let theme = &state.system.config.theme;
    let rows: Vec<Rect> = (0..area.height.min(CONTROL_ROWS))
        .map(|i| Rect::new(area.x + 1, area.y + i, area.width.saturating_sub(1), 1))
        .collect();
    if rows.len() < CONTROL_ROWS as usize {
        return;
    }

    let mut events: Vec<Button> = state
        .available_event_types()
        .into_iter()
        .map(|t| Button::new(event_button_label(t), Action::TriggerEvent(t)))
        .collect();
    if state.recording.in_flight {
        events.push(Button::text("saving..."));
    }
    draw_buttons(rows[0], buf, events, hits);

    let mut periods = vec![Button::text("Period ")];
    periods.extend((1..=PERIODS).map(|p| {
        Button::new(format!("P{}", p), Action::SelectPeriod(p)).selected_if(state.selection.period == p, theme)
    }));
    draw_buttons(rows[1], buf, periods, hits);

    let clock = state.selection.clock;
    let mut clock_row = vec![
        Button::text("Clock  "),
        Button::new(clock.to_string(), Action::ClockPreset(clock.minutes())).selected_if(true, theme),
        Button::new("[-m]", Action::SetClockMinutes(clock.minutes() as i64 - 1)),
        Button::new("[+m]", Action::SetClockMinutes(clock.minutes() as i64 + 1)),
        Button::new("[-s]", Action::SetClockSeconds(clock.seconds() as i64 - 1)),
        Button::new("[+s]", Action::SetClockSeconds(clock.seconds() as i64 + 1)),
        Button::text(" "),
    ];
    clock_row.extend(
        CLOCK_PRESETS
            .iter()
            .map(|m| Button::new(GameClock::preset(*m).to_string(), Action::ClockPreset(*m))),
    );
    draw_buttons(rows[2], buf, clock_row, hits);

    let mut situations = vec![
        Button::text("Context"),
        Button::new("Normal", Action::SetSituation(None)).selected_if(state.selection.situation.is_none(), theme),
    ];
    situations.extend(Situation::ALL.iter().map(|s| {
        Button::new(s.label(), Action::SetSituation(Some(*s)))
            .selected_if(state.selection.situation == Some(*s), theme)
    }));
    draw_buttons(rows[3], buf, situations, hits);
}

fn event_button_label(event_type: EventType) -> String {
    match event_hotkey(event_type) {
        Some(key) => format!("[{}] {}", key, event_type.label()),
        None => event_type.label().to_string(),
    }
}

fn render_log(area: Rect, buf: &mut Buffer, state: &TrackerState, hits: &mut HitMap) {
    let theme = &state.system.config.theme;
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    block.render(area, buf);
    if area.height < 3 {
        return;
    }

    let tabs = [Tab::Stats, Tab::Subs]
        .into_iter()
        .map(|t| {
            Button::new(format!(" {} ", t.label()), Action::SwitchTab(t))
                .selected_if(state.selection.active_tab == t, theme)
        })
        .collect();
    draw_buttons(Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), 1), buf, tabs, hits);

    match state.selection.active_tab {
        Tab::Stats => render_events(inner, buf, state, hits),
        Tab::Subs => render_substitutions(inner, buf, state, hits),
    }
}

/// Most recent events at the bottom; click a line to edit, `[x]` to delete
fn render_events(area: Rect, buf: &mut Buffer, state: &TrackerState, hits: &mut HitMap) {
    let theme = &state.system.config.theme;
    if state.data.stats.is_empty() {
        buf.set_stringn(area.x, area.y, "No events yet", area.width as usize, Style::default().fg(Color::DarkGray));
        return;
    }
    let editing = state.recording.editing.as_ref().map(|e| e.id);
    let visible = area.height as usize;
    let skip = state.data.stats.len().saturating_sub(visible);

    for (i, event) in state.data.stats.iter().skip(skip).enumerate() {
        let y = area.y + i as u16;
        let style = if editing == Some(event.id) {
            selected_style(theme)
        } else {
            Style::default()
        };
        draw_buttons(
            Rect::new(area.x, y, area.width, 1),
            buf,
            vec![
                Button::new("[x]", Action::DeleteEvent(event.id)),
                Button {
                    label: event_line(event, &state.data.roster),
                    style,
                    action: Some(Action::EditEvent(event.id)),
                },
            ],
            hits,
        );
    }
}

fn render_substitutions(area: Rect, buf: &mut Buffer, state: &TrackerState, hits: &mut HitMap) {
    let theme = &state.system.config.theme;
    if area.height < 2 {
        return;
    }
    let log_height = area.height - 1;
    let subs: Vec<_> = state
        .data
        .substitutions
        .iter()
        .filter(|s| s.period == state.selection.period)
        .collect();
    let skip = subs.len().saturating_sub(log_height as usize);
    for (i, sub) in subs.iter().skip(skip).enumerate() {
        buf.set_stringn(
            area.x,
            area.y + i as u16,
            substitution_line(sub, &state.data.roster),
            area.width as usize,
            Style::default(),
        );
    }

    let name = |id| {
        state
            .roster_player(id)
            .map(|p| format!("#{}", p.cap_number))
            .unwrap_or_else(|| "-".to_string())
    };
    let pair = format!(
        "[S] Substitute OUT {} IN {}",
        state.lineup.pending_out().map(name).unwrap_or_else(|| "-".to_string()),
        state.lineup.pending_in().map(name).unwrap_or_else(|| "-".to_string()),
    );
    let ready = state.lineup.pending_out().is_some() && state.lineup.pending_in().is_some();
    let mut buttons = vec![
        Button::new(pair, Action::ConfirmSubstitution).selected_if(ready, theme),
        Button::new(
            format!("[L] Save lineup ({}/{})", state.lineup.in_water().len(), LINEUP_SIZE),
            Action::SaveLineup,
        ),
    ];
    if state.lineup.is_in_flight() {
        buttons.push(Button::text("saving..."));
    }
    draw_buttons(Rect::new(area.x, area.y + log_height, area.width, 1), buf, buttons, hits);
}

/// Centered rectangle clamped to `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_wizard(area: Rect, buf: &mut Buffer, state: &TrackerState, hits: &mut HitMap) {
    let theme = &state.system.config.theme;
    let wizard = &state.shot.wizard;
    let popup = centered(area, WIZARD_WIDTH, WIZARD_HEIGHT);
    Clear.render(popup, buf);

    let shooter = state
        .shot
        .pending
        .and_then(|p| state.roster_player(p.player_id))
        .map(player_row)
        .unwrap_or_default();
    let title = format!(" {} - {} ", wizard.step().title(), shooter);
    let inner = panel(popup, buf, &title);
    if inner.height < 3 {
        return;
    }

    let [content, readout, footer] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    match wizard.step() {
        WizardStep::Pool => {
            let diagram = PoolDiagram::new(wizard.pool());
            diagram.render(content, buf, theme);
            hits.push(PoolDiagram::surface(content), HitTarget::Pool);
        }
        WizardStep::Goal => {
            let diagram = GoalDiagram::new(wizard.goal());
            let width = diagram.preferred_width().unwrap_or(content.width);
            let height = diagram.preferred_height().unwrap_or(content.height);
            let goal_area = centered(content, width, height);
            diagram.render(goal_area, buf, theme);
            hits.push(GoalDiagram::surface(goal_area), HitTarget::Goal);
        }
        WizardStep::Outcome => {
            let buttons = ShotOutcome::ALL
                .iter()
                .map(|o| {
                    let label = match outcome_hotkey(*o) {
                        Some(key) => format!("[{}] {}", key, o.label()),
                        None => o.label().to_string(),
                    };
                    Button::new(label, Action::Wizard(WizardEvent::ChooseOutcome(*o)))
                })
                .collect();
            draw_buttons(Rect::new(content.x, content.y, content.width, 1), buf, buttons, hits);
        }
        WizardStep::Assist => render_assists(content, buf, state, hits),
    }

    let picked = match (wizard.pool(), wizard.goal()) {
        (Some((px, py)), Some((gx, gy))) => format!("Pool {:.1}, {:.1} m   Goal {:.2}, {:.2}", px, py, gx, gy),
        (Some((px, py)), None) => format!("Pool {:.1}, {:.1} m", px, py),
        _ => "Click the diagram or use the arrow keys".to_string(),
    };
    buf.set_stringn(readout.x, readout.y, picked, readout.width as usize, Style::default().fg(Color::DarkGray));

    let mut buttons = vec![Button::new("[Esc] Cancel", Action::Wizard(WizardEvent::Cancel))];
    if wizard.step() != WizardStep::Pool {
        buttons.push(Button::new("[Bksp] Back", Action::Wizard(WizardEvent::Back)));
    }
    match wizard.step() {
        WizardStep::Pool if wizard.pool().is_some() => {
            buttons.push(Button::new("[Enter] Next", Action::Wizard(WizardEvent::Next)).selected_if(true, theme))
        }
        WizardStep::Goal if wizard.goal().is_some() => {
            buttons.push(Button::new("[Enter] Next", Action::Wizard(WizardEvent::Next)).selected_if(true, theme))
        }
        _ => {}
    }
    draw_buttons(footer, buf, buttons, hits);
}

fn render_assists(area: Rect, buf: &mut Buffer, state: &TrackerState, hits: &mut HitMap) {
    let bottom = area.y + area.height;
    let no_assist = Rect::new(area.x, area.y, area.width, 1);
    draw_buttons(
        no_assist,
        buf,
        vec![Button::new("[n] No assist", Action::Wizard(WizardEvent::ChooseAssist(None)))],
        hits,
    );

    for (i, player) in state.assist_candidates().into_iter().enumerate() {
        let y = area.y + 1 + i as u16;
        if y >= bottom {
            break;
        }
        let key = match i {
            0..=8 => format!("[{}]", i + 1),
            9 => "[0]".to_string(),
            _ => "   ".to_string(),
        };
        let row = Rect::new(area.x, y, area.width, 1);
        buf.set_stringn(
            row.x,
            row.y,
            format!("{} {}", key, player_row(player)),
            row.width as usize,
            player_style(state, player, false),
        );
        hits.push_action(row, Action::Wizard(WizardEvent::ChooseAssist(Some(player.player_id))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::player_id_for_cap;
    use crate::tracker::reduce;
    use crate::tracker::testing::create_state;
    use crate::tui::testing::{buffer_contains, buffer_lines};

    const WIDTH: u16 = 100;
    const HEIGHT: u16 = 24;

    fn draw(state: &TrackerState) -> (Buffer, HitMap) {
        let area = Rect::new(0, 0, WIDTH, HEIGHT);
        let mut buf = Buffer::empty(area);
        let mut hits = HitMap::new();
        render(area, &mut buf, state, &mut hits);
        (buf, hits)
    }

    /// Column of the first occurrence of `needle` on `row`
    fn find(buf: &Buffer, row: u16, needle: &str) -> Option<u16> {
        let line = &buffer_lines(buf)[row as usize];
        line.find(needle).map(|byte| line[..byte].chars().count() as u16)
    }

    #[test]
    fn test_header_shows_game_and_pickers() {
        let (buf, _) = draw(&create_state());
        let header = &buffer_lines(&buf)[0];
        assert!(header.starts_with("vs Riverside Otters  2 - 1  LIVE │ Period 1 │ 8:00 │ Normal"));
    }

    #[test]
    fn test_roster_rows_select_players() {
        let state = create_state();
        let (buf, hits) = draw(&state);
        assert_eq!(find(&buf, 2, "● #1 Marta Bach"), Some(1));
        assert_eq!(find(&buf, 9, "#8 Nora Kaplan"), Some(3));
        assert!(matches!(
            hits.action_at(5, 9),
            Some(Action::SelectPlayer(id)) if id == player_id_for_cap(8)
        ));
    }

    #[test]
    fn test_event_buttons_follow_selection() {
        let state = create_state();
        let (buf, _) = draw(&state);
        assert!(buffer_contains(&buf, "[b] Block"));
        assert!(!buffer_contains(&buf, "[v] Save"));

        let (state, _) = reduce(state, Action::SelectPlayer(player_id_for_cap(1)));
        let (buf, hits) = draw(&state);
        assert!(!buffer_contains(&buf, "[b] Block"));
        let col = find(&buf, 1, "[v] Save").unwrap();
        assert!(matches!(hits.action_at(col, 1), Some(Action::TriggerEvent(EventType::Save))));
    }

    #[test]
    fn test_event_log_lines_edit_and_delete() {
        let state = create_state();
        let (buf, hits) = draw(&state);
        let row = (0..HEIGHT).find(|r| find(&buf, *r, "EXCLUSION").is_some()).unwrap();
        let delete = find(&buf, row, "[x]").unwrap();
        assert!(matches!(hits.action_at(delete, row), Some(Action::DeleteEvent(3))));
        assert!(matches!(hits.action_at(delete + 10, row), Some(Action::EditEvent(3))));
    }

    #[test]
    fn test_status_bar_shows_default_message() {
        let (buf, _) = draw(&create_state());
        let lines = buffer_lines(&buf);
        assert!(lines[HEIGHT as usize - 1].starts_with(" Pick a player, then an event"));
    }

    #[test]
    fn test_subs_tab_lists_water_and_bench() {
        let (state, _) = reduce(create_state(), Action::SwitchTab(Tab::Subs));
        let (buf, hits) = draw(&state);
        assert!(buffer_contains(&buf, "In water 7/7"));
        assert!(buffer_contains(&buf, "Bench"));
        assert!(buffer_contains(&buf, "[S] Substitute OUT - IN -"));
        assert!(buffer_contains(&buf, "[L] Save lineup (7/7)"));

        let row = (0..HEIGHT).find(|r| find(&buf, *r, "#11 Rita Varga").is_some()).unwrap();
        assert!(matches!(
            hits.action_at(3, row),
            Some(Action::ToggleBenchPlayer(id)) if id == player_id_for_cap(11)
        ));
    }

    #[test]
    fn test_wizard_overlay_is_modal() {
        let state = create_state();
        let (state, _) = reduce(state, Action::SelectPlayer(player_id_for_cap(9)));
        let (state, _) = reduce(state, Action::TriggerEvent(EventType::Goal));
        let (buf, hits) = draw(&state);

        assert!(buffer_contains(&buf, "Shot location - #9 Julia Szabo"));
        assert!(buffer_contains(&buf, "[Esc] Cancel"));
        // roster rows are covered or disabled
        assert!(!matches!(hits.action_at(5, 2), Some(Action::SelectPlayer(_))));

        let popup = centered(Rect::new(0, 0, WIDTH, HEIGHT), WIZARD_WIDTH, WIZARD_HEIGHT);
        let center = (popup.x + popup.width / 2, popup.y + popup.height / 2);
        assert!(matches!(
            hits.action_at(center.0, center.1),
            Some(Action::Wizard(WizardEvent::PickPool { .. }))
        ));
    }

    #[test]
    fn test_wizard_assist_step_lists_teammates() {
        let mut state = create_state();
        for action in [
            Action::SelectPlayer(player_id_for_cap(9)),
            Action::TriggerEvent(EventType::Goal),
            Action::Wizard(WizardEvent::PickPool { x: 4.0, y: 8.0 }),
            Action::Wizard(WizardEvent::Next),
            Action::Wizard(WizardEvent::PickGoal { x: 1.0, y: 0.2 }),
            Action::Wizard(WizardEvent::Next),
            Action::Wizard(WizardEvent::ChooseOutcome(ShotOutcome::Goal)),
        ] {
            state = reduce(state, action).0;
        }
        let (buf, _) = draw(&state);
        assert!(buffer_contains(&buf, "[n] No assist"));
        assert!(buffer_contains(&buf, "[1] #1 Marta Bach"));
        assert!(buffer_contains(&buf, "Assist - #9 Julia Szabo"));
        assert!(!buffer_contains(&buf, "] #9 Julia Szabo"));
        assert!(buffer_contains(&buf, "Pool 4.0, 8.0 m   Goal 1.00, 0.20"));
    }
}
