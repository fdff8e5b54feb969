//! End-to-end tracker flows against the in-memory store.

use crate::api::{EventType, ShotOutcome, Situation};
use crate::fixtures::player_id_for_cap;
use crate::tracker::action::Action;
use crate::tracker::lineup::LINEUP_SIZE;
use crate::tracker::state::Tab;
use crate::tracker::testing::{create_runtime, SETTLE};
use crate::tracker::wizard::WizardEvent;

#[tokio::test]
async fn test_double_trigger_issues_one_create() {
    let (mut runtime, client) = create_runtime();
    runtime.dispatch(Action::SelectPlayer(player_id_for_cap(4)));
    runtime.dispatch(Action::TriggerEvent(EventType::Exclusion));
    runtime.dispatch(Action::TriggerEvent(EventType::Exclusion));

    runtime.settle(SETTLE).await;

    assert_eq!(client.call_count("create_stat"), 1);
    let state = runtime.state();
    assert_eq!(state.recording.confirmation.as_deref(), Some("EXCLUSION - #4 Clara Novak"));
    assert_eq!(state.selection.selected_player, None);
    assert_eq!(state.data.stats.len(), 4);
}

#[tokio::test]
async fn test_shot_wizard_goal_with_assist_is_stored() {
    let (mut runtime, client) = create_runtime();
    runtime.dispatch(Action::ClockPreset(6));
    runtime.dispatch(Action::SetSituation(Some(Situation::ManUp)));
    runtime.dispatch(Action::SelectPlayer(player_id_for_cap(9)));
    runtime.dispatch(Action::TriggerEvent(EventType::Goal));
    assert!(runtime.state().shot.is_open());

    for event in [
        WizardEvent::PickPool { x: 4.5, y: 12.0 },
        WizardEvent::Next,
        WizardEvent::PickGoal { x: 2.1, y: 0.3 },
        WizardEvent::Next,
        WizardEvent::ChooseOutcome(ShotOutcome::Goal),
        WizardEvent::ChooseAssist(Some(player_id_for_cap(3))),
    ] {
        runtime.dispatch(Action::Wizard(event));
    }
    runtime.settle(SETTLE).await;

    assert_eq!(client.call_count("create_shot"), 1);
    let state = runtime.state();
    assert_eq!(state.recording.confirmation.as_deref(), Some("GOAL - #9 Julia Szabo"));
    assert!(!state.shot.is_open());

    let goal = state
        .data
        .stats
        .iter()
        .find(|e| e.kind == EventType::Goal && e.player_id == player_id_for_cap(9))
        .unwrap();
    assert_eq!(goal.clock, Some(6.0));
    assert_eq!(goal.context, Some(Situation::ManUp));
    assert_eq!(goal.goal_x, Some(2.1));
    assert!(goal.assist_event_id.is_some());
    assert_eq!(state.last_event().map(|e| e.kind), Some(EventType::Assist));
}

#[tokio::test]
async fn test_failed_record_keeps_selection_for_retry() {
    let (mut runtime, client) = create_runtime();
    client.set_failing(true);
    runtime.dispatch(Action::SelectPlayer(player_id_for_cap(5)));
    runtime.dispatch(Action::TriggerEvent(EventType::Steal));
    runtime.settle(SETTLE).await;

    assert_eq!(runtime.state().selection.selected_player, Some(player_id_for_cap(5)));
    assert!(runtime.state().recording.confirmation.is_none());
    assert!(runtime.state().system.status_is_error);

    client.set_failing(false);
    runtime.dispatch(Action::TriggerEvent(EventType::Steal));
    runtime.settle(SETTLE).await;

    assert_eq!(client.call_count("create_stat"), 2);
    assert_eq!(runtime.state().recording.confirmation.as_deref(), Some("STEAL - #5 Sofia Lindqvist"));
}

#[tokio::test]
async fn test_edit_then_update_changes_stored_type() {
    let (mut runtime, client) = create_runtime();
    runtime.dispatch(Action::EditEvent(3));
    runtime.dispatch(Action::TriggerEvent(EventType::Turnover));
    runtime.settle(SETTLE).await;

    assert_eq!(client.call_count("update_stat"), 1);
    let state = runtime.state();
    assert!(!state.is_editing());
    assert_eq!(state.selection.selected_player, None);
    let edited = state.data.stats.iter().find(|e| e.id == 3).unwrap();
    assert_eq!(edited.kind, EventType::Turnover);
    assert_eq!(edited.clock, Some(3.25));
}

#[tokio::test]
async fn test_failed_update_stays_in_edit_mode() {
    let (mut runtime, client) = create_runtime();
    runtime.dispatch(Action::EditEvent(3));
    client.set_failing(true);
    runtime.dispatch(Action::TriggerEvent(EventType::Turnover));
    runtime.settle(SETTLE).await;

    let state = runtime.state();
    assert_eq!(state.recording.editing.as_ref().map(|e| e.id), Some(3));
    assert_eq!(state.selection.selected_player, Some(player_id_for_cap(4)));
    assert!(!state.recording.in_flight);
}

#[tokio::test]
async fn test_undo_removes_last_event() {
    let (mut runtime, client) = create_runtime();
    runtime.dispatch(Action::UndoLast);
    runtime.settle(SETTLE).await;

    assert_eq!(client.call_count("delete_stat"), 1);
    assert!(runtime.state().data.stats.iter().all(|e| e.id != 3));
    assert_eq!(client.stored_stats().len(), 2);
}

#[tokio::test]
async fn test_undo_on_empty_log_makes_no_call() {
    let (mut runtime, client) = create_runtime();
    for _ in 0..3 {
        runtime.dispatch(Action::UndoLast);
        runtime.settle(SETTLE).await;
    }
    assert!(runtime.state().data.stats.is_empty());
    let deletes = client.call_count("delete_stat");

    runtime.dispatch(Action::UndoLast);
    runtime.settle(SETTLE).await;

    assert_eq!(client.call_count("delete_stat"), deletes);
    assert_eq!(deletes, 3);
}

#[tokio::test]
async fn test_substitution_flow_updates_water_and_log() {
    let (mut runtime, client) = create_runtime();
    runtime.dispatch(Action::SwitchTab(Tab::Subs));
    runtime.dispatch(Action::ClockPreset(4));
    runtime.dispatch(Action::SelectInWaterPlayer(player_id_for_cap(2)));
    runtime.dispatch(Action::ToggleBenchPlayer(player_id_for_cap(11)));
    runtime.dispatch(Action::ConfirmSubstitution);
    runtime.dispatch(Action::ConfirmSubstitution);
    runtime.settle(SETTLE).await;

    assert_eq!(client.call_count("create_substitution"), 1);
    let state = runtime.state();
    assert!(state.lineup.is_in_water(player_id_for_cap(11)));
    assert!(!state.lineup.is_in_water(player_id_for_cap(2)));
    assert_eq!(state.lineup.in_water().len(), LINEUP_SIZE);
    assert_eq!(state.data.substitutions.len(), 2);
    assert_eq!(state.data.substitutions[1].time, 240);
}

#[tokio::test]
async fn test_lineup_save_round_trip() {
    let (mut runtime, client) = create_runtime();
    runtime.dispatch(Action::SelectPeriod(3));
    runtime.dispatch(Action::SaveLineup);
    runtime.settle(SETTLE).await;
    assert_eq!(client.call_count("save_starting_lineup"), 0);

    for cap in [1, 2, 3, 4, 5, 6, 8] {
        runtime.dispatch(Action::ToggleBenchPlayer(player_id_for_cap(cap)));
    }
    runtime.dispatch(Action::SaveLineup);
    runtime.dispatch(Action::SaveLineup);
    runtime.settle(SETTLE).await;

    assert_eq!(client.call_count("save_starting_lineup"), 1);
    assert_eq!(client.stored_lineup(3).map(|l| l.len()), Some(LINEUP_SIZE));
    assert_eq!(runtime.state().data.lineups.get(&3).map(Vec::len), Some(LINEUP_SIZE));
}

#[tokio::test]
async fn test_undo_after_record_removes_the_new_event() {
    let (mut runtime, client) = create_runtime();
    runtime.dispatch(Action::SelectPlayer(player_id_for_cap(5)));
    runtime.dispatch(Action::TriggerEvent(EventType::Steal));
    runtime.settle(SETTLE).await;
    let recorded = client.stored_stats().last().map(|e| e.id);
    assert_eq!(runtime.state().last_event().map(|e| e.id), recorded);

    runtime.dispatch(Action::UndoLast);
    runtime.settle(SETTLE).await;

    let stored: Vec<_> = client.stored_stats().iter().map(|e| e.id).collect();
    assert_eq!(stored, vec![1, 2, 3]);
    assert_eq!(runtime.state().data.stats.len(), 3);
    assert!(!runtime.state().data.is_stats_stale());
}
