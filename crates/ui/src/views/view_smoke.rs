use std::time::Duration;

use services::Timings;
use werkstatt_core::NO_CHANGES_HINT;
use werkstatt_core::model::{OptionId, Phase, ScenarioId};

use super::test_harness::{ViewKind, setup_view_harness};

fn quick(diagnosis_ms: u64) -> Timings {
    Timings {
        diagnosis_advance: Duration::from_millis(diagnosis_ms),
        validation_delay: Duration::ZERO,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn desk_opens_first_ticket_briefing() {
    let mut harness = setup_view_harness(ViewKind::Desk, Timings::instant());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("WICHTIG: Button unlesbar!"), "missing subject in {html}");
    assert!(html.contains("ticket-id: #192"), "missing ticket id in {html}");
    assert!(html.contains("Problemanalyse starten"), "missing start button in {html}");
    assert!(html.contains("Posteingang"), "missing tabs in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn correct_diagnosis_advances_once_after_delay() {
    let mut harness = setup_view_harness(ViewKind::Desk, quick(20));
    harness.rebuild();
    harness.with_progress(|progress| progress.set_phase(Phase::Diagnosis).unwrap());
    assert!(harness.render().contains("Was ist das Problem?"));

    let submit = harness.handles.diagnosis.submit();
    harness.call(submit, OptionId::new("opt2"));
    harness.call(submit, OptionId::new("opt2"));
    harness.call(submit, OptionId::new("opt1"));
    assert_eq!(harness.read_progress(|p| p.phase()), Phase::Diagnosis);
    assert!(harness.render().contains("Korrekt!"));

    harness
        .drive_until(20, |p| p.phase() == Phase::Workbench)
        .await;
    assert_eq!(harness.read_progress(|p| p.phase()), Phase::Workbench);
    assert_eq!(harness.read_progress(|p| p.mistakes()), 0);

    for _ in 0..3 {
        harness.drive_async().await;
    }
    assert_eq!(harness.read_progress(|p| p.phase()), Phase::Workbench);
    assert!(harness.render().contains("EINGABE PRÜFEN"));
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_diagnosis_counts_a_mistake_and_stays() {
    let mut harness = setup_view_harness(ViewKind::Desk, quick(20));
    harness.rebuild();
    harness.with_progress(|progress| progress.set_phase(Phase::Diagnosis).unwrap());

    let submit = harness.handles.diagnosis.submit();
    harness.call(submit, OptionId::new("opt1"));
    // Answered already: a second pick is ignored until retried.
    harness.call(submit, OptionId::new("opt3"));

    assert_eq!(harness.read_progress(|p| p.mistakes()), 1);
    assert_eq!(harness.read_progress(|p| p.phase()), Phase::Diagnosis);
    let html = harness.render();
    assert!(html.contains("Nein, er ist da"), "missing feedback in {html}");
    assert!(html.contains("Nochmal versuchen"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn leaving_diagnosis_cancels_the_pending_advance() {
    let mut harness = setup_view_harness(ViewKind::Desk, quick(30));
    harness.rebuild();
    harness.with_progress(|progress| progress.set_phase(Phase::Diagnosis).unwrap());

    let submit = harness.handles.diagnosis.submit();
    harness.call(submit, OptionId::new("opt2"));
    let other = ScenarioId::new("2-sticky-text");
    harness.with_progress(|progress| progress.start_scenario(&other).unwrap());

    for _ in 0..4 {
        harness.drive_async().await;
    }
    assert_eq!(harness.read_progress(|p| p.phase()), Phase::Briefing);
    assert_eq!(
        harness.read_progress(|p| p.current_scenario_id().cloned()),
        Some(other)
    );
}

#[tokio::test(flavor = "current_thread")]
async fn unchanged_css_fails_with_hint() {
    let mut harness = setup_view_harness(ViewKind::Desk, Timings::instant());
    harness.rebuild();
    harness.with_progress(|progress| {
        progress.set_phase(Phase::Diagnosis).unwrap();
        progress.set_phase(Phase::Workbench).unwrap();
    });

    let validate = harness.handles.workbench.validate();
    harness.call(validate, ());
    harness.drive_until(10, |p| p.mistakes() > 0).await;

    assert_eq!(harness.read_progress(|p| p.mistakes()), 1);
    assert_eq!(harness.read_progress(|p| p.phase()), Phase::Workbench);
    let html = harness.render();
    assert!(html.contains(NO_CHANGES_HINT), "missing hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn fixed_css_completes_the_ticket() {
    let mut harness = setup_view_harness(ViewKind::Desk, Timings::instant());
    harness.rebuild();
    harness.with_progress(|progress| {
        progress.set_phase(Phase::Diagnosis).unwrap();
        progress.set_phase(Phase::Workbench).unwrap();
    });

    let edit = harness.handles.workbench.edit();
    harness.call(
        edit,
        ".cta-button { color: white; background-color: #1d4ed8; }".to_string(),
    );
    assert!(harness.read_progress(|p| p.user_css().contains("#1d4ed8")));

    let validate = harness.handles.workbench.validate();
    harness.call(validate, ());
    harness
        .drive_until(10, |p| p.phase() == Phase::Completed)
        .await;

    assert_eq!(harness.read_progress(|p| p.phase()), Phase::Completed);
    assert!(harness.read_progress(|p| p.is_completed(&ScenarioId::new("1-invisible-button"))));
    let html = harness.render();
    assert!(html.contains("Fantastisch!"), "missing success in {html}");
    assert!(html.contains("Nächstes Ticket"), "missing next button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exhausted_catalog_shows_finished_screen() {
    let mut harness = setup_view_harness(ViewKind::Desk, Timings::instant());
    harness.rebuild();
    harness.with_progress(|progress| {
        let last = ScenarioId::new("3-broken-gallery");
        progress.start_scenario(&last).unwrap();
        progress.complete_scenario(&last).unwrap();
        progress.next_scenario();
    });

    let html = harness.render();
    assert!(html.contains("Alle Tickets erledigt"), "missing finished screen in {html}");
    assert!(html.contains("Von vorne beginnen"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_reports_completions() {
    let mut harness = setup_view_harness(ViewKind::Progress, Timings::instant());
    harness.rebuild();
    harness.with_progress(|progress| {
        let first = ScenarioId::new("1-invisible-button");
        progress.add_mistake();
        progress.complete_scenario(&first).unwrap();
    });

    let html = harness.render();
    assert!(html.contains("Erledigt: 1 / 3"), "missing count in {html}");
    assert!(html.contains("Fehlversuche (aktuelles Ticket): 1"), "missing mistakes in {html}");
    assert!(html.contains("Der Klebe-Text"), "missing ticket row in {html}");
}

fn slow_check(validation_ms: u64) -> Timings {
    Timings {
        diagnosis_advance: Duration::ZERO,
        validation_delay: Duration::from_millis(validation_ms),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn running_check_ignores_repeat_clicks() {
    let mut harness = setup_view_harness(ViewKind::Desk, slow_check(40));
    harness.rebuild();
    harness.with_progress(|progress| {
        progress.set_phase(Phase::Diagnosis).unwrap();
        progress.set_phase(Phase::Workbench).unwrap();
    });

    let validate = harness.handles.workbench.validate();
    harness.call(validate, ());
    let html = harness.render();
    assert!(html.contains("Prüfe..."), "missing busy label in {html}");
    assert!(!html.contains("EINGABE PRÜFEN"), "check label still shown in {html}");
    harness.call(validate, ());
    harness.call(validate, ());

    harness.drive_until(10, |p| p.mistakes() > 0).await;
    for _ in 0..3 {
        harness.drive_async().await;
    }
    assert_eq!(harness.read_progress(|p| p.mistakes()), 1);
    assert!(harness.render().contains("EINGABE PRÜFEN"));
}

#[tokio::test(flavor = "current_thread")]
async fn leaving_workbench_drops_the_running_check() {
    let mut harness = setup_view_harness(ViewKind::Desk, slow_check(40));
    harness.rebuild();
    harness.with_progress(|progress| {
        progress.set_phase(Phase::Diagnosis).unwrap();
        progress.set_phase(Phase::Workbench).unwrap();
    });

    let edit = harness.handles.workbench.edit();
    harness.call(
        edit,
        ".cta-button { color: white; background-color: #1d4ed8; }".to_string(),
    );
    let validate = harness.handles.workbench.validate();
    harness.call(validate, ());
    assert!(harness.render().contains("Prüfe..."));

    let other = ScenarioId::new("2-sticky-text");
    harness.with_progress(|progress| progress.start_scenario(&other).unwrap());

    for _ in 0..4 {
        harness.drive_async().await;
    }
    let first = ScenarioId::new("1-invisible-button");
    assert!(!harness.read_progress(|p| p.is_completed(&first)));
    assert_eq!(harness.read_progress(|p| p.completed().len()), 0);
    assert_eq!(harness.read_progress(|p| p.mistakes()), 0);
    assert_eq!(harness.read_progress(|p| p.phase()), Phase::Briefing);
    assert_eq!(
        harness.read_progress(|p| p.current_scenario_id().cloned()),
        Some(other)
    );
}
