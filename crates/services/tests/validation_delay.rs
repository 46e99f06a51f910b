use std::sync::Arc;
use std::time::Duration;

use services::ValidationService;
use werkstatt_core::{Catalog, FALLBACK_HINT, model::ScenarioId};

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn verdict_arrives_only_after_the_configured_delay() {
    let service = ValidationService::new(Arc::new(Catalog::builtin()), Duration::from_millis(800));
    let id = ScenarioId::new("3-broken-gallery");

    let task = tokio::spawn({
        let service = service.clone();
        let id = id.clone();
        async move { service.validate(&id, ".gallery { display: flex; }").await }
    });
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_millis(799)).await;
    tokio::task::yield_now().await;
    assert!(!task.is_finished());

    tokio::time::advance(Duration::from_millis(1)).await;
    let verdict = task.await.unwrap().unwrap();
    assert!(verdict.passed);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn failing_submission_carries_the_scenario_hint() {
    let service = ValidationService::new(Arc::new(Catalog::builtin()), Duration::from_millis(50));
    let verdict = service
        .validate(&ScenarioId::new("2-sticky-text"), ".info-box { margin: 4px; }")
        .await
        .unwrap();
    assert!(!verdict.passed);
    assert_eq!(
        verdict.hint,
        "Versuch es mal mit 'padding' auf der .info-box."
    );
    assert_ne!(verdict.display_hint(), FALLBACK_HINT);
}
