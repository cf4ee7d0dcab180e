use chrono::Duration;
use roadmap_core::model::{ActiveSession, encode_started_at};
use roadmap_core::time::{fixed_clock, fixed_now};
use storage::repository::{SessionKey, SessionStore};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with, test_services};
use crate::app::Gate;

#[tokio::test(flavor = "current_thread")]
async fn shell_without_session_shows_login_form() {
    let mut harness = setup_view_harness(ViewKind::Shell);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Secure Terminal Access Required"), "missing banner in {html}");
    assert!(html.contains("Operator ID"), "missing identity field in {html}");
    assert!(html.contains("ESTABLISH CONNECTION"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_with_todays_lockout_shows_lockdown() {
    let (storage, services) = test_services();
    storage
        .session
        .write(SessionKey::LockoutDate, &fixed_clock().today().to_marker())
        .await
        .expect("write lockout");

    let mut harness = setup_view_harness_with(ViewKind::Shell, storage, services);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("System Lockdown Active"), "missing lockout in {html}");
    assert!(!html.contains("ESTABLISH CONNECTION"), "form shown while locked: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_resumes_persisted_session() {
    let (storage, services) = test_services();
    services
        .session()
        .login("alpha", "key")
        .await
        .expect("login");

    let mut harness = setup_view_harness_with(ViewKind::Shell, storage, services);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("AGENT: ALPHA"), "missing agent badge in {html}");
    assert!(html.contains("SESSION: 04:00:00"), "missing countdown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_renders_first_phase() {
    let (storage, services) = test_services();
    let session = services
        .session()
        .login("alpha", "key")
        .await
        .expect("login");

    let mut harness = setup_view_harness_with(ViewKind::Roadmap(session), storage, services);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Learning Milestones"), "missing milestones in {html}");
    assert!(html.contains("The Foundation"), "missing phase title in {html}");
    assert!(html.contains("OSI Model"), "missing topic in {html}");
    assert!(html.contains("Cyber Intelligence Hub"), "missing intel hub in {html}");
    assert!(html.contains("0%"), "missing completion stat in {html}");
    assert!(harness.exits.lock().unwrap().is_empty());
    assert!(harness.links.opened.lock().unwrap().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn chat_widget_shows_greeting_only_when_open() {
    let mut closed = setup_view_harness(ViewKind::Chat { open: false });
    closed.rebuild();
    let html = closed.render();
    assert!(!html.contains("MENTOR UPLINK"), "panel rendered while closed: {html}");

    let mut open = setup_view_harness(ViewKind::Chat { open: true });
    open.rebuild();
    let html = open.render();
    assert!(html.contains("MENTOR UPLINK"), "missing panel in {html}");
    assert!(html.contains("cybersecurity mentor"), "missing greeting in {html}");
    assert!(!open.services.chat().enabled());
}

#[tokio::test(flavor = "current_thread")]
async fn blank_login_submit_shows_inline_error() {
    let mut harness = setup_view_harness(ViewKind::Shell);
    harness.rebuild();
    harness.drive_async().await;
    assert!(!harness.render().contains("CREDENTIALS REQUIRED"));

    let form = harness.listener("submit");
    harness.submit(form);

    let html = harness.render();
    assert!(html.contains("CREDENTIALS REQUIRED"), "missing inline error in {html}");
    assert!(html.contains("ESTABLISH CONNECTION"), "form replaced on blank submit: {html}");
    assert!(
        harness
            .storage
            .session
            .read(SessionKey::User)
            .await
            .expect("read user")
            .is_none()
    );
}

#[tokio::test(flavor = "current_thread")]
async fn checkbox_click_leaves_expanded_milestone_alone() {
    let (storage, services) = test_services();
    let session = services
        .session()
        .login("alpha", "key")
        .await
        .expect("login");

    let mut harness = setup_view_harness_with(ViewKind::Roadmap(session), storage, services);
    harness.rebuild();
    assert!(!harness.render().contains("Tactical Insights"));

    let row = harness.element_with("data-milestone", "m1-1");
    harness.click(row);
    let html = harness.render();
    assert!(html.contains("Tactical Insights"), "row click did not expand: {html}");
    assert!(!html.contains("milestone completed"), "row click completed: {html}");

    let check = harness.milestone_checkbox("m1-1");
    harness.click(check);
    let html = harness.render();
    assert!(html.contains("milestone completed"), "checkbox did not complete: {html}");
    assert!(html.contains("Tactical Insights"), "checkbox collapsed the row: {html}");

    harness.click(check);
    let html = harness.render();
    assert!(!html.contains("milestone completed"), "second click kept completion: {html}");
    assert!(html.contains("Tactical Insights"), "second click collapsed the row: {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn roadmap_countdown_expiry_exits_to_lockout() {
    let started_at = fixed_now() - Duration::hours(4);
    let (storage, services) = test_services();
    storage
        .session
        .write(SessionKey::User, "alpha")
        .await
        .expect("write user");
    storage
        .session
        .write(SessionKey::Start, &encode_started_at(started_at))
        .await
        .expect("write start");

    let session = ActiveSession::new("alpha", started_at);
    let mut harness = setup_view_harness_with(ViewKind::Roadmap(session), storage, services);
    harness.rebuild();
    assert!(harness.exits.lock().unwrap().is_empty());

    harness.drive_for(std::time::Duration::from_secs(2)).await;

    assert_eq!(*harness.exits.lock().unwrap(), vec![Gate::LockedOut]);
    assert_eq!(
        harness
            .storage
            .session
            .read(SessionKey::LockoutDate)
            .await
            .expect("read lockout"),
        Some(fixed_clock().today().to_marker())
    );
    assert!(
        harness
            .storage
            .session
            .read(SessionKey::User)
            .await
            .expect("read user")
            .is_none()
    );
}
