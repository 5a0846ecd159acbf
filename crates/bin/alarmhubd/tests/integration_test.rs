//! End-to-end tests for the full alarmhubd stack.
//!
//! Each test wires real `SQLite` repositories, real services and the real
//! axum router, then drives it with `tower::ServiceExt::oneshot`. No TCP
//! port is bound.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tokio::sync::broadcast::Receiver;
use tower::ServiceExt;

use alarmhub_adapter_http_axum::router;
use alarmhub_adapter_http_axum::state::AppState;
use alarmhub_adapter_storage_sqlite_sqlx::{
    Config, SqliteAlarmRepository, SqliteCredentialsRepository,
};
use alarmhub_app::event_bus::InProcessEventBus;
use alarmhub_app::restart::wait_for_restart;
use alarmhub_app::services::alarm_service::AlarmService;
use alarmhub_app::services::credentials_service::CredentialsService;
use alarmhub_domain::event::{Event, EventKind};

/// Build a fully-wired router plus a subscription to its event bus.
async fn app_at(database_url: &str) -> (Router, Receiver<Event>) {
    let db = Config {
        database_url: database_url.to_string(),
    }
    .build()
    .await
    .expect("database should initialise");
    let pool = db.pool().clone();

    let event_bus = Arc::new(InProcessEventBus::new(16));
    let events = event_bus.subscribe();

    let state = AppState::new(
        AlarmService::new(SqliteAlarmRepository::new(pool.clone()), Arc::clone(&event_bus)),
        CredentialsService::new(SqliteCredentialsRepository::new(pool), event_bus),
    );

    (router::build(state), events)
}

async fn app() -> (Router, Receiver<Event>) {
    app_at("sqlite::memory:").await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn fetch(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (app, _events) = app().await;
    let (status, body) = fetch(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

// ---------------------------------------------------------------------------
// Alarm endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_report_unset_alarm_on_fresh_database() {
    let (app, _events) = app().await;
    let (status, body) = fetch(&app, "/get_alarm").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "--:--");
}

#[tokio::test]
async fn should_persist_alarm_through_sqlite() {
    let (app, _events) = app().await;

    let (status, body) = fetch(&app, "/set_alarm?hour=6&minute=45").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "06:45");

    let (_, body) = fetch(&app, "/get_alarm").await;
    assert_eq!(body, "06:45");

    let (_, page) = fetch(&app, "/").await;
    assert!(page.contains(r#"<div id="alarm-time">06:45</div>"#));
}

#[tokio::test]
async fn should_leave_alarm_untouched_when_input_invalid() {
    let (app, _events) = app().await;
    fetch(&app, "/set_alarm?hour=22&minute=10").await;

    let (status, body) = fetch(&app, "/set_alarm?hour=25&minute=10").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "invalid");

    let (_, body) = fetch(&app, "/get_alarm").await;
    assert_eq!(body, "22:10");
}

#[tokio::test]
async fn should_not_request_restart_when_alarm_set() {
    let (app, events) = app().await;
    fetch(&app, "/set_alarm?hour=7&minute=0").await;

    let restart = tokio::time::timeout(
        Duration::from_millis(100),
        wait_for_restart(events, Duration::ZERO),
    )
    .await;
    assert!(restart.is_err());
}

// ---------------------------------------------------------------------------
// Wi-Fi provisioning
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_prefill_settings_page_after_configure() {
    let (app, _events) = app().await;

    let (status, body) = post_form(&app, "/configure", "ssid=Casa+Rossi&password=s3cret").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Configurazione salvata"));

    let (_, page) = fetch(&app, "/").await;
    assert!(page.contains(r#"value="Casa Rossi""#));
    assert!(page.contains(r#"value="s3cret""#));
}

#[tokio::test]
async fn should_request_restart_when_credentials_configured() {
    let (app, events) = app().await;
    post_form(&app, "/configure", "ssid=home&password=hunter22").await;

    let event = tokio::time::timeout(
        Duration::from_secs(1),
        wait_for_restart(events, Duration::ZERO),
    )
    .await
    .expect("restart should be requested")
    .expect("bus should stay open");

    assert_eq!(
        event.kind,
        EventKind::CredentialsSaved {
            ssid: "home".to_string()
        }
    );
}

#[tokio::test]
async fn should_not_request_restart_when_configure_rejected() {
    let (app, events) = app().await;
    let (status, _) = post_form(&app, "/configure", "ssid=&password=x").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let restart = tokio::time::timeout(
        Duration::from_millis(100),
        wait_for_restart(events, Duration::ZERO),
    )
    .await;
    assert!(restart.is_err());
}

#[tokio::test]
async fn should_forget_credentials_and_restart_when_cleared() {
    let (app, mut events) = app().await;
    post_form(&app, "/configure", "ssid=home&password=hunter22").await;
    events.recv().await.unwrap();

    let (status, body) = post_form(&app, "/clear", "").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Dati eliminati"));

    let event = wait_for_restart(events, Duration::ZERO).await.unwrap();
    assert_eq!(event.kind, EventKind::CredentialsCleared);

    let (_, page) = fetch(&app, "/").await;
    assert!(!page.contains("hunter22"));
    assert!(page.contains(r#"placeholder="SSID" value="""#));
}

// ---------------------------------------------------------------------------
// Persistence across restarts
// ---------------------------------------------------------------------------

/// `SQLite` file in the temp directory, removed with its `-wal`/`-shm`
/// companions when dropped.
struct TempDatabase {
    path: PathBuf,
}

impl TempDatabase {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("{name}-{}.db", std::process::id()));
        Self { path }
    }

    fn url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.path.display())
    }

    fn files(&self) -> [PathBuf; 3] {
        let mut wal = self.path.clone().into_os_string();
        wal.push("-wal");
        let mut shm = self.path.clone().into_os_string();
        shm.push("-shm");
        [self.path.clone(), wal.into(), shm.into()]
    }
}

impl Drop for TempDatabase {
    fn drop(&mut self) {
        for file in self.files() {
            let _ = std::fs::remove_file(file);
        }
    }
}

#[tokio::test]
async fn should_keep_settings_across_restart() {
    let db = TempDatabase::new("alarmhub-it-restart");

    {
        let (app, _events) = app_at(&db.url()).await;
        fetch(&app, "/set_alarm?hour=5&minute=15").await;
        post_form(&app, "/configure", "ssid=home&password=hunter22").await;
    }

    let (app, _events) = app_at(&db.url()).await;
    let (_, alarm) = fetch(&app, "/get_alarm").await;
    let (_, page) = fetch(&app, "/").await;

    assert_eq!(alarm, "05:15");
    assert!(page.contains(r#"value="home""#));
}

#[test]
fn should_remove_database_and_journal_files_when_temp_database_dropped() {
    let db = TempDatabase::new("alarmhub-it-cleanup");
    let files = db.files();
    for file in &files {
        std::fs::write(file, b"").unwrap();
    }

    drop(db);

    for file in &files {
        assert!(!file.exists(), "{} left behind", file.display());
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_every_page() {
    let (app, _events) = app().await;

    for (uri, marker) in [
        ("/", "togglePassword"),
        ("/alarm", "Imposta Sveglia"),
        ("/wifi", "Configura WiFi"),
    ] {
        let (status, body) = fetch(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains(marker), "{uri}");
    }
}

#[tokio::test]
async fn should_return_not_found_for_unknown_route() {
    let (app, _events) = app().await;
    let (status, _) = fetch(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
