//! Drives the real reqwest client against a local mock of the history service

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use past_searches_viewer::domain::models::{HistoryContent, LoadOutcome, ViewState};
use past_searches_viewer::shared::errors::{FetchError, HistoryError, LOAD_FAILED_MESSAGE};
use past_searches_viewer::shared::services::{ApiService, ReqwestClient, SearchHistoryLoader};
use past_searches_viewer::shared::storage::MemoryCredentialStore;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;

const KEY: &str = "authToken";

#[derive(Clone, Copy)]
enum Reply {
    History,
    ServerError,
    Object,
    NotJson,
}

#[derive(Clone)]
struct MockState {
    reply: Reply,
    hits: Arc<AtomicUsize>,
}

async fn past_searches(
    State(state): State<MockState>,
    Path(user_id): Path<String>,
) -> axum::response::Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match state.reply {
        Reply::History if user_id == "65a1f0c2" => Json(json!([
            {"search_text": "flat in Pune", "search_datetime": "2024-01-05T10:30:00Z"},
            {"search_text": "2bhk near metro", "search_datetime": "2024-01-04T18:05:00.000Z"}
        ]))
        .into_response(),
        Reply::History => (StatusCode::NOT_FOUND, "unknown user").into_response(),
        Reply::ServerError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!([{"search_text": "ignored", "search_datetime": "2024-01-05T10:30:00Z"}])),
        )
            .into_response(),
        Reply::Object => Json(json!({"message": "no searches"})).into_response(),
        Reply::NotJson => "<html>maintenance</html>".into_response(),
    }
}

async fn spawn_service(reply: Reply) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = MockState {
        reply,
        hits: Arc::clone(&hits),
    };
    let router = Router::new()
        .route("/api/user-update/{user_id}/past-searches", get(past_searches))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), hits)
}

fn token_for(user_id: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({ "_id": user_id, "iat": 1704450600 }).to_string());
    format!("{header}.{payload}.c2ln")
}

fn loader(
    base_url: &str,
    store: MemoryCredentialStore,
) -> SearchHistoryLoader<MemoryCredentialStore, ReqwestClient> {
    SearchHistoryLoader::new(store, ApiService::new(base_url, ReqwestClient::default()), KEY)
}

async fn settle(loader: &SearchHistoryLoader<MemoryCredentialStore, ReqwestClient>) -> ViewState {
    let mut state = ViewState::default();
    state.begin();
    state.settle(loader.load().await);
    state
}

#[tokio::test]
async fn test_loads_history_in_service_order() {
    let (base_url, hits) = spawn_service(Reply::History).await;
    let store = MemoryCredentialStore::new().with_value(KEY, token_for("65a1f0c2"));

    let state = settle(&loader(&base_url, store)).await;

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(!state.loading);
    assert!(state.error.is_none());

    let HistoryContent::Table(rows) = state.layout_in(&chrono::Utc).content else {
        panic!("expected table");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].search_text, "flat in Pune");
    assert_eq!(rows[0].date, "1/5/2024");
    assert_eq!(rows[0].time, "10:30:00 AM");
    assert_eq!(rows[1].search_text, "2bhk near metro");
    assert_eq!(rows[1].time, "6:05:00 PM");
}

#[tokio::test]
async fn test_no_token_never_reaches_service() {
    let (base_url, hits) = spawn_service(Reply::History).await;

    let state = settle(&loader(&base_url, MemoryCredentialStore::new())).await;

    assert_eq!(hits.load(Ordering::SeqCst), 0);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.records.is_empty());
}

#[tokio::test]
async fn test_server_error_ignores_body() {
    let (base_url, _) = spawn_service(Reply::ServerError).await;
    let store = MemoryCredentialStore::new().with_value(KEY, token_for("65a1f0c2"));

    let outcome = loader(&base_url, store).load().await;
    assert_eq!(
        outcome,
        LoadOutcome::Failed(HistoryError::Fetch(FetchError::Status { status: 500 }))
    );

    let mut state = ViewState::default();
    state.settle(outcome);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
    assert!(state.records.is_empty());
}

#[tokio::test]
async fn test_unknown_user_is_a_failure() {
    let (base_url, _) = spawn_service(Reply::History).await;
    let store = MemoryCredentialStore::new().with_value(KEY, token_for("someone-else"));

    let state = settle(&loader(&base_url, store)).await;

    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
    assert!(state.records.is_empty());
}

#[tokio::test]
async fn test_object_body_normalizes_to_empty() {
    let (base_url, _) = spawn_service(Reply::Object).await;
    let store = MemoryCredentialStore::new().with_value(KEY, token_for("65a1f0c2"));

    let state = settle(&loader(&base_url, store)).await;

    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.layout_in(&chrono::Utc).content, HistoryContent::Empty);
}

#[tokio::test]
async fn test_non_json_body_is_a_failure() {
    let (base_url, _) = spawn_service(Reply::NotJson).await;
    let store = MemoryCredentialStore::new().with_value(KEY, token_for("65a1f0c2"));

    let outcome = loader(&base_url, store).load().await;
    assert!(matches!(
        outcome,
        LoadOutcome::Failed(HistoryError::Fetch(FetchError::Body(_)))
    ));
}

#[tokio::test]
async fn test_unreachable_service_is_a_failure() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = MemoryCredentialStore::new().with_value(KEY, token_for("65a1f0c2"));
    let outcome = loader(&format!("http://{}", addr), store).load().await;
    assert!(matches!(
        outcome,
        LoadOutcome::Failed(HistoryError::Fetch(FetchError::Transport(_)))
    ));
}
