use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use heatvote_api::config::ServerConfig;
use heatvote_api::routes;
use heatvote_api::state::AppState;
use heatvote_assets::{FakeLabelSource, LabelSource};
use heatvote_core::shuffle::{RandomShuffler, Shuffler};
use heatvote_db::FakeStore;

/// Asset-host base URL used across tests.
pub const TEST_ASSET_BASE: &str = "https://assets.example.com/study";

/// Build a test `ServerConfig` with safe defaults and the given catalog size.
pub fn test_config(total_folders: i64) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        total_folders,
        asset_base_url: TEST_ASSET_BASE.to_string(),
        label_fetch_timeout_secs: 10,
    }
}

/// App state wired to the in-memory fakes: answering label source and the
/// production random shuffler. Returns the store handle for seeding and
/// read-back.
pub fn fake_state(total_folders: i64) -> (AppState, Arc<FakeStore>) {
    fake_state_with(
        total_folders,
        Arc::new(FakeLabelSource::new()),
        Arc::new(RandomShuffler),
    )
}

/// Like [`fake_state`] but with caller-chosen label source and shuffler.
pub fn fake_state_with(
    total_folders: i64,
    labels: Arc<dyn LabelSource>,
    shuffler: Arc<dyn Shuffler>,
) -> (AppState, Arc<FakeStore>) {
    let store = Arc::new(FakeStore::new());
    let state = AppState {
        store: store.clone(),
        labels,
        shuffler,
        config: Arc::new(test_config(total_folders)),
    };
    (state, store)
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register a participant through the API and assert success.
pub async fn register_user(app: &Router, user_id: &str) {
    let response = post_json(
        app.clone(),
        "/api/users/",
        serde_json::json!({ "user_id": user_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
