pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy (paths as the survey frontend calls them, trailing
/// slashes included):
///
/// ```text
/// POST /users/                   register participant
/// GET  /check_user/{user_id}     existence check
/// GET  /next_image/{user_id}     next assignment (read-only)
/// POST /vote/                    record vote, advance progress
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", post(handlers::users::register))
        .route("/check_user/{user_id}", get(handlers::users::check_user))
        .route(
            "/next_image/{user_id}",
            get(handlers::assignment::next_image),
        )
        .route("/vote/", post(handlers::votes::record_vote))
}
