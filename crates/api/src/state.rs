use std::sync::Arc;

use heatvote_assets::LabelSource;
use heatvote_core::shuffle::Shuffler;
use heatvote_db::VoterStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (all collaborators are behind `Arc`). The store,
/// label source, and shuffler are trait objects so tests can inject in-memory
/// fakes and a deterministic shuffler.
#[derive(Clone)]
pub struct AppState {
    /// Participant store.
    pub store: Arc<dyn VoterStore>,
    /// Object-name label fetcher for the asset host.
    pub labels: Arc<dyn LabelSource>,
    /// Permutation source for blinding the heatmap order.
    pub shuffler: Arc<dyn Shuffler>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
