//! Client for the read-only static-asset host.
//!
//! Image URLs are deterministic (see `heatvote_core::catalog`) and handed to
//! the frontend untouched; the only asset the server itself reads is each
//! folder's `name.txt` object label. That fetch sits behind the
//! [`LabelSource`] trait so tests can substitute [`FakeLabelSource`].

pub mod error;
pub mod fake;
pub mod http;

pub use error::LabelError;
pub use fake::FakeLabelSource;
pub use http::HttpLabelSource;

use async_trait::async_trait;
use heatvote_core::types::FolderId;

/// Provides the object-name label for a folder.
#[async_trait]
pub trait LabelSource: Send + Sync + 'static {
    async fn object_name(&self, folder_id: FolderId) -> Result<String, LabelError>;
}
