use heatvote_core::types::FolderId;

/// Errors from the asset-host label fetch.
///
/// A failed fetch aborts the whole assignment response; the server never
/// substitutes a placeholder label.
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The asset host answered with a non-2xx status code.
    #[error("Asset host returned HTTP {status} for folder {folder_id}")]
    Status { folder_id: FolderId, status: u16 },
}
