//! Deterministic asset URLs for the external image catalog.
//!
//! The asset host serves each folder's files under
//! `{base}/{folder_id}/{asset}`. Folder `i` holds the original photograph
//! (`image.jpg`), the object label (`name.txt`), and one heatmap per method
//! (`heatmap_{method}.jpg`). The host is a read-only collaborator; nothing
//! here verifies that a folder actually exists.

use crate::types::FolderId;

/// URL of a folder's original photograph.
pub fn original_image_url(base_url: &str, folder_id: FolderId) -> String {
    format!("{}/{}/image.jpg", base_url.trim_end_matches('/'), folder_id)
}

/// URL of a folder's object-name label.
pub fn label_url(base_url: &str, folder_id: FolderId) -> String {
    format!("{}/{}/name.txt", base_url.trim_end_matches('/'), folder_id)
}

/// URL of one method's heatmap for a folder.
pub fn heatmap_image_url(base_url: &str, folder_id: FolderId, method: &str) -> String {
    format!(
        "{}/{}/heatmap_{}.jpg",
        base_url.trim_end_matches('/'),
        folder_id,
        method
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
