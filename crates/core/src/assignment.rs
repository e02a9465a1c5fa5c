//! Assembly of the per-folder assignment payload.
//!
//! An assignment is everything the survey frontend needs to render one
//! voting screen: the original photograph, the object label, and every
//! method's heatmap in freshly shuffled order. Assembly is pure; the label
//! text is fetched by the caller beforehand and passed in.

use serde::Serialize;

use crate::catalog;
use crate::methods::HEATMAP_METHODS;
use crate::shuffle::Shuffler;
use crate::types::FolderId;

/// One heatmap option presented to the participant.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapChoice {
    /// Wire-level method identifier. The frontend never displays this; it is
    /// echoed back in the vote submission.
    pub method: &'static str,
    pub image_path: String,
}

/// Full voting-screen payload for one folder.
#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    pub folder_id: FolderId,
    pub original_image: String,
    pub object_name: String,
    /// Every method exactly once, in per-call randomized order.
    pub heatmaps: Vec<HeatmapChoice>,
}

/// Build the assignment payload for a folder.
///
/// The method order is drawn from `shuffler` on every call, so repeated
/// fetches of the same folder present the heatmaps in fresh order.
pub fn assemble(
    base_url: &str,
    folder_id: FolderId,
    object_name: String,
    shuffler: &dyn Shuffler,
) -> Assignment {
    let mut methods = HEATMAP_METHODS.to_vec();
    shuffler.shuffle(&mut methods);

    let heatmaps = methods
        .into_iter()
        .map(|method| HeatmapChoice {
            method,
            image_path: catalog::heatmap_image_url(base_url, folder_id, method),
        })
        .collect();

    Assignment {
        folder_id,
        original_image: catalog::original_image_url(base_url, folder_id),
        object_name,
        heatmaps,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
