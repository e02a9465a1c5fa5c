use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use heatvote_core::types::FolderId;

use crate::error::LabelError;
use crate::LabelSource;

/// In-memory implementation of [`LabelSource`] for tests.
///
/// Serves explicitly inserted labels, falls back to `object_{folder_id}` for
/// everything else, or fails every fetch with a fixed status when built with
/// [`FakeLabelSource::failing`].
pub struct FakeLabelSource {
    labels: RwLock<HashMap<FolderId, String>>,
    fail_status: Option<u16>,
}

impl FakeLabelSource {
    /// A fake that answers every folder.
    pub fn new() -> Self {
        Self {
            labels: RwLock::new(HashMap::new()),
            fail_status: None,
        }
    }

    /// A fake whose every fetch fails with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            labels: RwLock::new(HashMap::new()),
            fail_status: Some(status),
        }
    }

    /// Pin the label for one folder.
    pub fn fake_set_label(&self, folder_id: FolderId, name: &str) {
        self.labels
            .write()
            .unwrap()
            .insert(folder_id, name.to_owned());
    }
}

impl Default for FakeLabelSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LabelSource for FakeLabelSource {
    async fn object_name(&self, folder_id: FolderId) -> Result<String, LabelError> {
        if let Some(status) = self.fail_status {
            return Err(LabelError::Status { folder_id, status });
        }
        let labels = self.labels.read().unwrap();
        Ok(labels
            .get(&folder_id)
            .cloned()
            .unwrap_or_else(|| format!("object_{folder_id}")))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pinned_label_is_served() {
        let source = FakeLabelSource::new();
        source.fake_set_label(3, "goldfish");
        assert_eq!(source.object_name(3).await.unwrap(), "goldfish");
    }

    #[tokio::test]
    async fn unpinned_folder_gets_fallback_label() {
        let source = FakeLabelSource::new();
        assert_eq!(source.object_name(42).await.unwrap(), "object_42");
    }

    #[tokio::test]
    async fn failing_source_errors_on_every_fetch() {
        let source = FakeLabelSource::failing(503);
        let err = source.object_name(1).await.unwrap_err();
        assert!(matches!(err, LabelError::Status { status: 503, .. }));
    }
}
