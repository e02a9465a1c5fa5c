/// Folder indices are 1-based and contiguous; `0` is the "nothing voted yet"
/// sentinel in progress tracking, never a valid folder.
pub type FolderId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
