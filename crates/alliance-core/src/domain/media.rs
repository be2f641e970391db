//! Media collaborator
//!
//! Records only store attachment ids. Turning an id into something
//! displayable is delegated to the media library.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SyncError;

/// Display data for one attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaInfo {
    pub id: u32,
    pub url: String,
    pub mime_type: String,
    pub alt: String,
}

impl MediaInfo {
    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with("video/")
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Resolves attachment ids against the host's media library
#[async_trait(?Send)]
pub trait MediaResolver {
    /// `Ok(None)` when the attachment no longer exists
    async fn resolve(&self, id: u32) -> Result<Option<MediaInfo>, SyncError>;

    /// Image attachment whose parent is the given video, if any
    async fn poster_for(&self, video_id: u32) -> Result<Option<u32>, SyncError>;
}
