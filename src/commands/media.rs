//! Media Library Commands
//!
//! Resolves attachment ids through the core `wp/v2/media` routes.

use alliance_core::{MediaInfo, MediaResolver, SyncError};
use async_trait::async_trait;
use serde::Deserialize;

use super::RestClient;

#[derive(Deserialize)]
struct WpMedia {
    id: u32,
    #[serde(default)]
    source_url: String,
    #[serde(default)]
    mime_type: String,
    #[serde(default)]
    alt_text: String,
}

impl From<WpMedia> for MediaInfo {
    fn from(media: WpMedia) -> Self {
        Self {
            id: media.id,
            url: media.source_url,
            mime_type: media.mime_type,
            alt: media.alt_text,
        }
    }
}

#[derive(Clone)]
pub struct MediaLibrary {
    client: RestClient,
}

impl MediaLibrary {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl MediaResolver for MediaLibrary {
    async fn resolve(&self, id: u32) -> Result<Option<MediaInfo>, SyncError> {
        if id == 0 {
            return Ok(None);
        }
        let url = self.client.config().core_endpoint(&format!("wp/v2/media/{id}"));
        match self.client.get_url::<WpMedia>(&url).await {
            Ok(media) => Ok(Some(media.into())),
            Err(SyncError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn poster_for(&self, video_id: u32) -> Result<Option<u32>, SyncError> {
        if video_id == 0 {
            return Ok(None);
        }
        let url = self
            .client
            .config()
            .core_endpoint(&format!("wp/v2/media?parent={video_id}&media_type=image"));
        let images: Vec<WpMedia> = self.client.get_url(&url).await?;
        Ok(images.first().map(|image| image.id))
    }
}
