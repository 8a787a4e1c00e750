//! Video mutations. The media upload itself is an external collaborator;
//! this service receives the hosted URLs and owns the document lifecycle.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::models::Video;
use crate::error::{ServiceError, ServiceResult};
use crate::services::ownership::ensure_owner;
use crate::store::EntityStore;

/// Input for publishing a video. URLs come from the upload collaborator.
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    pub video_file: String,
    pub thumbnail: String,
    pub duration_secs: f64,
}

/// Partial update; at least one field must be present.
#[derive(Debug, Clone, Default)]
pub struct VideoUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Clone)]
pub struct VideoService {
    store: Arc<dyn EntityStore>,
}

impl VideoService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn publish(&self, owner_id: Uuid, new: NewVideo) -> ServiceResult<Video> {
        if new.title.trim().is_empty() || new.description.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "title and description are required".into(),
            ));
        }
        if new.video_file.trim().is_empty() || new.thumbnail.trim().is_empty() {
            return Err(ServiceError::InvalidInput(
                "video and thumbnail file is required".into(),
            ));
        }

        let now = Utc::now();
        let video = Video {
            id: Uuid::new_v4(),
            owner_id,
            title: new.title.trim().to_string(),
            description: new.description.trim().to_string(),
            video_file: new.video_file,
            thumbnail: new.thumbnail,
            duration_secs: new.duration_secs,
            views: 0,
            is_published: true,
            created_at: now,
            updated_at: now,
        };
        let video = self.store.insert_video(video).await?;
        info!(video_id = %video.id, owner_id = %owner_id, "video published");
        Ok(video)
    }

    pub async fn update_details(
        &self,
        actor_id: Uuid,
        video_id: Uuid,
        update: VideoUpdate,
    ) -> ServiceResult<Video> {
        if update.title.is_none() && update.description.is_none() && update.thumbnail.is_none() {
            return Err(ServiceError::InvalidInput(
                "title, description or thumbnail is required".into(),
            ));
        }
        let mut video = self.require(video_id).await?;
        ensure_owner(actor_id, video.owner_id, "video")?;

        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err(ServiceError::InvalidInput("title is required".into()));
            }
            video.title = title.trim().to_string();
        }
        if let Some(description) = update.description {
            video.description = description.trim().to_string();
        }
        if let Some(thumbnail) = update.thumbnail {
            video.thumbnail = thumbnail;
        }
        video.updated_at = Utc::now();
        self.store.update_video(video.clone()).await?;
        Ok(video)
    }

    pub async fn delete(&self, actor_id: Uuid, video_id: Uuid) -> ServiceResult<()> {
        let video = self.require(video_id).await?;
        ensure_owner(actor_id, video.owner_id, "video")?;
        self.store.delete_video(video_id).await?;
        info!(%video_id, "video deleted");
        Ok(())
    }

    /// Flip the publication flag; unpublished videos disappear from the
    /// public listing but keep their comments and likes.
    pub async fn toggle_publish(&self, actor_id: Uuid, video_id: Uuid) -> ServiceResult<Video> {
        let mut video = self.require(video_id).await?;
        ensure_owner(actor_id, video.owner_id, "video")?;
        video.is_published = !video.is_published;
        video.updated_at = Utc::now();
        self.store.update_video(video.clone()).await?;
        Ok(video)
    }

    async fn require(&self, video_id: Uuid) -> ServiceResult<Video> {
        self.store
            .video_by_id(video_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("video not found".into()))
    }
}
