//! Playlist CRUD plus the ordered, duplicate-free video membership ops.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::models::Playlist;
use crate::error::{ServiceError, ServiceResult};
use crate::services::ownership::ensure_owner;
use crate::store::EntityStore;

/// Partial update; at least one field must be present.
#[derive(Debug, Clone, Default)]
pub struct PlaylistUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Clone)]
pub struct PlaylistService {
    store: Arc<dyn EntityStore>,
}

impl PlaylistService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        name: &str,
        description: &str,
        thumbnail: Option<String>,
    ) -> ServiceResult<Playlist> {
        if name.trim().is_empty() {
            return Err(ServiceError::InvalidInput("name is required".into()));
        }
        if description.trim().is_empty() {
            return Err(ServiceError::InvalidInput("description is required".into()));
        }
        let now = Utc::now();
        let playlist = Playlist {
            id: Uuid::new_v4(),
            owner_id,
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            thumbnail,
            video_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        Ok(self.store.insert_playlist(playlist).await?)
    }

    pub async fn get(&self, playlist_id: Uuid) -> ServiceResult<Playlist> {
        self.require(playlist_id).await
    }

    pub async fn list_for_owner(&self, owner_id: Uuid) -> ServiceResult<Vec<Playlist>> {
        Ok(self.store.playlists_by_owner(owner_id).await?)
    }

    pub async fn update_details(
        &self,
        actor_id: Uuid,
        playlist_id: Uuid,
        update: PlaylistUpdate,
    ) -> ServiceResult<Playlist> {
        if update.name.is_none() && update.description.is_none() && update.thumbnail.is_none() {
            return Err(ServiceError::InvalidInput(
                "name, description or thumbnail is required".into(),
            ));
        }
        let mut playlist = self.require(playlist_id).await?;
        ensure_owner(actor_id, playlist.owner_id, "playlist")?;

        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(ServiceError::InvalidInput("name is required".into()));
            }
            playlist.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            playlist.description = description.trim().to_string();
        }
        if let Some(thumbnail) = update.thumbnail {
            playlist.thumbnail = Some(thumbnail);
        }
        playlist.updated_at = Utc::now();
        self.store.update_playlist(playlist.clone()).await?;
        Ok(playlist)
    }

    pub async fn delete(&self, actor_id: Uuid, playlist_id: Uuid) -> ServiceResult<()> {
        let playlist = self.require(playlist_id).await?;
        ensure_owner(actor_id, playlist.owner_id, "playlist")?;
        self.store.delete_playlist(playlist_id).await?;
        Ok(())
    }

    /// Append a video; rejects duplicates and dangling video ids.
    pub async fn add_video(
        &self,
        actor_id: Uuid,
        playlist_id: Uuid,
        video_id: Uuid,
    ) -> ServiceResult<Playlist> {
        let mut playlist = self.require(playlist_id).await?;
        if playlist.video_ids.contains(&video_id) {
            return Err(ServiceError::Conflict("video already in playlist".into()));
        }
        ensure_owner(actor_id, playlist.owner_id, "playlist")?;
        if self.store.video_by_id(video_id).await?.is_none() {
            return Err(ServiceError::NotFound("video not found".into()));
        }
        playlist.video_ids.push(video_id);
        playlist.updated_at = Utc::now();
        self.store.update_playlist(playlist.clone()).await?;
        Ok(playlist)
    }

    pub async fn remove_video(
        &self,
        actor_id: Uuid,
        playlist_id: Uuid,
        video_id: Uuid,
    ) -> ServiceResult<Playlist> {
        let mut playlist = self.require(playlist_id).await?;
        if !playlist.video_ids.contains(&video_id) {
            return Err(ServiceError::InvalidInput("video not in playlist".into()));
        }
        ensure_owner(actor_id, playlist.owner_id, "playlist")?;
        playlist.video_ids.retain(|id| *id != video_id);
        playlist.updated_at = Utc::now();
        self.store.update_playlist(playlist.clone()).await?;
        Ok(playlist)
    }

    async fn require(&self, playlist_id: Uuid) -> ServiceResult<Playlist> {
        self.store
            .playlist_by_id(playlist_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("playlist not found".into()))
    }
}
