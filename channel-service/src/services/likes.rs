//! Like toggles: a presence flip over the like relation collection.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::models::{Like, LikeTarget};
use crate::domain::views::{ToggleAction, ToggleOutcome};
use crate::error::{ServiceError, ServiceResult};
use crate::store::EntityStore;

#[derive(Clone)]
pub struct LikeService {
    store: Arc<dyn EntityStore>,
}

impl LikeService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn toggle_video_like(
        &self,
        actor_id: Uuid,
        video_id: Uuid,
    ) -> ServiceResult<ToggleOutcome<Like>> {
        if self.store.video_by_id(video_id).await?.is_none() {
            return Err(ServiceError::NotFound("video not found".into()));
        }
        self.toggle(actor_id, LikeTarget::Video(video_id)).await
    }

    pub async fn toggle_comment_like(
        &self,
        actor_id: Uuid,
        comment_id: Uuid,
    ) -> ServiceResult<ToggleOutcome<Like>> {
        if self.store.comment_by_id(comment_id).await?.is_none() {
            return Err(ServiceError::NotFound("comment not found".into()));
        }
        self.toggle(actor_id, LikeTarget::Comment(comment_id)).await
    }

    pub async fn toggle_tweet_like(
        &self,
        actor_id: Uuid,
        tweet_id: Uuid,
    ) -> ServiceResult<ToggleOutcome<Like>> {
        if self.store.tweet_by_id(tweet_id).await?.is_none() {
            return Err(ServiceError::NotFound("tweet not found".into()));
        }
        self.toggle(actor_id, LikeTarget::Tweet(tweet_id)).await
    }

    /// The actor's like records pointing at videos, newest first.
    pub async fn liked_videos(&self, actor_id: Uuid) -> ServiceResult<Vec<Like>> {
        let likes = self.store.likes_by_actor(actor_id).await?;
        Ok(likes
            .into_iter()
            .filter(|l| matches!(l.target, LikeTarget::Video(_)))
            .collect())
    }

    /// Presence flip: delete when present, insert when absent. The insert is
    /// guarded by the store's (actor, target) uniqueness; a lost race
    /// re-resolves to the surviving record instead of erroring.
    async fn toggle(
        &self,
        actor_id: Uuid,
        target: LikeTarget,
    ) -> ServiceResult<ToggleOutcome<Like>> {
        if self.store.delete_like(actor_id, target).await? {
            debug!(%actor_id, ?target, "like removed");
            return Ok(ToggleOutcome::removed());
        }

        match self.store.insert_like(Like::new(actor_id, target)).await? {
            Some(like) => {
                debug!(%actor_id, ?target, "like added");
                Ok(ToggleOutcome::added(like))
            }
            None => {
                // A concurrent toggle inserted first; the pair is present
                // either way, so report the record that won.
                let record = self.store.find_like(actor_id, target).await?;
                Ok(ToggleOutcome {
                    action: ToggleAction::Added,
                    record,
                })
            }
        }
    }
}
