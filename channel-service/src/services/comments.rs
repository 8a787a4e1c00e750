//! Comment mutations. Update is owner-only; delete also admits the owner of
//! the parent video or tweet, so channel owners can moderate their threads.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::domain::models::{Comment, CommentParent};
use crate::error::{ServiceError, ServiceResult};
use crate::services::ownership::{can_mutate, ensure_owner};
use crate::store::EntityStore;

#[derive(Clone)]
pub struct CommentService {
    store: Arc<dyn EntityStore>,
}

impl CommentService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn add(
        &self,
        actor_id: Uuid,
        parent: CommentParent,
        content: &str,
    ) -> ServiceResult<Comment> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ServiceError::InvalidInput("content is required".into()));
        }
        match parent {
            CommentParent::Video(id) => {
                if self.store.video_by_id(id).await?.is_none() {
                    return Err(ServiceError::NotFound("video not found".into()));
                }
            }
            CommentParent::Tweet(id) => {
                if self.store.tweet_by_id(id).await?.is_none() {
                    return Err(ServiceError::NotFound("tweet not found".into()));
                }
            }
        }

        let now = Utc::now();
        let comment = Comment {
            id: Uuid::new_v4(),
            owner_id: actor_id,
            parent,
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        Ok(self.store.insert_comment(comment).await?)
    }

    pub async fn update(
        &self,
        actor_id: Uuid,
        comment_id: Uuid,
        content: &str,
    ) -> ServiceResult<Comment> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ServiceError::InvalidInput("content is required".into()));
        }
        let mut comment = self.require(comment_id).await?;
        ensure_owner(actor_id, comment.owner_id, "comment")?;
        comment.content = content.to_string();
        comment.updated_at = Utc::now();
        self.store.update_comment(comment.clone()).await?;
        Ok(comment)
    }

    /// Delete by the comment's owner, or by the owner of the parent
    /// video/tweet the comment hangs off.
    pub async fn delete(&self, actor_id: Uuid, comment_id: Uuid) -> ServiceResult<()> {
        let comment = self.require(comment_id).await?;
        if !can_mutate(actor_id, comment.owner_id) && !self.owns_parent(actor_id, &comment).await? {
            return Err(ServiceError::Forbidden(
                "you are not authorized to delete this comment".into(),
            ));
        }
        self.store.delete_comment(comment_id).await?;
        debug!(%comment_id, %actor_id, "comment deleted");
        Ok(())
    }

    async fn owns_parent(&self, actor_id: Uuid, comment: &Comment) -> ServiceResult<bool> {
        let parent_owner = match comment.parent {
            CommentParent::Video(id) => {
                self.store.video_by_id(id).await?.map(|v| v.owner_id)
            }
            CommentParent::Tweet(id) => {
                self.store.tweet_by_id(id).await?.map(|t| t.owner_id)
            }
        };
        Ok(parent_owner.map_or(false, |owner| can_mutate(actor_id, owner)))
    }

    async fn require(&self, comment_id: Uuid) -> ServiceResult<Comment> {
        self.store
            .comment_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("comment not found".into()))
    }
}
