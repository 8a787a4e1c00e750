//! Tweet mutations: create, update, delete, all owner-gated.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::models::Tweet;
use crate::error::{ServiceError, ServiceResult};
use crate::services::ownership::ensure_owner;
use crate::store::EntityStore;

#[derive(Clone)]
pub struct TweetService {
    store: Arc<dyn EntityStore>,
}

impl TweetService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, owner_id: Uuid, content: &str) -> ServiceResult<Tweet> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ServiceError::InvalidInput("content is required".into()));
        }
        let now = Utc::now();
        let tweet = Tweet {
            id: Uuid::new_v4(),
            owner_id,
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        Ok(self.store.insert_tweet(tweet).await?)
    }

    pub async fn update(
        &self,
        actor_id: Uuid,
        tweet_id: Uuid,
        content: &str,
    ) -> ServiceResult<Tweet> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ServiceError::InvalidInput("content is required".into()));
        }
        let mut tweet = self.require(tweet_id).await?;
        ensure_owner(actor_id, tweet.owner_id, "tweet")?;
        tweet.content = content.to_string();
        tweet.updated_at = Utc::now();
        self.store.update_tweet(tweet.clone()).await?;
        Ok(tweet)
    }

    pub async fn delete(&self, actor_id: Uuid, tweet_id: Uuid) -> ServiceResult<()> {
        let tweet = self.require(tweet_id).await?;
        ensure_owner(actor_id, tweet.owner_id, "tweet")?;
        self.store.delete_tweet(tweet_id).await?;
        Ok(())
    }

    async fn require(&self, tweet_id: Uuid) -> ServiceResult<Tweet> {
        self.store
            .tweet_by_id(tweet_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("tweet not found".into()))
    }
}
