//! Entity store contract consumed by every service.
//!
//! The engine never talks to a concrete database; it is handed an
//! `Arc<dyn EntityStore>` and issues typed find / count / create / update /
//! delete calls against it. Anything that can filter, sort, skip/limit and
//! count can sit behind this trait. [`memory::InMemoryStore`] is the
//! in-process reference implementation.

pub mod memory;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::{
    Account, Comment, CommentParent, Like, LikeTarget, Playlist, Subscription, Tweet, Video,
};
use crate::pagination::SortSpec;

/// Store-layer failure. Propagated to callers unchanged; the service layer
/// never masks it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Filter for video listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoFilter {
    pub owner_id: Option<Uuid>,
    pub is_published: Option<bool>,
}

/// Filter for subscription listings: one side of the relation is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionFilter {
    ByChannel(Uuid),
    BySubscriber(Uuid),
}

#[async_trait::async_trait]
pub trait EntityStore: Send + Sync {
    // ------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------

    /// Insert an account; `None` when the handle or email is already taken.
    async fn insert_account(&self, account: Account) -> StoreResult<Option<Account>>;
    async fn account_by_id(&self, id: Uuid) -> StoreResult<Option<Account>>;
    async fn account_by_handle(&self, handle: &str) -> StoreResult<Option<Account>>;

    // ------------------------------------------------------------------
    // Videos
    // ------------------------------------------------------------------

    async fn insert_video(&self, video: Video) -> StoreResult<Video>;
    async fn video_by_id(&self, id: Uuid) -> StoreResult<Option<Video>>;
    /// Whole-document replace keyed by `video.id`.
    async fn update_video(&self, video: Video) -> StoreResult<bool>;
    async fn delete_video(&self, id: Uuid) -> StoreResult<bool>;
    async fn find_videos(
        &self,
        filter: VideoFilter,
        sort: &SortSpec,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<Video>>;
    async fn count_videos(&self, filter: VideoFilter) -> StoreResult<u64>;

    // ------------------------------------------------------------------
    // Tweets
    // ------------------------------------------------------------------

    async fn insert_tweet(&self, tweet: Tweet) -> StoreResult<Tweet>;
    async fn tweet_by_id(&self, id: Uuid) -> StoreResult<Option<Tweet>>;
    async fn update_tweet(&self, tweet: Tweet) -> StoreResult<bool>;
    async fn delete_tweet(&self, id: Uuid) -> StoreResult<bool>;
    async fn find_tweets_by_owner(
        &self,
        owner_id: Uuid,
        sort: &SortSpec,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<Tweet>>;
    async fn count_tweets_by_owner(&self, owner_id: Uuid) -> StoreResult<u64>;

    // ------------------------------------------------------------------
    // Comments
    // ------------------------------------------------------------------

    async fn insert_comment(&self, comment: Comment) -> StoreResult<Comment>;
    async fn comment_by_id(&self, id: Uuid) -> StoreResult<Option<Comment>>;
    async fn update_comment(&self, comment: Comment) -> StoreResult<bool>;
    async fn delete_comment(&self, id: Uuid) -> StoreResult<bool>;
    async fn find_comments(
        &self,
        parent: CommentParent,
        sort: &SortSpec,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<Comment>>;
    async fn count_comments(&self, parent: CommentParent) -> StoreResult<u64>;

    // ------------------------------------------------------------------
    // Likes
    // ------------------------------------------------------------------

    /// Insert guarded by the (liked_by, target) uniqueness invariant.
    /// `None` means the pair was already present; the check and the insert
    /// are atomic with respect to concurrent callers.
    async fn insert_like(&self, like: Like) -> StoreResult<Option<Like>>;
    async fn delete_like(&self, liked_by: Uuid, target: LikeTarget) -> StoreResult<bool>;
    async fn find_like(&self, liked_by: Uuid, target: LikeTarget) -> StoreResult<Option<Like>>;
    /// Existence probe capped at one record; listings use this instead of
    /// fetching the relation document.
    async fn like_exists(&self, liked_by: Uuid, target: LikeTarget) -> StoreResult<bool>;
    async fn count_likes(&self, target: LikeTarget) -> StoreResult<u64>;
    async fn likes_by_actor(&self, liked_by: Uuid) -> StoreResult<Vec<Like>>;

    // ------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------

    /// Insert guarded by the (subscriber, channel) uniqueness invariant;
    /// `None` on an already-present pair. Atomic like [`Self::insert_like`].
    async fn insert_subscription(&self, sub: Subscription) -> StoreResult<Option<Subscription>>;
    async fn delete_subscription(&self, subscriber_id: Uuid, channel_id: Uuid)
        -> StoreResult<bool>;
    async fn find_subscription(
        &self,
        subscriber_id: Uuid,
        channel_id: Uuid,
    ) -> StoreResult<Option<Subscription>>;
    async fn subscription_exists(
        &self,
        subscriber_id: Uuid,
        channel_id: Uuid,
    ) -> StoreResult<bool>;
    async fn find_subscriptions(
        &self,
        filter: SubscriptionFilter,
        sort: &SortSpec,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<Subscription>>;
    async fn count_subscriptions(&self, filter: SubscriptionFilter) -> StoreResult<u64>;

    // ------------------------------------------------------------------
    // Playlists
    // ------------------------------------------------------------------

    async fn insert_playlist(&self, playlist: Playlist) -> StoreResult<Playlist>;
    async fn playlist_by_id(&self, id: Uuid) -> StoreResult<Option<Playlist>>;
    async fn update_playlist(&self, playlist: Playlist) -> StoreResult<bool>;
    async fn delete_playlist(&self, id: Uuid) -> StoreResult<bool>;
    async fn playlists_by_owner(&self, owner_id: Uuid) -> StoreResult<Vec<Playlist>>;
}
