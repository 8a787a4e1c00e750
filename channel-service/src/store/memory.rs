//! In-process reference implementation of [`EntityStore`].
//!
//! Uniqueness-guarded inserts (accounts, likes, subscriptions) run their
//! check and write under a single write lock, so two concurrent toggles on
//! the same pair can never both insert.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::models::{
    Account, Comment, CommentParent, Like, LikeTarget, Playlist, Subscription, Tweet, Video,
};
use crate::pagination::{SortDirection, SortSpec};
use crate::store::{EntityStore, StoreResult, SubscriptionFilter, VideoFilter};

#[derive(Default)]
struct Collections {
    accounts: HashMap<Uuid, Account>,
    videos: HashMap<Uuid, Video>,
    tweets: HashMap<Uuid, Tweet>,
    comments: HashMap<Uuid, Comment>,
    likes: HashMap<Uuid, Like>,
    subscriptions: HashMap<Uuid, Subscription>,
    playlists: HashMap<Uuid, Playlist>,
}

#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Comparable value extracted from a document for one sort field. A single
/// listing always produces a single variant, so cross-variant ordering never
/// comes into play.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Time(DateTime<Utc>),
    Int(i64),
    Text(String),
}

/// Sort, then apply the skip/limit window. Ties on the sort field break on
/// the document id so page boundaries stay deterministic.
fn page_window<T>(
    mut items: Vec<T>,
    sort: &SortSpec,
    skip: u64,
    limit: u64,
    key: impl Fn(&T, &str) -> SortKey,
    id: impl Fn(&T) -> Uuid,
) -> Vec<T> {
    items.sort_by(|a, b| {
        let ord = key(a, &sort.field)
            .cmp(&key(b, &sort.field))
            .then_with(|| id(a).cmp(&id(b)));
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    items
        .into_iter()
        .skip(skip as usize)
        .take(limit as usize)
        .collect()
}

fn video_key(video: &Video, field: &str) -> SortKey {
    match field {
        "updatedAt" => SortKey::Time(video.updated_at),
        "views" => SortKey::Int(video.views),
        "title" => SortKey::Text(video.title.clone()),
        _ => SortKey::Time(video.created_at),
    }
}

fn matches_video(video: &Video, filter: VideoFilter) -> bool {
    filter.owner_id.map_or(true, |owner| video.owner_id == owner)
        && filter
            .is_published
            .map_or(true, |published| video.is_published == published)
}

fn matches_subscription(sub: &Subscription, filter: SubscriptionFilter) -> bool {
    match filter {
        SubscriptionFilter::ByChannel(channel) => sub.channel_id == channel,
        SubscriptionFilter::BySubscriber(subscriber) => sub.subscriber_id == subscriber,
    }
}

#[async_trait::async_trait]
impl EntityStore for InMemoryStore {
    // Accounts

    async fn insert_account(&self, account: Account) -> StoreResult<Option<Account>> {
        let mut inner = self.inner.write().await;
        let taken = inner
            .accounts
            .values()
            .any(|a| a.handle == account.handle || a.email == account.email);
        if taken {
            return Ok(None);
        }
        inner.accounts.insert(account.id, account.clone());
        Ok(Some(account))
    }

    async fn account_by_id(&self, id: Uuid) -> StoreResult<Option<Account>> {
        Ok(self.inner.read().await.accounts.get(&id).cloned())
    }

    async fn account_by_handle(&self, handle: &str) -> StoreResult<Option<Account>> {
        Ok(self
            .inner
            .read()
            .await
            .accounts
            .values()
            .find(|a| a.handle == handle)
            .cloned())
    }

    // Videos

    async fn insert_video(&self, video: Video) -> StoreResult<Video> {
        self.inner.write().await.videos.insert(video.id, video.clone());
        Ok(video)
    }

    async fn video_by_id(&self, id: Uuid) -> StoreResult<Option<Video>> {
        Ok(self.inner.read().await.videos.get(&id).cloned())
    }

    async fn update_video(&self, video: Video) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.videos.get_mut(&video.id) {
            Some(slot) => {
                *slot = video;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_video(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.inner.write().await.videos.remove(&id).is_some())
    }

    async fn find_videos(
        &self,
        filter: VideoFilter,
        sort: &SortSpec,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<Video>> {
        let matched: Vec<Video> = self
            .inner
            .read()
            .await
            .videos
            .values()
            .filter(|v| matches_video(v, filter))
            .cloned()
            .collect();
        Ok(page_window(matched, sort, skip, limit, video_key, |v| v.id))
    }

    async fn count_videos(&self, filter: VideoFilter) -> StoreResult<u64> {
        Ok(self
            .inner
            .read()
            .await
            .videos
            .values()
            .filter(|v| matches_video(v, filter))
            .count() as u64)
    }

    // Tweets

    async fn insert_tweet(&self, tweet: Tweet) -> StoreResult<Tweet> {
        self.inner.write().await.tweets.insert(tweet.id, tweet.clone());
        Ok(tweet)
    }

    async fn tweet_by_id(&self, id: Uuid) -> StoreResult<Option<Tweet>> {
        Ok(self.inner.read().await.tweets.get(&id).cloned())
    }

    async fn update_tweet(&self, tweet: Tweet) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.tweets.get_mut(&tweet.id) {
            Some(slot) => {
                *slot = tweet;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_tweet(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.inner.write().await.tweets.remove(&id).is_some())
    }

    async fn find_tweets_by_owner(
        &self,
        owner_id: Uuid,
        sort: &SortSpec,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<Tweet>> {
        let matched: Vec<Tweet> = self
            .inner
            .read()
            .await
            .tweets
            .values()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect();
        Ok(page_window(
            matched,
            sort,
            skip,
            limit,
            |t, field| match field {
                "updatedAt" => SortKey::Time(t.updated_at),
                _ => SortKey::Time(t.created_at),
            },
            |t| t.id,
        ))
    }

    async fn count_tweets_by_owner(&self, owner_id: Uuid) -> StoreResult<u64> {
        Ok(self
            .inner
            .read()
            .await
            .tweets
            .values()
            .filter(|t| t.owner_id == owner_id)
            .count() as u64)
    }

    // Comments

    async fn insert_comment(&self, comment: Comment) -> StoreResult<Comment> {
        self.inner
            .write()
            .await
            .comments
            .insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn comment_by_id(&self, id: Uuid) -> StoreResult<Option<Comment>> {
        Ok(self.inner.read().await.comments.get(&id).cloned())
    }

    async fn update_comment(&self, comment: Comment) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.comments.get_mut(&comment.id) {
            Some(slot) => {
                *slot = comment;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_comment(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.inner.write().await.comments.remove(&id).is_some())
    }

    async fn find_comments(
        &self,
        parent: CommentParent,
        sort: &SortSpec,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<Comment>> {
        let matched: Vec<Comment> = self
            .inner
            .read()
            .await
            .comments
            .values()
            .filter(|c| c.parent == parent)
            .cloned()
            .collect();
        Ok(page_window(
            matched,
            sort,
            skip,
            limit,
            |c, field| match field {
                "updatedAt" => SortKey::Time(c.updated_at),
                _ => SortKey::Time(c.created_at),
            },
            |c| c.id,
        ))
    }

    async fn count_comments(&self, parent: CommentParent) -> StoreResult<u64> {
        Ok(self
            .inner
            .read()
            .await
            .comments
            .values()
            .filter(|c| c.parent == parent)
            .count() as u64)
    }

    // Likes

    async fn insert_like(&self, like: Like) -> StoreResult<Option<Like>> {
        let mut inner = self.inner.write().await;
        let present = inner
            .likes
            .values()
            .any(|l| l.liked_by == like.liked_by && l.target == like.target);
        if present {
            return Ok(None);
        }
        inner.likes.insert(like.id, like.clone());
        Ok(Some(like))
    }

    async fn delete_like(&self, liked_by: Uuid, target: LikeTarget) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        let found = inner
            .likes
            .values()
            .find(|l| l.liked_by == liked_by && l.target == target)
            .map(|l| l.id);
        match found {
            Some(id) => {
                inner.likes.remove(&id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_like(&self, liked_by: Uuid, target: LikeTarget) -> StoreResult<Option<Like>> {
        Ok(self
            .inner
            .read()
            .await
            .likes
            .values()
            .find(|l| l.liked_by == liked_by && l.target == target)
            .cloned())
    }

    async fn like_exists(&self, liked_by: Uuid, target: LikeTarget) -> StoreResult<bool> {
        Ok(self
            .inner
            .read()
            .await
            .likes
            .values()
            .any(|l| l.liked_by == liked_by && l.target == target))
    }

    async fn count_likes(&self, target: LikeTarget) -> StoreResult<u64> {
        Ok(self
            .inner
            .read()
            .await
            .likes
            .values()
            .filter(|l| l.target == target)
            .count() as u64)
    }

    async fn likes_by_actor(&self, liked_by: Uuid) -> StoreResult<Vec<Like>> {
        let mut likes: Vec<Like> = self
            .inner
            .read()
            .await
            .likes
            .values()
            .filter(|l| l.liked_by == liked_by)
            .cloned()
            .collect();
        likes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(likes)
    }

    // Subscriptions

    async fn insert_subscription(&self, sub: Subscription) -> StoreResult<Option<Subscription>> {
        let mut inner = self.inner.write().await;
        let present = inner
            .subscriptions
            .values()
            .any(|s| s.subscriber_id == sub.subscriber_id && s.channel_id == sub.channel_id);
        if present {
            return Ok(None);
        }
        inner.subscriptions.insert(sub.id, sub.clone());
        Ok(Some(sub))
    }

    async fn delete_subscription(
        &self,
        subscriber_id: Uuid,
        channel_id: Uuid,
    ) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        let found = inner
            .subscriptions
            .values()
            .find(|s| s.subscriber_id == subscriber_id && s.channel_id == channel_id)
            .map(|s| s.id);
        match found {
            Some(id) => {
                inner.subscriptions.remove(&id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_subscription(
        &self,
        subscriber_id: Uuid,
        channel_id: Uuid,
    ) -> StoreResult<Option<Subscription>> {
        Ok(self
            .inner
            .read()
            .await
            .subscriptions
            .values()
            .find(|s| s.subscriber_id == subscriber_id && s.channel_id == channel_id)
            .cloned())
    }

    async fn subscription_exists(
        &self,
        subscriber_id: Uuid,
        channel_id: Uuid,
    ) -> StoreResult<bool> {
        Ok(self
            .inner
            .read()
            .await
            .subscriptions
            .values()
            .any(|s| s.subscriber_id == subscriber_id && s.channel_id == channel_id))
    }

    async fn find_subscriptions(
        &self,
        filter: SubscriptionFilter,
        sort: &SortSpec,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<Subscription>> {
        let matched: Vec<Subscription> = self
            .inner
            .read()
            .await
            .subscriptions
            .values()
            .filter(|s| matches_subscription(s, filter))
            .cloned()
            .collect();
        Ok(page_window(
            matched,
            sort,
            skip,
            limit,
            |s, _| SortKey::Time(s.created_at),
            |s| s.id,
        ))
    }

    async fn count_subscriptions(&self, filter: SubscriptionFilter) -> StoreResult<u64> {
        Ok(self
            .inner
            .read()
            .await
            .subscriptions
            .values()
            .filter(|s| matches_subscription(s, filter))
            .count() as u64)
    }

    // Playlists

    async fn insert_playlist(&self, playlist: Playlist) -> StoreResult<Playlist> {
        self.inner
            .write()
            .await
            .playlists
            .insert(playlist.id, playlist.clone());
        Ok(playlist)
    }

    async fn playlist_by_id(&self, id: Uuid) -> StoreResult<Option<Playlist>> {
        Ok(self.inner.read().await.playlists.get(&id).cloned())
    }

    async fn update_playlist(&self, playlist: Playlist) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.playlists.get_mut(&playlist.id) {
            Some(slot) => {
                *slot = playlist;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_playlist(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.inner.write().await.playlists.remove(&id).is_some())
    }

    async fn playlists_by_owner(&self, owner_id: Uuid) -> StoreResult<Vec<Playlist>> {
        let mut playlists: Vec<Playlist> = self
            .inner
            .read()
            .await
            .playlists
            .values()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect();
        playlists.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(playlists)
    }
}
