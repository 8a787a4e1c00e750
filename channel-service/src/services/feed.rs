//! Feed aggregation: every paginated, joined, viewer-enriched read path.
//!
//! Each listing is the same composition: filter, sort, skip/limit, join the
//! owner projection, probe the viewer's relation records (existence check,
//! never a full fetch), then derive booleans and counts.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::config::PaginationConfig;
use crate::domain::models::{CommentParent, LikeTarget, Subscription, Video};
use crate::domain::views::{ChannelCard, CommentView, OwnerCard, Page, TweetView, VideoDetail};
use crate::error::{ServiceError, ServiceResult};
use crate::pagination::{PageParams, PageRequest};
use crate::store::{EntityStore, SubscriptionFilter, VideoFilter};

#[derive(Clone)]
pub struct FeedAggregator {
    store: Arc<dyn EntityStore>,
    pagination: PaginationConfig,
}

impl FeedAggregator {
    pub fn new(store: Arc<dyn EntityStore>, pagination: PaginationConfig) -> Self {
        Self { store, pagination }
    }

    fn params(&self, req: &PageRequest) -> PageParams {
        PageParams::from_request(req, &self.pagination)
    }

    /// One page of comments under a video or tweet, newest first by default,
    /// each joined with its owner card and the viewer's like state.
    ///
    /// An empty page is reported as NotFound. That matches the public API
    /// this engine backs, which treats "no comments" and "page out of range"
    /// the same way.
    pub async fn list_comments(
        &self,
        parent: CommentParent,
        viewer_id: Uuid,
        req: &PageRequest,
    ) -> ServiceResult<Page<CommentView>> {
        let params = self.params(req);
        let comments = self
            .store
            .find_comments(parent, &params.sort, params.skip(), u64::from(params.limit))
            .await?;
        if comments.is_empty() {
            return Err(ServiceError::NotFound("no comments found".into()));
        }

        let mut items = Vec::with_capacity(comments.len());
        for comment in comments {
            // Owner join is inner: a comment whose account is gone drops out.
            let Some(account) = self.store.account_by_id(comment.owner_id).await? else {
                continue;
            };
            let is_liked = self
                .store
                .like_exists(viewer_id, LikeTarget::Comment(comment.id))
                .await?;
            items.push(CommentView {
                id: comment.id,
                parent: comment.parent,
                content: comment.content,
                owner: OwnerCard::from(&account),
                is_liked,
                created_at: comment.created_at,
                updated_at: comment.updated_at,
            });
        }

        let total = self.store.count_comments(parent).await?;
        debug!(?parent, total, page = params.page, "comments page assembled");
        Ok(Page::new(&params, total, items))
    }

    /// One page of an account's tweets with like/comment enrichment relative
    /// to the viewer.
    pub async fn list_tweets_for_owner(
        &self,
        owner_id: Uuid,
        viewer_id: Uuid,
        req: &PageRequest,
    ) -> ServiceResult<Page<TweetView>> {
        if self.store.account_by_id(owner_id).await?.is_none() {
            return Err(ServiceError::NotFound("user not found".into()));
        }

        let params = self.params(req);
        let tweets = self
            .store
            .find_tweets_by_owner(owner_id, &params.sort, params.skip(), u64::from(params.limit))
            .await?;
        if tweets.is_empty() {
            return Err(ServiceError::NotFound("no tweets found".into()));
        }

        let mut items = Vec::with_capacity(tweets.len());
        for tweet in tweets {
            let target = LikeTarget::Tweet(tweet.id);
            let likes_count = self.store.count_likes(target).await?;
            let is_liked = self.store.like_exists(viewer_id, target).await?;
            let comments_count = self
                .store
                .count_comments(CommentParent::Tweet(tweet.id))
                .await?;
            items.push(TweetView {
                id: tweet.id,
                owner_id: tweet.owner_id,
                content: tweet.content,
                likes_count,
                is_liked,
                comments_count,
                created_at: tweet.created_at,
                updated_at: tweet.updated_at,
            });
        }

        let total = self.store.count_tweets_by_owner(owner_id).await?;
        Ok(Page::new(&params, total, items))
    }

    /// Public listing of a channel's published videos. No viewer-relative
    /// fields; safe to serve unauthenticated. An empty page is a valid,
    /// empty result here.
    pub async fn list_videos_for_handle(
        &self,
        handle: &str,
        req: &PageRequest,
    ) -> ServiceResult<Page<Video>> {
        let Some(account) = self.store.account_by_handle(handle).await? else {
            return Err(ServiceError::NotFound("user not found".into()));
        };

        let params = self.params(req);
        let filter = VideoFilter {
            owner_id: Some(account.id),
            is_published: Some(true),
        };
        let videos = self
            .store
            .find_videos(filter, &params.sort, params.skip(), u64::from(params.limit))
            .await?;
        let total = self.store.count_videos(filter).await?;
        Ok(Page::new(&params, total, videos))
    }

    /// Single-video detail enriched with the owning channel (subscriber
    /// count, viewer's subscription state) and the video's like state.
    pub async fn video_detail(&self, video_id: Uuid, viewer_id: Uuid) -> ServiceResult<VideoDetail> {
        let Some(video) = self.store.video_by_id(video_id).await? else {
            return Err(ServiceError::NotFound("video not found".into()));
        };
        let Some(account) = self.store.account_by_id(video.owner_id).await? else {
            return Err(ServiceError::NotFound("channel not found".into()));
        };

        let subscribers_count = self
            .store
            .count_subscriptions(SubscriptionFilter::ByChannel(account.id))
            .await?;
        let is_subscribed = self
            .store
            .subscription_exists(viewer_id, account.id)
            .await?;
        let target = LikeTarget::Video(video.id);
        let likes_count = self.store.count_likes(target).await?;
        let is_liked = self.store.like_exists(viewer_id, target).await?;

        Ok(VideoDetail {
            owner: ChannelCard {
                owner: OwnerCard::from(&account),
                subscribers_count,
                is_subscribed,
            },
            likes_count,
            is_liked,
            video,
        })
    }

    /// Paged subscriber list of a channel. Plain relation records, no
    /// cross-join enrichment.
    pub async fn list_subscribers(
        &self,
        channel_id: Uuid,
        req: &PageRequest,
    ) -> ServiceResult<Page<Subscription>> {
        self.list_relation(
            SubscriptionFilter::ByChannel(channel_id),
            req,
            "no subscribers found",
        )
        .await
    }

    /// Paged list of channels an account subscribes to.
    pub async fn list_subscriptions(
        &self,
        subscriber_id: Uuid,
        req: &PageRequest,
    ) -> ServiceResult<Page<Subscription>> {
        self.list_relation(
            SubscriptionFilter::BySubscriber(subscriber_id),
            req,
            "no subscriptions found",
        )
        .await
    }

    async fn list_relation(
        &self,
        filter: SubscriptionFilter,
        req: &PageRequest,
        empty_msg: &str,
    ) -> ServiceResult<Page<Subscription>> {
        let params = self.params(req);
        let subs = self
            .store
            .find_subscriptions(filter, &params.sort, params.skip(), u64::from(params.limit))
            .await?;
        if subs.is_empty() {
            return Err(ServiceError::NotFound(empty_msg.into()));
        }
        let total = self.store.count_subscriptions(filter).await?;
        Ok(Page::new(&params, total, subs))
    }
}
