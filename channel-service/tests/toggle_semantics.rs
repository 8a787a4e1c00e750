mod common;

use uuid::Uuid;

use channel_service::domain::models::LikeTarget;
use channel_service::domain::views::ToggleAction;
use channel_service::error::ServiceError;
use channel_service::services::likes::LikeService;
use channel_service::services::subscriptions::SubscriptionService;
use channel_service::store::EntityStore;

#[tokio::test]
async fn like_toggle_alternates_between_present_and_absent() {
    let store = common::store();
    let owner = common::account(&store, "creator").await;
    let viewer = common::account(&store, "viewer").await;
    let tweet = common::tweet(&store, owner.id, "hello", 0).await;

    let likes = LikeService::new(common::as_store(&store));
    let target = LikeTarget::Tweet(tweet.id);

    let first = likes.toggle_tweet_like(viewer.id, tweet.id).await.unwrap();
    assert_eq!(first.action, ToggleAction::Added);
    assert!(first.record.is_some());
    assert_eq!(store.count_likes(target).await.unwrap(), 1);

    let second = likes.toggle_tweet_like(viewer.id, tweet.id).await.unwrap();
    assert_eq!(second.action, ToggleAction::Removed);
    assert!(second.record.is_none());
    assert_eq!(store.count_likes(target).await.unwrap(), 0);

    // third call reproduces the first
    let third = likes.toggle_tweet_like(viewer.id, tweet.id).await.unwrap();
    assert_eq!(third.action, ToggleAction::Added);
    assert_eq!(store.count_likes(target).await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_like_toggles_never_leave_duplicates() {
    let store = common::store();
    let owner = common::account(&store, "creator").await;
    let viewer = common::account(&store, "viewer").await;
    let video = common::video(&store, owner.id, "clip", 0, true).await;

    let likes = LikeService::new(common::as_store(&store));
    let mut handles = Vec::new();
    for _ in 0..32 {
        let likes = likes.clone();
        let (viewer_id, video_id) = (viewer.id, video.id);
        handles.push(tokio::spawn(async move {
            likes.toggle_video_like(viewer_id, video_id).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let count = store
        .count_likes(LikeTarget::Video(video.id))
        .await
        .unwrap();
    assert!(count <= 1, "uniqueness violated: {count} like records");
}

#[tokio::test]
async fn liking_a_missing_target_is_not_found() {
    let store = common::store();
    let viewer = common::account(&store, "viewer").await;
    let likes = LikeService::new(common::as_store(&store));

    for result in [
        likes.toggle_video_like(viewer.id, Uuid::new_v4()).await,
        likes.toggle_comment_like(viewer.id, Uuid::new_v4()).await,
        likes.toggle_tweet_like(viewer.id, Uuid::new_v4()).await,
    ] {
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}

#[tokio::test]
async fn liked_videos_only_returns_video_targets() {
    let store = common::store();
    let owner = common::account(&store, "creator").await;
    let viewer = common::account(&store, "viewer").await;
    let video = common::video(&store, owner.id, "clip", 0, true).await;
    let tweet = common::tweet(&store, owner.id, "hi", 0).await;

    let likes = LikeService::new(common::as_store(&store));
    likes.toggle_video_like(viewer.id, video.id).await.unwrap();
    likes.toggle_tweet_like(viewer.id, tweet.id).await.unwrap();

    let liked = likes.liked_videos(viewer.id).await.unwrap();
    assert_eq!(liked.len(), 1);
    assert_eq!(liked[0].target, LikeTarget::Video(video.id));
}

#[tokio::test]
async fn subscription_toggle_alternates() {
    let store = common::store();
    let channel = common::account(&store, "channel").await;
    let subscriber = common::account(&store, "subscriber").await;

    let subs = SubscriptionService::new(common::as_store(&store));

    let first = subs
        .toggle_subscription(subscriber.id, channel.id)
        .await
        .unwrap();
    assert_eq!(first.action, ToggleAction::Added);
    assert!(store
        .subscription_exists(subscriber.id, channel.id)
        .await
        .unwrap());

    let second = subs
        .toggle_subscription(subscriber.id, channel.id)
        .await
        .unwrap();
    assert_eq!(second.action, ToggleAction::Removed);
    assert!(!store
        .subscription_exists(subscriber.id, channel.id)
        .await
        .unwrap());
}

#[tokio::test]
async fn self_subscription_is_rejected_without_mutation() {
    let store = common::store();
    let account = common::account(&store, "loner").await;
    let subs = SubscriptionService::new(common::as_store(&store));

    let result = subs.toggle_subscription(account.id, account.id).await;
    assert!(matches!(result, Err(ServiceError::Conflict(_))));
    assert!(!store
        .subscription_exists(account.id, account.id)
        .await
        .unwrap());
}

#[tokio::test]
async fn subscribing_to_a_missing_channel_is_not_found() {
    let store = common::store();
    let subscriber = common::account(&store, "subscriber").await;
    let subs = SubscriptionService::new(common::as_store(&store));

    let result = subs.toggle_subscription(subscriber.id, Uuid::new_v4()).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}
