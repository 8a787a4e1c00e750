mod common;

use uuid::Uuid;

use channel_service::domain::models::CommentParent;
use channel_service::error::ServiceError;
use channel_service::services::comments::CommentService;
use channel_service::services::playlists::PlaylistService;
use channel_service::services::tweets::TweetService;
use channel_service::services::videos::{VideoService, VideoUpdate};
use channel_service::store::EntityStore;

#[tokio::test]
async fn comment_update_is_owner_only() {
    let store = common::store();
    let owner = common::account(&store, "owner").await;
    let stranger = common::account(&store, "stranger").await;
    let video = common::video(&store, owner.id, "clip", 0, true).await;
    let comment =
        common::comment(&store, owner.id, CommentParent::Video(video.id), "hi", 0).await;

    let comments = CommentService::new(common::as_store(&store));
    let denied = comments.update(stranger.id, comment.id, "edited").await;
    assert!(matches!(denied, Err(ServiceError::Forbidden(_))));

    let updated = comments.update(owner.id, comment.id, "edited").await.unwrap();
    assert_eq!(updated.content, "edited");
}

#[tokio::test]
async fn comment_delete_admits_owner_and_parent_owner_only() {
    let store = common::store();
    let channel = common::account(&store, "channel").await;
    let commenter = common::account(&store, "commenter").await;
    let stranger = common::account(&store, "stranger").await;
    let video = common::video(&store, channel.id, "clip", 0, true).await;
    let parent = CommentParent::Video(video.id);

    let comments = CommentService::new(common::as_store(&store));

    // stranger: neither comment owner nor parent owner
    let c1 = common::comment(&store, commenter.id, parent, "one", 0).await;
    let denied = comments.delete(stranger.id, c1.id).await;
    assert!(matches!(denied, Err(ServiceError::Forbidden(_))));

    // comment owner may delete
    comments.delete(commenter.id, c1.id).await.unwrap();
    assert!(store.comment_by_id(c1.id).await.unwrap().is_none());

    // video owner may moderate someone else's comment
    let c2 = common::comment(&store, commenter.id, parent, "two", 1).await;
    comments.delete(channel.id, c2.id).await.unwrap();
    assert!(store.comment_by_id(c2.id).await.unwrap().is_none());
}

#[tokio::test]
async fn tweet_parent_owner_may_delete_comments_under_their_tweet() {
    let store = common::store();
    let author = common::account(&store, "author").await;
    let commenter = common::account(&store, "commenter").await;
    let tweet = common::tweet(&store, author.id, "hot take", 0).await;
    let comment = common::comment(
        &store,
        commenter.id,
        CommentParent::Tweet(tweet.id),
        "reply",
        0,
    )
    .await;

    CommentService::new(common::as_store(&store))
        .delete(author.id, comment.id)
        .await
        .unwrap();
    assert!(store.comment_by_id(comment.id).await.unwrap().is_none());
}

#[tokio::test]
async fn tweet_update_and_delete_are_owner_gated() {
    let store = common::store();
    let owner = common::account(&store, "owner").await;
    let stranger = common::account(&store, "stranger").await;
    let tweet = common::tweet(&store, owner.id, "original", 0).await;

    let tweets = TweetService::new(common::as_store(&store));
    assert!(matches!(
        tweets.update(stranger.id, tweet.id, "hijacked").await,
        Err(ServiceError::Forbidden(_))
    ));
    assert!(matches!(
        tweets.delete(stranger.id, tweet.id).await,
        Err(ServiceError::Forbidden(_))
    ));

    let updated = tweets.update(owner.id, tweet.id, "revised").await.unwrap();
    assert_eq!(updated.content, "revised");
    tweets.delete(owner.id, tweet.id).await.unwrap();
    assert!(store.tweet_by_id(tweet.id).await.unwrap().is_none());
}

#[tokio::test]
async fn video_mutations_are_owner_gated() {
    let store = common::store();
    let owner = common::account(&store, "owner").await;
    let stranger = common::account(&store, "stranger").await;
    let video = common::video(&store, owner.id, "clip", 0, true).await;

    let videos = VideoService::new(common::as_store(&store));
    let update = VideoUpdate {
        title: Some("new title".into()),
        ..Default::default()
    };
    assert!(matches!(
        videos.update_details(stranger.id, video.id, update.clone()).await,
        Err(ServiceError::Forbidden(_))
    ));
    assert!(matches!(
        videos.toggle_publish(stranger.id, video.id).await,
        Err(ServiceError::Forbidden(_))
    ));
    assert!(matches!(
        videos.delete(stranger.id, video.id).await,
        Err(ServiceError::Forbidden(_))
    ));

    let updated = videos.update_details(owner.id, video.id, update).await.unwrap();
    assert_eq!(updated.title, "new title");

    let unpublished = videos.toggle_publish(owner.id, video.id).await.unwrap();
    assert!(!unpublished.is_published);

    videos.delete(owner.id, video.id).await.unwrap();
    assert!(store.video_by_id(video.id).await.unwrap().is_none());
}

#[tokio::test]
async fn playlist_mutations_are_owner_gated() {
    let store = common::store();
    let owner = common::account(&store, "owner").await;
    let stranger = common::account(&store, "stranger").await;
    let video = common::video(&store, owner.id, "clip", 0, true).await;

    let playlists = PlaylistService::new(common::as_store(&store));
    let playlist = playlists
        .create(owner.id, "favorites", "the good ones", None)
        .await
        .unwrap();

    assert!(matches!(
        playlists.add_video(stranger.id, playlist.id, video.id).await,
        Err(ServiceError::Forbidden(_))
    ));
    playlists
        .add_video(owner.id, playlist.id, video.id)
        .await
        .unwrap();

    assert!(matches!(
        playlists.remove_video(stranger.id, playlist.id, video.id).await,
        Err(ServiceError::Forbidden(_))
    ));
    assert!(matches!(
        playlists.delete(stranger.id, playlist.id).await,
        Err(ServiceError::Forbidden(_))
    ));

    playlists.delete(owner.id, playlist.id).await.unwrap();
    assert!(store.playlist_by_id(playlist.id).await.unwrap().is_none());
}

#[tokio::test]
async fn mutating_missing_entities_is_not_found() {
    let store = common::store();
    let actor = common::account(&store, "actor").await;

    assert!(matches!(
        CommentService::new(common::as_store(&store))
            .update(actor.id, Uuid::new_v4(), "x")
            .await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        TweetService::new(common::as_store(&store))
            .delete(actor.id, Uuid::new_v4())
            .await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        VideoService::new(common::as_store(&store))
            .toggle_publish(actor.id, Uuid::new_v4())
            .await,
        Err(ServiceError::NotFound(_))
    ));
}
