#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use channel_service::domain::models::{Account, Comment, CommentParent, Tweet, Video};
use channel_service::store::memory::InMemoryStore;
use channel_service::store::EntityStore;

/// Opt-in test logging: `RUST_LOG=debug cargo test -- --nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn store() -> Arc<InMemoryStore> {
    init_tracing();
    Arc::new(InMemoryStore::new())
}

pub fn as_store(store: &Arc<InMemoryStore>) -> Arc<dyn EntityStore> {
    Arc::clone(store) as Arc<dyn EntityStore>
}

pub async fn account(store: &Arc<InMemoryStore>, handle: &str) -> Account {
    store
        .insert_account(Account {
            id: Uuid::new_v4(),
            handle: handle.to_string(),
            display_name: format!("{handle} display"),
            email: format!("{handle}@example.com"),
            avatar: Some(format!("https://media.example/{handle}.png")),
            cover_image: None,
            created_at: Utc::now(),
        })
        .await
        .expect("insert account")
        .expect("handle free")
}

/// Seed a video with a created_at offset so listings have a deterministic
/// order.
pub async fn video(
    store: &Arc<InMemoryStore>,
    owner_id: Uuid,
    title: &str,
    offset_secs: i64,
    published: bool,
) -> Video {
    let at = Utc::now() + Duration::seconds(offset_secs);
    store
        .insert_video(Video {
            id: Uuid::new_v4(),
            owner_id,
            title: title.to_string(),
            description: "description".to_string(),
            video_file: "https://media.example/clip.mp4".to_string(),
            thumbnail: "https://media.example/thumb.jpg".to_string(),
            duration_secs: 42.0,
            views: 0,
            is_published: published,
            created_at: at,
            updated_at: at,
        })
        .await
        .expect("insert video")
}

pub async fn tweet(
    store: &Arc<InMemoryStore>,
    owner_id: Uuid,
    content: &str,
    offset_secs: i64,
) -> Tweet {
    let at = Utc::now() + Duration::seconds(offset_secs);
    store
        .insert_tweet(Tweet {
            id: Uuid::new_v4(),
            owner_id,
            content: content.to_string(),
            created_at: at,
            updated_at: at,
        })
        .await
        .expect("insert tweet")
}

pub async fn comment(
    store: &Arc<InMemoryStore>,
    owner_id: Uuid,
    parent: CommentParent,
    content: &str,
    offset_secs: i64,
) -> Comment {
    let at = Utc::now() + Duration::seconds(offset_secs);
    store
        .insert_comment(Comment {
            id: Uuid::new_v4(),
            owner_id,
            parent,
            content: content.to_string(),
            created_at: at,
            updated_at: at,
        })
        .await
        .expect("insert comment")
}
