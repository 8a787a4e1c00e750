use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity - a channel identity with a globally unique handle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub handle: String,
    pub display_name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Video entity - owned by exactly one account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    /// Hosted media URL (upload handled by an external collaborator)
    pub video_file: String,
    pub thumbnail: String,
    pub duration_secs: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Tweet entity - short text post owned by exactly one account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The single entity a comment is attached to. Exactly one of video or
/// tweet, enforced by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum CommentParent {
    Video(Uuid),
    Tweet(Uuid),
}

/// Comment entity - attached to exactly one video or tweet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub parent: CommentParent,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What a like points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum LikeTarget {
    Video(Uuid),
    Comment(Uuid),
    Tweet(Uuid),
}

/// Like relation - existence IS the state; at most one per
/// (liked_by, target) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub id: Uuid,
    pub liked_by: Uuid,
    pub target: LikeTarget,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(liked_by: Uuid, target: LikeTarget) -> Self {
        Self {
            id: Uuid::new_v4(),
            liked_by,
            target,
            created_at: Utc::now(),
        }
    }
}

/// Subscription relation - at most one per (subscriber, channel) pair;
/// subscriber and channel are never the same account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub subscriber_id: Uuid,
    pub channel_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    pub fn new(subscriber_id: Uuid, channel_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            subscriber_id,
            channel_id,
            created_at: Utc::now(),
        }
    }
}

/// Playlist entity - ordered, duplicate-free set of video references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub video_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
