//! Enriched, viewer-relative shapes returned to callers.
//!
//! These are the only owner fields a listing may expose; everything else on
//! [`Account`] stays inside the store.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::models::{Account, CommentParent, Video};
use crate::pagination::{total_pages, PageParams};

/// One page of a listing, shaped `{page, limit, totalPages, totalCount, items}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(params: &PageParams, total_count: u64, items: Vec<T>) -> Self {
        Self {
            page: params.page,
            limit: params.limit,
            total_pages: total_pages(total_count, params.limit),
            total_count,
            items,
        }
    }
}

/// Owner projection joined into feed items.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerCard {
    pub id: Uuid,
    pub display_name: String,
    pub handle: String,
    pub avatar: Option<String>,
}

impl From<&Account> for OwnerCard {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            display_name: account.display_name.clone(),
            handle: account.handle.clone(),
            avatar: account.avatar.clone(),
        }
    }
}

/// Owner projection for the video detail page, enriched with the viewer's
/// subscription state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelCard {
    #[serde(flatten)]
    pub owner: OwnerCard,
    pub subscribers_count: u64,
    pub is_subscribed: bool,
}

/// Comment as it appears in a comment feed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: Uuid,
    pub parent: CommentParent,
    pub content: String,
    pub owner: OwnerCard,
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Tweet as it appears in an owner's tweet feed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweetView {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub content: String,
    pub likes_count: u64,
    pub is_liked: bool,
    pub comments_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Single-video detail with channel and like enrichment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetail {
    #[serde(flatten)]
    pub video: Video,
    pub owner: ChannelCard,
    pub likes_count: u64,
    pub is_liked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Added,
    Removed,
}

/// Result of a presence flip on a relation collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleOutcome<T> {
    pub action: ToggleAction,
    pub record: Option<T>,
}

impl<T> ToggleOutcome<T> {
    pub fn added(record: T) -> Self {
        Self {
            action: ToggleAction::Added,
            record: Some(record),
        }
    }

    pub fn removed() -> Self {
        Self {
            action: ToggleAction::Removed,
            record: None,
        }
    }
}
