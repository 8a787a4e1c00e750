//! Core engine for a channel/content platform: feed aggregation with
//! viewer-relative enrichment, idempotent like/subscribe toggles, ownership
//! guards and shared pagination, all over an injected entity store.
//!
//! Transport, auth and media upload live in the gateway; this crate only
//! issues typed queries against [`store::EntityStore`].

pub mod config;
pub mod domain;
pub mod error;
pub mod pagination;
pub mod services;
pub mod store;
