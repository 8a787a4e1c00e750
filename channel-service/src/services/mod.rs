pub mod accounts;
pub mod comments;
pub mod feed;
pub mod likes;
pub mod ownership;
pub mod playlists;
pub mod subscriptions;
pub mod tweets;
pub mod videos;
