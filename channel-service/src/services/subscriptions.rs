//! Subscription toggle: the same presence flip as likes, with the
//! self-subscription rejection in front of it.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::domain::models::Subscription;
use crate::domain::views::{ToggleAction, ToggleOutcome};
use crate::error::{ServiceError, ServiceResult};
use crate::store::EntityStore;

#[derive(Clone)]
pub struct SubscriptionService {
    store: Arc<dyn EntityStore>,
}

impl SubscriptionService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn toggle_subscription(
        &self,
        subscriber_id: Uuid,
        channel_id: Uuid,
    ) -> ServiceResult<ToggleOutcome<Subscription>> {
        if subscriber_id == channel_id {
            return Err(ServiceError::Conflict(
                "you cannot subscribe to your own channel".into(),
            ));
        }
        if self.store.account_by_id(channel_id).await?.is_none() {
            return Err(ServiceError::NotFound("channel not found".into()));
        }

        if self
            .store
            .delete_subscription(subscriber_id, channel_id)
            .await?
        {
            debug!(%subscriber_id, %channel_id, "unsubscribed");
            return Ok(ToggleOutcome::removed());
        }

        match self
            .store
            .insert_subscription(Subscription::new(subscriber_id, channel_id))
            .await?
        {
            Some(sub) => {
                debug!(%subscriber_id, %channel_id, "subscribed");
                Ok(ToggleOutcome::added(sub))
            }
            None => {
                // Lost the insert race; the pair is present regardless, so
                // report the record that won.
                let record = self
                    .store
                    .find_subscription(subscriber_id, channel_id)
                    .await?;
                Ok(ToggleOutcome {
                    action: ToggleAction::Added,
                    record,
                })
            }
        }
    }
}
