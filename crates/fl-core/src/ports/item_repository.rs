use async_trait::async_trait;

use super::errors::ItemRepositoryError;
use crate::ids::{ActorId, ItemId, OrderId};
use crate::item::Item;
use crate::label::QrPayload;

/// A freshly generated payload for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadAssignment {
    pub item_id: ItemId,
    pub payload: QrPayload,
}

/// Per-id result of a bulk payload write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistOutcome {
    pub item_id: ItemId,
    pub result: Result<(), ItemRepositoryError>,
}

impl PersistOutcome {
    pub fn ok(item_id: ItemId) -> Self {
        Self {
            item_id,
            result: Ok(()),
        }
    }

    pub fn failed(item_id: ItemId, error: ItemRepositoryError) -> Self {
        Self {
            item_id,
            result: Err(error),
        }
    }
}

/// Backend persistence for items.
///
/// Both bulk writes are idempotent: assigning a payload to an item that
/// already has one, or marking an already printed item, is a no-op.
#[async_trait]
pub trait ItemRepositoryPort: Send + Sync {
    /// Items, optionally scoped to one order, oldest first.
    async fn list_items(&self, order_id: Option<&OrderId>)
        -> Result<Vec<Item>, ItemRepositoryError>;

    async fn persist_payloads(
        &self,
        assignments: &[PayloadAssignment],
    ) -> Result<Vec<PersistOutcome>, ItemRepositoryError>;

    /// Returns how many items changed state.
    async fn mark_printed(
        &self,
        item_ids: &[ItemId],
        actor: &ActorId,
        printed_at_ms: i64,
    ) -> Result<usize, ItemRepositoryError>;
}
