//! Process-local item store.
//!
//! Backs tests and dry runs. Applies the same typed transitions as the
//! SQLite store, so both honor the same idempotence rules.

use async_trait::async_trait;
use tokio::sync::RwLock;

use fl_core::ports::{ItemRepositoryError, ItemRepositoryPort, PayloadAssignment, PersistOutcome};
use fl_core::{ActorId, Item, ItemId, OrderId};

#[derive(Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub async fn snapshot(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }
}

#[async_trait]
impl ItemRepositoryPort for InMemoryItemRepository {
    async fn list_items(
        &self,
        order_id: Option<&OrderId>,
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|item| order_id.is_none() || item.order_id.as_ref() == order_id)
            .cloned()
            .collect())
    }

    async fn persist_payloads(
        &self,
        assignments: &[PayloadAssignment],
    ) -> Result<Vec<PersistOutcome>, ItemRepositoryError> {
        let mut items = self.items.write().await;
        Ok(assignments
            .iter()
            .map(|assignment| {
                match items.iter_mut().find(|item| item.id == assignment.item_id) {
                    Some(item) => {
                        item.assign_payload(assignment.payload.clone());
                        PersistOutcome::ok(assignment.item_id.clone())
                    }
                    None => PersistOutcome::failed(
                        assignment.item_id.clone(),
                        ItemRepositoryError::NotFound(assignment.item_id.to_string()),
                    ),
                }
            })
            .collect())
    }

    async fn mark_printed(
        &self,
        item_ids: &[ItemId],
        actor: &ActorId,
        printed_at_ms: i64,
    ) -> Result<usize, ItemRepositoryError> {
        let mut items = self.items.write().await;
        let mut changed = 0;
        for item in items.iter_mut().filter(|item| item_ids.contains(&item.id)) {
            if item.mark_printed(actor, printed_at_ms) {
                changed += 1;
            }
        }
        Ok(changed)
    }
}
