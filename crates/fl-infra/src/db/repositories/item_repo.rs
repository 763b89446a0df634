use anyhow::Context;
use async_trait::async_trait;
use diesel::prelude::*;
use tracing::{debug, info};

use fl_core::ports::{ItemRepositoryError, ItemRepositoryPort, PayloadAssignment, PersistOutcome};
use fl_core::{ActorId, Item, ItemId, OrderId};

use crate::db::{models::ItemRow, pool::DbPool, schema::t_item};

pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Seeds the store from an upstream export.
    ///
    /// Items whose id already exists are left untouched, so re-importing the
    /// same file never resets payloads or printed flags. `created_at` counts up
    /// from `imported_at_ms`, or from just past the newest stored row when that
    /// is later, so a batch always lists after every earlier import. Returns
    /// how many rows were inserted.
    pub fn import_items(&self, items: &[Item], imported_at_ms: i64) -> anyhow::Result<usize> {
        let mut conn = self.pool.get().context("failed to get database connection")?;

        let inserted = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
            let newest: Option<i64> = t_item::table
                .select(diesel::dsl::max(t_item::created_at))
                .first(conn)?;
            let base = newest.map_or(imported_at_ms, |n| imported_at_ms.max(n + 1));

            let mut inserted = 0;
            for (offset, item) in items.iter().enumerate() {
                let row = ItemRow::from_item(item, base + offset as i64);
                inserted += diesel::insert_or_ignore_into(t_item::table)
                    .values(&row)
                    .execute(conn)?;
            }
            Ok(inserted)
        })?;

        info!(total = items.len(), inserted, "Imported items");
        Ok(inserted)
    }

    fn item_exists(conn: &mut SqliteConnection, item_id: &ItemId) -> QueryResult<bool> {
        diesel::select(diesel::dsl::exists(
            t_item::table.filter(t_item::id.eq(item_id.as_str())),
        ))
        .get_result(conn)
    }

    fn persist_one(conn: &mut SqliteConnection, assignment: &PayloadAssignment) -> PersistOutcome {
        let item_id = &assignment.item_id;
        let updated = diesel::update(
            t_item::table
                .filter(t_item::id.eq(item_id.as_str()))
                .filter(t_item::qr_payload.is_null()),
        )
        .set(t_item::qr_payload.eq(assignment.payload.as_str()))
        .execute(conn);

        match updated {
            Ok(0) => match Self::item_exists(conn, item_id) {
                // already encoded: keep the stored payload
                Ok(true) => PersistOutcome::ok(item_id.clone()),
                Ok(false) => PersistOutcome::failed(
                    item_id.clone(),
                    ItemRepositoryError::NotFound(item_id.to_string()),
                ),
                Err(e) => PersistOutcome::failed(
                    item_id.clone(),
                    ItemRepositoryError::Storage(e.to_string()),
                ),
            },
            Ok(_) => PersistOutcome::ok(item_id.clone()),
            Err(e) => PersistOutcome::failed(
                item_id.clone(),
                ItemRepositoryError::Storage(e.to_string()),
            ),
        }
    }
}

#[async_trait]
impl ItemRepositoryPort for DieselItemRepository {
    async fn list_items(
        &self,
        order_id: Option<&OrderId>,
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| ItemRepositoryError::Storage(e.to_string()))?;

        let mut query = t_item::table
            .select(ItemRow::as_select())
            .order((t_item::created_at.asc(), t_item::id.asc()))
            .into_boxed();
        if let Some(order_id) = order_id {
            query = query.filter(t_item::order_id.eq(order_id.as_str().to_string()));
        }

        let rows = query
            .load::<ItemRow>(&mut conn)
            .map_err(|e| ItemRepositoryError::Storage(e.to_string()))?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn persist_payloads(
        &self,
        assignments: &[PayloadAssignment],
    ) -> Result<Vec<PersistOutcome>, ItemRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| ItemRepositoryError::Storage(e.to_string()))?;

        let outcomes: Vec<PersistOutcome> = assignments
            .iter()
            .map(|assignment| Self::persist_one(&mut conn, assignment))
            .collect();

        debug!(
            requested = assignments.len(),
            failed = outcomes.iter().filter(|o| o.result.is_err()).count(),
            "Persisted QR payloads"
        );
        Ok(outcomes)
    }

    async fn mark_printed(
        &self,
        item_ids: &[ItemId],
        actor: &ActorId,
        printed_at_ms: i64,
    ) -> Result<usize, ItemRepositoryError> {
        if item_ids.is_empty() {
            return Ok(0);
        }
        let mut conn = self
            .pool
            .get()
            .map_err(|e| ItemRepositoryError::Storage(e.to_string()))?;

        let ids: Vec<&str> = item_ids.iter().map(ItemId::as_str).collect();
        let changed = diesel::update(
            t_item::table
                .filter(t_item::id.eq_any(ids))
                .filter(t_item::is_printed.eq(false))
                .filter(t_item::qr_payload.is_not_null()),
        )
        .set((
            t_item::is_printed.eq(true),
            t_item::printed_at.eq(printed_at_ms),
            t_item::printed_by.eq(actor.as_str()),
        ))
        .execute(&mut conn)
        .map_err(|e| ItemRepositoryError::Storage(e.to_string()))?;

        debug!(requested = item_ids.len(), changed, "Marked items printed");
        Ok(changed)
    }
}
