use diesel::prelude::*;
use fl_core::item::{ItemAttributes, QrState};
use fl_core::{ActorId, Item, ItemId, OrderId, QrPayload};

use crate::db::schema::t_item;

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = t_item)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ItemRow {
    pub id: String,
    pub item_code: String,
    pub order_id: Option<String>,
    pub sku: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub style: Option<String>,
    pub brand: Option<String>,
    pub qr_payload: Option<String>,
    pub is_printed: bool,
    pub printed_at: Option<i64>,
    pub printed_by: Option<String>,
    pub created_at: i64,
}

impl ItemRow {
    pub fn from_item(item: &Item, created_at: i64) -> Self {
        let attrs = &item.attributes;
        Self {
            id: item.id.to_string(),
            item_code: item.item_code.clone(),
            order_id: item.order_id.as_ref().map(|o| o.to_string()),
            sku: attrs.sku.clone(),
            size: attrs.size.clone(),
            color: attrs.color.clone(),
            style: attrs.style.clone(),
            brand: attrs.brand.clone(),
            qr_payload: item.qr.payload.as_ref().map(|p| p.to_string()),
            is_printed: item.qr.printed,
            printed_at: item.qr.printed_at_ms,
            printed_by: item.qr.printed_by.as_ref().map(|a| a.to_string()),
            created_at,
        }
    }
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: ItemId::from(row.id),
            item_code: row.item_code,
            order_id: row.order_id.map(OrderId::from),
            attributes: ItemAttributes {
                sku: row.sku,
                size: row.size,
                color: row.color,
                style: row.style,
                brand: row.brand,
            },
            qr: QrState {
                payload: row.qr_payload.map(QrPayload::new),
                printed: row.is_printed,
                printed_at_ms: row.printed_at,
                printed_by: row.printed_by.map(ActorId::from),
            },
        }
    }
}
