use serde::{Deserialize, Serialize};

use super::ItemAttributes;
use crate::ids::{ActorId, ItemId, OrderId};
use crate::label::QrPayload;

/// QR/print lifecycle of a single item.
///
/// `NoPayload -> HasPayload -> Printed`. `Printed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QrLifecycle {
    NoPayload,
    HasPayload,
    Printed,
}

/// QR state of an item, mutated only by the label workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrState {
    #[serde(default, rename = "qrCode")]
    pub payload: Option<QrPayload>,
    #[serde(default, rename = "qrCodePrinted")]
    pub printed: bool,
    #[serde(default)]
    pub printed_at_ms: Option<i64>,
    #[serde(default)]
    pub printed_by: Option<ActorId>,
}

/// A unit of production inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub item_code: String,
    #[serde(default)]
    pub order_id: Option<OrderId>,
    #[serde(flatten)]
    pub attributes: ItemAttributes,
    #[serde(flatten)]
    pub qr: QrState,
}

impl Item {
    pub fn new(id: ItemId, item_code: impl Into<String>) -> Self {
        Self {
            id,
            item_code: item_code.into(),
            order_id: None,
            attributes: ItemAttributes::default(),
            qr: QrState::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: ItemAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_order(mut self, order_id: OrderId) -> Self {
        self.order_id = Some(order_id);
        self
    }

    pub fn with_payload(mut self, payload: QrPayload) -> Self {
        self.qr.payload = Some(payload);
        self
    }

    pub fn lifecycle(&self) -> QrLifecycle {
        if self.qr.printed {
            QrLifecycle::Printed
        } else if self.qr.payload.is_some() {
            QrLifecycle::HasPayload
        } else {
            QrLifecycle::NoPayload
        }
    }

    pub fn has_payload(&self) -> bool {
        self.qr.payload.is_some()
    }

    pub fn is_printed(&self) -> bool {
        self.qr.printed
    }

    pub fn payload(&self) -> Option<&QrPayload> {
        self.qr.payload.as_ref()
    }

    /// Stores a freshly generated payload.
    ///
    /// Returns `false` without touching the item when it already holds one;
    /// payloads are never replaced.
    pub fn assign_payload(&mut self, payload: QrPayload) -> bool {
        if self.qr.payload.is_some() {
            return false;
        }
        self.qr.payload = Some(payload);
        true
    }

    /// Moves a `HasPayload` item to `Printed`.
    ///
    /// Returns `false` for items that are already printed or have nothing to
    /// print; those are left unchanged.
    pub fn mark_printed(&mut self, actor: &ActorId, at_ms: i64) -> bool {
        if self.lifecycle() != QrLifecycle::HasPayload {
            return false;
        }
        self.qr.printed = true;
        self.qr.printed_at_ms = Some(at_ms);
        self.qr.printed_by = Some(actor.clone());
        true
    }
}
