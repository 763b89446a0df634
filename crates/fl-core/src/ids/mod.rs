//! ID type wrappers for type safety.

mod id_macro;

use id_macro::impl_id;
use serde::{Deserialize, Serialize};

/// Backend identity of a production item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Purchase/production order an item was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

/// Operator recorded as the one who printed a label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl_id!(ItemId, OrderId, ActorId);
