//! Action-level errors and per-item failure records.

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::ids::ItemId;

/// User-triggered actions of the label workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Generate,
    Print,
    Download,
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ActionKind::Generate => "generate",
            ActionKind::Print => "print",
            ActionKind::Download => "download",
        })
    }
}

/// Conditions that end an action without doing its work.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelActionError {
    #[error("no variants selected")]
    EmptySelection,

    #[error("none of the selected items has a QR code yet")]
    NoPayloadsToPrint,

    #[error("no label could be rendered")]
    NothingRendered,

    #[error("print surface unavailable: {0}")]
    PrintSurfaceUnavailable(String),

    #[error("{0} is already running")]
    ActionInProgress(ActionKind),

    #[error("item backend failed: {0}")]
    Repository(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    EncodingFailure,
    PersistenceFailure,
    RenderFailure,
    SinkFailure,
}

/// One item that did not make it through a batch. Never aborts the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    pub item_id: ItemId,
    pub kind: FailureKind,
    pub reason: String,
}

impl ItemFailure {
    pub fn new(item_id: ItemId, kind: FailureKind, reason: impl Into<String>) -> Self {
        Self {
            item_id,
            kind,
            reason: reason.into(),
        }
    }
}
