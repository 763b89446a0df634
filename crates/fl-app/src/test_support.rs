//! Hand-written port fakes shared by the use-case unit tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use fl_core::item::ItemAttributes;
use fl_core::ports::*;
use fl_core::{ActorId, Item, ItemId, LabelImage, OrderId, QrPayload, RenderOptions};

pub fn item(id: &str, sku: &str, size: &str, color: &str) -> Item {
    Item::new(ItemId::from(id), format!("CODE-{id}")).with_attributes(ItemAttributes {
        sku: Some(sku.to_string()),
        size: Some(size.to_string()),
        color: Some(color.to_string()),
        style: Some("Regular".to_string()),
        brand: None,
    })
}

pub fn encoded(id: &str, sku: &str, size: &str, color: &str) -> Item {
    item(id, sku, size, color).with_payload(QrPayload::new(id))
}

#[derive(Default)]
pub struct FakeItemRepository {
    pub items: Mutex<Vec<Item>>,
    pub persist_failures: HashSet<String>,
    pub fail_persist_call: bool,
    pub fail_mark_printed: bool,
    pub persisted: Mutex<Vec<PayloadAssignment>>,
    pub marked: Mutex<Vec<(Vec<ItemId>, ActorId, i64)>>,
}

impl FakeItemRepository {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
            ..Default::default()
        }
    }

    pub fn marked_ids(&self) -> Vec<Vec<String>> {
        self.marked
            .lock()
            .unwrap()
            .iter()
            .map(|(ids, _, _)| ids.iter().map(|id| id.to_string()).collect())
            .collect()
    }
}

#[async_trait]
impl ItemRepositoryPort for FakeItemRepository {
    async fn list_items(
        &self,
        order_id: Option<&OrderId>,
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        let items = self.items.lock().unwrap();
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
        if self.fail_persist_call {
            return Err(ItemRepositoryError::Storage("backend offline".to_string()));
        }
        self.persisted
            .lock()
            .unwrap()
            .extend(assignments.iter().cloned());

        let mut items = self.items.lock().unwrap();
        Ok(assignments
            .iter()
            .map(|assignment| {
                if self.persist_failures.contains(assignment.item_id.as_str()) {
                    return PersistOutcome::failed(
                        assignment.item_id.clone(),
                        ItemRepositoryError::Storage("write rejected".to_string()),
                    );
                }
                match items.iter_mut().find(|i| i.id == assignment.item_id) {
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
        self.marked
            .lock()
            .unwrap()
            .push((item_ids.to_vec(), actor.clone(), printed_at_ms));
        if self.fail_mark_printed {
            return Err(ItemRepositoryError::Storage("backend offline".to_string()));
        }
        let mut items = self.items.lock().unwrap();
        let mut changed = 0;
        for item in items.iter_mut().filter(|item| item_ids.contains(&item.id)) {
            if item.mark_printed(actor, printed_at_ms) {
                changed += 1;
            }
        }
        Ok(changed)
    }
}

/// Encoder that echoes the content, fails on listed contents and records
/// how many calls overlap.
#[derive(Default)]
pub struct FakeEncoder {
    pub failing: HashSet<String>,
    pub delay: Option<Duration>,
    pub calls: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl FakeEncoder {
    pub fn failing_on(contents: &[&str]) -> Self {
        Self {
            failing: contents.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QrEncoderPort for FakeEncoder {
    async fn encode(&self, content: &str) -> Result<QrPayload, EncodingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(content) {
            return Err(EncodingError::DataTooLong(content.to_string()));
        }
        Ok(QrPayload::new(content))
    }
}

/// Renderer producing the payload bytes as the "image".
#[derive(Default)]
pub struct FakeRenderer {
    pub failing: HashSet<String>,
    pub calls: AtomicUsize,
}

impl FakeRenderer {
    pub fn failing_on(payloads: &[&str]) -> Self {
        Self {
            failing: payloads.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl LabelRendererPort for FakeRenderer {
    async fn render(
        &self,
        payload: &QrPayload,
        _options: &RenderOptions,
    ) -> Result<LabelImage, RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(payload.as_str()) {
            return Err(RenderError::InvalidPayload(payload.to_string()));
        }
        Ok(LabelImage::png(payload.as_str().as_bytes().to_vec()))
    }
}

#[derive(Default)]
pub struct PrintLog {
    pub documents: Vec<String>,
    pub printed: usize,
    pub closed: usize,
}

#[derive(Default)]
pub struct FakePrintSurfacePort {
    pub unavailable: bool,
    pub log: Arc<Mutex<PrintLog>>,
}

impl FakePrintSurfacePort {
    pub fn blocked() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }
}

struct FakeSurface {
    log: Arc<Mutex<PrintLog>>,
}

#[async_trait]
impl PrintSurface for FakeSurface {
    async fn write(&mut self, document: &str) -> Result<(), PrintSurfaceError> {
        self.log.lock().unwrap().documents.push(document.to_string());
        Ok(())
    }

    async fn print(&mut self) -> Result<(), PrintSurfaceError> {
        self.log.lock().unwrap().printed += 1;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), PrintSurfaceError> {
        self.log.lock().unwrap().closed += 1;
        Ok(())
    }
}

#[async_trait]
impl PrintSurfacePort for FakePrintSurfacePort {
    async fn open(&self, _title: &str) -> Result<Box<dyn PrintSurface>, PrintSurfaceError> {
        if self.unavailable {
            return Err(PrintSurfaceError::Unavailable("popup blocked".to_string()));
        }
        Ok(Box::new(FakeSurface {
            log: self.log.clone(),
        }))
    }
}

#[derive(Default)]
pub struct FakeSink {
    pub failing: HashSet<String>,
    pub saved: Mutex<Vec<String>>,
}

#[async_trait]
impl LabelSinkPort for FakeSink {
    async fn save(&self, file_name: &str, _image: &LabelImage) -> Result<(), LabelSinkError> {
        if self.failing.contains(file_name) {
            return Err(LabelSinkError::Save {
                file_name: file_name.to_string(),
                reason: "disk full".to_string(),
            });
        }
        self.saved.lock().unwrap().push(file_name.to_string());
        Ok(())
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn levels(&self) -> Vec<NoticeLevel> {
        self.notices.lock().unwrap().iter().map(|n| n.level).collect()
    }
}

impl NotifierPort for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
