//! End-to-end label workflow over the real adapters: SQLite store, QR
//! encoder and renderer, HTML sheet output and PNG files.

use std::path::Path;
use std::sync::{Arc, Mutex};

use fablabel::commands::{format_listing, selection_from_keys};
use fl_app::{AppDeps, LabelActions, LabelRequest, LabelSettings};
use fl_core::item::ItemAttributes;
use fl_core::ports::{ClockPort, ItemRepositoryPort, Notice, NoticeLevel, NotifierPort};
use fl_core::{
    ActorId, AppConfig, Item, ItemId, LabelActionError, OrderId, QrLifecycle, VariantSelection,
};
use fl_infra::db::pool::init_db_pool;
use fl_infra::{DieselItemRepository, QrCodeEncoder, QrImageRenderer};
use fl_platform::{FsLabelSink, HtmlFilePrintSurface};
use tempfile::TempDir;

const NOW: i64 = 1_767_225_600_000;

#[derive(Default)]
struct RecordingNotifier(Mutex<Vec<Notice>>);

impl NotifierPort for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.0.lock().unwrap().push(notice);
    }
}

impl RecordingNotifier {
    fn last(&self) -> Notice {
        self.0.lock().unwrap().last().cloned().unwrap()
    }
}

struct FixedClock;

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        NOW
    }
}

struct App {
    actions: LabelActions,
    repo: Arc<DieselItemRepository>,
    surface: Arc<HtmlFilePrintSurface>,
    notifier: Arc<RecordingNotifier>,
    _dir: TempDir,
}

fn item(n: usize, sku: &str, size: &str, color: Option<&str>) -> Item {
    Item::new(ItemId::from(format!("item-{n}")), format!("PO-9-{n:04}"))
        .with_order(OrderId::from("PO-9"))
        .with_attributes(ItemAttributes {
            sku: Some(sku.to_string()),
            size: Some(size.to_string()),
            color: color.map(str::to_string),
            style: Some("Slim".to_string()),
            brand: Some("Northwind".to_string()),
        })
}

fn app() -> App {
    let dir = TempDir::new().unwrap();
    let pool = init_db_pool(dir.path().join("items.db").to_str().unwrap()).unwrap();
    let repo = Arc::new(DieselItemRepository::new(pool));
    repo.import_items(
        &[
            item(1, "DEN-100", "M", Some("Indigo")),
            item(2, "DEN-100", "M", Some("Indigo")),
            item(3, "DEN-100", "L", Some("Indigo")),
            item(4, "TEE-200", "S", None),
            item(5, "TEE-200", "S", Some("  ")),
        ],
        0,
    )
    .unwrap();

    let out = dir.path().join("out");
    let surface = Arc::new(HtmlFilePrintSurface::new(&out));
    let notifier = Arc::new(RecordingNotifier::default());
    let deps = AppDeps {
        item_repo: repo.clone(),
        encoder: Arc::new(QrCodeEncoder::default()),
        renderer: Arc::new(QrImageRenderer::default()),
        print_surface: surface.clone(),
        label_sink: Arc::new(FsLabelSink::new(&out)),
        notifier: notifier.clone(),
        clock: Arc::new(FixedClock),
    };
    let mut config = AppConfig::default();
    config.label.title = "PO-9 labels".to_string();
    let actions = LabelActions::from_deps(
        deps,
        LabelSettings::from_config(&config, ActorId::from("line-3")),
    );

    App {
        actions,
        repo,
        surface,
        notifier,
        _dir: dir,
    }
}

fn request(keys: &[&str]) -> LabelRequest {
    let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    LabelRequest::new(None, selection_from_keys(&keys).unwrap())
}

#[tokio::test]
async fn test_listing_groups_and_collapses_missing_colors() {
    let app = app();

    let listing = app.actions.list_variants(None, "").await.unwrap();
    let keys: Vec<String> = listing.groups.iter().map(|g| g.key.to_string()).collect();
    assert_eq!(
        keys,
        vec![
            "DEN-100|M|Indigo",
            "DEN-100|L|Indigo",
            "TEE-200|S|Unknown Color",
        ]
    );
    assert_eq!(listing.groups[2].total_count, 2);

    let filtered = app.actions.list_variants(None, "tee").await.unwrap();
    let table = format_listing(&filtered);
    assert!(table.contains("TEE-200|S|Unknown Color"));
    assert!(!table.contains("DEN-100"));
    assert!(table.contains("1 variants, 2 items (0 printed, 2 unprinted, 2 without QR code)"));
}

#[tokio::test]
async fn test_generate_print_download_round() {
    let app = app();
    let den_m = "DEN-100|M|Indigo";

    // printing before generating is refused
    assert_eq!(
        app.actions.print(&request(&[den_m])).await,
        Err(LabelActionError::NoPayloadsToPrint)
    );
    assert_eq!(app.notifier.last().level, NoticeLevel::Warning);

    let generated = app.actions.generate(&request(&[den_m])).await.unwrap();
    assert_eq!(generated.generated.len(), 2);
    assert_eq!(app.notifier.last().level, NoticeLevel::Success);

    let again = app.actions.generate(&request(&[den_m])).await.unwrap();
    assert!(again.nothing_to_generate());
    assert_eq!(app.notifier.last().level, NoticeLevel::Info);

    let printed = app.actions.print(&request(&[den_m])).await.unwrap();
    assert_eq!(printed.newly_marked, 2);
    assert_eq!(printed.variant_count, 1);

    let sheets = app.surface.written_sheets();
    assert_eq!(sheets.len(), 1);
    let html = std::fs::read_to_string(&sheets[0]).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>PO-9 labels</h1>"));
    assert!(html.contains("Generated: 2026-01-01 00:00:00 UTC"));
    assert!(html.contains("2 QR codes for 1 variants"));
    assert_eq!(html.matches("data:image/png;base64,").count(), 2);
    assert!(html.contains("<div class=\"item-id\">item-1</div>"));

    let items = app.repo.list_items(None).await.unwrap();
    let states: Vec<QrLifecycle> = items.iter().map(Item::lifecycle).collect();
    assert_eq!(
        states,
        vec![
            QrLifecycle::Printed,
            QrLifecycle::Printed,
            QrLifecycle::NoPayload,
            QrLifecycle::NoPayload,
            QrLifecycle::NoPayload,
        ]
    );
    assert_eq!(items[0].qr.printed_by, Some(ActorId::from("line-3")));
    assert_eq!(items[0].qr.printed_at_ms, Some(NOW));

    let downloaded = app.actions.download(&request(&[den_m])).await.unwrap();
    let names: Vec<&str> = downloaded.saved.iter().map(|s| s.file_name.as_str()).collect();
    assert_eq!(names, vec!["PO-9-0001.png", "PO-9-0002.png"]);
    let out = sheets[0].parent().unwrap();
    assert_png(&out.join("PO-9-0001.png"));
}

#[tokio::test]
async fn test_select_all_over_filtered_view_toggles() {
    let app = app();
    let listing = app.actions.list_variants(None, "den").await.unwrap();

    let mut selection = VariantSelection::new();
    selection.select_all(listing.visible.iter());
    assert_eq!(selection.len(), 2);

    let report = app
        .actions
        .generate(&LabelRequest::new(Some(OrderId::from("PO-9")), selection.clone()))
        .await
        .unwrap();
    assert_eq!(report.generated.len(), 3);

    selection.select_all(listing.visible.iter());
    assert!(selection.is_empty());
    assert_eq!(
        app.actions.generate(&LabelRequest::new(None, selection)).await,
        Err(LabelActionError::EmptySelection)
    );
}

fn assert_png(path: &Path) {
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn test_in_memory_store_generates_with_base_url() {
    let dir = TempDir::new().unwrap();
    let repo = Arc::new(fl_infra::InMemoryItemRepository::new(
        (1..=30).map(|n| item(n, "DEN-100", "M", Some("Indigo"))).collect(),
    ));
    let deps = AppDeps {
        item_repo: repo.clone(),
        encoder: Arc::new(QrCodeEncoder::default()),
        renderer: Arc::new(QrImageRenderer::default()),
        print_surface: Arc::new(HtmlFilePrintSurface::new(dir.path())),
        label_sink: Arc::new(FsLabelSink::new(dir.path())),
        notifier: Arc::new(RecordingNotifier::default()),
        clock: Arc::new(FixedClock),
    };
    let mut config = AppConfig::default();
    config.qr.payload_base_url = "https://factory.example.com/".to_string();
    config.qr.max_concurrency = 3;
    let actions = LabelActions::from_deps(
        deps,
        LabelSettings::from_config(&config, ActorId::from("line-3")),
    );

    let report = actions
        .generate(&request(&["DEN-100|M|Indigo"]))
        .await
        .unwrap();

    assert_eq!(report.generated.len(), 30);
    let items = repo.snapshot().await;
    assert_eq!(
        items[0].payload().map(|p| p.as_str()),
        Some("https://factory.example.com/items/item-1")
    );
}

#[tokio::test]
async fn test_label_too_small_for_symbol_is_skipped_not_printed() {
    let dir = TempDir::new().unwrap();
    let payload = fl_core::QrPayload::new("https://factory.example.com/items/item-000000000001");
    let repo = Arc::new(fl_infra::InMemoryItemRepository::new(vec![item(
        1,
        "DEN-100",
        "M",
        Some("Indigo"),
    )
    .with_payload(payload)]));
    let deps = AppDeps {
        item_repo: repo.clone(),
        encoder: Arc::new(QrCodeEncoder::default()),
        renderer: Arc::new(QrImageRenderer::default()),
        print_surface: Arc::new(HtmlFilePrintSurface::new(dir.path())),
        label_sink: Arc::new(FsLabelSink::new(dir.path())),
        notifier: Arc::new(RecordingNotifier::default()),
        clock: Arc::new(FixedClock),
    };
    let mut config = AppConfig::default();
    config.label.image_size = 20;
    config.label.margin = 1;
    let actions = LabelActions::from_deps(
        deps,
        LabelSettings::from_config(&config, ActorId::from("line-3")),
    );

    let result = actions.print(&request(&["DEN-100|M|Indigo"])).await;

    assert_eq!(result.unwrap_err(), LabelActionError::NothingRendered);
    assert!(!repo.snapshot().await[0].is_printed());
}
