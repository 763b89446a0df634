use fl_core::ports::LabelRendererPort;
use fl_core::{FailureKind, Item, ItemFailure, LabelImage, RenderOptions};
use tracing::warn;

/// Renders every item that holds a payload.
///
/// A failing render is logged and skipped; one bad code never blocks the
/// rest of the batch.
pub(crate) async fn render_labels(
    renderer: &dyn LabelRendererPort,
    items: Vec<Item>,
    options: &RenderOptions,
) -> (Vec<(Item, LabelImage)>, Vec<ItemFailure>) {
    let mut rendered = Vec::with_capacity(items.len());
    let mut skipped = Vec::new();

    for item in items {
        let Some(payload) = item.payload() else {
            continue;
        };
        let result = renderer.render(payload, options).await;
        match result {
            Ok(image) => rendered.push((item, image)),
            Err(e) => {
                warn!(item_id = %item.id, error = %e, "Skipping label that failed to render");
                skipped.push(ItemFailure::new(
                    item.id.clone(),
                    FailureKind::RenderFailure,
                    e.to_string(),
                ));
            }
        }
    }

    (rendered, skipped)
}
