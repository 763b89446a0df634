use fl_core::ports::ItemRepositoryPort;
use fl_core::{aggregate_variants, Item, LabelActionError, OrderId, VariantSelection};

/// What an action operates on: the item scope and the chosen variants.
#[derive(Debug, Clone, Default)]
pub struct LabelRequest {
    pub order_id: Option<OrderId>,
    pub selection: VariantSelection,
}

impl LabelRequest {
    pub fn new(order_id: Option<OrderId>, selection: VariantSelection) -> Self {
        Self {
            order_id,
            selection,
        }
    }
}

/// Resolves the request to the member items of the selected groups.
///
/// Fails with `EmptySelection` before touching the backend when nothing is
/// selected, and after loading when the selection matches no current group.
pub(crate) async fn load_selected_items(
    repo: &dyn ItemRepositoryPort,
    request: &LabelRequest,
) -> Result<Vec<Item>, LabelActionError> {
    if request.selection.is_empty() {
        return Err(LabelActionError::EmptySelection);
    }

    let items = repo
        .list_items(request.order_id.as_ref())
        .await
        .map_err(|e| LabelActionError::Repository(e.to_string()))?;
    let groups = aggregate_variants(&items);
    let selected: Vec<Item> = request
        .selection
        .selected_items(&groups)
        .into_iter()
        .cloned()
        .collect();

    if selected.is_empty() {
        return Err(LabelActionError::EmptySelection);
    }
    Ok(selected)
}
