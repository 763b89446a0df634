use anyhow::{anyhow, Result};
use fl_app::{LabelActions, LabelRequest};
use fl_core::{OrderId, VariantKey, VariantSelection};

use crate::cli::SelectArgs;

/// Parses `sku|size|color` keys as printed by `variants`; repeating a key
/// selects it once.
pub fn selection_from_keys(keys: &[String]) -> Result<VariantSelection> {
    let keys = keys
        .iter()
        .map(|raw| {
            VariantKey::parse(raw)
                .ok_or_else(|| anyhow!("invalid variant key '{raw}', expected sku|size|color"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(VariantSelection::from_keys(keys))
}

/// Turns the selection flags into a request. `--all` selects the groups
/// visible under `--filter`; no flag at all yields an empty selection.
pub async fn build_request(actions: &LabelActions, args: &SelectArgs) -> Result<LabelRequest> {
    let order_id = args.scope.order.as_deref().map(OrderId::from);

    let selection = if args.all {
        let listing = actions
            .list_variants(order_id.as_ref(), &args.scope.filter)
            .await?;
        let mut selection = VariantSelection::new();
        selection.select_all(listing.visible.iter());
        selection
    } else {
        selection_from_keys(&args.variant)?
    };

    Ok(LabelRequest::new(order_id, selection))
}
