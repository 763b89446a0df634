use std::sync::Arc;

use fl_core::ports::ItemRepositoryPort;
use fl_core::variant::VariantSummary;
use fl_core::{
    aggregate_variants, filter_variants, LabelActionError, OrderId, VariantGroup, VariantKey,
};
use tracing::debug;

/// Grouped view of the current items.
#[derive(Debug, Clone)]
pub struct VariantListing {
    /// Every group, in first-seen order.
    pub groups: Vec<VariantGroup>,
    /// Keys of the groups that pass the filter, in the same order.
    pub visible: Vec<VariantKey>,
}

impl VariantListing {
    pub fn visible_groups(&self) -> impl Iterator<Item = &VariantGroup> {
        self.groups
            .iter()
            .filter(move |group| self.visible.contains(&group.key))
    }

    pub fn summary(&self) -> VariantSummary {
        VariantSummary::of(self.visible_groups())
    }
}

/// Loads items and folds them into filtered variant groups.
pub struct ListVariants {
    repo: Arc<dyn ItemRepositoryPort>,
}

impl ListVariants {
    pub fn new(repo: Arc<dyn ItemRepositoryPort>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(name = "usecase.list_variants.execute", skip(self))]
    pub async fn execute(
        &self,
        order_id: Option<&OrderId>,
        filter: &str,
    ) -> Result<VariantListing, LabelActionError> {
        let items = self
            .repo
            .list_items(order_id)
            .await
            .map_err(|e| LabelActionError::Repository(e.to_string()))?;

        let groups = aggregate_variants(&items);
        let visible: Vec<VariantKey> = filter_variants(&groups, filter)
            .into_iter()
            .map(|group| group.key.clone())
            .collect();

        debug!(
            items = items.len(),
            groups = groups.len(),
            visible = visible.len(),
            "Listed variants"
        );
        Ok(VariantListing { groups, visible })
    }
}
