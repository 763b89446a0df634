use std::collections::HashMap;

use super::VariantKey;
use crate::item::Item;

/// Items sharing a variant key, with print counters.
///
/// Invariant: `printed_count + unprinted_count == total_count == items.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantGroup {
    pub key: VariantKey,
    /// Display style, taken from the first item seen for the key.
    pub style: String,
    /// Display brand, taken from the first item seen for the key.
    pub brand: String,
    pub items: Vec<Item>,
    pub total_count: usize,
    pub printed_count: usize,
    pub unprinted_count: usize,
}

impl VariantGroup {
    fn seeded_by(key: VariantKey, item: &Item) -> Self {
        Self {
            key,
            style: item.attributes.style_or_unknown().to_string(),
            brand: item.attributes.brand_or_unknown().to_string(),
            items: Vec::new(),
            total_count: 0,
            printed_count: 0,
            unprinted_count: 0,
        }
    }

    fn push(&mut self, item: &Item) {
        self.total_count += 1;
        if item.is_printed() {
            self.printed_count += 1;
        } else {
            self.unprinted_count += 1;
        }
        self.items.push(item.clone());
    }

    pub fn missing_payload_count(&self) -> usize {
        self.items.iter().filter(|item| !item.has_payload()).count()
    }
}

/// Folds items into variant groups, in first-seen key order.
///
/// Pure: the same input always yields the same keys, counts and order.
pub fn aggregate_variants(items: &[Item]) -> Vec<VariantGroup> {
    let mut index: HashMap<VariantKey, usize> = HashMap::new();
    let mut groups: Vec<VariantGroup> = Vec::new();

    for item in items {
        let key = VariantKey::for_item(item);
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                groups.push(VariantGroup::seeded_by(key.clone(), item));
                index.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].push(item);
    }

    groups
}

/// Totals across a set of groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantSummary {
    pub variants: usize,
    pub items: usize,
    pub printed: usize,
    pub unprinted: usize,
    pub missing_payload: usize,
}

impl VariantSummary {
    pub fn of<'a>(groups: impl IntoIterator<Item = &'a VariantGroup>) -> Self {
        groups
            .into_iter()
            .fold(Self::default(), |mut summary, group| {
                summary.variants += 1;
                summary.items += group.total_count;
                summary.printed += group.printed_count;
                summary.unprinted += group.unprinted_count;
                summary.missing_payload += group.missing_payload_count();
                summary
            })
    }
}
