//! Variant selection set.

use std::collections::HashSet;

use crate::item::Item;
use crate::variant::{VariantGroup, VariantKey};

/// Set of variant keys chosen for an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSelection {
    keys: HashSet<VariantKey>,
}

impl VariantSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys(keys: impl IntoIterator<Item = VariantKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Adds the key if absent, removes it otherwise. Returns whether the key
    /// is selected afterwards.
    pub fn toggle(&mut self, key: &VariantKey) -> bool {
        if self.keys.remove(key) {
            false
        } else {
            self.keys.insert(key.clone());
            true
        }
    }

    /// All-or-nothing toggle over the visible keys.
    ///
    /// When every visible key is already selected (and nothing else is), the
    /// selection is cleared. Otherwise the selection becomes exactly the
    /// visible set.
    pub fn select_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a VariantKey>) {
        let visible: HashSet<VariantKey> = visible.into_iter().cloned().collect();
        if !visible.is_empty() && self.keys == visible {
            self.keys.clear();
        } else {
            self.keys = visible;
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, key: &VariantKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariantKey> {
        self.keys.iter()
    }

    /// Selected groups, in the order of `groups`.
    pub fn selected_groups<'a>(
        &'a self,
        groups: &'a [VariantGroup],
    ) -> impl Iterator<Item = &'a VariantGroup> {
        groups.iter().filter(move |group| self.contains(&group.key))
    }

    /// Member items of the selected groups, in group order.
    pub fn selected_items<'a>(&'a self, groups: &'a [VariantGroup]) -> Vec<&'a Item> {
        self.selected_groups(groups)
            .flat_map(|group| group.items.iter())
            .collect()
    }
}
