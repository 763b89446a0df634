use super::VariantGroup;

/// Case-insensitive substring match of `query` against sku, size, color,
/// style and brand. A blank query keeps every group. Order is preserved.
pub fn filter_variants<'a>(groups: &'a [VariantGroup], query: &str) -> Vec<&'a VariantGroup> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return groups.iter().collect();
    }
    groups
        .iter()
        .filter(|group| matches_query(group, &needle))
        .collect()
}

fn matches_query(group: &VariantGroup, needle: &str) -> bool {
    [
        group.key.sku.as_str(),
        group.key.size.as_str(),
        group.key.color.as_str(),
        group.style.as_str(),
        group.brand.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
