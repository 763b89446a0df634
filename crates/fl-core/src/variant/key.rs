use std::fmt::{Display, Formatter, Write};

use serde::{Deserialize, Serialize};

use crate::item::Item;

pub const VARIANT_KEY_SEPARATOR: char = '|';
const VARIANT_KEY_ESCAPE: char = '\\';

/// Grouping key of a physically distinct printable variant: sku, size, color.
///
/// Missing attributes are already substituted with their sentinels, so items
/// sharing the same missing-ness share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VariantKey {
    pub sku: String,
    pub size: String,
    pub color: String,
}

impl VariantKey {
    pub fn new(sku: impl Into<String>, size: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            size: size.into(),
            color: color.into(),
        }
    }

    pub fn for_item(item: &Item) -> Self {
        let attrs = &item.attributes;
        Self::new(
            attrs.sku_or_unknown(),
            attrs.size_or_unknown(),
            attrs.color_or_unknown(),
        )
    }

    /// Parses the `sku|size|color` form produced by `Display`.
    ///
    /// A separator or backslash inside a value is backslash-escaped.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = split_escaped(value)?.into_iter();
        let sku = parts.next()?;
        let size = parts.next()?;
        let color = parts.next()?;
        if parts.next().is_some() || sku.is_empty() || size.is_empty() || color.is_empty() {
            return None;
        }
        Some(Self::new(sku, size, color))
    }
}

fn split_escaped(value: &str) -> Option<Vec<String>> {
    let mut parts = Vec::with_capacity(3);
    let mut current = String::new();
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            VARIANT_KEY_ESCAPE => current.push(chars.next()?),
            VARIANT_KEY_SEPARATOR => {
                parts.push(current.trim().to_string());
                current.clear();
            }
            other => current.push(other),
        }
    }
    parts.push(current.trim().to_string());
    Some(parts)
}

fn write_escaped(f: &mut Formatter<'_>, value: &str) -> std::fmt::Result {
    for c in value.chars() {
        if c == VARIANT_KEY_SEPARATOR || c == VARIANT_KEY_ESCAPE {
            f.write_char(VARIANT_KEY_ESCAPE)?;
        }
        f.write_char(c)?;
    }
    Ok(())
}

impl Display for VariantKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_escaped(f, &self.sku)?;
        f.write_char(VARIANT_KEY_SEPARATOR)?;
        write_escaped(f, &self.size)?;
        f.write_char(VARIANT_KEY_SEPARATOR)?;
        write_escaped(f, &self.color)
    }
}
