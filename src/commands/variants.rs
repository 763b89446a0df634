use std::fmt::Write;

use anyhow::Result;
use fl_app::{LabelActions, VariantListing};
use fl_core::OrderId;

use crate::cli::ScopeArgs;

pub async fn run_variants(actions: &LabelActions, args: &ScopeArgs) -> Result<()> {
    let order_id = args.order.as_deref().map(OrderId::from);
    let listing = actions.list_variants(order_id.as_ref(), &args.filter).await?;
    print!("{}", format_listing(&listing));
    Ok(())
}

/// One row per visible group followed by a totals line.
pub fn format_listing(listing: &VariantListing) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<40} {:<14} {:<14} {:>5} {:>7} {:>9} {:>5}",
        "VARIANT", "STYLE", "BRAND", "TOTAL", "PRINTED", "UNPRINTED", "NO-QR"
    );
    for group in listing.visible_groups() {
        let _ = writeln!(
            out,
            "{:<40} {:<14} {:<14} {:>5} {:>7} {:>9} {:>5}",
            group.key.to_string(),
            group.style,
            group.brand,
            group.total_count,
            group.printed_count,
            group.unprinted_count,
            group.missing_payload_count()
        );
    }

    let summary = listing.summary();
    let _ = writeln!(
        out,
        "{} variants, {} items ({} printed, {} unprinted, {} without QR code)",
        summary.variants, summary.items, summary.printed, summary.unprinted, summary.missing_payload
    );
    out
}
