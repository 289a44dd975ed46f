//! Saved-analytics management commands.

use crate::output::{format_hour, AnalyticsStore};
use anyhow::{Context, Result};
use std::path::Path;

/// Print every saved snapshot in the store
pub fn list_saved(store_path: &Path) -> Result<()> {
    let store = AnalyticsStore::open(store_path);
    let records = store
        .load()
        .with_context(|| format!("Failed to load {}", store_path.display()))?;

    if records.is_empty() {
        println!("No saved analytics in {}", store_path.display());
        return Ok(());
    }

    println!("Saved analytics ({}):", records.len());
    for record in &records {
        println!(
            "  {}  {} - {}  (saved {})",
            record.id, record.prefix, record.filename, record.saved_at
        );
        println!(
            "      top day {} | top product {} | top staff {} | peak {}",
            record.metrics.highest_sales_value.date,
            record.metrics.most_sold_product.id,
            record.metrics.highest_sales_staff.id,
            format_hour(record.metrics.highest_hour.hour)
        );
    }

    Ok(())
}

/// Delete one saved snapshot
pub fn remove_saved(store_path: &Path, id: &str) -> Result<()> {
    let store = AnalyticsStore::open(store_path);
    let removed = store
        .remove(id)
        .with_context(|| format!("Failed to remove {} from {}", id, store_path.display()))?;

    println!("✓ Removed \"{} - {}\"", removed.prefix, removed.filename);
    Ok(())
}
