//! Plain-text rendering of a metrics snapshot.

use crate::parser::schema::{LineWarning, MetricsSnapshot};

/// Render the five metrics and any skipped lines as text
///
/// **Public** - used by `analyze --summary`
///
/// Amounts are printed as plain decimals; no currency formatting.
pub fn render_summary(snapshot: &MetricsSnapshot, warnings: &[LineWarning]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Highest Sales Volume: {} ({} items)\n",
        or_none(&snapshot.highest_sales_volume.date),
        snapshot.highest_sales_volume.volume
    ));
    out.push_str(&format!(
        "Highest Sales Value:  {} ({:.2})\n",
        or_none(&snapshot.highest_sales_value.date),
        snapshot.highest_sales_value.value
    ));
    out.push_str(&format!(
        "Most Sold Product:    {} ({} units)\n",
        or_none(&snapshot.most_sold_product.id),
        snapshot.most_sold_product.volume
    ));
    out.push_str(&format!(
        "Top Staff:            {} ({:.2})\n",
        or_none(&snapshot.highest_sales_staff.id),
        snapshot.highest_sales_staff.sales
    ));
    out.push_str(&format!(
        "Peak Hour:            {} ({} transactions)\n",
        format_hour(snapshot.highest_hour.hour),
        snapshot.highest_hour.volume
    ));

    if !warnings.is_empty() {
        out.push_str(&format!("\nSkipped {} line(s):\n", warnings.len()));
        for w in warnings {
            out.push_str(&format!(
                "  line {}: [{}] {}\n",
                w.line_number, w.kind, w.message
            ));
        }
    }

    out
}

/// Format an hour of day as `HH:00`
pub fn format_hour(hour: u32) -> String {
    format!("{:02}:00", hour)
}

fn or_none(key: &str) -> &str {
    if key.is_empty() {
        "-"
    } else {
        key
    }
}
