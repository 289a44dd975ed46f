//! Reduce accumulated totals into the five headline metrics.
//!
//! Each metric is a fold seeded with a zero value and an empty key that
//! only replaces the current best on a strictly greater value. The first
//! entry (in input order) to reach the maximum therefore wins ties, and an
//! empty map reports the seed.

use super::accumulators::Accumulators;
use crate::parser::schema::{
    DayValue, DayVolume, HourVolume, MetricsSnapshot, ProductVolume, StaffSales,
};
use log::debug;

/// Strict-greater fold over `(key, value)` pairs
///
/// **Public** - shared by every metric
///
/// # Returns
/// The first pair holding the maximum value, or `seed` when no value
/// exceeds it.
pub fn strict_max<K, V, I>(entries: I, seed: (K, V)) -> (K, V)
where
    I: IntoIterator<Item = (K, V)>,
    V: PartialOrd,
{
    entries
        .into_iter()
        .fold(seed, |best, (key, value)| {
            if value > best.1 {
                (key, value)
            } else {
                best
            }
        })
}

/// Build the metrics snapshot from accumulated totals
///
/// **Public** - final step of an aggregation run
pub fn build_snapshot(acc: &Accumulators) -> MetricsSnapshot {
    debug!(
        "Reducing {} days, {} products, {} staff, {} hours",
        acc.daily.len(),
        acc.products.len(),
        acc.staff.len(),
        acc.hourly.len()
    );

    let (date, volume) = strict_max(
        acc.daily.iter().map(|(date, day)| (date.as_str(), day.volume)),
        ("", 0),
    );
    let highest_sales_volume = DayVolume {
        date: date.to_string(),
        volume,
    };

    let (date, value) = strict_max(
        acc.daily.iter().map(|(date, day)| (date.as_str(), day.value)),
        ("", 0.0),
    );
    let highest_sales_value = DayValue {
        date: date.to_string(),
        value,
    };

    let (id, volume) = strict_max(
        acc.products.iter().map(|(id, qty)| (id.as_str(), *qty)),
        ("", 0),
    );
    let most_sold_product = ProductVolume {
        id: id.to_string(),
        volume,
    };

    let (id, sales) = strict_max(
        acc.staff.iter().map(|(id, sales)| (id.as_str(), *sales)),
        ("", 0.0),
    );
    let highest_sales_staff = StaffSales {
        id: id.to_string(),
        sales,
    };

    let (hour, volume) = strict_max(acc.hourly.iter().map(|(h, n)| (*h, *n)), (0, 0));
    let highest_hour = HourVolume { hour, volume };

    MetricsSnapshot {
        highest_sales_volume,
        highest_sales_value,
        most_sold_product,
        highest_sales_staff,
        highest_hour,
    }
}
