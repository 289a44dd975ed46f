//! Running totals for one aggregation run.
//!
//! Every map is insertion-ordered so that later reductions can break ties
//! by first appearance in the input.

use crate::parser::Transaction;
use indexmap::IndexMap;

/// Per-day quantity and value totals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyBucket {
    /// Sum of valid line-item quantities
    pub volume: u64,

    /// Sum of transaction amounts, with or without valid items
    pub value: f64,
}

/// All intermediate maps of one run
#[derive(Debug, Clone, Default)]
pub struct Accumulators {
    /// `YYYY-MM-DD` -> day totals
    pub daily: IndexMap<String, DailyBucket>,

    /// productId -> cumulative quantity
    pub products: IndexMap<String, u64>,

    /// staffId -> cumulative amount
    pub staff: IndexMap<String, f64>,

    /// hour of day -> transaction count
    pub hourly: IndexMap<u32, u64>,

    /// Number of transactions recorded
    pub transactions: usize,
}

impl Accumulators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one valid transaction into every map
    ///
    /// **Public** - called once per parsed line
    ///
    /// Quantity totals saturate at `u64::MAX` instead of wrapping.
    pub fn record(&mut self, tx: &Transaction) {
        let bucket = self.daily.entry(tx.date_key()).or_default();
        bucket.value += tx.amount;

        for item in &tx.line_items {
            bucket.volume = bucket.volume.saturating_add(item.quantity);
            let product = self.products.entry(item.product_id.clone()).or_insert(0);
            *product = product.saturating_add(item.quantity);
        }

        *self.staff.entry(tx.staff_id.clone()).or_insert(0.0) += tx.amount;
        let hour = self.hourly.entry(tx.hour()).or_insert(0);
        *hour = hour.saturating_add(1);
        self.transactions += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.transactions == 0
    }
}
