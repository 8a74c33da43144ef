//! Tick driver.

use core::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Advance every item by one tick, in collection order.
///
/// Items never interact; each is dispatched on its own name.
pub fn update_quality(items: &mut [Item]) {
    for item in items.iter_mut() {
        let category = item.category();
        let before = (item.sell_in, item.quality);
        category.update(item);
        tracing::trace!(
            name = %item.name,
            %category,
            sell_in_before = before.0,
            quality_before = before.1,
            sell_in = item.sell_in,
            quality = item.quality,
            "item updated"
        );
    }
    tracing::debug!(items = items.len(), "tick applied");
}

/// Owned stock list with a day counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    day: u64,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, day: 0 }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Number of ticks applied so far.
    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn tick(&mut self) {
        update_quality(&mut self.items);
        self.day += 1;
    }

    pub fn advance(&mut self, days: u64) {
        for _ in 0..days {
            self.tick();
        }
    }

    /// Current stock as a report block:
    ///
    /// ```text
    /// -------- day 0 --------
    /// name, sellIn, quality
    /// Aged Brie, 2, 0
    /// ```
    pub fn report(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "-------- day {} --------", self.day);
        let _ = writeln!(out, "name, sellIn, quality");
        for item in &self.items {
            let _ = writeln!(out, "{item}");
        }
        out
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
