//! Item categories and their per-tick update rules.
//!
//! Every rule reads `sell_in` *before* decrementing it, so an item with
//! `sell_in == 0` at the start of a tick is already treated as expired.

use serde::{Deserialize, Serialize};

use crate::item::{Item, LEGENDARY_QUALITY, MAX_QUALITY};

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const CONJURED: &str = "Conjured Mana Cake";

/// Backstage passes gain an extra point at or below this many days.
const BACKSTAGE_FIRST_THRESHOLD: i64 = 10;
/// ...and a third point at or below this many.
const BACKSTAGE_SECOND_THRESHOLD: i64 = 5;

/// Closed set of item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Anything not listed below: degrades over time.
    Generic,
    /// Improves with age.
    AgedBrie,
    /// Never sold, never degrades.
    Legendary,
    /// Gains value as the concert approaches, worthless afterwards.
    BackstagePass,
    /// Degrades twice as fast as a generic item.
    Conjured,
}

impl Category {
    /// Dispatch on an exact item name. Unknown names are [`Category::Generic`].
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgedBrie,
            SULFURAS => Category::Legendary,
            BACKSTAGE_PASSES => Category::BackstagePass,
            CONJURED => Category::Conjured,
            _ => Category::Generic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Generic => "generic",
            Category::AgedBrie => "aged_brie",
            Category::Legendary => "legendary",
            Category::BackstagePass => "backstage_pass",
            Category::Conjured => "conjured",
        }
    }

    /// Advance `item` by exactly one tick under this category's rule.
    pub fn update(self, item: &mut Item) {
        match self {
            Category::Generic => generic_tick(item),
            Category::AgedBrie => aged_brie_tick(item),
            Category::Legendary => legendary_tick(item),
            Category::BackstagePass => backstage_pass_tick(item),
            Category::Conjured => conjured_tick(item),
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn increase_quality(item: &mut Item) {
    if item.quality < MAX_QUALITY {
        item.quality += 1;
    }
}

fn decrease_quality(item: &mut Item) {
    if item.quality > 0 {
        item.quality -= 1;
    }
}

/// Saturates at `i64::MIN` so the rules stay total.
fn decrease_sell_in(item: &mut Item) {
    item.sell_in = item.sell_in.saturating_sub(1);
}

/// One full generic tick, countdown included.
pub fn generic_tick(item: &mut Item) {
    decrease_quality(item);
    if item.is_expired() {
        decrease_quality(item);
    }
    decrease_sell_in(item);
}

fn aged_brie_tick(item: &mut Item) {
    increase_quality(item);
    if item.is_expired() {
        increase_quality(item);
    }
    decrease_sell_in(item);
}

fn legendary_tick(item: &mut Item) {
    item.quality = LEGENDARY_QUALITY;
}

fn backstage_pass_tick(item: &mut Item) {
    increase_quality(item);
    if item.sell_in <= BACKSTAGE_FIRST_THRESHOLD {
        increase_quality(item);
    }
    if item.sell_in <= BACKSTAGE_SECOND_THRESHOLD {
        increase_quality(item);
    }
    if item.is_expired() {
        item.quality = 0;
    }
    decrease_sell_in(item);
}

/// Two generic ticks back to back. The second one sees the countdown the
/// first one left behind, and quality is floored after each step.
fn conjured_tick(item: &mut Item) {
    generic_tick(item);
    generic_tick(item);
}
