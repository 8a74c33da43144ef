use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::Category;

/// Upper bound on quality for every category except the legendary one.
pub const MAX_QUALITY: i64 = 50;

/// Quality a legendary item is pinned at.
pub const LEGENDARY_QUALITY: i64 = 80;

/// A stocked item.
///
/// Plain mutable record: the tick rules in [`Category`] update `sell_in` and
/// `quality` in place. `sell_in` has no lower bound; `sell_in <= 0` means the
/// item is past its sell-by date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sell_in: i64,
    pub quality: i64,
}

impl Item {
    /// Build an item without checking its starting quality.
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Build an item, rejecting starting values the tick rules do not cover.
    ///
    /// Legendary items must start at [`LEGENDARY_QUALITY`]; everything else
    /// must start within `0..=MAX_QUALITY`.
    pub fn checked(name: impl Into<String>, sell_in: i64, quality: i64) -> DomainResult<Self> {
        let item = Self::new(name, sell_in, quality);
        if item.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        match item.category() {
            Category::Legendary if item.quality != LEGENDARY_QUALITY => {
                Err(DomainError::invariant(format!(
                    "{} must have quality {LEGENDARY_QUALITY}, got {}",
                    item.name, item.quality
                )))
            }
            Category::Legendary => Ok(item),
            _ if !(0..=MAX_QUALITY).contains(&item.quality) => Err(DomainError::invariant(format!(
                "quality must be within 0..={MAX_QUALITY}, got {}",
                item.quality
            ))),
            _ => Ok(item),
        }
    }

    /// Category governing this item's tick rule.
    pub fn category(&self) -> Category {
        Category::from_name(&self.name)
    }

    pub fn is_expired(&self) -> bool {
        self.sell_in <= 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
