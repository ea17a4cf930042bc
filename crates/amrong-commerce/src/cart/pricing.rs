//! Cart pricing breakdown.

use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LinePricing>,
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of line totals.
    pub total: Money,
}

impl CartPricing {
    /// Check if there is nothing to price.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Line id.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Quantity.
    pub quantity: u32,
    /// Unit price.
    pub unit_price: Money,
    /// `unit_price * quantity`.
    pub line_total: Money,
}

impl LinePricing {
    /// One-line summary, e.g. `Cola Drink x2: $5.98`.
    pub fn summary(&self) -> String {
        format!("{} x{}: {}", self.name, self.quantity, self.line_total)
    }
}
