//! Checkout: summarize the cart, then empty it.
//!
//! No payment is taken. The summary is the receipt.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cart::{CartPricing, LinePricing};
use crate::error::CommerceError;
use crate::manager::CartManager;
use crate::money::Money;
use crate::repository::CartRepository;

/// What the customer ordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub lines: Vec<LinePricing>,
    pub item_count: u64,
    pub total: Money,
    pub placed_at: DateTime<Utc>,
}

impl OrderSummary {
    fn from_pricing(pricing: CartPricing, placed_at: DateTime<Utc>) -> Self {
        Self {
            lines: pricing.lines,
            item_count: pricing.item_count,
            total: pricing.total,
            placed_at,
        }
    }

    /// Order number derived from the checkout time.
    pub fn order_number(&self) -> String {
        format!("ORD-{}", self.placed_at.timestamp())
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order Summary:")?;
        writeln!(f)?;
        for line in &self.lines {
            writeln!(f, "{}", line.summary())?;
        }
        writeln!(f)?;
        write!(f, "Total: {}", self.total)
    }
}

/// Check out the cart held by `manager`.
///
/// An empty cart fails with [`CommerceError::EmptyCart`] and nothing is
/// written. Otherwise the summary is built first and the cart is cleared.
pub fn checkout<R: CartRepository>(
    manager: &mut CartManager<R>,
    placed_at: DateTime<Utc>,
) -> Result<OrderSummary, CommerceError> {
    if manager.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let summary = OrderSummary::from_pricing(manager.cart().pricing(), placed_at);
    manager.clear()?;

    info!(
        order = %summary.order_number(),
        items = summary.item_count,
        total = %summary.total,
        "checkout complete"
    );
    Ok(summary)
}
