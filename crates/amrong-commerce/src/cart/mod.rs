//! Shopping cart module.
//!
//! Contains the cart, its line items and the derived pricing breakdown.
//! These are plain values; persistence and change notification live in
//! [`crate::manager`].

mod cart;
mod pricing;

pub use cart::{Cart, CartItem, ItemDetails};
pub use pricing::{CartPricing, LinePricing};
