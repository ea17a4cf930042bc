//! Static menu catalog.

use crate::ids::{ItemId, ProductId};
use crate::money::Money;
use serde::Serialize;

/// A fixed menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Product id, e.g. `spicy-wings`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Unit price.
    pub price: Money,
}

impl MenuItem {
    const fn new(id: &'static str, name: &'static str, price_cents: i64) -> Self {
        Self {
            id,
            name,
            price: Money::new(price_cents),
        }
    }

    /// Typed product id.
    pub fn product_id(&self) -> ProductId {
        ProductId::new(self.id)
    }

    /// Id of the cart line this entry becomes.
    pub fn item_id(&self) -> ItemId {
        ItemId::new(self.id)
    }
}

/// The full menu, in display order.
pub static MENU: [MenuItem; 9] = [
    MenuItem::new("original-chicken", "Original Chicken", 1099),
    MenuItem::new("spicy-chicken", "Spicy Chicken", 1199),
    MenuItem::new("garlic-chicken", "Garlic Chicken", 1299),
    MenuItem::new("bbq-chicken", "BBQ Chicken", 1399),
    MenuItem::new("spicy-wings", "Spicy Wings", 999),
    MenuItem::new("honey-wings", "Honey Wings", 1099),
    MenuItem::new("french-fries", "French Fries", 499),
    MenuItem::new("cola-drink", "Cola Drink", 299),
    MenuItem::new("orange-juice", "Orange Juice", 399),
];

/// Look up a menu entry by product id.
pub fn find(id: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|item| item.id == id)
}
