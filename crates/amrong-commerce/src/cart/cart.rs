//! Cart and line item types.

use std::collections::BTreeMap;

use crate::cart::{CartPricing, LinePricing};
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Free-form attributes attached to a line (spice level, instructions, ...).
/// Opaque to the cart.
pub type ItemDetails = BTreeMap<String, String>;

/// A shopping cart: an insertion-ordered list of lines, unique by id.
///
/// Every line has a quantity of at least 1. Serializes as a bare JSON array
/// of lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from stored lines.
    ///
    /// Lines with a zero quantity are dropped and repeated ids are folded
    /// into the first occurrence, so the cart invariants hold whatever the
    /// stored data looked like.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.items.iter_mut().find(|i| i.id == item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity)
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Add one unit of an item.
    ///
    /// If a line with `id` already exists its quantity goes up by one and the
    /// new `name`, `price` and `details` are ignored. Otherwise a new line with
    /// quantity 1 is appended. Returns the resulting quantity.
    pub fn add_item(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
        price: Money,
        details: Option<ItemDetails>,
    ) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.items.push(CartItem {
            id,
            name: name.into(),
            price,
            quantity: 1,
            details: details.unwrap_or_default(),
        });
        1
    }

    /// Remove the line with `id`. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Set the quantity of an existing line.
    ///
    /// Non-positive quantities are ignored rather than removing the line;
    /// use [`Cart::remove_item`] for that. Returns whether the cart changed.
    pub fn update_quantity(&mut self, id: &ItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return false;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by id.
    pub fn get(&self, id: &ItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Per-line and overall price breakdown.
    pub fn pricing(&self) -> CartPricing {
        let lines = self
            .items
            .iter()
            .map(|item| LinePricing {
                id: item.id.clone(),
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: item.price,
                line_total: item.line_total(),
            })
            .collect();

        CartPricing {
            lines,
            item_count: self.item_count(),
            total: self.total(),
        }
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product id, or `custom-<millis>` for custom orders.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Number of units, always at least 1 inside a [`Cart`].
    pub quantity: u32,
    /// Attached attributes. Menu items carry an empty map, which is still
    /// written out as `{}`.
    #[serde(default)]
    pub details: ItemDetails,
}

impl CartItem {
    /// `price * quantity`.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }

    /// Look up a detail attribute.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(cart: &mut Cart, id: &str, price_cents: i64) -> u32 {
        cart.add_item(ItemId::new(id), id, Money::new(price_cents), None)
    }

    #[test]
    fn test_add_distinct_items() {
        let mut cart = Cart::new();
        let ids = ["original-chicken", "cola-drink", "french-fries"];
        let adds: [u32; 3] = [3, 1, 2];

        for (id, times) in ids.iter().zip(adds) {
            for _ in 0..times {
                add(&mut cart, id, 100);
            }
        }

        assert_eq!(cart.len(), ids.len());
        for (id, times) in ids.iter().zip(adds) {
            assert_eq!(cart.get(&ItemId::new(*id)).unwrap().quantity, times);
        }
        // Insertion order is kept.
        let order: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, ids);
    }

    #[test]
    fn test_add_same_item_increments_by_one() {
        let mut cart = Cart::new();
        let mut details = ItemDetails::new();
        details.insert("spicyLevel".to_string(), "mild".to_string());

        cart.add_item(ItemId::new("spicy-wings"), "Spicy Wings", Money::new(999), Some(details));
        let qty = cart.add_item(
            ItemId::new("spicy-wings"),
            "Renamed",
            Money::new(1),
            None,
        );

        assert_eq!(qty, 2);
        assert_eq!(cart.len(), 1);
        let item = cart.get(&ItemId::new("spicy-wings")).unwrap();
        assert_eq!(item.name, "Spicy Wings");
        assert_eq!(item.price, Money::new(999));
        assert_eq!(item.detail("spicyLevel"), Some("mild"));
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        add(&mut cart, "bbq-chicken", 1399);

        assert!(cart.update_quantity(&ItemId::new("bbq-chicken"), 5));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_non_positive_is_noop() {
        let mut cart = Cart::new();
        add(&mut cart, "bbq-chicken", 1399);
        add(&mut cart, "bbq-chicken", 1399);
        let before = cart.clone();

        assert!(!cart.update_quantity(&ItemId::new("bbq-chicken"), 0));
        assert!(!cart.update_quantity(&ItemId::new("bbq-chicken"), -1));
        assert_eq!(cart, before);
        assert_eq!(cart.get(&ItemId::new("bbq-chicken")).unwrap().quantity, 2);
    }

    #[test]
    fn test_update_quantity_unknown_id() {
        let mut cart = Cart::new();
        assert!(!cart.update_quantity(&ItemId::new("ghost"), 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        add(&mut cart, "cola-drink", 299);

        assert!(!cart.remove_item(&ItemId::new("orange-juice")));
        assert_eq!(cart.len(), 1);

        assert!(cart.remove_item(&ItemId::new("cola-drink")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new();
        add(&mut cart, "original-chicken", 1099);
        add(&mut cart, "original-chicken", 1099);
        add(&mut cart, "french-fries", 499);

        assert_eq!(cart.total(), Money::new(2697));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        add(&mut cart, "cola-drink", 299);
        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_stored_shape_is_plain_array() {
        let mut cart = Cart::new();
        add(&mut cart, "cola-drink", 299);

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"cola-drink","name":"cola-drink","price":2.99,"quantity":1,"details":{}}]"#
        );
    }

    #[test]
    fn test_missing_details_load_as_empty() {
        let json = r#"[{"id":"cola-drink","name":"Cola Drink","price":2.99,"quantity":1}]"#;

        let cart: Cart = serde_json::from_str(json).unwrap();
        let line = cart.get(&ItemId::new("cola-drink")).unwrap();
        assert!(line.details.is_empty());
        assert_eq!(line.detail("quantity"), None);
    }

    #[test]
    fn test_loads_browser_shaped_data() {
        let json = r#"[
            {"id":"spicy-chicken","name":"Spicy Chicken","price":11.99,"quantity":2,"details":{}},
            {"id":"custom-1","name":"Custom spicy Chicken (mild spicy)","price":22.98,"quantity":1,
             "details":{"quantity":"2","spicyLevel":"mild","instructions":""}}
        ]"#;

        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), Money::new(1199 * 2 + 2298));
        assert_eq!(
            cart.get(&ItemId::new("custom-1")).unwrap().detail("quantity"),
            Some("2")
        );
    }

    #[test]
    fn test_loading_restores_invariants() {
        let json = r#"[
            {"id":"a","name":"A","price":1.00,"quantity":0},
            {"id":"b","name":"B","price":1.00,"quantity":1},
            {"id":"b","name":"B again","price":9.00,"quantity":2}
        ]"#;

        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.len(), 1);
        let b = cart.get(&ItemId::new("b")).unwrap();
        assert_eq!(b.quantity, 3);
        assert_eq!(b.name, "B");
    }
}
