//! Custom order pricing.
//!
//! A custom order is priced as `base * quantity` plus two flat surcharges,
//! one for the chicken type and one for the spice level. The whole order
//! becomes a single cart line whose unit price is that total.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::ItemDetails;
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Money;

/// Per-piece base price.
pub const BASE_PRICE: Money = Money::new(1099);

/// Largest quantity accepted from the form.
pub const MAX_QUANTITY: u32 = 99;

/// Message shown for a quantity that is not a whole number in range.
pub const INVALID_QUANTITY: &str = "Please enter a valid quantity!";

/// Flat surcharge for a chicken type. Unknown types cost nothing extra.
pub fn chicken_surcharge(chicken_type: &str) -> Money {
    match chicken_type {
        "spicy" => Money::new(100),
        "garlic" => Money::new(200),
        _ => Money::zero(),
    }
}

/// Flat surcharge for a spice level. Unknown levels cost nothing extra.
pub fn spice_surcharge(spicy_level: &str) -> Money {
    match spicy_level {
        "medium" => Money::new(50),
        "extra-hot" => Money::new(100),
        _ => Money::zero(),
    }
}

/// Total price of a custom order.
///
/// ```
/// use amrong_commerce::custom::custom_order_price;
/// let total = custom_order_price("spicy", "extra-hot", 2);
/// assert_eq!(total.display(), "$23.98");
/// ```
pub fn custom_order_price(chicken_type: &str, spicy_level: &str, quantity: u32) -> Money {
    BASE_PRICE * quantity + chicken_surcharge(chicken_type) + spice_surcharge(spicy_level)
}

/// Raw custom order form input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOrderForm {
    pub chicken_type: String,
    pub quantity: String,
    pub spicy_level: String,
    pub instructions: String,
}

impl CustomOrderForm {
    /// Parse the quantity field: a whole number from 1 to [`MAX_QUANTITY`].
    pub fn parse_quantity(&self) -> Result<u32, CommerceError> {
        match self.quantity.trim().parse::<u32>() {
            Ok(q) if (1..=MAX_QUANTITY).contains(&q) => Ok(q),
            _ => Err(CommerceError::validation(INVALID_QUANTITY)),
        }
    }

    /// Price the form and turn it into a cart line placed at `at`.
    pub fn into_order(self, at: DateTime<Utc>) -> Result<CustomOrder, CommerceError> {
        let quantity = self.parse_quantity()?;
        let price = custom_order_price(&self.chicken_type, &self.spicy_level, quantity);
        let name = format!(
            "Custom {} Chicken ({} spicy)",
            self.chicken_type, self.spicy_level
        );

        let mut details = ItemDetails::new();
        details.insert("quantity".to_string(), quantity.to_string());
        details.insert("spicyLevel".to_string(), self.spicy_level);
        details.insert("instructions".to_string(), self.instructions);

        Ok(CustomOrder {
            id: ItemId::custom(at),
            name,
            price,
            details,
        })
    }
}

/// A priced custom order, ready to go into the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomOrder {
    pub id: ItemId,
    pub name: String,
    /// Price of the whole order (all pieces plus surcharges).
    pub price: Money,
    pub details: ItemDetails,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn form(chicken_type: &str, quantity: &str, spicy_level: &str) -> CustomOrderForm {
        CustomOrderForm {
            chicken_type: chicken_type.to_string(),
            quantity: quantity.to_string(),
            spicy_level: spicy_level.to_string(),
            instructions: "no onions".to_string(),
        }
    }

    #[test]
    fn test_price_spicy_extra_hot() {
        assert_eq!(
            custom_order_price("spicy", "extra-hot", 2),
            Money::from_decimal(23.98)
        );
    }

    #[test]
    fn test_surcharges_are_flat() {
        // Surcharges do not scale with quantity.
        assert_eq!(custom_order_price("garlic", "medium", 3), Money::new(1099 * 3 + 200 + 50));
        assert_eq!(custom_order_price("original", "mild", 1), Money::new(1099));
        assert_eq!(custom_order_price("SPICY", "Medium", 1), Money::new(1099));
    }

    #[test]
    fn test_into_order() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let order = form("garlic", "2", "medium").into_order(at).unwrap();

        assert_eq!(order.id.as_str(), "custom-1700000000000");
        assert_eq!(order.name, "Custom garlic Chicken (medium spicy)");
        assert_eq!(order.price.display(), "$24.48");
        assert_eq!(order.details.get("quantity").map(String::as_str), Some("2"));
        assert_eq!(order.details.get("spicyLevel").map(String::as_str), Some("medium"));
        assert_eq!(order.details.get("instructions").map(String::as_str), Some("no onions"));
    }

    #[test]
    fn test_quantity_hardening() {
        assert_eq!(form("spicy", " 3 ", "mild").parse_quantity().unwrap(), 3);
        assert_eq!(form("spicy", "99", "mild").parse_quantity().unwrap(), 99);

        for bad in ["", "0", "-1", "1.5", "abc", "100"] {
            let err = form("spicy", bad, "mild").parse_quantity().unwrap_err();
            assert_eq!(err.to_string(), INVALID_QUANTITY, "quantity {:?}", bad);
        }
    }
}
