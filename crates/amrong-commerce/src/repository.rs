//! Cart persistence.
//!
//! The cart manager only talks to a [`CartRepository`], so tests can swap
//! in a fake and the real storage backend stays behind the store crate.

use amrong_store::Store;

use crate::cart::Cart;
use crate::error::CommerceError;

/// Store key holding the cart.
pub const CART_KEY: &str = "cart";
/// Store key holding the reservation log.
pub const RESERVATIONS_KEY: &str = "reservations";
/// Store key holding the contact message log.
pub const CONTACT_MESSAGES_KEY: &str = "contactMessages";

/// Load/save contract for the cart.
pub trait CartRepository {
    /// Load the persisted cart. A missing cart loads as empty.
    fn load(&self) -> Result<Cart, CommerceError>;

    /// Overwrite the persisted cart.
    fn save(&self, cart: &Cart) -> Result<(), CommerceError>;
}

/// Cart repository backed by a [`Store`], under [`CART_KEY`].
#[derive(Debug, Clone)]
pub struct StoreCartRepository {
    store: Store,
}

impl StoreCartRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl CartRepository for StoreCartRepository {
    fn load(&self) -> Result<Cart, CommerceError> {
        Ok(self.store.get::<Cart>(CART_KEY)?.unwrap_or_default())
    }

    fn save(&self, cart: &Cart) -> Result<(), CommerceError> {
        self.store.set(CART_KEY, cart)?;
        Ok(())
    }
}

impl<R: CartRepository + ?Sized> CartRepository for &R {
    fn load(&self) -> Result<Cart, CommerceError> {
        (**self).load()
    }

    fn save(&self, cart: &Cart) -> Result<(), CommerceError> {
        (**self).save(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ItemId;
    use crate::money::Money;

    #[test]
    fn test_missing_cart_loads_empty() {
        let repo = StoreCartRepository::new(Store::open_memory());
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = Store::open_memory();
        let repo = StoreCartRepository::new(store.clone());

        let mut cart = Cart::new();
        cart.add_item(ItemId::new("honey-wings"), "Honey Wings", Money::new(1099), None);
        repo.save(&cart).unwrap();

        assert_eq!(StoreCartRepository::new(store).load().unwrap(), cart);
    }

    #[test]
    fn test_malformed_cart_is_an_error_here() {
        // Degrading to empty is the manager's call, not the repository's.
        let store = Store::open_memory();
        store.set_raw(CART_KEY, b"{\"not\":\"a list\"}").unwrap();

        let err = StoreCartRepository::new(store).load().unwrap_err();
        assert!(matches!(err, CommerceError::Store(_)));
    }
}
