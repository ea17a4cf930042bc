//! Cart manager: the cart plus write-through persistence and change
//! notification.
//!
//! The cart is read from the repository once, when the manager is created.
//! Every mutation then writes the whole cart back before observers hear
//! about it. Operations that change nothing (updating a missing line, a
//! non-positive quantity) neither write nor notify.

use std::fmt;

use tracing::{debug, warn};

use crate::cart::{Cart, CartItem, ItemDetails};
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Money;
use crate::repository::CartRepository;

/// Callback invoked with the cart after every persisted mutation.
pub type CartObserver = Box<dyn FnMut(&Cart)>;

/// Owns the session's cart and keeps its repository in sync.
pub struct CartManager<R> {
    cart: Cart,
    repo: R,
    observers: Vec<CartObserver>,
}

impl<R: CartRepository> CartManager<R> {
    /// Load the cart from `repo`.
    ///
    /// A stored cart that does not decode is logged and replaced by an empty
    /// one. Any other load failure is returned, so a cart that merely could
    /// not be read is never overwritten.
    pub fn load(repo: R) -> Result<Self, CommerceError> {
        let cart = match repo.load() {
            Ok(cart) => cart,
            Err(CommerceError::Store(e)) if e.is_malformed() => {
                warn!(error = %e, "stored cart unreadable, starting with an empty cart");
                Cart::new()
            }
            Err(e) => return Err(e),
        };
        debug!(lines = cart.len(), "cart loaded");

        Ok(Self {
            cart,
            repo,
            observers: Vec::new(),
        })
    }

    /// Register a callback that sees the cart after each change.
    pub fn subscribe(&mut self, observer: impl FnMut(&Cart) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Add one unit of an item; see [`Cart::add_item`]. Always persists.
    ///
    /// Returns the line's quantity after the add.
    pub fn add_item(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
        price: Money,
        details: Option<ItemDetails>,
    ) -> Result<u32, CommerceError> {
        let quantity = self.cart.add_item(id, name, price, details);
        self.persist()?;
        Ok(quantity)
    }

    /// Remove a line. Persists even when `id` was not in the cart.
    pub fn remove_item(&mut self, id: &ItemId) -> Result<bool, CommerceError> {
        let removed = self.cart.remove_item(id);
        self.persist()?;
        Ok(removed)
    }

    /// Set a line's quantity; see [`Cart::update_quantity`].
    ///
    /// Quantities of zero or less are ignored, they do not remove the line.
    pub fn update_quantity(&mut self, id: &ItemId, quantity: i64) -> Result<bool, CommerceError> {
        if !self.cart.update_quantity(id, quantity) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// The `+` control: one more unit of an existing line.
    pub fn increment(&mut self, id: &ItemId) -> Result<bool, CommerceError> {
        match self.cart.get(id) {
            Some(item) => {
                let next = i64::from(item.quantity) + 1;
                self.update_quantity(id, next)
            }
            None => Ok(false),
        }
    }

    /// The `-` control: one less unit. A line at quantity 1 stays at 1.
    pub fn decrement(&mut self, id: &ItemId) -> Result<bool, CommerceError> {
        match self.cart.get(id) {
            Some(item) => {
                let next = i64::from(item.quantity) - 1;
                self.update_quantity(id, next)
            }
            None => Ok(false),
        }
    }

    /// Empty the cart and persist.
    pub fn clear(&mut self) -> Result<(), CommerceError> {
        self.cart.clear();
        self.persist()
    }

    /// Sum of `price * quantity` over all lines.
    pub fn compute_total(&self) -> Money {
        self.cart.total()
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Get a line by id.
    pub fn get(&self, id: &ItemId) -> Option<&CartItem> {
        self.cart.get(id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// The repository the cart is written to.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    fn persist(&mut self) -> Result<(), CommerceError> {
        self.repo.save(&self.cart)?;
        debug!(
            lines = self.cart.len(),
            items = self.cart.item_count(),
            total = %self.cart.total(),
            "cart persisted"
        );
        for observer in self.observers.iter_mut() {
            observer(&self.cart);
        }
        Ok(())
    }
}

impl<R> fmt::Debug for CartManager<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartManager")
            .field("cart", &self.cart)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
