//! Cart, ordering and submission logic for the Amrong Chicken storefront.
//!
//! This crate provides:
//!
//! - **Cart**: line items, quantities and exact totals ([`cart`], [`manager`])
//! - **Menu**: the fixed catalog ([`menu`]) and custom order pricing ([`custom`])
//! - **Submissions**: reservation and contact forms ([`records`], [`validate`])
//! - **Checkout**: order summary and cart clear ([`checkout`])
//! - **Session**: [`Storefront`], which ties it together and reports to a
//!   [`NotificationSink`]
//!
//! Everything persists through an [`amrong_store::Store`], under the keys
//! `cart`, `reservations` and `contactMessages`.
//!
//! # Example
//!
//! ```rust,ignore
//! use amrong_commerce::prelude::*;
//! use amrong_store::Store;
//!
//! let store = Store::open_dir(".amrong")?;
//! let mut shop = Storefront::open(store, RecordingSink::new())?;
//!
//! shop.order_now("spicy-wings")?;
//! shop.order_now("cola-drink")?;
//! println!("Total: {}", shop.cart().compute_total());
//!
//! let summary = shop.checkout()?;
//! println!("{}", summary);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod checkout;
pub mod custom;
pub mod manager;
pub mod menu;
pub mod notify;
pub mod records;
pub mod repository;
pub mod storefront;
pub mod validate;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;
pub use notify::{Notification, NotificationSink, Severity};
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartItem, CartPricing, ItemDetails, LinePricing};
    pub use crate::checkout::OrderSummary;
    pub use crate::custom::{custom_order_price, CustomOrder, CustomOrderForm};
    pub use crate::error::CommerceError;
    pub use crate::ids::{ItemId, ProductId};
    pub use crate::manager::CartManager;
    pub use crate::menu::{MenuItem, MENU};
    pub use crate::money::Money;
    pub use crate::notify::{Notification, NotificationSink, RecordingSink, Severity};
    pub use crate::records::{
        ContactForm, ContactLog, ContactMessage, RecordLog, Reservation, ReservationForm,
        ReservationLog,
    };
    pub use crate::repository::{CartRepository, StoreCartRepository};
    pub use crate::storefront::Storefront;
    pub use crate::validate::{is_valid_email, is_valid_phone};
}
