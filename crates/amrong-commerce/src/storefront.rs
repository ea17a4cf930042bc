//! The storefront session: every customer action in one place.
//!
//! A [`Storefront`] owns the cart manager, the two submission logs and the
//! notification sink. Each action either succeeds and tells the customer
//! so, or fails, tells the customer why, and leaves state as it was.

use std::fmt;

use amrong_store::Store;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::checkout::{self, OrderSummary};
use crate::custom::CustomOrderForm;
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::manager::CartManager;
use crate::menu::{self, MenuItem};
use crate::notify::{Notification, NotificationSink};
use crate::records::{
    ContactForm, ContactLog, ContactMessage, Reservation, ReservationForm, ReservationLog,
};
use crate::repository::{CartRepository, StoreCartRepository};

/// Source of "now" for timestamps and custom order ids.
pub type Clock = Box<dyn Fn() -> DateTime<Utc>>;

/// Message shown after a custom order lands in the cart.
pub const CUSTOM_ORDER_ADDED: &str = "Custom order added to cart!";
/// Message shown after a successful checkout.
pub const ORDER_THANKS: &str = "Thank you for your order!";

/// One customer session.
pub struct Storefront<R, N> {
    cart: CartManager<R>,
    reservations: ReservationLog,
    contacts: ContactLog,
    sink: N,
    clock: Clock,
}

impl<N: NotificationSink> Storefront<StoreCartRepository, N> {
    /// Open a session with everything persisted in `store`.
    pub fn open(store: Store, sink: N) -> Result<Self, CommerceError> {
        Self::with_repository(StoreCartRepository::new(store.clone()), store, sink)
    }
}

impl<R: CartRepository, N: NotificationSink> Storefront<R, N> {
    /// Open a session with a custom cart repository. Submission logs still
    /// go to `store`.
    pub fn with_repository(repo: R, store: Store, sink: N) -> Result<Self, CommerceError> {
        Ok(Self {
            cart: CartManager::load(repo)?,
            reservations: ReservationLog::reservations(store.clone()),
            contacts: ContactLog::contact_messages(store),
            sink,
            clock: Box::new(Utc::now),
        })
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// The cart manager.
    pub fn cart(&self) -> &CartManager<R> {
        &self.cart
    }

    /// The cart manager, for subscribing observers or direct edits.
    pub fn cart_mut(&mut self) -> &mut CartManager<R> {
        &mut self.cart
    }

    /// The notification sink.
    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// The reservation log.
    pub fn reservations(&self) -> &ReservationLog {
        &self.reservations
    }

    /// The contact message log.
    pub fn contacts(&self) -> &ContactLog {
        &self.contacts
    }

    /// "Order now" on a menu entry.
    ///
    /// Unknown product ids are ignored and return `Ok(None)`.
    pub fn order_now(&mut self, product_id: &str) -> Result<Option<&'static MenuItem>, CommerceError> {
        let Some(item) = menu::find(product_id) else {
            debug!(product_id, "ignoring order for unknown product");
            return Ok(None);
        };

        self.cart.add_item(item.item_id(), item.name, item.price, None)?;
        self.notify(Notification::success(format!("{} added to cart!", item.name)));
        Ok(Some(item))
    }

    /// Price a custom order and add it to the cart.
    pub fn submit_custom_order(&mut self, form: CustomOrderForm) -> Result<ItemId, CommerceError> {
        let result = form.into_order((self.clock)()).and_then(|order| {
            let id = order.id.clone();
            self.cart
                .add_item(order.id, order.name, order.price, Some(order.details))?;
            Ok(id)
        });
        let id = self.report(result)?;
        self.notify(Notification::success(CUSTOM_ORDER_ADDED));
        Ok(id)
    }

    /// Validate and record a table reservation.
    pub fn submit_reservation(&mut self, form: ReservationForm) -> Result<Reservation, CommerceError> {
        let result = form.validate((self.clock)()).and_then(|reservation| {
            self.reservations.append(reservation.clone())?;
            Ok(reservation)
        });
        let reservation = self.report(result)?;
        self.notify(Notification::success(reservation.confirmation()));
        Ok(reservation)
    }

    /// Validate and record a contact message.
    pub fn submit_contact(&mut self, form: ContactForm) -> Result<ContactMessage, CommerceError> {
        let result = form.validate((self.clock)()).and_then(|message| {
            self.contacts.append(message.clone())?;
            Ok(message)
        });
        let message = self.report(result)?;
        self.notify(Notification::success(ContactMessage::CONFIRMATION));
        Ok(message)
    }

    /// The `+` control on a cart line.
    pub fn increment(&mut self, id: &ItemId) -> Result<bool, CommerceError> {
        self.cart.increment(id)
    }

    /// The `-` control on a cart line.
    pub fn decrement(&mut self, id: &ItemId) -> Result<bool, CommerceError> {
        self.cart.decrement(id)
    }

    /// Set a line's quantity. Non-positive values are ignored.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: i64) -> Result<bool, CommerceError> {
        self.cart.update_quantity(id, quantity)
    }

    /// The remove control on a cart line.
    pub fn remove(&mut self, id: &ItemId) -> Result<bool, CommerceError> {
        self.cart.remove_item(id)
    }

    /// Summarize and clear the cart.
    pub fn checkout(&mut self) -> Result<OrderSummary, CommerceError> {
        let result = checkout::checkout(&mut self.cart, (self.clock)());
        let summary = self.report(result)?;
        self.notify(Notification::success(ORDER_THANKS));
        Ok(summary)
    }

    fn notify(&mut self, notification: Notification) {
        self.sink.notify(notification);
    }

    /// Pass customer-facing failures on to the sink.
    fn report<T>(&mut self, result: Result<T, CommerceError>) -> Result<T, CommerceError> {
        if let Err(e) = &result {
            if e.is_user_facing() {
                self.notify(Notification::error(e.to_string()));
            }
        }
        result
    }
}

impl<R, N> fmt::Debug for Storefront<R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storefront")
            .field("cart", &self.cart)
            .field("reservations", &self.reservations.key())
            .field("contacts", &self.contacts.key())
            .finish_non_exhaustive()
    }
}
