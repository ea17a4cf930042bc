//! Reservation and contact form commands.

use amrong_commerce::records::{ContactForm, ReservationForm};
use anyhow::Result;

use super::{ContactArgs, ReserveArgs};
use crate::context::Context;

/// Book a table.
pub fn reserve(args: ReserveArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;

    let reservation = shop.submit_reservation(ReservationForm {
        name: args.name,
        email: args.email,
        date: args.date,
        time: args.time,
        guests: args.guests,
        phone: args.phone,
    })?;

    if ctx.output.is_json() {
        ctx.output.json(&reservation);
    } else {
        ctx.output.kv("Date", &reservation.date);
        ctx.output.kv("Time", &reservation.time);
        ctx.output.kv("Guests", &reservation.guests);
    }
    Ok(())
}

/// Send a message to the shop.
pub fn contact(args: ContactArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;

    let message = shop.submit_contact(ContactForm {
        name: args.name,
        email: args.email,
        message: args.message,
    })?;

    if ctx.output.is_json() {
        ctx.output.json(&message);
    }
    Ok(())
}
