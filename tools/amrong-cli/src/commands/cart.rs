//! Cart review, editing and checkout commands.

use amrong_commerce::ItemId;
use anyhow::Result;
use dialoguer::Confirm;

use super::{CheckoutArgs, LineArgs, SetArgs};
use crate::context::{Context, Shop};

/// Show the cart.
pub fn show(ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop()?;
    print_cart(&shop, ctx);
    Ok(())
}

/// One more of a cart line.
pub fn increment(args: LineArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;
    let id = ItemId::new(args.id);

    if !shop.increment(&id)? {
        ctx.output.warn(&format!("No cart line with id {}", id));
    }
    print_cart(&shop, ctx);
    Ok(())
}

/// One less of a cart line. A line is never taken below one.
pub fn decrement(args: LineArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;
    let id = ItemId::new(args.id);

    if !shop.decrement(&id)? {
        if shop.cart().get(&id).is_some() {
            ctx.output
                .warn(&format!("{} is already at 1, use `amrong remove {}`", id, id));
        } else {
            ctx.output.warn(&format!("No cart line with id {}", id));
        }
    }
    print_cart(&shop, ctx);
    Ok(())
}

/// Set a line's quantity.
pub fn set(args: SetArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;
    let id = ItemId::new(args.id);

    if !shop.set_quantity(&id, args.quantity)? {
        if shop.cart().get(&id).is_none() {
            ctx.output.warn(&format!("No cart line with id {}", id));
        } else if args.quantity < 1 {
            ctx.output
                .warn("Quantity must be at least 1, the cart was left unchanged");
        }
    }
    print_cart(&shop, ctx);
    Ok(())
}

/// Remove a cart line.
pub fn remove(args: LineArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;
    let id = ItemId::new(args.id);

    let name = shop.cart().get(&id).map(|line| line.name.clone());
    shop.remove(&id)?;
    match name {
        Some(name) => ctx.output.success(&format!("Removed {}", name)),
        None => ctx.output.warn(&format!("No cart line with id {}", id)),
    }
    print_cart(&shop, ctx);
    Ok(())
}

/// Place the order and empty the cart.
pub fn checkout(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;

    if !shop.cart().is_empty() && !confirm(&args, ctx, "Place this order?", &shop)? {
        ctx.output.info("Checkout cancelled");
        return Ok(());
    }

    let summary = shop.checkout()?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "order": summary.order_number(),
            "summary": summary,
        }));
        return Ok(());
    }

    ctx.output.header(&ctx.config.shop.name);
    ctx.output.text("");
    ctx.output.text(&summary.to_string());
    ctx.output.text("");
    ctx.output.kv("Order", &summary.order_number());
    Ok(())
}

/// Empty the cart without ordering.
pub fn clear(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;

    if shop.cart().is_empty() {
        ctx.output.info("Your cart is already empty");
        return Ok(());
    }
    if !confirm(&args, ctx, "Empty the cart?", &shop)? {
        ctx.output.info("Cart left as it was");
        return Ok(());
    }

    shop.cart_mut().clear()?;
    ctx.output.success("Cart cleared");
    Ok(())
}

/// Ask before a destructive cart action, unless `--yes` or JSON output.
fn confirm(args: &CheckoutArgs, ctx: &Context, prompt: &str, shop: &Shop) -> Result<bool> {
    if args.yes || ctx.output.is_json() {
        return Ok(true);
    }

    print_cart(shop, ctx);
    ctx.output.text("");
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

fn print_cart(shop: &Shop, ctx: &Context) {
    let pricing = shop.cart().cart().pricing();

    if ctx.output.is_json() {
        ctx.output.json(&pricing);
        return;
    }

    ctx.output.header("Your Cart");
    if pricing.is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    ctx.output.text("");
    let id_width = pricing.lines.iter().map(|l| l.id.as_str().len()).max().unwrap_or(0);
    for line in &pricing.lines {
        let unit = format!("{} x{}", line.unit_price, line.quantity);
        let total = line.line_total.display();
        ctx.output.table_row(
            &[line.id.as_str(), line.name.as_str(), unit.as_str(), total.as_str()],
            &[id_width, 36, 12, 8],
        );

        if let Some(item) = shop.cart().get(&line.id) {
            if let Some(instructions) = item.detail("instructions").filter(|s| !s.is_empty()) {
                ctx.output.list_item(&format!("Note: {}", instructions));
            }
        }
    }

    ctx.output.text("");
    ctx.output.kv("Items", &pricing.item_count.to_string());
    ctx.output.kv("Total", &pricing.total.display());
}
