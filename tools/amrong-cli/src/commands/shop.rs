//! Menu browsing and ordering commands.

use amrong_commerce::custom::CustomOrderForm;
use amrong_commerce::menu::MENU;
use amrong_commerce::CommerceError;
use anyhow::Result;
use serde_json::json;

use super::{AddArgs, CustomArgs};
use crate::context::Context;

/// Print the menu.
pub fn menu(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&MENU);
        return Ok(());
    }

    ctx.output.header(&format!("{} Menu", ctx.config.shop.name));
    ctx.output.text("");

    let id_width = MENU.iter().map(|item| item.id.len()).max().unwrap_or(0);
    let name_width = MENU.iter().map(|item| item.name.len()).max().unwrap_or(0);
    for item in MENU.iter() {
        let price = item.price.display();
        ctx.output.table_row(
            &[item.id, item.name, price.as_str()],
            &[id_width, name_width, 8],
        );
    }

    ctx.output.text("");
    ctx.output.info("Add an item with `amrong add <id>`");
    Ok(())
}

/// Add one of a menu item to the cart.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;

    let Some(item) = shop.order_now(&args.product)? else {
        return Err(CommerceError::UnknownProduct(args.product).into());
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "added": item,
            "cart": shop.cart().cart().pricing(),
        }));
    } else {
        ctx.output.kv("Cart total", &shop.cart().compute_total().display());
    }
    Ok(())
}

/// Price a custom order and add it to the cart.
pub fn custom(args: CustomArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;

    let form = CustomOrderForm {
        chicken_type: args.chicken_type,
        quantity: args.quantity,
        spicy_level: args.spice,
        instructions: args.instructions,
    };
    let id = shop.submit_custom_order(form)?;

    let Some(line) = shop.cart().get(&id) else {
        return Ok(());
    };

    if ctx.output.is_json() {
        ctx.output.json(line);
    } else {
        ctx.output.kv("Item", &line.name);
        ctx.output.kv("Id", line.id.as_str());
        ctx.output.kv("Price", &line.price.display());
    }
    Ok(())
}
