use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::{now_utc, parse_order_id};
use anyhow::Result;
use clap::{Args, Subcommand};
use macfield_core::checkout::CheckoutLifecycle;

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Edit the Mac Address stored on an order
    Edit(EditArgs),
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub mac: Option<String>,
}

pub fn edit_order(ctx: &Context<'_>, args: EditArgs) -> Result<()> {
    let id = parse_order_id(&args.id)?;
    let ext = ctx.extension();

    // The admin save path mirrors the storefront one: normalize-only, no
    // re-validation of the entered value.
    let entry = match ext.meta_on_save(args.mac.as_deref()) {
        Some(entry) => entry,
        None => return Err(invalid_input("nothing to update; pass --mac")),
    };

    ctx.store.orders().update_meta(now_utc(), &id, &entry)?;

    if ctx.json {
        print_json(&entry)?;
    } else {
        println!("Order {} updated: {} = {}", id, entry.key, entry.value);
    }
    Ok(())
}
