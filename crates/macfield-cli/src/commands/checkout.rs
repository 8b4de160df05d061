use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::now_utc;
use anyhow::Result;
use clap::Args;
use macfield_core::checkout::{CheckoutLifecycle, CheckoutSubmission};
use macfield_store::repo::OrderNew;
use tracing::debug;

#[derive(Debug, Args)]
pub struct CheckoutArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: Option<String>,
    /// Raw Mac Address field value; omit to simulate a request without the field
    #[arg(long)]
    pub mac: Option<String>,
}

pub fn checkout(ctx: &Context<'_>, args: CheckoutArgs) -> Result<()> {
    let ext = ctx.extension();
    let submission = CheckoutSubmission {
        mac_address: args.mac.clone(),
    };

    // Submission gate: a rejection here surfaces the notice verbatim and
    // blocks order creation.
    if let Err(notice) = ext.validate_submission(&submission) {
        return Err(invalid_input(notice.to_string()));
    }

    let now = now_utc();
    let meta = ext.meta_on_save(args.mac.as_deref()).into_iter().collect();
    let order = ctx.store.orders().create(
        now,
        OrderNew {
            billing_name: args.name,
            billing_email: args.email,
            meta,
        },
    )?;
    debug!(id = %order.id, "order created");

    if ctx.json {
        print_json(&order)?;
    } else {
        println!("Order {} created", order.id);
    }
    Ok(())
}
