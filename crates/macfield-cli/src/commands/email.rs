use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::{format_timestamp_datetime, parse_order_id};
use anyhow::{Context as _, Result};
use clap::Args;
use lettre::message::Mailbox;
use lettre::Message;
use macfield_core::checkout::CheckoutLifecycle;
use macfield_core::dto::EmailPreviewDto;

#[derive(Debug, Args)]
pub struct EmailArgs {
    pub id: String,
}

pub fn preview_email(ctx: &Context<'_>, args: EmailArgs) -> Result<()> {
    let id = parse_order_id(&args.id)?;
    let ext = ctx.extension();
    let order = ctx.store.orders().get(&id)?;
    let stored = ctx
        .store
        .orders()
        .get_meta(&id, &ext.field().meta_key)?;
    let fields = ext.email_fields(stored.as_deref());

    let to = order
        .billing_email
        .clone()
        .ok_or_else(|| invalid_input(format!("order {} has no billing email", id)))?;

    let mut body = format!(
        "Thank you for your order, {}.\n\nOrder: {}\nPlaced: {}\n",
        order.billing_name,
        order.id,
        format_timestamp_datetime(order.created_at)
    );
    if !fields.is_empty() {
        body.push('\n');
        for field in &fields {
            body.push_str(&format!("{}: {}\n", field.label, field.value));
        }
    }

    let from_mailbox: Mailbox = ctx
        .config
        .email
        .from
        .parse()
        .with_context(|| "parse from address")?;
    let to_mailbox: Mailbox = to
        .parse()
        .map_err(|_| invalid_input(format!("invalid billing email: {}", to)))?;
    let message = Message::builder()
        .from(from_mailbox)
        .to(to_mailbox)
        .subject(ctx.config.email.subject.clone())
        .body(body.clone())
        .with_context(|| "build email")?;

    if ctx.json {
        return print_json(&EmailPreviewDto {
            to,
            from: ctx.config.email.from.clone(),
            subject: ctx.config.email.subject.clone(),
            fields,
            body,
        });
    }

    print!("{}", String::from_utf8_lossy(&message.formatted()));
    Ok(())
}
