use crate::commands::{print_json, Context};
use crate::util::{format_timestamp_datetime, parse_order_id};
use anyhow::Result;
use clap::Args;
use macfield_core::checkout::CheckoutLifecycle;
use macfield_core::domain::Order;
use macfield_core::dto::{OrderDetailDto, OrderListItemDto};
use macfield_store::query::OrderQuery;

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(required = true)]
    pub terms: Vec<String>,
}

pub fn show_order(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_order_id(&args.id)?;
    let ext = ctx.extension();
    let order = ctx.store.orders().get(&id)?;
    let meta = ctx.store.orders().list_meta(&id)?;
    let stored = ctx
        .store
        .orders()
        .get_meta(&id, &ext.field().meta_key)?;
    let detail_rows = ext.order_detail_rows(stored.as_deref());

    let detail = OrderDetailDto {
        id: order.id,
        billing_name: order.billing_name,
        billing_email: order.billing_email,
        created_at: order.created_at,
        updated_at: order.updated_at,
        meta,
        detail_rows,
    };

    if ctx.json {
        return print_json(&detail);
    }

    println!("Order: {}", detail.id);
    println!("Billing name: {}", detail.billing_name);
    if let Some(email) = &detail.billing_email {
        println!("Billing email: {}", email);
    }
    println!("Placed: {}", format_timestamp_datetime(detail.created_at));
    println!("Updated: {}", format_timestamp_datetime(detail.updated_at));
    if !detail.detail_rows.is_empty() {
        println!();
        println!("{}", macfield_core::checkout::ORDER_DETAILS_HEADING);
        for (label, value) in &detail.detail_rows {
            println!("  {}: {}", label, value);
        }
    }
    Ok(())
}

pub fn list_orders(ctx: &Context<'_>, _args: ListArgs) -> Result<()> {
    let orders = ctx.store.orders().list_all()?;
    print_order_lines(ctx, orders)
}

pub fn search_orders(ctx: &Context<'_>, args: SearchArgs) -> Result<()> {
    let ext = ctx.extension();
    let query = OrderQuery::new(args.terms, ext.search_meta_keys());
    let orders = ctx.store.orders().search(&query)?;
    print_order_lines(ctx, orders)
}

fn print_order_lines(ctx: &Context<'_>, orders: Vec<Order>) -> Result<()> {
    let ext = ctx.extension();
    let mut items = Vec::with_capacity(orders.len());
    for order in orders {
        let mac_address = ctx
            .store
            .orders()
            .get_meta(&order.id, &ext.field().meta_key)?;
        items.push(OrderListItemDto {
            id: order.id,
            billing_name: order.billing_name,
            mac_address,
            created_at: order.created_at,
        });
    }

    if ctx.json {
        return print_json(&items);
    }

    for item in items {
        let mac = item.mac_address.as_deref().unwrap_or("-");
        println!(
            "{}  {}  {}  {}",
            item.id,
            format_timestamp_datetime(item.created_at),
            mac,
            item.billing_name
        );
    }
    Ok(())
}
