use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use macfield_core::checkout::CheckoutLifecycle;
use macfield_core::dto::CheckoutFormDto;

#[derive(Debug, Args)]
pub struct FieldsArgs {}

pub fn show_fields(ctx: &Context<'_>, _args: FieldsArgs) -> Result<()> {
    let fields = ctx.extension().render_fields();

    if ctx.json {
        return print_json(&CheckoutFormDto { fields });
    }

    for field in fields {
        if let Some(section) = &field.section {
            println!("{}", section);
        }
        let marker = if field.required { ", required" } else { "" };
        println!(
            "  {} ({}) [priority {}{}]",
            field.label, field.placeholder, field.priority, marker
        );
    }
    Ok(())
}
