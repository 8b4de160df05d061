use crate::commands::Context;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BackupArgs {
    pub path: PathBuf,
}

pub fn backup(ctx: &Context<'_>, args: BackupArgs) -> Result<()> {
    ctx.store.backup_to(&args.path)?;
    if !ctx.json {
        println!("Backup written to {}", args.path.display());
    }
    Ok(())
}
