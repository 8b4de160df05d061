use anyhow::Result;
use macfield_config::AppConfig;
use macfield_core::checkout::MacFieldExtension;
use macfield_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod admin;
pub mod backup;
pub mod checkout;
pub mod completions;
pub mod email;
pub mod fields;
pub mod orders;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub config: &'a AppConfig,
}

impl Context<'_> {
    /// The configured field extension; every lifecycle event goes through it.
    pub fn extension(&self) -> MacFieldExtension {
        MacFieldExtension::new(self.config.field.clone())
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
