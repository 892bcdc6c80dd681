//! `bk config` – show the effective client configuration.

use anyhow::Result;
use bk_core::config::{self, ClientConfig};

pub fn run_config(cfg: &ClientConfig) -> Result<()> {
    println!("config:   {}", config::config_path()?.display());
    println!("api_host: {}", cfg.api_host);
    Ok(())
}
