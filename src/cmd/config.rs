//! Configuration inspection and bootstrap.

use anyhow::Result;
use console::style;

use pizzacraft::config::{Config, ConfigFile};

use super::super::ConfigCommands;

pub fn cmd_config(config: &Config, command: Option<ConfigCommands>) -> Result<()> {
    match command.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => show(config),
        ConfigCommands::Init => init(config)?,
    }
    Ok(())
}

fn show(config: &Config) {
    println!();
    println!("{}", style("Resolved configuration").bold());
    println!("  api_url:        {}", config.api_url);
    println!("  widget_url:     {}", config.widget_url);
    println!("  payment_key_id: {}", config.payment_key_id);
    println!("  widget timeout: {}s", config.widget_timeout_secs);
    println!("  data_dir:       {}", config.data_dir.display());
    println!("  cart_file:      {}", config.cart_file.display());
    println!("  session_file:   {}", config.session_file.display());
    println!();
    if !config.config_file().exists() {
        println!(
            "  {}",
            style("Using default configuration (no config.toml found)").dim()
        );
        println!();
    }
}

fn init(config: &Config) -> Result<()> {
    let path = config.config_file();
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }
    ConfigFile::default().save(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
