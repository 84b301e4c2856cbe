//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "api.key")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// List the available keys
    #[arg(long, conflicts_with_all = ["key", "value"])]
    pub keys: bool,

    /// Reset config to defaults
    #[arg(long, conflicts_with_all = ["key", "value"])]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        println!("{}", Config::config_path()?.display());
        return Ok(());
    }

    if args.keys {
        for key in Config::available_keys() {
            println!("{}", key);
        }
        return Ok(());
    }

    if args.reset {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (args.key, args.value) {
        (None, _) => show_all_config(&config),

        (Some(key), None) => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            println!("{}", value);
        }

        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }
    }

    Ok(())
}

fn unknown_key(key: &str) -> Error {
    Error::Config(format!(
        "Unknown config key: {} (available: {})",
        key,
        Config::available_keys().join(", ")
    ))
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[api]");
    if config.api.key.is_empty() {
        println!("key = \"\" # not configured");
    } else {
        println!("key = \"***\" # configured");
    }
    println!("endpoint = \"{}\"", config.api.endpoint);
    println!();

    println!("[search]");
    println!("radius_km = {}", config.search.radius_km);
    println!("per_page = {}", config.search.per_page);
    println!("max_pages = {}", config.search.max_pages);
    println!("safe_search = {}", config.search.safe_search);
    println!();

    println!("[http]");
    println!("timeout_secs = {}", config.http.timeout_secs);
    println!("user_agent = \"{}\"", config.http.user_agent);
}
