//! Configuration command

use clap::Subcommand;
use safespeak_core::{config::default_config_path, error::Result, SafespeakConfig};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the default config file location
    Path,
}

/// Handle configuration command
pub fn handle(config: &SafespeakConfig, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", default_config_path().display());
            Ok(())
        }
    }
}
