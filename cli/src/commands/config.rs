//! Config commands

use crate::config::Config;
use crate::ConfigCommands;

pub fn handle(action: ConfigCommands, profile: Option<&str>) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Init => {
            let config = Config::default();
            config.save(profile).map_err(anyhow::Error::msg)?;
            let path = Config::config_path(profile).map_err(anyhow::Error::msg)?;
            println!("Configuration initialized at {}", path.display());
        }
        ConfigCommands::Set { key, value } => {
            Config::update(profile, |config| config.set(&key, value)).map_err(anyhow::Error::msg)?;
            println!("Set {} successfully", key);
        }
        ConfigCommands::Get { key } => {
            let config = Config::load(profile).map_err(anyhow::Error::msg)?;
            let value = config.get(&key).map_err(anyhow::Error::msg)?;
            println!("{}: {}", key, value.unwrap_or_else(|| "(not set)".into()));
        }
        ConfigCommands::List => {
            let config = Config::load(profile).map_err(anyhow::Error::msg)?;
            for key in ["api_url", "access_token", "default_format"] {
                let value = config.get(key).map_err(anyhow::Error::msg)?;
                println!("{}: {}", key, value.unwrap_or_else(|| "(not set)".into()));
            }
        }
    }
    Ok(())
}
