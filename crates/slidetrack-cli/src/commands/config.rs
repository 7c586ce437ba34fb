use anyhow::{bail, Result};

use slidetrack_core::AppConfig;

pub fn path() -> Result<()> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn init(force: bool) -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() && !force {
        bail!(
            "Configuration already exists at {}\nUse --force to overwrite it.",
            path.display()
        );
    }

    AppConfig::default().save()?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
