use anyhow::Result;
use owo_colors::OwoColorize;
use schedcal_core::config::{SchedConfig, API_KEY_ENV};

pub fn run() -> Result<()> {
    let config_path = SchedConfig::config_path()?;

    if !config_path.exists() {
        SchedConfig::create_default_config(&config_path)?;
        println!("{}", format!("Created {}", config_path.display()).green());
        println!();
    }

    let config = SchedConfig::load()?;

    println!("{}", "Config".bold());
    println!("  Path:      {}", config_path.display());
    println!("  Timezone:  {}", config.timezone);
    println!("  Model:     {}", config.model);
    println!(
        "  API key:   {} ({})",
        API_KEY_ENV,
        if std::env::var(API_KEY_ENV).is_ok() {
            "set".green().to_string()
        } else {
            "not set".red().to_string()
        }
    );

    Ok(())
}
