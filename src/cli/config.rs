use super::args::ConfigAction;
use anyhow::{Result, bail};
use console::style;
use sitecraft_core::config::constants::defaults;
use sitecraft_core::config::{ConfigManager, mask_secret};
use sitecraft_core::relay;
use std::path::Path;

pub fn handle_config_command(
    mut manager: ConfigManager,
    action: ConfigAction,
    workspace: &Path,
) -> Result<()> {
    match action {
        ConfigAction::Show => show(&manager),
        ConfigAction::Init { force } => {
            let path = workspace.join(defaults::CONFIG_FILE_NAME);
            if ConfigManager::create_sample_config(&path, force)? {
                println!("{} {}", style("Created").green().bold(), path.display());
            } else {
                println!(
                    "{} already exists; pass --force to overwrite",
                    path.display()
                );
            }
            Ok(())
        }
        ConfigAction::SetKey { key } => {
            let key = key.trim();
            if key.is_empty() {
                bail!("API key cannot be empty");
            }
            manager.config_mut().service.api_key = Some(key.to_string());
            let path = manager.save()?;
            println!(
                "{} API key {} in {}",
                style("Saved").green().bold(),
                mask_secret(key),
                path.display()
            );
            Ok(())
        }
        ConfigAction::SetRelay { url } => {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!("Relay URL must start with http:// or https://");
            }
            if relay::is_test_endpoint(url) {
                eprintln!(
                    "{} test endpoints only answer while the workflow editor listens; consider {}",
                    style("warning:").yellow().bold(),
                    relay::production_url(url)
                );
            }
            manager.config_mut().service.relay_url = Some(url.to_string());
            let path = manager.save()?;
            println!("{} relay URL in {}", style("Saved").green().bold(), path.display());
            Ok(())
        }
        ConfigAction::ClearRelay => {
            manager.config_mut().service.relay_url = None;
            let path = manager.save()?;
            println!(
                "{} relay URL removed from {}; the service will be called directly",
                style("Saved").green().bold(),
                path.display()
            );
            Ok(())
        }
    }
}

fn show(manager: &ConfigManager) -> Result<()> {
    let settings = manager.service_settings();
    let config = manager.config();

    println!("{}", style("sitecraft configuration").blue().bold());
    match manager.config_path() {
        Some(path) => println!("  file:          {}", path.display()),
        None => println!("  file:          (none, using defaults)"),
    }
    let key = settings
        .api_key
        .as_deref()
        .map_or_else(|| "(not set)".to_string(), mask_secret);
    println!("  api key:       {key}");
    println!(
        "  relay url:     {}",
        settings.relay_url.as_deref().unwrap_or("(not set)")
    );
    println!("  model:         {}", settings.model);
    println!("  base url:      {}", settings.base_url);
    println!("  default theme: {}", config.generation.default_theme);

    let mode = match (&settings.api_key, &settings.relay_url) {
        (None, _) => "built-in template only",
        (Some(_), None) => "direct service call",
        (Some(_), Some(_)) => "relay",
    };
    println!("  mode:          {mode}");
    Ok(())
}
