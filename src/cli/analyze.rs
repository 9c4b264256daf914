use super::generate::prompt_text;
use anyhow::{Context, Result};
use console::style;
use sitecraft_core::ThemeId;
use sitecraft_core::config::ConfigManager;
use sitecraft_core::template::analyze;

/// Print the analyzed configuration as JSON
pub fn handle_analyze_command(
    manager: &ConfigManager,
    words: &[String],
    theme: Option<&str>,
) -> Result<()> {
    let prompt = prompt_text(words)?;
    let theme = theme.unwrap_or(&manager.config().generation.default_theme);
    let config = analyze(&prompt, theme);
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize analysis")?;
    println!("{json}");
    Ok(())
}

pub fn handle_themes_command() -> Result<()> {
    println!("{}", style("Available themes").blue().bold());
    for theme in ThemeId::ALL {
        let palette = theme.palette();
        println!(
            "  {:<10} primary {}  secondary {}  accent {}",
            theme.as_str(),
            palette.primary,
            palette.secondary,
            palette.accent
        );
    }
    Ok(())
}
