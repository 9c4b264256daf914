use super::args::GenerateArgs;
use super::spinner::Spinner;
use anyhow::{Context, Result, bail};
use console::style;
use sitecraft_core::config::{ConfigManager, ServiceSettings};
use sitecraft_core::export;
use sitecraft_core::{GenerationResult, GenerationSource, Orchestrator, ThemeId};
use std::fs;
use std::io::Write;

/// Join prompt words and reject blank input
pub fn prompt_text(words: &[String]) -> Result<String> {
    let prompt = words.join(" ").trim().to_string();
    if prompt.is_empty() {
        bail!("Please describe the website you want to create");
    }
    Ok(prompt)
}

pub async fn handle_generate_command(manager: &ConfigManager, args: GenerateArgs) -> Result<()> {
    let prompt = prompt_text(&args.prompt)?;
    let theme = args
        .theme
        .unwrap_or_else(|| manager.config().generation.default_theme.clone());

    let settings = if args.template_only {
        ServiceSettings::template_only()
    } else {
        manager.service_settings()
    };
    let orchestrator = Orchestrator::from_settings(&settings);

    let spinner = Spinner::new(match orchestrator.planned_source() {
        GenerationSource::Template => "Composing page from template...",
        GenerationSource::ExternalDirect => "Generating page with the service...",
        GenerationSource::ExternalRelay => "Generating page through the relay...",
    });
    let result = orchestrator.generate(&prompt, &theme).await;
    spinner.finish_and_clear();

    report(&result);

    match &args.output {
        Some(path) => {
            fs::write(path, &result.html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} {}", style("Saved").green().bold(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(result.html.as_bytes())
                .context("Failed to write document to stdout")?;
            writeln!(stdout)?;
        }
    }

    if let Some(dir) = &args.archive {
        let archive =
            export::write_archive(&result.html, ThemeId::from_name_or_default(&theme), dir)?;
        eprintln!("{} {}", style("Archive").green().bold(), archive.display());
    }
    Ok(())
}

fn report(result: &GenerationResult) {
    let label = match result.source {
        GenerationSource::Template => style("built-in template").cyan(),
        GenerationSource::ExternalDirect => style("generation service").green(),
        GenerationSource::ExternalRelay => style("relay").green(),
    };
    eprintln!(
        "{} {} ({} characters)",
        style("Source:").bold(),
        label,
        result.html.chars().count()
    );
    for warning in &result.warnings {
        eprintln!("{} {warning}", style("warning:").yellow().bold());
    }
}
