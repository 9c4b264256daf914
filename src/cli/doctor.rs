use super::spinner::Spinner;
use anyhow::{Result, bail};
use console::style;
use sitecraft_core::config::ConfigManager;
use sitecraft_core::diagnostics::{self, CheckStatus, DiagnosticReport};
use sitecraft_core::gemini::ClientConfig;

pub async fn handle_doctor_command(manager: &ConfigManager, relay_url: Option<&str>) -> Result<()> {
    let settings = manager.service_settings();

    let spinner = Spinner::new("Checking credential...");
    let mut report = diagnostics::check_credential(&settings).await;

    let relay_url = relay_url.map(str::to_string).or_else(|| settings.relay_url.clone());
    if let Some(url) = relay_url.as_deref() {
        spinner.set_message("Checking relay endpoint...");
        let key = settings.api_key.as_deref().unwrap_or_default();
        report.extend(diagnostics::diagnose_relay(url, key, &ClientConfig::diagnostics()).await);
    }
    spinner.finish_and_clear();

    print_report(&report);
    if report.has_failures() {
        bail!("Diagnostics reported failures");
    }
    Ok(())
}

fn print_report(report: &DiagnosticReport) {
    println!("{}", style("sitecraft doctor").blue().bold());
    for check in &report.checks {
        let status = match check.status {
            CheckStatus::Pass => style(check.status.to_string()).green(),
            CheckStatus::Warn => style(check.status.to_string()).yellow(),
            CheckStatus::Fail => style(check.status.to_string()).red().bold(),
        };
        println!("  [{status}] {:<14} {}", check.name, check.message);
    }
}
