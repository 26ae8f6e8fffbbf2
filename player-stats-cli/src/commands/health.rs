use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::client::ApiClient;
use crate::error::CliError;
use crate::spinner::with_spinner;

pub(crate) fn run_health(client: &ApiClient, quiet: bool) -> Result<(), CliError> {
    let health = with_spinner("Contacting API...", quiet, || client.health())?;
    log::info!(
        "{} {} {}",
        health.status.if_supports_color(Stdout, |t| t.green()),
        health.message,
        format!("({})", health.timestamp).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("  API: {}", client.base().if_supports_color(Stdout, |t| t.cyan()));
    Ok(())
}
