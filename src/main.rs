use anyhow::Result;
use finde_roi::config::{LogFormat, OutputFormat, Settings};
use finde_roi::display::{DisplaySurface, JsonSurface, TextSurface};
use finde_roi::infrastructure::log_messages;
use finde_roi::Application;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let settings = Settings::new()?;
    init_tracing(&settings);

    tracing::info!("{}", log_messages::application::STARTING);

    let output = settings.output.format;
    let app = Application::from_settings(settings)?;

    let stdout = io::stdout().lock();
    let mut surface: Box<dyn DisplaySurface> = match output {
        OutputFormat::Text => Box::new(TextSurface::new(stdout)),
        OutputFormat::Json => Box::new(JsonSurface::new(stdout)),
    };
    app.run(surface.as_mut())?;

    Ok(())
}

fn init_tracing(settings: &Settings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match settings.logging.format {
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}
