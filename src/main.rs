use anyhow::{Context, Result};
use clap::Parser;
use signin::app::App;
use signin::auth::IdentityToolkitProvider;
use signin::cli::Cli;
use signin::styles::init_theme;
use std::sync::Arc;
use tracing::info;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();

    // Set up logging directory
    let log_dir = signin::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "signin.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    let config = cli.load_config()?;
    init_theme(cli.theme_type(&config));

    let provider = IdentityToolkitProvider::from_config(&config.auth)?;
    info!("Using authentication endpoint {}", config.auth.endpoint);

    let mut app = App::new(config, Arc::new(provider), cli.email.clone())?;
    let result = app.run();
    drop(app);

    if let Ok(Some(user)) = &result {
        println!("Signed in as {} ({})", user.email, user.id);
    }

    // Flush logs before exit
    drop(guard);

    result.map(|_| ())
}
