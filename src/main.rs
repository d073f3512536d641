use phonebook::prelude::run_app;
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv::dotenv().ok();

    // Silent unless RUST_LOG asks; user-facing messages go through notifications.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        exit(1);
    }
}
