use contact_book::prelude::run_app;
use dotenv::dotenv;
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() {
    // Settings and RUST_LOG may come from a .env file
    dotenv().ok();

    // Diagnostics go to stderr so they never interleave with menu output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
