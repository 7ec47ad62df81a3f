use addressbook::prelude::run_app;
use dotenv::dotenv;
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("addressbook=warn")),
        )
        .init();

    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        exit(1);
    }
}
