use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr so stdout stays clean for `get --echo` and `list --json`
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("passdesk=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = passdesk::cli::run().await {
        eprintln!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}
