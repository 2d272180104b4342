use tracing_subscriber::EnvFilter;

use b12_submit::config::Config;
use b12_submit::error::SubmitError;

#[tokio::main]
async fn main() {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init tracing; stdout is reserved for the submission receipt
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), SubmitError> {
    let config = Config::from_env()?;
    let receipt = b12_submit::run(&config).await?;

    println!("{}", receipt.body);
    Ok(())
}
