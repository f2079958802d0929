use std::io::{self, IsTerminal};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tradesim::application::handlers::ConsoleHandler;
use tradesim::application::services::TradingSession;
use tradesim::config::SessionConfig;
use tradesim::infrastructure::FixedPriceOracle;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the command replies
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tradesim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = SessionConfig::from_env();
    let oracle = Arc::new(FixedPriceOracle::from_config(&config));
    info!("Trading simulator starting");
    info!("Quoted symbols: {}", oracle.symbols().join(", "));

    let mut console = ConsoleHandler::new(TradingSession::new(oracle), config.report_format);

    let stdin = io::stdin();
    let prompt = stdin.is_terminal().then_some(config.prompt.as_str());
    if prompt.is_some() {
        println!("Trading Simulation Platform. Type 'help' for a list of commands.");
    }

    console.run(stdin.lock(), io::stdout().lock(), prompt)?;

    Ok(())
}
