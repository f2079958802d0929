use std::collections::BTreeMap;

/// How report commands (holdings, transactions) render their output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{}'", other)),
        }
    }
}

/// Configuration for a console trading session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Quotes served by the fixture price source, by symbol
    pub share_prices: BTreeMap<String, f64>,
    pub report_format: ReportFormat,
    /// Printed before each command read from an interactive terminal
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let mut share_prices = BTreeMap::new();
        share_prices.insert("AAPL".to_string(), 150.0);
        share_prices.insert("TSLA".to_string(), 700.0);
        share_prices.insert("GOOGL".to_string(), 2800.0);

        SessionConfig {
            share_prices,
            report_format: ReportFormat::Text,
            prompt: "> ".to_string(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> SessionConfig {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup, starting from the defaults
    ///
    /// Invalid values are logged and the default kept.
    pub fn from_lookup<F>(lookup: F) -> SessionConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SessionConfig::default();

        if let Some(raw) = lookup("SHARE_PRICES") {
            let prices = parse_share_prices(&raw);
            if prices.is_empty() {
                tracing::warn!(
                    "SHARE_PRICES '{}' contains no valid SYMBOL=price pairs, using default table",
                    raw
                );
            } else {
                config.share_prices = prices;
            }
        }

        if let Some(raw) = lookup("REPORT_FORMAT") {
            match raw.parse::<ReportFormat>() {
                Ok(format) => config.report_format = format,
                Err(e) => {
                    tracing::warn!(
                        "Invalid REPORT_FORMAT: {}, using default: {:?}",
                        e,
                        config.report_format
                    );
                }
            }
        }

        if let Some(prompt) = lookup("TRADESIM_PROMPT") {
            config.prompt = prompt;
        }

        config
    }
}

/// Parse `SYMBOL=price` pairs separated by commas
///
/// Malformed pairs and non-positive prices are skipped with a warning.
pub fn parse_share_prices(raw: &str) -> BTreeMap<String, f64> {
    let mut prices = BTreeMap::new();

    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let Some((symbol, price)) = pair.split_once('=') else {
            tracing::warn!(
                "Ignoring malformed share price '{}' (expected SYMBOL=price)",
                pair
            );
            continue;
        };

        let symbol = symbol.trim();
        match price.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 && !symbol.is_empty() => {
                prices.insert(symbol.to_string(), value);
            }
            Ok(value) => {
                tracing::warn!(
                    "Ignoring share price for '{}': {} is not a positive price",
                    symbol,
                    value
                );
            }
            Err(e) => {
                tracing::warn!("Failed to parse share price for '{}': {}", symbol, e);
            }
        }
    }

    prices
}
