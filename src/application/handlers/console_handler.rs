use serde::Serialize;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

use crate::application::services::trading_session::{SessionError, TradingSession};
use crate::config::ReportFormat;

const HELP_TEXT: &str = "\
Commands:
  create <username> <initial_deposit>   open a new account
  deposit <amount>                      add cash
  withdraw <amount>                     take cash out
  buy <symbol> <quantity>               buy shares at the current price
  sell <symbol> <quantity>              sell shares at the current price
  holdings                              show shares held
  value                                 show total portfolio value
  pnl                                   show profit or loss
  transactions                          show the transaction history
  help                                  show this list
  quit                                  end the session";

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Unknown command: {0} (type 'help' for a list of commands)")]
    UnknownCommand(String),

    #[error("Missing {argument} for '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Too many arguments for '{command}'")]
    TooManyArguments { command: &'static str },

    #[error("Invalid {argument}: '{value}' is not a number")]
    InvalidNumber {
        argument: &'static str,
        value: String,
    },

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// A parsed console command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create { username: String, initial_deposit: f64 },
    Deposit { amount: f64 },
    Withdraw { amount: f64 },
    Buy { symbol: String, quantity: i64 },
    Sell { symbol: String, quantity: i64 },
    Holdings,
    PortfolioValue,
    ProfitOrLoss,
    Transactions,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, ConsoleError> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();

        let command = match verb.to_lowercase().as_str() {
            "create" => {
                let [username, deposit] =
                    expect_args("create", &args, ["username", "initial deposit"])?;
                Command::Create {
                    username: username.to_string(),
                    initial_deposit: parse_f64("initial deposit", deposit)?,
                }
            }
            "deposit" => {
                let [amount] = expect_args("deposit", &args, ["amount"])?;
                Command::Deposit {
                    amount: parse_f64("amount", amount)?,
                }
            }
            "withdraw" => {
                let [amount] = expect_args("withdraw", &args, ["amount"])?;
                Command::Withdraw {
                    amount: parse_f64("amount", amount)?,
                }
            }
            "buy" => {
                let [symbol, quantity] = expect_args("buy", &args, ["symbol", "quantity"])?;
                Command::Buy {
                    symbol: symbol.to_string(),
                    quantity: parse_i64("quantity", quantity)?,
                }
            }
            "sell" => {
                let [symbol, quantity] = expect_args("sell", &args, ["symbol", "quantity"])?;
                Command::Sell {
                    symbol: symbol.to_string(),
                    quantity: parse_i64("quantity", quantity)?,
                }
            }
            "holdings" => Command::Holdings,
            "value" => Command::PortfolioValue,
            "pnl" => Command::ProfitOrLoss,
            "transactions" => Command::Transactions,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(ConsoleError::UnknownCommand(verb.to_string())),
        };

        Ok(Some(command))
    }
}

fn expect_args<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
    names: [&'static str; N],
) -> Result<[&'a str; N], ConsoleError> {
    if args.len() < N {
        return Err(ConsoleError::MissingArgument {
            command,
            argument: names[args.len()],
        });
    }
    if args.len() > N {
        return Err(ConsoleError::TooManyArguments { command });
    }
    let mut out = [""; N];
    out.copy_from_slice(args);
    Ok(out)
}

fn parse_f64(argument: &'static str, value: &str) -> Result<f64, ConsoleError> {
    value.parse::<f64>().map_err(|_| ConsoleError::InvalidNumber {
        argument,
        value: value.to_string(),
    })
}

fn parse_i64(argument: &'static str, value: &str) -> Result<i64, ConsoleError> {
    value.parse::<i64>().map_err(|_| ConsoleError::InvalidNumber {
        argument,
        value: value.to_string(),
    })
}

/// Outcome of handling one line
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Message(String),
    Quit,
}

#[derive(Debug, Serialize)]
struct PortfolioValueReport {
    portfolio_value: f64,
}

#[derive(Debug, Serialize)]
struct ProfitOrLossReport {
    profit_or_loss: f64,
}

/// Line-oriented front end over a [`TradingSession`]
pub struct ConsoleHandler {
    session: TradingSession,
    report_format: ReportFormat,
}

impl ConsoleHandler {
    pub fn new(session: TradingSession, report_format: ReportFormat) -> Self {
        Self {
            session,
            report_format,
        }
    }

    pub fn session(&self) -> &TradingSession {
        &self.session
    }

    /// Parse and execute one line, rendering any failure as the reply text
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Reply::Message(String::new()),
            Err(e) => return Reply::Message(format!("Error: {}", e)),
        };

        debug!("Executing console command: {:?}", command);
        if command == Command::Quit {
            return Reply::Quit;
        }

        match self.execute(command) {
            Ok(message) => Reply::Message(message),
            Err(e) => Reply::Message(format!("Error: {}", e)),
        }
    }

    /// Execute a parsed command and render its success reply
    pub fn execute(&mut self, command: Command) -> Result<String, ConsoleError> {
        let reply = match command {
            Command::Create {
                username,
                initial_deposit,
            } => {
                self.session.create_account(&username, initial_deposit)?;
                format!(
                    "Account created for {} with an initial deposit of {:?}",
                    username, initial_deposit
                )
            }
            Command::Deposit { amount } => {
                let balance = self.session.deposit(amount)?;
                format!("Deposited: {:?}. Current balance: {:?}", amount, balance)
            }
            Command::Withdraw { amount } => {
                let balance = self.session.withdraw(amount)?;
                format!("Withdrew: {:?}. Current balance: {:?}", amount, balance)
            }
            Command::Buy { symbol, quantity } => {
                let balance = self.session.buy_shares(&symbol, quantity)?;
                format!(
                    "Bought {} shares of {}. Remaining balance: {:?}",
                    quantity, symbol, balance
                )
            }
            Command::Sell { symbol, quantity } => {
                let balance = self.session.sell_shares(&symbol, quantity)?;
                format!(
                    "Sold {} shares of {}. Remaining balance: {:?}",
                    quantity, symbol, balance
                )
            }
            Command::Holdings => self.render_holdings()?,
            Command::PortfolioValue => {
                let value = self.session.portfolio_value()?;
                match self.report_format {
                    ReportFormat::Text => format!("Portfolio value: {:?}", value),
                    ReportFormat::Json => serde_json::to_string(&PortfolioValueReport {
                        portfolio_value: value,
                    })?,
                }
            }
            Command::ProfitOrLoss => {
                let pnl = self.session.profit_or_loss()?;
                match self.report_format {
                    ReportFormat::Text => format!("Profit/Loss: {}", pnl),
                    ReportFormat::Json => serde_json::to_string(&ProfitOrLossReport {
                        profit_or_loss: pnl.value(),
                    })?,
                }
            }
            Command::Transactions => self.render_transactions()?,
            Command::Help => HELP_TEXT.to_string(),
            Command::Quit => String::new(),
        };

        Ok(reply)
    }

    fn render_holdings(&self) -> Result<String, ConsoleError> {
        let holdings = self.session.holdings()?;
        Ok(match self.report_format {
            ReportFormat::Json => serde_json::to_string(&holdings)?,
            ReportFormat::Text if holdings.is_empty() => "No holdings".to_string(),
            ReportFormat::Text => holdings
                .iter()
                .map(|(symbol, quantity)| format!("{}: {}", symbol, quantity))
                .collect::<Vec<_>>()
                .join("\n"),
        })
    }

    fn render_transactions(&self) -> Result<String, ConsoleError> {
        Ok(match self.report_format {
            ReportFormat::Json => serde_json::to_string(&self.session.ledger_entries()?)?,
            ReportFormat::Text => {
                let transactions = self.session.transactions()?;
                if transactions.is_empty() {
                    "No transactions".to_string()
                } else {
                    transactions.join("\n")
                }
            }
        })
    }

    /// Read commands from `input` until EOF or `quit`, writing replies to `output`
    ///
    /// When `prompt` is set it is written before each line is read.
    pub fn run<R, W>(&mut self, input: R, mut output: W, prompt: Option<&str>) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = prompt {
                write!(output, "{}", prompt)?;
                output.flush()?;
            }

            let Some(line) = lines.next().transpose()? else {
                break;
            };

            match self.handle_line(&line) {
                Reply::Quit => break,
                Reply::Message(message) if message.is_empty() => {}
                Reply::Message(message) => writeln!(output, "{}", message)?,
            }
        }

        info!("Console session ended");
        Ok(())
    }
}
