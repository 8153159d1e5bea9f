use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use operacoes_core::Operator;

use crate::client::{OperationClient, DEFAULT_BASE_URL};
use crate::error::Result;

/// Where the service lives and how long to wait for it.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ConnectionArgs {
    /// The base URL of the service.
    #[arg(short, long, global = true, env = "API_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "API_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl ConnectionArgs {
    pub fn client(&self) -> Result<OperationClient> {
        OperationClient::with_timeout(&self.url, Duration::from_secs(self.timeout_secs))
    }
}

/// Command-line client for the arithmetic operations service.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Without a command, runs the scripted demonstration.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Performs one operation and prints its result.
    #[command(allow_negative_numbers = true)]
    Calc {
        /// soma | subtracao | multiplicacao | divisao (or add, subtract, multiply, divide)
        operator: Operator,
        numero1: f64,
        numero2: f64,
        /// Print the whole result record as JSON instead of the bare number.
        #[arg(long)]
        json: bool,
    },
    /// Prints the service greeting.
    Welcome,
    /// Runs the scripted demonstration.
    Demo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calc_with_negative_operands() {
        let cli = Cli::try_parse_from(["operacoes-cli", "calc", "subtracao", "-3", "-4.5"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Calc {
                operator: Operator::Subtract,
                numero1: -3.0,
                numero2: -4.5,
                json: false,
            })
        );
    }

    #[test]
    fn accepts_english_operator_names_and_global_url() {
        let cli = Cli::try_parse_from(["operacoes-cli", "calc", "divide", "10", "0", "--url", "http://svc:9000"]).unwrap();
        assert_eq!(cli.connection.url, "http://svc:9000");
        assert!(matches!(cli.command, Some(Command::Calc { operator: Operator::Divide, .. })));
    }

    #[test]
    fn rejects_unknown_operator_and_non_numeric_operand() {
        assert!(Cli::try_parse_from(["operacoes-cli", "calc", "potencia", "2", "3"]).is_err());
        assert!(Cli::try_parse_from(["operacoes-cli", "calc", "soma", "abc", "3"]).is_err());
    }

    #[test]
    fn no_subcommand_means_demo() {
        let cli = Cli::try_parse_from(["operacoes-cli", "--timeout-secs", "3"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.connection.timeout_secs, 3);
    }
}
