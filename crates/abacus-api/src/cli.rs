//! Command-line interface for the `abacus` binary.

use std::path::PathBuf;

use abacus_calculator::{Calculator, Number, OperandPair, Operation};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::config::AbacusConfig;

/// Abacus arithmetic service
#[derive(Parser, Debug)]
#[command(name = "abacus")]
#[command(about = "Four-function calculator served over HTTP and the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server (the default when no command is given)
    Serve(ServeArgs),

    /// Evaluate one calculation and print the result
    Calc(CalcArgs),

    /// Describe the service and its endpoints
    Explain,
}

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Interface to bind (overrides config and ABACUS_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config and ABACUS_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ServeArgs {
    /// Loads the configuration this invocation asks for: the `--config` file
    /// (or the default lookup), then environment overrides, then flags.
    pub fn resolve_config(&self) -> anyhow::Result<AbacusConfig> {
        let config = match &self.config {
            Some(path) => AbacusConfig::load_from(path)?,
            None => AbacusConfig::load()?,
        };
        Ok(self.apply_to(config.apply_env_overrides()))
    }

    pub fn apply_to(&self, mut config: AbacusConfig) -> AbacusConfig {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        config
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CalcArgs {
    /// add, subtract, multiply or divide
    pub operation: Operation,

    /// First operand
    #[arg(allow_negative_numbers = true)]
    pub a: String,

    /// Second operand
    #[arg(allow_negative_numbers = true)]
    pub b: String,
}

/// Validates the operands and evaluates the calculation.
pub fn run_calc(args: &CalcArgs) -> anyhow::Result<Number> {
    let operands = OperandPair::from_text(Some(&args.a), Some(&args.b))?;
    let result = Calculator::new()
        .calculate(args.operation, &operands)
        .with_context(|| {
            let symbol = args.operation.symbol();
            format!("{} {symbol} {} failed", operands.a, operands.b)
        })?;
    Ok(result)
}

pub fn explain_text() -> String {
    let mut text = String::from("Abacus - four-function calculator service\n\n");
    text.push_str("HTTP endpoints:\n");
    for op in Operation::ALL {
        text.push_str(&format!(
            "  POST /{:<9} {{\"a\": <number>, \"b\": <number>}} -> {{\"result\": a {} b}}\n",
            op.name(),
            op.symbol()
        ));
    }
    text.push_str("  GET  /          interactive calculator page\n");
    text.push_str("  GET  /health    service health\n");
    text.push_str("  GET  /api-docs/openapi.json\n\n");
    text.push_str("Errors:\n");
    text.push_str("  422 invalid or missing operands\n");
    text.push_str("  400 division by zero (\"Cannot divide by zero!\")\n");
    text
}
