use std::io::{self, Write};

use clap::Parser;
use serde::Serialize;
use serde_json::Value;

use cli::{Cli, Commands};
use nsdebug::{compile, config, Registry, Rule};

mod cli;

#[derive(Serialize)]
struct CompiledPattern {
    names: Vec<Rule>,
    skips: Vec<Rule>,
    pattern: String,
}

fn parse_arg(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Check {
            pattern,
            namespaces,
        } => {
            let registry = Registry::new();
            registry.enable(&pattern);
            for namespace in namespaces {
                let state = if registry.enabled(&namespace) {
                    "enabled"
                } else {
                    "disabled"
                };
                writeln!(out, "{}: {}", namespace, state)?;
            }
        }

        Commands::Normalize { pattern, json } => {
            let rules = compile(&pattern);
            if json {
                let compiled = CompiledPattern {
                    names: rules.names().cloned().collect(),
                    skips: rules.skips().cloned().collect(),
                    pattern: rules.to_pattern(),
                };
                serde_json::to_writer_pretty(&mut out, &compiled)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", rules)?;
            }
        }

        Commands::Emit { namespace, args } => {
            config::init();
            // Only fails if a logger is already installed
            let _ = nsdebug::logging::init();

            let log = nsdebug::debug(&namespace);
            let first = args.first().map(|arg| Value::String(arg.clone()));
            let rest = args.iter().skip(1).map(|arg| parse_arg(arg));
            let args: Vec<Value> = first.into_iter().chain(rest).collect();
            log.call(&args);

            log::trace!(target: "nsdebug::cli", "emitted to {}", namespace);
        }
    }

    Ok(())
}
