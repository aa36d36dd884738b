use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(author, version, about, propagate_version = true)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Report whether each namespace is enabled by a pattern
    Check {
        /// Namespaces pattern; defaults to $DEBUG
        #[arg(long, short, env = "DEBUG", default_value = "")]
        pattern: String,

        #[arg(required = true)]
        namespaces: Vec<String>,
    },

    /// Print the canonical form of a pattern
    Normalize {
        pattern: String,

        /// Print the compiled names and skips as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Log a message through a namespace, configured from the DEBUG* environment
    Emit {
        namespace: String,

        /// Format string and arguments; arguments that parse as JSON are passed as such
        args: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_check_test() {
        let cli = Cli::parse_from(["nsdebug", "check", "-p", "a:*", "a:b", "c"]);
        assert_eq!(
            cli.command,
            Commands::Check {
                pattern: "a:*".to_string(),
                namespaces: vec!["a:b".to_string(), "c".to_string()],
            }
        );
    }

    #[test]
    fn parse_normalize_test() {
        let cli = Cli::parse_from(["nsdebug", "normalize", "--json", "a, -b"]);
        assert_eq!(
            cli.command,
            Commands::Normalize {
                pattern: "a, -b".to_string(),
                json: true,
            }
        );
    }

    #[test]
    fn parse_emit_test() {
        let cli = Cli::parse_from(["nsdebug", "emit", "app", "%s=%d", "n", "3"]);
        assert_eq!(
            cli.command,
            Commands::Emit {
                namespace: "app".to_string(),
                args: vec!["%s=%d".to_string(), "n".to_string(), "3".to_string()],
            }
        );
    }
}
