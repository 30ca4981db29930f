//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "guestbook")]
#[command(about = "Guestbook server and maintenance CLI", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (config from env; --bind overrides BIND_ADDRESS).
    Serve {
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Print the number of stored messages.
    Count,
    /// Delete every stored message.
    Clear,
    /// Insert the sample visitor messages.
    SeedSamples,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_bind() {
        let cli = Cli::try_parse_from(["guestbook", "serve", "--bind", "127.0.0.1:8080"])
            .expect("parse");
        assert_eq!(
            cli.command,
            Commands::Serve {
                bind: Some("127.0.0.1:8080".to_string())
            }
        );
    }

    #[test]
    fn test_parse_maintenance_commands() {
        let cli = Cli::try_parse_from(["guestbook", "seed-samples"]).expect("parse");
        assert_eq!(cli.command, Commands::SeedSamples);
        let cli = Cli::try_parse_from(["guestbook", "clear"]).expect("parse");
        assert_eq!(cli.command, Commands::Clear);
        let cli = Cli::try_parse_from(["guestbook", "count"]).expect("parse");
        assert_eq!(cli.command, Commands::Count);
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(Cli::try_parse_from(["guestbook"]).is_err());
    }
}
