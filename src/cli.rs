use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::domain::SortKey;

#[derive(Parser, Debug)]
#[command(author, version, about = "5x5 Yau ranking from the WCA API")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch the ranking once and print it as a table
    Show {
        /// Column to rank by
        #[arg(short, long, value_enum, default_value_t = SortKey::Average)]
        sort: SortKey,
        /// Discard the whole response if any record lacks 5x5 results
        #[arg(long)]
        strict: bool,
    },
    /// Serve the ranking page
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Discard the whole response if any record lacks 5x5 results
        #[arg(long)]
        strict: bool,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_defaults_to_average() {
        let cli = Cli::try_parse_from(["yau_ranking", "show"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Show {
                sort: SortKey::Average,
                strict: false
            }
        );
    }

    #[test]
    fn test_show_with_single_sort() {
        let cli = Cli::try_parse_from(["yau_ranking", "show", "--sort", "single", "--strict"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Show {
                sort: SortKey::Single,
                strict: true
            }
        );
    }

    #[test]
    fn test_serve_port() {
        let cli = Cli::try_parse_from(["yau_ranking", "serve", "-p", "8080"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Serve {
                port: 8080,
                strict: false
            }
        );
    }

    #[test]
    fn test_rejects_unknown_sort() {
        assert!(Cli::try_parse_from(["yau_ranking", "show", "--sort", "median"]).is_err());
    }
}
