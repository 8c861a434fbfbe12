//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// golinks - short mnemonic links to long URLs
#[derive(Parser, Debug)]
#[command(name = "golinks")]
#[command(version)]
#[command(about = "A go-link redirector with usage analytics", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Add a go link
    Add {
        shortlink: String,

        /// Destination URL; https:// is prepended when no scheme is given
        destination: String,
    },

    /// List go links, newest first
    List {
        /// Case-insensitive filter on shortlink or destination
        #[arg(long, short = 'f')]
        filter: Option<String>,
    },

    /// Change shortlink and destination of a link
    Update {
        id: i64,
        shortlink: String,
        destination: String,
    },

    /// Delete a link by id (its usage history is kept)
    Remove { id: i64 },

    /// Show usage statistics for one shortlink, or for all of them
    Stats { shortlink: Option<String> },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// The subcommand to run; no subcommand means `serve`
    pub fn selected_command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serve() {
        let cli = Cli::parse_from(["golinks"]);
        assert_eq!(cli.selected_command(), &Commands::Serve);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["golinks", "list", "-c", "/etc/golinks.toml", "--filter", "wiki"]);
        assert_eq!(cli.config.as_deref(), Some("/etc/golinks.toml"));
        assert_eq!(
            cli.selected_command(),
            &Commands::List {
                filter: Some("wiki".to_string())
            }
        );
    }

    #[test]
    fn test_update_args() {
        let cli = Cli::parse_from(["golinks", "update", "3", "docs", "docs.example.com"]);
        assert_eq!(
            cli.selected_command(),
            &Commands::Update {
                id: 3,
                shortlink: "docs".to_string(),
                destination: "docs.example.com".to_string(),
            }
        );
    }

    #[test]
    fn test_remove_requires_numeric_id() {
        assert!(Cli::try_parse_from(["golinks", "remove", "wiki"]).is_err());
    }
}
