use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Sip Happens: mood-driven café ordering at the terminal
#[derive(Parser)]
#[command(name = "sip-happens")]
#[command(version)]
#[command(about = "Mood-driven café ordering at the terminal")]
#[command(
    long_about = "Sip Happens suggests a drink for how you feel, lets you add drinks to a cart and prints a receipt at checkout."
)]
pub struct Cli {
    /// Menu file to use instead of the discovered one
    #[arg(long, global = true)]
    pub menu: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the café and take orders interactively (default)
    Open,

    /// Print the drink menu
    Menu {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Suggest a drink for a mood
    Suggest {
        /// Mood keyword; lists supported moods when omitted
        mood: Option<String>,
    },

    /// Check that the menu file loads and is consistent
    Validate,

    /// Write the house menu to a file you can edit
    Init {
        /// Write to the user config directory instead of ./.sip-happens
        #[arg(long)]
        global: bool,

        /// Overwrite an existing menu file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Open => "open",
            Commands::Menu { .. } => "menu",
            Commands::Suggest { .. } => "suggest",
            Commands::Validate => "validate",
            Commands::Init { .. } => "init",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_no_subcommand_means_open() {
        let cli = Cli::parse_from(["sip-happens"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.menu, None);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "sip-happens",
            "menu",
            "--format",
            "json",
            "--menu",
            "my-menu.yml",
            "--log-level",
            "debug",
        ]);

        assert_eq!(
            cli.command,
            Some(Commands::Menu {
                format: OutputFormat::Json
            })
        );
        assert_eq!(cli.menu, Some(PathBuf::from("my-menu.yml")));
        assert_eq!(cli.log_level.to_filter_directive(), "debug");
    }

    #[test]
    fn test_suggest_mood_is_optional() {
        let cli = Cli::parse_from(["sip-happens", "suggest", "anxious"]);
        assert_eq!(
            cli.command,
            Some(Commands::Suggest {
                mood: Some("anxious".to_string())
            })
        );

        let cli = Cli::parse_from(["sip-happens", "suggest"]);
        assert_eq!(cli.command, Some(Commands::Suggest { mood: None }));
    }

    #[test]
    fn test_init_flags() {
        let cli = Cli::parse_from(["sip-happens", "init", "--global", "-f"]);
        assert_eq!(
            cli.command,
            Some(Commands::Init {
                global: true,
                force: true
            })
        );
    }

    #[test]
    fn test_command_names() {
        let init = Commands::Init {
            global: false,
            force: false,
        };
        assert_eq!(init.name(), "init");
        assert_eq!(Commands::Validate.name(), "validate");
        assert_eq!(Commands::Open.name(), "open");
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["sip-happens", "menu", "--format", "xml"]).is_err());
    }
}
