//! The `kubetab` command-line interface.
//!
//! kubetab renders pre-fetched Kubernetes resource lists as kubectl-style
//! text tables. It never talks to a cluster; records come from local JSON
//! documents.
//!
//! # Examples
//!
//! ```bash
//! # Print a service table from a fetched list
//! kubetab services --file services.json
//!
//! # Include wide-only columns and drop the header line
//! kubetab pods --file pods.json --wide --no-headers
//! ```

pub mod error;
mod internal;
mod pods;
mod services;

use std::{io::Write, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};

pub use self::error::Error;
use self::{pods::PodsCommand, services::ServicesCommand};
use crate::{CLI_PROGRAM_NAME, config::Config};

#[derive(Parser)]
#[command(
    name = CLI_PROGRAM_NAME,
    author,
    version,
    about = "Render pre-fetched Kubernetes resource lists as kubectl-style text tables.",
    color = clap::ColorChoice::Always
)]
pub struct Cli {
    #[clap(subcommand)]
    commands: Option<Commands>,

    /// Path to the configuration file.
    #[clap(
        long = "config",
        short = 'c',
        env = "KUBETAB_CONFIG_FILE_PATH",
        help = "Specify a configuration file. Defaults to ~/.config/kubetab/config.yaml or \
                KUBETAB_CONFIG_FILE_PATH env var."
    )]
    config_file: Option<PathBuf>,

    #[clap(
        long = "log-level",
        env = "KUBETAB_LOG_LEVEL",
        help = "Set the logging level (e.g., info, debug, trace)."
    )]
    log_level: Option<tracing::Level>,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    /// Generates a shell completion script for the specified shell.
    #[command(about = "Generate shell completion script for the specified shell (bash, zsh, fish)")]
    Completions { shell: clap_complete::Shell },

    /// Outputs the default configuration in YAML format to standard output.
    #[command(about = "Output the default configuration in YAML format")]
    DefaultConfig,

    /// Prints a service list document as an aligned table.
    #[command(aliases = ["s", "svc"], about = "Print a service list document as a table")]
    Services(ServicesCommand),

    /// Prints a pod list document as an aligned table.
    #[command(aliases = ["p", "po"], about = "Print a pod list document as a table")]
    Pods(PodsCommand),
}

impl Default for Cli {
    fn default() -> Self { Self::parse() }
}

impl Cli {
    /// Loads the configuration, applying CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing configuration file cannot be read or
    /// parsed; a missing file falls back to defaults.
    fn load_config(&self) -> Result<Config, Error> {
        let mut config =
            Config::load(self.config_file.clone().unwrap_or_else(Config::search_config_file_path))?;

        if let Some(log_level) = self.log_level {
            config.log.level = log_level;
        }

        Ok(config)
    }

    /// Runs the parsed command and returns the process exit code.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration loading fails or a subcommand
    /// fails.
    ///
    /// # Panics
    ///
    /// `expect`s on writes to stdout and stderr for the help, completion,
    /// and default-config outputs.
    pub fn run(self) -> Result<i32, Error> {
        match self.commands {
            Some(Commands::Completions { shell }) => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
                return Ok(0);
            }
            Some(Commands::DefaultConfig) => {
                std::io::stdout()
                    .write_all(Config::template_basic().as_slice())
                    .expect("Failed to write to stdout");
                return Ok(0);
            }
            _ => {}
        }

        let config = self.load_config()?;
        config.log.registry();

        match self.commands {
            Some(Commands::Services(cmd)) => cmd.run(&config)?,
            Some(Commands::Pods(cmd)) => cmd.run(&config)?,
            _ => {
                let help = Self::command().render_long_help().ansi().to_string();
                std::io::stderr().write_all(help.as_bytes()).expect("Failed to write to stderr");
                return Ok(-1);
            }
        }

        Ok(0)
    }
}
