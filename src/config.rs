//! Command-line configuration
//!
//! [`Cli`] is the clap surface of the binary. It is converted into a
//! [`GuideConfig`], which is all the levels ever see; tests build a
//! `GuideConfig` directly.

use crate::constants::DEFAULT_MAX_NODES;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Run the leveled language reference.
#[derive(Debug, Parser)]
#[command(name = "crustguide")]
#[command(about = "A leveled language reference, from variables to a linked list")]
pub struct Cli {
    /// Browse the levels in a terminal UI instead of printing them.
    #[arg(long)]
    pub tui: bool,

    /// Run only this level (1-11).
    #[arg(long)]
    pub level: Option<u32>,

    /// Maximum number of live nodes the linked list heap may hold.
    #[arg(long, default_value_t = DEFAULT_MAX_NODES)]
    pub max_nodes: usize,

    /// Directory for the file I/O demonstration (defaults to the system temp dir).
    #[arg(long)]
    pub workdir: Option<PathBuf>,

    /// Value of the debug-mode switch shown by the conditional compilation demo.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub debug_mode: bool,

    /// Extra arguments, echoed by the command-line arguments demo.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    pub fn into_config(self, program_name: String) -> GuideConfig {
        GuideConfig {
            tui: self.tui,
            level: self.level,
            max_nodes: self.max_nodes,
            workdir: self.workdir.unwrap_or_else(default_workdir),
            debug_mode: self.debug_mode,
            program_name,
            args: self.args,
        }
    }
}

/// Settings shared by every level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideConfig {
    pub tui: bool,
    pub level: Option<u32>,
    pub max_nodes: usize,
    pub workdir: PathBuf,
    pub debug_mode: bool,
    pub program_name: String,
    pub args: Vec<String>,
}

impl Default for GuideConfig {
    fn default() -> Self {
        GuideConfig {
            tui: false,
            level: None,
            max_nodes: DEFAULT_MAX_NODES,
            workdir: default_workdir(),
            debug_mode: true,
            program_name: String::from("crustguide"),
            args: Vec::new(),
        }
    }
}

fn default_workdir() -> PathBuf {
    std::env::temp_dir().join("crustguide")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["crustguide"]).unwrap();
        let config = cli.into_config("crustguide".to_string());

        assert_eq!(config, GuideConfig::default());
    }

    #[test]
    fn test_cli_flags_and_trailing_args() {
        let cli = Cli::try_parse_from([
            "crustguide",
            "--level",
            "11",
            "--max-nodes",
            "2",
            "--debug-mode",
            "false",
            "hello",
            "--world",
            "123",
        ])
        .unwrap();
        let config = cli.into_config("./crustguide".to_string());

        assert_eq!(config.level, Some(11));
        assert_eq!(config.max_nodes, 2);
        assert!(!config.debug_mode);
        assert_eq!(config.args, vec!["hello", "--world", "123"]);
        assert_eq!(config.program_name, "./crustguide");
    }
}
