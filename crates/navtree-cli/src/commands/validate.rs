//! `navtree validate` command implementation.

use std::path::PathBuf;

use clap::Args;
use navtree::NavTreeState;

use crate::commands::{check_tree, config_dir, read_tree};
use crate::config::Config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the validate command.
#[derive(Args)]
pub(crate) struct ValidateArgs {
    /// Navigation data file to validate.
    file: PathBuf,

    /// Treat warnings as errors (overrides config).
    #[arg(long)]
    strict: bool,

    /// Path to configuration file (default: auto-discover navtree.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ValidateArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), config_dir(&self.file))?;
        let strict = self.strict || config.validation.strict;

        let tree = read_tree(&self.file)?;
        check_tree(&tree, strict, &output)?;

        let state = NavTreeState::from_tree(&tree);
        output.success(&format!(
            "{}: {} nodes, {} index entries",
            self.file.display(),
            state.len(),
            tree.index.len()
        ));
        Ok(())
    }
}
