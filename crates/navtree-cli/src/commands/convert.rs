//! `navtree convert` command implementation.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::commands::{check_tree, config_dir, read_tree};
use crate::config::Config;
use crate::error::CliError;
use crate::output::Output;

/// Output encoding.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum Format {
    /// The generator's JS data format.
    Js,
    /// Pretty-printed JSON.
    Json,
}

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Navigation data file to convert (.js or .json).
    file: PathBuf,

    /// Target encoding.
    #[arg(long, value_enum)]
    to: Format,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat warnings as errors (overrides config).
    #[arg(long)]
    strict: bool,

    /// Path to configuration file (default: auto-discover navtree.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ConvertArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), config_dir(&self.file))?;
        let strict = self.strict || config.validation.strict;

        let mut tree = read_tree(&self.file)?;
        check_tree(&tree, strict, &output)?;

        config.sync.apply(&mut tree.sync);

        let encoded = match self.to {
            Format::Js => navtree_codec::to_js(&tree),
            Format::Json => navtree_codec::to_json(&tree)?,
        };

        match self.output {
            Some(path) => {
                fs::write(&path, &encoded)?;
                output.success(&format!("wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(encoded.as_bytes())?;
                if !encoded.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
            }
        }
        Ok(())
    }
}
