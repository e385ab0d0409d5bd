//! `navtree show` command implementation.

use std::path::PathBuf;

use clap::Args;
use navtree::{NavIndex, NavTreeState, SyncMessages, SyncToggle};

use crate::commands::read_tree;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Navigation data file to display.
    file: PathBuf,

    /// Skip the page index listing.
    #[arg(long)]
    no_index: bool,
}

impl ShowArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let tree = read_tree(&self.file)?;
        let state = NavTreeState::from_tree(&tree);

        for entry in state.iter() {
            output.entry(entry.depth, &entry.label, &entry.link);
        }

        if !self.no_index {
            output.info("");
            for line in index_lines(&tree.index) {
                output.info(&line);
            }
        }

        output.info("");
        output.info(&sync_summary(&tree.sync));
        Ok(())
    }
}

/// Format the page index listing.
fn index_lines(index: &NavIndex) -> Vec<String> {
    let mut lines = vec![format!("index ({} entries):", index.len())];
    for (position, id) in index.iter().enumerate() {
        lines.push(format!("  [{position}] {id}"));
    }
    lines
}

/// Format the sync tooltip summary line.
fn sync_summary(sync: &SyncMessages) -> String {
    format!(
        "sync tooltips: on={:?} off={:?}",
        SyncToggle::new(true).tooltip(sync),
        SyncToggle::new(false).tooltip(sync),
    )
}
