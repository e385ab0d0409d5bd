//! CLI command implementations.

pub(crate) mod convert;
pub(crate) mod show;
pub(crate) mod validate;

pub(crate) use convert::ConvertArgs;
pub(crate) use show::ShowArgs;
pub(crate) use validate::ValidateArgs;

use std::fs;
use std::path::Path;

use navtree::NavTree;

use crate::error::CliError;
use crate::output::Output;

/// Read and decode a navigation data file.
///
/// Files with a `.json` extension are decoded as JSON; everything else
/// is treated as the generator's JS format.
pub(crate) fn read_tree(path: &Path) -> Result<NavTree, CliError> {
    let source = fs::read_to_string(path)?;
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        Ok(navtree_codec::from_json(&source)?)
    } else {
        Ok(navtree_codec::parse(&source)?)
    }
}

/// Validate a tree, printing findings; fail on errors (and, in strict
/// mode, on warnings).
pub(crate) fn check_tree(tree: &NavTree, strict: bool, output: &Output) -> Result<(), CliError> {
    let report = tree.validate();

    for warning in &report.warnings {
        output.warning(&format!("warning: {warning}"));
    }
    for error in &report.errors {
        output.error(&format!("error: {error}"));
    }

    let mut failures = report.errors.len();
    if strict {
        failures += report.warnings.len();
    }

    if failures > 0 {
        return Err(CliError::Validation(format!(
            "{failures} validation failure(s)"
        )));
    }
    Ok(())
}

/// Directory to start config discovery from, given the input file.
pub(crate) fn config_dir(input: &Path) -> &Path {
    input.parent().unwrap_or(Path::new("."))
}
