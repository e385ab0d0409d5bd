//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// All messages go to stderr so that data written to stdout (e.g. by
/// `convert` without `-o`) stays clean for piping.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    dim: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            dim: Style::new().dim(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print one outline entry: indented label with a dimmed link.
    pub(crate) fn entry(&self, depth: usize, label: &str, link: &str) {
        let indent = "  ".repeat(depth);
        let link = self.dim.apply_to(format!("({link})"));
        let _ = self.term.write_line(&format!("{indent}{label} {link}"));
    }
}
