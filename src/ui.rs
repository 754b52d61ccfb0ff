//! Terminal output helpers
//!
//! Results go to stdout, warnings and errors to stderr. `console` drops the
//! styling automatically when the stream is not a terminal.

use console::style;
use miette::Diagnostic;

use crate::error::BuildError;

/// Print a tagged status line, e.g. `[remove_self] converted to ...`
pub fn status(tag: &str, message: &str) {
    println!("{} {}", style(format!("[{tag}]")).cyan().bold(), message);
}

/// Print a plain result line
pub fn success(message: &str) {
    println!("{message}");
}

/// Print extra detail shown only with `--verbose`
pub fn detail(verbose: bool, message: &str) {
    if verbose {
        println!("  {}", style(message).dim());
    }
}

/// Print a non-fatal warning
pub fn warn(message: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), message);
}

/// Print an error with its diagnostic help, if any
pub fn report_error(err: &BuildError) {
    eprintln!("{} {}", style("Error:").red().bold(), err);
    if let Some(help) = err.help() {
        eprintln!("  {} {}", style("help:").cyan(), help);
    }
}

/// Echo captured tool output, skipping empty streams
pub fn echo_tool_output(stdout: &str, stderr: &str) {
    if !stdout.is_empty() {
        println!("{}", stdout.trim_end());
    }
    if !stderr.is_empty() {
        eprintln!("{}", stderr.trim_end());
    }
}
