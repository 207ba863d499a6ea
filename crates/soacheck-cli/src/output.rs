//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with specialized
//! support for validation run reports.

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::logging::redaction;
use colored::Colorize;
use serde::Serialize;
use soacheck_schemas::{CheckReport, FileReport, RunReport, ServicePath, UNKNOWN_SERVICE};
use soacheck_schemas::runner::READ_FAILED;
use std::io::{self, Write};
use tracing::trace;

/// Trait for formatting output with specialized support for run reports
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a validation run report
    fn format_run_report(&self, report: &RunReport, quiet: bool, use_color: bool)
        -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        // Secrets echoed back in diagnostics never reach the output
        let mut value = serde_json::to_value(value)?;
        redaction::redact_json_value(&mut value);

        match self {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(&value)?)),
            OutputFormat::JsonPretty => Ok(format!("{}\n", serde_json::to_string_pretty(&value)?)),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(&value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
            }
        }
    }

    fn format_run_report(
        &self,
        report: &RunReport,
        quiet: bool,
        use_color: bool,
    ) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_run_report_human(report, quiet, use_color)),
            _ => self.format(report),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");
        self.write(&formatted)
    }

    /// Write a validation run report
    pub fn run_report(&mut self, report: &RunReport) -> Result<()> {
        let formatted = self
            .format
            .format_run_report(report, self.quiet, self.use_color)?;
        self.write(&formatted)
    }
}

fn paint(text: &str, passed: bool, use_color: bool) -> String {
    match (use_color, passed) {
        (false, _) => text.to_string(),
        (true, true) => text.green().bold().to_string(),
        (true, false) => text.red().bold().to_string(),
    }
}

/// Format a run report for human reading.
///
/// One marker line per file and per check; failing entries are followed
/// by their indented diagnostics. In quiet mode passing entries are left
/// out.
fn format_run_report_human(report: &RunReport, quiet: bool, use_color: bool) -> String {
    let mut output = String::new();

    if let ServicePath::Unresolved { reason } = &report.service_path {
        output.push_str(&format!("{}: {}\n", paint(UNKNOWN_SERVICE, false, use_color), reason));
        return output;
    }

    if let Some(error) = &report.discovery_error {
        output.push_str(&format!(
            "{}: {}\n",
            paint(READ_FAILED, false, use_color),
            redaction::redact_sensitive(error)
        ));
        return output;
    }

    for file in &report.files {
        if quiet && file.passed() {
            continue;
        }
        format_file_report_human(&mut output, file, use_color);
    }

    for check in &report.checks {
        if quiet && check.passed() {
            continue;
        }
        format_check_report_human(&mut output, check, use_color);
    }

    output
}

fn format_file_report_human(output: &mut String, file: &FileReport, use_color: bool) {
    output.push_str(&format!(
        "{}: {}\n",
        paint(file.marker(), file.passed(), use_color),
        file.path.display()
    ));

    if let Some(message) = file.message() {
        output.push_str(&format!("  {}\n", redaction::redact_sensitive(message)));
    }
    for diagnostic in file.details() {
        output.push_str(&format!(
            "  {}\n",
            redaction::redact_sensitive(&diagnostic.to_string())
        ));
    }
}

fn format_check_report_human(output: &mut String, check: &CheckReport, use_color: bool) {
    output.push_str(&format!(
        "{}: {}\n",
        paint(check.marker(), check.passed(), use_color),
        check.name
    ));
    for violation in &check.violations {
        output.push_str(&format!("  {}\n", violation));
    }
}

#[cfg(test)]
mod tests {
    include!("output/tests.rs");
}
