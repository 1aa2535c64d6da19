//! Shared output formatting for check results.

use anyhow::Result;
use jstyle_core::Report;
use std::fmt::Write;

use crate::OutputFormat;

/// Print a report in the specified format.
pub fn print(report: &Report, format: OutputFormat) -> Result<()> {
    print!("{}", render(report, format)?);
    Ok(())
}

/// Render a report in the specified format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(report)?),
        OutputFormat::Compact => report.format_compact(),
    })
}

fn render_text(report: &Report) -> String {
    let mut output = String::new();

    for diagnostic in &report.diagnostics {
        let _ = writeln!(output, "{}", diagnostic.format());
    }

    let summary_color = if report.has_diagnostics() {
        "\x1b[31m"
    } else {
        "\x1b[32m"
    };
    let _ = writeln!(output, "{summary_color}{}\x1b[0m", report.summary());
    output
}
