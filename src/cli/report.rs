//! Report formatting and printing utilities.
//!
//! Commands hand back plain data; this module turns it into terminal output.
//! Separate from core logic to allow cua to be used as a library.

use std::io::{self, Write};

use anyhow::{Context as _, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    AnalyzeSummary, CleanSummary, CommandResult, CommandSummary, FilesSummary, GraphSummary,
    InitSummary, ReportSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{Component, PhaseTimings, ScanResult};
use crate::output::plural;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Number of entries in the "most used" section.
const TOP_USED: usize = 5;

/// Print a command result to stdout, then the parse warning line to stderr.
pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    print_to(result, &mut io::stdout().lock())?;
    print_parse_warning(result.warnings.len(), verbose);
    Ok(())
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) -> Result<()> {
    match &result.summary {
        CommandSummary::Analyze(summary) => print_analyze(summary, writer)?,
        CommandSummary::Files(summary) => print_files(summary, writer)?,
        CommandSummary::Report(summary) => print_report(summary, writer),
        CommandSummary::Graph(summary) => print_graph(summary, writer)?,
        CommandSummary::Clean(summary) => print_clean(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
    Ok(())
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_analyze<W: Write>(summary: &AnalyzeSummary, writer: &mut W) -> Result<()> {
    let result = &summary.result;

    if summary.json {
        let json = serde_json::to_string_pretty(result).context("Failed to serialize result")?;
        let _ = writeln!(writer, "{}", json);
        return Ok(());
    }

    if result.components.is_empty() {
        let _ = writeln!(
            writer,
            "{}",
            format!(
                "No components found in {} scanned.",
                plural(result.stats.files_scanned, "file")
            )
            .yellow()
        );
    } else {
        print_component_list(&result.components, writer);
        print_analyze_summary(result, writer);
        print_most_used(result, writer);
        print_unused(result, writer);
    }

    if summary.timings {
        print_timings(&result.stats.timings, writer);
    }
    Ok(())
}

fn print_component_list<W: Write>(components: &[Component], writer: &mut W) {
    let name_width = components
        .iter()
        .map(|c| UnicodeWidthStr::width(c.name.as_str()))
        .max()
        .unwrap_or(0);
    let file_width = components
        .iter()
        .map(|c| UnicodeWidthStr::width(c.file.as_str()))
        .max()
        .unwrap_or(0);

    let _ = writeln!(writer, "{}", "Found components:".bold());
    for component in components {
        // Pad before coloring; escape codes would throw off the width.
        let name = pad(&component.name, name_width);
        let file = pad(&component.file, file_width);
        if component.is_used {
            let _ = writeln!(
                writer,
                "  {} {}  {}  {}",
                SUCCESS_MARK.green(),
                name.green(),
                file.dimmed(),
                plural(component.usage_count, "usage").cyan()
            );
        } else {
            let _ = writeln!(
                writer,
                "  {} {}  {}  {}",
                FAILURE_MARK.red(),
                name.red(),
                file.dimmed(),
                "unused".red()
            );
        }
    }
}

fn print_analyze_summary<W: Write>(result: &ScanResult, writer: &mut W) {
    let stats = &result.stats;
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Summary:".bold());
    let _ = writeln!(writer, "  Files scanned:     {}", stats.files_scanned);
    let _ = writeln!(writer, "  Total components:  {}", stats.components_found);
    let _ = writeln!(
        writer,
        "  Used components:   {}",
        stats.used_components.to_string().green()
    );
    let _ = writeln!(
        writer,
        "  Unused components: {}",
        stats.unused_components.to_string().red()
    );
    if stats.parse_failures > 0 {
        let _ = writeln!(
            writer,
            "  Unparsable files:  {}",
            stats.parse_failures.to_string().yellow()
        );
    }
}

fn print_most_used<W: Write>(result: &ScanResult, writer: &mut W) {
    let top = result.most_used(TOP_USED);
    if top.is_empty() {
        return;
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Most used components:".bold());
    for (index, component) in top.iter().enumerate() {
        let _ = writeln!(
            writer,
            "  {}. {}: {}",
            index + 1,
            component.name.magenta(),
            plural(component.usage_count, "usage")
        );
        let _ = writeln!(
            writer,
            "     {} {}",
            "\u{21b3}".dimmed(),
            component.used_in.join(", ").dimmed()
        );
    }
}

fn print_unused<W: Write>(result: &ScanResult, writer: &mut W) {
    let unused: Vec<&Component> = result.unused().collect();
    if unused.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All components are used".green()
        );
        return;
    }

    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{}",
        format!("Unused components ({}):", unused.len()).bold().red()
    );
    for component in unused {
        let _ = writeln!(writer, "  - {} ({})", component.name, component.file.dimmed());
    }
}

fn print_timings<W: Write>(timings: &PhaseTimings, writer: &mut W) {
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Timings:".bold());
    for (phase, ms) in [
        ("discovery", timings.discovery_ms),
        ("collect", timings.collect_ms),
        ("analysis", timings.analysis_ms),
        ("aggregation", timings.aggregation_ms),
        ("total", timings.total_ms),
    ] {
        let _ = writeln!(writer, "  {:<12}{:>10.2} ms", phase, ms);
    }
}

fn print_files<W: Write>(summary: &FilesSummary, writer: &mut W) -> Result<()> {
    if summary.json {
        let json =
            serde_json::to_string_pretty(&summary.files).context("Failed to serialize files")?;
        let _ = writeln!(writer, "{}", json);
    } else {
        for file in &summary.files {
            let _ = writeln!(writer, "{}", file);
        }
    }
    Ok(())
}

fn print_report<W: Write>(summary: &ReportSummary, writer: &mut W) {
    match &summary.path {
        Some(path) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Wrote report for {} to {}",
                    plural(summary.component_count, "component"),
                    path.display()
                )
                .green()
            );
        }
        None => {
            let _ = write!(writer, "{}", summary.content);
        }
    }
}

fn print_graph<W: Write>(summary: &GraphSummary, writer: &mut W) -> Result<()> {
    match &summary.path {
        Some(path) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Wrote graph with {} and {} to {}",
                    plural(summary.graph.nodes.len(), "node"),
                    plural(summary.graph.edges.len(), "edge"),
                    path.display()
                )
                .green()
            );
        }
        None => {
            let json = serde_json::to_string_pretty(&summary.graph)
                .context("Failed to serialize graph")?;
            let _ = writeln!(writer, "{}", json);
        }
    }
    Ok(())
}

fn print_clean<W: Write>(summary: &CleanSummary, writer: &mut W) {
    if summary.files.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No files with only unused components".green()
        );
        return;
    }

    if !summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} file(s):",
            "Would delete".yellow().bold(),
            summary.files.len()
        );
        for file in &summary.files {
            let _ = writeln!(writer, "  - {}", file);
        }
        let _ = writeln!(writer, "Run with {} to delete these files.", "--apply".cyan());
        return;
    }

    if !summary.deleted.is_empty() {
        let _ = writeln!(
            writer,
            "{} {} file(s):",
            "Deleted".green().bold(),
            summary.deleted.len()
        );
        for file in &summary.deleted {
            let _ = writeln!(writer, "  - {}", file);
        }
    }
    if !summary.missing.is_empty() {
        let _ = writeln!(
            writer,
            "{} {} file(s) no longer exist:",
            "Skipped".yellow().bold(),
            summary.missing.len()
        );
        for file in &summary.missing {
            let _ = writeln!(writer, "  - {}", file);
        }
    }
    for (file, error) in &summary.failed {
        let _ = writeln!(
            writer,
            "{} {}: {}",
            FAILURE_MARK.red(),
            format!("Failed to delete {}", file).red(),
            error
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}

// ============================================================
// Tests
// ============================================================
