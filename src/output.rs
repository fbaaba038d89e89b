//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::SectionId;
use crate::core::services::{LinkResolution, LinkStatus};
use crate::simulation::Snapshot;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of `folio check`
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether every navigation link resolves
    pub passed: bool,
    /// Section identifiers in page order
    pub sections: Vec<String>,
    /// Every navigation link and where it lands
    pub links: Vec<LinkResolution>,
}

impl CheckReport {
    /// Build a report from link resolutions
    #[must_use]
    pub fn new(sections: Vec<String>, links: Vec<LinkResolution>) -> Self {
        let passed = links
            .iter()
            .all(|l| matches!(l.status, LinkStatus::Resolved(_)));
        Self {
            passed,
            sections,
            links,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Sections: {}\n", self.sections.join(", "));
        println!("Navigation:");
        for resolution in &self.links {
            let link = &resolution.link;
            match &resolution.status {
                LinkStatus::Resolved(id) => {
                    println!("  {} {:<12} {} -> {id}", "ok".green(), link.name, link.href);
                },
                LinkStatus::Unresolved => {
                    println!(
                        "  {} {:<12} {} (no such section)",
                        "error".red(),
                        link.name,
                        link.href
                    );
                },
                LinkStatus::Malformed => {
                    println!(
                        "  {} {:<12} {} (not an in-page anchor)",
                        "error".red(),
                        link.name,
                        link.href
                    );
                },
            }
        }
        println!();
        if self.passed {
            println!("{}", "All links resolve.".green());
        } else {
            let failed = self
                .links
                .iter()
                .filter(|l| !matches!(l.status, LinkStatus::Resolved(_)))
                .count();
            println!("{}", format!("{failed} link(s) do not resolve.").red());
        }
    }
}

/// Result of `folio build`
#[derive(Debug, Serialize)]
pub struct BuildResult {
    /// Output directory
    pub out_dir: String,
    /// Files written, relative to `out_dir`
    pub files: Vec<String>,
    /// Total bytes written
    pub bytes: usize,
}

impl BuildResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Built site in {}", self.out_dir.bold());
                for file in &self.files {
                    println!("  {file}");
                }
                println!("{} file(s), {} bytes", self.files.len(), self.bytes);
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// One step of `folio simulate`
#[derive(Debug, Serialize)]
pub struct SimulationStep {
    /// What was done
    pub action: String,
    /// Sections revealed by this step
    pub newly_revealed: Vec<String>,
    /// State after the step
    pub state: Snapshot,
}

/// Result of `folio simulate`
#[derive(Debug, Serialize)]
pub struct SimulationReport {
    /// Viewport width
    pub width: f64,
    /// Viewport height
    pub height: f64,
    /// Steps in order, starting with the initial mount
    pub steps: Vec<SimulationStep>,
}

impl SimulationReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("Viewport {}x{}\n", self.width, self.height);
        for step in &self.steps {
            let nav = if step.state.scrolled {
                "scrolled"
            } else {
                "top"
            };
            println!(
                "{} (y={:.0}, nav {nav})",
                step.action.bold(),
                step.state.scroll_y
            );
            if !step.newly_revealed.is_empty() {
                println!("  revealed: {}", step.newly_revealed.join(", ").green());
            }
            let visible: Vec<&str> = step.state.revealed.iter().map(SectionId::as_str).collect();
            if visible.is_empty() {
                println!("  visible:  {}", "(none)".dimmed());
            } else {
                println!("  visible:  {}", visible.join(", "));
            }
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
