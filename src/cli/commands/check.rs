//! Validate navigation against the page's sections

use std::path::Path;

use folio::core::services::{Page, SectionKind};
use folio::output::{CheckReport, OutputMode};

/// Report where every navigation link lands; fails if any does not resolve
pub fn check(config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (_, content) = super::load_content(config)?;
    let links = Page::check_links(&content)?;
    let sections = SectionKind::ORDER
        .iter()
        .map(|kind| kind.id().to_string())
        .collect();

    let report = CheckReport::new(sections, links);
    report.render(mode);

    if !report.passed {
        anyhow::bail!("Navigation links do not resolve");
    }
    Ok(())
}
