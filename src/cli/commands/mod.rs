//! Command implementations

mod build;
mod check;
mod render;
#[cfg(feature = "serve")]
mod serve;
mod simulate;

use std::path::Path;

use anyhow::Context as _;

use folio::config::SiteConfig;
use folio::content::{self, Content};
use folio::core::services::Page;

pub use build::build;
pub use check::check;
pub use render::render;
#[cfg(feature = "serve")]
pub use serve::serve;
pub use simulate::simulate;

/// Configuration and the content it points at
fn load_content(config: Option<&Path>) -> anyhow::Result<(SiteConfig, Content)> {
    let config = SiteConfig::load(config)?;
    let content = content::load(config.content.path.as_deref())?;
    Ok((config, content))
}

/// Configuration and the composed page
fn load_page(config: Option<&Path>) -> anyhow::Result<(SiteConfig, Page)> {
    let (config, content) = load_content(config)?;
    let page = Page::compose(content).context("Page composition failed; run 'folio check'")?;
    Ok((config, page))
}
