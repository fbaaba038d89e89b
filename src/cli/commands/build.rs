//! Write the static site

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use log::{debug, info};

use folio::output::{BuildResult, OutputMode};
use folio::paths::{ASSETS_DIR, INDEX_HTML};
use folio::render::{self, RenderOptions, assets};

/// Render the page into `out` (or the configured output directory)
pub fn build(config: Option<&Path>, out: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let (config, page) = super::load_page(config)?;
    let options = RenderOptions::from_config(&config)?;
    let out_dir = out.unwrap_or(config.build.out_dir.as_path());

    let asset_dir = out_dir.join(ASSETS_DIR);
    fs::create_dir_all(&asset_dir)
        .with_context(|| format!("Failed to create {}", asset_dir.display()))?;

    let html = render::render_document(&page, &options);
    let index = out_dir.join(INDEX_HTML);
    fs::write(&index, &html).with_context(|| format!("Failed to write {}", index.display()))?;
    debug!("Wrote {}", index.display());

    let mut files = vec![INDEX_HTML.to_string()];
    let mut bytes = html.len();
    for (name, contents) in assets::all() {
        let path = asset_dir.join(name);
        fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {}", path.display());
        files.push(format!("{ASSETS_DIR}/{name}"));
        bytes += contents.len();
    }

    info!("Built {} file(s) into {}", files.len(), out_dir.display());
    BuildResult {
        out_dir: out_dir.display().to_string(),
        files,
        bytes,
    }
    .render(mode);
    Ok(())
}
