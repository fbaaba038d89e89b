//! Print the rendered document

use std::path::Path;

use folio::render::{self, AssetMode, RenderOptions};

/// Print the whole document, or one section's markup
pub fn render(config: Option<&Path>, section: Option<&str>, inline: bool) -> anyhow::Result<()> {
    let (config, page) = super::load_page(config)?;
    let mut options = RenderOptions::from_config(&config)?;
    if inline {
        options = options.with_assets(AssetMode::Inline);
    }

    match section {
        Some(id) => {
            let Some(html) = render::render_section(&page, id, &options) else {
                let known: Vec<&str> = page.sections().iter().map(|s| s.id.as_str()).collect();
                anyhow::bail!("Unknown section '{id}'. Sections: {}", known.join(", "));
            };
            print!("{html}");
        },
        None => print!("{}", render::render_document(&page, &options)),
    }
    Ok(())
}
