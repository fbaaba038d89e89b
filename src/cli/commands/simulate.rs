//! Drive the page through a headless viewport

use std::path::Path;

use folio::core::models::SectionId;
use folio::core::services::NavBar;
use folio::output::{OutputMode, SimulationReport, SimulationStep};
use folio::simulation::PageSession;

/// Mount the page, apply each scroll then each link, and report reveals
pub fn simulate(
    config: Option<&Path>,
    width: f64,
    height: f64,
    scrolls: &[f64],
    gotos: &[String],
    mode: OutputMode,
) -> anyhow::Result<()> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        anyhow::bail!("Viewport must have a positive size, got {width}x{height}");
    }

    let (config, page) = super::load_page(config)?;
    let options = config.reveal_options()?;
    let nav = NavBar::new(config.nav.scroll_offset);
    let mut session = PageSession::new(&page, width, height, options, nav);

    let mut steps = Vec::with_capacity(1 + scrolls.len() + gotos.len());
    let revealed = session.mount();
    steps.push(step("mount".to_string(), &revealed, &session));

    for &y in scrolls {
        let revealed = session.scroll_to(y);
        steps.push(step(format!("scroll {y}"), &revealed, &session));
    }

    for target in gotos {
        let href = if target.starts_with('#') {
            target.clone()
        } else {
            format!("#{target}")
        };
        let before = session.revealed();
        let action = match session.goto(&href) {
            Some(id) => format!("goto {id}"),
            None => format!("goto {href} (no such section)"),
        };
        let revealed: Vec<SectionId> = session
            .revealed()
            .into_iter()
            .filter(|id| !before.contains(id))
            .collect();
        steps.push(step(action, &revealed, &session));
    }

    SimulationReport {
        width,
        height,
        steps,
    }
    .render(mode);
    Ok(())
}

fn step(action: String, revealed: &[SectionId], session: &PageSession<'_>) -> SimulationStep {
    SimulationStep {
        action,
        newly_revealed: revealed.iter().map(ToString::to_string).collect(),
        state: session.snapshot(),
    }
}
