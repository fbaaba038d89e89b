//! Local web server

use std::path::Path;

use log::{info, warn};
use tiny_http::Server;

use crate::server::tiny_http::{SiteState, handle_request};
use folio::adapters::sink_for;
use folio::render::{self, RenderOptions};

/// Contact endpoint the served page posts to
const CONTACT_API: &str = "/api/v1/contact";

/// Serve the page until interrupted
pub fn serve(config: Option<&Path>, port: Option<u16>, open: bool) -> anyhow::Result<()> {
    let (config, page) = super::load_page(config)?;
    let options = RenderOptions::from_config(&config)?.with_contact_api(CONTACT_API);
    let html = render::render_document(&page, &options);
    let sink = sink_for(config.contact.sink, &config.contact.outbox_path());

    let port = port.unwrap_or(config.server.port);
    let addr = format!("{}:{port}", config.server.host);
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    let url = format!("http://{addr}");

    info!("Contact submissions go to the '{}' sink", sink.name());
    println!("Serving {} at {url}", page.content().profile.name);
    println!();
    println!("Press Ctrl+C to stop");

    if open {
        open_browser(&url);
    }

    let state = SiteState { page, html, sink };
    for mut request in server.incoming_requests() {
        let response = handle_request(&state, &mut request);
        if let Err(e) = request.respond(response) {
            warn!("Failed to send response: {e}");
        }
    }

    Ok(())
}

fn open_browser(url: &str) {
    #[cfg(target_os = "macos")]
    let result = std::process::Command::new("open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let result = std::process::Command::new("cmd")
        .args(["/c", "start", url])
        .spawn();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = std::process::Command::new("xdg-open").arg(url).spawn();

    if let Err(e) = result {
        warn!("Could not open a browser: {e}");
    }
}
