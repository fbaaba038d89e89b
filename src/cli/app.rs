//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use folio::output::OutputMode;

/// folio - Single-page portfolio renderer
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Single-page portfolio renderer",
    long_about = "Render a single-page portfolio with scroll-revealed sections.\n\n\
                  Content is built in or read from a TOML file. The page can be\n\
                  printed, built into a static directory, served locally, or\n\
                  scrolled through a headless viewport."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.folio/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose the page and report where every navigation link lands
    Check,

    /// Print the document, or a single section, to stdout
    Render {
        /// Only this section (e.g. "skills")
        #[arg(short, long)]
        section: Option<String>,

        /// Embed the stylesheet and script in the document
        #[arg(long)]
        inline: bool,
    },

    /// Write the static site to a directory
    Build {
        /// Output directory (default from config, then "dist")
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Scroll the page in a headless viewport and report what gets revealed
    Simulate {
        /// Viewport width in pixels
        #[arg(long, default_value_t = 1280.0)]
        width: f64,

        /// Viewport height in pixels
        #[arg(long, default_value_t = 800.0)]
        height: f64,

        /// Scroll to this offset (repeatable, applied in order)
        #[arg(long = "scroll", value_name = "Y")]
        scroll: Vec<f64>,

        /// Follow a link to this section after scrolling (repeatable)
        #[arg(long = "goto", value_name = "ID")]
        goto: Vec<String>,
    },

    /// Serve the page locally
    #[cfg(feature = "serve")]
    Serve {
        /// Port (default from config, then 8080)
        #[arg(short, long)]
        port: Option<u16>,

        /// Open the page in a browser
        #[arg(long)]
        open: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Check) => commands::check(config, output_mode),
        Some(Command::Render { section, inline }) => {
            commands::render(config, section.as_deref(), inline)
        },
        Some(Command::Build { out }) => commands::build(config, out.as_deref(), output_mode),
        Some(Command::Simulate {
            width,
            height,
            scroll,
            goto,
        }) => commands::simulate(config, width, height, &scroll, &goto, output_mode),
        #[cfg(feature = "serve")]
        Some(Command::Serve { port, open }) => commands::serve(config, port, open),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": folio::VERSION
                    })
                );
            } else {
                println!("folio v{}", folio::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": folio::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("folio v{}", folio::VERSION);
                println!("\nRun 'folio --help' for usage");
                println!("Run 'folio build' to write the site to ./dist");
            }
            Ok(())
        },
    }
}
