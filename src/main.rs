#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use docs_switcher::{ci_cmd, publish_cmd, resolve_cmd};

#[derive(Parser, Debug)]
#[command(name = "docs-switcher")]
#[command(about = "Publishes version-switcher metadata for a documentation site", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set DOCS_SWITCHER_LOG)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the docs version for a trigger event
    Resolve {
        /// Trigger event kind (release, or anything else for dev)
        #[arg(long)]
        event: String,
        /// Tag name for release events (e.g. 1.4.2)
        #[arg(long)]
        tag: Option<String>,
    },

    /// Fetch, merge, and write the version manifest and redirect page
    Publish {
        /// Version label to publish under (dev or MAJOR.MINOR)
        #[arg(long)]
        version: String,
        /// Full release string (e.g. 1.4.2, or 0.0.0+dev)
        #[arg(long)]
        release: String,
        /// Base URL the documentation is served from
        #[arg(long)]
        base_url: String,
        /// Output directory for versions.json and index.html
        #[arg(long)]
        out: std::path::PathBuf,
    },

    /// Resolve and publish in one step (CI entry point)
    Ci {
        /// Trigger event kind (release, or anything else for dev)
        #[arg(long)]
        event: String,
        /// Tag name for release events (e.g. 1.4.2)
        #[arg(long)]
        tag: Option<String>,
        /// Base URL the documentation is served from
        #[arg(long)]
        base_url: String,
        /// Output directory for versions.json and index.html
        #[arg(long)]
        out: std::path::PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("DOCS_SWITCHER_LOG").unwrap_or_else(|_| {
        if verbose { "docs_switcher=debug".to_string() } else { "docs_switcher=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Resolve { event, tag } => resolve_cmd::run(event, tag),
        Commands::Publish { version, release, base_url, out } => {
            publish_cmd::run(version, release, base_url, out)
        }
        Commands::Ci { event, tag, base_url, out } => ci_cmd::run(event, tag, base_url, out),
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
