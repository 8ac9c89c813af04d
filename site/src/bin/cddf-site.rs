//! # cddf-site
//!
//! Renders the Citizen Drone Defense Force landing page to a static HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Write dist/index.html with defaults (or ./cddf-site.toml if present)
//! cddf-site
//!
//! # Point the GitHub links somewhere else and print to stdout
//! CDDF_REPO_URL=https://github.com/me/cddf cddf-site --stdout
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use cddf_site::{SiteConfig, SiteError, render_site};

#[derive(Parser, Debug)]
#[command(name = "cddf-site")]
#[command(about = "Render the Citizen Drone Defense Force landing page to static HTML")]
#[command(version)]
struct Args {
    /// Output file for the rendered page
    #[arg(short, long, default_value = "dist/index.html")]
    out: PathBuf,

    /// Print the page to stdout instead of writing a file
    #[arg(long, conflicts_with = "out")]
    stdout: bool,

    /// Config file (default: ./cddf-site.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Repository URL for every GitHub link (overrides config and CDDF_REPO_URL)
    #[arg(long)]
    repo_url: Option<String>,

    /// Logo image path or URL (overrides config and CDDF_LOGO_SRC)
    #[arg(long)]
    logo_src: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[cddf-site] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so --stdout output stays a clean document
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = resolve_config(&args)?;
    debug!(?config, "resolved configuration");

    let html = render_site(&config);

    if args.stdout {
        print!("{}", html);
        return Ok(());
    }

    write_page(&args.out, &html)?;
    info!("Wrote {} ({} bytes)", args.out.display(), html.len());
    check_logo(&args.out, &config.logo_src);

    Ok(())
}

fn resolve_config(args: &Args) -> Result<SiteConfig> {
    let base = match &args.config {
        Some(path) => SiteConfig::load_from_path(path)?,
        None => SiteConfig::load_or_default(Path::new("."))?,
    };

    Ok(base
        .with_env()
        .apply_overrides(args.repo_url.clone(), args.logo_src.clone()))
}

fn write_page(out: &Path, html: &str) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    std::fs::write(out, html).map_err(|source| SiteError::WriteOutput {
        path: out.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Warn when a local logo is not next to the page. Remote URLs are not checked.
fn check_logo(out: &Path, logo_src: &str) {
    let remote = ["http://", "https://", "//", "data:"];
    if remote.iter().any(|prefix| logo_src.starts_with(prefix)) {
        return;
    }
    let site_root = out.parent().unwrap_or_else(|| Path::new("."));
    let asset = site_root.join(logo_src.trim_start_matches('/'));
    if !asset.exists() {
        warn!(
            "Logo asset {} not found; the page will show a broken image until it is deployed",
            asset.display()
        );
    }
}
