//! Route report for the blog's locale routing.
//!
//! Usage:
//!   cargo run -- /posts/1 /en/about          # Report the given paths
//!   cargo run -- --paths data/paths.txt      # Report every path in a file
//!   cargo run -- --check                     # Validate the UI dictionaries
//!
//! Optional environment variables:
//! - SITE_URL (defaults to https://rhcwlq89.github.io)
//! - MARKDOWN_THEME (defaults to github-dark)

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use techblog_i18n::config::Config;
use techblog_i18n::i18n::{Dictionary, DictionaryValidator, TranslationMetrics};
use techblog_i18n::report::{read_paths, RouteReport};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("techblog_i18n=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut check = false;
    let mut paths_file: Option<PathBuf> = None;
    let mut paths = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--check" => check = true,
            "--paths" => {
                let file = args.next().context("--paths requires a file argument")?;
                paths_file = Some(PathBuf::from(file));
            }
            flag if flag.starts_with("--") => bail!("Unknown flag: {}", flag),
            _ => paths.push(arg),
        }
    }

    if check {
        return run_check();
    }

    if let Some(file) = paths_file {
        paths.extend(read_paths(&file)?);
    }
    if paths.is_empty() {
        paths.push("/".to_string());
    }

    let config = Config::from_env()?;
    let site = config.site_config();
    info!(site_url = %site.site_url, count = paths.len(), "Reporting routes");

    for path in &paths {
        let report = RouteReport::for_path(&site, path);
        println!("{}", serde_json::to_string(&report)?);
    }

    info!("{}", TranslationMetrics::global().report().format());
    Ok(())
}

fn run_check() -> Result<()> {
    let report = DictionaryValidator::validate(Dictionary::builtin());

    for warning in &report.warnings {
        warn!("{}", warning);
    }

    if report.has_errors() {
        for error in &report.errors {
            eprintln!("error: {}", error);
        }
        bail!("Dictionary validation failed with {} error(s)", report.errors.len());
    }

    info!("✓ Dictionaries are valid ({} warnings)", report.warnings.len());
    Ok(())
}
