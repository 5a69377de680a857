//! veredicto: analyze a company dataset from a JSON file.
//!
//! Usage:
//!   veredicto <dataset.json>          # text report
//!   veredicto <dataset.json> --json   # raw analysis result as JSON
//!
//! The dataset file holds a `CompanyDataset` as assembled by whatever data
//! retrieval layer is in use; this binary only parses, analyzes and prints.

use analysis_core::CompanyDataset;
use analysis_orchestrator::{render_report, StockAnalyzer};
use anyhow::{bail, Context};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut as_json = false;
    let mut path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            as_json = true;
        } else if path.is_none() && !arg.starts_with('-') {
            path = Some(arg);
        } else {
            bail!("unexpected argument: {arg}");
        }
    }
    let path = match path {
        Some(p) => p,
        None => bail!("usage: veredicto <dataset.json> [--json]"),
    };

    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let dataset: CompanyDataset =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;

    tracing::info!(symbol = %dataset.profile.symbol, "loaded dataset from {path}");
    let analysis = StockAnalyzer::new().analyze(&dataset);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", render_report(&dataset.profile, &analysis));
    }
    Ok(())
}
