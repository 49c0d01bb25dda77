//! `rubberband-replay` - replay a drag selection scenario and print the outcome.
//!
//! ```sh
//! RUST_LOG=rubberband=debug rubberband-replay scenario.json
//! ```

use anyhow::{Context, Result, bail};
use rubberband::replay::{Scenario, run_scenario};
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: rubberband-replay <scenario.json>");
    };

    let json = fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
    let scenario = Scenario::from_json(&json).with_context(|| format!("Invalid scenario {path}"))?;
    scenario
        .settings
        .validate()
        .context("Invalid settings in scenario")?;

    let outcome = run_scenario(&scenario);
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
