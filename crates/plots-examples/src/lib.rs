// File: crates/plots-examples/src/lib.rs
// Summary: Shared helpers for the example binaries (logging setup, CSV series loading).

use std::path::Path;

use anyhow::{Context, Result};
use plots_core::Graph;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a fmt subscriber honoring RUST_LOG, defaulting to `info`.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Append rows of a `series,x,y` CSV (with header) to `graph`, one point per row.
/// Returns the number of rows loaded; rows with unparsable numbers are skipped.
pub fn load_series_csv(graph: &mut Graph, path: &Path) -> Result<usize> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("failed to open CSV '{}'", path.display()))?;

    let mut loaded = 0usize;
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("bad CSV record at row {}", line + 2))?;
        let name = rec.get(0).map(str::trim).unwrap_or_default();
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        match (name.is_empty(), parse(1), parse(2)) {
            (false, Some(x), Some(y)) => {
                graph.add_point(name, x, y);
                loaded += 1;
            }
            _ => tracing::warn!(row = line + 2, "skipping malformed row"),
        }
    }
    Ok(loaded)
}
