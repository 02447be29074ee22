// File: crates/plots-examples/src/bin/graph.rs
// Summary: Builds a multi-series graph (from a CSV or synthetic data) and commits it.
// Usage: example-graph [series.csv] [--display] [--png] [--theme light|dark]

use anyhow::Result;
use plots_core::{theme, CommitOptions, CommitOutcome, Disposition, Graph, OutputDirs};
use plots_examples::{init_logging, load_series_csv};

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let display = args.iter().any(|a| a == "--display");
    let png = args.iter().any(|a| a == "--png");
    let theme_name = args.iter().position(|a| a == "--theme").and_then(|i| args.get(i + 1));
    let csv_path = args
        .iter()
        .enumerate()
        .find(|(i, a)| !a.starts_with("--") && (*i == 0 || args[i - 1] != "--theme"))
        .map(|(_, a)| a);

    let dirs = OutputDirs::create("target/out")?;
    let mut graph = Graph::new("example_graph").with_output_dirs(dirs);

    match csv_path {
        Some(p) => {
            let n = load_series_csv(&mut graph, std::path::Path::new(p))?;
            tracing::info!("loaded {n} points from {p}");
            if n == 0 {
                anyhow::bail!("no rows loaded from {p}; expected header series,x,y");
            }
        }
        None => {
            let xs: Vec<f64> = (0..=60).map(|i| i as f64 * 0.1).collect();
            let sin: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
            let damped: Vec<f64> = xs.iter().map(|x| (-0.4 * x).exp() * (2.0 * x).cos()).collect();
            graph.add_series("sin", &xs, &sin)?;
            graph.add_series("damped", &xs, &damped)?;
            // streaming-style accumulation
            for i in 0..=12 {
                let x = i as f64 * 0.5;
                graph.add_point("steps", x, (x / 2.0).floor() * 0.25 - 0.5);
            }
        }
    }

    let mut opts = CommitOptions::default();
    opts.x_label = "t [s]".into();
    opts.y_label = "amplitude".into();
    opts.do_points = csv_path.is_some();
    if display {
        opts.disposition = Disposition::Display;
    }
    if png {
        opts.figure_suffix = ".png".into();
    }
    if let Some(name) = theme_name {
        opts.theme = theme::find(name);
    }

    match graph.commit(&opts)? {
        CommitOutcome::Saved { data, figure } => {
            println!("Wrote {}", data.display());
            println!("Wrote {}", figure.display());
        }
        CommitOutcome::Displayed => println!("Displayed example_graph"),
    }
    Ok(())
}
