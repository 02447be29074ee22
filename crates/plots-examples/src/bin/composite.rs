// File: crates/plots-examples/src/bin/composite.rs
// Summary: Draws two graphs side by side in one figure, then persists the composite once.

use anyhow::{Context, Result};
use plots_core::{CommitOptions, CommitOutcome, Figure, Graph, OutputDirs};
use plots_examples::init_logging;

fn main() -> Result<()> {
    init_logging();
    let dirs = OutputDirs::create("target/out")?;

    let mut loss = Graph::new("loss");
    let mut accuracy = Graph::new("composite").with_output_dirs(dirs);
    for epoch in 0..20 {
        let e = epoch as f64;
        loss.add_point("train", e, 2.0 * (-0.2 * e).exp());
        loss.add_point("valid", e, 2.1 * (-0.17 * e).exp() + 0.05);
        accuracy.add_point("train", e, 1.0 - 0.9 * (-0.25 * e).exp());
        accuracy.add_point("valid", e, 0.95 - 0.9 * (-0.2 * e).exp());
    }

    let mut fig = Figure::subplots((12.0, 4.5), 1, 2);

    let mut left = CommitOptions::default();
    left.x_label = "epoch".into();
    left.y_label = "loss".into();
    loss.draw_into(&left, fig.axes_mut(0)?).context("drawing loss panel")?;

    let mut right = CommitOptions::default();
    right.x_label = "epoch".into();
    right.y_label = "accuracy".into();
    right.y_lims = Some((0.0, 1.0));
    right.do_points = false;

    // The right-hand graph names the artifacts and triggers the write.
    if let CommitOutcome::Saved { data, figure } = accuracy.commit_into(&right, &mut fig, 1)? {
        println!("Wrote {}", data.display());
        println!("Wrote {}", figure.display());
    }
    Ok(())
}
