// File: crates/plots-core/tests/accumulate.rs
// Purpose: Accumulated series equal the concatenation of every call, in call order.

use plots_core::{Graph, PlotError};
use proptest::prelude::*;

fn chunk() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..20)
}

proptest! {
    #[test]
    fn repeated_adds_concatenate(chunks in prop::collection::vec(chunk(), 1..8), bulk_first in any::<bool>()) {
        let mut graph = Graph::new("prop");
        let mut want_x = Vec::new();
        let mut want_y = Vec::new();

        for (i, c) in chunks.iter().enumerate() {
            let xs: Vec<f64> = c.iter().map(|p| p.0).collect();
            let ys: Vec<f64> = c.iter().map(|p| p.1).collect();
            if i == 0 && bulk_first {
                graph.add_series("s", &xs, &ys).unwrap();
            } else {
                graph.add_points("s", &xs, &ys).unwrap();
            }
            want_x.extend_from_slice(&xs);
            want_y.extend_from_slice(&ys);

            let s = graph.get("s").unwrap();
            prop_assert_eq!(s.xs().len(), s.ys().len());
        }

        let s = graph.get("s").unwrap();
        prop_assert_eq!(s.xs(), &want_x[..]);
        prop_assert_eq!(s.ys(), &want_y[..]);
    }
}

#[test]
fn single_points_and_sequences_mix() {
    let mut graph = Graph::new("mix");
    graph.add_point("a", 0.0, 10.0);
    graph.add_points("a", &[1.0, 2.0], &[11.0, 12.0]).unwrap();
    graph.add_point("a", 3.0, 13.0);

    let a = graph.get("a").unwrap();
    assert_eq!(a.xs(), &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(a.ys(), &[10.0, 11.0, 12.0, 13.0]);
}

#[test]
fn series_keep_first_insertion_order() {
    let mut graph = Graph::new("order");
    graph.add_point("b", 0.0, 0.0);
    graph.add_series("a", &[1.0], &[1.0]).unwrap();
    graph.add_point("b", 1.0, 1.0);
    let names: Vec<&str> = graph.series().names().collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn ragged_bulk_load_is_rejected() {
    let mut graph = Graph::new("ragged");
    graph.add_series("a", &[1.0], &[2.0]).unwrap();
    let err = graph.add_series("a", &[1.0, 2.0, 3.0], &[]).unwrap_err();
    assert!(matches!(err, PlotError::LengthMismatch { xs: 3, ys: 0, .. }));
    assert_eq!(graph.get("a").unwrap().len(), 1);
}
