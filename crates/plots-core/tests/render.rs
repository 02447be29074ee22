// File: crates/plots-core/tests/render.rs
// Purpose: Raster and vector output shapes for a small figure.

use plots_core::{CommitOptions, Figure, Graph, Theme};

fn sample_figure() -> Figure {
    let mut graph = Graph::new("render");
    graph.add_series("sin", &[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0, 0.84, 0.91, 0.14, -0.76]).unwrap();
    graph.add_series("gap", &[0.0, 1.0, 2.0], &[1.0, f64::NAN, 1.0]).unwrap();

    let mut fig = Figure::new((4.0, 3.0));
    let opts = CommitOptions { x_label: "t".into(), y_label: "v".into(), ..CommitOptions::default() };
    graph.draw_into(&opts, fig.axes_mut(0).unwrap()).unwrap();
    fig
}

#[test]
fn rgba_buffer_matches_requested_size() {
    let fig = sample_figure();
    let (px, w, h, stride) = fig.render_to_rgba8(320, 240).expect("rgba render");
    assert_eq!((w, h), (320, 240));
    assert_eq!(stride, 320 * 4);
    assert_eq!(px.len(), stride * 240);
    // opaque white background in the top-left corner
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn dark_theme_changes_background() {
    let mut fig = sample_figure();
    fig.theme = Theme::dark();
    let (px, _, _, _) = fig.render_to_rgba8(64, 48).unwrap();
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}

#[test]
fn png_and_pdf_headers() {
    let fig = sample_figure();
    let png = fig.to_png_bytes(false).unwrap();
    assert!(png.starts_with(&[137, 80, 78, 71]));
    let img = image::load_from_memory(&png).unwrap();
    assert_eq!((img.width(), img.height()), (400, 300));

    let pdf = fig.to_pdf_bytes(false).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn tight_page_is_never_larger_than_padded_figure() {
    let fig = sample_figure();
    let shaper = plots_core::text::TextShaper::new();
    let full = fig.page_rect(&shaper, false);
    let tight = fig.page_rect(&shaper, true);
    let pad = 7.2;
    assert!(tight.width() <= full.width() + 2.0 * pad + 1e-3);
    assert!(tight.height() <= full.height() + 2.0 * pad + 1e-3);
    assert!(tight.width() > 0.0 && tight.height() > 0.0);
}

#[test]
fn extreme_finite_data_renders() {
    let mut graph = Graph::new("extreme");
    graph.add_series("a", &[-1e308, 1e308], &[0.0, f64::MAX]).unwrap();

    let mut fig = Figure::new((4.0, 3.0));
    graph.draw_into(&CommitOptions::default(), fig.axes_mut(0).unwrap()).unwrap();
    assert!(fig.to_pdf_bytes(true).unwrap().starts_with(b"%PDF"));
    let (px, _, _, _) = fig.render_to_rgba8(80, 60).unwrap();
    assert_eq!(px.len(), 80 * 60 * 4);
}

#[test]
fn extreme_fixed_limits_render() {
    let mut graph = Graph::new("wide");
    graph.add_series("a", &[0.0, 1.0], &[0.0, 1.0]).unwrap();

    let mut fig = Figure::new((4.0, 3.0));
    let opts = CommitOptions {
        x_lims: Some((-1e308, 1e308)),
        y_lims: Some((-f64::MAX, f64::MAX)),
        ..CommitOptions::default()
    };
    graph.draw_into(&opts, fig.axes_mut(0).unwrap()).unwrap();
    assert!(fig.to_png_bytes(true).unwrap().starts_with(&[137, 80, 78, 71]));
}

#[test]
fn zero_line_follows_theme() {
    let fig = sample_figure();
    assert_eq!(fig.axes(0).unwrap().hlines[0].color, Theme::light().zero_line);

    let graph = Graph::new("dark");
    let mut fig = Figure::new((4.0, 3.0));
    let opts = CommitOptions { theme: Theme::dark(), ..CommitOptions::default() };
    graph.draw_into(&opts, fig.axes_mut(0).unwrap()).unwrap();
    assert_eq!(fig.axes(0).unwrap().hlines[0].color, Theme::dark().zero_line);
}
