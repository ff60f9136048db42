//! End-to-end drawing scenarios through the public `Sketch` facade.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use approx::assert_relative_eq;
use bezkit::error::{DimensionError, SurfaceError};
use bezkit::render::{PathCommand, SurfaceStyle};
use bezkit::tessellation::{Concentrate, TessellationParams};
use bezkit::{
    Accuracy, BezkitError, CloseMode, DashPattern, Dimension, DrawingSurface, Point,
    RecordingSurface, Sketch,
};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("bezkit=info".parse().unwrap_or_default());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

fn sketch(dimension: Dimension) -> Sketch<RecordingSurface> {
    init_tracing();
    Sketch::bind(RecordingSurface::new(dimension)).unwrap()
}

fn reference_points() -> Vec<Point> {
    [
        [0.0, 0.0],
        [100.0, 1100.0],
        [1500.0, -2200.0],
        [1500.0, 2800.0],
        [100.0, -500.0],
        [0.0, 600.0],
    ]
    .into_iter()
    .map(Point::from)
    .collect()
}

fn level(level: i32) -> TessellationParams {
    TessellationParams::default().with_accuracy(Accuracy::new(level))
}

#[test]
fn reference_curve_at_level_three() {
    let mut sketch = sketch(Dimension::Two);
    let id = sketch.create_curve(reference_points(), level(3)).unwrap();
    let curve = sketch.curve(id).unwrap();

    assert_eq!(curve.vertices().len(), 27);
    assert_eq!(curve.vertices()[0], Point::xy(0.0, 0.0));
    assert_eq!(curve.vertices().last(), Some(&Point::xy(0.0, 600.0)));
}

#[test]
fn endpoints_are_exact_at_every_level() {
    let mut sketch = sketch(Dimension::Two);
    for l in 0..=10 {
        let id = sketch.create_curve(reference_points(), level(l)).unwrap();
        let vertices = sketch.curve(id).unwrap().vertices();
        assert_eq!(vertices[0], Point::xy(0.0, 0.0), "level {l}");
        assert_eq!(vertices.last(), Some(&Point::xy(0.0, 600.0)), "level {l}");
    }
}

#[test]
fn translated_line_answers_nearest_at_new_position() {
    let mut sketch = sketch(Dimension::Two);
    let line = sketch
        .create_curve(vec![Point::xy(0.0, 0.0), Point::xy(10.0, 0.0)], level(7))
        .unwrap();
    let moved = sketch.translate(line, 5.0, 5.0, None).unwrap();

    let near = sketch.nearest(moved, &Point::xy(5.0, 5.0)).unwrap();
    assert!(near.distance < 1e-9);

    let near = sketch.nearest(line, &Point::xy(5.0, 5.0)).unwrap();
    assert_relative_eq!(near.vertex.x(), 5.0, epsilon = 1e-9);
    assert_relative_eq!(near.vertex.y(), 0.0, epsilon = 1e-9);
}

#[test]
fn straight_line_nearest_matches_independent_scan() {
    let mut sketch = sketch(Dimension::Two);
    for l in [0, 3, 5] {
        let accuracy = Accuracy::new(l);
        let id = sketch
            .create_curve(
                vec![Point::xy(0.0, 0.0), Point::xy(10.0, 0.0)],
                level(l),
            )
            .unwrap();

        let segments = accuracy.segments();
        let samples: Vec<f64> = (0..=segments)
            .map(|k| 10.0 * f64::from(k) / f64::from(segments))
            .chain(std::iter::once(10.0))
            .collect();

        for (px, py) in [(5.0, 5.0), (-3.0, 1.0), (7.3, -2.0), (12.0, 0.5), (0.21, 0.0)] {
            let best = samples
                .iter()
                .map(|x| (x - px).hypot(py))
                .fold(f64::INFINITY, f64::min);

            let near = sketch.nearest(id, &Point::xy(px, py)).unwrap();
            assert_relative_eq!(near.distance, best, epsilon = 1e-9);
            assert_relative_eq!(near.vertex.y(), 0.0, epsilon = 1e-9);
            assert!(samples
                .iter()
                .any(|x| (x - near.vertex.x()).abs() < 1e-9));
            // Equidistant samples resolve to the earlier one.
            let first_best = samples
                .iter()
                .position(|x| ((x - px).hypot(py) - best).abs() < 1e-9)
                .unwrap();
            assert_relative_eq!(near.vertex.x(), samples[first_best], epsilon = 1e-9);
        }
    }
}

#[test]
fn closed_curve_round_trip() {
    let mut sketch = sketch(Dimension::Two);
    let points = reference_points();
    let used = sketch
        .draw(&points, level(4).with_close(CloseMode::Close))
        .unwrap();

    let extra = bezkit::math::vertex::closed_curve_extra_points(&points).unwrap();
    assert_eq!(&used[points.len()..], &extra[..]);

    let commands = sketch.surface().commands();
    let close_at = commands
        .iter()
        .position(|c| *c == PathCommand::ClosePath)
        .expect("closed curves call close_path");
    assert_eq!(&commands[close_at + 1..], &[PathCommand::Fill, PathCommand::Stroke]);
}

#[test]
fn two_point_closed_curve_is_drawn() {
    let mut sketch = sketch(Dimension::Two);
    let used = sketch
        .draw(
            &[Point::xy(0.0, 0.0), Point::xy(10.0, 0.0)],
            level(2).with_close(CloseMode::Close),
        )
        .unwrap();
    assert_eq!(used.len(), 5);
    assert!(sketch.surface().commands().contains(&PathCommand::ClosePath));
}

#[test]
fn style_flags_select_fill_and_stroke() {
    init_tracing();
    let surface = RecordingSurface::new(Dimension::Two).with_style(SurfaceStyle {
        fill: false,
        stroke: true,
    });
    let mut sketch = Sketch::bind(surface).unwrap();
    sketch
        .draw(&reference_points(), level(1).with_close(CloseMode::Close))
        .unwrap();
    let commands = sketch.surface().commands();
    assert!(!commands.contains(&PathCommand::Fill));
    assert_eq!(commands.last(), Some(&PathCommand::Stroke));
}

#[test]
fn dashes_conserve_arc_length() {
    let mut sketch = sketch(Dimension::Three);
    let points = vec![
        Point::xyz(0.0, 0.0, 0.0),
        Point::xyz(40.0, 90.0, 10.0),
        Point::xyz(120.0, -30.0, 60.0),
        Point::xyz(200.0, 50.0, -20.0),
    ];
    let id = sketch.create_curve(points, level(8)).unwrap();
    let report = sketch
        .redraw(id, Some(DashPattern::new(6.0, 4.0).unwrap()))
        .unwrap();

    let summary = report.dash.unwrap();
    let length = sketch.curve(id).unwrap().length().unwrap();
    assert!(report.upgraded.is_none());
    assert_relative_eq!(summary.total_length(), length, max_relative = 1e-9);
    assert!(summary.dashes > 1);
}

#[test]
fn coarse_dashed_curve_is_upgraded_once() {
    let mut sketch = sketch(Dimension::Two);
    let id = sketch.create_curve(reference_points(), level(2)).unwrap();
    let dash = DashPattern::new(15.0, 15.0).unwrap();

    let first = sketch.redraw(id, Some(dash)).unwrap();
    let warning = first.upgraded.expect("level 2 is too coarse to dash");
    assert_eq!(warning.from, Accuracy::new(2));
    assert_eq!(warning.to, Accuracy::DASH_MIN);
    assert_eq!(sketch.curve(id).unwrap().accuracy(), Accuracy::DASH_MIN);

    let second = sketch.redraw(id, Some(dash)).unwrap();
    assert!(second.upgraded.is_none());
}

#[test]
fn concentration_is_reproducible() {
    let points: Vec<Point> = (0..400)
        .map(|i| {
            let t = f64::from(i) / 399.0;
            Point::xy(t * 1000.0, (t * 12.0).sin() * 200.0)
        })
        .collect();

    let first = Concentrate::new(&points, false).removed_indices();
    let second = Concentrate::new(&points, false).removed_indices();
    assert_eq!(first, second);
    assert_eq!(first.len(), 400 - 160);

    let mut sketch = sketch(Dimension::Two);
    let a = sketch.draw(&points, level(0)).unwrap();
    let b = sketch.draw(&points, level(0)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 160);
    assert_eq!(a[0], points[0]);
    assert_eq!(a.last(), points.last());
}

#[test]
fn three_d_translate_requires_dz() {
    let mut sketch = sketch(Dimension::Three);
    let id = sketch
        .create_curve(
            vec![Point::xyz(0.0, 0.0, 0.0), Point::xyz(1.0, 2.0, 3.0)],
            level(1),
        )
        .unwrap();
    assert!(matches!(
        sketch.translate(id, 1.0, 1.0, None),
        Err(BezkitError::Dimension(DimensionError::MissingZ))
    ));
    assert_eq!(sketch.len(), 1);
}

struct Plotter;

impl DrawingSurface for Plotter {
    fn dimensions(&self) -> usize {
        4
    }
    fn style(&self) -> SurfaceStyle {
        SurfaceStyle::default()
    }
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _point: &Point) {}
    fn line_to(&mut self, _point: &Point) {}
    fn close_path(&mut self) {}
    fn fill(&mut self) {}
    fn stroke(&mut self) {}
}

#[test]
fn unsupported_surface_fails_at_bind() {
    init_tracing();
    assert!(matches!(
        Sketch::bind(Plotter),
        Err(BezkitError::Surface(SurfaceError::Unsupported(_)))
    ));
}
