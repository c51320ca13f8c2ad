//! Two-pass layout tests — sizing bottom-up, flowing top-down.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use scorelayout::{
    stacked_height, CellMetrics, FillLine, LayoutCell, LayoutEngine, LayoutMeasure,
    LayoutOptions, LayoutState, Layoutable, MinimumWidths, ModelRef, SvgCanvas,
};

#[test]
fn two_measure_system_end_to_end() {
    let sys = system(0, 40.0, vec![measure(0, &[10.0, 15.0]), measure(1, &[8.0])]);
    let mut engine = LayoutEngine::new(vec![sys], small_padding());
    let mut canvas = SvgCanvas::new(820.0, 200.0);

    engine.measure_pass().unwrap();
    let measures = engine.systems()[0].measures();
    assert_eq!(measures[0].min_width(), Some(20.0));
    assert_eq!(measures[1].min_width(), Some(13.0));
    assert_eq!(engine.systems()[0].min_width(), Some(33.0));

    engine
        .flow_pass(&mut canvas, &Fixed(vec![vec![25.0, 15.0]]))
        .unwrap();
    let measures = engine.systems()[0].measures();
    assert_eq!(measures[0].x(), 0.0);
    assert_eq!(measures[1].x(), 25.0);
    assert_eq!(measures[0].cells()[1].width(), 20.0);
    assert_eq!(measures[1].cells()[0].width(), 10.0);
}

#[test]
fn measure_min_width_is_padding_plus_widest_cell() {
    let opts = small_padding();
    let mut m = measure(3, &[12.0, 31.5, 7.0]);
    m.measure_cells().unwrap();
    let min = m.compute_min_width(&opts).unwrap();

    assert_eq!(min, 31.5 + 5.0);
    assert_eq!(m.padding(), 5.0);
    assert_eq!(m.state(), LayoutState::MinWidthComputed);
}

#[test]
fn empty_measure_is_just_padding() {
    let mut m = LayoutMeasure::new(0, Vec::new());
    m.measure_cells().unwrap();
    assert_eq!(m.compute_min_width(&small_padding()).unwrap(), 5.0);
    assert_eq!(m.bar_left_in_system().width, 0.0);
}

#[test]
fn set_width_gives_every_cell_the_same_width() {
    let mut m = measure(0, &[3.0, 30.0, 11.0]);
    m.measure_cells().unwrap();
    m.compute_min_width(&small_padding()).unwrap();
    m.set_width(50.0).unwrap();

    let widths: Vec<f64> = m.cells().iter().map(LayoutCell::width).collect();
    assert_eq!(widths, vec![45.0, 45.0, 45.0]);
    assert_eq!(m.width(), 50.0);
}

#[test]
fn height_propagates_from_system_to_cells() {
    let opts = LayoutOptions::default();
    let height = stacked_height(&[2, 1], &opts);
    let sys = system(
        0,
        height,
        vec![measure(0, &[10.0, 20.0]), measure(1, &[5.0, 5.0])],
    );
    let mut engine = LayoutEngine::new(vec![sys], opts);
    let mut canvas = SvgCanvas::new(820.0, 400.0);
    engine.run(&mut canvas, &FillLine).unwrap();

    for m in engine.systems()[0].measures() {
        assert_eq!(m.height(), height);
        for cell in m.cells() {
            assert_eq!(cell.height(), height);
            assert_eq!(cell.y2(), height);
            assert_eq!(cell.state(), LayoutState::Flowed);
        }
    }
}

#[test]
fn measures_are_contiguous_left_to_right() {
    let sys = system(
        0,
        40.0,
        vec![
            measure(0, &[40.0]),
            measure(1, &[65.0, 20.0]),
            measure(2, &[12.0]),
            measure(3, &[90.0]),
        ],
    );
    let mut engine = LayoutEngine::new(vec![sys], LayoutOptions::default());
    let mut canvas = SvgCanvas::new(820.0, 200.0);
    engine.run(&mut canvas, &FillLine).unwrap();

    let measures = engine.systems()[0].measures();
    assert_eq!(measures[0].x(), 0.0);
    for pair in measures.windows(2) {
        assert!(pair[0].x() <= pair[1].x());
        assert_eq!(pair[0].x() + pair[0].width(), pair[1].x());
    }
    let total = engine.systems()[0].width();
    assert!((total - LayoutOptions::default().content_width()).abs() < 1e-9);
}

#[test]
fn minimum_widths_justifier_packs_tightly() {
    let sys = system(0, 40.0, vec![measure(0, &[10.0, 15.0]), measure(1, &[8.0])]);
    let mut engine = LayoutEngine::new(vec![sys], small_padding());
    let mut canvas = SvgCanvas::new(820.0, 200.0);
    engine.run(&mut canvas, &MinimumWidths).unwrap();

    let measures = engine.systems()[0].measures();
    assert_eq!(measures[0].width(), 20.0);
    assert_eq!(measures[1].x(), 20.0);
    assert_eq!(measures[1].width(), 13.0);
}

#[test]
fn all_cells_share_the_reference_bar_offset() {
    let cells = vec![
        LayoutCell::new(ModelRef::new(0, 0), CellMetrics::new(10.0).with_bars(6.0, 1.0)),
        LayoutCell::new(ModelRef::new(1, 0), CellMetrics::new(10.0).with_bars(20.0, 9.0)),
    ];
    let sys = system(0, 40.0, vec![LayoutMeasure::new(0, cells)]);
    let mut engine = LayoutEngine::new(vec![sys], small_padding());
    let mut canvas = SvgCanvas::new(820.0, 200.0);
    engine.run(&mut canvas, &MinimumWidths).unwrap();

    let m = &engine.systems()[0].measures()[0];
    assert_eq!(m.bar_left_in_system().width, 6.0);
    assert_eq!(m.bar_right_in_system().width, 1.0);
    // 6 / 2 + right padding 3
    let xs: Vec<f64> = m.cells().iter().map(LayoutCell::x).collect();
    assert_eq!(xs, vec![6.0, 6.0]);
}

#[test]
fn flowing_twice_is_idempotent() {
    let sys = system(0, 40.0, vec![measure(0, &[10.0, 15.0]), measure(1, &[8.0])]);
    let mut engine = LayoutEngine::new(vec![sys], small_padding());
    let mut canvas = SvgCanvas::new(820.0, 200.0);

    engine.run(&mut canvas, &FillLine).unwrap();
    let first = engine.snapshot();
    let groups = canvas.group_count();

    engine.run(&mut canvas, &FillLine).unwrap();
    assert_eq!(engine.snapshot(), first);
    assert_eq!(canvas.group_count(), groups);

    // Flowing a single measure again changes nothing either.
    let before = engine.snapshot();
    let opts = engine.options().clone();
    let m = engine.system_mut(0).unwrap().measure_mut(0).unwrap();
    m.flow(&mut canvas, &opts).unwrap();
    assert_eq!(engine.snapshot(), before);
    assert_eq!(canvas.group_count(), groups);
}

#[test]
fn rerun_after_resize_reuses_groups() {
    let sys = system(0, 40.0, vec![measure(0, &[10.0]), measure(1, &[30.0])]);
    let mut engine = LayoutEngine::new(vec![sys], LayoutOptions::default());
    let mut canvas = SvgCanvas::new(820.0, 200.0);
    engine.run(&mut canvas, &FillLine).unwrap();
    let groups = canvas.group_count();

    engine.system_mut(0).unwrap().set_width_budget(200.0);
    engine.run(&mut canvas, &FillLine).unwrap();

    let measures = engine.systems()[0].measures();
    assert!((measures[0].width() + measures[1].width() - 200.0).abs() < 1e-9);
    assert_eq!(measures[1].x(), measures[0].width());
    assert_eq!(canvas.group_count(), groups);
}

#[test]
fn systems_stack_vertically() {
    let opts = LayoutOptions::default();
    let systems = vec![
        system(0, 40.0, vec![measure(0, &[10.0])]),
        system(1, 140.0, vec![measure(1, &[10.0])]),
    ];
    let mut engine = LayoutEngine::new(systems, opts.clone());
    let mut canvas = SvgCanvas::new(820.0, 0.0);
    engine.run(&mut canvas, &FillLine).unwrap();

    let systems = engine.systems();
    assert_eq!(systems[0].y(), opts.page_margin_top);
    assert_eq!(systems[1].y(), opts.page_margin_top + 40.0 + opts.system_spacing);
    assert_eq!(
        engine.total_height(),
        systems[1].y() + 140.0 + opts.page_margin_bottom
    );
}
