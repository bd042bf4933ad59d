use approx::assert_abs_diff_eq;
use dk_chart::core::{CurveSampler, LayoutInput, TagLayoutConfig, TagLayoutEngine, TagRect};

fn engine() -> TagLayoutEngine {
    TagLayoutEngine::new(TagLayoutConfig::default())
}

fn input_on_curve(index: usize, x: f64, name_len: usize) -> LayoutInput {
    let sampler = CurveSampler::shared();
    LayoutInput::new(index, x, sampler.curve_height(x), name_len)
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(engine().resolve(&[]).is_empty());
}

#[test]
fn single_entry_keeps_default_offset() {
    let offsets = engine().resolve(&[input_on_curve(0, 0.5, 5)]);
    assert_eq!(offsets, vec![0.10]);
}

#[test]
fn colliding_pair_lands_on_opposite_sides() {
    let offsets = engine().resolve(&[
        input_on_curve(0, 0.5, 5),
        input_on_curve(1, 0.5005, 3),
    ]);
    assert_eq!(offsets.len(), 2);
    assert_abs_diff_eq!(offsets[0], 0.10);
    assert_abs_diff_eq!(offsets[1], -0.10);
}

#[test]
fn offsets_follow_input_order_not_sort_order() {
    let offsets = engine().resolve(&[
        LayoutInput::new(0, 0.5005, 0.4, 5),
        LayoutInput::new(1, 0.5, 0.4, 5),
    ]);
    assert_abs_diff_eq!(offsets[0], -0.10);
    assert_abs_diff_eq!(offsets[1], 0.10);
}

#[test]
fn ties_in_x_keep_input_order() {
    let offsets = engine().resolve(&[
        LayoutInput::new(0, 0.3, 0.4, 4),
        LayoutInput::new(1, 0.3, 0.4, 4),
    ]);
    assert_abs_diff_eq!(offsets[0], 0.10);
    assert_abs_diff_eq!(offsets[1], -0.10);
}

#[test]
fn third_stacked_label_is_pushed_away_from_curve() {
    let inputs = [
        LayoutInput::new(0, 0.5, 0.4, 6),
        LayoutInput::new(1, 0.5, 0.4, 6),
        LayoutInput::new(2, 0.5, 0.4, 6),
    ];
    let rects = engine().resolve_rects(&inputs);
    assert_abs_diff_eq!(rects[0].offset, 0.10, epsilon = 1e-12);
    assert_abs_diff_eq!(rects[1].offset, -0.10, epsilon = 1e-12);
    assert_abs_diff_eq!(rects[2].offset, -0.20, epsilon = 1e-12);

    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            assert!(!rects[i].overlaps(&rects[j]), "{i} and {j} overlap");
        }
    }
}

#[test]
fn pushes_below_are_exhausted_before_pushing_above() {
    let inputs: Vec<LayoutInput> = (0..4).map(|i| LayoutInput::new(i, 0.5, 0.4, 6)).collect();
    let offsets = engine().resolve(&inputs);

    // +0.20 would also clear every neighbor, but the scan tries the lower
    // side first.
    let expected = [0.10, -0.10, -0.20, -0.30];
    for (offset, want) in offsets.iter().zip(expected) {
        assert_abs_diff_eq!(*offset, want, epsilon = 1e-12);
    }
}

#[test]
fn well_separated_labels_all_stay_above() {
    let inputs: Vec<LayoutInput> = [0.1, 0.3, 0.5, 0.7, 0.9]
        .iter()
        .enumerate()
        .map(|(index, &x)| input_on_curve(index, x, 12))
        .collect();
    let offsets = engine().resolve(&inputs);
    assert!(offsets.iter().all(|&offset| offset == 0.10));
}

#[test]
fn long_names_do_not_widen_boxes_past_the_cap() {
    let config = TagLayoutConfig::default();
    let short = TagRect::for_input(LayoutInput::new(0, 0.5, 0.5, 12), 0.1, config);
    let long = TagRect::for_input(LayoutInput::new(0, 0.5, 0.5, 64), 0.1, config);
    assert_eq!(short.half_width, long.half_width);
    assert_abs_diff_eq!(short.half_width, 12.0 * 0.009 / 2.0 + 0.01, epsilon = 1e-12);
}

#[test]
fn touching_boxes_do_not_overlap() {
    let a = TagRect {
        x: 0.25,
        curve_y: 0.5,
        half_width: 0.125,
        half_height: 0.03,
        offset: 0.1,
    };
    let b = TagRect { x: 0.5, ..a };
    assert!(!a.overlaps(&b));
    assert!(a.overlaps(&TagRect { x: 0.49, ..a }));
}

#[test]
fn resolve_is_deterministic() {
    let inputs: Vec<LayoutInput> = (0..30)
        .map(|index| input_on_curve(index, 0.3 + index as f64 * 0.004, 3 + index % 9))
        .collect();
    assert_eq!(engine().resolve(&inputs), engine().resolve(&inputs));
}

#[test]
fn window_only_compares_recent_neighbors() {
    let config = TagLayoutConfig {
        neighbor_window: 1,
        ..TagLayoutConfig::default()
    };
    let engine = TagLayoutEngine::new(config);
    let offsets = engine.resolve(&[
        LayoutInput::new(0, 0.5, 0.4, 4),
        LayoutInput::new(1, 0.5, 0.4, 4),
        LayoutInput::new(2, 0.5, 0.4, 4),
    ]);
    assert_abs_diff_eq!(offsets[0], 0.10);
    assert_abs_diff_eq!(offsets[1], -0.10);
    assert_abs_diff_eq!(offsets[2], 0.10, epsilon = 1e-12);
}
