use dk_chart::core::{CurveSampler, LayoutInput, NormalizedPoint, TagLayoutConfig, TagLayoutEngine};
use proptest::prelude::*;

fn inputs_on_curve(items: &[(f64, usize)]) -> Vec<LayoutInput> {
    let sampler = CurveSampler::shared();
    items
        .iter()
        .enumerate()
        .map(|(index, &(x, name_len))| {
            LayoutInput::new(index, x, sampler.curve_height(x), name_len)
        })
        .collect()
}

proptest! {
    #[test]
    fn small_inputs_never_overlap(
        items in prop::collection::vec((0.0f64..1.0, 1usize..24), 1..=4)
    ) {
        let engine = TagLayoutEngine::new(TagLayoutConfig::default());
        let rects = engine.resolve_rects(&inputs_on_curve(&items));
        prop_assert_eq!(rects.len(), items.len());
        for i in 0..rects.len() {
            for j in (i + 1)..rects.len() {
                prop_assert!(!rects[i].overlaps(&rects[j]), "{:?} overlaps {:?}", rects[i], rects[j]);
            }
        }
    }

    #[test]
    fn clustered_small_inputs_never_overlap(
        base in 0.0f64..0.95,
        jitter in prop::collection::vec((0.0f64..0.05, 1usize..16), 2..=4)
    ) {
        let items: Vec<(f64, usize)> = jitter.iter().map(|&(dx, len)| (base + dx, len)).collect();
        let engine = TagLayoutEngine::new(TagLayoutConfig::default());
        let rects = engine.resolve_rects(&inputs_on_curve(&items));
        for i in 0..rects.len() {
            for j in (i + 1)..rects.len() {
                prop_assert!(!rects[i].overlaps(&rects[j]));
            }
        }
    }

    #[test]
    fn resolve_twice_gives_identical_offsets(
        items in prop::collection::vec((0.0f64..1.0, 1usize..24), 0..40)
    ) {
        let engine = TagLayoutEngine::new(TagLayoutConfig::default());
        let inputs = inputs_on_curve(&items);
        prop_assert_eq!(engine.resolve(&inputs), engine.resolve(&inputs));
    }

    #[test]
    fn snap_always_lands_on_curve(x in -10.0f64..10.0, y in -10.0f64..10.0) {
        let sampler = CurveSampler::shared();
        let snapped = sampler.snap(NormalizedPoint::new(x, y));
        prop_assert!((0.0..=1.0).contains(&snapped.x));
        prop_assert_eq!(snapped.y, sampler.curve_height(x.clamp(0.0, 1.0)));
    }

    #[test]
    fn nearest_point_is_always_a_table_entry(
        x in -5.0f64..5.0,
        y in -5.0f64..5.0,
        aspect in 0.1f64..10.0
    ) {
        let sampler = CurveSampler::shared();
        let nearest = sampler.nearest_point(NormalizedPoint::new(x, y), aspect);
        prop_assert!(sampler.table().samples().contains(&nearest));
    }
}
