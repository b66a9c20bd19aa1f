#![allow(dead_code)]

use labgrid::ir::{
    Annotation, EditOptions, Interval, IntervalTier, Lab, Point, PointTier, TextGrid, Tier,
};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Generated times are integer milliseconds.
pub const TICKS_PER_SECOND: f64 = 1000.0;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Label text that survives quoting: anything but `"`.
pub fn text_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex("[a-zA-Z0-9 .,:;'!?<>\\[\\]()_-]{0,16}")
        .expect("valid text regex")
        .boxed()
}

/// Lab labels: non-empty words joined by single spaces.
pub fn label_strategy() -> BoxedStrategy<String> {
    proptest::string::string_regex("[a-z@]{1,6}( [a-z@]{1,6}){0,2}")
        .expect("valid label regex")
        .boxed()
}

pub fn ticks(value: u32) -> f64 {
    f64::from(value) / TICKS_PER_SECOND
}

/// An interval tier whose intervals partition `[0, end]` at sorted,
/// distinct boundaries.
pub fn arb_interval_tier(end: u32, max_intervals: usize) -> BoxedStrategy<Tier> {
    (
        text_strategy(),
        proptest::collection::btree_set(1..end.max(2), 0..max_intervals),
        proptest::collection::vec(text_strategy(), max_intervals + 1),
    )
        .prop_map(move |(name, cuts, texts)| {
            let mut boundaries = vec![0];
            boundaries.extend(cuts.into_iter().filter(|&c| c < end));
            boundaries.push(end);

            let intervals: Vec<Interval> = boundaries
                .windows(2)
                .zip(texts)
                .map(|(pair, text)| Interval::new(ticks(pair[0]), ticks(pair[1]), text))
                .collect();

            let mut tier = IntervalTier::new(name, 0.0, ticks(end));
            tier.set_intervals(intervals, &EditOptions::default())
                .expect("generated intervals lie inside the tier");
            Tier::Interval(tier)
        })
        .boxed()
}

/// A point tier on `[0, end]` with distinct point times.
pub fn arb_point_tier(end: u32, max_points: usize) -> BoxedStrategy<Tier> {
    (
        text_strategy(),
        proptest::collection::btree_map(0..=end, text_strategy(), 0..=max_points),
    )
        .prop_map(move |(name, marks)| {
            let points: Vec<Point> = marks
                .into_iter()
                .map(|(time, mark)| Point::new(ticks(time), mark))
                .collect();

            let mut tier = PointTier::new(name, 0.0, ticks(end));
            tier.set_points(points, &EditOptions::default())
                .expect("generated points lie inside the tier");
            Tier::Point(tier)
        })
        .boxed()
}

pub fn arb_textgrid(max_tiers: usize, max_items: usize) -> BoxedStrategy<TextGrid> {
    (1_000u32..=20_000, text_strategy())
        .prop_flat_map(move |(end, name)| {
            let tier = prop_oneof![
                arb_interval_tier(end, max_items),
                arb_point_tier(end, max_items),
            ];
            (
                Just(end),
                Just(name),
                proptest::collection::vec(tier, 0..=max_tiers),
            )
        })
        .prop_map(|(end, name, tiers)| {
            let mut grid = TextGrid::new(name, 0.0, ticks(end));
            for tier in tiers {
                grid.push_tier(tier, &EditOptions::default())
                    .expect("generated tiers share the grid range");
            }
            grid
        })
        .boxed()
}

/// A lab with `precision` decimals whose times are exact at that precision.
pub fn arb_lab(max_annotations: usize) -> BoxedStrategy<Lab> {
    (1u8..=6)
        .prop_flat_map(move |precision| {
            (
                Just(precision),
                proptest::collection::vec(
                    (0u32..1_000_000, 0u32..1_000_000, label_strategy()),
                    0..=max_annotations,
                ),
            )
        })
        .prop_map(|(precision, rows)| {
            let scale = f64::from(10u32.pow(u32::from(precision)));
            let mut lab = Lab::new("generated", precision);
            lab.append_annotations(rows.into_iter().map(|(start, end, label)| {
                Annotation::new(f64::from(start) / scale, f64::from(end) / scale, label)
            }));
            lab
        })
        .boxed()
}
