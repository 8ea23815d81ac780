// Host-side tests for track sampling, rotation and point lookup.

use glam::Vec2;
use slider_core::*;

/// Circle whose circumference is exactly `TOTAL`, centered like the real track.
struct FixedCircle;

const TOTAL: f32 = 320.0;

impl TrackPath for FixedCircle {
    fn total_length(&self) -> Option<f32> {
        Some(TOTAL)
    }

    fn point_at_length(&self, d: f32) -> Option<Vec2> {
        let r = TOTAL / std::f32::consts::TAU;
        let a = d.clamp(0.0, TOTAL) / TOTAL * std::f32::consts::TAU;
        Some(TRACK_CENTER + Vec2::new(a.cos(), a.sin()) * r)
    }
}

struct Unmounted;

impl TrackPath for Unmounted {
    fn total_length(&self) -> Option<f32> {
        None
    }

    fn point_at_length(&self, _d: f32) -> Option<Vec2> {
        None
    }
}

fn ten_step_samples() -> Vec<Point> {
    sample_path(&FixedCircle, 10.0, TRACK_CENTER, START_ROTATION_DEG)
}

#[test]
fn samples_one_point_per_step_plus_closing_point() {
    let samples = ten_step_samples();
    assert_eq!(samples.len(), 11);
    for (i, p) in samples.iter().enumerate() {
        let d = p.d.expect("sampled points carry arc length");
        assert!((d - 32.0 * i as f32).abs() < 1e-3, "sample {i} at d={d}");
    }
}

#[test]
fn samples_bracket_the_whole_track() {
    for steps in [1.0, 3.0, 3.5, 10.0, 100.0, 1000.0] {
        let samples = sample_path(&FixedCircle, steps, TRACK_CENTER, START_ROTATION_DEG);
        let first = samples.first().and_then(|p| p.d).unwrap();
        let last = samples.last().and_then(|p| p.d).unwrap();
        assert_eq!(first, 0.0, "steps={steps}");
        assert!(last >= TOTAL - 1e-3, "steps={steps} last={last}");
        assert!(last < TOTAL + SAMPLE_OVERSHOOT, "steps={steps} last={last}");
    }
}

#[test]
fn samples_keep_arc_length_order() {
    let samples = sample_path(&FixedCircle, 37.0, TRACK_CENTER, START_ROTATION_DEG);
    for pair in samples.windows(2) {
        assert!(pair[0].d < pair[1].d);
    }
}

#[test]
fn first_sample_sits_at_twelve_oclock() {
    let samples = ten_step_samples();
    let r = TOTAL / std::f32::consts::TAU;
    let top = samples[0];
    assert!((top.x - TRACK_CENTER.x).abs() < 1e-2, "x={}", top.x);
    assert!((top.y - (TRACK_CENTER.y - r)).abs() < 1e-2, "y={}", top.y);

    // a quarter of the way round is 3 o'clock
    let quarter = sample_path(&FixedCircle, 4.0, TRACK_CENTER, START_ROTATION_DEG)[1];
    assert!((quarter.x - (TRACK_CENTER.x + r)).abs() < 1e-2);
    assert!((quarter.y - TRACK_CENTER.y).abs() < 1e-2);
}

#[test]
fn degenerate_paths_give_no_samples() {
    assert!(sample_path(&Unmounted, 10.0, TRACK_CENTER, START_ROTATION_DEG).is_empty());
    let flat = CircleTrack {
        center: TRACK_CENTER,
        radius: 0.0,
    };
    assert!(sample_path(&flat, 10.0, TRACK_CENTER, START_ROTATION_DEG).is_empty());
    assert!(sample_path(&FixedCircle, 0.0, TRACK_CENTER, START_ROTATION_DEG).is_empty());
    assert!(sample_path(&FixedCircle, f32::NAN, TRACK_CENTER, START_ROTATION_DEG).is_empty());
}

#[test]
fn full_turn_rotation_is_identity() {
    let points: Vec<Point> = (0..16)
        .map(|i| Point::new(i as f32 * 17.5, 300.0 - i as f32 * 9.25, Some(i as f32)))
        .collect();
    let rotated = rotate_points(&points, TRACK_CENTER, 360.0);
    assert_eq!(rotated.len(), points.len());
    for (a, b) in points.iter().zip(&rotated) {
        assert!((a.x - b.x).abs() < 1e-3);
        assert!((a.y - b.y).abs() < 1e-3);
        assert_eq!(a.d, b.d);
    }
}

#[test]
fn rotation_matches_formula() {
    let p = rotate_point(Point::new(170.0, 160.0, None), Vec2::new(160.0, 160.0), 90.0);
    // y-down: +90 degrees turns 3 o'clock into 6 o'clock
    assert!((p.x - 160.0).abs() < 1e-4);
    assert!((p.y - 170.0).abs() < 1e-4);
    assert_eq!(p.d, None);
}

#[test]
fn circle_track_matches_svg_circle_start() {
    let c = CircleTrack {
        center: TRACK_CENTER,
        radius: TRACK_RADIUS,
    };
    let len = c.total_length().unwrap();
    assert!((len - track_perimeter()).abs() < 1e-3);
    let start = c.point_at_length(0.0).unwrap();
    assert_eq!(start, TRACK_CENTER + Vec2::new(TRACK_RADIUS, 0.0));
    let past_end = c.point_at_length(len * 2.0).unwrap();
    assert!(past_end.distance(start) < 1e-2);
}

#[test]
fn value_on_step_boundary_selects_its_sample() {
    let config = SliderConfig::new(0.0, 100.0, 10.0).unwrap();
    let samples = ten_step_samples();
    assert_eq!(value_to_point(50.0, &config, &samples), Some(samples[5]));
    assert_eq!(value_to_point(100.0, &config, &samples), Some(samples[10]));
    assert_eq!(value_to_point(0.0, &config, &samples), Some(samples[0]));
}

#[test]
fn value_between_steps_falls_back_to_first_sample() {
    // only exact thresholds match; documents the lookup as it stands
    let config = SliderConfig::new(0.0, 100.0, 10.0).unwrap();
    let samples = ten_step_samples();
    assert_eq!(value_to_point(55.0, &config, &samples), Some(samples[0]));
    assert_eq!(value_to_point(99.0, &config, &samples), Some(samples[0]));
}

#[test]
fn value_lookup_without_samples_is_none() {
    let config = SliderConfig::new(0.0, 100.0, 10.0).unwrap();
    assert_eq!(value_to_point(50.0, &config, &[]), None);
}

#[test]
fn closest_point_finds_exact_sample() {
    let samples = ten_step_samples();
    for (i, s) in samples.iter().enumerate().skip(1).take(9) {
        let hit = closest_point(s.pos(), &samples).unwrap();
        assert_eq!(hit.d, s.d, "sample {i}");
    }
}

#[test]
fn closest_point_is_nearest_neighbour_off_the_seam() {
    let samples = sample_path(&FixedCircle, 24.0, TRACK_CENTER, START_ROTATION_DEG);
    for gx in 0..32 {
        for gy in 0..32 {
            let q = Vec2::new(gx as f32 * 10.0, gy as f32 * 10.0);
            let hit = closest_point(q, &samples).unwrap();
            let best = samples
                .iter()
                .map(|s| q.distance(s.pos()))
                .fold(f32::MAX, f32::min);
            let wrapped = q.x < samples[0].x && hit.d != samples[0].d;
            if !wrapped {
                assert!(
                    q.distance(hit.pos()) <= best + 2e-3,
                    "query {q:?} picked d={:?}",
                    hit.d
                );
            }
        }
    }
}

#[test]
fn left_of_the_seam_wraps_to_the_end() {
    let samples = ten_step_samples();
    let top = samples[0].pos();
    let hit = closest_point(top + Vec2::new(-1.0, -2.0), &samples).unwrap();
    assert_eq!(hit.d, Some(TOTAL));
}

#[test]
fn right_of_the_seam_stays_at_the_start() {
    let samples = ten_step_samples();
    let top = samples[0].pos();
    let hit = closest_point(top + Vec2::new(1.0, -2.0), &samples).unwrap();
    assert_eq!(hit.d, Some(0.0));
}

#[test]
fn closest_point_without_samples_is_none() {
    assert_eq!(closest_point(Vec2::ZERO, &[]), None);
}

#[test]
fn oversized_step_count_gives_no_samples() {
    let steps = (MAX_STEPS * 10.0) as f32;
    assert!(sample_path(&FixedCircle, steps, TRACK_CENTER, START_ROTATION_DEG).is_empty());
    assert!(sample_path(&FixedCircle, 1e11, TRACK_CENTER, START_ROTATION_DEG).is_empty());
}
