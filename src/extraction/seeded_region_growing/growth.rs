//! Region growth around a seed and the acceptance test.

use std::ops::Range;

use super::seed::Seed;
use super::working_set::WorkingSet;
use crate::core::Point2D;
use crate::extraction::line_fitting::{point_to_line_distance, point_to_point_distance};

/// Grow a seed in both directions along the working set.
///
/// A neighbour joins while it is within `epsilon` of the seed line and
/// within `gmax` of the segment end it attaches to. Growth in each direction
/// stops at the first point failing either test. Returns the grown run as
/// working-set positions.
pub(crate) fn grow(
    points: &[Point2D],
    working: &WorkingSet,
    seed: &Seed,
    epsilon: f32,
    gmax: f32,
) -> Range<usize> {
    let len = working.len();
    let joins = |candidate: Point2D, attach: Point2D| {
        point_to_line_distance(&seed.model, candidate) <= epsilon
            && point_to_point_distance(candidate, attach) <= gmax
    };

    // Forward
    let mut end = seed.end;
    let mut last = working.point(points, end - 1);
    while end < len {
        let candidate = working.point(points, end);
        if !joins(candidate, last) {
            break;
        }
        last = candidate;
        end += 1;
    }

    // Backward
    let mut start = seed.start;
    let mut first = working.point(points, start);
    while start > 0 {
        let candidate = working.point(points, start - 1);
        if !joins(candidate, first) {
            break;
        }
        first = candidate;
        start -= 1;
    }

    start..end
}

/// Acceptance test: at least `pmin` points and first-to-last distance of at
/// least `lmin`.
pub(crate) fn accepts(
    points: &[Point2D],
    working: &WorkingSet,
    run: &Range<usize>,
    pmin: usize,
    lmin: f32,
) -> bool {
    if run.is_empty() || run.len() < pmin {
        return false;
    }
    let first = working.point(points, run.start);
    let last = working.point(points, run.end - 1);
    point_to_point_distance(first, last) >= lmin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::LineModel;

    fn seed(start: usize, end: usize) -> Seed {
        Seed {
            start,
            end,
            model: LineModel::from_slope_intercept(0.0, 0.0).unwrap(),
        }
    }

    #[test]
    fn test_grows_both_directions() {
        let points: Vec<Point2D> = (0..10).map(|i| Point2D::new(i as f32, 0.0)).collect();
        let working = WorkingSet::new(points.len());

        let run = grow(&points, &working, &seed(3, 6), 0.03, 1.5);

        assert_eq!(run, 0..10);
    }

    #[test]
    fn test_stops_at_off_line_point() {
        let mut points: Vec<Point2D> = (0..6).map(|i| Point2D::new(i as f32, 0.0)).collect();
        points.push(Point2D::new(6.0, 0.5));
        points.push(Point2D::new(7.0, 0.0)); // back on line, but unreachable

        let working = WorkingSet::new(points.len());
        let run = grow(&points, &working, &seed(0, 4), 0.03, 2.0);

        assert_eq!(run, 0..6);
    }

    #[test]
    fn test_stops_at_gap() {
        let mut points: Vec<Point2D> = (0..5).map(|i| Point2D::new(i as f32, 0.0)).collect();
        points.extend((0..5).map(|i| Point2D::new(14.0 + i as f32, 0.0)));

        let working = WorkingSet::new(points.len());
        let run = grow(&points, &working, &seed(1, 4), 0.03, 2.0);

        assert_eq!(run, 0..5);
    }

    #[test]
    fn test_gap_measured_from_current_end() {
        // Each step is 0.8, total span far beyond gmax.
        let points: Vec<Point2D> = (0..12).map(|i| Point2D::new(0.8 * i as f32, 0.0)).collect();
        let working = WorkingSet::new(points.len());

        let run = grow(&points, &working, &seed(5, 8), 0.03, 1.0);

        assert_eq!(run, 0..12);
    }

    #[test]
    fn test_accepts() {
        let points: Vec<Point2D> = (0..8).map(|i| Point2D::new(i as f32, 0.0)).collect();
        let working = WorkingSet::new(points.len());

        assert!(accepts(&points, &working, &(0..8), 5, 3.0));
        assert!(accepts(&points, &working, &(0..8), 8, 7.0));
        // Too few points
        assert!(!accepts(&points, &working, &(0..4), 5, 3.0));
        // Too short
        assert!(!accepts(&points, &working, &(0..6), 5, 5.5));
        assert!(!accepts(&points, &working, &(3..3), 0, 0.0));
    }
}
