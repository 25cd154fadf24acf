//! Seed window search.

use super::working_set::WorkingSet;
use crate::core::Point2D;
use crate::extraction::line_fitting::{LineFitter, all_within};
use crate::features::LineModel;

/// A window of consecutive working-set positions whose fitted line every
/// member lies within tolerance of.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Seed {
    /// First position in the working set view.
    pub start: usize,
    /// One past the last position.
    pub end: usize,
    /// Line fitted to the window.
    pub model: LineModel,
}

/// Reusable seed search state for one scan.
pub(crate) struct SeedSearch {
    window: Vec<Point2D>,
    /// Windows skipped because the fit was degenerate.
    pub degenerate_windows: usize,
}

impl SeedSearch {
    pub(crate) fn new(snum: usize) -> Self {
        Self {
            window: Vec::with_capacity(snum),
            degenerate_windows: 0,
        }
    }

    /// Find the first valid seed window starting at or after position `from`.
    ///
    /// Every window start in `from..=len - snum` is tried, so a working set
    /// of exactly `snum` points is still searched. Windows whose fit is
    /// degenerate are skipped. Gaps inside a window are not checked; only
    /// growth applies `gmax`.
    pub(crate) fn find<F: LineFitter + ?Sized>(
        &mut self,
        points: &[Point2D],
        working: &WorkingSet,
        from: usize,
        snum: usize,
        epsilon: f32,
        fitter: &F,
    ) -> Option<Seed> {
        let len = working.len();
        if snum == 0 || len < snum {
            return None;
        }

        for start in from..=(len - snum) {
            self.window.clear();
            self.window
                .extend((start..start + snum).map(|pos| working.point(points, pos)));

            let Some(model) = fitter.fit(&self.window) else {
                self.degenerate_windows += 1;
                log::trace!("degenerate fit window at position {}", start);
                continue;
            };

            if all_within(&self.window, &model, epsilon) {
                return Some(Seed {
                    start,
                    end: start + snum,
                    model,
                });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::line_fitting::{OrdinaryLeastSquares, TotalLeastSquares};

    fn search(points: &[Point2D], from: usize, snum: usize, epsilon: f32) -> (Option<Seed>, usize) {
        let working = WorkingSet::new(points.len());
        let mut search = SeedSearch::new(snum);
        let seed = search.find(
            points,
            &working,
            from,
            snum,
            epsilon,
            &OrdinaryLeastSquares,
        );
        (seed, search.degenerate_windows)
    }

    #[test]
    fn test_first_window_is_seed() {
        let points: Vec<Point2D> = (0..8).map(|i| Point2D::new(i as f32, 0.0)).collect();
        let (seed, _) = search(&points, 0, 6, 0.03);
        let seed = seed.unwrap();
        assert_eq!((seed.start, seed.end), (0, 6));
    }

    #[test]
    fn test_skips_noisy_prefix() {
        let mut points = vec![
            Point2D::new(0.0, 1.0),
            Point2D::new(0.5, -1.0),
            Point2D::new(1.0, 2.0),
        ];
        points.extend((0..4).map(|i| Point2D::new(2.0 + i as f32, 0.0)));

        let (seed, _) = search(&points, 0, 4, 0.01);

        assert_eq!(seed.unwrap().start, 3);
    }

    #[test]
    fn test_last_window_is_searched() {
        let mut points = vec![Point2D::new(0.0, 5.0)];
        points.extend((0..3).map(|i| Point2D::new(i as f32, 0.0)));

        let (seed, _) = search(&points, 0, 3, 0.01);

        let seed = seed.unwrap();
        assert_eq!((seed.start, seed.end), (1, 4));
    }

    #[test]
    fn test_respects_from() {
        let points: Vec<Point2D> = (0..8).map(|i| Point2D::new(i as f32, 0.0)).collect();
        let (seed, _) = search(&points, 2, 6, 0.03);
        assert_eq!(seed.unwrap().start, 2);

        let (seed, _) = search(&points, 3, 6, 0.03);
        assert!(seed.is_none());
    }

    #[test]
    fn test_too_few_points() {
        let points: Vec<Point2D> = (0..3).map(|i| Point2D::new(i as f32, 0.0)).collect();
        let (seed, _) = search(&points, 0, 4, 0.03);
        assert!(seed.is_none());
    }

    #[test]
    fn test_vertical_windows_counted_as_degenerate() {
        let points: Vec<Point2D> = (0..5).map(|i| Point2D::new(1.0, i as f32)).collect();

        let (seed, degenerate) = search(&points, 0, 3, 0.03);

        assert!(seed.is_none());
        assert_eq!(degenerate, 3);
    }

    #[test]
    fn test_vertical_seed_with_tls() {
        let points: Vec<Point2D> = (0..5).map(|i| Point2D::new(1.0, i as f32)).collect();
        let working = WorkingSet::new(points.len());
        let mut search = SeedSearch::new(3);

        let seed = search.find(&points, &working, 0, 3, 0.03, &TotalLeastSquares);

        assert_eq!(seed.unwrap().start, 0);
        assert_eq!(search.degenerate_windows, 0);
    }
}
