//! Seed, grow, accept-or-reject loop over the working set.

use serde::{Deserialize, Serialize};

use super::growth::{accepts, grow};
use super::seed::SeedSearch;
use super::working_set::WorkingSet;
use crate::config::ExtractionParameters;
use crate::core::Point2D;
use crate::extraction::line_fitting::LineFitter;
use crate::features::LineSegment;

/// What to do when a seed grows into a segment that fails acceptance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionPolicy {
    /// Discard the first point of the working set and search again from the
    /// start.
    ///
    /// The discarded point is often unrelated to the failed seed, so valid
    /// points far from the problem area can be lost. Kept as the default
    /// for output compatibility with existing deployments.
    #[default]
    DropFirstPoint,

    /// Keep the working set intact and resume the seed search one window
    /// after the failed seed.
    ///
    /// After an accepted segment is removed, the search resumes at the first
    /// window that can span the removed gap. Earlier seeds whose growth was
    /// rejected are not revisited.
    AdvanceSeedWindow,
}

/// Why extraction stopped for a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// Fewer than `snum` points remained.
    InsufficientPoints,
    /// No remaining window met the fit tolerance.
    NoValidSeed,
}

/// Segments of one scan plus diagnostics about how they were found.
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction {
    /// Accepted segments in discovery order.
    pub segments: Vec<LineSegment>,
    /// Condition that ended the loop.
    pub stop_reason: StopReason,
    /// Seeds whose grown segment failed the `pmin`/`lmin` test.
    pub rejected_growths: usize,
    /// Points discarded by [`RejectionPolicy::DropFirstPoint`].
    pub dropped_points: usize,
    /// Seed windows skipped because their fit was degenerate.
    pub degenerate_windows: usize,
    /// Points left in the working set at termination.
    pub remaining_points: usize,
}

/// Extract line segments from one scan's ordered point sequence.
///
/// Uses the fitting strategy named in `params`.
///
/// # Example
/// ```
/// use rekha::ExtractionParameters;
/// use rekha::core::Point2D;
/// use rekha::extraction::extract_line_segments;
///
/// let points: Vec<Point2D> = (0..8).map(|i| Point2D::new(i as f32, 0.0)).collect();
/// let params = ExtractionParameters::default()
///     .with_snum(6)
///     .with_pmin(5)
///     .with_lmin(3.0)
///     .with_gmax(2.0);
///
/// let segments = extract_line_segments(&points, &params);
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].len(), 8);
/// ```
pub fn extract_line_segments(points: &[Point2D], params: &ExtractionParameters) -> Vec<LineSegment> {
    extract_line_segments_with(points, params, &params.fit_strategy).segments
}

/// Extract line segments with an explicit line fitter.
///
/// Each call owns its working set; nothing is shared between calls, so scans
/// can be processed in parallel with the same parameters.
pub fn extract_line_segments_with<F: LineFitter + ?Sized>(
    points: &[Point2D],
    params: &ExtractionParameters,
    fitter: &F,
) -> Extraction {
    let snum = params.snum;
    let mut working = WorkingSet::new(points.len());
    let mut search = SeedSearch::new(snum);
    let mut segments = Vec::new();
    let mut search_from = 0;
    let mut rejected_growths = 0;
    let mut dropped_points = 0;

    let stop_reason = loop {
        if working.len() < snum {
            break StopReason::InsufficientPoints;
        }

        let Some(seed) = search.find(
            points,
            &working,
            search_from,
            snum,
            params.epsilon,
            fitter,
        ) else {
            break StopReason::NoValidSeed;
        };

        let run = grow(points, &working, &seed, params.epsilon, params.gmax);

        if accepts(points, &working, &run, params.pmin, params.lmin) {
            log::trace!(
                "accepted segment at positions {}..{} ({} points)",
                run.start,
                run.end,
                run.len()
            );
            let run_start = run.start;
            let ids = working.claim(run);
            let member_points = ids.iter().map(|&i| points[i]).collect();
            // `accepts` never passes an empty run.
            segments.push(LineSegment::from_run(member_points, ids, seed.model));

            if params.rejection_policy == RejectionPolicy::AdvanceSeedWindow {
                search_from = run_start.saturating_sub(snum.saturating_sub(1));
            }
            continue;
        }

        rejected_growths += 1;
        log::trace!(
            "rejected growth at positions {}..{} ({} points)",
            run.start,
            run.end,
            run.len()
        );

        match params.rejection_policy {
            RejectionPolicy::DropFirstPoint => {
                if working.drop_first().is_some() {
                    dropped_points += 1;
                }
            }
            RejectionPolicy::AdvanceSeedWindow => search_from = seed.start + 1,
        }
    };

    log::debug!(
        "extracted {} segments from {} points: {:?}, {} rejected growths, {} dropped, {} degenerate windows",
        segments.len(),
        points.len(),
        stop_reason,
        rejected_growths,
        dropped_points,
        search.degenerate_windows
    );

    Extraction {
        segments,
        stop_reason,
        rejected_growths,
        dropped_points,
        degenerate_windows: search.degenerate_windows,
        remaining_points: working.len(),
    }
}
