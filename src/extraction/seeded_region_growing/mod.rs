//! Seeded-region-growing (SRG) line extraction.
//!
//! Decomposes the ordered point sequence of one scan into disjoint runs of
//! consecutive, locally collinear points. Repeated until the working set is
//! exhausted:
//!
//! 1. **Seed search**: slide a window of `snum` points over the working set
//!    and take the first window whose fitted line all its points lie within
//!    `epsilon` of. Windows with a degenerate fit are skipped.
//!
//! 2. **Growth**: extend the seed forward, then backward, one neighbour at a
//!    time while the neighbour is within `epsilon` of the seed line and
//!    within `gmax` of the segment end it attaches to.
//!
//! 3. **Acceptance**: keep the grown run if it has at least `pmin` points
//!    and its endpoints are at least `lmin` apart. Accepted points leave the
//!    working set; a rejection is handled per [`RejectionPolicy`].
//!
//! Extraction stops when fewer than `snum` points remain or no valid seed
//! exists. Requirements:
//! - Points must be ordered (sequential around scan)
//! - Invalid ranges must already be removed

mod algorithm;
mod growth;
mod seed;
mod working_set;

// Re-export public API
pub use algorithm::{
    Extraction, RejectionPolicy, StopReason, extract_line_segments, extract_line_segments_with,
};
