//! Error types for stroke normalization and template matching.

use thiserror::Error;

/// Errors surfaced by the normalization pipeline and the distance metrics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognizerError {
    /// The stroke cannot be normalized: it has fewer than 2 points, zero
    /// path length, or it collapses to a zero-width or zero-height
    /// bounding box once rotated.
    #[error("degenerate stroke: a gesture needs at least 2 distinct points and a nonzero extent")]
    DegenerateStroke,

    /// Candidate and template resample lengths disagree at the metric
    /// boundary. Unreachable as long as every path goes through the
    /// normalization pipeline; treat as a programming error rather than a
    /// condition to recover from.
    #[error("dimension mismatch: candidate has {candidate} points, template has {template}")]
    InvalidDimension { candidate: usize, template: usize },
}
