//! Directed arcs on `[0, 2π)` and the containment test used by
//! `Ellipse::extrema`.

use std::f64::consts::TAU;

use crate::cfg::EPSILON;

/// Wrap an angle into `[0, 2π)` (truncating remainder, then shift negatives).
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle % TAU;
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

/// Set of parameter angles swept when going from a start angle to an end
/// angle in a given direction.
///
/// Bounds are normalized into `[0, 2π)`. A raw sweep of at least one turn
/// (within `EPSILON`) skips the comparison: forward covers the whole turn,
/// backward covers nothing. The same rule decides when start and end
/// normalize to the same angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArcSpan {
    /// `lo ≤ θ ≤ hi`.
    Between { lo: f64, hi: f64 },
    /// `θ ≤ lo` or `θ ≥ hi`: the arc wraps through zero.
    Wrapping { lo: f64, hi: f64 },
    Full,
    Empty,
}

impl ArcSpan {
    pub fn new(start: f64, end: f64, anticlockwise: bool) -> Self {
        let raw_delta = end - start;
        // `start + 2π` rarely normalizes back onto `start` exactly.
        if raw_delta.abs() >= TAU - EPSILON {
            return if raw_delta > 0.0 {
                ArcSpan::Full
            } else {
                ArcSpan::Empty
            };
        }
        let sa = normalize_angle(start);
        let ea = normalize_angle(end);
        if sa < ea {
            if anticlockwise {
                ArcSpan::Wrapping { lo: sa, hi: ea }
            } else {
                ArcSpan::Between { lo: sa, hi: ea }
            }
        } else if sa > ea {
            if anticlockwise {
                ArcSpan::Between { lo: ea, hi: sa }
            } else {
                ArcSpan::Wrapping { lo: ea, hi: sa }
            }
        } else if raw_delta > 0.0 {
            ArcSpan::Full
        } else {
            ArcSpan::Empty
        }
    }

    /// Whether `theta` (already in `[0, 2π)`) lies on the arc. Bounds are
    /// inclusive.
    #[inline]
    pub fn contains(&self, theta: f64) -> bool {
        match *self {
            ArcSpan::Between { lo, hi } => lo <= theta && theta <= hi,
            ArcSpan::Wrapping { lo, hi } => theta <= lo || theta >= hi,
            ArcSpan::Full => true,
            ArcSpan::Empty => false,
        }
    }
}
