//! Axis-aligned rectangles.
//!
//! Conventions
//! - `(x, y)` is the top-left corner, `width`/`height` the extent.
//! - A rect is empty when `width <= 0` or `height <= 0`. Nothing forces the
//!   extent to be non-negative; every operation accepts negative extents.
//! - Equality is exact (`PartialEq`), with no tolerance.
//! - `transform` never returns the rotated quadrilateral, only its bounding
//!   box. The four corner temporaries live on the stack, so the type is
//!   reentrant and `Send + Sync`.

use crate::mat3::Mat3;
use crate::padding::Padding;
use crate::vec2::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    #[inline]
    pub fn init(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        *self = Self::new(x, y, width, height);
        self
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Bounding box of the four corners mapped through `mat`.
    pub fn transform(&self, mat: &Mat3) -> Self {
        let mut corners = [
            Vec2::new(self.x, self.y),
            Vec2::new(self.right(), self.y),
            Vec2::new(self.right(), self.bottom()),
            Vec2::new(self.x, self.bottom()),
        ];
        mat.transform_vec2s(&mut corners);

        let [first, rest @ ..] = corners;
        let (mut l, mut t, mut r, mut b) = (first.x, first.y, first.x, first.y);
        for p in &rest {
            l = min_nan(l, p.x);
            t = min_nan(t, p.y);
            r = max_nan(r, p.x);
            b = max_nan(b, p.y);
        }
        Self::new(l, t, r - l, b - t)
    }

    /// Transform in place.
    #[inline]
    pub fn transform_mut(&mut self, mat: &Mat3) -> &mut Self {
        *self = self.transform(mat);
        self
    }

    /// Transform into `dest`. Without a matrix the transform is the identity
    /// and `dest` receives a copy of `self`.
    pub fn transform_into<'d>(&self, mat: Option<&Mat3>, dest: &'d mut Self) -> &'d mut Self {
        *dest = match mat {
            Some(mat) => self.transform(mat),
            None => *self,
        };
        dest
    }

    /// Smallest rect covering both. An empty operand is ignored.
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() {
            return *self;
        }
        if self.is_empty() {
            return *other;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    #[inline]
    pub fn union_mut(&mut self, other: &Self) -> &mut Self {
        *self = self.union(other);
        self
    }

    /// Overlap of both rects. Width and height clamp at zero when disjoint.
    pub fn intersection(&self, other: &Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Self::new(
            x,
            y,
            (self.right().min(other.right()) - x).max(0.0),
            (self.bottom().min(other.bottom()) - y).max(0.0),
        )
    }

    #[inline]
    pub fn intersection_mut(&mut self, other: &Self) -> &mut Self {
        *self = self.intersection(other);
        self
    }

    /// Whether all four edges of `self` lie within `outer` (closed).
    #[inline]
    pub fn is_contained_in(&self, outer: &Self) -> bool {
        self.x >= outer.x
            && self.y >= outer.y
            && self.right() <= outer.right()
            && self.bottom() <= outer.bottom()
    }

    /// Closed-interval point test.
    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.x <= x && x <= self.right() && self.y <= y && y <= self.bottom()
    }

    #[inline]
    pub fn contains_vec2(&self, p: Vec2) -> bool {
        self.contains_point(p.x, p.y)
    }

    /// Grow outward to integer bounds: floor the origin, ceil the far edge.
    pub fn round_out(&self) -> Self {
        let x = self.x.floor();
        let y = self.y.floor();
        Self::new(x, y, self.right().ceil() - x, self.bottom().ceil() - y)
    }

    #[inline]
    pub fn round_out_mut(&mut self) -> &mut Self {
        *self = self.round_out();
        self
    }

    /// Shrink inward to integer bounds: ceil the origin, floor the far edge.
    /// Thin rects can come out with a negative extent.
    pub fn round_in(&self) -> Self {
        let x = self.x.ceil();
        let y = self.y.ceil();
        Self::new(x, y, self.right().floor() - x, self.bottom().floor() - y)
    }

    #[inline]
    pub fn round_in_mut(&mut self) -> &mut Self {
        *self = self.round_in();
        self
    }

    /// Push every edge outward by the matching inset.
    pub fn grow(&self, pad: &Padding) -> Self {
        Self::new(
            self.x - pad.left,
            self.y - pad.top,
            self.width + pad.left + pad.right,
            self.height + pad.top + pad.bottom,
        )
    }

    #[inline]
    pub fn grow_mut(&mut self, pad: &Padding) -> &mut Self {
        *self = self.grow(pad);
        self
    }

    /// Pull every edge inward by the matching inset.
    pub fn shrink(&self, pad: &Padding) -> Self {
        Self::new(
            self.x + pad.left,
            self.y + pad.top,
            self.width - pad.left - pad.right,
            self.height - pad.top - pad.bottom,
        )
    }

    #[inline]
    pub fn shrink_mut(&mut self, pad: &Padding) -> &mut Self {
        *self = self.shrink(pad);
        self
    }
}

// `f64::min`/`max` drop a NaN operand; these keep it.
#[inline]
fn min_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

#[inline]
fn max_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
