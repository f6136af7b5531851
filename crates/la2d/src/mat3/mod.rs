//! 2×3 affine matrices (row-major, row-vector convention).
//!
//! Layout
//! - Six reals `[m11, m12, m21, m22, x0, y0]`: linear part
//!   `L = [[m11, m12], [m21, m22]]` and translation `T = (x0, y0)`.
//! - A point is a row vector: `p ↦ p·L + T`, so
//!   `x' = m11·x + m21·y + x0` and `y' = m12·x + m22·y + y0`.
//!
//! Composition
//! - `a.multiply(&b)` (also `a * b`) transforms by `a` first, then by `b`.
//!   The translation of `a` is carried through the linear part of `b`.
//! - `dest.apply(&mat)` puts `mat` in front (applied first);
//!   `dest.preapply(&mat)` puts it behind (applied last). Swapping the two
//!   silently produces mirrored composites, so callers must pick carefully.
//!
//! Inversion lives in `inverse.rs` (fast diagonal path plus general adjugate).

mod inverse;

use std::ops::{Mul, MulAssign};

use nalgebra::{Matrix2, Vector2};

use crate::cfg::EPSILON;
use crate::vec2::Vec2;

/// 2D affine map `p ↦ p·m + t` on row vectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    /// Linear part, row-major: `m[(0, 1)]` is `m12`, `m[(1, 0)]` is `m21`.
    pub m: Matrix2<f64>,
    /// Translation `(x0, y0)`.
    pub t: Vector2<f64>,
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat3 {
    #[inline]
    pub fn new(m11: f64, m12: f64, m21: f64, m22: f64, x0: f64, y0: f64) -> Self {
        Self {
            m: Matrix2::new(m11, m12, m21, m22),
            t: Vector2::new(x0, y0),
        }
    }

    /// All six entries zero. Not a valid transform until written.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            m: Matrix2::zeros(),
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    /// From the flat layout `[m11, m12, m21, m22, x0, y0]`.
    #[inline]
    pub fn from_array(a: [f64; 6]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4], a[5])
    }

    /// Flat layout `[m11, m12, m21, m22, x0, y0]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 6] {
        [
            self.m[(0, 0)],
            self.m[(0, 1)],
            self.m[(1, 0)],
            self.m[(1, 1)],
            self.t.x,
            self.t.y,
        ]
    }

    /// Overwrite all six entries.
    #[inline]
    pub fn init(
        &mut self,
        m11: f64,
        m12: f64,
        m21: f64,
        m22: f64,
        x0: f64,
        y0: f64,
    ) -> &mut Self {
        *self = Self::new(m11, m12, m21, m22, x0, y0);
        self
    }

    #[inline]
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m.determinant()
    }

    /// Componentwise equality within `EPSILON`.
    ///
    /// Not transitive near the tolerance boundary.
    pub fn approx_eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
            || self
                .to_array()
                .iter()
                .zip(other.to_array().iter())
                .all(|(a, b)| (a - b).abs() < EPSILON)
    }

    /// `self` first, then `b`: `L = Lₐ·L_b`, `T = Tₐ·L_b + T_b`.
    #[inline]
    pub fn multiply(&self, b: &Self) -> Self {
        Self {
            m: self.m * b.m,
            t: b.m.tr_mul(&self.t) + b.t,
        }
    }

    /// Same as `multiply`, written into `dest`.
    #[inline]
    pub fn multiply_into<'d>(&self, b: &Self, dest: &'d mut Self) -> &'d mut Self {
        *dest = self.multiply(b);
        dest
    }

    /// Same as `multiply`, overwriting `self`.
    #[inline]
    pub fn multiply_assign(&mut self, b: &Self) -> &mut Self {
        *self = self.multiply(b);
        self
    }

    /// Prepend `mat`: afterwards points go through `mat` first, then the old
    /// contents of `self`.
    #[inline]
    pub fn apply(&mut self, mat: &Self) -> &mut Self {
        *self = mat.multiply(self);
        self
    }

    /// Append `mat`: afterwards points go through the old contents of
    /// `self` first, then `mat`.
    #[inline]
    pub fn preapply(&mut self, mat: &Self) -> &mut Self {
        *self = self.multiply(mat);
        self
    }

    #[inline]
    pub fn transform_vec2(&self, v: Vec2) -> Vec2 {
        self.m.tr_mul(&v) + self.t
    }

    /// Transform `v` in place.
    #[inline]
    pub fn transform_vec2_mut<'v>(&self, v: &'v mut Vec2) -> &'v mut Vec2 {
        *v = self.transform_vec2(*v);
        v
    }

    /// Transform every vector of `vs` in place.
    pub fn transform_vec2s(&self, vs: &mut [Vec2]) {
        for v in vs.iter_mut() {
            self.transform_vec2_mut(v);
        }
    }

    #[inline]
    pub fn new_translation(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    #[inline]
    pub fn new_scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `angle` radians: `(1, 0) ↦ (cos, sin)`.
    ///
    /// Counter-clockwise in math axes, clockwise on a y-down screen.
    #[inline]
    pub fn new_rotation(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    /// Skew by `angle_x` along x and `angle_y` along y:
    /// `x' = x + tan(angle_x)·y`, `y' = y + tan(angle_y)·x`.
    #[inline]
    pub fn new_skew(angle_x: f64, angle_y: f64) -> Self {
        Self::new(1.0, angle_y.tan(), angle_x.tan(), 1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn set_translation(&mut self, x: f64, y: f64) -> &mut Self {
        *self = Self::new_translation(x, y);
        self
    }

    #[inline]
    pub fn set_scaling(&mut self, sx: f64, sy: f64) -> &mut Self {
        *self = Self::new_scaling(sx, sy);
        self
    }

    #[inline]
    pub fn set_rotation(&mut self, angle: f64) -> &mut Self {
        *self = Self::new_rotation(angle);
        self
    }

    #[inline]
    pub fn set_skew(&mut self, angle_x: f64, angle_y: f64) -> &mut Self {
        *self = Self::new_skew(angle_x, angle_y);
        self
    }

    /// Shift the translation. Equivalent to preapplying a translation.
    #[inline]
    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.t.x += x;
        self.t.y += y;
        self
    }

    /// Scale the output axes. Equivalent to preapplying a scaling, without
    /// the full multiply.
    #[inline]
    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.m[(0, 0)] *= sx;
        self.m[(1, 0)] *= sx;
        self.t.x *= sx;

        self.m[(0, 1)] *= sy;
        self.m[(1, 1)] *= sy;
        self.t.y *= sy;
        self
    }
}

impl Mul for Mat3 {
    type Output = Mat3;
    #[inline]
    fn mul(self, rhs: Mat3) -> Mat3 {
        self.multiply(&rhs)
    }
}

impl Mul<&Mat3> for &Mat3 {
    type Output = Mat3;
    #[inline]
    fn mul(self, rhs: &Mat3) -> Mat3 {
        self.multiply(rhs)
    }
}

impl MulAssign for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Mat3) {
        *self = self.multiply(&rhs);
    }
}
