//! Dual-path inversion.
//!
//! - Fast path: both off-diagonal entries are within `EPSILON` of zero, so
//!   the matrix is a pure scale plus translation and each axis inverts on
//!   its own. Fails when a diagonal entry is within `EPSILON` of zero.
//! - General path: adjugate over determinant. Fails when the determinant is
//!   exactly zero or not finite.
//!
//! The fast path treats the off-diagonal residue as zero. When that residue
//! is not negligible next to `m11·m22` (tiny diagonal, or a large translation
//! picking it up), the general path is used instead, so both paths agree
//! within `EPSILON` wherever the fast one answers.

use nalgebra::{Matrix2, Vector2};

use super::Mat3;
use crate::cfg::EPSILON;

impl Mat3 {
    /// Inverse transform, or `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        if self.m[(0, 1)].abs() < EPSILON && self.m[(1, 0)].abs() < EPSILON {
            let inv = self.diagonal_inverse()?;
            if self.residue_negligible() {
                Some(inv)
            } else {
                self.general_inverse()
            }
        } else {
            self.general_inverse()
        }
    }

    /// Invert in place. On failure `self` is left untouched and `false` is
    /// returned.
    #[must_use]
    pub fn invert_mut(&mut self) -> bool {
        match self.inverse() {
            Some(inv) => {
                *self = inv;
                true
            }
            None => false,
        }
    }

    /// Whether dropping `m12`, `m21` moves the inverse by less than `EPSILON`.
    /// False for NaN translations.
    fn residue_negligible(&self) -> bool {
        let off = self.m[(0, 1)].abs() + self.m[(1, 0)].abs();
        let reach = 1.0 + self.t.x.abs() + self.t.y.abs();
        off * reach < EPSILON * (self.m[(0, 0)] * self.m[(1, 1)]).abs()
    }

    pub(crate) fn diagonal_inverse(&self) -> Option<Self> {
        let m11 = self.m[(0, 0)];
        let m22 = self.m[(1, 1)];
        // Written so NaN fails too; the product check mirrors the general path.
        if !(m11.abs() >= EPSILON && m22.abs() >= EPSILON) || !(m11 * m22).is_finite() {
            tracing::trace!(m11, m22, "singular scale matrix");
            return None;
        }
        let sx = 1.0 / m11;
        let sy = 1.0 / m22;
        Some(Self {
            m: Matrix2::new(sx, 0.0, 0.0, sy),
            t: Vector2::new(-self.t.x * sx, -self.t.y * sy),
        })
    }

    pub(crate) fn general_inverse(&self) -> Option<Self> {
        let (m11, m12) = (self.m[(0, 0)], self.m[(0, 1)]);
        let (m21, m22) = (self.m[(1, 0)], self.m[(1, 1)]);
        let det = m11 * m22 - m12 * m21;
        if det == 0.0 || !det.is_finite() {
            tracing::trace!(det, "singular matrix");
            return None;
        }
        let id = 1.0 / det;
        let (x0, y0) = (self.t.x, self.t.y);
        Some(Self::new(
            m22 * id,
            -m12 * id,
            -m21 * id,
            m11 * id,
            (m21 * y0 - m22 * x0) * id,
            (m12 * x0 - m11 * y0) * id,
        ))
    }
}
