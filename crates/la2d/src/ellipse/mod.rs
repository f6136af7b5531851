//! Rotated ellipses as closed-form parametric curves.
//!
//! Model
//! - Center `(cx, cy)`, semi-axes `rx`, `ry`, rotation `phi`.
//! - Position at parameter θ:
//!   `x(θ) = da·cosθ + db·sinθ + cx`, `y(θ) = dc·cosθ + dd·sinθ + cy` with
//!   `da = rx·cosφ`, `db = −ry·sinφ`, `dc = rx·sinφ`, `dd = ry·cosφ`.
//! - The coefficients are computed once in `new`; the struct is read-only
//!   afterwards.
//!
//! Extrema
//! - The tangent is vertical where `−da·sinθ + db·cosθ = 0`, i.e.
//!   `θ = atan2(db, da)` and the opposite angle; horizontal where
//!   `θ = atan2(dd, dc)` and its opposite.
//! - `extrema` reports those four points in a fixed order (two vertical
//!   tangents, then two horizontal), each `None` when it falls outside the
//!   requested arc. Callers index by slot, so the order is part of the
//!   contract.

mod arc;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

pub use arc::{normalize_angle, ArcSpan};

use crate::vec2::{self, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    phi: f64,
    sphi: f64,
    cphi: f64,
    da: f64,
    db: f64,
    dc: f64,
    dd: f64,
}

impl Ellipse {
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64, phi: f64) -> Self {
        let (sphi, cphi) = phi.sin_cos();
        Self {
            cx,
            cy,
            rx,
            ry,
            phi,
            sphi,
            cphi,
            da: rx * cphi,
            db: -ry * sphi,
            dc: rx * sphi,
            dd: ry * cphi,
        }
    }

    #[inline]
    pub fn cx(&self) -> f64 {
        self.cx
    }
    #[inline]
    pub fn cy(&self) -> f64 {
        self.cy
    }
    #[inline]
    pub fn rx(&self) -> f64 {
        self.rx
    }
    #[inline]
    pub fn ry(&self) -> f64 {
        self.ry
    }
    #[inline]
    pub fn phi(&self) -> f64 {
        self.phi
    }
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.cx, self.cy)
    }

    #[inline]
    pub fn x(&self, theta: f64) -> f64 {
        let (s, c) = theta.sin_cos();
        self.cphi * self.rx * c - self.sphi * self.ry * s + self.cx
    }

    #[inline]
    pub fn y(&self, theta: f64) -> f64 {
        let (s, c) = theta.sin_cos();
        self.sphi * self.rx * c + self.cphi * self.ry * s + self.cy
    }

    #[inline]
    pub fn point(&self, theta: f64) -> Vec2 {
        Vec2::new(self.x(theta), self.y(theta))
    }

    /// Derivative of `point` with respect to θ (not normalized).
    #[inline]
    pub fn tangent(&self, theta: f64) -> Vec2 {
        let (s, c) = theta.sin_cos();
        Vec2::new(-self.da * s + self.db * c, -self.dc * s + self.dd * c)
    }

    /// Tangent turned by −π/2; points outward for `rx, ry > 0`.
    #[inline]
    pub fn normal(&self, theta: f64) -> Vec2 {
        vec2::rotate(self.tangent(theta), -FRAC_PI_2)
    }

    /// Flat tangent parameters `[va1, va2, ha1, ha2]`, each in `[0, 2π)`.
    ///
    /// `va*` give vertical tangents, `ha*` horizontal ones; the second of each
    /// pair is the opposite side of the ellipse.
    pub fn flat_tangent_angles(&self) -> [f64; 4] {
        let (va1, va2) = opposite_pair(self.db.atan2(self.da));
        let (ha1, ha2) = opposite_pair(self.dd.atan2(self.dc));
        [va1, va2, ha1, ha2]
    }

    /// Axis-extremal points on the arc from `start` to `end`.
    ///
    /// Slots 0 and 1 are the vertical-tangent points, 2 and 3 the
    /// horizontal-tangent points; a slot is `None` when its angle is outside
    /// the arc. See `ArcSpan` for the sweep rules.
    pub fn extrema(&self, start: f64, end: f64, anticlockwise: bool) -> [Option<Vec2>; 4] {
        self.extrema_in(&ArcSpan::new(start, end, anticlockwise))
    }

    /// `extrema` for a prebuilt span.
    pub fn extrema_in(&self, span: &ArcSpan) -> [Option<Vec2>; 4] {
        self.flat_tangent_angles()
            .map(|theta| span.contains(theta).then(|| self.point(theta)))
    }
}

/// `atan2` result wrapped into `[0, 2π)` together with its opposite angle.
#[inline]
fn opposite_pair(a: f64) -> (f64, f64) {
    let a = if a < 0.0 { a + TAU } else { a };
    let b = if a >= PI { a - PI } else { a + PI };
    (a, b)
}
