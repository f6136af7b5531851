//! 2D vectors and the small set of free functions layout code needs.
//!
//! - `Vec2` is nalgebra's `Vector2<f64>`; arithmetic operators, `dot` and
//!   `norm` come from nalgebra.
//! - Functions come in pairs where the caller may want to reuse a buffer:
//!   `rotate(v, θ)` returns a new vector, `rotate_mut(&mut v, θ)` overwrites
//!   `v` and hands it back for chaining.
//! - Screen space is y-down, so a positive angle turns counter-clockwise in
//!   math axes and clockwise on screen.
//! - Degenerate inputs are not guarded: normalizing or measuring the angle of
//!   a zero vector yields NaN.

use nalgebra::Vector2;

use crate::cfg::EPSILON;

/// 2D column of `f64`; components are `x` and `y`.
pub type Vec2 = Vector2<f64>;

#[inline]
pub fn reverse(v: Vec2) -> Vec2 {
    -v
}

#[inline]
pub fn reverse_mut(v: &mut Vec2) -> &mut Vec2 {
    *v = reverse(*v);
    v
}

/// Quarter turn `(x, y) ↦ (−y, x)`: clockwise on a y-down screen.
#[inline]
pub fn orthogonal(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

#[inline]
pub fn orthogonal_mut(v: &mut Vec2) -> &mut Vec2 {
    *v = orthogonal(*v);
    v
}

/// Unit vector in the direction of `v`. NaN for the zero vector.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let len = (v.x * v.x + v.y * v.y).sqrt();
    Vec2::new(v.x / len, v.y / len)
}

#[inline]
pub fn normalize_mut(v: &mut Vec2) -> &mut Vec2 {
    *v = normalize(*v);
    v
}

/// Rotate by `theta` radians (counter-clockwise in math axes).
#[inline]
pub fn rotate(v: Vec2, theta: f64) -> Vec2 {
    let (s, c) = theta.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

#[inline]
pub fn rotate_mut(v: &mut Vec2, theta: f64) -> &mut Vec2 {
    *v = rotate(*v, theta);
    v
}

#[inline]
pub fn midpoint(p1: Vec2, p2: Vec2) -> Vec2 {
    Vec2::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0)
}

/// Midpoint written into `p1`.
#[inline]
pub fn midpoint_mut(p1: &mut Vec2, p2: Vec2) -> &mut Vec2 {
    *p1 = midpoint(*p1, p2);
    p1
}

/// Smallest unsigned angle between `u` and `v`, in `[0, π]`.
#[inline]
pub fn angle_between(u: Vec2, v: Vec2) -> f64 {
    let num = u.dot(&v);
    let den = u.norm() * v.norm();
    (num / den).acos()
}

/// Whether turning `v1` onto `v2` by the smallest angle goes clockwise on a
/// y-down screen.
///
/// `angle_between` is unsigned, so we rotate the normalized `v1` by it and
/// check whether that lands on the normalized `v2`.
pub fn is_clockwise_to(v1: Vec2, v2: Vec2) -> bool {
    let theta = angle_between(v1, v2);
    let turned = rotate(normalize(v1), theta);
    let target = normalize(v2);
    (turned.x - target.x).abs() < EPSILON && (turned.y - target.y).abs() < EPSILON
}

/// Intersection of the infinite lines `s1 + t·d1` and `s2 + u·d2`.
///
/// Returns `None` when the lines are parallel or coincident (`det == 0`).
pub fn intersection(s1: Vec2, d1: Vec2, s2: Vec2, d2: Vec2) -> Option<Vec2> {
    let (x1, y1) = (s1.x, s1.y);
    let (x2, y2) = (x1 + d1.x, y1 + d1.y);
    let (x3, y3) = (s2.x, s2.y);
    let (x4, y4) = (x3 + d2.x, y3 + d2.y);

    let det = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if det == 0.0 {
        return None;
    }
    let a = x1 * y2 - y1 * x2;
    let b = x3 * y4 - y3 * x4;
    let xn = a * (x3 - x4) - (x1 - x2) * b;
    let yn = a * (y3 - y4) - (y1 - y2) * b;
    Some(Vec2::new(xn / det, yn / det))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).norm() < EPSILON
    }

    #[test]
    fn reverse_negates_in_place() {
        assert_eq!(reverse(vector![3.0, 6.0]), vector![-3.0, -6.0]);
        let mut v = vector![-3.0, -5.0];
        reverse_mut(&mut v);
        assert_eq!(v, vector![3.0, 5.0]);
    }

    #[test]
    fn orthogonal_quarter_turns() {
        assert_eq!(orthogonal(vector![1.0, 1.0]), vector![-1.0, 1.0]);
        assert_eq!(orthogonal(vector![-1.0, 1.0]), vector![-1.0, -1.0]);
        assert_eq!(orthogonal(vector![-1.0, -1.0]), vector![1.0, -1.0]);
        let mut v = vector![1.0, -1.0];
        orthogonal_mut(&mut v);
        assert_eq!(v, vector![1.0, 1.0]);
    }

    #[test]
    fn normalize_unit_length_and_zero_is_nan() {
        assert!(close(normalize(vector![2.0, 2.0]), vector![SQRT_2 / 2.0, SQRT_2 / 2.0]));
        let mut v = vector![0.0, 5.0];
        normalize_mut(&mut v);
        assert!(close(v, vector![0.0, 1.0]));
        let z = normalize(Vec2::zeros());
        assert!(z.x.is_nan() && z.y.is_nan());
    }

    #[test]
    fn rotate_quarter_and_half_turn() {
        assert!(close(rotate(vector![3.0, 6.0], FRAC_PI_2), vector![-6.0, 3.0]));
        let mut v = vector![3.0, 6.0];
        rotate_mut(&mut v, PI);
        assert!(close(v, vector![-3.0, -6.0]));
    }

    #[test]
    fn midpoint_overwrites_first_operand() {
        let mut v = midpoint(vector![1.0, 5.0], vector![10.0, -1.0]);
        assert_eq!(v, vector![5.5, 2.0]);
        midpoint_mut(&mut v, vector![1.5, 1.0]);
        assert_eq!(v, vector![3.5, 1.5]);
    }

    #[test]
    fn angle_between_is_unsigned() {
        let x = vector![1.0, 0.0];
        let h = SQRT_2 / 2.0;
        assert!((angle_between(x, vector![h, h]) - FRAC_PI_4).abs() < EPSILON);
        assert!((angle_between(x, vector![-h, h]) - 3.0 * FRAC_PI_4).abs() < EPSILON);
        assert!((angle_between(x, vector![-h, -h]) - 3.0 * FRAC_PI_4).abs() < EPSILON);
        assert!(angle_between(x, Vec2::zeros()).is_nan());
    }

    #[test]
    fn clockwise_sign_convention() {
        assert!(is_clockwise_to(vector![1.0, 0.0], vector![0.0, 1.0]));
        assert!(!is_clockwise_to(vector![1.0, 0.0], vector![0.0, -1.0]));
        // Lengths do not matter, only directions.
        assert!(is_clockwise_to(vector![5.0, 0.0], vector![1.0, 0.5]));
    }

    #[test]
    fn intersection_of_crossing_lines() {
        let p = intersection(
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 10.0],
            vector![1.0, -1.0],
        )
        .unwrap();
        assert!(close(p, vector![5.0, 5.0]));
    }

    #[test]
    fn intersection_parallel_and_coincident_fail() {
        let d = vector![2.0, 1.0];
        assert!(intersection(vector![0.0, 0.0], d, vector![0.0, 3.0], d).is_none());
        assert!(intersection(vector![0.0, 0.0], d, vector![4.0, 2.0], -d).is_none());
    }
}
