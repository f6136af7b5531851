//! Four-sided insets used by `Rect::grow` and `Rect::shrink`.

/// Inset per edge. Equality is exact (no tolerance).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    #[inline]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same inset on every edge.
    #[inline]
    pub fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    #[inline]
    pub fn init(&mut self, left: f64, top: f64, right: f64, bottom: f64) -> &mut Self {
        *self = Self::new(left, top, right, bottom);
        self
    }

    /// All four insets exactly zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_and_copy() {
        let mut p = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            p,
            Padding {
                left: 1.0,
                top: 2.0,
                right: 3.0,
                bottom: 4.0
            }
        );
        let copy = p;
        p.init(10.0, 20.0, 30.0, 40.0);
        assert_eq!(copy, Padding::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(p, Padding::new(10.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn equality_is_exact_per_field() {
        let p1 = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(p1, Padding::new(1.0, 2.0, 3.0, 4.0));
        assert_ne!(p1, Padding::new(1.0, 2.0, 3.0, 5.0));
        assert_ne!(p1, Padding::new(1.0, 2.0, 4.0, 4.0));
        assert_ne!(p1, Padding::new(1.0, 3.0, 3.0, 4.0));
        assert_ne!(p1, Padding::new(2.0, 2.0, 3.0, 4.0));
        assert_ne!(p1, Padding::new(1.0, 2.0, 3.0, 4.0 + 1e-12));
    }

    #[test]
    fn empty_only_when_all_zero() {
        assert!(Padding::zero().is_empty());
        assert!(!Padding::new(0.0, 0.0, 0.0, 1.0).is_empty());
        assert!(!Padding::uniform(2.0).is_empty());
    }
}
