//! Tolerance shared by the whole kernel.
//!
//! Policy
//! - One fixed constant, never re-derived at call sites. Approximate matrix
//!   equality, the fast-path inverse guards and the clockwise test all read
//!   this value so results stay comparable across modules.

/// Absolute tolerance for approximate equality and near-zero checks.
pub const EPSILON: f64 = 1e-6;
