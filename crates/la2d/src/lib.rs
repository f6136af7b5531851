//! 2D affine geometry kernel.
//!
//! Building blocks for 2D graphics and layout code: vectors, 2×3 affine
//! matrices, axis-aligned rectangles, padding insets and parametric ellipses.
//!
//! Conventions
//! - Points are row vectors: a matrix maps `p ↦ p·L + T` (see `Mat3`).
//!   Composition reads left to right, `a * b` applies `a` first.
//! - Every mutating operation comes in an allocating form and an in-place
//!   form (`_mut`, `*=`, `_into`). In-place forms return the destination.
//! - Failures are `None`; nothing in the kernel panics. Non-finite inputs
//!   propagate NaN instead of being rejected.
//! - A single tolerance `EPSILON` drives every approximate comparison.

mod cfg;
pub mod ellipse;
pub mod mat3;
pub mod padding;
pub mod rect;
pub mod vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::EPSILON;
pub use ellipse::{ArcSpan, Ellipse};
pub use mat3::Mat3;
pub use padding::Padding;
pub use rect::Rect;
pub use vec2::Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::ellipse::{ArcSpan, Ellipse};
    pub use crate::mat3::Mat3;
    pub use crate::padding::Padding;
    pub use crate::rect::Rect;
    pub use crate::vec2::{self, Vec2};
    pub use crate::EPSILON;
}
