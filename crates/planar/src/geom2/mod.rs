//! 2D primitives: directed lines, segments, rectangles, circles, ranges.
//!
//! Purpose
//! - Pure value types with inherent methods; no shared state, no panics for
//!   expected outcomes (no-result cases are `Option::None`).
//! - One tolerance policy for every predicate: `scalar::EPSILON` through
//!   `approx_eq`.
//!
//! Line model
//! - `Line` is stored as normal bearing + offset (degrees, `[0, 360)`), and
//!   is direction-sensitive. `approx` compares values, `same` compares point
//!   sets. See `line` for the conventions.
//!
//! Code cross-refs: `Line`, `Segment`, `Rect`, `Circle`, `Range`, `Aff2`.

mod affine;
mod circle;
mod line;
mod range;
mod rect;
pub mod scalar;
mod segment;

pub use affine::Affine2 as Aff2;
pub use circle::Circle;
pub use line::Line;
pub use range::Range;
pub use rect::Rect;
pub use scalar::{approx_eq, approx_eq_vec, EPSILON};
pub use segment::Segment;
