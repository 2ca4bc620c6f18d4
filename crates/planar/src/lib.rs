//! Pure 2D geometry primitives for graphics and UI code.
//!
//! The core is the `Line` algebra (normal bearing + offset, direction-aware);
//! `Segment`, `Rect`, `Circle` and `Range` are small value types around it.
//! All operations are pure and allocation-free; vectors and matrices come
//! from `nalgebra`.

pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Aff2, Circle, Line, Range, Rect, Segment};
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::scalar::{modulo, normal_vector};
    pub use crate::geom2::{
        approx_eq, approx_eq_vec, Aff2, Circle, Line, Range, Rect, Segment, EPSILON,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
