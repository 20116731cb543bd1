//! Minimal geometry kernel: points, vectors and triangle meshes.
//!
//! The ETTV core only needs two things from geometry: the measured area of a
//! surface and its outward normal. Everything else is left to the host.

pub mod mesh;
pub mod point;
pub mod vector;

/// Geometric precision
pub const EPS: f64 = 1e-13;

/// Approximate float comparison using [`EPS`].
pub trait IsClose {
    fn is_close(&self, other: f64) -> bool;
}

impl IsClose for f64 {
    fn is_close(&self, other: f64) -> bool {
        (self - other).abs() < EPS
    }
}
