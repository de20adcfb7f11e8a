//! Objective functions used by the tests, the benchmarks and `run_hs`.
//!
//! - `ContinuousFixedX`: maximize -(x^2 + (y+1)^2) + 4 with x fixed at 0.5, optimum 3.75 at (0.5, -1)
//! - `Continuous`: same surface with both variables free, optimum 4 at (0, -1)
//! - `DiscreteXContinuousY`: same surface, x on the integer grid [-100, 100]
//! - `AllFixed`: every parameter fixed, nothing to search
//! - `Sphere`: n-dimensional sum of squares to minimize, optimum 0 at the origin

pub mod all_fixed;
pub mod continuous;
pub mod continuous_fixed_x;
pub mod discrete_x_continuous_y;
pub mod sphere;

pub use all_fixed::AllFixed;
pub use continuous::Continuous;
pub use continuous_fixed_x::ContinuousFixedX;
pub use discrete_x_continuous_y::DiscreteXContinuousY;
pub use sphere::Sphere;

/// -(x^2 + (y+1)^2) + 4
pub(crate) fn inverted_paraboloid(x: f64, y: f64) -> f64 {
	-(x.powi(2) + (y + 1.0).powi(2)) + 4.0
}
