//! Direct least-squares ellipse fitting and its numeric kernels.
//!
//! Purpose
//! - `pinv`: Moore–Penrose pseudo-inverse via SVD with explicit
//!   singular-value thresholding, so near-singular scatter matrices degrade
//!   instead of blowing up.
//! - `eigen`: real eigenpairs of a general 3x3 matrix in a deterministic
//!   order (the fit's solution-selection rule is index-based).
//! - `ellipse`: the constrained conic fit and the conic → geometry
//!   conversion.

pub mod eigen;
pub mod ellipse;
pub mod pinv;

pub use ellipse::{fit_ellipse, ConicCoeffs, EllipseParams, FitError};
pub use pinv::pinv;
