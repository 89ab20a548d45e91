//!
//! `primer-linear` fits straight lines and linear models by least squares.
//!
//! ## Current state
//!
//! `primer-linear` provides
//! - [`fit_line`], simple linear regression in closed form: center both columns on their means,
//!   divide the cross product by the sum of squares of the predictor, and place the intercept so
//!   that the line runs through the means,
//! - [`linregress`], the same fit reported together with the correlation coefficient, p-value and
//!   standard errors,
//! - [`LinearRegression`], ordinary least squares for any number of features, solved with a QR
//!   decomposition.
//!
//! ## Examples
//!
//! There is a walkthrough in the `examples/` directory. To run, use:
//!
//! ```bash
//! $ RUST_LOG=debug cargo run --example least_squares
//! ```

mod error;
mod linregress;
mod ols;
mod simple;

pub use error::*;
pub use linregress::*;
pub use ols::*;
pub use simple::*;
