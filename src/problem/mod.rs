//! Implements the problem definitions consumed by the decoupled two-phase solvers

mod traits;
mod tutorial;
mod validator;
pub use crate::problem::traits::*;
pub use crate::problem::tutorial::*;
pub use crate::problem::validator::*;
