//! Implements the sequential (IMPES) coupling of the pressure and transport models

mod impes;
mod models;
mod time_control;
pub use crate::driver::impes::*;
pub use crate::driver::models::*;
pub use crate::driver::time_control::*;
