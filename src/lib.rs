//! Pmimpes -- Problem definitions for decoupled (IMPES) two-phase porous media flow
//!
//! A problem definition tells the external pressure and transport solvers
//! which boundary condition applies to each equation at a given position,
//! which values to impose, where the sources are, how to initialize the
//! saturation, and which reference state enters the material laws.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod driver;
pub mod prelude;
pub mod problem;
