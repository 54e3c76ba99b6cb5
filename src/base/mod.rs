//! Implements the base structures for a decoupled two-phase problem definition

mod boundary_types;
mod config;
mod enums;
mod geometry;
mod primary_variables;
mod sample_grids;
pub use crate::base::boundary_types::*;
pub use crate::base::config::*;
pub use crate::base::enums::*;
pub use crate::base::geometry::*;
pub use crate::base::primary_variables::*;
pub use crate::base::sample_grids::*;
