//! Makes available common structures needed to define and run a problem
//!
//! You may write `use pmimpes::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{BcKind, BoundaryFace, BoundaryTypes, Component, DiffusivePart, Equation, Face, Grid, ModelKind};
pub use crate::base::{Phase, PhaseValues, PrimaryVariables, ProblemConfig, ReferenceState, SampleGrids};
pub use crate::base::VelocityFormulation;
pub use crate::driver::{Impes, NoOutput, OutputSink, PressureModel, StepSummary, TimeControl, TransportModel};
pub use crate::problem::{BoundaryClassifier, BoundaryScan, BoundaryValues, DecoupledProblem};
pub use crate::problem::{ReferenceStateProvider, TutorialProblem, Validator};
pub use crate::StrError;
