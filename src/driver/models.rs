use crate::problem::DecoupledProblem;
use crate::StrError;

/// Defines the interface of the (implicit) pressure model
///
/// The implementation discretizes the pressure equation, queries the problem
/// for the pressure-equation boundary conditions, sources, and reference
/// state, and reconstructs the velocity field used by the transport model.
pub trait PressureModel {
    /// Solves the pressure equation at time t and updates the velocity field
    fn solve(&mut self, problem: &dyn DecoupledProblem, t: f64) -> Result<(), StrError>;
}

/// Defines the interface of the (explicit) transport model
///
/// The implementation advances the saturation using the current velocity
/// field and the saturation-equation boundary conditions of the problem.
pub trait TransportModel {
    /// Sets the initial saturation from [crate::problem::BoundaryValues::initial_at]
    fn initialize(&mut self, problem: &dyn DecoupledProblem) -> Result<(), StrError>;

    /// Returns the largest stable time increment for the current velocity field (CFL = 1)
    ///
    /// Returns `f64::INFINITY` if nothing flows.
    fn max_time_step(&self, problem: &dyn DecoupledProblem) -> Result<f64, StrError>;

    /// Advances the saturation from t to t + dt
    ///
    /// `capillary_diffusion` indicates whether the capillary diffusion correction must be added.
    fn update(
        &mut self,
        problem: &dyn DecoupledProblem,
        t: f64,
        dt: f64,
        capillary_diffusion: bool,
    ) -> Result<(), StrError>;
}

/// Receives the requests to write results (the writing itself is up to the implementation)
pub trait OutputSink {
    /// Writes the current solution (e.g., a VTU file)
    fn write_output(&mut self, name: &str, step: usize, t: f64) -> Result<(), StrError>;

    /// Writes a restart (checkpoint) file
    fn write_restart(&mut self, name: &str, step: usize, t: f64) -> Result<(), StrError>;
}

/// Implements an output sink that discards all requests
pub struct NoOutput {}

impl OutputSink for NoOutput {
    fn write_output(&mut self, _name: &str, _step: usize, _t: f64) -> Result<(), StrError> {
        Ok(())
    }

    fn write_restart(&mut self, _name: &str, _step: usize, _t: f64) -> Result<(), StrError> {
        Ok(())
    }
}
