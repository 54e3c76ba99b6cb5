use super::{OutputSink, PressureModel, TimeControl, TransportModel};
use crate::base::DiffusivePart;
use crate::problem::DecoupledProblem;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds a summary of one time step
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct StepSummary {
    /// Time step index (the first step is 1)
    pub step: usize,

    /// Time at the end of the step
    pub t: f64,

    /// Time increment
    pub dt: f64,

    /// Output has been requested
    pub output: bool,

    /// Restart file has been requested
    pub restart: bool,
}

/// Implements the sequential IMPES scheme
///
/// Each time step performs:
///
/// 1. the implicit pressure solve (velocity field);
/// 2. the CFL-restricted explicit saturation update, optionally with capillary diffusion;
/// 3. the output and restart decisions, as requested by the problem.
///
/// The driver only calls the problem; the problem never calls the driver.
pub struct Impes<'a> {
    /// Problem definition
    problem: &'a dyn DecoupledProblem,

    /// Time loop control
    control: &'a TimeControl,
}

impl<'a> Impes<'a> {
    /// Allocates a new instance
    pub fn new(problem: &'a dyn DecoupledProblem, control: &'a TimeControl) -> Self {
        Impes { problem, control }
    }

    /// Runs the time loop from t_ini to t_fin
    pub fn run(
        &self,
        pressure: &mut dyn PressureModel,
        transport: &mut dyn TransportModel,
        output: &mut dyn OutputSink,
    ) -> Result<Vec<StepSummary>, StrError> {
        self.control.check()?;
        let config = self.problem.config();
        let capillary_diffusion = config.diffusive_part == DiffusivePart::CapillaryDiffusion;
        let name = self.problem.name();

        transport.initialize(self.problem)?;
        let mut t = self.control.initial_time();
        let mut summaries = Vec::new();
        let mut step = 0;
        while !self.control.finished(t) {
            if step >= self.control.n_max_steps {
                return Err("maximum number of time steps reached");
            }

            // implicit pressure
            pressure.solve(self.problem, t)?;

            // explicit saturation
            let dt_cfl = config.cfl_factor * transport.max_time_step(self.problem)?;
            let dt = self.control.time_step(t, dt_cfl)?;
            transport.update(self.problem, t, dt, capillary_diffusion)?;
            t += dt;
            step += 1;

            // output
            let do_output = self.problem.should_write_output(step);
            if do_output {
                output.write_output(name, step, t)?;
            }
            let do_restart = self.problem.should_write_restart_file(step);
            if do_restart {
                output.write_restart(name, step, t)?;
            }
            tracing::debug!(step, t, dt, output = do_output, restart = do_restart, "time step");
            summaries.push(StepSummary {
                step,
                t,
                dt,
                output: do_output,
                restart: do_restart,
            });
        }
        tracing::info!(name, n_steps = step, t, "simulation finished");
        Ok(summaries)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
