use crate::base::{BoundaryTypes, Grid, PhaseValues, PrimaryVariables, ProblemConfig, ReferenceState};

/// Classifies the boundary conditions at a position
///
/// Implementations must be pure: the same position always yields the same classification.
pub trait BoundaryClassifier: Send + Sync {
    /// Returns the kind of boundary condition of each equation at a boundary position
    ///
    /// Every equation of the returned value must be classified.
    fn boundary_types_at(&self, x: &[f64]) -> BoundaryTypes;
}

/// Provides the boundary, source, and initial values at a position
pub trait BoundaryValues: Send + Sync {
    /// Returns the prescribed pressure (Pa) and saturation (-) at a Dirichlet boundary position
    fn dirichlet_at(&self, x: &[f64]) -> PrimaryVariables;

    /// Returns the prescribed mass flux of each phase (kg/(m²·s)) at a Neumann boundary position
    ///
    /// Positive values denote outflow.
    fn neumann_at(&self, x: &[f64]) -> PhaseValues;

    /// Returns the mass source (positive) or sink (negative) of each phase (kg/(m³·s))
    fn source_at(&self, x: &[f64]) -> PhaseValues;

    /// Returns the initial values
    ///
    /// Only the saturation is required by the transport model; the full vector is returned anyway.
    fn initial_at(&self, x: &[f64]) -> PrimaryVariables;
}

/// Provides the reference thermodynamic state entering the material laws
pub trait ReferenceStateProvider: Send + Sync {
    /// Returns the temperature in K
    fn temperature_at(&self, x: &[f64]) -> f64;

    /// Returns the pressure in Pa used to evaluate density and viscosity
    ///
    /// This pressure is not the unknown of the pressure equation.
    fn reference_pressure_at(&self, x: &[f64]) -> f64;

    /// Returns temperature and reference pressure together
    fn reference_state_at(&self, x: &[f64]) -> ReferenceState {
        ReferenceState {
            temperature: self.temperature_at(x),
            pressure: self.reference_pressure_at(x),
        }
    }
}

/// Defines the capabilities required by a decoupled two-phase solver
pub trait DecoupledProblem: BoundaryClassifier + BoundaryValues + ReferenceStateProvider {
    /// Returns the configuration
    fn config(&self) -> &ProblemConfig;

    /// Returns the problem name (prefix of generated files)
    fn name(&self) -> &str {
        &self.config().name
    }

    /// Returns the grid descriptor
    fn grid(&self) -> &Grid {
        &self.config().grid
    }

    /// Returns the tolerance for comparing coordinates against the bounding box
    fn eps(&self) -> f64 {
        self.config().eps
    }

    /// Indicates whether the solution should be written after time step `step`
    fn should_write_output(&self, step: usize) -> bool {
        let interval = self.config().output_interval;
        step > 0 && interval > 0 && step % interval == 0
    }

    /// Indicates whether a restart file should be written after time step `step`
    fn should_write_restart_file(&self, _step: usize) -> bool {
        false
    }
}
