use super::{BoundaryClassifier, BoundaryValues, DecoupledProblem, ReferenceStateProvider, Validator};
use crate::base::{BoundaryTypes, Equation, PhaseValues, PrimaryVariables, ProblemConfig};
use crate::StrError;

/// Implements the decoupled tutorial problem
///
/// Oil (non-wetting) is extracted through the right side of an initially
/// oil-filled domain while water (wetting) enters through the left side:
///
/// ```text
///            no flow
///      +--------------------+
///  p,S |                    | q_n = 3e-2 kg/(m²·s)
///  set |                    | (outflow)
///      +--------------------+
///            no flow
/// ```
///
/// * Left side (`x < x_min + eps`): prescribed pressure and saturation for both equations
/// * All other sides: prescribed flux for both equations; zero except on the right side
/// * No sources; zero initial saturation
/// * Isothermal at 10 °C; constant reference pressure for the material laws
pub struct TutorialProblem<'a> {
    /// Holds configuration parameters
    config: &'a ProblemConfig,
}

impl<'a> TutorialProblem<'a> {
    /// Allocates a new instance
    ///
    /// The configuration is checked by [Validator::check_config].
    pub fn new(config: &'a ProblemConfig) -> Result<Self, StrError> {
        Validator::check_config(config)?;
        tracing::info!(
            name = config.name.as_str(),
            eps = config.eps,
            ncell = config.grid.ncell(),
            "problem allocated"
        );
        Ok(TutorialProblem { config })
    }

    /// Indicates whether the position belongs to the inflow (min-x) side
    #[inline]
    fn is_inflow(&self, x: &[f64]) -> bool {
        x[0] < self.config.grid.bbox_min()[0] + self.config.eps
    }

    /// Indicates whether the position belongs to the outflow (max-x) side
    #[inline]
    fn is_outflow(&self, x: &[f64]) -> bool {
        x[0] > self.config.grid.bbox_max()[0] - self.config.eps
    }
}

impl<'a> BoundaryClassifier for TutorialProblem<'a> {
    fn boundary_types_at(&self, x: &[f64]) -> BoundaryTypes {
        let mut bc = BoundaryTypes::new();
        if self.is_inflow(x) {
            bc.set_dirichlet(Equation::Pressure);
            bc.set_dirichlet(Equation::Saturation);
        } else {
            bc.set_neumann(Equation::Pressure);
            bc.set_neumann(Equation::Saturation);
        }
        bc
    }
}

impl<'a> BoundaryValues for TutorialProblem<'a> {
    fn dirichlet_at(&self, _x: &[f64]) -> PrimaryVariables {
        PrimaryVariables {
            pressure: self.config.dirichlet_pressure,
            saturation: self.config.dirichlet_saturation,
        }
    }

    fn neumann_at(&self, x: &[f64]) -> PhaseValues {
        let mut values = PhaseValues::zero();
        if self.is_outflow(x) {
            values.non_wetting = self.config.outlet_flux_non_wetting;
        }
        values
    }

    fn source_at(&self, _x: &[f64]) -> PhaseValues {
        PhaseValues::zero()
    }

    fn initial_at(&self, _x: &[f64]) -> PrimaryVariables {
        PrimaryVariables::zero()
    }
}

impl<'a> ReferenceStateProvider for TutorialProblem<'a> {
    fn temperature_at(&self, _x: &[f64]) -> f64 {
        self.config.temperature
    }

    fn reference_pressure_at(&self, _x: &[f64]) -> f64 {
        self.config.reference_pressure
    }
}

impl<'a> DecoupledProblem for TutorialProblem<'a> {
    fn config(&self) -> &ProblemConfig {
        self.config
    }

    fn should_write_restart_file(&self, step: usize) -> bool {
        self.config.write_restart && self.should_write_output(step)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::TutorialProblem;
    use crate::base::{BcKind, Equation, Face, PhaseValues, PrimaryVariables, ProblemConfig, SampleGrids};
    use crate::problem::{BoundaryClassifier, BoundaryValues, DecoupledProblem, ReferenceStateProvider};
    use crate::StrError;

    #[test]
    fn new_captures_errors() {
        let mut config = ProblemConfig::new();
        config.eps = 2.0; // half spacing is 1.5
        assert_eq!(
            TutorialProblem::new(&config).err(),
            Some("eps must be smaller than half the minimum grid spacing")
        );
    }

    #[test]
    fn name_and_accessors_work() -> Result<(), StrError> {
        let config = ProblemConfig::new();
        let problem = TutorialProblem::new(&config)?;
        assert_eq!(problem.name(), "tutorial_decoupled");
        assert_eq!(problem.grid().bbox_max(), &[300.0, 60.0]);
        assert_eq!(problem.eps(), 1e-6);
        Ok(())
    }

    #[test]
    fn inflow_side_is_dirichlet() -> Result<(), StrError> {
        let config = ProblemConfig::new();
        let problem = TutorialProblem::new(&config)?;
        for x in [[0.0, 0.0], [0.0, 30.0], [0.0, 60.0], [5e-7, 30.0]] {
            let bc = problem.boundary_types_at(&x);
            assert_eq!(bc.kind(Equation::Pressure)?, BcKind::PrescribedValue);
            assert_eq!(bc.kind(Equation::Saturation)?, BcKind::PrescribedValue);
            assert_eq!(problem.dirichlet_at(&x), PrimaryVariables::new(2e5, 1.0));
        }
        Ok(())
    }

    #[test]
    fn other_sides_are_neumann() -> Result<(), StrError> {
        let config = ProblemConfig::new();
        let problem = TutorialProblem::new(&config)?;

        // bottom and top: no flow
        for x in [[1.5, 0.0], [150.0, 0.0], [1.5, 60.0], [298.5, 60.0], [1e-6, 0.0]] {
            let bc = problem.boundary_types_at(&x);
            assert_eq!(bc.kind(Equation::Pressure)?, BcKind::PrescribedFlux);
            assert_eq!(bc.kind(Equation::Saturation)?, BcKind::PrescribedFlux);
            assert_eq!(problem.neumann_at(&x), PhaseValues::zero());
        }

        // right: outflow of the non-wetting phase
        for x in [[300.0, 0.0], [300.0, 30.0], [300.0 - 5e-7, 60.0]] {
            let bc = problem.boundary_types_at(&x);
            assert!(bc.is_neumann(Equation::Pressure));
            assert!(bc.is_neumann(Equation::Saturation));
            let flux = problem.neumann_at(&x);
            assert_eq!(flux.wetting, 0.0);
            assert_eq!(flux.non_wetting, 3e-2);
        }
        Ok(())
    }

    #[test]
    fn all_boundary_faces_are_classified() -> Result<(), StrError> {
        let config = ProblemConfig::new();
        let problem = TutorialProblem::new(&config)?;
        for face in config.grid.boundary_faces() {
            let bc = problem.boundary_types_at(&face.center);
            bc.check()?;
            let expected = if face.face == Face::Xmin {
                BcKind::PrescribedValue
            } else {
                BcKind::PrescribedFlux
            };
            assert_eq!(bc.kind(Equation::Pressure)?, expected);
            assert_eq!(bc.kind(Equation::Saturation)?, expected);
        }
        Ok(())
    }

    #[test]
    fn sources_initial_and_reference_state_are_constant() -> Result<(), StrError> {
        let config = ProblemConfig::new();
        let problem = TutorialProblem::new(&config)?;
        let points = [[0.0, 0.0], [1.5, 30.0], [150.0, 30.0], [300.0, 60.0]];
        for x in &points {
            assert_eq!(problem.source_at(x), PhaseValues::zero());
            let initial = problem.initial_at(x);
            assert_eq!(initial.saturation, 0.0);
            assert_eq!(initial.pressure, 0.0);
            assert_eq!(problem.temperature_at(x), 283.15);
            assert_eq!(problem.reference_pressure_at(x), 2e5);
            let state = problem.reference_state_at(x);
            assert_eq!(state.temperature, 283.15);
            assert_eq!(state.pressure, 2e5);
        }
        for p in &points {
            for q in &points {
                assert_eq!(problem.temperature_at(p), problem.temperature_at(q));
                assert_eq!(problem.reference_pressure_at(p), problem.reference_pressure_at(q));
            }
        }
        Ok(())
    }

    #[test]
    fn repeated_calls_are_bit_identical() -> Result<(), StrError> {
        let config = ProblemConfig::new();
        let problem = TutorialProblem::new(&config)?;
        for face in config.grid.boundary_faces() {
            let x = &face.center;
            let (bc, d, n) = (problem.boundary_types_at(x), problem.dirichlet_at(x), problem.neumann_at(x));
            for _ in 0..3 {
                assert_eq!(problem.boundary_types_at(x), bc);
                assert_eq!(problem.dirichlet_at(x).pressure.to_bits(), d.pressure.to_bits());
                assert_eq!(problem.dirichlet_at(x).saturation.to_bits(), d.saturation.to_bits());
                assert_eq!(problem.neumann_at(x).non_wetting.to_bits(), n.non_wetting.to_bits());
                assert_eq!(problem.neumann_at(x).wetting.to_bits(), n.wetting.to_bits());
            }
        }
        Ok(())
    }

    #[test]
    fn decreasing_eps_keeps_interior_points_off_the_boundary() -> Result<(), StrError> {
        let mut config = ProblemConfig::new();
        let centers = config.grid.cell_centers();
        for eps in [1.0, 1e-2, 1e-6, 1e-10] {
            config.eps = eps;
            let problem = TutorialProblem::new(&config)?;
            for x in &centers {
                // interior points never see the inflow classification nor the outflow flux
                assert!(problem.boundary_types_at(x).is_neumann(Equation::Pressure));
                assert_eq!(problem.neumann_at(x), PhaseValues::zero());
            }
        }
        Ok(())
    }

    #[test]
    fn output_toggles_work() -> Result<(), StrError> {
        let mut config = ProblemConfig::new();
        let problem = TutorialProblem::new(&config)?;
        assert!(!problem.should_write_output(0));
        assert!(problem.should_write_output(1));
        assert!(problem.should_write_output(2));
        assert!(!problem.should_write_restart_file(1));

        config.output_interval = 3;
        config.write_restart = true;
        let problem = TutorialProblem::new(&config)?;
        assert!(!problem.should_write_output(1));
        assert!(problem.should_write_output(3));
        assert!(problem.should_write_restart_file(6));
        assert!(!problem.should_write_restart_file(7));

        config.output_interval = 0;
        let problem = TutorialProblem::new(&config)?;
        assert!(!problem.should_write_output(3));
        Ok(())
    }

    #[test]
    fn works_with_other_grids() -> Result<(), StrError> {
        let mut config = ProblemConfig::new();
        config.set_grid(SampleGrids::column(10.0, 5))?;
        let problem = TutorialProblem::new(&config)?;
        assert!(problem.boundary_types_at(&[0.0]).is_dirichlet(Equation::Saturation));
        assert!(problem.boundary_types_at(&[10.0]).is_neumann(Equation::Saturation));
        assert_eq!(problem.neumann_at(&[10.0]).non_wetting, 3e-2);
        Ok(())
    }
}
