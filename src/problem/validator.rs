use super::DecoupledProblem;
use crate::base::{BcKind, Equation, ProblemConfig};
use crate::StrError;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the number of boundary faces of each kind found by a boundary scan
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct BoundaryScan {
    /// Total number of boundary faces
    pub n_face: usize,

    /// Faces with prescribed pressure
    pub n_pressure_dirichlet: usize,

    /// Faces with prescribed flux in the pressure equation
    pub n_pressure_neumann: usize,

    /// Faces with prescribed saturation
    pub n_saturation_dirichlet: usize,

    /// Faces with prescribed flux in the saturation equation
    pub n_saturation_neumann: usize,

    /// Neumann faces with a non-zero flux in any phase
    pub n_flux_nonzero: usize,
}

/// Checks the configuration and the boundary classification of a problem
pub struct Validator {}

/// Logs the error before returning it
fn reject<T>(message: StrError) -> Result<T, StrError> {
    tracing::warn!("{}", message);
    Err(message)
}

impl Validator {
    /// Checks the configuration data
    ///
    /// The tolerance `eps` must satisfy:
    ///
    /// ```text
    /// 8 ε max|x| ≤ eps < h_min / 2
    /// ```
    ///
    /// where `ε` is the machine epsilon, `max|x|` is the largest absolute
    /// coordinate of the bounding box, and `h_min` is the smallest grid spacing.
    /// Otherwise, boundary positions may be missed (left unclassified) or
    /// interior positions may be taken as boundary.
    pub fn check_config(config: &ProblemConfig) -> Result<(), StrError> {
        config.grid.check()?;
        if config.name.is_empty() {
            return reject("name must not be empty");
        }
        // negated comparisons also reject NaN
        if !(config.eps > 0.0) {
            return reject("eps must be > 0.0");
        }
        if !(config.eps >= 8.0 * f64::EPSILON * config.grid.max_abs_coord()) {
            return reject("eps is smaller than the rounding error at the domain extent");
        }
        if !(config.eps < 0.5 * config.grid.min_spacing()) {
            return reject("eps must be smaller than half the minimum grid spacing");
        }
        if !(config.temperature > 0.0) || !config.temperature.is_finite() {
            return reject("temperature must be > 0.0");
        }
        if !(config.reference_pressure > 0.0) || !config.reference_pressure.is_finite() {
            return reject("reference pressure must be > 0.0");
        }
        if !(config.dirichlet_saturation >= 0.0 && config.dirichlet_saturation <= 1.0) {
            return reject("saturation must be in [0, 1]");
        }
        if !(config.cfl_factor > 0.0 && config.cfl_factor <= 1.0) {
            return reject("cfl_factor must be in (0, 1]");
        }
        Ok(())
    }

    /// Classifies all boundary faces of the grid and counts the boundary conditions
    ///
    /// Returns an error if any boundary face is left unclassified or if any
    /// interior evaluation point (cell center) lies within `eps` of the boundary.
    pub fn scan_boundary<P>(problem: &P) -> Result<BoundaryScan, StrError>
    where
        P: DecoupledProblem + ?Sized,
    {
        let grid = problem.grid();
        let eps = problem.eps();

        // interior points
        let n_near = grid
            .cell_centers()
            .par_iter()
            .filter(|x| grid.on_boundary(x, eps))
            .count();
        if n_near > 0 {
            return reject("interior point within eps of the boundary");
        }

        // boundary points
        let faces = grid.boundary_faces();
        let counts: Vec<[usize; 5]> = faces
            .par_iter()
            .map(|face| -> Result<[usize; 5], StrError> {
                let x = &face.center;
                let bc = problem.boundary_types_at(x);
                if !bc.is_complete() {
                    return Err("boundary position left unclassified");
                }
                let mut c = [0; 5];
                match bc.kind(Equation::Pressure)? {
                    BcKind::PrescribedValue => c[0] = 1,
                    BcKind::PrescribedFlux => c[1] = 1,
                }
                match bc.kind(Equation::Saturation)? {
                    BcKind::PrescribedValue => c[2] = 1,
                    BcKind::PrescribedFlux => c[3] = 1,
                }
                if bc.has_neumann() {
                    let flux = problem.neumann_at(x);
                    if flux.wetting != 0.0 || flux.non_wetting != 0.0 {
                        c[4] = 1;
                    }
                }
                Ok(c)
            })
            .collect::<Result<Vec<_>, StrError>>()
            .map_err(|message| {
                tracing::warn!("{}", message);
                message
            })?;

        let mut scan = BoundaryScan {
            n_face: faces.len(),
            ..Default::default()
        };
        for c in &counts {
            scan.n_pressure_dirichlet += c[0];
            scan.n_pressure_neumann += c[1];
            scan.n_saturation_dirichlet += c[2];
            scan.n_saturation_neumann += c[3];
            scan.n_flux_nonzero += c[4];
        }
        tracing::debug!(
            n_face = scan.n_face,
            n_pressure_dirichlet = scan.n_pressure_dirichlet,
            n_saturation_dirichlet = scan.n_saturation_dirichlet,
            n_flux_nonzero = scan.n_flux_nonzero,
            "boundary scan"
        );
        Ok(scan)
    }
}

impl fmt::Display for BoundaryScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Boundary conditions\n")?;
        write!(f, "===================\n")?;
        write!(f, "number of boundary faces = {}\n", self.n_face)?;
        write!(
            f,
            "pressure equation: Dirichlet = {}, Neumann = {}\n",
            self.n_pressure_dirichlet, self.n_pressure_neumann
        )?;
        write!(
            f,
            "saturation equation: Dirichlet = {}, Neumann = {}\n",
            self.n_saturation_dirichlet, self.n_saturation_neumann
        )?;
        write!(f, "faces with non-zero flux = {}\n", self.n_flux_nonzero)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
