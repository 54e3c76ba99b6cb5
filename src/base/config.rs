use super::{Component, DiffusivePart, Grid, ModelKind, SampleGrids, VelocityFormulation};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Holds the configuration of a decoupled two-phase problem
///
/// Gathers the choices of grid, fluids, models, numerical parameters, and
/// problem data. It is constructed once at startup and passed by reference
/// to the problem and to the driver. The default values correspond to the
/// decoupled tutorial (water displaced by oil in a 300 m × 60 m domain).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProblemConfig {
    /// Problem name (prefix of the files generated by the host simulator)
    pub name: String,

    /// Grid descriptor
    pub grid: Grid,

    /// Tolerance for comparing coordinates against the bounding box
    pub eps: f64,

    /// Temperature in K (isothermal problem)
    pub temperature: f64,

    /// Constant pressure in Pa used to evaluate the material laws
    pub reference_pressure: f64,

    /// Pressure in Pa prescribed on the inflow (min-x) boundary
    pub dirichlet_pressure: f64,

    /// Wetting phase saturation prescribed on the inflow (min-x) boundary
    pub dirichlet_saturation: f64,

    /// Non-wetting phase mass flux in kg/(m²·s) prescribed on the outflow (max-x) boundary
    pub outlet_flux_non_wetting: f64,

    /// Fluid of the wetting phase
    pub wetting: Component,

    /// Fluid of the non-wetting phase
    pub non_wetting: Component,

    /// Implementation of the pressure model
    pub pressure_model: ModelKind,

    /// Implementation of the transport model
    pub transport_model: ModelKind,

    /// Velocity reconstructed by the pressure model
    pub velocity_formulation: VelocityFormulation,

    /// Diffusive term of the saturation update
    pub diffusive_part: DiffusivePart,

    /// Factor limiting the explicit time step (Courant-Friedrichs-Lewy)
    pub cfl_factor: f64,

    /// Enables gravity
    pub enable_gravity: bool,

    /// Writes output every `output_interval` time steps (zero disables the output)
    pub output_interval: usize,

    /// Writes restart files
    pub write_restart: bool,
}

impl ProblemConfig {
    /// Allocates a new instance with the tutorial values
    pub fn new() -> Self {
        ProblemConfig {
            name: "tutorial_decoupled".to_string(),
            grid: SampleGrids::tutorial_decoupled(),
            eps: 1e-6,
            temperature: 273.15 + 10.0, // 10 °C
            reference_pressure: 2e5,
            dirichlet_pressure: 2e5,
            dirichlet_saturation: 1.0,
            outlet_flux_non_wetting: 3e-2,
            wetting: Component::H2O,
            non_wetting: Component::Oil,
            pressure_model: ModelKind::FvVelocity,
            transport_model: ModelKind::FvSaturation,
            velocity_formulation: VelocityFormulation::Wetting,
            diffusive_part: DiffusivePart::CapillaryDiffusion,
            cfl_factor: 0.5,
            enable_gravity: false,
            output_interval: 1,
            write_restart: false,
        }
    }

    /// Sets the problem name
    pub fn set_name(&mut self, name: &str) -> Result<&mut Self, StrError> {
        if name.is_empty() {
            return Err("name must not be empty");
        }
        self.name = name.to_string();
        Ok(self)
    }

    /// Sets the grid descriptor
    pub fn set_grid(&mut self, grid: Grid) -> Result<&mut Self, StrError> {
        grid.check()?;
        self.grid = grid;
        Ok(self)
    }

    /// Sets the tolerance for comparing coordinates against the bounding box
    ///
    /// **Note:** The tolerance is checked against the grid spacing by [crate::problem::Validator].
    pub fn set_eps(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0) || !value.is_finite() {
            return Err("eps must be > 0.0");
        }
        self.eps = value;
        Ok(self)
    }

    /// Sets the temperature in K
    pub fn set_temperature(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0) || !value.is_finite() {
            return Err("temperature must be > 0.0");
        }
        self.temperature = value;
        Ok(self)
    }

    /// Sets the reference pressure in Pa
    pub fn set_reference_pressure(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0) || !value.is_finite() {
            return Err("reference pressure must be > 0.0");
        }
        self.reference_pressure = value;
        Ok(self)
    }

    /// Sets the pressure and saturation prescribed on the inflow boundary
    pub fn set_dirichlet_values(&mut self, pressure: f64, saturation: f64) -> Result<&mut Self, StrError> {
        if !(saturation >= 0.0 && saturation <= 1.0) {
            return Err("saturation must be in [0, 1]");
        }
        self.dirichlet_pressure = pressure;
        self.dirichlet_saturation = saturation;
        Ok(self)
    }

    /// Sets the non-wetting phase mass flux prescribed on the outflow boundary
    pub fn set_outlet_flux(&mut self, value: f64) -> Result<&mut Self, StrError> {
        self.outlet_flux_non_wetting = value;
        Ok(self)
    }

    /// Sets the fluids of the wetting and non-wetting phases
    pub fn set_fluids(&mut self, wetting: Component, non_wetting: Component) -> Result<&mut Self, StrError> {
        for fluid in [wetting, non_wetting] {
            if let Component::Constant(density, viscosity) = fluid {
                if !(density > 0.0) || !(viscosity > 0.0) {
                    return Err("constant fluid requires density > 0.0 and viscosity > 0.0");
                }
            }
        }
        self.wetting = wetting;
        self.non_wetting = non_wetting;
        Ok(self)
    }

    /// Sets the implementations of the pressure and transport models
    pub fn set_models(&mut self, pressure: ModelKind, transport: ModelKind) -> Result<&mut Self, StrError> {
        if pressure != ModelKind::FvVelocity {
            return Err("pressure model must be FvVelocity");
        }
        if transport != ModelKind::FvSaturation {
            return Err("transport model must be FvSaturation");
        }
        self.pressure_model = pressure;
        self.transport_model = transport;
        Ok(self)
    }

    /// Sets the velocity reconstructed by the pressure model
    pub fn set_velocity_formulation(&mut self, option: VelocityFormulation) -> Result<&mut Self, StrError> {
        self.velocity_formulation = option;
        Ok(self)
    }

    /// Sets the diffusive term of the saturation update
    pub fn set_diffusive_part(&mut self, option: DiffusivePart) -> Result<&mut Self, StrError> {
        self.diffusive_part = option;
        Ok(self)
    }

    /// Sets the CFL factor
    pub fn set_cfl_factor(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if !(value > 0.0 && value <= 1.0) {
            return Err("cfl_factor must be in (0, 1]");
        }
        self.cfl_factor = value;
        Ok(self)
    }

    /// Enables or disables gravity
    pub fn set_enable_gravity(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.enable_gravity = flag;
        Ok(self)
    }

    /// Sets the output interval (in number of time steps; zero disables the output)
    pub fn set_output_interval(&mut self, value: usize) -> Result<&mut Self, StrError> {
        self.output_interval = value;
        Ok(self)
    }

    /// Enables or disables restart files
    pub fn set_write_restart(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.write_restart = flag;
        Ok(self)
    }

    /// Returns a new instance from a JSON string
    pub fn from_json(json: &str) -> Result<Self, StrError> {
        let config: ProblemConfig = serde_json::from_str(json).map_err(|err| {
            tracing::warn!("cannot parse configuration: {}", err);
            "cannot parse JSON configuration"
        })?;
        config.grid.check()?;
        Ok(config)
    }

    /// Reads a JSON file
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<Path> + ?Sized,
    {
        let json = fs::read_to_string(full_path).map_err(|_| "cannot read configuration file")?;
        ProblemConfig::from_json(&json)
    }

    /// Returns a (pretty) JSON string
    pub fn to_json(&self) -> Result<String, StrError> {
        serde_json::to_string_pretty(self).map_err(|_| "cannot serialize configuration")
    }

    /// Writes a JSON file
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<Path> + ?Sized,
    {
        let path: &Path = full_path.as_ref();
        if let Some(p) = path.parent() {
            if !p.as_os_str().is_empty() {
                fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
            }
        }
        fs::write(path, self.to_json()?).map_err(|_| "cannot write configuration file")
    }
}

impl Default for ProblemConfig {
    fn default() -> Self {
        ProblemConfig::new()
    }
}

impl fmt::Display for ProblemConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "name = {}\n", self.name)?;
        write!(f, "grid = {}\n", self.grid)?;
        write!(f, "eps = {:?}\n", self.eps)?;
        write!(f, "temperature = {:?}\n", self.temperature)?;
        write!(f, "reference_pressure = {:?}\n", self.reference_pressure)?;

        write!(f, "\nBoundary data\n")?;
        write!(f, "=============\n")?;
        write!(f, "dirichlet_pressure = {:?}\n", self.dirichlet_pressure)?;
        write!(f, "dirichlet_saturation = {:?}\n", self.dirichlet_saturation)?;
        write!(f, "outlet_flux_non_wetting = {:?}\n", self.outlet_flux_non_wetting)?;

        write!(f, "\nFluids and models\n")?;
        write!(f, "=================\n")?;
        write!(f, "wetting = {:?}\n", self.wetting)?;
        write!(f, "non_wetting = {:?}\n", self.non_wetting)?;
        write!(f, "pressure_model = {:?}\n", self.pressure_model)?;
        write!(f, "transport_model = {:?}\n", self.transport_model)?;
        write!(f, "velocity_formulation = {:?}\n", self.velocity_formulation)?;
        write!(f, "diffusive_part = {:?}\n", self.diffusive_part)?;
        write!(f, "cfl_factor = {:?}\n", self.cfl_factor)?;
        write!(f, "enable_gravity = {:?}\n", self.enable_gravity)?;

        write!(f, "\nOutput\n")?;
        write!(f, "======\n")?;
        write!(f, "output_interval = {:?}\n", self.output_interval)?;
        write!(f, "write_restart = {:?}\n", self.write_restart)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
