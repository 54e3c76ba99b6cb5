use crate::StrError;

/// Assists in the time loop control of the sequential scheme
///
/// The explicit saturation update is restricted by the CFL condition; this
/// structure caps the CFL-limited step by `dt_max`, clips it to reach `t_fin`
/// exactly, and rejects steps smaller than `dt_min`.
pub struct TimeControl {
    /// Initial time
    pub(super) t_ini: f64,

    /// Final time
    pub(super) t_fin: f64,

    /// Maximum time increment
    pub(super) dt_max: f64,

    /// Minimum time increment
    pub(super) dt_min: f64,

    /// Maximum number of time steps
    pub(super) n_max_steps: usize,
}

impl TimeControl {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        TimeControl {
            t_ini: 0.0,
            t_fin: 1.0,
            dt_max: f64::INFINITY,
            dt_min: 1e-10,
            n_max_steps: 1_000_000,
        }
    }

    /// Sets the initial time
    pub fn t_ini(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value < 0.0 {
            return Err("t_ini must be positive or zero");
        }
        self.t_ini = value;
        Ok(self)
    }

    /// Sets the final time
    pub fn t_fin(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value < 0.0 {
            return Err("t_fin must be positive or zero");
        }
        self.t_fin = value;
        Ok(self)
    }

    /// Sets the maximum time increment
    pub fn dt_max(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("dt_max must be > 0.0");
        }
        self.dt_max = value;
        Ok(self)
    }

    /// Sets the minimum time increment
    pub fn dt_min(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value < 1e-14 {
            return Err("dt_min must be greater than or equal to 1e-14");
        }
        self.dt_min = value;
        Ok(self)
    }

    /// Sets the maximum number of time steps
    pub fn n_max_steps(&mut self, value: usize) -> Result<&mut Self, StrError> {
        if value < 1 {
            return Err("n_max_steps must be ≥ 1");
        }
        self.n_max_steps = value;
        Ok(self)
    }

    /// Checks the time window
    pub fn check(&self) -> Result<(), StrError> {
        if !(self.t_fin >= self.t_ini) {
            return Err("t_fin must be greater than or equal to t_ini");
        }
        Ok(())
    }

    /// Returns the initial time
    pub fn initial_time(&self) -> f64 {
        self.t_ini
    }

    /// Indicates whether the final time has been reached
    ///
    /// Remainders smaller than `dt_min` are ignored.
    pub fn finished(&self, t: f64) -> bool {
        self.t_fin - t <= self.dt_min
    }

    /// Returns the time increment for the next step
    ///
    /// `dt_cfl` is the CFL-limited increment, already multiplied by the CFL factor.
    pub fn time_step(&self, t: f64, dt_cfl: f64) -> Result<f64, StrError> {
        self.check()?;
        if !(dt_cfl > 0.0) {
            return Err("CFL time step must be > 0.0");
        }
        let dt = f64::min(f64::min(dt_cfl, self.dt_max), self.t_fin - t);
        if dt < self.dt_min {
            return Err("Δt is smaller than the allowed minimum");
        }
        Ok(dt)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
