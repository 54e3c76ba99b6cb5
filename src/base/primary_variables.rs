use super::{Equation, Phase};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Holds the primary variables (one value per equation)
///
/// Used for prescribed values (Dirichlet) and for the initial condition.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct PrimaryVariables {
    /// Pressure in Pa (slot of the pressure equation)
    pub pressure: f64,

    /// Wetting phase saturation (slot of the saturation equation)
    pub saturation: f64,
}

/// Holds one value per fluid phase
///
/// Used for prescribed fluxes (Neumann) in kg/(m²·s) and for sources in kg/(m³·s).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct PhaseValues {
    /// Value for the wetting phase
    pub wetting: f64,

    /// Value for the non-wetting phase
    pub non_wetting: f64,
}

/// Holds temperature and reference pressure entering the material laws
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ReferenceState {
    /// Temperature in K
    pub temperature: f64,

    /// Reference pressure in Pa
    pub pressure: f64,
}

impl PrimaryVariables {
    /// Allocates a new instance
    pub fn new(pressure: f64, saturation: f64) -> Self {
        PrimaryVariables { pressure, saturation }
    }

    /// Returns an instance with all values equal to zero
    pub fn zero() -> Self {
        PrimaryVariables {
            pressure: 0.0,
            saturation: 0.0,
        }
    }
}

impl PhaseValues {
    /// Allocates a new instance
    pub fn new(wetting: f64, non_wetting: f64) -> Self {
        PhaseValues { wetting, non_wetting }
    }

    /// Returns an instance with all values equal to zero
    pub fn zero() -> Self {
        PhaseValues {
            wetting: 0.0,
            non_wetting: 0.0,
        }
    }

    /// Returns the sum over phases
    pub fn total(&self) -> f64 {
        self.wetting + self.non_wetting
    }
}

impl Index<Equation> for PrimaryVariables {
    type Output = f64;
    fn index(&self, eq: Equation) -> &Self::Output {
        match eq {
            Equation::Pressure => &self.pressure,
            Equation::Saturation => &self.saturation,
        }
    }
}

impl IndexMut<Equation> for PrimaryVariables {
    fn index_mut(&mut self, eq: Equation) -> &mut Self::Output {
        match eq {
            Equation::Pressure => &mut self.pressure,
            Equation::Saturation => &mut self.saturation,
        }
    }
}

impl Index<Phase> for PhaseValues {
    type Output = f64;
    fn index(&self, phase: Phase) -> &Self::Output {
        match phase {
            Phase::Wetting => &self.wetting,
            Phase::NonWetting => &self.non_wetting,
        }
    }
}

impl IndexMut<Phase> for PhaseValues {
    fn index_mut(&mut self, phase: Phase) -> &mut Self::Output {
        match phase {
            Phase::Wetting => &mut self.wetting,
            Phase::NonWetting => &mut self.non_wetting,
        }
    }
}

impl fmt::Display for PrimaryVariables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(p = {:?}, S = {:?})", self.pressure, self.saturation)
    }
}

impl fmt::Display for PhaseValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(w = {:?}, n = {:?})", self.wetting, self.non_wetting)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{PhaseValues, PrimaryVariables, ReferenceState};
    use crate::base::{Equation, Phase};

    #[test]
    fn new_and_zero_work() {
        let values = PrimaryVariables::new(2e5, 1.0);
        assert_eq!(values.pressure, 2e5);
        assert_eq!(values.saturation, 1.0);
        assert_eq!(PrimaryVariables::zero(), PrimaryVariables::new(0.0, 0.0));

        let fluxes = PhaseValues::new(0.0, 3e-2);
        assert_eq!(fluxes.total(), 3e-2);
        assert_eq!(PhaseValues::zero(), PhaseValues::new(0.0, 0.0));
    }

    #[test]
    fn index_by_equation_and_phase_works() {
        let mut values = PrimaryVariables::zero();
        values[Equation::Pressure] = 123.0;
        values[Equation::Saturation] = 0.5;
        assert_eq!(values.pressure, 123.0);
        assert_eq!(values.saturation, 0.5);
        assert_eq!(values[Equation::Pressure], 123.0);

        let mut fluxes = PhaseValues::zero();
        fluxes[Phase::NonWetting] = 3e-2;
        assert_eq!(fluxes.wetting, 0.0);
        assert_eq!(fluxes.non_wetting, 3e-2);
        assert_eq!(fluxes[Phase::Wetting], 0.0);
    }

    #[test]
    fn display_and_serialize_work() {
        let values = PrimaryVariables::new(2e5, 1.0);
        assert_eq!(format!("{}", values), "(p = 200000.0, S = 1.0)");
        let fluxes = PhaseValues::new(0.0, 0.03);
        assert_eq!(format!("{}", fluxes), "(w = 0.0, n = 0.03)");

        let state = ReferenceState {
            temperature: 283.15,
            pressure: 2e5,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "{\"temperature\":283.15,\"pressure\":200000.0}");
        let back: ReferenceState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
