use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the equations of the decoupled two-phase model
///
/// Note: The fixed numbering scheme assists in sorting and matches the slot
/// of the corresponding value in [crate::base::PrimaryVariables].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Equation {
    /// Pressure equation (elliptic; solved implicitly)
    Pressure = 0,

    /// Saturation (transport) equation (hyperbolic; advanced explicitly)
    Saturation = 1,
}

impl Equation {
    /// Holds all equations in numbering order
    pub const ALL: [Equation; 2] = [Equation::Pressure, Equation::Saturation];

    /// Returns the name of the equation
    pub fn name(&self) -> &'static str {
        match self {
            Equation::Pressure => "pressure",
            Equation::Saturation => "saturation",
        }
    }
}

/// Defines the kind of boundary condition assigned to one equation
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum BcKind {
    /// Prescribed value (Dirichlet)
    ///
    /// Pressure for the pressure equation; saturation for the transport equation.
    PrescribedValue,

    /// Prescribed flux (Neumann)
    ///
    /// Mass flux per phase across the boundary.
    PrescribedFlux,
}

impl fmt::Display for BcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BcKind::PrescribedValue => write!(f, "Dirichlet"),
            BcKind::PrescribedFlux => write!(f, "Neumann"),
        }
    }
}

/// Defines the fluid phases
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Phase {
    /// Wetting phase (e.g., water)
    Wetting = 0,

    /// Non-wetting phase (e.g., oil)
    NonWetting = 1,
}

impl Phase {
    /// Holds all phases in numbering order
    pub const ALL: [Phase; 2] = [Phase::Wetting, Phase::NonWetting];
}

/// Defines the (single-component) fluid filling a phase
///
/// Only the selection is held here; property lookup is performed by the host solver.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum Component {
    /// Liquid water
    H2O,

    /// Liquid oil
    Oil,

    /// User-defined fluid with constant density and viscosity
    ///
    /// Holds (density in kg/m³, dynamic viscosity in Pa·s)
    Constant(f64, f64),
}

/// Defines the implementation selected for the pressure or transport model
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum ModelKind {
    /// Cell-centered finite volume velocity (pressure) model
    FvVelocity,

    /// Cell-centered finite volume saturation (transport) model
    FvSaturation,
}

/// Defines which phase velocity is reconstructed by the pressure model
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum VelocityFormulation {
    /// Wetting phase velocity
    Wetting,

    /// Non-wetting phase velocity
    NonWetting,

    /// Total velocity
    Total,
}

/// Defines the diffusive term added to the explicit saturation update
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum DiffusivePart {
    /// Pure advection
    None,

    /// Capillary diffusion correction
    CapillaryDiffusion,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{BcKind, Component, DiffusivePart, Equation, ModelKind, Phase, VelocityFormulation};
    use std::cmp::Ordering;
    use std::collections::HashSet;

    #[test]
    fn equation_and_phase_derives_work() {
        let pressure = Equation::Pressure;
        let pressure_clone = pressure.clone();
        assert_eq!(format!("{:?}", pressure), "Pressure");
        assert_eq!(pressure, pressure_clone);
        assert!(Equation::Pressure < Equation::Saturation);
        assert_eq!(Equation::Pressure.cmp(&Equation::Saturation), Ordering::Less);
        assert_eq!(Equation::Pressure as usize, 0);
        assert_eq!(Equation::Saturation as usize, 1);

        let mut set = HashSet::new();
        set.insert(Phase::Wetting);
        set.insert(Phase::NonWetting);
        set.insert(Phase::Wetting);
        assert_eq!(set.len(), 2);
        assert_eq!(Phase::ALL, [Phase::Wetting, Phase::NonWetting]);
    }

    #[test]
    fn names_and_display_work() {
        assert_eq!(Equation::Pressure.name(), "pressure");
        assert_eq!(Equation::Saturation.name(), "saturation");
        assert_eq!(format!("{}", BcKind::PrescribedValue), "Dirichlet");
        assert_eq!(format!("{}", BcKind::PrescribedFlux), "Neumann");
    }

    #[test]
    fn serialize_works() {
        let json = serde_json::to_string(&Component::Constant(1000.0, 1e-3)).unwrap();
        assert_eq!(json, "{\"Constant\":[1000.0,0.001]}");
        let kind: ModelKind = serde_json::from_str("\"FvSaturation\"").unwrap();
        assert_eq!(kind, ModelKind::FvSaturation);
        let vel: VelocityFormulation = serde_json::from_str("\"Wetting\"").unwrap();
        assert_eq!(vel, VelocityFormulation::Wetting);
        let diff: DiffusivePart = serde_json::from_str("\"CapillaryDiffusion\"").unwrap();
        assert_eq!(diff, DiffusivePart::CapillaryDiffusion);
    }
}
