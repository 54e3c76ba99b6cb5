use super::{BcKind, Equation};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the kind of boundary condition of each equation at a boundary position
///
/// Each equation is classified independently; e.g., a prescribed pressure
/// may be combined with a prescribed (saturation) flux at the same position.
/// A freshly allocated instance is unclassified for both equations.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct BoundaryTypes {
    /// Kind for the pressure equation
    pressure: Option<BcKind>,

    /// Kind for the saturation equation
    saturation: Option<BcKind>,
}

impl BoundaryTypes {
    /// Allocates a new (unclassified) instance
    pub fn new() -> Self {
        BoundaryTypes {
            pressure: None,
            saturation: None,
        }
    }

    /// Sets the kind of boundary condition of one equation
    pub fn set(&mut self, eq: Equation, kind: BcKind) -> &mut Self {
        match eq {
            Equation::Pressure => self.pressure = Some(kind),
            Equation::Saturation => self.saturation = Some(kind),
        }
        self
    }

    /// Sets a prescribed value (Dirichlet) condition for one equation
    pub fn set_dirichlet(&mut self, eq: Equation) -> &mut Self {
        self.set(eq, BcKind::PrescribedValue)
    }

    /// Sets a prescribed flux (Neumann) condition for one equation
    pub fn set_neumann(&mut self, eq: Equation) -> &mut Self {
        self.set(eq, BcKind::PrescribedFlux)
    }

    /// Sets a prescribed value (Dirichlet) condition for all equations
    pub fn set_all_dirichlet(&mut self) -> &mut Self {
        self.set_dirichlet(Equation::Pressure).set_dirichlet(Equation::Saturation)
    }

    /// Sets a prescribed flux (Neumann) condition for all equations
    pub fn set_all_neumann(&mut self) -> &mut Self {
        self.set_neumann(Equation::Pressure).set_neumann(Equation::Saturation)
    }

    /// Returns the kind of boundary condition of one equation
    pub fn kind(&self, eq: Equation) -> Result<BcKind, StrError> {
        match eq {
            Equation::Pressure => self.pressure.ok_or("boundary type for the pressure equation is not set"),
            Equation::Saturation => self
                .saturation
                .ok_or("boundary type for the saturation equation is not set"),
        }
    }

    /// Returns the kind of boundary condition of one equation, if set
    pub fn get(&self, eq: Equation) -> Option<BcKind> {
        match eq {
            Equation::Pressure => self.pressure,
            Equation::Saturation => self.saturation,
        }
    }

    /// Indicates whether the equation has a prescribed value (Dirichlet) condition
    pub fn is_dirichlet(&self, eq: Equation) -> bool {
        self.get(eq) == Some(BcKind::PrescribedValue)
    }

    /// Indicates whether the equation has a prescribed flux (Neumann) condition
    pub fn is_neumann(&self, eq: Equation) -> bool {
        self.get(eq) == Some(BcKind::PrescribedFlux)
    }

    /// Indicates whether any equation has a prescribed value condition
    pub fn has_dirichlet(&self) -> bool {
        Equation::ALL.iter().any(|eq| self.is_dirichlet(*eq))
    }

    /// Indicates whether any equation has a prescribed flux condition
    pub fn has_neumann(&self) -> bool {
        Equation::ALL.iter().any(|eq| self.is_neumann(*eq))
    }

    /// Indicates whether all equations have been classified
    pub fn is_complete(&self) -> bool {
        self.pressure.is_some() && self.saturation.is_some()
    }

    /// Returns an error if any equation is unclassified
    pub fn check(&self) -> Result<(), StrError> {
        for eq in Equation::ALL {
            self.kind(eq)?;
        }
        Ok(())
    }
}

impl fmt::Display for BoundaryTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for eq in Equation::ALL {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            match self.get(eq) {
                Some(kind) => write!(f, "{}: {}", eq.name(), kind)?,
                None => write!(f, "{}: unset", eq.name())?,
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::BoundaryTypes;
    use crate::base::{BcKind, Equation};
    use crate::StrError;

    #[test]
    fn new_is_unclassified() {
        let bc = BoundaryTypes::new();
        assert!(!bc.is_complete());
        assert_eq!(bc.get(Equation::Pressure), None);
        assert_eq!(
            bc.kind(Equation::Pressure).err(),
            Some("boundary type for the pressure equation is not set")
        );
        assert_eq!(
            bc.kind(Equation::Saturation).err(),
            Some("boundary type for the saturation equation is not set")
        );
        assert_eq!(bc.check().err(), Some("boundary type for the pressure equation is not set"));
        assert_eq!(BoundaryTypes::default(), bc);
        assert_eq!(format!("{}", bc), "pressure: unset, saturation: unset");
    }

    #[test]
    fn set_each_equation_works() -> Result<(), StrError> {
        let mut bc = BoundaryTypes::new();
        bc.set_dirichlet(Equation::Pressure);
        assert!(!bc.is_complete());
        assert_eq!(bc.check().err(), Some("boundary type for the saturation equation is not set"));
        bc.set_neumann(Equation::Saturation);
        bc.check()?;
        assert_eq!(bc.kind(Equation::Pressure)?, BcKind::PrescribedValue);
        assert_eq!(bc.kind(Equation::Saturation)?, BcKind::PrescribedFlux);
        assert!(bc.is_dirichlet(Equation::Pressure));
        assert!(!bc.is_neumann(Equation::Pressure));
        assert!(bc.is_neumann(Equation::Saturation));
        assert!(bc.has_dirichlet());
        assert!(bc.has_neumann());
        assert_eq!(format!("{}", bc), "pressure: Dirichlet, saturation: Neumann");
        Ok(())
    }

    #[test]
    fn set_all_works() -> Result<(), StrError> {
        let mut bc = BoundaryTypes::new();
        bc.set_all_dirichlet();
        assert!(bc.is_complete());
        assert!(!bc.has_neumann());
        bc.set_all_neumann();
        assert_eq!(bc.kind(Equation::Pressure)?, BcKind::PrescribedFlux);
        assert_eq!(bc.kind(Equation::Saturation)?, BcKind::PrescribedFlux);
        assert!(!bc.has_dirichlet());

        // the last setting wins
        bc.set(Equation::Saturation, BcKind::PrescribedValue);
        assert!(bc.is_dirichlet(Equation::Saturation));
        Ok(())
    }
}
