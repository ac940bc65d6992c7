//! Propellant Entries
//!
//! Ballistic properties of a propellant formulation, loaded from
//! `SRBLIB_PROPELLANT_DEFINITION` sections.
//!
//! Burn rate follows Saint-Robert's law, `r = a·pᴺ`. The coefficient's units
//! follow whatever pressure/rate convention the catalog author chose; the
//! library does not convert them.
//!
//! Characteristic velocity is a catalog constant. It is not derived from
//! combustion temperature or gas properties.

use serde::{Deserialize, Serialize};

use crate::config_node::ConfigEntry;

/// A propellant catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Propellant {
    /// Unique catalog key
    pub name: String,

    /// Burn rate coefficient `a`
    #[serde(rename = "burnRateCoeff")]
    pub burn_rate_coefficient: f64,

    /// Burn rate pressure exponent `n` (dimensionless, usually in [0, 1))
    #[serde(rename = "burnRateExponent")]
    pub burn_rate_exponent: f64,

    /// Density (kg/m³)
    pub density: f64,

    /// Characteristic velocity c* (m/s)
    #[serde(rename = "characVel")]
    pub characteristic_velocity: f64,
}

impl Propellant {
    /// Create a propellant entry
    pub fn new(
        name: impl Into<String>,
        burn_rate_coefficient: f64,
        burn_rate_exponent: f64,
        density: f64,
        characteristic_velocity: f64,
    ) -> Self {
        Propellant {
            name: name.into(),
            burn_rate_coefficient,
            burn_rate_exponent,
            density,
            characteristic_velocity,
        }
    }

    /// Regression rate at the given chamber pressure, `a·pᴺ`.
    pub fn burn_rate(&self, pressure: f64) -> f64 {
        self.burn_rate_coefficient * pressure.powf(self.burn_rate_exponent)
    }
}

impl ConfigEntry for Propellant {
    const NODE_NAME: &'static str = "SRBLIB_PROPELLANT_DEFINITION";
    const KIND: &'static str = "Propellant";

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_node::{decode, ConfigNode};
    use crate::errors::SkipReason;

    fn apcp() -> Propellant {
        Propellant::new("APCP", 3.5e-5, 0.35, 1750.0, 1540.0)
    }

    #[test]
    fn test_burn_rate_law() {
        let prop = apcp();
        let expected = 3.5e-5 * 5.0e6_f64.powf(0.35);
        assert!((prop.burn_rate(5.0e6) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_burn_rate_zero_exponent_is_constant() {
        let prop = Propellant::new("Flat", 0.01, 0.0, 1800.0, 1500.0);
        assert_eq!(prop.burn_rate(1.0e5), 0.01);
        assert_eq!(prop.burn_rate(1.0e7), 0.01);
    }

    #[test]
    fn test_burn_rate_increases_with_pressure() {
        let prop = apcp();
        assert!(prop.burn_rate(7.0e6) > prop.burn_rate(3.0e6));
    }

    #[test]
    fn test_roundtrip() {
        let prop = apcp();
        let node = prop.save().unwrap();
        assert_eq!(node.name, Propellant::NODE_NAME);
        assert!(node.has_value("burnRateCoeff"));
        assert!(node.has_value("characVel"));
        assert_eq!(Propellant::load(&node).unwrap(), prop);
    }

    #[test]
    fn test_missing_required_field_is_skipped() {
        let mut node = ConfigNode::new(Propellant::NODE_NAME);
        node.set_value("name", "Partial");
        node.set_value("density", 1700.0);
        assert!(Propellant::load(&node).is_none());
        assert_eq!(decode::<Propellant>(&node).unwrap_err().reason, SkipReason::Malformed);
    }
}
