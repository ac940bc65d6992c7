//! Nozzle Entries
//!
//! Nozzle efficiency data loaded from `SRBLIB_NOZZLE_DEFINITION` sections.
//!
//! The atmosphere curve is normalized to 1 and maps ambient pressure to a
//! relative thrust coefficient; `nozzle_coefficient` scales it. Thrust itself
//! is computed by the consumer, not here.

use serde::{Deserialize, Serialize};

use crate::config_node::ConfigEntry;
use crate::curve::FloatCurve;

/// A nozzle catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nozzle {
    /// Unique catalog key
    pub name: String,

    /// Scale factor applied to the normalized atmosphere curve
    #[serde(rename = "nozzleCoeff", default = "default_nozzle_coefficient")]
    pub nozzle_coefficient: f64,

    /// Ambient pressure (atm) to normalized thrust coefficient
    #[serde(rename = "atmosphereCurve", default)]
    pub atmosphere_curve: FloatCurve,

    /// Gimbal range (degrees)
    #[serde(rename = "gimbalRange", default)]
    pub gimbal_range: f64,
}

fn default_nozzle_coefficient() -> f64 {
    1.0
}

impl Nozzle {
    /// Create a nozzle with unit coefficient, an empty curve and no gimbal
    pub fn new(name: impl Into<String>) -> Self {
        Nozzle {
            name: name.into(),
            nozzle_coefficient: default_nozzle_coefficient(),
            atmosphere_curve: FloatCurve::new(),
            gimbal_range: 0.0,
        }
    }

    /// Set the scale factor
    pub fn with_coefficient(mut self, nozzle_coefficient: f64) -> Self {
        self.nozzle_coefficient = nozzle_coefficient;
        self
    }

    /// Set the atmosphere curve
    pub fn with_atmosphere_curve(mut self, curve: FloatCurve) -> Self {
        self.atmosphere_curve = curve;
        self
    }

    /// Set the gimbal range (degrees)
    pub fn with_gimbal_range(mut self, gimbal_range: f64) -> Self {
        self.gimbal_range = gimbal_range;
        self
    }

    /// Normalized curve value at the given ambient pressure (atm)
    pub fn normalized_coefficient(&self, ambient_atm: f64) -> f64 {
        self.atmosphere_curve.evaluate(ambient_atm)
    }

    /// Curve value scaled by `nozzle_coefficient`
    pub fn scaled_coefficient(&self, ambient_atm: f64) -> f64 {
        self.nozzle_coefficient * self.normalized_coefficient(ambient_atm)
    }
}

impl Default for Nozzle {
    fn default() -> Self {
        Nozzle::new("")
    }
}

impl ConfigEntry for Nozzle {
    const NODE_NAME: &'static str = "SRBLIB_NOZZLE_DEFINITION";
    const KIND: &'static str = "Nozzle";

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_node::ConfigNode;

    fn vacuum_optimized() -> Nozzle {
        let mut curve = FloatCurve::new();
        curve.add(0.0, 1.0);
        curve.add(1.0, 0.7);
        curve.add_with_tangents(2.0, 0.6, -0.1, 0.0);
        Nozzle::new("Vac")
            .with_coefficient(1.6)
            .with_atmosphere_curve(curve)
            .with_gimbal_range(3.0)
    }

    #[test]
    fn test_defaults() {
        let nozzle = Nozzle::default();
        assert_eq!(nozzle.nozzle_coefficient, 1.0);
        assert_eq!(nozzle.gimbal_range, 0.0);
        assert!(nozzle.atmosphere_curve.is_empty());
    }

    #[test]
    fn test_scaled_coefficient() {
        let nozzle = vacuum_optimized();
        assert_eq!(nozzle.normalized_coefficient(0.0), 1.0);
        assert!((nozzle.scaled_coefficient(0.0) - 1.6).abs() < 1e-12);
        assert!((nozzle.scaled_coefficient(1.0) - 1.12).abs() < 1e-12);
        // Held beyond the last key
        assert!((nozzle.scaled_coefficient(3.0) - 0.96).abs() < 1e-12);
    }

    #[test]
    fn test_load_minimal_section() {
        let mut node = ConfigNode::new(Nozzle::NODE_NAME);
        node.set_value("name", "Stub");

        let nozzle = Nozzle::load(&node).unwrap();
        assert_eq!(nozzle.name, "Stub");
        assert_eq!(nozzle.nozzle_coefficient, 1.0);
        assert_eq!(nozzle.gimbal_range, 0.0);
    }

    #[test]
    fn test_roundtrip_through_document() {
        let nozzle = vacuum_optimized();
        let text = ConfigNode::write_document(&[nozzle.save().unwrap()]).unwrap();
        assert!(text.contains("atmosphereCurve"));

        let nodes = ConfigNode::parse_document(&text).unwrap();
        let reloaded = Nozzle::load(&nodes[0]).unwrap();
        assert_eq!(reloaded, nozzle);
        assert_eq!(reloaded.atmosphere_curve.keys()[2].in_tangent, -0.1);
    }

    #[test]
    fn test_empty_curve_roundtrip_through_document() {
        let nozzle = Nozzle::new("Bare").with_gimbal_range(7.5);
        let text = ConfigNode::write_document(&[nozzle.save().unwrap()]).unwrap();

        let nodes = ConfigNode::parse_document(&text).unwrap();
        assert_eq!(Nozzle::load(&nodes[0]).unwrap(), nozzle);
    }
}
