//! Casing Material Entries
//!
//! Physical properties of pressure-vessel casing materials, loaded from
//! `SRBLIB_CASINGMATERIAL_DEFINITION` sections.
//!
//! ## Example
//!
//! ```rust
//! use srb_core::catalog::CasingMaterial;
//!
//! let steel = CasingMaterial::new("Steel4130", 7850.0, 460.0e6);
//! assert_eq!(steel.corrosion_safety, 0.0);
//! assert_eq!(steel.weld_efficiency, 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::config_node::ConfigEntry;

/// A casing material catalog entry.
///
/// Values are taken as loaded; the sizing formulas assume a positive
/// `tensile_strength` and a `weld_efficiency` in (0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasingMaterial {
    /// Unique catalog key
    pub name: String,

    /// Density (kg/m³)
    pub density: f64,

    /// Ultimate tensile strength (Pa)
    #[serde(rename = "tensileStrength")]
    pub tensile_strength: f64,

    /// Corrosion allowance added to the wall (m)
    #[serde(rename = "corrosionSafety", default)]
    pub corrosion_safety: f64,

    /// Fraction of tensile strength usable across welded joints
    #[serde(rename = "weldEff", default = "default_weld_efficiency")]
    pub weld_efficiency: f64,
}

fn default_weld_efficiency() -> f64 {
    1.0
}

impl CasingMaterial {
    /// Create a material with no corrosion allowance and full weld efficiency
    pub fn new(name: impl Into<String>, density: f64, tensile_strength: f64) -> Self {
        CasingMaterial {
            name: name.into(),
            density,
            tensile_strength,
            corrosion_safety: 0.0,
            weld_efficiency: default_weld_efficiency(),
        }
    }

    /// Set the corrosion allowance (m)
    pub fn with_corrosion_safety(mut self, corrosion_safety: f64) -> Self {
        self.corrosion_safety = corrosion_safety;
        self
    }

    /// Set the weld efficiency
    pub fn with_weld_efficiency(mut self, weld_efficiency: f64) -> Self {
        self.weld_efficiency = weld_efficiency;
        self
    }

    /// Derated strength σ·η used in the thickness equation (Pa)
    pub fn allowable_stress(&self) -> f64 {
        self.tensile_strength * self.weld_efficiency
    }
}

impl ConfigEntry for CasingMaterial {
    const NODE_NAME: &'static str = "SRBLIB_CASINGMATERIAL_DEFINITION";
    const KIND: &'static str = "Casing material";

    fn name(&self) -> &str {
        &self.name
    }
}
