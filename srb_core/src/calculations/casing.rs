//! # Casing Calculation
//!
//! Sizes a motor casing from a catalog material, overall length, diameter
//! and maximum allowable working pressure.
//!
//! ## Assumptions
//!
//! - Cylinder with hemispherical end caps (see [`crate::casing`])
//! - Thin-wall hoop stress, weld-derated, plus corrosion allowance
//! - Inputs are taken as given; no range validation
//!
//! The only failure is an unknown material key. Inputs that hit known
//! modelling gaps (wall clamped to solid, diameter longer than the casing)
//! still produce numbers, flagged in [`CasingResult::notes`].
//!
//! ## Example
//!
//! ```rust
//! use srb_core::calculations::casing::{calculate, CasingInput};
//! use srb_core::catalog::Catalog;
//!
//! let input = CasingInput {
//!     label: "Booster case".to_string(),
//!     material: "Steel4130".to_string(),
//!     cylinder_length_m: 2.0,
//!     diameter_m: 0.5,
//!     mawp_pa: 5.0e6,
//! };
//!
//! let result = calculate(&input, &Catalog::with_defaults()).unwrap();
//! assert!(result.mass_kg > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::casing::CasingGeometry;
use crate::catalog::Catalog;
use crate::errors::CalcResult;

/// Input parameters for a casing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Booster case",
///   "material": "Steel4130",
///   "cylinder_length_m": 2.0,
///   "diameter_m": 0.5,
///   "mawp_pa": 5000000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasingInput {
    /// User label for this casing
    pub label: String,

    /// Casing material catalog key
    pub material: String,

    /// Overall length including end caps (m)
    pub cylinder_length_m: f64,

    /// Outer diameter (m)
    pub diameter_m: f64,

    /// Maximum allowable working pressure (Pa)
    #[serde(default)]
    pub mawp_pa: f64,
}

impl CasingInput {
    /// Resolve the material and build the geometry.
    pub fn geometry(&self, catalog: &Catalog) -> CalcResult<CasingGeometry> {
        let material = catalog.material(&self.material)?;
        Ok(CasingGeometry::new(material, self.cylinder_length_m, self.diameter_m).with_mawp(self.mawp_pa))
    }
}

/// Results from a casing calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "thickness_m": 0.0027,
///   "inner_diameter_m": 0.4946,
///   "cylinder_section_m": 1.5,
///   "inner_volume_m3": 0.3515,
///   "outer_volume_m3": 0.3600,
///   "wall_volume_m3": 0.0084,
///   "mass_kg": 66.2,
///   "is_solid": false,
///   "notes": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasingResult {
    /// Wall thickness (m)
    pub thickness_m: f64,

    /// Inner diameter (m)
    pub inner_diameter_m: f64,

    /// Straight section length L − d (m)
    pub cylinder_section_m: f64,

    /// Enclosed volume (m³)
    pub inner_volume_m3: f64,

    /// Outer envelope volume (m³)
    pub outer_volume_m3: f64,

    /// Wall material volume (m³)
    pub wall_volume_m3: f64,

    /// Casing mass (kg)
    pub mass_kg: f64,

    /// Wall clamped to the outer radius
    pub is_solid: bool,

    /// Modelling caveats that apply to this result
    pub notes: Vec<String>,
}

impl CasingResult {
    /// Evaluate every derived quantity of a geometry.
    pub fn from_geometry(geometry: &CasingGeometry) -> Self {
        let is_solid = geometry.is_solid();
        let cylinder_section_m = geometry.cylinder_section();

        let mut notes = Vec::new();
        if is_solid {
            notes.push("Required wall exceeds the radius; casing clamped to solid".to_string());
        }
        if cylinder_section_m < 0.0 {
            notes.push("Diameter exceeds overall length; cylinder term is negative".to_string());
        }
        if !geometry.thickness().is_finite() {
            notes.push("Thickness is not finite; check material tensile strength".to_string());
        }

        CasingResult {
            thickness_m: geometry.thickness(),
            inner_diameter_m: geometry.inner_diameter(),
            cylinder_section_m,
            inner_volume_m3: geometry.inner_volume(),
            outer_volume_m3: geometry.outer_volume(),
            wall_volume_m3: geometry.wall_volume(),
            mass_kg: geometry.mass(),
            is_solid,
            notes,
        }
    }

    /// True when the result carries no modelling caveats
    pub fn is_clean(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Calculate casing thickness, volumes and mass.
///
/// # Arguments
///
/// * `input` - Casing parameters
/// * `catalog` - Catalog used to resolve the material key
///
/// # Returns
///
/// * `Ok(CasingResult)` - Calculation results
/// * `Err(CalcError::MaterialNotFound)` - If the material key is unknown
pub fn calculate(input: &CasingInput, catalog: &Catalog) -> CalcResult<CasingResult> {
    let geometry = input.geometry(catalog)?;
    let result = CasingResult::from_geometry(&geometry);

    if !result.is_clean() {
        tracing::debug!(label = %input.label, notes = ?result.notes, "casing result has caveats");
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CasingMaterial;

    fn test_catalog() -> Catalog {
        let mut catalog = Catalog::empty();
        catalog.register_material(CasingMaterial::new("Steel", 7850.0, 460.0e6));
        catalog
    }

    fn test_casing() -> CasingInput {
        CasingInput {
            label: "Test Casing".to_string(),
            material: "Steel".to_string(),
            cylinder_length_m: 2.0,
            diameter_m: 0.5,
            mawp_pa: 5.0e6,
        }
    }

    #[test]
    fn test_casing_calculation() {
        let result = calculate(&test_casing(), &test_catalog()).unwrap();

        assert!((result.thickness_m - 0.0027027).abs() < 1e-6);
        assert!((result.cylinder_section_m - 1.5).abs() < 1e-12);
        assert!((result.mass_kg - 66.2).abs() < 0.1);
        assert!(!result.is_solid);
        assert!(result.is_clean());
    }

    #[test]
    fn test_unknown_material() {
        let mut input = test_casing();
        input.material = "Unobtainium".to_string();
        let err = calculate(&input, &test_catalog()).unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_no_range_validation() {
        let mut input = test_casing();
        input.mawp_pa = -1.0e6;
        assert!(calculate(&input, &test_catalog()).is_ok());
    }

    #[test]
    fn test_notes_for_short_casing() {
        let mut input = test_casing();
        input.cylinder_length_m = 0.3;
        let result = calculate(&input, &test_catalog()).unwrap();
        assert!(result.cylinder_section_m < 0.0);
        assert_eq!(result.notes.len(), 1);
    }

    #[test]
    fn test_notes_for_solid_casing() {
        let mut catalog = test_catalog();
        catalog.register_material(CasingMaterial::new("Corroding", 7850.0, 460.0e6).with_corrosion_safety(1.0));
        let mut input = test_casing();
        input.material = "Corroding".to_string();

        let result = calculate(&input, &catalog).unwrap();
        assert!(result.is_solid);
        assert_eq!(result.inner_volume_m3, 0.0);
        assert!(!result.is_clean());
    }

    #[test]
    fn test_serialization() {
        let input = test_casing();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: CasingInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = calculate(&input, &test_catalog()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"mass_kg\""));
    }

    #[test]
    fn test_mawp_defaults_to_zero() {
        let json = r#"{"label":"C","material":"Steel","cylinder_length_m":1.0,"diameter_m":0.1}"#;
        let input: CasingInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.mawp_pa, 0.0);
    }
}
