//! # Casing Geometry
//!
//! Wall thickness, volumes and mass of a motor casing modelled as a
//! pressure vessel: a cylinder closed by two hemispherical ends (a "pill").
//!
//! ## Wall Thickness
//!
//! Thin-wall hoop stress with a corrosion allowance `c` and weld-derated
//! strength `σ·η`:
//!
//! ```text
//! t = min( d/2, (P·(d − c) + 2·σ·η·c) / (2·σ·η + P) )
//! ```
//!
//! At `P = 0` the wall is just the corrosion allowance. As `P` grows the wall
//! approaches `d/2`, and is clamped there: a vessel that would need a wall
//! thicker than its radius is reported as solid (zero inner volume) rather
//! than as a failure.
//!
//! ## Volumes
//!
//! Both the outer and inner pill use the same straight-section length
//! `L − d`. When `d > L` that length is negative and the cylinder term
//! subtracts volume; this is passed through unchanged.
//!
//! ## Preconditions
//!
//! The material must have a positive tensile strength. With `σ·η = 0` and
//! `P = 0` the thickness is `0/0` and every derived quantity is NaN.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use srb_core::casing::CasingGeometry;
//! use srb_core::catalog::CasingMaterial;
//!
//! let steel = Arc::new(CasingMaterial::new("Steel", 7850.0, 460.0e6));
//! let casing = CasingGeometry::new(steel, 2.0, 0.5).with_mawp(5.0e6);
//!
//! assert!((casing.thickness() - 0.0027027).abs() < 1e-6);
//! assert!(casing.mass() > 0.0);
//! ```

use std::f64::consts::PI;
use std::sync::Arc;

use crate::catalog::CasingMaterial;

/// Volume of a capsule: a cylinder of `cylinder_length` capped by two
/// hemispheres of `diameter`.
pub fn pill_volume(cylinder_length: f64, diameter: f64) -> f64 {
    let sphere = diameter * diameter * diameter * PI / 6.0;
    let cylinder = diameter * diameter * cylinder_length * PI / 4.0;
    sphere + cylinder
}

/// A casing sized for a maximum allowable working pressure.
///
/// Holds a shared, immutable material snapshot. Every derived quantity is
/// recomputed from the current fields on each call.
#[derive(Debug, Clone, PartialEq)]
pub struct CasingGeometry {
    /// Casing material
    pub material: Arc<CasingMaterial>,
    /// Overall length including both end caps (m)
    pub cylinder_length: f64,
    /// Outer diameter (m)
    pub diameter: f64,
    /// Maximum allowable working pressure (Pa)
    pub mawp: f64,
}

impl CasingGeometry {
    /// Create an unpressurized casing (MAWP = 0).
    pub fn new(material: Arc<CasingMaterial>, cylinder_length: f64, diameter: f64) -> Self {
        CasingGeometry {
            material,
            cylinder_length,
            diameter,
            mawp: 0.0,
        }
    }

    /// Set the maximum allowable working pressure (Pa)
    pub fn with_mawp(mut self, mawp: f64) -> Self {
        self.mawp = mawp;
        self
    }

    /// Wall thickness (m), clamped to the outer radius.
    pub fn thickness(&self) -> f64 {
        let mat = &self.material;
        let strength = 2.0 * mat.allowable_stress();
        let required = (self.mawp * (self.diameter - mat.corrosion_safety)
            + strength * mat.corrosion_safety)
            / (strength + self.mawp);

        // Written so a NaN requirement propagates instead of clamping.
        let radius = self.diameter / 2.0;
        if radius < required {
            radius
        } else {
            required
        }
    }

    /// True when the required wall reaches the outer radius.
    pub fn is_solid(&self) -> bool {
        self.thickness() >= self.diameter / 2.0
    }

    /// Length of the straight section between the end caps (m). Negative
    /// when the diameter exceeds the overall length.
    pub fn cylinder_section(&self) -> f64 {
        self.cylinder_length - self.diameter
    }

    /// Inner diameter (m)
    pub fn inner_diameter(&self) -> f64 {
        self.diameter - 2.0 * self.thickness()
    }

    /// Enclosed volume (m³)
    pub fn inner_volume(&self) -> f64 {
        pill_volume(self.cylinder_section(), self.inner_diameter())
    }

    /// Volume of the outer envelope (m³)
    pub fn outer_volume(&self) -> f64 {
        pill_volume(self.cylinder_section(), self.diameter)
    }

    /// Volume of wall material (m³)
    pub fn wall_volume(&self) -> f64 {
        self.outer_volume() - self.inner_volume()
    }

    /// Casing mass (kg)
    pub fn mass(&self) -> f64 {
        self.material.density * self.wall_volume()
    }
}
