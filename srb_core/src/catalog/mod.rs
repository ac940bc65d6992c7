//! # Catalogs
//!
//! Named catalogs of casing materials, propellants and nozzles.
//!
//! Entries are immutable once registered: the catalog hands out `Arc`
//! snapshots, so a casing geometry can share a material with any number of
//! other geometries without anyone being able to change it underneath them.
//! Re-registering a name replaces the catalog slot only; geometries already
//! holding the old snapshot keep it.
//!
//! ## Example
//!
//! ```rust
//! use srb_core::catalog::Catalog;
//!
//! let text = r#"
//! [[SRBLIB_CASINGMATERIAL_DEFINITION]]
//! name = "Steel4130"
//! density = 7850.0
//! tensileStrength = 460000000.0
//! "#;
//!
//! let (catalog, warnings) = Catalog::from_toml_str(text).unwrap();
//! assert!(warnings.is_empty());
//! let steel = catalog.material("Steel4130").unwrap();
//! assert_eq!(steel.weld_efficiency, 1.0);
//! ```

pub mod casing_material;
pub mod nozzle;
pub mod propellant;

pub use casing_material::CasingMaterial;
pub use nozzle::Nozzle;
pub use propellant::Propellant;

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::config_node::{decode, ConfigEntry, ConfigNode};
use crate::curve::FloatCurve;
use crate::errors::{CalcError, CalcResult, LoadWarning, SkipReason};

/// Built-in presets, built once on first use.
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let mut catalog = Catalog::empty();

    catalog.register_material(steel_4130());
    catalog.register_material(aluminium_6061_t6());
    catalog.register_material(carbon_composite());

    catalog.register_propellant(apcp());
    catalog.register_propellant(knsu());

    catalog.register_nozzle(standard_nozzle());

    catalog
});

/// Name-keyed collection of catalog entries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    materials: HashMap<String, Arc<CasingMaterial>>,
    propellants: HashMap<String, Arc<Propellant>>,
    nozzles: HashMap<String, Arc<Nozzle>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the built-in presets.
    pub fn with_defaults() -> Self {
        DEFAULT_CATALOG.clone()
    }

    /// Parses a TOML catalog document.
    ///
    /// Sections that are skipped (unknown tag, no name, malformed field) are
    /// returned as warnings. Only a document that is not valid TOML fails.
    pub fn from_toml_str(text: &str) -> CalcResult<(Self, Vec<LoadWarning>)> {
        let nodes = ConfigNode::parse_document(text)?;
        let mut catalog = Self::empty();
        let warnings = catalog.load_nodes(&nodes);
        Ok((catalog, warnings))
    }

    /// Renders the catalog as a TOML document, entries sorted by name.
    pub fn to_toml_string(&self) -> CalcResult<String> {
        ConfigNode::write_document(&self.to_nodes())
    }

    /// Loads config nodes into this catalog, returning skipped sections.
    pub fn load_nodes(&mut self, nodes: &[ConfigNode]) -> Vec<LoadWarning> {
        let mut warnings = Vec::new();

        for node in nodes {
            let outcome = if node.name == CasingMaterial::NODE_NAME {
                decode::<CasingMaterial>(node).map(|e| self.register_material(e))
            } else if node.name == Propellant::NODE_NAME {
                decode::<Propellant>(node).map(|e| self.register_propellant(e))
            } else if node.name == Nozzle::NODE_NAME {
                decode::<Nozzle>(node).map(|e| self.register_nozzle(e))
            } else {
                Err(LoadWarning {
                    section: node.name.clone(),
                    name: node.entry_name().map(str::to_string),
                    reason: SkipReason::TagMismatch,
                    detail: "unknown section tag".to_string(),
                })
            };

            if let Err(warning) = outcome {
                tracing::warn!(
                    section = %warning.section,
                    name = ?warning.name,
                    reason = ?warning.reason,
                    "skipping catalog section: {}",
                    warning.detail
                );
                warnings.push(warning);
            }
        }

        warnings
    }

    /// All entries as config nodes, grouped by type and sorted by name.
    pub fn to_nodes(&self) -> Vec<ConfigNode> {
        let mut nodes = Vec::with_capacity(self.len());
        nodes.extend(sorted_nodes(&self.materials));
        nodes.extend(sorted_nodes(&self.propellants));
        nodes.extend(sorted_nodes(&self.nozzles));
        nodes
    }

    /// Registers a casing material. Overwrites if the name already exists.
    pub fn register_material(&mut self, material: CasingMaterial) {
        insert_entry(&mut self.materials, material);
    }

    /// Registers a propellant. Overwrites if the name already exists.
    pub fn register_propellant(&mut self, propellant: Propellant) {
        insert_entry(&mut self.propellants, propellant);
    }

    /// Registers a nozzle. Overwrites if the name already exists.
    pub fn register_nozzle(&mut self, nozzle: Nozzle) {
        insert_entry(&mut self.nozzles, nozzle);
    }

    /// Looks up a casing material snapshot by name.
    pub fn material(&self, name: &str) -> CalcResult<Arc<CasingMaterial>> {
        self.materials
            .get(name)
            .cloned()
            .ok_or_else(|| CalcError::material_not_found(name))
    }

    /// Looks up a propellant snapshot by name.
    pub fn propellant(&self, name: &str) -> CalcResult<Arc<Propellant>> {
        self.propellants
            .get(name)
            .cloned()
            .ok_or_else(|| CalcError::entry_not_found(Propellant::KIND, name))
    }

    /// Looks up a nozzle snapshot by name.
    pub fn nozzle(&self, name: &str) -> CalcResult<Arc<Nozzle>> {
        self.nozzles
            .get(name)
            .cloned()
            .ok_or_else(|| CalcError::entry_not_found(Nozzle::KIND, name))
    }

    /// Casing material names, sorted.
    pub fn material_names(&self) -> Vec<&str> {
        sorted_names(&self.materials)
    }

    /// Propellant names, sorted.
    pub fn propellant_names(&self) -> Vec<&str> {
        sorted_names(&self.propellants)
    }

    /// Nozzle names, sorted.
    pub fn nozzle_names(&self) -> Vec<&str> {
        sorted_names(&self.nozzles)
    }

    /// Copies every entry of `other` into this catalog, replacing same-named ones.
    pub fn merge(&mut self, other: &Catalog) {
        self.materials
            .extend(other.materials.iter().map(|(k, v)| (k.clone(), Arc::clone(v))));
        self.propellants
            .extend(other.propellants.iter().map(|(k, v)| (k.clone(), Arc::clone(v))));
        self.nozzles
            .extend(other.nozzles.iter().map(|(k, v)| (k.clone(), Arc::clone(v))));
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.materials.len() + self.propellants.len() + self.nozzles.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn insert_entry<T: ConfigEntry>(map: &mut HashMap<String, Arc<T>>, entry: T) {
    if entry.name().is_empty() {
        tracing::warn!(kind = T::KIND, "ignoring unnamed catalog entry");
        return;
    }
    tracing::debug!(kind = T::KIND, name = entry.name(), "registered catalog entry");
    map.insert(entry.name().to_string(), Arc::new(entry));
}

fn sorted_names<T>(map: &HashMap<String, Arc<T>>) -> Vec<&str> {
    let mut names: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    names.sort_unstable();
    names
}

fn sorted_nodes<T: ConfigEntry>(map: &HashMap<String, Arc<T>>) -> Vec<ConfigNode> {
    let mut entries: Vec<&Arc<T>> = map.values().collect();
    entries.sort_by(|a, b| a.name().cmp(b.name()));
    entries.into_iter().filter_map(|e| e.save()).collect()
}

// ─── Built-in Presets ─────────────────────────────────────────────────

/// AISI 4130 chromoly, normalized. Welded casings derated to 85%.
fn steel_4130() -> CasingMaterial {
    CasingMaterial::new("Steel4130", 7850.0, 460.0e6)
        .with_corrosion_safety(0.001)
        .with_weld_efficiency(0.85)
}

/// 6061-T6 aluminium tube; heat-affected welds lose much of the temper.
fn aluminium_6061_t6() -> CasingMaterial {
    CasingMaterial::new("Al6061-T6", 2700.0, 310.0e6).with_weld_efficiency(0.6)
}

/// Filament-wound carbon/epoxy, hoop-dominated layup.
fn carbon_composite() -> CasingMaterial {
    CasingMaterial::new("CarbonComposite", 1600.0, 600.0e6)
}

/// Ammonium perchlorate composite propellant (SI: m/s, Pa).
fn apcp() -> Propellant {
    Propellant::new("APCP", 3.5e-5, 0.35, 1750.0, 1540.0)
}

/// Potassium nitrate / sucrose "rocket candy" (SI: m/s, Pa).
fn knsu() -> Propellant {
    Propellant::new("KNSU", 1.007e-4, 0.319, 1841.0, 908.0)
}

/// Sea-level optimized conical nozzle.
fn standard_nozzle() -> Nozzle {
    let mut curve = FloatCurve::new();
    curve.add(0.0, 1.0);
    curve.add(1.0, 0.85);
    Nozzle::new("Standard").with_atmosphere_curve(curve)
}
