//! # Project Data Structures
//!
//! The `Project` struct is the root container for a motor sizing job.
//! Projects serialize to `.srb` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, motor name, timestamps)
//! ├── catalog_path: Option<String> (catalog file the material keys refer to)
//! └── casings: HashMap<Uuid, CasingInput>
//! ```
//!
//! Casings store material keys, not material data, so a project is always
//! evaluated against the catalog it is loaded with.
//!
//! ## Example
//!
//! ```rust
//! use srb_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "Sounding rocket S-2");
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("S-2"));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::casing::{calculate, CasingInput, CasingResult};
use crate::catalog::Catalog;
use crate::errors::CalcResult;

/// Current schema version for .srb files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata
    pub meta: ProjectMetadata,

    /// Catalog file the casing material keys resolve against
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Casing designs, keyed by UUID
    pub casings: HashMap<Uuid, CasingInput>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use srb_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "Hobby L1");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(engineer: impl Into<String>, motor_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                motor_name: motor_name.into(),
                created: now,
                modified: now,
            },
            catalog_path: None,
            casings: HashMap::new(),
        }
    }

    /// Add a casing design. Returns the UUID assigned to it.
    pub fn add_casing(&mut self, casing: CasingInput) -> Uuid {
        let id = Uuid::new_v4();
        self.casings.insert(id, casing);
        self.touch();
        id
    }

    /// Remove a casing design by UUID.
    pub fn remove_casing(&mut self, id: &Uuid) -> Option<CasingInput> {
        let casing = self.casings.remove(id);
        if casing.is_some() {
            self.touch();
        }
        casing
    }

    /// Get a casing design by UUID.
    pub fn get_casing(&self, id: &Uuid) -> Option<&CasingInput> {
        self.casings.get(id)
    }

    /// Get a mutable casing design by UUID.
    ///
    /// Marks the project modified when the casing exists.
    pub fn get_casing_mut(&mut self, id: &Uuid) -> Option<&mut CasingInput> {
        if self.casings.contains_key(id) {
            self.meta.modified = Utc::now();
            self.casings.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of casing designs.
    pub fn casing_count(&self) -> usize {
        self.casings.len()
    }

    /// Evaluate every casing against a catalog, ordered by label.
    pub fn evaluate(&self, catalog: &Catalog) -> Vec<(Uuid, CalcResult<CasingResult>)> {
        let mut entries: Vec<(&Uuid, &CasingInput)> = self.casings.iter().collect();
        entries.sort_by(|a, b| a.1.label.cmp(&b.1.label));
        entries
            .into_iter()
            .map(|(id, casing)| (*id, calculate(casing, catalog)))
            .collect()
    }

    /// Total casing mass, failing on the first unresolved material.
    pub fn total_casing_mass_kg(&self, catalog: &Catalog) -> CalcResult<f64> {
        self.casings
            .values()
            .map(|casing| calculate(casing, catalog).map(|r| r.mass_kg))
            .sum()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Motor designation
    pub motor_name: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn casing(label: &str, material: &str) -> CasingInput {
        CasingInput {
            label: label.to_string(),
            material: material.to_string(),
            cylinder_length_m: 1.2,
            diameter_m: 0.15,
            mawp_pa: 6.0e6,
        }
    }

    #[test]
    fn test_project_creation() {
        let project = Project::new("John Doe", "S-2");
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.motor_name, "S-2");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert!(project.catalog_path.is_none());
    }

    #[test]
    fn test_project_serialization() {
        let mut project = Project::new("Jane Engineer", "S-2");
        project.add_casing(casing("Booster", "Steel4130"));

        let json = serde_json::to_string_pretty(&project).unwrap();
        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("Steel4130"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.engineer, "Jane Engineer");
        assert_eq!(roundtrip.casing_count(), 1);
    }

    #[test]
    fn test_add_remove_casing() {
        let mut project = Project::new("Engineer", "S-2");

        let id = project.add_casing(casing("Booster", "Steel4130"));
        assert_eq!(project.casing_count(), 1);
        assert!(project.get_casing(&id).is_some());

        project.get_casing_mut(&id).unwrap().mawp_pa = 7.0e6;
        assert_eq!(project.get_casing(&id).unwrap().mawp_pa, 7.0e6);

        let removed = project.remove_casing(&id);
        assert!(removed.is_some());
        assert_eq!(project.casing_count(), 0);
        assert!(project.remove_casing(&id).is_none());
    }

    #[test]
    fn test_evaluate_against_catalog() {
        let catalog = Catalog::with_defaults();
        let mut project = Project::new("Engineer", "S-2");
        project.add_casing(casing("B-sustainer", "Al6061-T6"));
        project.add_casing(casing("A-booster", "Steel4130"));
        project.add_casing(casing("C-unknown", "Unobtainium"));

        let results = project.evaluate(&catalog);
        assert_eq!(results.len(), 3);
        assert_eq!(project.get_casing(&results[0].0).unwrap().label, "A-booster");
        assert!(results[0].1.is_ok());
        assert!(results[1].1.is_ok());
        assert!(results[2].1.is_err());

        assert!(project.total_casing_mass_kg(&catalog).is_err());
    }

    #[test]
    fn test_total_mass() {
        let catalog = Catalog::with_defaults();
        let mut project = Project::new("Engineer", "S-2");
        project.add_casing(casing("A", "Steel4130"));
        project.add_casing(casing("B", "Steel4130"));

        let single = calculate(&casing("A", "Steel4130"), &catalog).unwrap().mass_kg;
        let total = project.total_casing_mass_kg(&catalog).unwrap();
        assert!((total - 2.0 * single).abs() < 1e-9);
    }
}
