//! # File I/O Module
//!
//! Reads and writes project and catalog files:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure project schema compatibility
//!
//! ## File Formats
//!
//! - Projects are saved as `.srb` files containing JSON.
//! - Catalogs are TOML documents of tagged sections (see [`crate::config_node`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use srb_core::file_io::{load_catalog, save_project};
//! use srb_core::project::Project;
//! use std::path::Path;
//!
//! let (catalog, warnings) = load_catalog(Path::new("motors.toml"))?;
//! for warning in &warnings {
//!     eprintln!("{}", warning);
//! }
//!
//! let project = Project::new("Engineer", "S-2");
//! save_project(&project, Path::new("s2.srb"))?;
//! # Ok::<(), srb_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::errors::{CalcError, CalcResult, LoadWarning};
use crate::project::{Project, SCHEMA_VERSION};

/// Save a project to a file with atomic write semantics.
///
/// # Example
///
/// ```rust,no_run
/// use srb_core::file_io::save_project;
/// use srb_core::project::Project;
/// use std::path::Path;
///
/// let project = Project::new("Engineer", "S-2");
/// save_project(&project, Path::new("s2.srb"))?;
/// # Ok::<(), srb_core::errors::CalcError>(())
/// ```
pub fn save_project(project: &Project, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(project).map_err(|e| CalcError::serialization(e.to_string()))?;
    write_atomic(path, json.as_bytes())
}

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(Project)` - Successfully loaded project
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let contents = read_text(path)?;

    let project: Project = serde_json::from_str(&contents).map_err(|e| {
        CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    validate_version(&project.meta.version)?;

    Ok(project)
}

/// Save a catalog as a TOML document with atomic write semantics.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> CalcResult<()> {
    let text = catalog.to_toml_string()?;
    write_atomic(path, text.as_bytes())
}

/// Load a catalog file.
///
/// Skipped sections come back as warnings; only unreadable files and
/// invalid TOML are errors.
pub fn load_catalog(path: &Path) -> CalcResult<(Catalog, Vec<LoadWarning>)> {
    let contents = read_text(path)?;
    Catalog::from_toml_str(&contents).map_err(|e| match e {
        CalcError::SerializationError { reason } => {
            CalcError::serialization(format!("Invalid catalog {}: {}", path.display(), reason))
        }
        other => other,
    })
}

fn read_text(path: &Path) -> CalcResult<String> {
    fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))
}

/// Temp file next to the target: `name.ext.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let extension = tmp
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    tmp.set_extension(extension);
    tmp
}

/// Write to a temp file, sync, then rename over the target.
fn write_atomic(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved file");
    Ok(())
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x, a newer minor may carry breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::CasingInput;
    use crate::catalog::CasingMaterial;
    use std::env::temp_dir;

    fn temp_path(name: &str, ext: &str) -> PathBuf {
        temp_dir().join(format!("srb_test_{}_{}.{}", name, std::process::id(), ext))
    }

    #[test]
    fn test_tmp_path_generation() {
        assert_eq!(tmp_path_for(Path::new("/a/motor.srb")), Path::new("/a/motor.srb.tmp"));
        assert_eq!(tmp_path_for(Path::new("/a/catalog")), Path::new("/a/catalog.tmp"));
    }

    #[test]
    fn test_save_and_load_project_roundtrip() {
        let path = temp_path("roundtrip", "srb");

        let mut project = Project::new("Test Engineer", "TEST-1");
        project.catalog_path = Some("motors.toml".to_string());
        let id = project.add_casing(CasingInput {
            label: "Case".to_string(),
            material: "Steel4130".to_string(),
            cylinder_length_m: 2.0,
            diameter_m: 0.5,
            mawp_pa: 5.0e6,
        });
        save_project(&project, &path).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded.meta.engineer, "Test Engineer");
        assert_eq!(loaded.catalog_path.as_deref(), Some("motors.toml"));
        assert_eq!(loaded.get_casing(&id), project.get_casing(&id));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic", "srb");
        let tmp = tmp_path_for(&path);

        save_project(&Project::new("Test", "T"), &path).unwrap();

        assert!(!tmp.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_project(&temp_path("does_not_exist", "srb")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let path = temp_path("newer", "srb");
        let mut project = Project::new("Test", "T");
        project.meta.version = "0.9.0".to_string();
        save_project(&project, &path).unwrap();

        let err = load_project(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("0.0.3").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_catalog_file_roundtrip() {
        let path = temp_path("catalog", "toml");

        let mut catalog = Catalog::empty();
        catalog.register_material(
            CasingMaterial::new("Steel4130", 7850.0, 460_000_000.0)
                .with_corrosion_safety(0.001)
                .with_weld_efficiency(0.85),
        );
        save_catalog(&catalog, &path).unwrap();

        let (loaded, warnings) = load_catalog(&path).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(loaded.material("Steel4130").unwrap(), catalog.material("Steel4130").unwrap());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_catalog() {
        let path = temp_path("bad_catalog", "toml");
        fs::write(&path, "[[SRBLIB_NOZZLE_DEFINITION").unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }
}
