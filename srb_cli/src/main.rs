//! # SRB Sizing CLI
//!
//! Terminal front-end for casing sizing.
//!
//! ```text
//! srb_cli [catalog.toml]
//! ```
//!
//! Without a catalog path the built-in presets are used. Skipped catalog
//! sections are listed before the prompts.

use std::io::{self, BufRead, Write};
use std::path::Path;

use srb_core::calculations::casing::{calculate, CasingInput};
use srb_core::catalog::Catalog;
use srb_core::file_io::load_catalog;
use srb_core::units::{CubicMeters, Kilograms, Liters, Megapascals, Meters, Millimeters, Pascals, Psi};

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    prompt_line(prompt).unwrap_or_else(|| default.to_string())
}

fn open_catalog() -> Result<Catalog, String> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(Catalog::with_defaults());
    };

    let (catalog, warnings) = load_catalog(Path::new(&path)).map_err(|e| e.to_string())?;
    println!("Loaded catalog {} ({} entries)", path, catalog.len());
    for warning in &warnings {
        println!("  [WARN] {}", warning);
    }
    println!();
    Ok(catalog)
}

fn main() {
    println!("SRB Sizing CLI - Solid Rocket Motor Casing Calculator");
    println!("=====================================================");
    println!();

    let catalog = match open_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let names = catalog.material_names();
    if names.is_empty() {
        eprintln!("Error: catalog has no casing materials");
        std::process::exit(1);
    }
    println!("Casing materials: {}", names.join(", "));
    println!();

    let default_material = if names.contains(&"Steel4130") { "Steel4130" } else { names[0] };
    let material = prompt_string(&format!("Material [{}]: ", default_material), default_material);
    let length_m = prompt_f64("Overall length incl. end caps (m) [2.0]: ", 2.0);
    let diameter_mm = prompt_f64("Outer diameter (mm) [500]: ", 500.0);
    let mawp_mpa = prompt_f64("MAWP (MPa) [5.0]: ", 5.0);

    let diameter: Meters = Millimeters(diameter_mm).into();
    let mawp: Pascals = Megapascals(mawp_mpa).into();
    let mawp_psi: Psi = mawp.into();

    let input = CasingInput {
        label: "CLI-Casing".to_string(),
        material,
        cylinder_length_m: length_m,
        diameter_m: diameter.value(),
        mawp_pa: mawp.value(),
    };

    println!();
    match calculate(&input, &catalog) {
        Ok(result) => {
            let wall: Millimeters = Meters(result.thickness_m).into();
            let inner_id: Millimeters = Meters(result.inner_diameter_m).into();
            let inner: Liters = CubicMeters(result.inner_volume_m3).into();
            let outer: Liters = CubicMeters(result.outer_volume_m3).into();
            let wall_vol: Liters = CubicMeters(result.wall_volume_m3).into();
            let mass = Kilograms(result.mass_kg);

            println!("═══════════════════════════════════════");
            println!("  CASING SIZING RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Material: {}", input.material);
            println!("  Length:   {:.3} m", input.cylinder_length_m);
            println!("  Diameter: {:.1} mm", diameter_mm);
            println!("  MAWP:     {:.2} MPa ({:.0} psi)", mawp_mpa, mawp_psi.value());
            println!();
            println!("Wall:");
            println!("  t  = {:.3} mm", wall.value());
            println!("  ID = {:.1} mm", inner_id.value());
            println!();
            println!("Volumes:");
            println!("  Inner = {:.3} L", inner.value());
            println!("  Outer = {:.3} L", outer.value());
            println!("  Wall  = {:.3} L", wall_vol.value());
            println!();
            println!("═══════════════════════════════════════");
            println!("  MASS: {:.2} kg {}", mass.value(), status_icon(result.is_clean()));
            println!("═══════════════════════════════════════");
            for note in &result.notes {
                println!("  [NOTE] {}", note);
            }

            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}

fn status_icon(clean: bool) -> &'static str {
    if clean { "[OK]" } else { "[CHECK NOTES]" }
}
