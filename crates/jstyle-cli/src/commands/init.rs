//! Init command implementation.

use anyhow::{bail, Context, Result};
use jstyle_core::Configuration;
use std::path::{Path, PathBuf};

const TOML_HEADER: &str = "# jstyle configuration
#
# Conventions: \"capitalized-camel\", \"lower-camel\", \"snake-case\".
# Blank line counts of 0 turn the matching check off.

";

/// Runs the init command in the current directory.
pub fn run(force: bool, json: bool) -> Result<()> {
    let path = write_default(Path::new("."), force, json)?;
    let name = path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().into_owned(),
    );

    println!("Created {name}");
    println!("\nNext steps:");
    println!("  1. Edit {name} to configure the checks");
    println!("  2. Run: jstyle check");

    Ok(())
}

/// Writes the default configuration into `dir` and returns its path.
fn write_default(dir: &Path, force: bool, json: bool) -> Result<PathBuf> {
    let (name, content) = if json {
        ("jstyle.json", Configuration::default().to_json()?)
    } else {
        (
            "jstyle.toml",
            format!("{TOML_HEADER}{}", Configuration::default().to_toml()?),
        )
    };
    let path = dir.join(name);

    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
