//! `winding init`: manifest scaffolding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::manifest::{WindingManifest, MANIFEST_FILE};

/// Write `winding.toml` into `dir`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let path = write_manifest(dir, force)?;
    println!("Created {}", path.display());
    println!("  dataset:  {}", WindingManifest::default().dataset_path(dir).display());
    Ok(())
}

pub(crate) fn write_manifest(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(MANIFEST_FILE);
    if path.exists() && !force {
        bail!("'{}' already exists (use --force to overwrite)", path.display());
    }
    fs::write(&path, WindingManifest::template()).context("writing winding.toml")?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_valid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path(), false).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let manifest = WindingManifest::from_str(&content).unwrap();
        assert_eq!(manifest.voltage(), 380.0);
    }

    #[test]
    fn init_refuses_existing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "").unwrap();

        let result = write_manifest(dir.path(), false);
        assert!(result.unwrap_err().to_string().contains("already exists"));
    }

    #[test]
    fn init_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "garbage").unwrap();

        write_manifest(dir.path(), true).unwrap();
        let content = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        assert!(WindingManifest::from_str(&content).is_ok());
    }
}
