//! Package manifest lookup.
//!
//! Finds the nearest `package.json` or `Cargo.toml` above a directory and
//! pulls out the package name and version.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::locate::{MarkerKind, find_upward_any};

/// Manifest formats, in lookup order within a single directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum ManifestKind {
    #[strum(serialize = "package.json")]
    Npm,
    #[strum(serialize = "Cargo.toml")]
    Cargo,
}

impl ManifestKind {
    const ALL: [ManifestKind; 2] = [ManifestKind::Npm, ManifestKind::Cargo];

    pub fn file_name(self) -> &'static str {
        self.into()
    }
}

/// Name and version declared by a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

impl PackageInfo {
    /// `name@version`, `name`, or `@version`. `None` when both are missing.
    pub fn label(&self) -> Option<String> {
        let name = self.name.as_deref().filter(|n| !n.is_empty());
        let version = self.version.as_deref().filter(|v| !v.is_empty());
        match (name, version) {
            (None, None) => None,
            (name, version) => Some(format!(
                "{}{}",
                name.unwrap_or_default(),
                version.map(|v| format!("@{v}")).unwrap_or_default()
            )),
        }
    }
}

#[derive(Deserialize)]
struct CargoManifest {
    package: Option<CargoPackage>,
}

/// Cargo allows `version.workspace = true`, so the version isn't always a string.
#[derive(Deserialize)]
struct CargoPackage {
    name: Option<String>,
    version: Option<toml::Value>,
}

/// Nearest manifest at or above `start`. A closer directory always wins.
pub fn find_manifest(start: &Path) -> Option<(ManifestKind, PathBuf)> {
    let names = ManifestKind::ALL.map(ManifestKind::file_name);
    let (name, path) = find_upward_any(start, &names, MarkerKind::File)?;
    let kind = ManifestKind::ALL
        .into_iter()
        .find(|kind| kind.file_name() == name)?;
    Some((kind, path))
}

/// Parse a manifest. Malformed content yields `None`.
pub fn parse_manifest(kind: ManifestKind, content: &str) -> Option<PackageInfo> {
    match kind {
        ManifestKind::Npm => match serde_json::from_str::<PackageInfo>(content) {
            Ok(info) => Some(info),
            Err(e) => {
                log::debug!("Malformed package.json: {}", e);
                None
            }
        },
        ManifestKind::Cargo => match toml::from_str::<CargoManifest>(content) {
            Ok(manifest) => {
                let package = manifest.package?;
                Some(PackageInfo {
                    name: package.name,
                    version: package.version.and_then(|v| v.as_str().map(str::to_string)),
                })
            }
            Err(e) => {
                log::debug!("Malformed Cargo.toml: {}", e);
                None
            }
        },
    }
}

/// Find and read the nearest manifest.
pub fn read_nearest(start: &Path) -> Option<PackageInfo> {
    let (kind, path) = find_manifest(start)?;
    let content = fs::read_to_string(&path)
        .inspect_err(|e| log::debug!("Failed to read {}: {}", path.display(), e))
        .ok()?;
    parse_manifest(kind, &content)
}
