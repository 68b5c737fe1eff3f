//! # Material Module
//!
//! The ordered list of materials voxels resolve against. The catalog length also
//! bounds the material noise during generation, so every occupied voxel decodes to
//! an index inside the catalog.

use serde::{Deserialize, Serialize};

use super::VoxelId;
use crate::engine_state::error::{EngineError, Result};

/// A single material the renderer can draw voxel faces with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    /// Human readable name, used in logs and by render collaborators.
    pub name: String,
    /// Base colour (linear RGB) for collaborators without textures.
    #[serde(default = "MaterialEntry::default_color")]
    pub color: [f32; 3],
}

impl MaterialEntry {
    /// Creates a new material entry.
    pub fn new(name: impl Into<String>, color: [f32; 3]) -> Self {
        MaterialEntry {
            name: name.into(),
            color,
        }
    }

    fn default_color() -> [f32; 3] {
        [1.0, 1.0, 1.0]
    }
}

/// Ordered, non-empty collection of [`MaterialEntry`] values.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialCatalog {
    entries: Vec<MaterialEntry>,
}

impl MaterialCatalog {
    /// Creates a catalog from its entries.
    ///
    /// # Errors
    /// Fails when the list is empty or holds more materials than a [`VoxelId`] can name.
    pub fn new(entries: Vec<MaterialEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(EngineError::InvalidMaterialCatalog(
                "at least one material is required".to_string(),
            ));
        }
        if entries.len() > VoxelId::MAX as usize {
            return Err(EngineError::InvalidMaterialCatalog(format!(
                "{} materials exceed the limit of {}",
                entries.len(),
                VoxelId::MAX
            )));
        }

        Ok(MaterialCatalog { entries })
    }

    /// Number of materials in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for parity with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the material for a bucket's material index.
    ///
    /// # Errors
    /// Returns [`EngineError::MaterialIndexOutOfRange`] instead of reading past the end.
    pub fn get(&self, index: usize) -> Result<&MaterialEntry> {
        self.entries
            .get(index)
            .ok_or(EngineError::MaterialIndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(len: usize) -> Result<MaterialCatalog> {
        MaterialCatalog::new(
            (0..len)
                .map(|i| MaterialEntry::new(format!("m{i}"), [0.0; 3]))
                .collect(),
        )
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            catalog(0),
            Err(EngineError::InvalidMaterialCatalog(_))
        ));
    }

    #[test]
    fn oversized_catalog_is_rejected() {
        assert!(catalog(VoxelId::MAX as usize).is_ok());
        assert!(catalog(VoxelId::MAX as usize + 1).is_err());
    }

    #[test]
    fn lookup_is_guarded() {
        let catalog = catalog(2).unwrap();
        assert_eq!(catalog.get(1).unwrap().name, "m1");
        assert!(matches!(
            catalog.get(2),
            Err(EngineError::MaterialIndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn missing_color_defaults_to_white() {
        let entry: MaterialEntry = serde_json::from_str(r#"{ "name": "snow" }"#).unwrap();
        assert_eq!(entry.color, [1.0, 1.0, 1.0]);
    }
}
