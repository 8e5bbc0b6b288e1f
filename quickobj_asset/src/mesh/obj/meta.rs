use anyhow::{Context, Result};
use quickobj::LoadOptions;
use serde::Deserialize;
use std::path::Path;

/// Per-asset import settings, read from `<file>.toml` or a folder wide `obj.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct ObjMeta {
    /// negate the x, y or z component of every position and normal
    pub(crate) flip_axis: [bool; 3],
    pub(crate) load_materials: bool,
}

impl Default for ObjMeta {
    fn default() -> Self {
        Self {
            flip_axis: [false; 3],
            load_materials: true,
        }
    }
}

impl ObjMeta {
    pub(crate) fn parse(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        let meta: Self = toml::from_slice(&data)
            .with_context(|| format!("Invalid meta file: {}", path.display()))?;
        Ok(meta)
    }

    pub(crate) fn load_options(&self) -> LoadOptions {
        LoadOptions {
            load_materials: self.load_materials,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_partial_meta() -> Result<(), toml::de::Error> {
        let meta: ObjMeta = toml::from_str("flip_axis = [false, false, true]")?;

        assert_eq!(
            meta,
            ObjMeta {
                flip_axis: [false, false, true],
                load_materials: true,
            }
        );
        Ok(())
    }

    #[test]
    fn test_empty_meta() -> Result<(), toml::de::Error> {
        let meta: ObjMeta = toml::from_str("")?;

        assert_eq!(meta, ObjMeta::default());
        assert!(meta.load_options().load_materials);
        Ok(())
    }
}
