mod builder;
mod face;
mod parser;

use std::{fs, path::Path};

use log::info;
use quickobj_format::Mesh;
use serde::Deserialize;

use crate::{
    error::{LoadError, Parsed, Result},
    path::{has_extension, normalize},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Follow `mtllib` directives and load the referenced `.mtl` files.
    pub load_materials: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            load_materials: true,
        }
    }
}

/// Loads `.obj` files into [`Mesh`]es.
///
/// Every call starts from empty pools, so one loader can be reused for any number of files.
#[derive(Debug, Clone, Default)]
pub struct ObjLoader {
    options: LoadOptions,
}

impl ObjLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Parsed<Mesh>> {
        let path = normalize(&path.as_ref().to_string_lossy());

        if !has_extension(&path, "obj") {
            return Err(LoadError::InvalidExtension {
                path,
                expected: "obj",
            });
        }

        let content = fs::read(&path).map_err(|err| LoadError::from_io(&path, err))?;
        self.parse(&content, &path)
    }

    /// Parses `.obj` content that is already in memory. `path` names the mesh and is the
    /// base `mtllib` directives are resolved against.
    pub fn parse(&self, content: &[u8], path: &str) -> Result<Parsed<Mesh>> {
        let path = normalize(path);
        info!("Loading mesh: {}", path);

        let content = String::from_utf8_lossy(content);
        let parsed = parser::parse(&content, &path, &self.options)?;

        let mesh = &parsed.value;
        info!(
            "Loaded mesh `{}`: {} vertices, {} triangles, {} objects, {} materials, {} warnings",
            mesh.name,
            mesh.vertices.len(),
            mesh.triangle_count(),
            mesh.objects.len(),
            mesh.materials.len(),
            parsed.warnings.len()
        );

        Ok(parsed)
    }
}

pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Parsed<Mesh>> {
    ObjLoader::default().load(path)
}

pub fn parse_obj(content: &[u8], path: &str) -> Result<Parsed<Mesh>> {
    ObjLoader::default().parse(content, path)
}
