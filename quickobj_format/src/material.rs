use gfx_maths::*;
use serde::{Deserialize, Serialize};

/// A single `newmtl` record of a Wavefront `.mtl` file.
///
/// Map fields hold the path exactly as it appears in the material file, except
/// `alpha_map` which is prefixed with the directory of the material file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,

    /// `Ka`
    pub ambient: Vec3,
    /// `Kd`
    pub diffuse: Vec3,
    /// `Ks`
    pub specular: Vec3,
    /// `Ns`
    pub specular_exponent: f32,
    /// `Ni`
    pub optical_density: f32,
    /// `d`
    pub dissolve: f32,
    /// `illum`
    pub illumination: i32,

    pub ambient_map: String,
    pub diffuse_map: String,
    pub specular_map: String,
    pub specular_highlight_map: String,
    pub alpha_map: String,
    pub bump_map: String,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
