pub mod error;
pub mod material;
pub mod mesh;

pub use error::{FormatError, Result};
pub use material::Material;
pub use mesh::{Group, MaterialSwitch, Mesh, Object, Vertex};

pub use gfx_maths::{Vec2, Vec3};
