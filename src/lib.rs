//! Loads Wavefront `.obj` models and their `.mtl` material libraries into a flat,
//! render-ready [`Mesh`]: one vertex pool, one triangle index buffer and a hierarchy of
//! objects and groups describing ranges of that buffer.
//!
//! ```no_run
//! let parsed = quickobj::load_obj("assets/models/crate.obj")?;
//! for warning in &parsed.warnings {
//!     eprintln!("{}", warning);
//! }
//! let mesh = parsed.value;
//! println!("{} triangles", mesh.triangle_count());
//! # Ok::<(), quickobj::LoadError>(())
//! ```

pub mod error;
pub mod mtl;
pub mod obj;
pub(crate) mod parse;
pub mod path;
pub mod tokenizer;

pub use error::{FaceRefError, LoadError, Parsed, Pool, Result, Warning};
pub use mtl::{load_mtl, parse_mtl};
pub use obj::{load_obj, parse_obj, LoadOptions, ObjLoader};

pub use quickobj_format::{Group, Material, MaterialSwitch, Mesh, Object, Vec2, Vec3, Vertex};
