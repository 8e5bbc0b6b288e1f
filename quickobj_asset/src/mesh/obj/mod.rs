mod meta;

use anyhow::{Context, Result};
use log::{info, warn};
use quickobj::ObjLoader;
use quickobj_format::Mesh;
use std::path::Path;

use crate::utils;

use self::meta::ObjMeta;

fn load(path: &Path, meta: &ObjMeta) -> Result<Mesh> {
    let parsed = ObjLoader::new(meta.load_options())
        .load(path)
        .with_context(|| format!("Could not load mesh: {}", path.display()))?;

    if !parsed.warnings.is_empty() {
        warn!(
            "`{}` loaded with {} warning(s)",
            path.display(),
            parsed.warnings.len()
        );
    }

    let mut mesh = parsed.value;
    flip_axis(&mut mesh, meta.flip_axis);
    Ok(mesh)
}

// invert positions and normals along the flagged axes
fn flip_axis(mesh: &mut Mesh, flip: [bool; 3]) {
    if !flip.contains(&true) {
        return;
    }

    let sign = |axis: usize| -> f32 { if flip[axis] { -1.0 } else { 1.0 } };
    let (x, y, z) = (sign(0), sign(1), sign(2));

    for vertex in &mut mesh.vertices {
        vertex.position.x *= x;
        vertex.position.y *= y;
        vertex.position.z *= z;
        vertex.normal.x *= x;
        vertex.normal.y *= y;
        vertex.normal.z *= z;
    }
}

fn save(path: &Path, output_dir: &Path, mesh: &Mesh) -> Result<()> {
    let data = mesh.to_bytes().context("Could not serialize Mesh")?;
    let file_stem = utils::file_stem(path)?;
    let target = utils::combine_path(output_dir, file_stem, "qom");
    utils::write_file(&target, &data)?;
    info!("Wrote `{}`", target.display());
    Ok(())
}

/// Parse meta from file called `file.toml` or alternatively from folder scoped meta file named `obj.toml` or else use default meta
fn parse_meta(path: &Path) -> Result<ObjMeta> {
    let dir = path
        .parent()
        .with_context(|| format!("Path terminates in root or prefix: {}", path.display()))?;
    let file_stem = utils::file_stem(path)?;

    let own = utils::combine_path(dir, file_stem, "toml");
    if own.is_file() {
        return ObjMeta::parse(&own);
    }

    let folder = utils::combine_path(dir, "obj", "toml");
    if folder.is_file() {
        return ObjMeta::parse(&folder);
    }

    Ok(ObjMeta::default())
}

pub(crate) fn process(path: &Path, output_dir: &Path) -> Result<()> {
    info!("Processing Wavefront `.obj`-file: `{}`", path.display());
    let meta = parse_meta(path)?;
    let mesh = load(path, &meta)?;
    save(path, output_dir, &mesh)
}
