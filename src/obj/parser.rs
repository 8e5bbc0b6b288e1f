use log::{debug, trace};
use quickobj_format::Mesh;

use super::{builder::MeshBuilder, face::FaceRef, LoadOptions};
use crate::{
    error::{LoadError, Parsed, Result, Warning},
    mtl, parse,
    path::{file_stem, resolve_sibling},
    tokenizer::{fields, Line, Lines},
};

const UNNAMED: &str = "unnamed";

// parses wavefront obj (https://en.wikipedia.org/wiki/Wavefront_.obj_file)
// `path` must already be normalized; it names the mesh and anchors `mtllib` paths
pub(crate) fn parse(content: &str, path: &str, options: &LoadOptions) -> Result<Parsed<Mesh>> {
    let mut builder = MeshBuilder::new(file_stem(path));
    let mut warnings = Vec::new();

    for line in Lines::new(content) {
        trace!("Parsing: {:?}", line);
        parse_line(&line, path, options, &mut builder, &mut warnings)?;
    }

    Ok(Parsed {
        value: builder.build(),
        warnings,
    })
}

fn parse_line(
    line: &Line,
    path: &str,
    options: &LoadOptions,
    builder: &mut MeshBuilder,
    warnings: &mut Vec<Warning>,
) -> Result<()> {
    let number = line.number;
    let payload = line.payload;

    match line.keyword {
        // vertex
        "v" => builder.push_position(parse::vec3(fields(payload), number, warnings)),
        // texture coordinates
        "vt" => builder.push_texcoord(parse::vec2(fields(payload), number, warnings)),
        // vertex normals
        "vn" => builder.push_normal(parse::vec3(fields(payload), number, warnings)),
        "f" => parse_face(number, payload, builder, warnings)?,
        // object
        "o" => builder.set_object(name(payload)),
        // group
        "g" => builder.set_group(name(payload)),
        "usemtl" => builder.use_material(payload.trim_end()),
        "mtllib" => load_library(number, payload, path, options, builder, warnings),
        keyword => debug!("Ignoring unsupported keyword `{}` on line {}", keyword, number),
    };

    Ok(())
}

fn name(payload: &str) -> &str {
    match payload.trim_end() {
        "" => UNNAMED,
        name => name,
    }
}

fn parse_face(
    number: usize,
    payload: &str,
    builder: &mut MeshBuilder,
    warnings: &mut Vec<Warning>,
) -> Result<()> {
    for token in fields(payload) {
        FaceRef::parse(token)
            .and_then(|face_ref| builder.push_face_ref(&face_ref))
            .map_err(|reason| LoadError::MalformedFaceReference {
                line: number,
                token: token.into(),
                reason,
            })?;
    }

    let refs = builder.end_face();
    if refs < 3 {
        parse::report(warnings, Warning::DegenerateFace { line: number, refs });
    }

    Ok(())
}

// a broken material library never fails the mesh
fn load_library(
    number: usize,
    payload: &str,
    path: &str,
    options: &LoadOptions,
    builder: &mut MeshBuilder,
    warnings: &mut Vec<Warning>,
) {
    let library = resolve_sibling(path, payload.trim_end());

    if !options.load_materials {
        debug!("Skipping material library `{}`", library);
        return;
    }

    match mtl::load_mtl(&library) {
        Ok(parsed) => {
            warnings.extend(parsed.warnings.into_iter().map(|warning| {
                Warning::InMaterialLibrary {
                    path: library.clone(),
                    warning: Box::new(warning),
                }
            }));
            builder.push_materials(parsed.value);
        }
        Err(err) => parse::report(
            warnings,
            Warning::MaterialLibrary {
                line: number,
                path: library,
                reason: err.to_string(),
            },
        ),
    }
}
