//! Parses Wavefront material libraries (`.mtl`).

use std::{fs, mem};

use log::{debug, info, trace};
use quickobj_format::Material;

use crate::{
    error::{LoadError, Parsed, Result, Warning},
    parse,
    path::{has_extension, normalize, resolve_sibling},
    tokenizer::{fields, Line, Lines},
};

pub fn load_mtl(path: &str) -> Result<Parsed<Vec<Material>>> {
    let path = normalize(path);

    if !has_extension(&path, "mtl") {
        return Err(LoadError::InvalidExtension {
            path,
            expected: "mtl",
        });
    }

    let content = fs::read(&path).map_err(|err| LoadError::from_io(&path, err))?;
    info!("Loading materials: {}", path);

    Ok(parse_mtl(&String::from_utf8_lossy(&content), &path))
}

/// `path` is only used to resolve `map_d` next to the material file.
pub fn parse_mtl(content: &str, path: &str) -> Parsed<Vec<Material>> {
    let path = normalize(path);
    let mut list = MaterialList::default();
    let mut warnings = Vec::new();

    for line in Lines::new(content) {
        trace!("Parsing: {:?}", line);
        parse_line(&line, &path, &mut list, &mut warnings);
    }

    let materials = list.finish();
    debug!("Parsed {} materials from `{}`", materials.len(), path);

    Parsed {
        value: materials,
        warnings,
    }
}

/// Collects materials. Directives before the first `newmtl` go to a pending record that
/// the first `newmtl` then names.
#[derive(Debug, Default)]
struct MaterialList {
    materials: Vec<Material>,
    current: Material,
    named: bool,
    touched: bool,
}

impl MaterialList {
    fn start(&mut self, name: &str) {
        if self.named {
            let done = mem::take(&mut self.current);
            self.materials.push(done);
        }
        self.current.name = name.into();
        self.named = true;
        self.touched = true;
    }

    fn current(&mut self) -> &mut Material {
        self.touched = true;
        &mut self.current
    }

    fn finish(mut self) -> Vec<Material> {
        if self.touched {
            self.materials.push(self.current);
        }
        self.materials
    }
}

fn parse_line(line: &Line, path: &str, list: &mut MaterialList, warnings: &mut Vec<Warning>) {
    let number = line.number;
    let payload = line.payload;

    match line.keyword {
        "newmtl" => list.start(match payload.trim_end() {
            "" => "none",
            name => name,
        }),
        keyword @ ("Ka" | "Kd" | "Ks") => {
            let values: Vec<&str> = fields(payload).collect();
            if values.len() != 3 {
                parse::report(
                    warnings,
                    Warning::FieldCount {
                        line: number,
                        keyword: keyword.into(),
                        expected: 3,
                        found: values.len(),
                    },
                );
                return;
            }

            let color = parse::vec3(values.into_iter(), number, warnings);
            let material = list.current();
            match keyword {
                "Ka" => material.ambient = color,
                "Kd" => material.diffuse = color,
                _ => material.specular = color,
            }
        }
        keyword @ ("Ns" | "Ni" | "d") => {
            let value = parse::float(fields(payload).next(), number, warnings);
            let material = list.current();
            match keyword {
                "Ns" => material.specular_exponent = value,
                "Ni" => material.optical_density = value,
                _ => material.dissolve = value,
            }
        }
        "illum" => {
            list.current().illumination = parse::int(fields(payload).next(), number, warnings)
        }
        "map_Ka" => list.current().ambient_map = payload.trim_end().into(),
        "map_Kd" => list.current().diffuse_map = payload.trim_end().into(),
        "map_Ks" => list.current().specular_map = payload.trim_end().into(),
        "map_Ns" => list.current().specular_highlight_map = payload.trim_end().into(),
        // the alpha map is the only map stored relative to the material file
        "map_d" => list.current().alpha_map = resolve_sibling(path, payload.trim_end()),
        "map_bump" | "map_Bump" | "bump" => list.current().bump_map = payload.trim_end().into(),
        keyword => debug!("Ignoring unsupported keyword `{}` on line {}", keyword, number),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickobj_format::Vec3;

    const CRATE: &str = "\
# two materials
newmtl crate
Ka 0.1 0.1 0.1
Kd 0.6 0.4 0.2
Ks 1 1 1
Ns 96.0
Ni 1.45
d 0.75
illum 2
map_Kd crate_diffuse.png
map_Bump crate_normal.png
map_d crate_alpha.png

newmtl glass
Kd 0.9 0.9 1.0
d 0.2
";

    #[test]
    fn test_parse_materials() {
        let parsed = parse_mtl(CRATE, "assets/crate.mtl");
        assert!(parsed.warnings.is_empty());

        let materials = parsed.value;
        assert_eq!(materials.len(), 2);

        let crate_mat = &materials[0];
        assert_eq!(crate_mat.name, "crate");
        assert_eq!(crate_mat.ambient, Vec3::new(0.1, 0.1, 0.1));
        assert_eq!(crate_mat.diffuse, Vec3::new(0.6, 0.4, 0.2));
        assert_eq!(crate_mat.specular, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(crate_mat.specular_exponent, 96.0);
        assert_eq!(crate_mat.optical_density, 1.45);
        assert_eq!(crate_mat.dissolve, 0.75);
        assert_eq!(crate_mat.illumination, 2);
        assert_eq!(crate_mat.bump_map, "crate_normal.png");

        let glass = &materials[1];
        assert_eq!(glass.name, "glass");
        assert_eq!(glass.dissolve, 0.2);
        assert_eq!(glass.ambient, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(glass.diffuse_map, "");
    }

    #[test]
    fn test_only_alpha_map_is_prefixed() {
        let content = "newmtl m\nmap_d foo.png\nmap_Kd foo.png\nmap_Ka foo.png\n";
        let material = &parse_mtl(content, "textures/mat.mtl").value[0];

        assert_eq!(material.alpha_map, "textures/foo.png");
        assert_eq!(material.diffuse_map, "foo.png");
        assert_eq!(material.ambient_map, "foo.png");
    }

    #[test]
    fn test_color_with_wrong_field_count_is_ignored() {
        let parsed = parse_mtl("newmtl m\nKa 1 2\nKd 1 2 3 4\n", "m.mtl");
        let material = &parsed.value[0];

        assert_eq!(material.ambient, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(material.diffuse, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(
            parsed.warnings,
            vec![
                Warning::FieldCount {
                    line: 2,
                    keyword: "Ka".into(),
                    expected: 3,
                    found: 2
                },
                Warning::FieldCount {
                    line: 3,
                    keyword: "Kd".into(),
                    expected: 3,
                    found: 4
                },
            ]
        );
    }

    #[test]
    fn test_malformed_color_keeps_previous_value() {
        let parsed = parse_mtl("newmtl m\nKa 0.5 0.5 0.5\nKa 1 2\n", "m.mtl");

        assert_eq!(parsed.value[0].ambient, Vec3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_pending_record() {
        // properties before the first newmtl belong to the record it names
        let materials = parse_mtl("Ns 10\nnewmtl first\nnewmtl second\n", "m.mtl").value;
        assert_eq!(materials.len(), 2);
        assert_eq!(materials[0].name, "first");
        assert_eq!(materials[0].specular_exponent, 10.0);

        assert!(parse_mtl("# nothing here\n", "m.mtl").value.is_empty());
    }

    #[test]
    fn test_unnamed_material() {
        let materials = parse_mtl("newmtl\nKd 1 1 1\n", "m.mtl").value;
        assert_eq!(materials[0].name, "none");
    }

    #[test]
    fn test_load_mtl_extension() {
        assert!(matches!(
            load_mtl("materials/crate.png"),
            Err(LoadError::InvalidExtension { expected: "mtl", .. })
        ));
        assert!(matches!(
            load_mtl("materials/missing.mtl"),
            Err(LoadError::FileNotFound { .. })
        ));
    }
}
