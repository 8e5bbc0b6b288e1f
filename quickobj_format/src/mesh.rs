use crate::{error::Result, material::Material};
use gfx_maths::*;
use serde::{Deserialize, Serialize};
use std::{ops::Range, path::Path};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Vec3,
    pub texcoord: Vec2,
    pub normal: Vec3,
}

impl Vertex {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// Records a `usemtl` directive: every index from `offset` on uses `material`
/// until the next switch or the end of the group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialSwitch {
    pub offset: u32,
    pub material: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub first_index: u32,
    pub index_count: u32,
    pub materials: Vec<MaterialSwitch>,
}

impl Group {
    pub fn new(name: impl Into<String>, first_index: u32) -> Self {
        Self {
            name: name.into(),
            first_index,
            ..Default::default()
        }
    }

    pub fn index_range(&self) -> Range<u32> {
        self.first_index..self.first_index + self.index_count
    }

    /// Splits the group's index range into the sub-ranges covered by each material switch.
    ///
    /// Indices in front of the first switch have no material and are not yielded.
    pub fn material_ranges(&self) -> impl Iterator<Item = (Range<u32>, &str)> + '_ {
        let range = self.index_range();

        self.materials
            .iter()
            .enumerate()
            .filter_map(move |(i, switch)| {
                let end = self
                    .materials
                    .get(i + 1)
                    .map_or(range.end, |next| next.offset.clamp(range.start, range.end));
                let start = switch.offset.clamp(range.start, range.end);

                if start < end {
                    Some((start..end, switch.material.as_str()))
                } else {
                    None
                }
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub name: String,
    pub first_index: u32,
    pub index_count: u32,
    pub groups: Vec<Group>,
}

impl Object {
    pub fn new(name: impl Into<String>, first_index: u32) -> Self {
        Self {
            name: name.into(),
            first_index,
            ..Default::default()
        }
    }

    pub fn index_range(&self) -> Range<u32> {
        self.first_index..self.first_index + self.index_count
    }
}

/// A fully loaded Wavefront model.
///
/// `indices` holds every face as 0-based triangle indices into `vertices`; objects and
/// groups describe consecutive ranges of that buffer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub objects: Vec<Object>,
    pub materials: Vec<Material>,
}

impl Mesh {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Looks up a material by the name used in `usemtl`. Unknown names are not an error.
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Ok(bincode::deserialize::<Mesh>(&bytes)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Mesh::from_bytes(data)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn group_with(first_index: u32, index_count: u32, switches: &[(u32, &str)]) -> Group {
        Group {
            name: "g".into(),
            first_index,
            index_count,
            materials: switches
                .iter()
                .map(|(offset, material)| MaterialSwitch {
                    offset: *offset,
                    material: material.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_material_ranges() {
        let group = group_with(6, 12, &[(6, "red"), (12, "blue")]);
        let ranges: Vec<_> = group.material_ranges().collect();

        assert_eq!(ranges, vec![(6..12, "red"), (12..18, "blue")]);
    }

    #[test]
    fn test_material_ranges_skips_empty_switches() {
        let group = group_with(0, 6, &[(0, "red"), (0, "blue"), (6, "green")]);
        let ranges: Vec<_> = group.material_ranges().collect();

        assert_eq!(ranges, vec![(0..6, "blue")]);
    }

    #[test]
    fn test_material_lookup() {
        let mut mesh = Mesh::new("cube");
        mesh.materials.push(Material::new("wood"));

        assert!(mesh.material("wood").is_some());
        assert!(mesh.material("stone").is_none());
    }

    #[test]
    fn test_serialize() -> Result<()> {
        let mut mesh = Mesh::new("triangle");
        mesh.vertices = vec![
            Vertex::from_position(Vec3::new(0.0, 0.0, 0.0)),
            Vertex::from_position(Vec3::new(1.0, 0.0, 0.0)),
            Vertex::from_position(Vec3::new(0.0, 1.0, 0.0)),
        ];
        mesh.indices = vec![0, 1, 2];
        mesh.objects.push(Object {
            index_count: 3,
            groups: vec![group_with(0, 3, &[(0, "wood")])],
            ..Object::new("tri", 0)
        });

        let bytes = mesh.to_bytes()?;
        assert_eq!(Mesh::from_bytes(bytes)?, mesh);

        Ok(())
    }
}
