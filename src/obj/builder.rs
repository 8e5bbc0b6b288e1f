use std::mem;

use log::debug;
use quickobj_format::{Group, Material, MaterialSwitch, Mesh, Object, Vec2, Vec3, Vertex};

use super::face::{self, FaceRef};
use crate::error::{FaceRefError, Pool};

/// Incrementally assembles a [`Mesh`] from `.obj` directives.
///
/// The current object and group stay out of the mesh until a later `o`/`g` or the end
/// of the file closes them, since only then is their index range known.
#[derive(Debug, Default)]
pub(crate) struct MeshBuilder {
    pub(crate) mesh: Mesh,
    pub(crate) curr_object: Object,
    pub(crate) curr_group: Group,
    pub(crate) texcoords: Vec<Vec2>,
    pub(crate) normals: Vec<Vec3>,
    /// vertex slots of the face being read, cleared after every face
    face: Vec<u32>,
}

impl MeshBuilder {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            mesh: Mesh::new(name),
            ..Default::default()
        }
    }

    fn index_len(&self) -> u32 {
        self.mesh.indices.len() as u32
    }

    /// Positions become vertices right away; later face references fill in their
    /// texture coordinate and normal.
    pub(crate) fn push_position(&mut self, position: Vec3) {
        self.mesh.vertices.push(Vertex::from_position(position));
    }

    pub(crate) fn push_texcoord(&mut self, texcoord: Vec2) {
        self.texcoords.push(texcoord);
    }

    pub(crate) fn push_normal(&mut self, normal: Vec3) {
        self.normals.push(normal);
    }

    pub(crate) fn push_materials(&mut self, materials: Vec<Material>) {
        self.mesh.materials.extend(materials);
    }

    pub(crate) fn use_material(&mut self, name: &str) {
        let offset = self.index_len();
        self.curr_group.materials.push(MaterialSwitch {
            offset,
            material: name.into(),
        });
    }

    pub(crate) fn set_object(&mut self, name: &str) {
        let start = self.index_len();

        if self.curr_object.index_count == 0 {
            debug!("Naming object `{}`", name);
            self.curr_object.name = name.into();
            self.curr_group.first_index = start;
            return;
        }

        debug!("Starting object `{}` at index {}", name, start);
        self.finish_group(Group::new("", start));
        let object = mem::replace(&mut self.curr_object, Object::new(name, start));
        self.mesh.objects.push(object);
    }

    pub(crate) fn set_group(&mut self, name: &str) {
        if self.curr_group.index_count == 0 {
            debug!("Naming group `{}`", name);
            self.curr_group.name = name.into();
            return;
        }

        let start = self.index_len();
        debug!("Starting group `{}` at index {}", name, start);
        self.finish_group(Group::new(name, start));
    }

    fn finish_group(&mut self, next: Group) {
        let group = mem::replace(&mut self.curr_group, next);
        if group.index_count > 0 {
            self.curr_object.groups.push(group);
        } else {
            debug!("Dropping empty group `{}`", group.name);
        }
    }

    /// Resolves one reference of the current face and back-fills the attributes it names
    /// into the vertex of its position.
    pub(crate) fn push_face_ref(&mut self, face_ref: &FaceRef) -> Result<(), FaceRefError> {
        let slot = face::resolve(face_ref.position, self.mesh.vertices.len(), Pool::Position)?;
        let index = u32::try_from(slot).map_err(|_| FaceRefError::IndexOverflow(slot))?;

        let texcoord = match face_ref.texcoord {
            Some(i) => Some(self.texcoords[face::resolve(i, self.texcoords.len(), Pool::Texcoord)?]),
            None => None,
        };
        let normal = match face_ref.normal {
            Some(i) => Some(self.normals[face::resolve(i, self.normals.len(), Pool::Normal)?]),
            None => None,
        };

        let vertex = &mut self.mesh.vertices[slot];
        if let Some(texcoord) = texcoord {
            vertex.texcoord = texcoord;
        }
        if let Some(normal) = normal {
            vertex.normal = normal;
        }

        self.face.push(index);
        Ok(())
    }

    /// Emits the current face, fan-triangulating polygons around their first vertex.
    /// Returns the number of references the face had.
    pub(crate) fn end_face(&mut self) -> usize {
        let refs = self.face.len();

        let emitted = if refs <= 3 {
            self.mesh.indices.extend_from_slice(&self.face);
            refs
        } else {
            for i in 1..refs - 1 {
                self.mesh
                    .indices
                    .extend_from_slice(&[self.face[0], self.face[i], self.face[i + 1]]);
            }
            3 * (refs - 2)
        };

        self.curr_group.index_count += emitted as u32;
        self.curr_object.index_count += emitted as u32;
        self.face.clear();

        refs
    }

    pub(crate) fn build(mut self) -> Mesh {
        self.finish_group(Group::default());

        if self.curr_object.index_count > 0 {
            self.mesh.objects.push(self.curr_object);
        } else {
            debug!("Dropping empty object `{}`", self.curr_object.name);
        }

        self.mesh
    }
}
