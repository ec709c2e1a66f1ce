//! Wavefront OBJ export of the visible planet faces.
//!
//! Each face becomes one `o` object. Vertex colours use the common
//! `v x y z r g b` extension so the material colour survives the export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use glam::Vec3;
use terra_cubesphere::Direction;
use terra_mesh::{Colour, FaceMeshPayload, MeshSink};

/// Last state received for one face.
#[derive(Clone, Debug, Default)]
struct ExportedFace {
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
    visible: bool,
    colour: Colour,
}

/// Totals of one export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObjStats {
    /// Objects written, one per visible face.
    pub faces: usize,
    /// `v` lines written.
    pub vertices: usize,
    /// `f` lines written.
    pub triangles: usize,
}

/// A [`MeshSink`] that keeps a copy of every published face for export.
#[derive(Clone, Debug, Default)]
pub struct ObjSink {
    faces: [ExportedFace; 6],
}

impl ObjSink {
    /// An empty sink holding no faces.
    pub fn new() -> Self {
        Self::default()
    }

    /// What [`write_obj`](Self::write_obj) would write, without writing it.
    pub fn stats(&self) -> ObjStats {
        self.exported_faces()
            .fold(ObjStats::default(), |mut stats, face| {
                stats.faces += 1;
                stats.vertices += face.vertices.len();
                stats.triangles += face.indices.len() / 3;
                stats
            })
    }

    fn exported_faces(&self) -> impl Iterator<Item = &ExportedFace> {
        self.faces
            .iter()
            .filter(|face| face.visible && !face.vertices.is_empty())
    }

    /// Write visible faces with geometry as OBJ text.
    pub fn write_obj<W: Write>(&self, out: &mut W) -> io::Result<ObjStats> {
        let mut stats = ObjStats::default();
        writeln!(out, "# terra cube-sphere planet")?;

        for (direction, face) in Direction::ALL.into_iter().zip(&self.faces) {
            if !face.visible || face.vertices.is_empty() {
                continue;
            }

            // OBJ indices are 1-based and global across objects.
            let base = stats.vertices as u32 + 1;
            let [r, g, b] = face.colour.to_array();

            writeln!(out, "o {}", direction.label())?;
            for v in &face.vertices {
                writeln!(out, "v {} {} {} {r} {g} {b}", v.x, v.y, v.z)?;
            }
            for n in &face.normals {
                writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
            }
            for tri in face.indices.chunks_exact(3) {
                let (a, b, c) = (tri[0] + base, tri[1] + base, tri[2] + base);
                writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
            }

            stats.faces += 1;
            stats.vertices += face.vertices.len();
            stats.triangles += face.indices.len() / 3;
        }
        Ok(stats)
    }

    /// Write the OBJ file at `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> io::Result<ObjStats> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(path)?);
        let stats = self.write_obj(&mut writer)?;
        writer.flush()?;
        Ok(stats)
    }
}

impl MeshSink for ObjSink {
    fn publish(&mut self, payload: FaceMeshPayload<'_>) {
        let face = &mut self.faces[payload.direction.index()];
        face.vertices.clear();
        face.vertices.extend_from_slice(payload.vertices);
        face.normals.clear();
        face.normals.extend_from_slice(payload.normals);
        face.indices.clear();
        face.indices.extend_from_slice(payload.indices);
    }

    fn set_visible(&mut self, direction: Direction, visible: bool) {
        self.faces[direction.index()].visible = visible;
    }

    fn set_colour(&mut self, direction: Direction, colour: Colour) {
        self.faces[direction.index()].colour = colour;
    }
}
