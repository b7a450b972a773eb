use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use crate::vec2::Vec2;
use crate::vec3::Vec3;

/// Zero-based indices of one face corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FaceVertex {
    pub v: usize,
    pub vt: Option<usize>,
    pub vn: Option<usize>,
}

/// Triangulated Wavefront OBJ mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    positions: Vec<Vec3>,
    texcoords: Vec<Vec2>,
    normals: Vec<Vec3>,
    faces: Vec<[FaceVertex; 3]>,
}

impl Model {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let model = Self::parse(BufReader::new(file)).map_err(|err| match err {
            Error::Io { source, .. } => Error::Io { path: path.to_path_buf(), source },
            other => other,
        })?;
        info!(
            "loaded {}: {} vertices, {} texcoords, {} normals, {} triangles",
            path.display(),
            model.positions.len(),
            model.texcoords.len(),
            model.normals.len(),
            model.faces.len()
        );
        Ok(model)
    }

    /// Parse OBJ text. Polygons with more than three corners are fan
    /// triangulated; unknown statements are ignored.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut model = Model::default();
        let mut skipped_faces = 0usize;

        for (n, line) in reader.lines().enumerate() {
            let line_no = n + 1;
            let line = line.map_err(|source| Error::Io { path: Default::default(), source })?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() || tokens[0].starts_with('#') {
                continue
            }

            match tokens[0] {
                "v" => {
                    let [x, y, z] = parse_floats(&tokens, line_no)?;
                    model.positions.push(Vec3 { x, y, z })
                }
                "vt" => {
                    let [u, v] = parse_floats(&tokens, line_no)?;
                    model.texcoords.push(Vec2 { x: u, y: v })
                }
                "vn" => {
                    let [x, y, z] = parse_floats(&tokens, line_no)?;
                    model.normals.push(Vec3 { x, y, z })
                }
                "f" => {
                    let corners = tokens[1..]
                        .iter()
                        .map(|part| model.parse_face_vertex(part, line_no))
                        .collect::<Result<Vec<_>>>()?;
                    if corners.len() < 3 {
                        skipped_faces += 1;
                        continue
                    }
                    for i in 1..corners.len() - 1 {
                        model.faces.push([corners[0], corners[i], corners[i + 1]]);
                    }
                }
                other => debug!("line {line_no}: ignoring '{other}' statement"),
            }
        }

        if skipped_faces > 0 {
            warn!("skipped {skipped_faces} faces with fewer than three corners");
        }
        model.validate()?;
        Ok(model)
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn faces(&self) -> &[[FaceVertex; 3]] {
        &self.faces
    }

    fn parse_face_vertex(&self, s: &str, line: usize) -> Result<FaceVertex> {
        let mut parts = s.split('/');
        let v = match parts.next() {
            Some(p) if !p.is_empty() => resolve_index(p, self.positions.len(), line)?,
            _ => return Err(parse_error(line, format!("missing vertex index in '{s}'"))),
        };
        let vt = match parts.next() {
            Some("") | None => None,
            Some(p) => Some(resolve_index(p, self.texcoords.len(), line)?),
        };
        let vn = match parts.next() {
            Some("") | None => None,
            Some(p) => Some(resolve_index(p, self.normals.len(), line)?),
        };
        Ok(FaceVertex { v, vt, vn })
    }

    fn validate(&self) -> Result<()> {
        for (face, corners) in self.faces.iter().enumerate() {
            for corner in corners {
                check_index(face, "vertex", Some(corner.v), self.positions.len())?;
                check_index(face, "texcoord", corner.vt, self.texcoords.len())?;
                check_index(face, "normal", corner.vn, self.normals.len())?;
            }
        }
        Ok(())
    }
}

impl Mesh for Model {
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn position(&self, face: usize, slot: usize) -> Vec3 {
        self.positions[self.faces[face][slot].v]
    }

    /// Corners without a `vt` index read (0, 0).
    fn texcoord(&self, face: usize, slot: usize) -> Vec2 {
        self.faces[face][slot].vt.map(|i| self.texcoords[i]).unwrap_or_default()
    }

    /// Corners without a `vn` index use the face's geometric normal.
    fn normal(&self, face: usize, slot: usize) -> Vec3 {
        match self.faces[face][slot].vn {
            Some(i) => self.normals[i],
            None => {
                let [a, b, c] = self.faces[face].map(|corner| self.positions[corner.v]);
                (b - a).cross(c - a).normalize()
            }
        }
    }
}

fn parse_error(line: usize, message: String) -> Error {
    Error::Parse { line, message }
}

fn parse_floats<const N: usize>(tokens: &[&str], line: usize) -> Result<[f32; N]> {
    let mut out = [0.0; N];
    for (i, slot) in out.iter_mut().enumerate() {
        let token = tokens
            .get(i + 1)
            .ok_or_else(|| parse_error(line, format!("'{}' needs {} components", tokens[0], N)))?;
        *slot = token
            .parse()
            .map_err(|e| parse_error(line, format!("bad number '{token}': {e}")))?;
    }
    Ok(out)
}

/// OBJ indices are one-based; negative values count back from the most
/// recently defined element.
fn resolve_index(s: &str, defined: usize, line: usize) -> Result<usize> {
    let raw: i64 = s.parse().map_err(|e| parse_error(line, format!("bad index '{s}': {e}")))?;
    match raw {
        0 => Err(parse_error(line, "index 0 is not valid in OBJ".to_string())),
        i if i > 0 => Ok(i as usize - 1),
        i => {
            let back = i.unsigned_abs() as usize;
            defined
                .checked_sub(back)
                .ok_or_else(|| parse_error(line, format!("relative index {i} reaches before the first element")))
        }
    }
}

fn check_index(face: usize, kind: &'static str, index: Option<usize>, count: usize) -> Result<()> {
    match index {
        Some(index) if index >= count => Err(Error::IndexOutOfRange { face, kind, index, count }),
        _ => Ok(()),
    }
}
