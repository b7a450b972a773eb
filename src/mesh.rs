use crate::vec2::Vec2;
use crate::vec3::Vec3;

/// Read-only access to a triangulated mesh. `slot` is always in `0..3`.
pub trait Mesh {
    fn face_count(&self) -> usize;

    /// Model-space position, roughly within [-1, 1] per axis.
    fn position(&self, face: usize, slot: usize) -> Vec3;

    /// Normalized texture coordinate in [0, 1]^2.
    fn texcoord(&self, face: usize, slot: usize) -> Vec2;

    fn normal(&self, face: usize, slot: usize) -> Vec3;
}
