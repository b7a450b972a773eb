use crate::geometry::DEGENERATE_EPSILON;
use crate::vec2::Vec2;
use crate::vec3::Vec3;

/// One triangle with its per-vertex attributes. Slot `i` of every array
/// belongs to the same mesh vertex.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    /// Screen space once projected; `z` is only an ordering key.
    pub positions: [Vec3; 3],
    /// Texel units of the bound texture once projected.
    pub texcoords: [Vec2; 3],
    pub normals: [Vec3; 3],
}

impl Triangle {
    /// Signed area of the x/y projection, twice over. Zero for degenerate
    /// triangles.
    pub fn doubled_area(&self) -> f32 {
        let [a, b, c] = self.positions;
        (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
    }

    /// No projected area; the barycentric solver rejects every point of it.
    pub fn is_degenerate(&self) -> bool {
        !(self.doubled_area().abs() > DEGENERATE_EPSILON)
    }
}
