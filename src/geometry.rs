use crate::rectangle::Rect;
use crate::vec2::Vec2;
use crate::vec3::Vec3;

/// Below this the projected triangle has no area. Screen positions are whole
/// pixels so any real triangle has |cz| >= 1.
pub const DEGENERATE_EPSILON: f32 = 1e-2;

/// Weights returned for a degenerate triangle; always rejected.
pub const REJECTED: Vec3 = Vec3::new(-1.0, 1.0, 1.0);

/// Orthographic mapping of a model-space vertex in [-1, 1]^3 to pixel
/// coordinates. x and y are rounded to the nearest pixel; z passes through.
#[inline(always)]
pub fn world_to_screen(v: Vec3, width: u32, height: u32) -> Vec3 {
    Vec3 {
        x: ((v.x + 1.0) * width as f32 / 2.0).round(),
        y: ((v.y + 1.0) * height as f32 / 2.0).round(),
        z: v.z,
    }
}

/// Scale a normalized texture coordinate into texel units.
#[inline(always)]
pub fn texture_to_texel(t: Vec2, width: u32, height: u32) -> Vec2 {
    Vec2 { x: t.x * width as f32, y: t.y * height as f32 }
}

/// Barycentric weights `(u, v, w)` of `p` against the x/y projection of
/// `a`, `b`, `c`, so that `p = u*a + v*b + w*c`. A degenerate triangle
/// yields [`REJECTED`].
#[inline(always)]
pub fn barycentric(a: Vec3, b: Vec3, c: Vec3, p: Vec3) -> Vec3 {
    let sx = Vec3::new(c.x - a.x, b.x - a.x, a.x - p.x);
    let sy = Vec3::new(c.y - a.y, b.y - a.y, a.y - p.y);
    let u = sx.cross(sy);

    if u.z.abs() > DEGENERATE_EPSILON {
        Vec3::new(1.0 - (u.x + u.y) / u.z, u.y / u.z, u.x / u.z)
    } else {
        REJECTED
    }
}

/// True when every weight is non-negative. Points on an edge are inside.
#[inline(always)]
pub fn is_inside(weights: Vec3) -> bool {
    weights.x >= 0.0 && weights.y >= 0.0 && weights.z >= 0.0
}

/// Pixel box spanned by `points`, clamped to `bounds`. `None` when the
/// triangle lies entirely outside, or when a coordinate is not finite.
pub fn bounding_box(points: &[Vec3; 3], bounds: &Rect) -> Option<Rect> {
    if bounds.is_empty() || points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return None;
    }
    let min_x = points[0].x.min(points[1].x).min(points[2].x);
    let min_y = points[0].y.min(points[1].y).min(points[2].y);
    let max_x = points[0].x.max(points[1].x).max(points[2].x);
    let max_y = points[0].y.max(points[1].y).max(points[2].y);

    // Only pixels whose integer coordinate falls inside the triangle's span
    // can pass the barycentric test.
    let lo_x = min_x.ceil();
    let lo_y = min_y.ceil();
    let hi_x = max_x.floor();
    let hi_y = max_y.floor();
    if hi_x < bounds.min_x as f32
        || hi_y < bounds.min_y as f32
        || lo_x >= bounds.max_x as f32
        || lo_y >= bounds.max_y as f32
        || lo_x > hi_x
        || lo_y > hi_y
    {
        return None;
    }

    Some(Rect {
        min_x: (lo_x.max(0.0) as u32).max(bounds.min_x),
        min_y: (lo_y.max(0.0) as u32).max(bounds.min_y),
        max_x: (hi_x as u32).saturating_add(1).min(bounds.max_x),
        max_y: (hi_y as u32).saturating_add(1).min(bounds.max_y),
    })
}
