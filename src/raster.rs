use crate::color::Color;
use crate::geometry::{barycentric, bounding_box, is_inside};
use crate::screen::FrameBuffer;
use crate::texture::Texture;
use crate::triangle::Triangle;
use crate::vec3::Vec3;

/// Single directional light.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Light {
    direction: Vec3,
}

impl Light {
    pub fn new(direction: Vec3) -> Self {
        Self { direction: direction.normalize() }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Two-sided diffuse term, |n . l|, in [0, 1] for any non-zero normal.
    #[inline(always)]
    pub fn intensity(&self, normal: Vec3) -> f32 {
        normal.normalize().dot(self.direction).abs()
    }
}

impl Default for Light {
    fn default() -> Self {
        Self { direction: Vec3::new(0.0, 0.0, -1.0) }
    }
}

/// Fill one screen-space triangle into `target`, returning how many
/// fragments passed the depth test.
///
/// Pixels are visited at integer coordinates inside the triangle's bounding
/// box, clamped to `target.rect`. A fragment is kept only if its depth is
/// strictly greater than the stored one, so on exact ties the earlier
/// triangle stays. Accepted fragments get the three vertex texels blended by
/// the barycentric weights, scaled by the light intensity of the
/// interpolated normal.
pub fn rasterize_triangle(target: &mut FrameBuffer, texture: &Texture, light: &Light, tri: &Triangle) -> usize {
    let Some(bbox) = bounding_box(&tri.positions, &target.rect) else { return 0 };
    let [a, b, c] = tri.positions;
    let [na, nb, nc] = tri.normals;
    // Texture coordinates are constant per vertex, so are their texels
    let texels = tri.texcoords.map(|t| texture.sample(t.x, t.y));

    let mut written = 0;
    for y in bbox.min_y..bbox.max_y {
        for x in bbox.min_x..bbox.max_x {
            let p = Vec3::new(x as f32, y as f32, 0.0);
            let weights = barycentric(a, b, c, p);
            if !is_inside(weights) {
                continue;
            }

            let depth = a.z * weights.x + b.z * weights.y + c.z * weights.z;
            let stored = target.depth_mut(x, y);
            // Also rejects NaN depths
            if !(depth > *stored) {
                continue;
            }
            *stored = depth;

            let base = Color::blend(texels, weights);
            let normal = na * weights.x + nb * weights.y + nc * weights.z;
            let intensity = light.intensity(normal);
            target.set_pixel(x, y, Color::from_vec3(base * intensity));
            written += 1;
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rectangle::Rect;
    use crate::vec2::Vec2;

    const FACING: Vec3 = Vec3::new(0.0, 0.0, -1.0);

    fn flat(points: [(f32, f32); 3], depth: f32, texcoord: Vec2) -> Triangle {
        Triangle {
            positions: points.map(|(x, y)| Vec3::new(x, y, depth)),
            texcoords: [texcoord; 3],
            normals: [FACING; 3],
        }
    }

    fn two_color_texture() -> Texture {
        Texture::from_fn(2, 1, |x, _| if x == 0 { Color::RED } else { Color::new(0, 0, 255) })
    }

    #[test]
    fn light_intensity_is_absolute_cosine() {
        let light = Light::default();
        assert_eq!(light.intensity(Vec3::new(0.0, 0.0, -1.0)), 1.0);
        assert_eq!(light.intensity(Vec3::new(0.0, 0.0, 4.0)), 1.0);
        assert_eq!(light.intensity(Vec3::new(1.0, 0.0, 0.0)), 0.0);
        assert!((light.intensity(Vec3::new(1.0, 0.0, -1.0)) - 0.5f32.sqrt()).abs() < 1e-6);
        assert_eq!(light.intensity(Vec3::default()), 0.0);
        assert_eq!(Light::new(Vec3::new(0.0, 0.0, -5.0)), light);
    }

    #[test]
    fn nearer_triangle_wins_regardless_of_order() {
        let tex = two_color_texture();
        let light = Light::default();
        let near = flat([(0.0, 0.0), (30.0, 0.0), (0.0, 30.0)], 0.9, Vec2::new(0.0, 0.0));
        let far = flat([(0.0, 0.0), (30.0, 0.0), (0.0, 30.0)], 0.1, Vec2::new(1.0, 0.0));

        let mut fb = FrameBuffer::new(32, 32);
        let first = rasterize_triangle(&mut fb, &tex, &light, &near);
        assert!(first > 0);
        assert_eq!(rasterize_triangle(&mut fb, &tex, &light, &far), 0);
        assert_eq!(fb.get_pixel(5, 5), Some(Color::RED));
        assert!((fb.get_depth(5, 5).unwrap() - 0.9).abs() < 1e-6);

        let mut fb = FrameBuffer::new(32, 32);
        rasterize_triangle(&mut fb, &tex, &light, &far);
        assert_eq!(rasterize_triangle(&mut fb, &tex, &light, &near), first);
        assert_eq!(fb.get_pixel(5, 5), Some(Color::RED));
    }

    #[test]
    fn equal_depth_keeps_first_triangle() {
        let tex = two_color_texture();
        let light = Light::default();
        let first = flat([(0.0, 0.0), (20.0, 0.0), (0.0, 20.0)], 0.5, Vec2::new(0.0, 0.0));
        let second = flat([(0.0, 0.0), (20.0, 0.0), (0.0, 20.0)], 0.5, Vec2::new(1.0, 0.0));

        let mut fb = FrameBuffer::new(32, 32);
        rasterize_triangle(&mut fb, &tex, &light, &first);
        assert_eq!(rasterize_triangle(&mut fb, &tex, &light, &second), 0);
        assert_eq!(fb.get_pixel(3, 3), Some(Color::RED));
    }

    #[test]
    fn writes_stay_inside_clamped_bounding_box() {
        let tex = Texture::solid(1, 1, Color::WHITE);
        let tri = flat([(-10.0, 4.0), (12.0, 6.0), (3.0, 40.0)], 0.0, Vec2::default());
        let mut fb = FrameBuffer::new(24, 24);
        let written = rasterize_triangle(&mut fb, &tex, &Light::default(), &tri);
        assert!(written > 0);

        let bbox = Rect { min_x: 0, min_y: 4, max_x: 13, max_y: 24 };
        let mut lit = 0;
        for y in 0..24 {
            for x in 0..24 {
                if fb.get_pixel(x, y) == Some(Color::WHITE) {
                    assert!(bbox.contains(x, y), "({x}, {y}) written outside {bbox:?}");
                    lit += 1;
                }
            }
        }
        assert_eq!(lit, written);
    }

    #[test]
    fn degenerate_triangle_draws_nothing() {
        let tex = Texture::solid(1, 1, Color::WHITE);
        let line = flat([(0.0, 0.0), (10.0, 10.0), (20.0, 20.0)], 1.0, Vec2::default());
        let point = flat([(5.0, 5.0); 3], 1.0, Vec2::default());
        let mut fb = FrameBuffer::new(32, 32);
        assert_eq!(rasterize_triangle(&mut fb, &tex, &Light::default(), &line), 0);
        assert_eq!(rasterize_triangle(&mut fb, &tex, &Light::default(), &point), 0);
        assert_eq!(fb, FrameBuffer::new(32, 32));
    }

    #[test]
    fn constant_texel_blends_to_itself() {
        let color = Color::new(90, 160, 33);
        let tex = Texture::solid(8, 8, color);
        let tri = Triangle {
            positions: [Vec3::new(1.0, 1.0, 0.2), Vec3::new(29.0, 3.0, 0.7), Vec3::new(9.0, 30.0, -0.4)],
            texcoords: [Vec2::new(0.0, 0.0), Vec2::new(7.0, 1.0), Vec2::new(3.0, 6.0)],
            normals: [FACING; 3],
        };
        let mut fb = FrameBuffer::new(32, 32);
        let written = rasterize_triangle(&mut fb, &tex, &Light::default(), &tri);
        assert!(written > 100);
        assert_eq!(fb.get_pixel(10, 10), Some(color));
        assert_eq!(fb.get_pixel(31, 31), Some(Color::BLACK));
    }

    #[test]
    fn depth_is_interpolated() {
        let tex = Texture::solid(1, 1, Color::WHITE);
        let tri = Triangle {
            positions: [Vec3::new(0.0, 0.0, 0.0), Vec3::new(20.0, 0.0, 1.0), Vec3::new(0.0, 20.0, 0.0)],
            texcoords: [Vec2::default(); 3],
            normals: [FACING; 3],
        };
        let mut fb = FrameBuffer::new(32, 32);
        rasterize_triangle(&mut fb, &tex, &Light::default(), &tri);
        assert!((fb.get_depth(10, 0).unwrap() - 0.5).abs() < 1e-6);
        assert_eq!(fb.get_depth(0, 10), Some(0.0));
    }

    #[test]
    fn shading_follows_interpolated_normal() {
        let tex = Texture::solid(1, 1, Color::WHITE);
        let side = Vec3::new(1.0, 0.0, 0.0);
        let tri = Triangle {
            positions: [Vec3::new(0.0, 0.0, 0.0), Vec3::new(20.0, 0.0, 0.0), Vec3::new(0.0, 20.0, 0.0)],
            texcoords: [Vec2::default(); 3],
            normals: [FACING, side, FACING],
        };
        let mut fb = FrameBuffer::new(32, 32);
        rasterize_triangle(&mut fb, &tex, &Light::default(), &tri);
        assert_eq!(fb.get_pixel(0, 0), Some(Color::WHITE));
        // halfway along a-b the normal is (0.5, 0, -0.5): cos 45 degrees
        assert_eq!(fb.get_pixel(10, 0), Some(Color::WHITE.scale(0.5f32.sqrt())));
        assert_eq!(fb.get_pixel(20, 0), Some(Color::BLACK));
    }
}
