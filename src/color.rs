use bytemuck::{Pod, Zeroable};

use crate::vec3::Vec3;

/// 8-bit RGB color. `repr(C)` so a slice of colors can be handed to the
/// image encoder as raw bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32)
    }

    /// Rounds each channel and clamps it to 0..=255. NaN becomes 0.
    pub fn from_vec3(v: Vec3) -> Self {
        Self { r: to_channel(v.x), g: to_channel(v.y), b: to_channel(v.z) }
    }

    /// Channel-wise weighted sum of three colors, kept in floating point so
    /// the caller can apply lighting before quantizing.
    #[inline(always)]
    pub fn blend(colors: [Color; 3], weights: Vec3) -> Vec3 {
        colors[0].to_vec3() * weights.x
            + colors[1].to_vec3() * weights.y
            + colors[2].to_vec3() * weights.z
    }

    pub fn scale(self, intensity: f32) -> Self {
        Self::from_vec3(self.to_vec3() * intensity)
    }
}

#[inline(always)]
fn to_channel(value: f32) -> u8 {
    // `as` saturates and maps NaN to 0
    value.round().clamp(0.0, 255.0) as u8
}
