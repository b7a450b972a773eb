use std::path::Path;

use image::{DynamicImage, GenericImageView};
use log::debug;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::grid::Grid;

/// RGB texture. Rows are stored bottom-up, so texel `y = 0` is the bottom
/// row of the source image, matching the upward `v` axis of mesh texture
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    texels: Grid<Color>,
}

impl Texture {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img: DynamicImage = image::open(path)
            .map_err(|source| Error::Image { path: path.to_path_buf(), source })?;
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::EmptyTexture { path: path.to_path_buf() });
        }
        let rgb_img = img.to_rgb8();
        let texels = Grid::from_fn(width, height, |x, y| {
            let p = rgb_img.get_pixel(x, height - 1 - y);
            Color::new(p[0], p[1], p[2])
        });
        debug!("loaded texture {} ({width}x{height})", path.display());
        Ok(Self { texels })
    }

    /// Build a texture from a function of texel coordinates (bottom-up).
    pub fn from_fn(width: u32, height: u32, f: impl FnMut(u32, u32) -> Color) -> Self {
        assert!(width > 0 && height > 0, "texture must have at least one texel");
        Self { texels: Grid::from_fn(width, height, f) }
    }

    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        Self::from_fn(width, height, |_, _| color)
    }

    pub fn width(&self) -> u32 {
        self.texels.width()
    }

    pub fn height(&self) -> u32 {
        self.texels.height()
    }

    /// Color of the texel containing `(x, y)`. Coordinates are truncated
    /// toward zero and clamped to the texture edge; NaN reads texel 0.
    #[inline(always)]
    pub fn sample(&self, x: f32, y: f32) -> Color {
        let x = clamp_texel(x, self.texels.width());
        let y = clamp_texel(y, self.texels.height());
        self.texels[(x, y)]
    }
}

#[inline(always)]
fn clamp_texel(coord: f32, size: u32) -> u32 {
    // `as` truncates, saturates, and maps NaN to 0
    (coord as u32).min(size - 1)
}
