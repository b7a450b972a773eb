use std::path::Path;

use image::RgbImage;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::rectangle::Rect;

/// Nothing drawn yet: every real fragment is nearer.
pub const EMPTY_DEPTH: f32 = f32::NEG_INFINITY;

/// Color and depth rasters covering `rect` of the output image. The full
/// frame has `rect` at the origin; worker tiles cover a sub-region and are
/// addressed in full-image coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pub rect: Rect,
    color: Grid<Color>,
    depth: Grid<f32>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::for_rect(Rect::from_size(width, height))
    }

    pub fn for_rect(rect: Rect) -> Self {
        Self {
            rect,
            color: Grid::new(rect.width(), rect.height(), Color::BLACK),
            depth: Grid::new(rect.width(), rect.height(), EMPTY_DEPTH),
        }
    }

    pub fn width(&self) -> u32 {
        self.rect.width()
    }

    pub fn height(&self) -> u32 {
        self.rect.height()
    }

    pub fn clear(&mut self, background: Color) {
        self.color.fill(background);
        self.depth.fill(EMPTY_DEPTH);
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if !self.rect.contains(x, y) { return None }
        self.color.get(x - self.rect.min_x, y - self.rect.min_y)
    }

    #[inline(always)]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.color[(x - self.rect.min_x, y - self.rect.min_y)] = color;
    }

    pub fn get_depth(&self, x: u32, y: u32) -> Option<f32> {
        if !self.rect.contains(x, y) { return None }
        self.depth.get(x - self.rect.min_x, y - self.rect.min_y)
    }

    #[inline(always)]
    pub(crate) fn depth_mut(&mut self, x: u32, y: u32) -> &mut f32 {
        &mut self.depth[(x - self.rect.min_x, y - self.rect.min_y)]
    }

    /// Copy a tile's color and depth into the matching region of `self`.
    pub fn blit(&mut self, tile: &FrameBuffer) {
        let Some(region) = self.rect.intersect(&tile.rect) else { return };
        let len = region.width() as usize;
        let src_x = (region.min_x - tile.rect.min_x) as usize;
        let dst_x = (region.min_x - self.rect.min_x) as usize;

        for y in region.min_y..region.max_y {
            let src_y = y - tile.rect.min_y;
            let dst_y = y - self.rect.min_y;
            self.color.row_mut(dst_y)[dst_x..dst_x + len]
                .copy_from_slice(&tile.color.row(src_y)[src_x..src_x + len]);
            self.depth.row_mut(dst_y)[dst_x..dst_x + len]
                .copy_from_slice(&tile.depth.row(src_y)[src_x..src_x + len]);
        }
    }

    /// Encode the color raster, flipped so that buffer row 0 ends up at the
    /// bottom of the image.
    pub fn to_image(&self) -> RgbImage {
        let mut flipped = self.color.clone();
        flipped.flip_vertically();
        let bytes: &[u8] = bytemuck::cast_slice(flipped.as_slice());
        let mut img = RgbImage::new(self.width(), self.height());
        img.copy_from_slice(bytes);
        img
    }

    /// Save as an image whose format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_image()
            .save(path)
            .map_err(|source| Error::Image { path: path.to_path_buf(), source })
    }
}
