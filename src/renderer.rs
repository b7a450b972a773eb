use std::time::{Duration, Instant};

use log::{debug, info};
use rayon::prelude::*;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::geometry::{texture_to_texel, world_to_screen};
use crate::mesh::Mesh;
use crate::raster::rasterize_triangle;
use crate::rectangle::{compute_subdivisions, subdivide};
use crate::screen::FrameBuffer;
use crate::texture::Texture;
use crate::triangle::Triangle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub triangles: usize,
    /// Triangles with no projected area; they never produce fragments.
    pub degenerate: usize,
    /// Fragments that passed the depth test, including ones later overdrawn.
    pub fragments: usize,
    pub tiles: usize,
    pub setup_time: Duration,
    pub raster_time: Duration,
}

/// Project every mesh face into screen space for a `width` x `height`
/// image, with texture coordinates scaled to `texture`'s texels.
pub fn setup_triangles<M: Mesh + ?Sized>(mesh: &M, texture: &Texture, width: u32, height: u32) -> Vec<Triangle> {
    (0..mesh.face_count())
        .map(|face| {
            let slots = [0, 1, 2];
            Triangle {
                positions: slots.map(|slot| world_to_screen(mesh.position(face, slot), width, height)),
                texcoords: slots
                    .map(|slot| texture_to_texel(mesh.texcoord(face, slot), texture.width(), texture.height())),
                normals: slots.map(|slot| mesh.normal(face, slot)),
            }
        })
        .collect()
}

/// Render `mesh` with `texture` into a new frame.
pub fn render<M: Mesh + ?Sized>(mesh: &M, texture: &Texture, config: &RenderConfig) -> Result<(FrameBuffer, RenderStats)> {
    let setup_start = Instant::now();
    let triangles = setup_triangles(mesh, texture, config.width, config.height);
    let setup_time = setup_start.elapsed();

    let (frame, mut stats) = render_triangles(&triangles, texture, config)?;
    stats.setup_time = setup_time;
    Ok((frame, stats))
}

/// Rasterize already projected triangles, in order. Uses the serial path for
/// a single worker and disjoint tiles otherwise; both give the same image.
pub fn render_triangles(triangles: &[Triangle], texture: &Texture, config: &RenderConfig) -> Result<(FrameBuffer, RenderStats)> {
    let degenerate = triangles.iter().filter(|tri| tri.is_degenerate()).count();
    debug!("{degenerate} of {} triangles are degenerate", triangles.len());

    let workers = config.worker_count();
    let raster_start = Instant::now();
    let (frame, fragments, tiles) = if workers <= 1 {
        let mut frame = FrameBuffer::new(config.width, config.height);
        frame.clear(config.background);
        let fragments: usize = triangles
            .iter()
            .map(|tri| rasterize_triangle(&mut frame, texture, &config.light, tri))
            .sum();
        (frame, fragments, 1)
    } else {
        render_tiled(triangles, texture, config, workers)?
    };

    let stats = RenderStats {
        triangles: triangles.len(),
        degenerate,
        fragments,
        tiles,
        setup_time: Duration::ZERO,
        raster_time: raster_start.elapsed(),
    };
    info!(
        "rasterized {} triangles into {} tiles: {} fragments in {:.2?}",
        stats.triangles, stats.tiles, stats.fragments, stats.raster_time
    );
    Ok((frame, stats))
}

// Each tile owns its pixels, so workers never share depth or color. Every
// tile still sees the triangles in input order, which keeps ties identical
// to the serial path.
fn render_tiled(
    triangles: &[Triangle],
    texture: &Texture,
    config: &RenderConfig,
    workers: usize,
) -> Result<(FrameBuffer, usize, usize)> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;

    // Additional depth so threads can steal work if there are regions onscreen with less geometry
    let depth = compute_subdivisions(workers) + 1;
    let mut tiles: Vec<FrameBuffer> = subdivide(config.width, config.height, depth)
        .into_iter()
        .map(|rect| {
            let mut tile = FrameBuffer::for_rect(rect);
            tile.clear(config.background);
            tile
        })
        .collect();
    debug!("rendering {} tiles on {workers} threads", tiles.len());

    let fragments: usize = pool.install(|| {
        tiles
            .par_iter_mut()
            .map(|tile| {
                triangles
                    .iter()
                    .map(|tri| rasterize_triangle(tile, texture, &config.light, tri))
                    .sum::<usize>()
            })
            .sum()
    });

    let mut frame = FrameBuffer::new(config.width, config.height);
    for tile in &tiles {
        frame.blit(tile);
    }
    Ok((frame, fragments, tiles.len()))
}
