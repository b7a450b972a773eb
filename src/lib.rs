//! Z-buffered software rasterizer.
//!
//! A triangulated mesh is projected orthographically onto a fixed-size
//! image; every triangle is filled by barycentric interpolation, hidden
//! surfaces are resolved with a per-pixel depth buffer, and each fragment is
//! colored with blended texture samples scaled by a single directional
//! light.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod mesh;
pub mod obj;
pub mod raster;
pub mod rectangle;
pub mod renderer;
pub mod screen;
pub mod texture;
pub mod triangle;
pub mod vec2;
pub mod vec3;

pub use color::Color;
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use mesh::Mesh;
pub use obj::Model;
pub use raster::{Light, rasterize_triangle};
pub use renderer::{RenderStats, render, render_triangles, setup_triangles};
pub use screen::FrameBuffer;
pub use texture::Texture;
pub use triangle::Triangle;
pub use vec2::Vec2;
pub use vec3::Vec3;
