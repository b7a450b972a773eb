use std::path::PathBuf;

use clap::Parser;

use crate::color::Color;
use crate::raster::Light;
use crate::vec3::Vec3;

/// Output resolution of the reference configuration.
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 800;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub light: Light,
    pub background: Color,
    /// Worker threads. 0 means one per logical CPU, 1 renders serially.
    pub threads: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            light: Light::default(),
            background: Color::BLACK,
            threads: 1,
        }
    }
}

impl RenderConfig {
    pub fn worker_count(&self) -> usize {
        match self.threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}

/// Render a textured mesh into an image file.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Wavefront OBJ mesh to render
    #[arg(default_value = "obj/diablo3_pose/diablo3_pose.obj")]
    pub mesh: PathBuf,

    /// Diffuse texture sampled by the mesh's texture coordinates
    #[arg(short, long, default_value = "obj/diablo3_pose/diablo3_pose_diffuse.tga")]
    pub texture: PathBuf,

    /// Output image; the format follows the extension
    #[arg(short, long, default_value = "output.tga")]
    pub output: PathBuf,

    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Light direction as x,y,z
    #[arg(long, default_value = "0,0,-1", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub light: Vec3,

    /// Worker threads; 0 uses every logical CPU, 1 renders serially
    #[arg(short = 'j', long, default_value_t = 0)]
    pub threads: usize,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            light: Light::new(self.light),
            threads: self.threads,
            ..RenderConfig::default()
        }
    }
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("'{p}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    match parts[..] {
        [x, y, z] if x != 0.0 || y != 0.0 || z != 0.0 => Ok(Vec3::new(x, y, z)),
        [_, _, _] => Err("direction must not be zero".to_string()),
        _ => Err(format!("expected x,y,z but got {} components", parts.len())),
    }
}
