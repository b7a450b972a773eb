// External crates
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

// STD library
use std::time::Instant;

// Internal imports
use zraster::config::Args;
use zraster::{Model, Texture, render};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let config = args.render_config();
    let start = Instant::now();

    // Load .obj file and texture file; nothing is written unless both succeed
    let model = Model::load(&args.mesh).with_context(|| format!("loading mesh {}", args.mesh.display()))?;
    let texture = Texture::load(&args.texture)
        .with_context(|| format!("loading texture {}", args.texture.display()))?;
    info!("texture {}x{}", texture.width(), texture.height());

    let (frame, stats) = render(&model, &texture, &config).context("rendering")?;
    if stats.degenerate > 0 {
        info!("skipped {} degenerate triangles", stats.degenerate);
    }

    frame
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!(
        "saved {} ({}x{}) in {:.2?}",
        args.output.display(),
        config.width,
        config.height,
        start.elapsed()
    );
    Ok(())
}
