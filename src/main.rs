use anyhow::{Context, Result};
use log::error;

use trispin::console::{Console, FrameLimiter};
use trispin::{AnimationConfig, FrameLimit, RenderLoop};

fn main() -> Result<()> {
    env_logger::init();

    let config = AnimationConfig::default();
    let mut render_loop = RenderLoop::new(
        &config,
        Console::stdout(),
        FrameLimiter::new(config.frame_interval_ms),
    );

    // Only an output failure (e.g. a closed pipe) ends the loop.
    render_loop
        .run(FrameLimit::Unbounded)
        .inspect_err(|e| error!("frame output failed: {}", e))
        .context("failed to write frame to stdout")?;
    Ok(())
}
