//! Text console output and frame pacing.

use std::io::{self, Write};
use std::time::Duration;

use crate::config::FRAME_INTERVAL_MS;
use crate::render::FrameBuffer;

/// Writes whole frames to a text sink.
///
/// Each frame goes out as one block and the sink is flushed right after,
/// so a terminal shows it immediately.
pub struct Console<W: Write> {
    out: W,
    frames_written: u64,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames_written: 0,
        }
    }

    pub fn present(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        self.out.write_all(frame.render_text().as_bytes())?;
        self.out.flush()?;
        self.frames_written += 1;
        Ok(())
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Blocks between frames.
pub trait FramePacer {
    fn wait(&mut self);
}

/// Sleeps a fixed interval after every frame.
///
/// Time spent rasterizing and writing is not subtracted, so the effective
/// frame rate is at most `1000 / interval` and drifts under load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLimiter {
    interval: Duration,
}

impl FrameLimiter {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL_MS)
    }
}

impl FramePacer for FrameLimiter {
    fn wait(&mut self) {
        std::thread::sleep(self.interval);
    }
}
