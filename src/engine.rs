//! Animation state and the render loop.
//!
//! [`Animator`] owns the persistent base triangle and performs one frame
//! transition per [`Animator::step`]. [`RenderLoop`] drives the animator,
//! rasterizes each display triangle, writes it to a [`Console`] and waits on a
//! [`FramePacer`].
//!
//! Rotation is applied to the base triangle and accumulates frame after
//! frame. Scale, stretch and recentering are applied only to a throwaway
//! display copy, recomputed from the current base every frame.

use std::io::{self, Write};

use log::{debug, info, trace};

use crate::config::AnimationConfig;
use crate::console::{Console, FramePacer};
use crate::math::mat2::Mat2;
use crate::math::vec2::Vec2;
use crate::render::{FrameBuffer, Rasterizer, RasterizerDispatcher, RasterizerType};
use crate::triangle::Triangle;

/// Per-frame transform state.
#[derive(Debug, Clone)]
pub struct Animator {
    tick: u64,
    base: Triangle,
    rotation: Mat2,
    stretch: Mat2,
    recenter: Vec2,
    scale_frequency: f64,
}

impl Animator {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            tick: 0,
            base: config.base_triangle,
            rotation: Mat2::rotation(config.rotation_step),
            stretch: Mat2::scaling(config.x_stretch, 1.0),
            recenter: config.recenter(),
            scale_frequency: config.scale_frequency,
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn base(&self) -> &Triangle {
        &self.base
    }

    /// `sin(frequency * tick) + 1`, always within `[0, 2]`.
    pub fn scale_factor(&self, tick: u64) -> f64 {
        (self.scale_frequency * tick as f64).sin() + 1.0
    }

    pub fn dynamic_scale(&self, tick: u64) -> Mat2 {
        Mat2::uniform_scaling(self.scale_factor(tick))
    }

    /// Derive the display triangle for `base` at `tick`: scale, then stretch
    /// along x, then move into the middle of the grid.
    pub fn display_triangle(&self, base: &Triangle, tick: u64) -> Triangle {
        base.transform(self.dynamic_scale(tick))
            .transform(self.stretch)
            .translate(self.recenter)
    }

    /// Advance one frame and return the triangle to draw.
    ///
    /// The scale is taken from the tick before it is incremented, and the base
    /// is rotated before the display copy is derived.
    pub fn step(&mut self) -> Triangle {
        let scale_tick = self.tick;
        self.tick += 1;
        self.base = self.base.transform(self.rotation);
        self.display_triangle(&self.base, scale_tick)
    }
}

/// How many frames [`RenderLoop::run`] produces before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLimit {
    /// Run until output fails.
    Unbounded,
    Frames(u64),
}

impl FrameLimit {
    fn reached(&self, frames: u64) -> bool {
        match self {
            FrameLimit::Unbounded => false,
            FrameLimit::Frames(max) => frames >= *max,
        }
    }
}

/// Single-threaded frame loop: step, rasterize, present, wait.
pub struct RenderLoop<W: Write, P: FramePacer> {
    animator: Animator,
    rasterizer: RasterizerDispatcher,
    console: Console<W>,
    pacer: P,
    width: usize,
    height: usize,
}

impl<W: Write, P: FramePacer> RenderLoop<W, P> {
    pub fn new(config: &AnimationConfig, console: Console<W>, pacer: P) -> Self {
        Self {
            animator: Animator::new(config),
            rasterizer: RasterizerDispatcher::new(RasterizerType::default()),
            console,
            pacer,
            width: config.width,
            height: config.height,
        }
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn console(&self) -> &Console<W> {
        &self.console
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    /// Run exactly one frame and return what was drawn.
    pub fn frame(&mut self) -> io::Result<FrameBuffer> {
        let tick = self.animator.tick();
        let display = self.animator.step();
        trace!(
            "frame tick={} scale={:.4}",
            tick,
            self.animator.scale_factor(tick)
        );

        let frame = self.rasterizer.rasterize(&display, self.width, self.height);
        self.console.present(&frame)?;
        self.pacer.wait();
        Ok(frame)
    }

    /// Run frames until `limit` is reached, returning the number produced.
    ///
    /// With [`FrameLimit::Unbounded`] this only returns on an output error.
    pub fn run(&mut self, limit: FrameLimit) -> io::Result<u64> {
        info!(
            "rendering {}x{} grid with {} rasterizer, limit {:?}",
            self.width,
            self.height,
            self.rasterizer.active_type(),
            limit
        );

        let mut frames = 0;
        while !limit.reached(frames) {
            self.frame()?;
            frames += 1;
        }

        debug!("stopped after {} frames", frames);
        Ok(frames)
    }
}
