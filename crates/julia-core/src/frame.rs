//! Per-frame composition of renderer uniforms.

use crate::blend::{BlendAnimator, BlendState, BlendTarget};
use crate::config::ViewConfig;
use crate::coords::ViewportSource;
use crate::interaction::{InteractionStateMachine, ModeKind};

/// Values pushed to the renderer each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameUniforms {
    /// Backing-store size in physical pixels.
    pub resolution: [f32; 2],
    /// Julia seed scaled by the device pixel ratio.
    pub cursor: [f32; 2],
    /// Seconds since the session started.
    pub time: f32,
    /// Eased blend, 0 = Mandelbrot, 1 = Julia.
    pub julia: f32,
}

/// Rendering capability consumed by the frame driver.
pub trait Renderer {
    type Error: std::fmt::Debug;

    fn set_uniforms(&mut self, uniforms: &FrameUniforms);
    fn draw_frame(&mut self) -> Result<(), Self::Error>;
}

pub struct FrameDriver {
    blend: BlendAnimator,
    last_elapsed: f64,
    frames: u64,
}

impl FrameDriver {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            blend: BlendAnimator::new(config.initial_blend, config.blend_rate),
            last_elapsed: 0.0,
            frames: 0,
        }
    }

    #[inline]
    pub fn blend(&self) -> BlendState {
        self.blend.state()
    }

    /// `elapsed_since_start` of the most recent tick, rendered or not.
    #[inline]
    pub fn last_elapsed(&self) -> f64 {
        self.last_elapsed
    }

    /// Number of frames actually handed to a renderer.
    #[inline]
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Advance one animation frame.
    ///
    /// Without a renderer nothing is drawn and the blend holds still; only
    /// the tick time is recorded, so there is no catch-up once rendering
    /// starts. Returns the uniforms that were pushed, if any.
    pub fn tick<V, R>(
        &mut self,
        dt_since_last: f64,
        elapsed_since_start: f64,
        machine: &InteractionStateMachine,
        viewport: &V,
        renderer: Option<&mut R>,
    ) -> Option<FrameUniforms>
    where
        V: ViewportSource + ?Sized,
        R: Renderer + ?Sized,
    {
        self.last_elapsed = elapsed_since_start;
        let renderer = renderer?;

        let target = match machine.mode().kind() {
            ModeKind::Idle => BlendTarget::Mandelbrot,
            ModeKind::Dragging | ModeKind::Locked => BlendTarget::Julia,
        };
        self.blend.advance(target, dt_since_last);

        let geometry = viewport.geometry();
        let dpr = geometry.device_pixel_ratio;
        let seed = machine.seed() * dpr;
        let [w, h] = geometry.resolution_px();
        let uniforms = FrameUniforms {
            resolution: [w as f32, h as f32],
            cursor: [seed.re as f32, seed.im as f32],
            time: elapsed_since_start as f32,
            julia: self.blend.eased() as f32,
        };

        renderer.set_uniforms(&uniforms);
        if let Err(e) = renderer.draw_frame() {
            log::error!("render error: {:?}", e);
        }
        self.frames += 1;
        Some(uniforms)
    }
}
