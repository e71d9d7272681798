//! The scene: one quad, one animator, one draw call per frame.

use std::time::Instant;

use crate::animator::{Animator, AnimatorConfig};
use crate::gpu::GpuContext;
use crate::mesh::{Mesh, QuadGeometry};
use crate::quad_pass::QuadPass;

/// Everything needed to render the orbiting quad.
///
/// Construction uploads the quad geometry, builds the render pipeline,
/// and starts the animator at rotation zero. After that the only public
/// operation is [`Scene::draw`], called once per frame by the driver.
pub struct Scene {
    mesh: Mesh,
    pass: QuadPass,
    animator: Animator,
}

impl Scene {
    /// Builds the scene with the default animation constants.
    pub fn new(gpu: &GpuContext, now: Instant) -> Self {
        Self::with_config(gpu, AnimatorConfig::default(), now)
    }

    /// Builds the scene with explicit animation constants.
    pub fn with_config(gpu: &GpuContext, config: AnimatorConfig, now: Instant) -> Self {
        let mesh = Mesh::new(gpu, &QuadGeometry::new());
        let pass = QuadPass::new(gpu);
        let animator = Animator::new(config, now);

        Self {
            mesh,
            pass,
            animator,
        }
    }

    /// Advances the animation to `now`, then draws the quad.
    ///
    /// The update always runs before the draw is recorded, so the matrix
    /// handed to the GPU reflects this frame's time.
    pub fn draw(&mut self, gpu: &GpuContext, render_pass: &mut wgpu::RenderPass, now: Instant) {
        self.animator.update(now);
        self.pass
            .render(gpu, render_pass, &self.mesh, self.animator.model_matrix());
    }
}
