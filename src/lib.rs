//! # Orbitquad
//!
//! **A minimal wgpu rendering example: one quad, one matrix, one draw call.**
//!
//! A two-triangle quad with colored corners spins about its own center
//! while orbiting the world origin. Per frame, the [`Animator`] composes
//! a model matrix from three hand-built affine transforms
//! (scale, then rotate, then translate) and the [`Scene`] hands it to a
//! single indexed draw call. The transform math lives in
//! [`transform`](crate::transform) and is where all the interesting
//! behavior is; the rest is wgpu plumbing.
//!
//! ## Quick start
//!
//! ```no_run
//! fn main() {
//!     env_logger::init();
//!     orbitquad::run();
//! }
//! ```

mod animator;
mod app;
mod gpu;
mod mesh;
mod quad_pass;
mod scene;
pub mod transform;

pub use animator::{Animator, AnimatorConfig};
pub use app::{AppConfig, run, run_with_config};
pub use gpu::GpuContext;
pub use mesh::{Mesh, QuadGeometry, Vertex};
pub use quad_pass::QuadPass;
pub use scene::Scene;
pub use transform::{rotation_matrix, scale_matrix, translation_matrix};

// Re-export glam math types for convenience
pub use glam::{Mat4, Vec3, Vec4};
