pub mod field;
pub mod painter;
pub mod renderer;

pub use renderer::ParticleCanvas;
