//! The public component surface: [`Typography`] and its HTML [`Renderer`].

mod error;
mod renderer;
mod typography;

pub use error::RenderError;
pub use renderer::Renderer;
pub use typography::Typography;
