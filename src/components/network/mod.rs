mod animation;
mod component;
mod panel;
mod render;
mod state;
pub mod surface;
mod types;

pub use animation::AnimationLoop;
pub use panel::NetworkPanel;
