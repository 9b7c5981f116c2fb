//! Window Manager: owns the single shell window and drives its lifecycle.

mod manager;
mod state;
mod surface;
pub mod wry_surface;

pub use manager::{LoadStep, WindowManager};
pub use state::{LifecycleState, NoActiveWindow, WindowToken};
pub use surface::{Surface, SurfaceFactory, SurfaceSpec};
