//! Platform abstraction layer
//!
//! Everything between the simulation and the outside world:
//! - Fixed-rate tick scheduling
//! - Input events
//! - Render and HUD output

pub mod driver;
pub mod input;
pub mod sink;

pub use driver::FrameDriver;
pub use input::{Command, InputState, Key};
pub use sink::{HudSink, HudSnapshot, LogHud, NullRender, RenderFrame, RenderSink};
