//! Interactive view-state controller for the Mandelbrot/Julia blend.
//!
//! Nothing in here touches the DOM or the GPU. The web frontend feeds typed
//! [`InputEvent`]s into an [`InteractionStateMachine`], executes the
//! [`HostCommand`]s it returns, and calls [`FrameDriver::tick`] once per
//! animation frame with a [`Renderer`].

pub mod blend;
pub mod config;
pub mod constants;
pub mod coords;
pub mod frame;
pub mod interaction;
pub mod url_state;

pub use blend::*;
pub use config::*;
pub use constants::*;
pub use coords::*;
pub use frame::*;
pub use interaction::*;
pub use url_state::*;
