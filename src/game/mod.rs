pub mod input;
pub mod physics;
pub mod state;

pub use input::{apply_pointer, poll_events, InputEvent};
pub use physics::{update, StepEvents};
pub use state::{Ball, Blink, GameState, Paddle, Side};
