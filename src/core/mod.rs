//! Core module - pure game logic with no external dependencies
//!
//! Grid data model, paired board generation, empty-corridor path search,
//! the countdown, and the session state machine that ties them together.
//! Nothing here touches a clock, a thread, or a screen.

pub mod generator;
pub mod grid;
pub mod path;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod timer;

// Re-export commonly used types
pub use grid::Grid;
pub use path::find_path;
pub use rng::SimpleRng;
pub use session::Session;
pub use snapshot::GameSnapshot;
pub use timer::Countdown;
