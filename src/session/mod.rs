//! Menu and game loop

pub mod controller;
pub mod prompt;

pub use controller::{Session, SessionStats};
pub use prompt::MenuChoice;
