pub mod command;
pub mod error;
pub mod launcher;

pub use command::CommandSpec;
pub use error::{LaunchError, Result};
