pub mod commands;
pub mod handlers;

pub use commands::command_argument_builder;
pub use handlers::{describe_failure, handle_build, settings_from_matches};
