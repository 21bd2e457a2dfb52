//! Terminal client: argument parsing, the session loop, prompts and rendering.
//! Not part of the library API.

pub mod commands;
pub mod prompt;
pub mod render;
pub mod setup;

pub use commands::run;
