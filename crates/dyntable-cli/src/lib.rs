//! Terminal front end for the dynamic table editor.

pub mod commands;
pub mod logging;
pub mod render;
pub mod session;
pub mod settings;
