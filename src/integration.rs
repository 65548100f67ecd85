//! Integration layer
//!
//! Wires the clock model to the terminal surface:
//! - The app runner (event loop)
//! - The renderer
//! - The list of enabled items run by the binary

pub mod app_runner;
pub mod items;
pub mod renderer;
