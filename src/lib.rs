//! # Barclock - a terminal clock drawn with progress bars
//!
//! The current hour, minute and second are shown as three horizontal bars
//! under an `H:M:S` header, redrawn on every tick until a key is pressed.
//!
//! ## Architecture Overview
//!
//! - **Model** (`model`): the clock and its progress indicators
//! - **Message** (`core::msg`): ticks, resizes and key presses
//! - **Command** (`core::cmd`): side effects requested by an update
//! - **View** (`presentation`): ratatui widgets drawing the rendered text
//! - **Runner** (`integration`): the event loop and the item registry
//!
//! ## Example Usage
//!
//! ```rust
//! use barclock::{core::msg::Msg, model::clock::ClockView};
//! use chrono::{Local, TimeZone};
//!
//! let mut clock = ClockView::new();
//! let now = Local.with_ymd_and_hms(2024, 1, 15, 13, 5, 9).unwrap();
//! clock.update(Msg::Tick(now));
//! assert_eq!(clock.header(), "13:5:9");
//! ```

pub mod core;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
