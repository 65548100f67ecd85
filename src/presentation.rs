//! Presentation layer
//!
//! This module contains the ratatui widgets that draw models.

pub mod widgets;
