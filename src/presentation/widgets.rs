//! Reusable UI widgets

pub mod clock;
