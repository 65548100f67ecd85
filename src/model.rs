//! Models updated by messages and rendered to text

pub mod clock;
pub mod indicator;
