//! Core Elm Architecture implementation
//!
//! This module contains the core components of the Elm architecture:
//! - Messages
//! - Commands (side effects requested by updates)
//! - Message translation layer

pub mod cmd;
pub mod msg;
pub mod translator;
