use chrono::{DateTime, Local};
use crossterm::event::KeyEvent;

/// Domain messages consumed by the clock's update function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The terminal surface is ready; draw the first frame
    Init,
    /// Wall-clock time delivered by the ticker
    Tick(DateTime<Local>),
    Resize { width: u16, height: u16 },
    /// Any key press
    Key(KeyEvent),
    /// An event the clock has no use for, named by its kind
    Ignored(&'static str),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Tick(_))
    }
}
