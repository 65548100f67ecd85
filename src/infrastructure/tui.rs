pub mod event_source;
pub mod real;

use chrono::{DateTime, Local};
use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};

use std::future::Future;
use std::pin::Pin;

pub type IO = std::io::Stdout;
pub fn io() -> IO {
    std::io::stdout()
}
pub type Frame<'a> = ratatui::Frame<'a>;

#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub enum Event {
    Init,
    /// The terminal event stream failed
    Error(String),
    Closed,
    Tick(DateTime<Local>),
    FocusGained,
    FocusLost,
    Paste(String),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

impl Event {
    /// Variant name, for logging
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: ratatui::prelude::Rect) -> Result<()>;
    /// Current size of the drawing surface
    fn area(&self) -> Result<ratatui::prelude::Rect>;
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}
