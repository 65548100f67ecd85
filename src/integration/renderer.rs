use color_eyre::eyre::{Result, WrapErr};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    infrastructure::tui, model::clock::ClockView, presentation::widgets::clock::ClockWidget,
};

#[derive(Debug, Default)]
pub struct Renderer {
    frames: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Render the clock to text (advancing its bar animation) and draw it.
    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        clock: &mut ClockView,
    ) -> Result<()> {
        let text = clock.render();
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| {
            f.render_widget(ClockWidget::new(&text), f.area());
        };
        guard.draw(&mut draw).wrap_err("failed to draw clock")?;
        self.frames += 1;
        Ok(())
    }
}
