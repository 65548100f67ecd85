use color_eyre::eyre::{eyre, Result, WrapErr};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        translator::translate_event,
    },
    infrastructure::{
        config::Config,
        ticker::Ticker,
        tui::{self, event_source::EventSource},
    },
    integration::renderer::Renderer,
    model::clock::ClockView,
};

/// Drives the clock: pulls events, updates the model, executes commands and
/// redraws, one message at a time.
pub struct AppRunner {
    clock: ClockView,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    events: EventSource,
    renderer: Renderer,
    ticker: Ticker,
    // Taken when the loop starts; None once spawned or when events are scripted.
    tick_tx: Option<mpsc::Sender<tui::Event>>,
    cancellation_token: CancellationToken,
}

impl AppRunner {
    pub fn new(config: &Config, tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        // Capacity 1: at most one tick waits while the loop is busy.
        let (tick_tx, tick_rx) = mpsc::channel(1);
        let events = EventSource::real(Arc::clone(&tui), tick_rx);
        Self {
            clock: ClockView::with_config(&config.clock),
            tui,
            events,
            renderer: Renderer::new(),
            ticker: Ticker::new(config.clock.tick_interval()),
            tick_tx: Some(tick_tx),
            cancellation_token: CancellationToken::new(),
        }
    }

    /// Replace the event source with a scripted one. No ticker is started then.
    pub fn set_event_source_for_tests(&mut self, events: EventSource) {
        self.events = events;
        self.tick_tx = None;
    }

    pub fn clock(&self) -> &ClockView {
        &self.clock
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Cancelling this token stops the ticker; the loop cancels it on exit.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }

    /// Enter the terminal, run the loop until the clock terminates, the event
    /// source closes or the render surface fails, then restore the terminal.
    pub async fn run(&mut self) -> Result<()> {
        self.tui
            .lock()
            .await
            .enter()
            .wrap_err("failed to start the terminal")?;

        let ticker = self.tick_tx.take().map(|tx| {
            self.ticker
                .spawn(tx, self.cancellation_token.child_token())
        });

        let outcome = match self.fit_to_surface().await {
            Ok(()) => self.event_loop().await,
            Err(e) => Err(e),
        };

        self.cancellation_token.cancel();
        if let Some(handle) = ticker {
            if let Err(e) = handle.await {
                log::warn!("Ticker task ended abnormally: {e}");
            }
        }

        let exited = self.tui.lock().await.exit();
        outcome?;
        exited.wrap_err("failed to restore the terminal")
    }

    /// Size the bars to the terminal before the first frame; the surface
    /// only reports later size changes as events.
    async fn fit_to_surface(&mut self) -> Result<()> {
        let area = self
            .tui
            .lock()
            .await
            .area()
            .wrap_err("failed to read the terminal size")?;
        self.clock.fit_width(area.width);
        Ok(())
    }

    async fn event_loop(&mut self) -> Result<()> {
        while let Some(event) = self.events.next().await {
            match event {
                tui::Event::Error(reason) => {
                    return Err(eyre!("terminal event stream failed: {reason}"));
                }
                tui::Event::Closed => {
                    log::info!("Terminal event stream closed");
                    break;
                }
                event => {
                    let msg = translate_event(event);
                    if !msg.is_frequent() {
                        log::debug!("{msg:?}");
                    }
                    let cmd = self.clock.update(msg);
                    self.execute(cmd).await?;
                }
            }

            if self.clock.is_terminated() {
                break;
            }
        }
        Ok(())
    }

    async fn execute(&mut self, cmd: Cmd) -> Result<()> {
        for cmd in cmd.into_vec() {
            match cmd {
                Cmd::RequestRender => self.render().await?,
                Cmd::Tui(TuiCommand::Resize { width, height }) => {
                    self.tui
                        .lock()
                        .await
                        .resize(ratatui::prelude::Rect::new(0, 0, width, height))
                        .wrap_err("failed to resize the terminal")?;
                }
                Cmd::Quit => log::info!("Quit requested"),
                Cmd::Batch(_) | Cmd::None => {}
            }
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, &mut self.clock).await
    }
}
