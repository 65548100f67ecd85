use crate::infrastructure::tui;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// Where the app runner pulls its next event from.
///
/// The real source merges terminal input with the ticker channel. Calls
/// alternate which side is polled first, so a tick that is always pending
/// cannot starve key presses. The test source replays a fixed queue and then
/// reports exhaustion with `None`.
pub enum EventSource {
    Real {
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        ticks: mpsc::Receiver<tui::Event>,
        ticks_first: bool,
    },
    Test(VecDeque<tui::Event>),
}

impl EventSource {
    pub fn real(
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        ticks: mpsc::Receiver<tui::Event>,
    ) -> Self {
        EventSource::Real {
            tui,
            ticks,
            ticks_first: true,
        }
    }
    pub fn test(events: impl IntoIterator<Item = tui::Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }
    pub async fn next(&mut self) -> Option<tui::Event> {
        match self {
            EventSource::Real {
                tui,
                ticks,
                ticks_first,
            } => {
                let prefer_ticks = *ticks_first;
                *ticks_first = !prefer_ticks;
                let terminal = async {
                    let mut guard = tui.lock().await;
                    guard.next().await
                };
                if prefer_ticks {
                    tokio::select! {
                        biased;
                        Some(tick) = ticks.recv() => Some(tick),
                        ev = terminal => ev,
                    }
                } else {
                    tokio::select! {
                        biased;
                        ev = terminal => ev,
                        Some(tick) = ticks.recv() => Some(tick),
                    }
                }
            }
            EventSource::Test(queue) => queue.pop_front(),
        }
    }
}
