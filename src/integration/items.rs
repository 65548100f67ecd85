//! Named procedures run by the binary, in order.
//!
//! Each enabled item runs to completion before the next one starts. An item
//! that fails is reported as `Oh no! <error>` on the output and the run goes
//! on: failures never change how the process exits.

use std::io::Write;
use std::sync::Arc;

use color_eyre::eyre::Result;
use futures::future::BoxFuture;
use tokio::sync::Mutex;
use tracing::Instrument;

use crate::{
    infrastructure::{
        config::Config,
        tui::{real::RealTui, TuiLike},
    },
    integration::app_runner::AppRunner,
};

pub type ItemFn = fn(Config) -> BoxFuture<'static, Result<()>>;

#[derive(Clone)]
pub struct Item {
    name: &'static str,
    enabled: bool,
    run: ItemFn,
}

impl Item {
    pub fn new(name: &'static str, run: ItemFn) -> Self {
        Self {
            name,
            enabled: true,
            run,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl std::fmt::Debug for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// The items the binary runs.
pub fn default_items() -> Vec<Item> {
    vec![Item::new("Clock", run_clock)]
}

/// Show the progress-bar clock until a key is pressed.
pub fn run_clock(config: Config) -> BoxFuture<'static, Result<()>> {
    Box::pin(async move {
        let tui: Arc<Mutex<dyn TuiLike + Send>> = Arc::new(Mutex::new(RealTui::new()?));
        let mut runner = AppRunner::new(&config, tui);
        runner.run().await
    })
}

/// Run every enabled item, writing the banner lines to `out`.
/// Returns the number of items that failed.
pub async fn run_enabled<W: Write>(items: &[Item], config: &Config, out: &mut W) -> Result<usize> {
    let mut failures = 0;
    writeln!(out, "Running all enabled items")?;
    for item in items.iter().filter(|item| item.is_enabled()) {
        writeln!(out, ":: Running {}", item.name())?;
        out.flush()?;
        log::info!("Running {}", item.name());
        let span = tracing::info_span!("item", name = item.name());
        if let Err(e) = (item.run)(config.clone()).instrument(span).await {
            log::error!("{} failed: {e:?}", item.name());
            writeln!(out, "Oh no! {e:#}")?;
            failures += 1;
        }
    }
    writeln!(out, "\n\nDone running all enabled items")?;
    Ok(failures)
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::eyre;
    use pretty_assertions::assert_eq;

    use super::*;

    fn succeed(_: Config) -> BoxFuture<'static, Result<()>> {
        Box::pin(async { Result::Ok(()) })
    }

    fn fail(_: Config) -> BoxFuture<'static, Result<()>> {
        Box::pin(async { Result::Err(eyre!("terminal is gone")) })
    }

    async fn output(items: &[Item]) -> (String, usize) {
        let mut out = Vec::new();
        let failures = run_enabled(items, &Config::default(), &mut out)
            .await
            .expect("writing to a Vec succeeds");
        (String::from_utf8(out).expect("utf-8 output"), failures)
    }

    #[test]
    fn test_default_items() {
        let items = default_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name(), "Clock");
        assert!(items[0].is_enabled());
    }

    #[tokio::test]
    async fn test_banner_for_successful_item() {
        let (out, failures) = output(&[Item::new("Clock", succeed)]).await;
        assert_eq!(
            out,
            "Running all enabled items\n:: Running Clock\n\n\nDone running all enabled items\n"
        );
        assert_eq!(failures, 0);
    }

    #[tokio::test]
    async fn test_failure_is_reported_and_run_continues() {
        let (out, failures) =
            output(&[Item::new("First", fail), Item::new("Second", succeed)]).await;
        assert_eq!(
            out,
            "Running all enabled items\n\
             :: Running First\n\
             Oh no! terminal is gone\n\
             :: Running Second\n\
             \n\nDone running all enabled items\n"
        );
        assert_eq!(failures, 1);
    }

    #[tokio::test]
    async fn test_disabled_items_are_skipped() {
        let (out, failures) = output(&[
            Item::new("Skipped", fail).disabled(),
            Item::new("Clock", succeed),
        ])
        .await;
        assert!(!out.contains("Skipped"));
        assert!(!out.contains("Oh no!"));
        assert!(out.contains(":: Running Clock"));
        assert_eq!(failures, 0);
    }

    #[test]
    fn test_item_debug() {
        let item = Item::new("Clock", succeed);
        let debug = format!("{item:?}");
        assert!(debug.contains("Clock"));
        assert!(debug.contains("enabled: true"));
    }
}
