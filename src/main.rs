#![deny(warnings)]

use clap::Parser;
use color_eyre::eyre::Result;

use barclock::{
    infrastructure::{cli::Cli, config::Config},
    integration::items::{default_items, run_enabled},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?.with_tick_rate(args.tick_rate);

    // Item failures are reported inline and never change the exit status.
    let failures = run_enabled(&default_items(), &config, &mut std::io::stdout()).await?;
    if failures > 0 {
        log::warn!("{failures} item(s) failed");
    }

    println!();
    println!("Program execution complete");

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
