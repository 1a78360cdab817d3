//! Example showing a file-mode progress bar over a simulated transfer
//!
//! Run with `RUST_LOG=progressline=debug` to see the bar's lifecycle events.

use color_eyre::Result;
use progressline::progress::ProgressBarBuilder;
use std::io::{stdout, Write};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const TOTAL_BYTES: u64 = 8 * 1024 * 1024;
const CHUNK: u64 = 96 * 1024;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut bar = ProgressBarBuilder::new(TOTAL_BYTES)
        .labelled("archive.tar")
        .file_mode(true)
        .build()?;

    let mut out = stdout();
    while bar.current() < bar.total() {
        bar.inc(CHUNK);
        bar.draw(&mut out)?;
        thread::sleep(Duration::from_millis(20));
    }
    bar.finish().draw(&mut out)?;
    writeln!(out)?;

    // The same layout, draining instead of filling.
    let mut countdown = ProgressBarBuilder::reverse(50).labelled("cooldown").build()?;
    for _ in 0..50 {
        countdown.increment().draw(&mut out)?;
        thread::sleep(Duration::from_millis(20));
    }
    countdown.halt().draw(&mut out)?;
    writeln!(out)?;

    Ok(())
}
