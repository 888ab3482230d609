//! Bouquet display host
//!
//! Runs the display against the system clock and logs each frame.
//! Set `BOUQUET_CONFIG` to a JSON config file to override defaults.
//!
//! Console input:
//!   v - display became visible again (re-render)
//!   m - toggle music
//!   q - quit

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

use bouquet_runtime::{telemetry, Display, DisplayEvent, LogPresenter, RuntimeConfig, SilentSink};
use bouquet_time::SystemClock;

const CONFIG_ENV: &str = "BOUQUET_CONFIG";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    telemetry::init_tracing(config.log_json)?;
    info!(epoch = %config.epoch, "starting bouquet display");

    let display = Display::from_config(
        &config,
        SystemClock,
        LogPresenter::new(config.log_json),
        SilentSink::default(),
    )?;

    let (tx, rx) = mpsc::channel(16);

    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let event = match line.trim() {
                "v" => DisplayEvent::VisibilityRegained,
                "m" => DisplayEvent::ToggleMusic,
                "q" => DisplayEvent::Shutdown,
                "" => continue,
                other => {
                    warn!("Unknown command: {}", other);
                    continue;
                }
            };
            if input_tx.send(event).await.is_err() {
                break; // Display stopped
            }
        }
    });

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(DisplayEvent::Shutdown).await;
        }
    });

    let stats = display.run(rx).await;
    info!(?stats, "bye");
    Ok(())
}
