pub mod clock;
pub mod error;
pub mod models;
pub mod schedule;
pub mod settings;
pub mod sync;
pub mod timeline;
pub mod timezones;
mod utils;

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clock::{ClockSource, FixedClock, SystemClock};
use settings::SettingsStore;
use timeline::{commands::get_frame, TimelineController, TimelineFrame};

pub struct AppState {
    pub settings: Arc<SettingsStore>,
    pub timelines: TimelineController,
    pub clock: Arc<dyn ClockSource>,
}

impl AppState {
    pub fn new(settings_path: PathBuf, clock: Arc<dyn ClockSource>) -> Result<Self> {
        let settings = Arc::new(SettingsStore::new(settings_path)?);
        let timelines = TimelineController::new(settings.clone(), clock.clone());
        Ok(Self {
            settings,
            timelines,
            clock,
        })
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.timelines = self.timelines.with_tick_interval(tick_interval);
        self
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config_path: PathBuf,
    /// Print a single frame and exit instead of ticking.
    pub once: bool,
    pub json: bool,
    /// Pin the clock to this instant.
    pub at: Option<DateTime<Utc>>,
    pub tick_interval: Duration,
}

pub async fn run(options: RunOptions) -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("tzline starting up...");

    let clock: Arc<dyn ClockSource> = match options.at {
        Some(instant) => Arc::new(FixedClock(instant)),
        None => Arc::new(SystemClock),
    };

    if let Some(parent) = options.config_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
    }

    let state = AppState::new(options.config_path.clone(), clock)?
        .with_tick_interval(options.tick_interval);
    log::info!(
        "Loaded {} timeline(s) from {}",
        state.settings.timelines().len(),
        state.settings.path().display()
    );

    if options.once {
        let frame = get_frame(&state).map_err(anyhow::Error::msg)?;
        print_frame(&frame, options.json)?;
        return Ok(());
    }

    let mut frames = state.timelines.subscribe();
    state.timelines.start().await?;

    loop {
        tokio::select! {
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = frames.borrow_and_update().clone();
                if let Some(frame) = frame {
                    print_frame(&frame, options.json)?;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("Shutting down");
                break;
            }
        }
    }

    state.timelines.stop().await
}

fn print_frame(frame: &TimelineFrame, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(frame)?);
    } else {
        print!("{frame}");
        println!();
    }
    Ok(())
}
