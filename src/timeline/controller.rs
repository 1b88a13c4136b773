use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use anyhow::{bail, Context, Result};
use tokio::{
    sync::{watch, Mutex},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tokio_util::sync::CancellationToken;

use crate::clock::ClockSource;
use crate::settings::SettingsStore;

use super::state::TimelineFrame;
use super::view::build_frame;

const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

struct Ticker {
    handle: JoinHandle<()>,
    cancel_token: CancellationToken,
}

/// Drives the 1 Hz refresh and publishes each frame on a watch channel.
#[derive(Clone)]
pub struct TimelineController {
    settings: Arc<SettingsStore>,
    clock: Arc<dyn ClockSource>,
    frames: Arc<watch::Sender<Option<TimelineFrame>>>,
    ticker: Arc<Mutex<Option<Ticker>>>,
    ticks: Arc<AtomicU64>,
    tick_interval: Duration,
}

impl TimelineController {
    pub fn new(settings: Arc<SettingsStore>, clock: Arc<dyn ClockSource>) -> Self {
        let (frames, _) = watch::channel(None);
        Self {
            settings,
            clock,
            frames: Arc::new(frames),
            ticker: Arc::new(Mutex::new(None)),
            ticks: Arc::new(AtomicU64::new(0)),
            tick_interval: Duration::from_secs(1),
        }
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<TimelineFrame>> {
        self.frames.subscribe()
    }

    /// Latest published frame, if any tick or refresh has happened yet.
    pub fn snapshot(&self) -> Option<TimelineFrame> {
        self.frames.borrow().clone()
    }

    /// Rebuild and publish right away, outside the tick cadence.
    pub fn refresh(&self) -> TimelineFrame {
        let tick = self.ticks.load(Ordering::Relaxed);
        let frame = build_frame(&self.settings.config(), self.clock.now(), tick);
        self.frames.send_replace(Some(frame.clone()));
        frame
    }

    pub async fn is_running(&self) -> bool {
        self.ticker
            .lock()
            .await
            .as_ref()
            .map(|ticker| !ticker.handle.is_finished())
            .unwrap_or(false)
    }

    pub async fn start(&self) -> Result<()> {
        let mut ticker_guard = self.ticker.lock().await;
        if let Some(ticker) = ticker_guard.as_ref() {
            if !ticker.handle.is_finished() {
                bail!("timeline ticker already running");
            }
        }

        let cancel_token = CancellationToken::new();
        let handle = tokio::spawn(ticker_loop(
            self.settings.clone(),
            self.clock.clone(),
            self.frames.clone(),
            self.ticks.clone(),
            self.tick_interval,
            cancel_token.clone(),
        ));

        log_info!(
            "timeline ticker started ({} ms)",
            self.tick_interval.as_millis()
        );
        *ticker_guard = Some(Ticker {
            handle,
            cancel_token,
        });
        Ok(())
    }

    pub async fn stop(&self) -> Result<()> {
        let Some(ticker) = self.ticker.lock().await.take() else {
            return Ok(());
        };

        ticker.cancel_token.cancel();
        ticker
            .handle
            .await
            .context("timeline ticker task failed to join")
    }
}

async fn ticker_loop(
    settings: Arc<SettingsStore>,
    clock: Arc<dyn ClockSource>,
    frames: Arc<watch::Sender<Option<TimelineFrame>>>,
    ticks: Arc<AtomicU64>,
    tick_interval: Duration,
    cancel_token: CancellationToken,
) {
    let mut ticker = tokio::time::interval(tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut reported: HashSet<String> = HashSet::new();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let tick = ticks.fetch_add(1, Ordering::Relaxed) + 1;
                let frame = build_frame(&settings.config(), clock.now(), tick);
                report_degraded_rows(&frame, &mut reported);
                frames.send_replace(Some(frame));
            }
            _ = cancel_token.cancelled() => {
                log_info!("timeline ticker shutting down");
                break;
            }
        }
    }
}

/// Warn once per problem instead of once per second.
fn report_degraded_rows(frame: &TimelineFrame, reported: &mut HashSet<String>) {
    let mut current = HashSet::new();

    for row in &frame.rows {
        if let Some(err) = &row.schedule_error {
            let key = format!("{}:schedule", row.id);
            if !reported.contains(&key) {
                log_warn!("timeline {:?} shows a placeholder bar: {err}", row.name);
            }
            current.insert(key);
        }
        if row.sync.clock_fallback {
            let key = format!("{}:clock", row.id);
            if !reported.contains(&key) {
                log_warn!(
                    "timeline {:?} has unknown timezone {:?}; showing local time",
                    row.name,
                    row.timezone
                );
            }
            current.insert(key);
        }
    }

    *reported = current;
}
