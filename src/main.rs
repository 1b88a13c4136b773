use std::{path::PathBuf, time::Duration};

use chrono::{DateTime, Utc};
use clap::Parser as _;
use tzline_lib::RunOptions;

#[derive(Debug, Clone, clap::Parser)]
#[command(version, about = "Timezone timelines with a synchronized now line")]
struct Cli {
    /// Settings file; created with defaults on first change.
    #[arg(long, default_value = "tzline.json")]
    config: PathBuf,
    /// Print one frame and exit.
    #[arg(long)]
    once: bool,
    /// Emit frames as JSON.
    #[arg(long)]
    json: bool,
    /// Pin the clock to an RFC 3339 instant, e.g. 2026-01-15T02:00:00Z.
    #[arg(long)]
    at: Option<DateTime<Utc>>,
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tzline_lib::run(RunOptions {
        config_path: cli.config,
        once: cli.once,
        json: cli.json,
        at: cli.at,
        tick_interval: Duration::from_millis(cli.tick_ms.max(1)),
    })
    .await
}
