use anyhow::{anyhow, bail, Context, Result};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use uuid::Uuid;

use crate::clock::is_known_timezone;
use crate::models::{NewTimeline, TimelineRecord};
use crate::schedule::TimelineSchedule;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub use_24_hour: bool,
    pub compact_mode: bool,
    pub sync_mode: bool,
    #[serde(deserialize_with = "readable_timelines")]
    pub timelines: Vec<TimelineRecord>,
    /// Keys owned by other parts of the app (window bounds, converter, theme).
    /// Carried through untouched on write-back.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            use_24_hour: false,
            compact_mode: false,
            sync_mode: true,
            timelines: vec![
                TimelineRecord::with_standard_hours("1", "You", "Australia/Sydney"),
                TimelineRecord::with_standard_hours("2", "Colleague", "America/Chicago"),
            ],
            extra: serde_json::Map::new(),
        }
    }
}

/// Keep every entry that reads as a record; one bad entry must not cost the
/// rest of the file.
fn readable_timelines<'de, D>(deserializer: D) -> Result<Vec<TimelineRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries =
        Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(idx, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("Skipping unreadable timeline #{idx} in settings: {err}");
                None
            }
        })
        .collect())
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<AppConfig>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            match serde_json::from_str(&contents) {
                Ok(data) => data,
                Err(err) => {
                    let backup = backup_path(&path);
                    fs::copy(&path, &backup).with_context(|| {
                        format!("Failed to back up unreadable settings to {}", backup.display())
                    })?;
                    warn!(
                        "Settings at {} are unreadable ({err}); using defaults, original kept at {}",
                        path.display(),
                        backup.display()
                    );
                    AppConfig::default()
                }
            }
        } else {
            AppConfig::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> AppConfig {
        self.read().clone()
    }

    pub fn timelines(&self) -> Vec<TimelineRecord> {
        self.read().timelines.clone()
    }

    pub fn sync_mode(&self) -> bool {
        self.read().sync_mode
    }

    pub fn use_24_hour(&self) -> bool {
        self.read().use_24_hour
    }

    pub fn compact_mode(&self) -> bool {
        self.read().compact_mode
    }

    pub fn set_sync_mode(&self, enabled: bool) -> Result<()> {
        self.mutate(|config| {
            config.sync_mode = enabled;
            Ok(())
        })
    }

    pub fn set_use_24_hour(&self, enabled: bool) -> Result<()> {
        self.mutate(|config| {
            config.use_24_hour = enabled;
            Ok(())
        })
    }

    pub fn set_compact_mode(&self, enabled: bool) -> Result<()> {
        self.mutate(|config| {
            config.compact_mode = enabled;
            Ok(())
        })
    }

    pub fn add_timeline(&self, timeline: NewTimeline) -> Result<TimelineRecord> {
        let record = timeline.into_record(Uuid::new_v4().to_string());
        validate_record(&record)?;

        let added = record.clone();
        self.mutate(move |config| {
            config.timelines.push(record);
            Ok(())
        })?;
        Ok(added)
    }

    pub fn update_timeline(&self, record: TimelineRecord) -> Result<()> {
        validate_record(&record)?;

        self.mutate(move |config| {
            let slot = config
                .timelines
                .iter_mut()
                .find(|existing| existing.id == record.id)
                .ok_or_else(|| anyhow!("no timeline with id {}", record.id))?;
            *slot = record;
            Ok(())
        })
    }

    pub fn remove_timeline(&self, id: &str) -> Result<TimelineRecord> {
        let mut removed = None;
        self.mutate(|config| {
            let idx = config
                .timelines
                .iter()
                .position(|existing| existing.id == id)
                .ok_or_else(|| anyhow!("no timeline with id {id}"))?;
            removed = Some(config.timelines.remove(idx));
            Ok(())
        })?;
        removed.ok_or_else(|| anyhow!("no timeline with id {id}"))
    }

    /// Apply `change` and persist; the in-memory copy is only replaced once
    /// the file write succeeded.
    fn mutate<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut AppConfig) -> Result<()>,
    {
        let mut guard = self.write()?;
        let mut next = guard.clone();
        change(&mut next)?;
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }

    fn persist(&self, data: &AppConfig) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }

    fn read(&self) -> RwLockReadGuard<'_, AppConfig> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, AppConfig>> {
        self.data
            .write()
            .map_err(|_| anyhow!("settings lock poisoned"))
    }
}

impl SettingsStore {
    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let data: AppConfig = serde_json::from_str(&contents)?;
        *self.write()? = data;
        Ok(())
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".bak");
    path.with_file_name(name)
}

fn validate_record(record: &TimelineRecord) -> Result<()> {
    if record.name.trim().is_empty() {
        bail!("timeline name must not be empty");
    }
    TimelineSchedule::from_record(record)
        .with_context(|| format!("timeline {:?} has an invalid schedule", record.name))?;
    if !is_known_timezone(&record.timezone) {
        warn!(
            "Timeline {:?} uses unknown timezone {:?}; local time will be shown",
            record.name, record.timezone
        );
    }
    Ok(())
}
