use serde::{Deserialize, Deserializer, Serialize};

/// A persisted timeline row as it appears in the config file.
///
/// Everything but `id` tolerates being missing or `null` and reads as an
/// empty string, which the view renders as a placeholder row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRecord {
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    /// IANA identifier, e.g. `Australia/Sydney`.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub timezone: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub wake_time: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub sleep_time: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub work_start: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub work_end: String,
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Fields supplied when adding a timeline; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeline {
    pub name: String,
    pub timezone: String,
    pub wake_time: String,
    pub sleep_time: String,
    pub work_start: String,
    pub work_end: String,
}

impl NewTimeline {
    pub fn into_record(self, id: String) -> TimelineRecord {
        TimelineRecord {
            id,
            name: self.name,
            timezone: self.timezone,
            wake_time: self.wake_time,
            sleep_time: self.sleep_time,
            work_start: self.work_start,
            work_end: self.work_end,
        }
    }
}

impl TimelineRecord {
    pub(crate) fn with_standard_hours(id: &str, name: &str, timezone: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            timezone: timezone.into(),
            wake_time: "07:00".into(),
            sleep_time: "23:00".into(),
            work_start: "09:00".into(),
            work_end: "17:00".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_null_fields_read_as_empty() {
        let record: TimelineRecord = serde_json::from_str(
            r#"{ "id": "7", "name": "Old", "timezone": "Europe/Paris",
                 "wakeTime": "06:00", "sleepTime": null, "workStart": "08:00" }"#,
        )
        .unwrap();
        assert_eq!(record.name, "Old");
        assert_eq!(record.sleep_time, "");
        assert_eq!(record.work_end, "");
    }

    #[test]
    fn id_is_still_required() {
        let missing_id = serde_json::from_str::<TimelineRecord>(r#"{ "name": "Nobody" }"#);
        assert!(missing_id.is_err());
    }
}
