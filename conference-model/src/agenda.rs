use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    pub id: String,
    pub topic: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Display date as delivered by the backend, not a timestamp.
    #[serde(default)]
    pub raw_date: i64,
    /// Seconds since the unix epoch.
    #[serde(default)]
    pub epoch_start_time: i64,
    #[serde(default)]
    pub epoch_end_time: i64,
    #[serde(default)]
    pub group_ids: Vec<String>,
    #[serde(default)]
    pub speaker_ids: Vec<String>,
}

impl AgendaItem {
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.epoch_start_time, 0)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.epoch_end_time, 0)
    }

    pub fn duration(&self) -> Option<TimeDelta> {
        let delta = self.end_time()? - self.start_time()?;
        if delta < TimeDelta::zero() {
            None
        } else {
            Some(delta)
        }
    }

    pub fn is_on_stage(&self, location: &str) -> bool {
        self.location.eq_ignore_ascii_case(location)
    }

    pub fn has_speaker(&self, speaker_id: &str) -> bool {
        self.speaker_ids.iter().any(|id| id == speaker_id)
    }
}
