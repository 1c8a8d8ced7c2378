mod agenda;
mod people;
mod venue;

use serde::{Deserialize, Serialize};

pub use agenda::AgendaItem;
pub use people::{Attendee, Speaker};
pub use venue::{Company, EventMap};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub timezone: String,
}

/// Everything known about one conference after a full sync.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceContent {
    pub event: Event,
    pub agenda: Vec<AgendaItem>,
    pub speakers: Vec<Speaker>,
    pub attendees: Vec<Attendee>,
    pub maps: Vec<EventMap>,
    pub companies: Vec<Company>,
}

impl ConferenceContent {
    pub fn speaker(&self, speaker_id: &str) -> Option<&Speaker> {
        self.speakers.iter().find(|s| s.id == speaker_id)
    }

    /// Agenda items the speaker is listed on, in agenda order.
    pub fn speaker_sessions(&self, speaker_id: &str) -> Vec<&AgendaItem> {
        self.agenda
            .iter()
            .filter(|item| item.has_speaker(speaker_id))
            .collect()
    }
}
