//! Mapping from Eventmobi wire items to the shared conference records.

use conference_model::{AgendaItem, Attendee, Company, Event, EventMap, Speaker};

use crate::model::{
    AgendaSessionItem, AttendeeItem, CompanyItem, EventBody, MapItem, SpeakerItem,
};

impl From<EventBody> for Event {
    fn from(body: EventBody) -> Self {
        Event {
            id: body.id,
            name: body.name,
            description: body.description.unwrap_or_default(),
            timezone: body.timezone.unwrap_or_default(),
        }
    }
}

impl From<AgendaSessionItem> for AgendaItem {
    fn from(item: AgendaSessionItem) -> Self {
        AgendaItem {
            id: item.id,
            topic: item.title,
            description: item.description.unwrap_or_default(),
            location: item.location.unwrap_or_default(),
            raw_date: item.date,
            epoch_start_time: item.start_time,
            epoch_end_time: item.end_time,
            group_ids: item.group_ids,
            speaker_ids: item.speaker_ids,
        }
    }
}

impl From<SpeakerItem> for Speaker {
    fn from(item: SpeakerItem) -> Self {
        Speaker {
            id: item.id,
            name: item.name,
            title: item.title.unwrap_or_default(),
            company: item.company.unwrap_or_default(),
            about: item.about.unwrap_or_default(),
            image_url: item.image_url.unwrap_or_default(),
            website: item.website.unwrap_or_default(),
            twitter: item.twitter.unwrap_or_default(),
            linkedin: item.linkedin.unwrap_or_default(),
        }
    }
}

impl From<AttendeeItem> for Attendee {
    fn from(item: AttendeeItem) -> Self {
        Attendee {
            id: item.id,
            first_name: item.first_name,
            last_name: item.last_name,
            title: item.title.unwrap_or_default(),
            company: item.company.unwrap_or_default(),
            image_url: item.image_url.unwrap_or_default(),
            about: item.about.unwrap_or_default(),
        }
    }
}

impl From<MapItem> for EventMap {
    fn from(item: MapItem) -> Self {
        EventMap {
            id: item.id,
            name: item.name,
            description: item.description.unwrap_or_default(),
            image_url: item.image_url.unwrap_or_default(),
        }
    }
}

impl From<CompanyItem> for Company {
    fn from(item: CompanyItem) -> Self {
        Company {
            id: item.id,
            name: item.name,
            description: item.description.unwrap_or_default(),
            logo_url: item.logo_url.unwrap_or_default(),
            website: item.website.unwrap_or_default(),
            booth: item.booth.unwrap_or_default(),
        }
    }
}

pub fn convert_all<W, D>(items: Vec<W>) -> Vec<D>
where
    W: Into<D>,
{
    items.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agenda_item_mapping() {
        let item = AgendaSessionItem {
            id: "42".to_string(),
            title: "Rust in Production".to_string(),
            description: Some("War stories".to_string()),
            location: None,
            date: 20161108,
            start_time: 1_478_595_600,
            end_time: 1_478_599_200,
            group_ids: vec!["track-a".to_string()],
            speaker_ids: vec!["s1".to_string(), "s2".to_string()],
        };

        let agenda: AgendaItem = item.into();
        assert_eq!(agenda.topic, "Rust in Production");
        assert_eq!(agenda.description, "War stories");
        assert_eq!(agenda.location, "");
        assert_eq!(agenda.raw_date, 20161108);
        assert_eq!(agenda.epoch_start_time, 1_478_595_600);
        assert_eq!(agenda.epoch_end_time, 1_478_599_200);
        assert_eq!(agenda.group_ids, vec!["track-a"]);
        assert_eq!(agenda.speaker_ids, vec!["s1", "s2"]);
    }

    #[test]
    fn test_convert_all() {
        let companies: Vec<Company> = convert_all(vec![CompanyItem {
            id: "c1".to_string(),
            name: "Acme".to_string(),
            description: None,
            logo_url: Some("https://acme.test/logo.png".to_string()),
            website: None,
            booth: Some("B12".to_string()),
        }]);
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].booth, "B12");
        assert_eq!(companies[0].website, "");
    }
}
