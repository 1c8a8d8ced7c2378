use std::{collections::HashMap, fmt, str::FromStr};

use log::debug;
use thiserror::Error;

use crate::{
    config::JSON_SUFFIX,
    error::FetchError,
    model::{EventResponse, Section},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionType {
    Agenda,
    Speakers,
    Attendees,
    Maps,
    Companies,
}

/// Sections an event must advertise, in the order they are checked.
pub const REQUIRED_SECTIONS: [SectionType; 5] = [
    SectionType::Agenda,
    SectionType::Speakers,
    SectionType::Companies,
    SectionType::Attendees,
    SectionType::Maps,
];

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Agenda => "agenda",
            SectionType::Speakers => "speakers",
            SectionType::Attendees => "attendees",
            SectionType::Maps => "maps",
            SectionType::Companies => "companies",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown section type: {0}")]
pub struct UnknownSectionType(pub String);

impl FromStr for SectionType {
    type Err = UnknownSectionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agenda" => Ok(SectionType::Agenda),
            "speakers" => Ok(SectionType::Speakers),
            "attendees" => Ok(SectionType::Attendees),
            "maps" => Ok(SectionType::Maps),
            "companies" => Ok(SectionType::Companies),
            other => Err(UnknownSectionType(other.to_string())),
        }
    }
}

/// Section type name to the section descriptor the event advertised for it.
///
/// Entries are only ever inserted or overwritten. Fetching the event again
/// into the same lookup keeps entries the newer response no longer lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionLookup {
    sections: HashMap<String, Section>,
}

impl SectionLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: Section) -> Option<Section> {
        self.sections.insert(section.section_type.clone(), section)
    }

    pub fn extend_from(&mut self, sections: &[Section]) {
        for section in sections {
            debug!(
                "Registering {} section at {}",
                section.section_type, section.url
            );
            self.insert(section.clone());
        }
    }

    pub fn get(&self, section_type: &str) -> Option<&Section> {
        self.sections.get(section_type)
    }

    pub fn contains(&self, section_type: &str) -> bool {
        self.sections.contains_key(section_type)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.sections.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Recorded sections this client has a fetcher for, in declaration order.
    ///
    /// Entries whose type the client does not recognize are skipped.
    pub fn known_sections(&self) -> Vec<SectionType> {
        let mut known: Vec<SectionType> = self
            .sections
            .keys()
            .filter_map(|name| match name.parse::<SectionType>() {
                Ok(section_type) => Some(section_type),
                Err(e) => {
                    debug!("Skipping section: {}", e);
                    None
                }
            })
            .collect();
        known.sort_unstable();
        known
    }

    /// Full retrieval location for a section.
    pub fn location(&self, section_type: SectionType) -> Result<String, FetchError> {
        self.get(section_type.as_str())
            .map(|section| format!("{}{}", section.url, JSON_SUFFIX))
            .ok_or(FetchError::SectionNotFetched(section_type))
    }
}

pub fn extract_sections(event: &EventResponse, lookup: &mut SectionLookup) {
    lookup.extend_from(&event.response.sections);
}

/// Fails with the first entry of [`REQUIRED_SECTIONS`] the lookup lacks.
pub fn validate_required(lookup: &SectionLookup) -> Result<(), FetchError> {
    match REQUIRED_SECTIONS
        .iter()
        .find(|section_type| !lookup.contains(section_type.as_str()))
    {
        Some(missing) => Err(FetchError::MissingSection(*missing)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use crate::model::EventBody;

    use super::*;

    fn section(section_type: &str, url: &str) -> Section {
        Section {
            id: None,
            name: None,
            section_type: section_type.to_string(),
            url: url.to_string(),
        }
    }

    fn event(sections: Vec<Section>) -> EventResponse {
        EventResponse {
            status: None,
            response: EventBody {
                id: "1".to_string(),
                name: "DevFest".to_string(),
                description: None,
                timezone: None,
                sections,
            },
        }
    }

    #[test]
    fn test_section_type_names() {
        for section_type in REQUIRED_SECTIONS {
            assert_eq!(
                section_type.as_str().parse::<SectionType>().unwrap(),
                section_type
            );
        }
        assert!("news".parse::<SectionType>().is_err());
        assert_eq!(SectionType::Companies.to_string(), "companies");
    }

    #[test]
    fn test_extract_and_validate() {
        let mut lookup = SectionLookup::new();
        extract_sections(
            &event(vec![
                section("agenda", "u1"),
                section("speakers", "u2"),
                section("attendees", "u3"),
                section("maps", "u4"),
                section("companies", "u5"),
                section("news", "u6"),
            ]),
            &mut lookup,
        );
        assert_eq!(lookup.len(), 6);
        assert!(validate_required(&lookup).is_ok());
        assert_eq!(lookup.location(SectionType::Maps).unwrap(), "u4.json");
    }

    #[test]
    fn test_validate_reports_first_missing_in_declared_order() {
        let mut lookup = SectionLookup::new();
        lookup.extend_from(&[section("agenda", "u1"), section("maps", "u4")]);
        assert!(matches!(
            validate_required(&lookup),
            Err(FetchError::MissingSection(SectionType::Speakers))
        ));

        lookup.insert(section("speakers", "u2"));
        assert!(matches!(
            validate_required(&lookup),
            Err(FetchError::MissingSection(SectionType::Companies))
        ));
    }

    #[test]
    fn test_duplicate_type_keeps_last() {
        let mut lookup = SectionLookup::new();
        lookup.extend_from(&[section("agenda", "old"), section("agenda", "new")]);
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.location(SectionType::Agenda).unwrap(), "new.json");
    }

    #[test]
    fn test_missing_location() {
        let lookup = SectionLookup::new();
        assert!(lookup.is_empty());
        assert!(matches!(
            lookup.location(SectionType::Agenda),
            Err(FetchError::SectionNotFetched(SectionType::Agenda))
        ));
    }

    #[test]
    fn test_known_sections_skip_unrecognized() {
        let mut lookup = SectionLookup::new();
        lookup.extend_from(&[
            section("companies", "u5"),
            section("news", "u6"),
            section("agenda", "u1"),
            section("Maps", "u7"),
        ]);
        assert_eq!(lookup.len(), 4);
        assert_eq!(
            lookup.known_sections(),
            vec![SectionType::Agenda, SectionType::Companies]
        );
    }

    #[test]
    fn test_section_types_sorted() {
        let mut lookup = SectionLookup::new();
        lookup.extend_from(&[section("maps", "u4"), section("agenda", "u1")]);
        assert_eq!(lookup.section_types(), vec!["agenda", "maps"]);
    }
}
