use std::sync::Arc;

use conference_model::ConferenceContent;
use log::{info, warn};
use serde::de::DeserializeOwned;

use crate::{
    config::{ConfigError, EventmobiConfig},
    convert::convert_all,
    error::FetchError,
    model::{
        AgendaSectionResponse, AttendeesSectionResponse, CompaniesSectionResponse, EventResponse,
        MapsSectionResponse, SpeakersSectionResponse,
    },
    parser::{JsonParser, SectionResponseParser, fetch_and_parse},
    section::{SectionLookup, SectionType, extract_sections, validate_required},
    transport::{ArcTransport, HttpTransport},
};

/// Client for one Eventmobi event.
///
/// Section locations are only known after the event itself has been
/// fetched, so every section fetch takes the [`SectionLookup`] produced by
/// [`EventmobiClient::fetch_event`]. Requests are issued one at a time and
/// never retried.
pub struct EventmobiClient {
    config: EventmobiConfig,
    transport: ArcTransport,
}

impl EventmobiClient {
    pub fn new(config: EventmobiConfig) -> Result<Self, ConfigError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(Box::new(transport))))
    }

    pub fn with_transport(config: EventmobiConfig, transport: ArcTransport) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &EventmobiConfig {
        &self.config
    }

    pub async fn fetch_event(&self) -> Result<(EventResponse, SectionLookup), FetchError> {
        let mut lookup = SectionLookup::new();
        let event = self.fetch_event_into(&mut lookup).await?;
        Ok((event, lookup))
    }

    /// Fetches the event and records its sections into `lookup`.
    ///
    /// Existing entries are overwritten, never cleared. If a required
    /// section is missing the sections that were present stay recorded.
    pub async fn fetch_event_into(
        &self,
        lookup: &mut SectionLookup,
    ) -> Result<EventResponse, FetchError> {
        let url = self.config.event_url();
        let parser = JsonParser::<EventResponse>::new();
        let event: EventResponse = fetch_and_parse(&**self.transport, &url, &parser).await?;

        extract_sections(&event, lookup);
        if let Err(e) = validate_required(lookup) {
            warn!("Event {} is incomplete: {}", event.response.id, e);
            return Err(e);
        }

        let known: Vec<&str> = lookup
            .known_sections()
            .iter()
            .map(SectionType::as_str)
            .collect();
        info!(
            "Fetched event {} ({}) with sections {:?}",
            event.response.name, event.response.id, known
        );
        Ok(event)
    }

    pub async fn fetch_section<T>(
        &self,
        lookup: &SectionLookup,
        section_type: SectionType,
    ) -> Result<Vec<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = lookup.location(section_type)?;
        let parser = SectionResponseParser::<T>::new();
        fetch_and_parse(&**self.transport, &url, &parser).await
    }

    pub async fn fetch_agenda(
        &self,
        lookup: &SectionLookup,
    ) -> Result<AgendaSectionResponse, FetchError> {
        self.fetch_section(lookup, SectionType::Agenda).await
    }

    pub async fn fetch_speakers(
        &self,
        lookup: &SectionLookup,
    ) -> Result<SpeakersSectionResponse, FetchError> {
        self.fetch_section(lookup, SectionType::Speakers).await
    }

    pub async fn fetch_attendees(
        &self,
        lookup: &SectionLookup,
    ) -> Result<AttendeesSectionResponse, FetchError> {
        self.fetch_section(lookup, SectionType::Attendees).await
    }

    pub async fn fetch_maps(
        &self,
        lookup: &SectionLookup,
    ) -> Result<MapsSectionResponse, FetchError> {
        self.fetch_section(lookup, SectionType::Maps).await
    }

    pub async fn fetch_companies(
        &self,
        lookup: &SectionLookup,
    ) -> Result<CompaniesSectionResponse, FetchError> {
        self.fetch_section(lookup, SectionType::Companies).await
    }

    /// Event plus every section, converted to conference records.
    pub async fn fetch_all(&self) -> Result<ConferenceContent, FetchError> {
        let (event, lookup) = self.fetch_event().await?;
        let agenda = self.fetch_agenda(&lookup).await?;
        let speakers = self.fetch_speakers(&lookup).await?;
        let attendees = self.fetch_attendees(&lookup).await?;
        let maps = self.fetch_maps(&lookup).await?;
        let companies = self.fetch_companies(&lookup).await?;

        Ok(ConferenceContent {
            event: event.response.into(),
            agenda: convert_all(agenda),
            speakers: convert_all(speakers),
            attendees: convert_all(attendees),
            maps: convert_all(maps),
            companies: convert_all(companies),
        })
    }
}
