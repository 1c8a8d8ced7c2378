use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::{error::FetchError, model::SectionResponse, transport::Transport};

pub trait Parser<T> {
    fn parse(&self, payload: &str) -> Result<T, FetchError>;
}

/// Decodes the whole payload as `T`.
pub struct JsonParser<T>(PhantomData<fn() -> T>);

impl<T> JsonParser<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for JsonParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Parser<T> for JsonParser<T> {
    fn parse(&self, payload: &str) -> Result<T, FetchError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Unwraps the `{"response": {"items": [...]}}` envelope shared by all
/// section resources.
pub struct SectionResponseParser<T>(PhantomData<fn() -> T>);

impl<T> SectionResponseParser<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for SectionResponseParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Parser<Vec<T>> for SectionResponseParser<T> {
    fn parse(&self, payload: &str) -> Result<Vec<T>, FetchError> {
        let resp: SectionResponse<T> = serde_json::from_str(payload)?;
        Ok(resp.response.items)
    }
}

pub async fn fetch_and_parse<T, P>(
    transport: &dyn Transport,
    url: &str,
    parser: &P,
) -> Result<T, FetchError>
where
    P: Parser<T> + ?Sized,
{
    let payload = transport.get(url).await?;
    parser.parse(&payload)
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{AgendaSessionItem, EventResponse},
        transport::MockTransport,
    };

    use super::*;

    #[test]
    fn test_section_parser_unwraps_items() {
        let payload = r#"{
            "status": "success",
            "response": {
                "items": [
                    {"id": "1", "title": "Keynote", "start_time": 100, "end_time": 200},
                    {"id": "2", "title": "Lunch", "speaker_ids": ["s1"]}
                ]
            }
        }"#;
        let items = SectionResponseParser::<AgendaSessionItem>::new()
            .parse(payload)
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].end_time, 200);
        assert_eq!(items[1].speaker_ids, vec!["s1"]);
    }

    #[test]
    fn test_section_parser_empty_items() {
        let items = SectionResponseParser::<AgendaSessionItem>::new()
            .parse(r#"{"response": {}}"#)
            .unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_failure() {
        let err = SectionResponseParser::<AgendaSessionItem>::new()
            .parse(r#"{"items": []}"#)
            .unwrap_err();
        assert!(err.is_parse());
    }

    #[tokio::test]
    async fn test_fetch_and_parse() {
        let transport = MockTransport::default();
        transport.respond(
            "https://api.test/e.json",
            r#"{"response": {"id": "9", "name": "Summit"}}"#,
        );

        let parser = JsonParser::<EventResponse>::new();
        let event: EventResponse = fetch_and_parse(&transport, "https://api.test/e.json", &parser)
            .await
            .unwrap();
        assert_eq!(event.response.name, "Summit");
        assert!(event.response.sections.is_empty());

        let err = fetch_and_parse::<EventResponse, _>(
            &transport,
            "https://api.test/other.json",
            &parser,
        )
        .await
        .unwrap_err();
        assert!(err.is_transport());
    }
}
