mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod section;
pub mod transport;

pub use client::EventmobiClient;
pub use config::{ConfigError, EventmobiConfig};
pub use error::FetchError;
pub use section::{REQUIRED_SECTIONS, SectionLookup, SectionType};
