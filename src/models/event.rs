use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub host: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: bool,
    pub required_receipt: bool,
    pub venue: Option<String>,
    /// Object-storage URL of the certificate template; opaque to this service.
    pub certificates_url: Option<String>,
}

/// Wire shape of an event for the console lists, with dates pre-formatted
/// as `M/D/YYYY`.
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: i32,
    pub name: String,
    pub host: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub active: bool,
    pub required_receipt: bool,
    pub venue: Option<String>,
    pub certificates_url: Option<String>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        EventResponse {
            id: event.id,
            name: event.name,
            host: event.host,
            description: event.description,
            start_date: short_date(event.start_date),
            end_date: short_date(event.end_date),
            active: event.active,
            required_receipt: event.required_receipt,
            venue: event.venue,
            certificates_url: event.certificates_url,
        }
    }
}

fn short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
