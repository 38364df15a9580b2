// Event operations

use reqwest::Method;
use siteline_core::{Action, EntityKind, Event, EventInput, Operation, Payload};

use super::require_id;
use crate::error::Result;
use crate::http::ApiClient;

const LIST: Operation = Operation::new(EntityKind::Event, Action::List);
const GET: Operation = Operation::new(EntityKind::Event, Action::Get);
const CREATE: Operation = Operation::new(EntityKind::Event, Action::Create);
const UPDATE: Operation = Operation::new(EntityKind::Event, Action::Update);
const DELETE: Operation = Operation::new(EntityKind::Event, Action::Delete);

impl ApiClient {
    /// Public event listing. Events without a `published` flag are kept.
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let events: Vec<Event> = self.get(LIST, &["events"]).await?;
        Ok(events
            .into_iter()
            .filter(Event::is_publicly_visible)
            .collect())
    }

    pub async fn get_event(&self, id: &str) -> Result<Event> {
        require_id(GET, id)?;
        self.get(GET, &["events", id]).await
    }

    /// Create an event, defaulting `published` to true on both payload kinds.
    pub async fn create_event(&self, mut payload: Payload<EventInput>) -> Result<Event> {
        payload.publish_by_default();
        self.send_payload(CREATE, Method::POST, &["events"], payload)
            .await
    }

    pub async fn update_event(&self, id: &str, payload: Payload<EventInput>) -> Result<Event> {
        require_id(UPDATE, id)?;
        self.send_payload(UPDATE, Method::PUT, &["events", id], payload)
            .await
    }

    pub async fn delete_event(&self, id: &str) -> Result<()> {
        require_id(DELETE, id)?;
        self.send_unit::<()>(DELETE, Method::DELETE, &["events", id], None)
            .await
    }
}
