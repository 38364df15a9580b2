// Career operations

use reqwest::Method;
use siteline_core::{find_by_id, Action, Career, CareerInput, EntityKind, Operation, Payload};

use super::{not_found, require_id};
use crate::error::Result;
use crate::http::ApiClient;

const LIST: Operation = Operation::new(EntityKind::Career, Action::List);
const LIST_ALL: Operation = Operation::new(EntityKind::Career, Action::ListAll);
const GET: Operation = Operation::new(EntityKind::Career, Action::Get);
const CREATE: Operation = Operation::new(EntityKind::Career, Action::Create);
const UPDATE: Operation = Operation::new(EntityKind::Career, Action::Update);
const DELETE: Operation = Operation::new(EntityKind::Career, Action::Delete);

impl ApiClient {
    /// Public career listing. Only openings with `published: true` are kept;
    /// expired openings are returned and left for the caller to label.
    pub async fn list_careers(&self) -> Result<Vec<Career>> {
        let careers: Vec<Career> = self.get(LIST, &["careers"]).await?;
        Ok(careers
            .into_iter()
            .filter(Career::is_publicly_visible)
            .collect())
    }

    /// Every opening including unpublished ones. Requires an admin token.
    pub async fn list_all_careers(&self) -> Result<Vec<Career>> {
        self.get(LIST_ALL, &["careers", "admin", "all"]).await
    }

    /// Look up a published opening by canonical identifier (listing + local match).
    pub async fn get_career(&self, id: &str) -> Result<Career> {
        require_id(GET, id)?;
        let careers: Vec<Career> = self.get(GET, &["careers"]).await?;
        let visible: Vec<Career> = careers
            .into_iter()
            .filter(Career::is_publicly_visible)
            .collect();
        find_by_id(&visible, id)
            .cloned()
            .ok_or_else(|| not_found(GET))
    }

    pub async fn create_career(&self, mut payload: Payload<CareerInput>) -> Result<Career> {
        payload.publish_by_default();
        self.send_payload(CREATE, Method::POST, &["careers"], payload)
            .await
    }

    pub async fn update_career(&self, id: &str, payload: Payload<CareerInput>) -> Result<Career> {
        require_id(UPDATE, id)?;
        self.send_payload(UPDATE, Method::PUT, &["careers", id], payload)
            .await
    }

    pub async fn delete_career(&self, id: &str) -> Result<()> {
        require_id(DELETE, id)?;
        self.send_unit::<()>(DELETE, Method::DELETE, &["careers", id], None)
            .await
    }
}
