// Contact-form operations

use reqwest::Method;
use siteline_core::{Action, Contact, ContactInput, EntityKind, Operation};

use super::require_id;
use crate::error::Result;
use crate::http::ApiClient;

const SUBMIT: Operation = Operation::new(EntityKind::Contact, Action::Submit);
const LIST_ALL: Operation = Operation::new(EntityKind::Contact, Action::ListAll);
const MARK_READ: Operation = Operation::new(EntityKind::Contact, Action::MarkRead);
const DELETE: Operation = Operation::new(EntityKind::Contact, Action::Delete);

impl ApiClient {
    /// Public contact-form submission. The backend's acknowledgement body is not interpreted.
    pub async fn submit_contact(&self, input: &ContactInput) -> Result<()> {
        self.send_unit(SUBMIT, Method::POST, &["contact"], Some(input))
            .await
    }

    /// All submissions. Requires an admin token.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>> {
        self.get(LIST_ALL, &["contact", "admin", "all"]).await
    }

    pub async fn mark_contact_read(&self, id: &str) -> Result<Contact> {
        require_id(MARK_READ, id)?;
        self.send_json(
            MARK_READ,
            Method::PUT,
            &["contact", id, "read"],
            &serde_json::json!({}),
        )
        .await
    }

    pub async fn delete_contact(&self, id: &str) -> Result<()> {
        require_id(DELETE, id)?;
        self.send_unit::<()>(DELETE, Method::DELETE, &["contact", id], None)
            .await
    }
}
