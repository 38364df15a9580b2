// Blog operations

use reqwest::Method;
use siteline_core::{find_by_id, Action, Blog, BlogInput, EntityKind, Operation, Payload};

use super::{not_found, require_id};
use crate::error::Result;
use crate::http::ApiClient;

const LIST: Operation = Operation::new(EntityKind::Blog, Action::List);
const LIST_ALL: Operation = Operation::new(EntityKind::Blog, Action::ListAll);
const GET: Operation = Operation::new(EntityKind::Blog, Action::Get);
const CREATE: Operation = Operation::new(EntityKind::Blog, Action::Create);
const UPDATE: Operation = Operation::new(EntityKind::Blog, Action::Update);
const DELETE: Operation = Operation::new(EntityKind::Blog, Action::Delete);

impl ApiClient {
    /// Public blog listing. Only posts with `published: true` are kept.
    pub async fn list_blogs(&self) -> Result<Vec<Blog>> {
        let blogs: Vec<Blog> = self.get(LIST, &["blogs"]).await?;
        Ok(blogs.into_iter().filter(Blog::is_publicly_visible).collect())
    }

    /// Every post including drafts. Requires an admin token.
    pub async fn list_all_blogs(&self) -> Result<Vec<Blog>> {
        self.get(LIST_ALL, &["blogs", "admin", "all"]).await
    }

    /// Look up a published post by canonical identifier.
    ///
    /// The backend has no public single-post route, so this fetches the public
    /// listing and matches `id`/`_id` locally.
    pub async fn get_blog(&self, id: &str) -> Result<Blog> {
        require_id(GET, id)?;
        let blogs: Vec<Blog> = self.get(GET, &["blogs"]).await?;
        let visible: Vec<Blog> = blogs.into_iter().filter(Blog::is_publicly_visible).collect();
        find_by_id(&visible, id)
            .cloned()
            .ok_or_else(|| not_found(GET))
    }

    pub async fn create_blog(&self, mut payload: Payload<BlogInput>) -> Result<Blog> {
        payload.publish_by_default();
        self.send_payload(CREATE, Method::POST, &["blogs"], payload)
            .await
    }

    pub async fn update_blog(&self, id: &str, payload: Payload<BlogInput>) -> Result<Blog> {
        require_id(UPDATE, id)?;
        self.send_payload(UPDATE, Method::PUT, &["blogs", id], payload)
            .await
    }

    pub async fn delete_blog(&self, id: &str) -> Result<()> {
        require_id(DELETE, id)?;
        self.send_unit::<()>(DELETE, Method::DELETE, &["blogs", id], None)
            .await
    }
}
