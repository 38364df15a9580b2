// HTTP client wrapper for the Siteline API
//
// Decision: Every operation is a single request; no retries, no caching.
// Decision: The interactive variant attaches a bearer token from its credential
// provider; the server-safe variant never does. Both expose the same methods.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use siteline_core::{
    ensure_absolute_url, Environment, Failure, FormPart, MultipartForm, Operation, Payload,
};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::credentials::CredentialProvider;
use crate::error::{ClientError, Result};

/// Typed client for the content API
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    asset_origin: String,
    http: reqwest::Client,
    timeout: Duration,
    upload_timeout: Duration,
    credentials: Option<Arc<dyn CredentialProvider>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("interactive", &self.is_interactive())
            .finish()
    }
}

/// Request body as handed to the request interceptor
enum Body<'a, B> {
    Empty,
    Json(&'a B),
    Multipart(MultipartForm),
}

/// Accepts both `[...]` / `{...}` and `{ "data": ... }` response shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

impl ApiClient {
    /// Client for server-side use. Never attaches credentials.
    pub fn server(config: &ClientConfig, env: &Environment) -> Result<Self> {
        Self::build(config, env, None)
    }

    /// Client for interactive use. Asks `credentials` for a bearer token on every request.
    pub fn interactive(
        config: &ClientConfig,
        env: &Environment,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self> {
        Self::build(config, env, Some(credentials))
    }

    fn build(
        config: &ClientConfig,
        env: &Environment,
        credentials: Option<Arc<dyn CredentialProvider>>,
    ) -> Result<Self> {
        let raw = env.api_base_url(&config.origins);
        let base_url = Url::parse(&raw)
            .map_err(|e| ClientError::config(format!("invalid API base URL '{}': {}", raw, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::config(format!(
                "API base URL '{}' cannot have path segments",
                raw
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("siteline/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            base_url,
            asset_origin: env.asset_origin(&config.origins).to_string(),
            http,
            timeout: config.timeout,
            upload_timeout: config.upload_timeout,
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn is_interactive(&self) -> bool {
        self.credentials.is_some()
    }

    /// Resolve a backend file/image path to an absolute URL for this environment.
    pub fn resolve_url(&self, path: Option<&str>) -> Option<String> {
        ensure_absolute_url(path, &self.asset_origin)
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        op: Operation,
        segments: &[&str],
    ) -> Result<T> {
        let request = self.request::<()>(Method::GET, segments, Body::Empty)?;
        let response = self.execute(op, request).await?;
        decode(op, response).await
    }

    pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        op: Operation,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<T> {
        let request = self.request(method, segments, Body::Json(body))?;
        let response = self.execute(op, request).await?;
        decode(op, response).await
    }

    pub(crate) async fn send_payload<B: Serialize, T: DeserializeOwned>(
        &self,
        op: Operation,
        method: Method,
        segments: &[&str],
        payload: Payload<B>,
    ) -> Result<T> {
        match payload {
            Payload::Json(body) => self.send_json(op, method, segments, &body).await,
            Payload::Multipart(form) => {
                let request = self.request::<B>(method, segments, Body::Multipart(form))?;
                let response = self.execute(op, request).await?;
                decode(op, response).await
            }
        }
    }

    /// Send a request whose response body is irrelevant (deletes, acknowledgements).
    pub(crate) async fn send_unit<B: Serialize>(
        &self,
        op: Operation,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<()> {
        let body = body.map_or(Body::Empty, Body::Json);
        let request = self.request(method, segments, body)?;
        self.execute(op, request).await?;
        Ok(())
    }

    /// Request interceptor: timeout, bearer token, body encoding.
    fn request<B: Serialize>(
        &self,
        method: Method,
        segments: &[&str],
        body: Body<'_, B>,
    ) -> Result<RequestBuilder> {
        let url = self.url(segments);
        debug!(method = %method, url = %url, "Sending request");

        let mut request = self
            .http
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(credentials) = &self.credentials {
            if let Some(token) = credentials.token() {
                request = request.bearer_auth(token);
            }
        }

        let request = match body {
            Body::Empty => request.timeout(self.timeout),
            // `.json` sets `Content-Type: application/json`
            Body::Json(body) => request.timeout(self.timeout).json(body),
            // The multipart encoder sets its own content type with the boundary;
            // no JSON content type is ever set on this path.
            Body::Multipart(form) => request
                .timeout(self.upload_timeout)
                .multipart(to_reqwest_form(form)?),
        };
        Ok(request)
    }

    /// Response interceptor: pass successes through, translate failures.
    async fn execute(&self, op: Operation, request: RequestBuilder) -> Result<Response> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, timeout = e.is_timeout(), "Request failed before a response");
                return Err(ClientError::from(op.translate(&transport_failure(&e))));
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let body = response.bytes().await.unwrap_or_default();
        warn!(status = status.as_u16(), url = %url, "Request rejected by backend");
        Err(ClientError::from(op.translate(&Failure::response(
            status.as_u16(),
            &body,
        ))))
    }
}

async fn decode<T: DeserializeOwned>(op: Operation, response: Response) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ClientError::from(op.translate(&transport_failure(&e))))?;

    serde_json::from_slice::<Envelope<T>>(&bytes)
        .map(Envelope::into_inner)
        .map_err(|e| {
            warn!(error = %e, "Failed to decode response body");
            ClientError::from(op.translate(&Failure::transport()))
        })
}

fn transport_failure(e: &reqwest::Error) -> Failure {
    if e.is_timeout() {
        Failure::timeout()
    } else {
        Failure::transport()
    }
}

fn to_reqwest_form(form: MultipartForm) -> Result<reqwest::multipart::Form> {
    let mut out = reqwest::multipart::Form::new();
    for part in form.into_parts() {
        out = match part {
            FormPart::Text { name, value } => out.text(name, value),
            FormPart::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let file = reqwest::multipart::Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|source| ClientError::Form {
                        field: name.clone(),
                        source,
                    })?;
                out.part(name, file)
            }
        };
    }
    Ok(out)
}
