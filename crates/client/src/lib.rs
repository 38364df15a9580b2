// Siteline Client
//
// Typed async client for the Siteline content API (events, blogs, careers,
// contact submissions, auth, company info).
//
// Key design decisions:
// - One `ApiClient` type; `server` and `interactive` constructors differ only in credentials
// - Credentials come from an injected `CredentialProvider`, read per request
// - Callers choose JSON or multipart via `Payload`; create calls default `published` to true
// - Failures are translated into user-facing messages by `siteline_core::errors`

mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;

pub use config::{ClientConfig, DEFAULT_TIMEOUT, DEFAULT_UPLOAD_TIMEOUT};
pub use credentials::{CredentialProvider, NoCredentials, SessionFile, StaticToken, StoredSession};
pub use error::{ClientError, Result};
pub use http::ApiClient;

// Domain types callers need alongside the client
pub use siteline_core::{ApiError, Environment, ErrorKind, MultipartForm, Payload, Stage};
