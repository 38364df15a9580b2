// Siteline Core
//
// Domain layer for the Siteline content API. Nothing in this crate touches
// the network; it holds the rules the HTTP client applies around each call.
//
// Key design decisions:
// - Entities accept either `id` or `_id` and expose one canonical identifier
// - Publish visibility is evaluated per entity (events default to visible)
// - Environment is an explicit value instead of runtime globals
// - Error translation is an ordered list of rules evaluated in sequence
// - Multipart bodies are modelled as inspectable parts so defaults can be injected

pub mod entities;
pub mod environment;
pub mod errors;
pub mod form;
pub mod identity;
pub mod upload;
pub mod urls;

pub use entities::{
    AuthResponse, AuthUser, Blog, BlogInput, Career, CareerInput, CompanyInfo, Contact,
    ContactInput, EmploymentType, Event, EventInput, HealthStatus, LoginRequest, Publishable,
    Service,
};
pub use environment::{Environment, Origins, Runtime, Stage};
pub use errors::{Action, ApiError, EntityKind, ErrorBody, ErrorKind, Failure, Operation};
pub use form::{FormPart, MultipartForm, Payload};
pub use identity::{find_by_id, matches_id, Identified};
pub use upload::{UploadError, UploadPolicy};
pub use urls::ensure_absolute_url;
