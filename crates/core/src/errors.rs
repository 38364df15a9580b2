// Error translation
//
// Decision: A failed call is described as plain data (`Failure`) and translated
// by walking an ordered rule list. The first rule that yields a message wins,
// and the per-operation fallback always applies last.
// Decision: Callers only see the message; `ErrorKind` is kept for tests and branching.

use serde_json::Value;
use thiserror::Error;

use crate::upload::UploadPolicy;

pub const SERVER_ERROR_MESSAGE: &str = "Server error. Please try again later.";
pub const UNAUTHORIZED_MESSAGE: &str = "Authentication required. Please log in.";
pub const FORBIDDEN_MESSAGE: &str = "Admin privileges required.";
pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";
pub const VALIDATION_PREFIX: &str = "Validation failed:";

/// Internal classification of a translated error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BackendMessage,
    PayloadTooLarge,
    Server,
    Unauthorized,
    Forbidden,
    NotFound,
    Timeout,
    Validation,
    Failed,
}

/// A user-presentable error. Displays as exactly its message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Event,
    Blog,
    Career,
    Contact,
    Auth,
    Company,
    Service,
    Health,
}

impl EntityKind {
    fn singular(&self) -> &'static str {
        match self {
            EntityKind::Event => "event",
            EntityKind::Blog => "blog",
            EntityKind::Career => "career",
            EntityKind::Contact => "contact",
            EntityKind::Auth => "account",
            EntityKind::Company => "company info",
            EntityKind::Service => "service",
            EntityKind::Health => "health status",
        }
    }

    fn plural(&self) -> &'static str {
        match self {
            EntityKind::Event => "events",
            EntityKind::Blog => "blogs",
            EntityKind::Career => "careers",
            EntityKind::Contact => "contacts",
            EntityKind::Auth => "accounts",
            EntityKind::Company => "company info",
            EntityKind::Service => "services",
            EntityKind::Health => "health status",
        }
    }

    /// Attachment limit quoted when the backend rejects an oversized body.
    pub fn upload_policy(&self) -> UploadPolicy {
        match self {
            EntityKind::Event | EntityKind::Blog => UploadPolicy::DOCUMENT,
            _ => UploadPolicy::IMAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    ListAll,
    Get,
    Create,
    Update,
    Delete,
    MarkRead,
    Submit,
    Login,
}

/// The call being made, used to pick rules and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub entity: EntityKind,
    pub action: Action,
}

impl Operation {
    pub const fn new(entity: EntityKind, action: Action) -> Self {
        Self { entity, action }
    }

    pub fn not_found_message(&self) -> String {
        let name = self.entity.singular();
        let mut chars = name.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        format!("{} not found.", capitalized)
    }

    pub fn fallback_message(&self) -> String {
        let entity = self.entity;
        let what = match self.action {
            Action::List | Action::ListAll => format!("fetch {}", entity.plural()),
            Action::Get => format!("fetch {}", entity.singular()),
            Action::Create => format!("create {}", entity.singular()),
            Action::Update => format!("update {}", entity.singular()),
            Action::Delete => format!("delete {}", entity.singular()),
            Action::MarkRead => format!("mark {} as read", entity.singular()),
            Action::Submit if entity == EntityKind::Contact => "send message".to_string(),
            Action::Submit => format!("submit {}", entity.singular()),
            Action::Login => "log in".to_string(),
        };
        format!("Failed to {}. Please try again.", what)
    }

    fn rules(&self) -> &'static [Rule] {
        match (self.entity, self.action) {
            (EntityKind::Auth, Action::Login) => LOGIN_RULES,
            (
                EntityKind::Contact,
                Action::List | Action::ListAll | Action::Get | Action::MarkRead | Action::Delete,
            ) => CONTACT_ADMIN_RULES,
            _ => STANDARD_RULES,
        }
    }

    /// Translate a failure into the error callers see.
    pub fn translate(&self, failure: &Failure) -> ApiError {
        let (kind, message) = self
            .rules()
            .iter()
            .find_map(|rule| rule(failure, self))
            .unwrap_or_else(|| (ErrorKind::Failed, self.fallback_message()));

        ApiError {
            kind,
            status: failure.status,
            message,
        }
    }
}

/// Parsed error payload from the backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub errors: Vec<String>,
}

impl ErrorBody {
    /// Parse `{ "message": ..., "errors": [...] }`. Validation entries may be
    /// plain strings or objects carrying `msg` or `message`.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(bytes).ok()?;
        let object = value.as_object()?;

        let message = object
            .get("message")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(String::from);

        let errors = match object.get("errors") {
            Some(Value::Array(items)) => items.iter().filter_map(validation_entry).collect(),
            Some(Value::String(single)) => vec![single.clone()],
            _ => Vec::new(),
        };

        Some(Self { message, errors })
    }
}

fn validation_entry(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map
            .get("msg")
            .or_else(|| map.get("message"))
            .and_then(Value::as_str)
            .map(String::from),
        _ => None,
    }
}

/// What went wrong with one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Failure {
    pub status: Option<u16>,
    pub body: Option<ErrorBody>,
    pub timed_out: bool,
}

impl Failure {
    /// Non-success HTTP response with its raw body.
    pub fn response(status: u16, body: &[u8]) -> Self {
        Self {
            status: Some(status),
            body: ErrorBody::parse(body),
            timed_out: false,
        }
    }

    pub fn timeout() -> Self {
        Self {
            timed_out: true,
            ..Default::default()
        }
    }

    /// Connection refused, DNS failure, undecodable body and the like.
    pub fn transport() -> Self {
        Self::default()
    }

    fn is_client_error(&self) -> bool {
        matches!(self.status, Some(400..=499))
    }
}

type Rule = fn(&Failure, &Operation) -> Option<(ErrorKind, String)>;

const STANDARD_RULES: &[Rule] = &[
    backend_message,
    payload_too_large,
    server_error,
    unauthorized,
    forbidden,
    not_found,
    timed_out,
    validation_list,
];

const CONTACT_ADMIN_RULES: &[Rule] = &[
    unauthorized,
    forbidden,
    not_found,
    backend_message,
    server_error,
    timed_out,
    validation_list,
];

const LOGIN_RULES: &[Rule] = &[backend_message, server_error, timed_out, validation_list];

fn backend_message(failure: &Failure, _: &Operation) -> Option<(ErrorKind, String)> {
    if !failure.is_client_error() {
        return None;
    }
    let message = failure.body.as_ref()?.message.clone()?;
    Some((ErrorKind::BackendMessage, message))
}

fn payload_too_large(failure: &Failure, op: &Operation) -> Option<(ErrorKind, String)> {
    (failure.status == Some(413)).then(|| {
        (
            ErrorKind::PayloadTooLarge,
            format!(
                "File is too large. Maximum upload size is {}.",
                op.entity.upload_policy().limit_label()
            ),
        )
    })
}

fn server_error(failure: &Failure, _: &Operation) -> Option<(ErrorKind, String)> {
    matches!(failure.status, Some(500..=599))
        .then(|| (ErrorKind::Server, SERVER_ERROR_MESSAGE.to_string()))
}

fn unauthorized(failure: &Failure, _: &Operation) -> Option<(ErrorKind, String)> {
    (failure.status == Some(401))
        .then(|| (ErrorKind::Unauthorized, UNAUTHORIZED_MESSAGE.to_string()))
}

fn forbidden(failure: &Failure, _: &Operation) -> Option<(ErrorKind, String)> {
    (failure.status == Some(403)).then(|| (ErrorKind::Forbidden, FORBIDDEN_MESSAGE.to_string()))
}

fn not_found(failure: &Failure, op: &Operation) -> Option<(ErrorKind, String)> {
    (failure.status == Some(404)).then(|| (ErrorKind::NotFound, op.not_found_message()))
}

fn timed_out(failure: &Failure, _: &Operation) -> Option<(ErrorKind, String)> {
    failure
        .timed_out
        .then(|| (ErrorKind::Timeout, TIMEOUT_MESSAGE.to_string()))
}

fn validation_list(failure: &Failure, _: &Operation) -> Option<(ErrorKind, String)> {
    let body = failure.body.as_ref()?;
    if body.errors.is_empty() {
        return None;
    }
    Some((
        ErrorKind::Validation,
        format!("{} {}", VALIDATION_PREFIX, body.errors.join(", ")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREATE_EVENT: Operation = Operation::new(EntityKind::Event, Action::Create);
    const UPDATE_CAREER: Operation = Operation::new(EntityKind::Career, Action::Update);
    const LIST_CONTACTS: Operation = Operation::new(EntityKind::Contact, Action::ListAll);

    #[test]
    fn test_backend_message_surfaces_verbatim() {
        let failure = Failure::response(400, br#"{"message": "Title is required"}"#);
        let err = CREATE_EVENT.translate(&failure);
        assert_eq!(err.kind, ErrorKind::BackendMessage);
        assert_eq!(err.to_string(), "Title is required");
        assert_eq!(err.status, Some(400));
    }

    #[test]
    fn test_backend_message_ignored_on_server_errors() {
        let failure = Failure::response(500, br#"{"message": "MongoError: E11000 duplicate key"}"#);
        let err = CREATE_EVENT.translate(&failure);
        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.message, SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn test_payload_too_large_names_limit() {
        let err = CREATE_EVENT.translate(&Failure::response(413, b"<html>Too Large</html>"));
        assert_eq!(err.kind, ErrorKind::PayloadTooLarge);
        assert_eq!(err.message, "File is too large. Maximum upload size is 10 MB.");

        let err = UPDATE_CAREER.translate(&Failure::response(413, b""));
        assert_eq!(err.message, "File is too large. Maximum upload size is 5 MB.");
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            CREATE_EVENT.translate(&Failure::response(401, b"")).message,
            UNAUTHORIZED_MESSAGE
        );
        assert_eq!(
            CREATE_EVENT.translate(&Failure::response(403, b"")).message,
            FORBIDDEN_MESSAGE
        );
        assert_eq!(
            UPDATE_CAREER.translate(&Failure::response(404, b"")).message,
            "Career not found."
        );
        assert_eq!(
            CREATE_EVENT.translate(&Failure::response(502, b"")).kind,
            ErrorKind::Server
        );
    }

    #[test]
    fn test_timeout() {
        let err = UPDATE_CAREER.translate(&Failure::timeout());
        assert_eq!(err.kind, ErrorKind::Timeout);
        assert_eq!(err.message, TIMEOUT_MESSAGE);
        assert_eq!(err.status, None);
    }

    #[test]
    fn test_validation_list_joined() {
        let body = br#"{"errors": ["Title is required", {"msg": "Date must be ISO 8601"}]}"#;
        let err = CREATE_EVENT.translate(&Failure::response(422, body));
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(
            err.message,
            "Validation failed: Title is required, Date must be ISO 8601"
        );
    }

    #[test]
    fn test_fallback_per_operation() {
        assert_eq!(
            CREATE_EVENT.translate(&Failure::transport()).message,
            "Failed to create event. Please try again."
        );
        assert_eq!(
            Operation::new(EntityKind::Blog, Action::List)
                .translate(&Failure::response(418, b""))
                .message,
            "Failed to fetch blogs. Please try again."
        );
        assert_eq!(
            Operation::new(EntityKind::Contact, Action::MarkRead).fallback_message(),
            "Failed to mark contact as read. Please try again."
        );
        assert_eq!(
            Operation::new(EntityKind::Contact, Action::Submit).fallback_message(),
            "Failed to send message. Please try again."
        );
    }

    #[test]
    fn test_contact_admin_checks_status_before_message() {
        let failure = Failure::response(401, br#"{"message": "jwt expired"}"#);
        let err = LIST_CONTACTS.translate(&failure);
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.message, UNAUTHORIZED_MESSAGE);

        let failure = Failure::response(400, br#"{"message": "Invalid contact id"}"#);
        assert_eq!(LIST_CONTACTS.translate(&failure).message, "Invalid contact id");

        let delete = Operation::new(EntityKind::Contact, Action::Delete);
        assert_eq!(
            delete.translate(&Failure::response(404, b"")).message,
            "Contact not found."
        );
    }

    #[test]
    fn test_login_surfaces_invalid_credentials() {
        let login = Operation::new(EntityKind::Auth, Action::Login);
        let failure = Failure::response(401, br#"{"message": "Invalid credentials"}"#);
        assert_eq!(login.translate(&failure).message, "Invalid credentials");

        let err = login.translate(&Failure::response(401, b""));
        assert_eq!(err.kind, ErrorKind::Failed);
        assert_eq!(err.message, "Failed to log in. Please try again.");
    }

    #[test]
    fn test_error_body_parse() {
        assert_eq!(ErrorBody::parse(b"not json"), None);
        assert_eq!(ErrorBody::parse(b"[1,2]"), None);

        let body = ErrorBody::parse(br#"{"message": "  ", "errors": "bad date"}"#).unwrap();
        assert_eq!(body.message, None);
        assert_eq!(body.errors, vec!["bad date"]);
    }

    #[test]
    fn test_not_found_message_for_multiword_entity() {
        let op = Operation::new(EntityKind::Company, Action::Get);
        assert_eq!(op.not_found_message(), "Company info not found.");
    }
}
