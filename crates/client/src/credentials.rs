// Credential providers
//
// Decision: The client asks for the token on every request and never stores or
// writes it. Whoever logs in owns the session; the client only reads it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use siteline_core::AuthUser;
use tracing::debug;

/// Source of the bearer token attached by the interactive client
pub trait CredentialProvider: Send + Sync {
    /// The current token, or `None` when signed out.
    fn token(&self) -> Option<String>;
}

impl<F> CredentialProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn token(&self) -> Option<String> {
        self()
    }
}

/// Never attaches a token
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn token(&self) -> Option<String> {
        None
    }
}

/// A fixed token, e.g. from an environment variable
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticToken(..)")
    }
}

impl CredentialProvider for StaticToken {
    fn token(&self) -> Option<String> {
        (!self.0.is_empty()).then(|| self.0.clone())
    }
}

/// The persisted session blob: token plus the signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}

/// Reads the session from a JSON file on each request
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored session, or `None` if the file is missing or unreadable.
    pub fn load(&self) -> Option<StoredSession> {
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "No session file");
                return None;
            }
        };
        match serde_json::from_slice::<StoredSession>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "Ignoring malformed session file");
                None
            }
        }
    }
}

impl CredentialProvider for SessionFile {
    fn token(&self) -> Option<String> {
        self.load()
            .map(|session| session.token)
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("siteline-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_static_token() {
        assert_eq!(StaticToken::new("abc").token().as_deref(), Some("abc"));
        assert_eq!(StaticToken::new("").token(), None);
        assert_eq!(format!("{:?}", StaticToken::new("secret")), "StaticToken(..)");
    }

    #[test]
    fn test_closure_provider() {
        let provider = || Some("from-closure".to_string());
        assert_eq!(provider.token().as_deref(), Some("from-closure"));
        assert_eq!(NoCredentials.token(), None);
    }

    #[test]
    fn test_session_file_reads_token() {
        let path = temp_path("session-ok");
        std::fs::write(
            &path,
            r#"{"token": "t-123", "user": {"id": "u1", "name": "Ada", "email": "ada@example.com", "role": "admin"}}"#,
        )
        .unwrap();

        let file = SessionFile::new(&path);
        assert_eq!(file.token().as_deref(), Some("t-123"));
        assert!(file.load().unwrap().user.unwrap().is_admin());

        std::fs::remove_file(&path).unwrap();
        assert_eq!(file.token(), None);
    }

    #[test]
    fn test_session_file_malformed() {
        let path = temp_path("session-bad");
        std::fs::write(&path, "not json").unwrap();
        assert_eq!(SessionFile::new(&path).token(), None);
        std::fs::remove_file(&path).unwrap();
    }
}
