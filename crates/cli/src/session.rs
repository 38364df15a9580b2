// Session persistence for the CLI
//
// The client library only reads the session file; logging in and out writes it here.

use std::path::Path;

use anyhow::{Context, Result};
use siteline_client::StoredSession;
use siteline_core::AuthResponse;

pub fn save(path: &Path, auth: &AuthResponse) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let session = StoredSession {
        token: auth.token.clone(),
        user: Some(auth.user.clone()),
    };
    let json = serde_json::to_vec_pretty(&session)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write session file: {}", path.display()))?;
    Ok(())
}

/// Remove the session file. Returns false if there was nothing to remove.
pub fn clear(path: &Path) -> Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to remove session file: {}", path.display()))
        }
    }
}
