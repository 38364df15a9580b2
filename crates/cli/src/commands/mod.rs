// CLI subcommands

pub mod auth;
pub mod blogs;
pub mod careers;
pub mod company;
pub mod contacts;
pub mod events;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use siteline_core::upload::content_type_for;
use siteline_core::{MultipartForm, UploadPolicy};

/// Build a multipart form carrying the same fields as a JSON input.
///
/// Scalars become text fields; arrays and objects are sent as JSON strings.
pub fn form_from_input<T: Serialize>(input: &T) -> Result<MultipartForm> {
    let value = serde_json::to_value(input)?;
    let Value::Object(fields) = value else {
        anyhow::bail!("Input must serialize to an object");
    };

    let mut form = MultipartForm::new();
    for (name, value) in fields {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => serde_json::to_string(&other)?,
        };
        form = form.text(name, text);
    }
    Ok(form)
}

/// Read `path`, validate it against `policy` and attach it as `field`.
pub fn attach_file(
    form: MultipartForm,
    field: &str,
    path: &Path,
    policy: UploadPolicy,
) -> Result<MultipartForm> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid file name: {}", path.display()))?
        .to_string();
    let content_type = content_type_for(&file_name)
        .with_context(|| format!("Cannot tell the file type of {}", file_name))?;

    let size = std::fs::metadata(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?
        .len();
    policy.validate(&file_name, content_type, size)?;

    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    Ok(form.file(field, file_name, content_type, bytes))
}

/// `yes` / `no` for text output
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Text label for an optional published flag
pub fn published_label(published: Option<bool>) -> &'static str {
    match published {
        Some(true) => "published",
        Some(false) => "draft",
        None => "-",
    }
}
