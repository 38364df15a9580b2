// Multipart form model
//
// Decision: Keep parts inspectable until send time. A transport-level form is
// write-only, which would make default injection (and testing it) impossible.

use crate::entities::Publishable;

/// One field of a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// A multipart body built by the caller when a record travels with a file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append a file field.
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        });
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parts.iter().any(|part| part.name() == name)
    }

    /// Value of the first text field called `name`.
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Append `name=value` only if no field with that name exists yet.
    pub fn set_default_text(&mut self, name: &str, value: &str) {
        if !self.contains(name) {
            self.parts.push(FormPart::Text {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    pub fn has_files(&self) -> bool {
        self.parts
            .iter()
            .any(|part| matches!(part, FormPart::File { .. }))
    }
}

/// Request body chosen by the caller: structured JSON or a multipart upload.
/// The client sends whichever it is given and never converts one into the other.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    Json(T),
    Multipart(MultipartForm),
}

impl<T> Payload<T> {
    pub fn is_multipart(&self) -> bool {
        matches!(self, Payload::Multipart(_))
    }
}

impl<T: Publishable> Payload<T> {
    /// Default `published` to true when the caller did not set it.
    pub fn publish_by_default(&mut self) {
        match self {
            Payload::Json(body) => body.publish_by_default(),
            Payload::Multipart(form) => form.set_default_text("published", "true"),
        }
    }
}

impl<T> From<MultipartForm> for Payload<T> {
    fn from(form: MultipartForm) -> Self {
        Payload::Multipart(form)
    }
}
