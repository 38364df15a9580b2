// Client-side upload validation
//
// The backend is the authority on limits; these checks only catch obvious
// mistakes before a large body is sent.

use thiserror::Error;

const MB: u64 = 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("{file_name} is {size} but the maximum allowed size is {limit}")]
    TooLarge {
        file_name: String,
        size: String,
        limit: String,
    },

    #[error("{file_name}: file type '{content_type}' is not allowed (allowed: {allowed})")]
    UnsupportedType {
        file_name: String,
        content_type: String,
        allowed: String,
    },
}

/// Size and type constraints for one kind of attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: u64,
    pub allowed_types: &'static [&'static str],
}

impl UploadPolicy {
    pub const IMAGE: UploadPolicy = UploadPolicy {
        max_bytes: 5 * MB,
        allowed_types: &["image/jpeg", "image/png", "image/gif", "image/webp"],
    };

    pub const DOCUMENT: UploadPolicy = UploadPolicy {
        max_bytes: 10 * MB,
        allowed_types: &["application/pdf"],
    };

    pub fn validate(
        &self,
        file_name: &str,
        content_type: &str,
        size: u64,
    ) -> Result<(), UploadError> {
        if !self.allowed_types.contains(&content_type) {
            return Err(UploadError::UnsupportedType {
                file_name: file_name.to_string(),
                content_type: content_type.to_string(),
                allowed: self.allowed_types.join(", "),
            });
        }
        if size > self.max_bytes {
            return Err(UploadError::TooLarge {
                file_name: file_name.to_string(),
                size: format_size(size),
                limit: format_size(self.max_bytes),
            });
        }
        Ok(())
    }

    pub fn limit_label(&self) -> String {
        format_size(self.max_bytes)
    }
}

/// Content type inferred from a file extension.
pub fn content_type_for(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

/// Human-readable size, e.g. `5 MB` or `512 KB`.
pub fn format_size(bytes: u64) -> String {
    if bytes >= MB && bytes % MB == 0 {
        format!("{} MB", bytes / MB)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= 1024 {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_policy() {
        let policy = UploadPolicy::IMAGE;
        assert!(policy.validate("a.png", "image/png", 1024).is_ok());

        let err = policy.validate("big.png", "image/png", 6 * MB).unwrap_err();
        assert_eq!(err.to_string(), "big.png is 6 MB but the maximum allowed size is 5 MB");

        let err = policy
            .validate("doc.pdf", "application/pdf", 10)
            .unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedType { .. }));
    }

    #[test]
    fn test_document_policy_limit() {
        assert_eq!(UploadPolicy::DOCUMENT.limit_label(), "10 MB");
        assert!(UploadPolicy::DOCUMENT
            .validate("report.pdf", "application/pdf", 10 * MB)
            .is_ok());
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("Photo.JPG"), Some("image/jpeg"));
        assert_eq!(content_type_for("brochure.pdf"), Some("application/pdf"));
        assert_eq!(content_type_for("notes.txt"), None);
        assert_eq!(content_type_for("noext"), None);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2 KB");
        assert_eq!(format_size(3 * MB / 2), "1.5 MB");
    }
}
