// Content entities exchanged with the backend
//
// Decision: Wire format is camelCase JSON; records carry both `id` and `_id` as optional
// Decision: Timestamps stay as the backend's strings; only the career deadline is parsed

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A company event (seminar, webinar, conference appearance)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Event {
    /// Events stay visible unless explicitly unpublished.
    pub fn is_publicly_visible(&self) -> bool {
        self.published != Some(false)
    }
}

/// A blog post, either a written article or an uploaded PDF document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default)]
    pub is_pdf_post: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Blog {
    /// Blogs need an explicit `published: true` to be listed publicly.
    pub fn is_publicly_visible(&self) -> bool {
        self.published == Some(true)
    }
}

/// Employment type of a career opening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
            EmploymentType::Contract => "contract",
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EmploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-time" => Ok(EmploymentType::FullTime),
            "part-time" => Ok(EmploymentType::PartTime),
            "contract" => Ok(EmploymentType::Contract),
            other => Err(format!(
                "unknown employment type '{}' (expected full-time, part-time or contract)",
                other
            )),
        }
    }
}

/// A job opening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    pub application_deadline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Career {
    /// Careers need an explicit `published: true` to be listed publicly.
    pub fn is_publicly_visible(&self) -> bool {
        self.published == Some(true)
    }

    /// Parsed application deadline, or `None` if the backend sent something unreadable.
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        parse_deadline(&self.application_deadline)
    }

    /// A career is expired once its deadline lies in the past.
    /// An unparseable deadline is never treated as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.deadline().is_some_and(|deadline| deadline < now)
    }

    /// Expired careers must not be published. Advisory only; the backend does not enforce it.
    pub fn can_publish(&self, now: DateTime<Utc>) -> bool {
        !self.is_expired(now)
    }
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// A contact-form submission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A service offered by the company, shown on the solutions page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Company profile used by the about and contact pages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Fields the client does not model are preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Backend health probe result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// The user record returned on login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

/// Successful login: bearer token plus the user it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Records whose creation defaults to published when the caller leaves the flag unset
pub trait Publishable {
    fn published_mut(&mut self) -> &mut Option<bool>;

    fn publish_by_default(&mut self) {
        self.published_mut().get_or_insert(true);
    }
}

/// Create or partial-update body for an event
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl Publishable for EventInput {
    fn published_mut(&mut self) -> &mut Option<bool> {
        &mut self.published
    }
}

/// Create or partial-update body for a blog post
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pdf_post: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl Publishable for BlogInput {
    fn published_mut(&mut self) -> &mut Option<bool> {
        &mut self.published
    }
}

/// Create or partial-update body for a career opening
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl Publishable for CareerInput {
    fn published_mut(&mut self) -> &mut Option<bool> {
        &mut self.published
    }
}

/// Public contact-form submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn career(deadline: &str) -> Career {
        Career {
            id: Some("c1".to_string()),
            legacy_id: None,
            title: "Consultant".to_string(),
            description: String::new(),
            requirements: vec!["SQL".to_string(), "Excel".to_string()],
            location: "Remote".to_string(),
            employment_type: EmploymentType::FullTime,
            salary: None,
            application_deadline: deadline.to_string(),
            image: None,
            published: Some(true),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_event_visibility_defaults_to_visible() {
        let mut event = Event {
            title: "Launch".to_string(),
            ..Default::default()
        };
        assert!(event.is_publicly_visible());

        event.published = Some(true);
        assert!(event.is_publicly_visible());

        event.published = Some(false);
        assert!(!event.is_publicly_visible());
    }

    #[test]
    fn test_blog_visibility_requires_explicit_flag() {
        let mut blog = Blog {
            title: "Quarterly outlook".to_string(),
            ..Default::default()
        };
        assert!(!blog.is_publicly_visible());

        blog.published = Some(false);
        assert!(!blog.is_publicly_visible());

        blog.published = Some(true);
        assert!(blog.is_publicly_visible());
    }

    #[test]
    fn test_career_visibility_requires_explicit_flag() {
        let mut c = career("2030-01-01");
        c.published = None;
        assert!(!c.is_publicly_visible());
        c.published = Some(true);
        assert!(c.is_publicly_visible());
    }

    #[test]
    fn test_career_expiry() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        assert!(career("2025-05-31").is_expired(now));
        assert!(career("2025-06-01T11:59:59Z").is_expired(now));
        assert!(!career("2025-06-02").is_expired(now));
        assert!(!career("2025-06-01T12:00:00+00:00").is_expired(now));
        assert!(!career("not a date").is_expired(now));

        assert!(!career("2024-01-01").can_publish(now));
        assert!(career("2026-01-01").can_publish(now));
    }

    #[test]
    fn test_career_wire_format() {
        let json = r#"{
            "_id": "64f0",
            "title": "Analyst",
            "description": "Numbers",
            "requirements": ["CPA", "3 years"],
            "location": "Lagos",
            "type": "part-time",
            "applicationDeadline": "2025-12-31",
            "published": true
        }"#;

        let career: Career = serde_json::from_str(json).unwrap();
        assert_eq!(career.legacy_id.as_deref(), Some("64f0"));
        assert_eq!(career.employment_type, EmploymentType::PartTime);
        assert_eq!(career.requirements, vec!["CPA", "3 years"]);
        assert!(career.id.is_none());
    }

    #[test]
    fn test_career_requires_known_type_and_deadline() {
        let unknown_type = r#"{
            "_id": "c2",
            "title": "Intern",
            "type": "internship",
            "applicationDeadline": "2025-12-31"
        }"#;
        let err = serde_json::from_str::<Career>(unknown_type).unwrap_err();
        assert!(err.to_string().contains("internship"));

        let missing_type =
            r#"{ "_id": "c3", "title": "Intern", "applicationDeadline": "2025-12-31" }"#;
        let err = serde_json::from_str::<Career>(missing_type).unwrap_err();
        assert!(err.to_string().contains("missing field `type`"));

        let missing_deadline = r#"{ "_id": "c4", "title": "Intern", "type": "contract" }"#;
        let err = serde_json::from_str::<Career>(missing_deadline).unwrap_err();
        assert!(err.to_string().contains("missing field `applicationDeadline`"));
    }

    #[test]
    fn test_blog_pdf_metadata() {
        let json = r#"{
            "id": "b1",
            "title": "Tax guide",
            "author": "Finance team",
            "pdfUrl": "/uploads/guide.pdf",
            "fileName": "guide.pdf",
            "fileSize": 20480,
            "fileType": "application/pdf",
            "isPdfPost": true
        }"#;

        let blog: Blog = serde_json::from_str(json).unwrap();
        assert!(blog.is_pdf_post);
        assert_eq!(blog.file_size, Some(20480));
        assert_eq!(blog.published, None);
    }

    #[test]
    fn test_employment_type_parse() {
        assert_eq!(
            "contract".parse::<EmploymentType>().unwrap(),
            EmploymentType::Contract
        );
        assert!("freelance".parse::<EmploymentType>().is_err());
        assert_eq!(EmploymentType::FullTime.to_string(), "full-time");
    }

    #[test]
    fn test_publish_by_default_keeps_explicit_value() {
        let mut input = BlogInput {
            published: Some(false),
            ..Default::default()
        };
        input.publish_by_default();
        assert_eq!(input.published, Some(false));

        let mut input = EventInput::default();
        input.publish_by_default();
        assert_eq!(input.published, Some(true));
    }

    #[test]
    fn test_input_skips_unset_fields() {
        let input = CareerInput {
            title: Some("Auditor".to_string()),
            employment_type: Some(EmploymentType::Contract),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "title": "Auditor", "type": "contract" })
        );
    }

    #[test]
    fn test_company_info_keeps_unknown_fields() {
        let json = r#"{"name": "Acme Advisory", "description": "Audit", "founded": 1998}"#;
        let info: CompanyInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.name, "Acme Advisory");
        assert_eq!(info.extra.get("founded"), Some(&serde_json::json!(1998)));
    }
}
