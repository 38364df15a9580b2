// Canonical identifiers
//
// The backend returns `id` on some records and `_id` on others. Every comparison
// of identifiers goes through `canonical_id` so the two never diverge.

use crate::entities::{Blog, Career, Contact, Event, Service};

/// A record identified by `id`, `_id`, or both.
pub trait Identified {
    fn id_field(&self) -> Option<&str>;
    fn legacy_id_field(&self) -> Option<&str>;

    /// Prefers a non-empty `id`, falls back to `_id`, else the empty string.
    fn canonical_id(&self) -> String {
        self.id_field()
            .filter(|id| !id.is_empty())
            .or_else(|| self.legacy_id_field().filter(|id| !id.is_empty()))
            .unwrap_or_default()
            .to_string()
    }
}

macro_rules! impl_identified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identified for $ty {
                fn id_field(&self) -> Option<&str> {
                    self.id.as_deref()
                }

                fn legacy_id_field(&self) -> Option<&str> {
                    self.legacy_id.as_deref()
                }
            }
        )*
    };
}

impl_identified!(Event, Blog, Career, Contact, Service);

/// True when the record's canonical identifier equals `id`.
/// An empty `id` never matches, so records without identifiers cannot be targeted.
pub fn matches_id<T: Identified + ?Sized>(record: &T, id: &str) -> bool {
    !id.is_empty() && record.canonical_id() == id
}

pub fn find_by_id<'a, T: Identified>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| matches_id(*record, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(id: Option<&str>, legacy_id: Option<&str>) -> Blog {
        Blog {
            id: id.map(String::from),
            legacy_id: legacy_id.map(String::from),
            title: "Post".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_prefers_id_over_legacy_id() {
        assert_eq!(blog(Some("a"), Some("b")).canonical_id(), "a");
    }

    #[test]
    fn test_falls_back_to_legacy_id() {
        assert_eq!(blog(None, Some("b")).canonical_id(), "b");
        assert_eq!(blog(Some(""), Some("b")).canonical_id(), "b");
    }

    #[test]
    fn test_empty_when_no_identifier() {
        assert_eq!(blog(None, None).canonical_id(), "");
        assert_eq!(blog(Some(""), None).canonical_id(), "");
    }

    #[test]
    fn test_mixed_identifiers_do_not_collide() {
        let blogs = vec![blog(Some("1"), None), blog(None, Some("2"))];
        let keys: Vec<String> = blogs.iter().map(Identified::canonical_id).collect();
        assert_eq!(keys, vec!["1", "2"]);

        assert_eq!(find_by_id(&blogs, "2").map(|b| b.legacy_id.as_deref()), Some(Some("2")));
        assert!(find_by_id(&blogs, "3").is_none());
    }

    #[test]
    fn test_empty_id_never_matches() {
        let orphan = blog(None, None);
        assert!(!matches_id(&orphan, ""));
    }

    #[test]
    fn test_contact_identifiers() {
        let contact = Contact {
            legacy_id: Some("65ab".to_string()),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };
        assert!(matches_id(&contact, "65ab"));
    }
}
