//! Component replacement for the `modify` command.

use crate::error::UrlError;
use crate::url_model::StructuredUrl;

/// Replacement values; `None` leaves the component untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modification {
    pub scheme: Option<String>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl Modification {
    /// True when no component would change.
    pub fn is_empty(&self) -> bool {
        [&self.scheme, &self.path, &self.query, &self.fragment]
            .iter()
            .all(|c| c.as_deref().map_or(true, str::is_empty))
    }
}

/// Returns a copy of `url` with the requested components replaced.
///
/// Empty replacement strings are treated as "not given".
pub fn apply(url: &StructuredUrl, change: &Modification) -> Result<StructuredUrl, UrlError> {
    let mut out = url.as_url().clone();

    if let Some(scheme) = given(&change.scheme) {
        out.set_scheme(scheme).map_err(|()| UrlError::Modify {
            component: "scheme",
            value: scheme.to_string(),
        })?;
    }
    if let Some(path) = given(&change.path) {
        out.set_path(path);
    }
    if let Some(query) = given(&change.query) {
        out.set_query(Some(query.trim_start_matches('?')));
    }
    if let Some(fragment) = given(&change.fragment) {
        out.set_fragment(Some(fragment.trim_start_matches('#')));
    }

    tracing::debug!(from = %url, to = %out, "applied modification");
    if url.scheme().is_empty() && given(&change.scheme).is_none() {
        StructuredUrl::scheme_relative(out)
    } else {
        StructuredUrl::from_url(out)
    }
}

fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> StructuredUrl {
        StructuredUrl::parse(s).unwrap()
    }

    #[test]
    fn empty_modification() {
        assert!(Modification::default().is_empty());
        let blank = Modification {
            path: Some(String::new()),
            ..Default::default()
        };
        assert!(blank.is_empty());
        let some = Modification {
            query: Some("a=1".into()),
            ..Default::default()
        };
        assert!(!some.is_empty());
    }

    #[test]
    fn replaces_each_component() {
        let change = Modification {
            scheme: Some("https".into()),
            path: Some("/new/path".into()),
            query: Some("a=1&b=2".into()),
            fragment: Some("top".into()),
        };
        let out = apply(&url("http://example.com/old?x=1#old"), &change).unwrap();
        assert_eq!(out.to_string(), "https://example.com/new/path?a=1&b=2#top");
    }

    #[test]
    fn untouched_components_survive() {
        let change = Modification {
            fragment: Some("#section".into()),
            ..Default::default()
        };
        let out = apply(&url("http://example.com/p?q=1"), &change).unwrap();
        assert_eq!(out.to_string(), "http://example.com/p?q=1#section");
    }

    #[test]
    fn relative_path_gets_leading_slash() {
        let change = Modification {
            path: Some("docs".into()),
            ..Default::default()
        };
        let out = apply(&url("http://example.com/"), &change).unwrap();
        assert_eq!(out.path(), "/docs");
    }

    #[test]
    fn incompatible_scheme_is_an_error() {
        let change = Modification {
            scheme: Some("mailto".into()),
            ..Default::default()
        };
        let err = apply(&url("http://example.com/"), &change).unwrap_err();
        match err {
            UrlError::Modify { component, value } => {
                assert_eq!(component, "scheme");
                assert_eq!(value, "mailto");
            }
            other => panic!("expected Modify, got {other:?}"),
        }
    }

    #[test]
    fn scheme_relative_stays_scheme_relative() {
        let change = Modification {
            path: Some("/v2".into()),
            ..Default::default()
        };
        let out = apply(&url("//cdn.example.com/v1"), &change).unwrap();
        assert_eq!(out.to_string(), "//cdn.example.com/v2");
        assert_eq!(out.scheme(), "");

        let change = Modification {
            scheme: Some("https".into()),
            ..Default::default()
        };
        let out = apply(&url("//cdn.example.com/v1"), &change).unwrap();
        assert_eq!(out.to_string(), "https://cdn.example.com/v1");
    }

    #[test]
    fn input_is_not_mutated() {
        let original = url("http://example.com/a");
        let change = Modification {
            path: Some("/b".into()),
            ..Default::default()
        };
        let _ = apply(&original, &change).unwrap();
        assert_eq!(original.to_string(), "http://example.com/a");
    }
}
