//! Structural signatures: the key two URLs must share to count as duplicates.
//!
//! A signature is `scheme://host` + normalized path + `|` + the sorted,
//! distinct query parameter names, each followed by `,`. Parameter values and
//! the fragment never take part.

use std::collections::BTreeSet;
use std::fmt;

use crate::url_model::StructuredUrl;

/// Token that stands in for a variable path segment.
pub const PLACEHOLDER: &str = "{param}";

/// One non-empty `/`-delimited path component after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
    /// Kept verbatim.
    Literal(&'a str),
    /// Looks like an identifier or file name; replaced by [`PLACEHOLDER`].
    Variable,
}

impl<'a> PathSegment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            PathSegment::Literal(s) => s,
            PathSegment::Variable => PLACEHOLDER,
        }
    }
}

/// Classifies a segment: all ASCII digits, or containing a `.`, is variable.
///
/// The dot rule also catches version strings (`v1.2`) and file names
/// (`report.pdf`); dedup results depend on that, so it stays as is.
pub fn classify_segment(segment: &str) -> PathSegment<'_> {
    let numeric = !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
    if numeric || segment.contains('.') {
        PathSegment::Variable
    } else {
        PathSegment::Literal(segment)
    }
}

/// Normalizes a path for signature comparison.
///
/// `""` and `"/"` become `"/"`; `/users/123/profile` becomes
/// `/users/{param}/profile`. Empty segments from repeated slashes are dropped.
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| classify_segment(s).as_str())
        .collect();
    format!("/{}", segments.join("/"))
}

/// Dedup key for a [`StructuredUrl`]. Computed on demand, never stored
/// beyond a single dedup pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    pub fn of(url: &StructuredUrl) -> Self {
        let pairs = url.as_url().query_pairs();
        let names: BTreeSet<String> = pairs.map(|(name, _)| name.into_owned()).collect();

        let mut key = format!(
            "{}://{}{}|",
            url.scheme(),
            url.host(),
            normalize_path(url.path())
        );
        for name in &names {
            key.push_str(name);
            key.push(',');
        }
        Signature(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(s: &str) -> String {
        Signature::of(&StructuredUrl::parse(s).unwrap()).0
    }

    #[test]
    fn classify_numeric_and_dotted() {
        assert_eq!(classify_segment("123"), PathSegment::Variable);
        assert_eq!(classify_segment("report.pdf"), PathSegment::Variable);
        assert_eq!(classify_segment("v1.2"), PathSegment::Variable);
        assert_eq!(classify_segment("users"), PathSegment::Literal("users"));
        assert_eq!(classify_segment("v2"), PathSegment::Literal("v2"));
        assert_eq!(classify_segment("12a"), PathSegment::Literal("12a"));
        assert_eq!(classify_segment("{param}"), PathSegment::Literal("{param}"));
    }

    #[test]
    fn classify_non_ascii_digits_are_literal() {
        assert_eq!(classify_segment("١٢٣"), PathSegment::Literal("١٢٣"));
    }

    #[test]
    fn normalize_root_and_empty() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn normalize_single_numeric() {
        assert_eq!(normalize_path("/123"), "/{param}");
    }

    #[test]
    fn normalize_mixed_segments() {
        assert_eq!(normalize_path("/users/123/profile"), "/users/{param}/profile");
        assert_eq!(normalize_path("/static/app.js"), "/static/{param}");
        assert_eq!(normalize_path("a//b/"), "/a/b");
    }

    #[test]
    fn normalize_is_idempotent() {
        for p in ["/{param}/users", "/users/42/files/a.txt", "/", "/a/b"] {
            let once = normalize_path(p);
            assert_eq!(normalize_path(&once), once);
        }
        assert_eq!(normalize_path("/{param}/users"), "/{param}/users");
    }

    #[test]
    fn signature_layout() {
        assert_eq!(sig("http://a.com/x?b=1&a=2"), "http://a.com/x|a,b,");
        assert_eq!(sig("http://a.com"), "http://a.com/|");
        assert_eq!(sig("http://a.com:8080/1"), "http://a.com:8080/{param}|");
    }

    #[test]
    fn signature_ignores_values_repeats_and_fragment() {
        assert_eq!(sig("http://a.com/x?b=1&a=2"), sig("http://a.com/x?a=9&b=9"));
        assert_eq!(sig("http://a.com/x?a=1&a=2"), sig("http://a.com/x?a=3"));
        assert_eq!(sig("http://a.com/p#one"), sig("http://a.com/p#two"));
    }

    #[test]
    fn signature_distinguishes_scheme_host_and_names() {
        assert_ne!(sig("http://a.com/x"), sig("https://a.com/x"));
        assert_ne!(sig("http://a.com/x"), sig("http://b.com/x"));
        assert_ne!(sig("http://a.com/x?a=1"), sig("http://a.com/x?b=1"));
        assert_ne!(sig("http://a.com/x"), sig("http://a.com/x?a=1"));
    }

    #[test]
    fn signature_preserves_host_case() {
        assert_eq!(sig("http://A.com/x"), "http://A.com/x|");
        assert_ne!(sig("http://A.com/x"), sig("http://a.com/x"));
    }

    #[test]
    fn signature_keeps_explicit_port() {
        assert_eq!(sig("http://a.com:80/x"), "http://a.com:80/x|");
        assert_ne!(sig("http://a.com:80/x"), sig("http://a.com/x"));
    }

    #[test]
    fn signature_uses_path_as_written() {
        assert_eq!(sig("http://a.com/a/../1"), "http://a.com/a/{param}/{param}|");
        assert_eq!(sig("http://a.com/a/./b"), "http://a.com/a/{param}/b|");
        assert_ne!(sig("http://a.com/a/../1"), sig("http://a.com/1"));
    }

    #[test]
    fn signature_of_scheme_relative_url() {
        assert_eq!(sig("//cdn.example.com/lib/1?v=2"), "://cdn.example.com/lib/{param}|v,");
        assert_ne!(sig("//cdn.example.com/x"), sig("http://cdn.example.com/x"));
    }

    #[test]
    fn signature_sorts_names_bytewise() {
        assert_eq!(sig("http://a.com/?b=1&B=2&a=3"), "http://a.com/|B,a,b,");
    }

    #[test]
    fn signature_is_deterministic() {
        let u = StructuredUrl::parse("https://x.com/a/1/b.html?z=1&y=2#f").unwrap();
        assert_eq!(Signature::of(&u), Signature::of(&u));
    }
}
