//! URL modeling: the parsed form every command works on.
//!
//! The `url` crate validates the input and decodes the query; the scheme,
//! host and path the signature reads are kept exactly as written, because
//! the WHATWG parser lowercases hosts, drops default ports and resolves
//! dot-segments.

use std::fmt;
use std::str::FromStr;

use percent_encoding::percent_decode_str;
use url::{ParseError, Url};

use crate::error::UrlError;

/// Base used to validate scheme-relative input (`//host/path`). Its scheme
/// never shows up in a [`StructuredUrl`].
const SCHEME_RELATIVE_BASE: &str = "http://scheme-relative.invalid/";

/// A parsed URL split into scheme, host, path, query and fragment.
///
/// Immutable once built; [`crate::modify`] produces a new value instead of
/// editing in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredUrl {
    raw: String,
    scheme: String,
    host: String,
    path: String,
    url: Url,
}

impl StructuredUrl {
    /// Parses a single candidate. Surrounding whitespace is ignored.
    ///
    /// Fails with [`UrlError::Empty`] on blank input and [`UrlError::Malformed`]
    /// when the text is not URL syntax or carries neither scheme nor host.
    pub fn parse(input: &str) -> Result<Self, UrlError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(UrlError::Empty);
        }
        let url = match Url::parse(trimmed) {
            Ok(url) => url,
            Err(ParseError::RelativeUrlWithoutBase) if trimmed.starts_with("//") => {
                let base = Url::parse(SCHEME_RELATIVE_BASE)
                    .map_err(|e| UrlError::malformed(trimmed, e))?;
                Url::options()
                    .base_url(Some(&base))
                    .parse(trimmed)
                    .map_err(|e| UrlError::malformed(trimmed, e))?
            }
            Err(e) => return Err(UrlError::malformed(trimmed, e)),
        };
        Self::build(trimmed.to_string(), url)
    }

    /// Wraps an already-parsed `Url`, enforcing the scheme-or-host invariant.
    pub fn from_url(url: Url) -> Result<Self, UrlError> {
        Self::build(url.as_str().to_string(), url)
    }

    /// Like [`from_url`](Self::from_url), but drops the scheme from the
    /// rendered form, as for `//host/path` input.
    pub(crate) fn scheme_relative(url: Url) -> Result<Self, UrlError> {
        let raw = url.as_str();
        let raw = raw
            .strip_prefix(url.scheme())
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(raw)
            .to_string();
        Self::build(raw, url)
    }

    fn build(raw: String, url: Url) -> Result<Self, UrlError> {
        let parts = RawParts::split(&raw);
        if parts.scheme.is_empty() && parts.host.is_empty() {
            return Err(UrlError::malformed(&raw, "invalid url"));
        }
        Ok(Self {
            scheme: parts.scheme.to_ascii_lowercase(),
            host: parts.host.to_string(),
            path: percent_decode_str(parts.path).decode_utf8_lossy().into_owned(),
            raw,
            url,
        })
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }

    /// Lowercased scheme; empty for scheme-relative input.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host as written, including an explicit port (`Example.com:80`).
    /// Empty for host-less URLs such as `mailto:`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Host without port.
    pub fn hostname(&self) -> &str {
        strip_port(&self.host)
    }

    /// Percent-decoded path as written, before dot-segment resolution.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query string without the leading `?`.
    pub fn query(&self) -> &str {
        self.url.query().unwrap_or("")
    }

    /// Decoded `(name, value)` pairs in the order they appear.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Distinct parameter names, in first-appearance order.
    pub fn query_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for (name, _) in self.url.query_pairs() {
            if !names.iter().any(|n| n == name.as_ref()) {
                names.push(name.into_owned());
            }
        }
        names
    }

    pub fn fragment(&self) -> &str {
        self.url.fragment().unwrap_or("")
    }

    /// Labels before the registrable `name.tld` pair, e.g. `api.v2` for
    /// `api.v2.example.com`. Empty when the host has two labels or fewer.
    pub fn subdomain(&self) -> String {
        let parts: Vec<&str> = self.hostname().split('.').collect();
        if parts.len() > 2 {
            parts[..parts.len() - 2].join(".")
        } else {
            String::new()
        }
    }

    /// Last host label. Empty for single-label hosts.
    pub fn tld(&self) -> &str {
        let parts: Vec<&str> = self.hostname().split('.').collect();
        if parts.len() >= 2 {
            parts[parts.len() - 1]
        } else {
            ""
        }
    }
}

/// Scheme, host[:port] and path slices of a URL string, split the way
/// RFC 3986 appendix B does it. Userinfo is dropped from the host.
struct RawParts<'a> {
    scheme: &'a str,
    host: &'a str,
    path: &'a str,
}

impl<'a> RawParts<'a> {
    fn split(s: &'a str) -> Self {
        let (scheme, rest) = match s.find(|c: char| matches!(c, ':' | '/' | '?' | '#')) {
            Some(i) if s.as_bytes()[i] == b':' && is_scheme(&s[..i]) => (&s[..i], &s[i + 1..]),
            _ => ("", s),
        };

        let (host, rest) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find(['/', '?', '#']).unwrap_or(after.len());
                let authority = &after[..end];
                let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
                (host, &after[end..])
            }
            None => ("", rest),
        };

        let path_end = rest.find(['?', '#']).unwrap_or(rest.len());
        Self {
            scheme,
            host,
            path: &rest[..path_end],
        }
    }
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().map_or(false, |c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        return host.find(']').map_or(host, |i| &host[..=i]);
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}

impl FromStr for StructuredUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StructuredUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
