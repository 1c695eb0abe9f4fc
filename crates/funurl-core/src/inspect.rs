//! Component extraction for the `parse` command.
//!
//! Produces a [`Report`]: labelled rows for the selected components plus one
//! row per query value. Rendering is left to the caller.

use std::collections::BTreeSet;

use crate::url_model::StructuredUrl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    Protocol,
    Subdomain,
    Tld,
    Hostname,
    Path,
    Query,
    Fragment,
}

impl Component {
    pub const ALL: [Component; 7] = [
        Component::Protocol,
        Component::Subdomain,
        Component::Tld,
        Component::Hostname,
        Component::Path,
        Component::Query,
        Component::Fragment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Component::Protocol => "Protocol",
            Component::Subdomain => "Subdomain",
            Component::Tld => "TLD",
            Component::Hostname => "Hostname",
            Component::Path => "Path",
            Component::Query => "Query Params",
            Component::Fragment => "Fragments",
        }
    }
}

/// Which components to report. Selecting nothing means everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentSelection(BTreeSet<Component>);

impl ComponentSelection {
    pub fn all() -> Self {
        Self(Component::ALL.into_iter().collect())
    }

    pub fn with(mut self, component: Component, enabled: bool) -> Self {
        if enabled {
            self.0.insert(component);
        }
        self
    }

    pub fn contains(&self, component: Component) -> bool {
        self.0.is_empty() || self.0.contains(&component)
    }
}

impl FromIterator<Component> for ComponentSelection {
    fn from_iter<T: IntoIterator<Item = Component>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// `(label, value)` in [`Component::ALL`] order.
    pub components: Vec<(&'static str, String)>,
    /// `(name, value)` for every query value; empty unless Query is selected.
    pub query: Vec<(String, String)>,
}

/// Extracts the selected components. Blank values are replaced by `missing`.
pub fn inspect(url: &StructuredUrl, selection: &ComponentSelection, missing: &str) -> Report {
    let or_missing = |value: &str| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            missing.to_string()
        } else {
            trimmed.to_string()
        }
    };

    let mut report = Report::default();
    for component in Component::ALL {
        if !selection.contains(component) {
            continue;
        }
        let value = match component {
            Component::Protocol => or_missing(url.scheme()),
            Component::Subdomain => or_missing(&url.subdomain()),
            Component::Tld => or_missing(url.tld()),
            Component::Hostname => or_missing(url.hostname()),
            Component::Path => or_missing(url.path()),
            Component::Query => {
                let names = url.query_names();
                if names.is_empty() {
                    missing.to_string()
                } else {
                    report.query = url
                        .query_pairs()
                        .into_iter()
                        .map(|(k, v)| {
                            let v = or_missing(&v);
                            (k, v)
                        })
                        .collect();
                    format!("{} value", names.len())
                }
            }
            Component::Fragment => or_missing(url.fragment()),
        };
        report.components.push((component.label(), value));
    }
    report
}
